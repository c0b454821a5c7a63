//! UCI command parsing.
//!
//! Deliberately minimal: `uci`, `isready`, `ucinewgame`, `position`,
//! `setoption name CoeffPath value <path>`, `go`, `quit`. No `ponder`, no
//! `wtime`/`btime` clock parsing — `go` always runs at a fixed default
//! depth and time budget, per the single-threaded cooperative search model.

use std::path::PathBuf;
use std::str::FromStr;

use chess::{Board, ChessMove};

use crate::error::UciError;

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` — identify the engine.
    Uci,
    /// `isready` — synchronization ping.
    IsReady,
    /// `ucinewgame` — reset engine state.
    UciNewGame,
    /// `position` — set up a board position with optional moves applied.
    Position(Board),
    /// `setoption name CoeffPath value <path>` — point the evaluator at a
    /// logistic-regression coefficient file.
    SetCoeffPath(PathBuf),
    /// `go` — search at the engine's fixed default depth and time budget.
    Go,
    /// `quit` — exit the engine.
    Quit,
    /// Unrecognized command (ignored per the UCI spec).
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(&tokens[1..]),
        "setoption" => parse_setoption(&tokens[1..]),
        "go" => Ok(Command::Go),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports `position startpos [moves e2e4 d7d5 ...]` and
/// `position fen <fen-string> [moves e2e4 d7d5 ...]`.
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    if tokens.is_empty() {
        return Err(UciError::MalformedPosition);
    }

    let (mut board, rest) = if tokens[0] == "startpos" {
        (Board::default(), &tokens[1..])
    } else if tokens[0] == "fen" {
        if tokens.len() < 7 {
            return Err(UciError::InvalidFen { fen: tokens[1..].join(" ") });
        }
        let fen = tokens[1..7].join(" ");
        let board = Board::from_str(&fen).map_err(|_| UciError::InvalidFen { fen: fen.clone() })?;
        (board, &tokens[7..])
    } else {
        return Err(UciError::MalformedPosition);
    };

    if !rest.is_empty() && rest[0] == "moves" {
        for uci_str in &rest[1..] {
            let mv = ChessMove::from_str(uci_str)
                .map_err(|_| UciError::InvalidMove { uci_move: uci_str.to_string() })?;
            board = board.make_move_new(mv);
        }
    }

    Ok(Command::Position(board))
}

/// Parse `setoption name CoeffPath value <path>`. Any other option name is
/// ignored (returned as `Unknown`), per the UCI spec's tolerance for unknown
/// options.
fn parse_setoption(tokens: &[&str]) -> Result<Command, UciError> {
    if tokens.first() != Some(&"name") {
        return Ok(Command::Unknown("setoption".to_string()));
    }
    let value_pos = tokens.iter().position(|&t| t == "value");
    let name_end = value_pos.unwrap_or(tokens.len());
    let name = tokens[1..name_end].join(" ");

    if name != "CoeffPath" {
        return Ok(Command::Unknown(format!("setoption name {name}")));
    }
    let value_pos = value_pos.ok_or(UciError::MissingOptionValue)?;
    if value_pos + 1 >= tokens.len() {
        return Err(UciError::MissingOptionValue);
    }
    let path = tokens[value_pos + 1..].join(" ");
    Ok(Command::SetCoeffPath(PathBuf::from(path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uci() {
        assert!(matches!(parse_command("uci").unwrap(), Command::Uci));
    }

    #[test]
    fn parse_isready() {
        assert!(matches!(parse_command("isready").unwrap(), Command::IsReady));
    }

    #[test]
    fn parse_quit() {
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_position_startpos() {
        assert!(matches!(parse_command("position startpos").unwrap(), Command::Position(_)));
    }

    #[test]
    fn parse_position_startpos_with_moves() {
        let cmd = parse_command("position startpos moves e2e4 e7e5").unwrap();
        assert!(matches!(cmd, Command::Position(_)));
    }

    #[test]
    fn parse_position_fen() {
        let cmd = parse_command(
            "position fen rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        )
        .unwrap();
        assert!(matches!(cmd, Command::Position(_)));
    }

    #[test]
    fn parse_position_missing_keyword() {
        assert!(parse_command("position").is_err());
    }

    #[test]
    fn parse_position_invalid_fen() {
        assert!(parse_command("position fen invalid").is_err());
    }

    #[test]
    fn parse_go() {
        assert!(matches!(parse_command("go").unwrap(), Command::Go));
    }

    #[test]
    fn parse_setoption_coeff_path() {
        let cmd = parse_command("setoption name CoeffPath value /tmp/coeffs.json").unwrap();
        match cmd {
            Command::SetCoeffPath(path) => assert_eq!(path, PathBuf::from("/tmp/coeffs.json")),
            _ => panic!("expected SetCoeffPath"),
        }
    }

    #[test]
    fn parse_setoption_unknown_name_ignored() {
        let cmd = parse_command("setoption name Hash value 64").unwrap();
        assert!(matches!(cmd, Command::Unknown(_)));
    }

    #[test]
    fn parse_setoption_missing_value_errors() {
        assert!(parse_command("setoption name CoeffPath").is_err());
    }

    #[test]
    fn parse_unknown_command() {
        assert!(matches!(parse_command("foobar").unwrap(), Command::Unknown(_)));
    }

    #[test]
    fn parse_empty_line() {
        assert!(matches!(parse_command("").unwrap(), Command::Unknown(_)));
    }
}
