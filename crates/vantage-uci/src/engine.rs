//! Single-threaded, blocking UCI engine loop.
//!
//! There is no worker thread and no ponder state machine: `go` blocks the
//! reader until `search_root` returns, matching the searcher's cooperative
//! concurrency model (one `Searcher`, one search at a time, no internal
//! parallelism).

use std::io::{self, BufRead};
use std::path::PathBuf;

use chess::Board;
use tracing::warn;
use vantage_engine::{eval::ml::DEFAULT_ALPHA, Searcher};

use crate::command::{parse_command, Command};
use crate::error::UciError;

/// Default depth and time budget for a bare `go` with no parameters.
const DEFAULT_GO_DEPTH: i16 = 6;
const DEFAULT_GO_TIME_MS: u64 = 5_000;

/// The UCI engine: current board, searcher, and coefficient path.
pub struct UciEngine {
    board: Board,
    searcher: Searcher,
    coeff_path: Option<PathBuf>,
}

impl UciEngine {
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            searcher: Searcher::with_handcrafted(),
            coeff_path: None,
        }
    }

    /// Run the UCI loop, reading from stdin until `quit` or EOF.
    pub fn run(mut self) -> Result<(), UciError> {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match parse_command(trimmed) {
                Ok(Command::Uci) => self.handle_uci(),
                Ok(Command::IsReady) => println!("readyok"),
                Ok(Command::UciNewGame) => self.handle_ucinewgame(),
                Ok(Command::Position(board)) => self.board = board,
                Ok(Command::SetCoeffPath(path)) => self.handle_set_coeff_path(path),
                Ok(Command::Go) => self.handle_go(),
                Ok(Command::Quit) => break,
                Ok(Command::Unknown(_)) => {}
                Err(e) => warn!(error = %e, "UCI parse error, line ignored"),
            }
        }
        Ok(())
    }

    fn handle_uci(&self) {
        println!("id name vantage");
        println!("id author vantage contributors");
        println!("uciok");
    }

    fn handle_ucinewgame(&mut self) {
        self.board = Board::default();
        self.searcher.clear_tt();
    }

    fn handle_set_coeff_path(&mut self, path: PathBuf) {
        self.coeff_path = Some(path);
        self.searcher = Searcher::with_blended(self.coeff_path.as_deref(), DEFAULT_ALPHA);
    }

    fn handle_go(&mut self) {
        let (best_move, _score) =
            self.searcher
                .search_root(&self.board, Some(DEFAULT_GO_TIME_MS), DEFAULT_GO_DEPTH);
        match best_move {
            Some(uci) => println!("bestmove {uci}"),
            None => println!("bestmove 0000"),
        }
    }
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn new_engine_starts_at_default_position() {
        let engine = UciEngine::new();
        assert_eq!(engine.board, Board::default());
    }

    #[test]
    fn set_coeff_path_rebuilds_searcher() {
        let mut engine = UciEngine::new();
        engine.handle_set_coeff_path(PathBuf::from("/nonexistent/coeffs.json"));
        assert_eq!(engine.coeff_path, Some(PathBuf::from("/nonexistent/coeffs.json")));
    }

    #[test]
    fn ucinewgame_resets_board() {
        let mut engine = UciEngine::new();
        engine.board =
            Board::from_str("4k3/8/4K3/8/8/8/8/7R w - - 0 1").unwrap();
        engine.handle_ucinewgame();
        assert_eq!(engine.board, Board::default());
    }
}
