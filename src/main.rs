mod cli;

use std::fmt::Write as _;
use std::fs;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use chess::{Board, ChessMove};
use clap::Parser;
use tracing::info;

use cli::{BenchArgs, Cli, Command, PlayArgs};
use vantage_engine::{EngineError, Searcher};
use vantage_uci::UciEngine;

/// Starting position plus the tactical/stalemate positions exercised in the
/// engine's own test suite — a small, fast default for `bench --fen suite`.
const BENCH_SUITE: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "4k3/8/4K3/8/8/8/8/7R w - - 0 1",
    "7k/5Q2/6K1/8/8/8/8/8 w - - 0 1",
    "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1",
];

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => run_play(args),
        Command::Bench(args) => run_bench(args),
        Command::Uci => {
            info!("vantage starting in UCI mode");
            UciEngine::new().run().context("UCI loop failed")
        }
    }
}

fn parse_fen(fen: &str) -> Result<Board> {
    if fen == "startpos" {
        return Ok(Board::default());
    }
    Board::from_str(fen).map_err(|_| EngineError::InvalidFen(fen.to_string()).into())
}

fn run_play(args: PlayArgs) -> Result<()> {
    let board = parse_fen(&args.fen)?;

    let mut searcher = match &args.coeff {
        Some(path) => Searcher::with_blended(Some(path), args.alpha),
        None => Searcher::with_handcrafted(),
    };

    let (best_move, score) = searcher.search_root(&board, Some(args.time_ms), args.depth);
    let white_cp = if board.side_to_move() == chess::Color::White { score } else { -score };

    println!("fen: {}", board);
    println!("eval (white cp): {white_cp}");
    match best_move {
        Some(uci) => {
            let mv = ChessMove::from_str(&uci)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .context("searcher returned an unparsable move")?;
            println!("best move (uci): {uci}");
            println!("best move (san): {}", vantage_engine::to_san(&board, mv));
        }
        None => {
            println!("best move (uci): none");
            println!("best move (san): none");
        }
    }

    Ok(())
}

fn run_bench(args: BenchArgs) -> Result<()> {
    if args.dmin < 1 || args.dmax < args.dmin {
        bail!("bench requires 1 <= dmin <= dmax, got dmin={} dmax={}", args.dmin, args.dmax);
    }

    let fens: Vec<String> = match args.fen.as_str() {
        "suite" => BENCH_SUITE.iter().map(|s| s.to_string()).collect(),
        "startpos" => vec![Board::default().to_string()],
        fen => {
            parse_fen(fen)?;
            vec![fen.to_string()]
        }
    };

    let mut report = String::from("fen,depth,time_ms,bestmove,score,nodes,nps\n");

    for fen in &fens {
        let board = parse_fen(fen)?;
        let mut searcher = match &args.coeff {
            Some(path) => Searcher::with_blended(Some(path), vantage_engine::eval::ml::DEFAULT_ALPHA),
            None => Searcher::with_handcrafted(),
        };

        for depth in args.dmin..=args.dmax {
            let start = Instant::now();
            let (best_move, score) = searcher.search_root(&board, Some(args.time_ms), depth);
            let elapsed_ms = start.elapsed().as_millis().max(1) as u64;
            let outcome = searcher.last_outcome();
            let nps = outcome.nodes * 1000 / elapsed_ms;

            writeln!(
                report,
                "{},{},{},{},{},{},{}",
                fen,
                depth,
                elapsed_ms,
                best_move.unwrap_or_else(|| "0000".to_string()),
                score,
                outcome.nodes,
                nps,
            )
            .expect("writing to an in-memory String never fails");
        }
    }

    fs::write(&args.out, report).with_context(|| format!("writing bench report to {}", args.out.display()))?;
    Ok(())
}
