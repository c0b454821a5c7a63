//! Command-line argument definitions for the `vantage` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "A chess engine: search, evaluation, and a UCI front end.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search one position and print the result.
    Play(PlayArgs),
    /// Search a position (or a built-in suite) at a range of depths and
    /// write a CSV report.
    Bench(BenchArgs),
    /// Run the UCI protocol loop over stdin/stdout.
    Uci,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// FEN string, or `startpos`.
    #[arg(long, default_value = "startpos")]
    pub fen: String,
    #[arg(long)]
    pub depth: i16,
    #[arg(long = "time-ms")]
    pub time_ms: u64,
    /// Path to a logistic-regression coefficient file.
    #[arg(long)]
    pub coeff: Option<PathBuf>,
    /// Blend weight for the ML-derived estimate, when `--coeff` loads.
    #[arg(long, default_value_t = vantage_engine::eval::ml::DEFAULT_ALPHA)]
    pub alpha: f64,
}

#[derive(Args, Debug)]
pub struct BenchArgs {
    /// FEN string, `startpos`, or `suite` for the built-in bench suite.
    #[arg(long, default_value = "suite")]
    pub fen: String,
    #[arg(long)]
    pub dmin: i16,
    #[arg(long)]
    pub dmax: i16,
    #[arg(long = "time-ms")]
    pub time_ms: u64,
    #[arg(long)]
    pub coeff: Option<PathBuf>,
    #[arg(long)]
    pub out: PathBuf,
}
