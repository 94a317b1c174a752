//! Load a Flow Free puzzle file and print basic info about it.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use flowboard::{load_puzzle_from_file, parse_raw_puzzle};

#[derive(Parser)]
#[command(name = "show-puzzle")]
#[command(about = "Load a Flow Free puzzle and print basic info", long_about = None)]
struct Cli {
    /// Path to puzzle .txt file
    puzzle_path: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    if !cli.puzzle_path.exists() {
        eprintln!("File not found: {}", cli.puzzle_path.display());
        return Ok(ExitCode::FAILURE);
    }

    let raw = load_puzzle_from_file(&cli.puzzle_path)
        .with_context(|| format!("failed to load {}", cli.puzzle_path.display()))?;
    let name = raw.name.clone();
    let board = parse_raw_puzzle(raw)
        .with_context(|| format!("failed to parse {}", cli.puzzle_path.display()))?;

    println!("Puzzle name: {}", name);
    println!("Board size: {0}x{0}", board.size());
    println!("Grid:");
    println!("{}", board);

    println!("Terminals:");
    for color in board.colors() {
        let coords = board.terminals(color).iter().join(", ");
        println!("  {}: [{}]", color, coords);
    }

    Ok(ExitCode::SUCCESS)
}
