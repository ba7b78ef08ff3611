//! Crossword - CLI
//!
//! Crossword grid with keyboard entry, TUI and CLI modes. Solving a word grows the
//! grid with a crossing word taken from the corpus.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossword_grid::{
    commands::{BenchConfig, run_autoplay, run_bench, run_simple},
    config::PuzzleConfig,
    interaction::Session,
    logging,
    output::{print_autoplay_result, print_bench_result, print_clues, print_grid},
    puzzle::Puzzle,
};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "crossword",
    about = "Crossword grid engine that places crossing words as you solve",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle file (TOML); the embedded default puzzle when omitted
    #[arg(short, long, global = true)]
    puzzle: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Print the grid and clue list
    Show {
        /// Show the solution instead of the (empty) guesses
        #[arg(short, long)]
        reveal: bool,
    },

    /// Solve words automatically and watch the grid grow
    Autoplay {
        /// Maximum number of words to type in
        #[arg(short, long, default_value = "20")]
        rounds: usize,
    },

    /// Run many autoplay sessions over shuffled corpora
    Bench {
        /// Number of sessions
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Base seed for the corpus shuffles
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Maximum words typed per session
        #[arg(short, long, default_value = "100")]
        rounds: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI sets up its own file logger
    if !matches!(command, Commands::Play) {
        logging::init_stderr();
    }

    let puzzle = load_puzzle(cli.puzzle.as_deref())?;

    match command {
        Commands::Play => run_play_command(puzzle),
        Commands::Simple => run_simple(Session::new(puzzle)),
        Commands::Show { reveal } => {
            run_show_command(&puzzle, reveal);
            Ok(())
        }
        Commands::Autoplay { rounds } => {
            let result = run_autoplay(puzzle, rounds);
            print_autoplay_result(&result);
            Ok(())
        }
        Commands::Bench {
            count,
            seed,
            rounds,
        } => {
            run_bench_command(&puzzle, count, seed, rounds);
            Ok(())
        }
    }
}

/// Load the puzzle from `path`, or the embedded default
fn load_puzzle(path: Option<&std::path::Path>) -> Result<Puzzle> {
    let config = match path {
        Some(path) => PuzzleConfig::from_file(path)
            .with_context(|| format!("loading puzzle {}", path.display()))?,
        None => PuzzleConfig::default_puzzle().context("loading embedded puzzle")?,
    };
    let puzzle = config.build().context("building puzzle")?;
    info!(
        dimensions = %puzzle.dimensions(),
        words = puzzle.registry().len(),
        corpus = puzzle.corpus().len(),
        "puzzle ready"
    );
    Ok(puzzle)
}

fn run_show_command(puzzle: &Puzzle, reveal: bool) {
    debug!(occupancy = %puzzle.occupancy().render(), "occupancy");
    print_grid(puzzle, reveal);
    print_clues(puzzle);
}

fn run_bench_command(puzzle: &Puzzle, count: usize, seed: u64, rounds: usize) {
    println!("Running {count} autoplay sessions (seed {seed}, up to {rounds} words each)...");

    let config = BenchConfig {
        count,
        seed,
        rounds,
        show_progress: true,
    };
    let result = run_bench(puzzle, &config);
    print_bench_result(&result);
}

fn run_play_command(puzzle: Puzzle) -> Result<()> {
    use crossword_grid::interactive::{App, run_tui};

    let app = App::new(Session::new(puzzle));
    run_tui(app)
}
