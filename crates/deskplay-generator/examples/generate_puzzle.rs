//! Example demonstrating Sudoku puzzle generation.
//!
//! Generates a puzzle and prints its seed, problem, and solution.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a specific puzzle from its printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64 hex chars>
//! ```
//!
//! Control how many cells are blanked (default: 40):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --blanks 50
//! ```

use std::process;

use clap::Parser;
use deskplay_generator::{DEFAULT_BLANK_COUNT, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed reproducing a specific puzzle (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Number of cells to blank out of the 81-cell solution.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_BLANK_COUNT)]
    blanks: usize,
}

fn main() {
    let args = Args::parse();

    if args.blanks > 81 {
        eprintln!("--blanks must be at most 81.");
        process::exit(2);
    }

    let generator = PuzzleGenerator::new().with_blank_count(args.blanks);
    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Problem:");
    for line in puzzle.problem.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Solution:");
    for line in puzzle.solution.to_string().lines() {
        println!("  {line}");
    }
}
