//! Command-line entry point of the engine.
//!
//! Loads the layout and puzzle documents, runs the solver to a terminal
//! outcome and renders the grid after every iteration, so the deduction can
//! be watched unfolding. A stuck puzzle is reported and exits successfully;
//! only configuration problems are process failures.

use clap::Parser;

use sudoku_shapes::board::Board;
use sudoku_shapes::config::{LayoutConfig, PuzzleConfig};
use sudoku_shapes::render::render;
use sudoku_shapes::solver::{Outcome, Solver};

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process;

/// Defines the command-line interface of the solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku-shapes", version,
    about = "Solves shape-partitioned Sudoku puzzles by iterative deduction")]
struct Cli {

    /// Path to the YAML layout document (square_size, shapes,
    /// required_numbers).
    #[arg(long, default_value = "config/config.yaml")]
    config: PathBuf,

    /// Path to the YAML puzzle document (grid).
    #[arg(long, default_value = "config/puzzle.yaml")]
    puzzle: PathBuf,

    /// Only print the final grid and outcome instead of every iteration.
    #[arg(short, long, default_value_t = false)]
    quiet: bool
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let (regions, required) = LayoutConfig::load(&cli.config)?.build()?;
    let grid = PuzzleConfig::load(&cli.puzzle)?.into_grid(regions.size())?;
    let board = Board::new(grid, regions, required).unwrap();
    let mut solver = Solver::new(board);
    let mut stdout = io::stdout();

    let outcome = loop {
        if !cli.quiet {
            render(&mut stdout, &solver)?;
        }

        if let Some(outcome) = solver.step() {
            break outcome;
        }
    };

    render(&mut stdout, &solver)?;

    match outcome {
        Outcome::Solved =>
            println!("solved: filled {} cells in {} iterations",
                solver.found(), solver.iteration()),
        Outcome::Stuck =>
            println!("stuck after {} iterations: filled {} of {} cells, no \
                further deduction possible", solver.iteration(),
                solver.found(), solver.start_missing())
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
