//! Command-line front end for the elimination solver.
//!
//! Reads a puzzle grid from a file or standard input, runs the propagation
//! solver, traces each deduced cell as it is committed, and renders the
//! final grid with 3x3 block separators.

use std::{
    error::Error,
    fs,
    io::{self, Read as _},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use digitwise_core::{Board, Position};
use digitwise_solver::{CellSolved, PropagationSolver, SolveOutcome};

/// Solve 9x9 sudoku grids by pure logical elimination.
///
/// The puzzle format is 81 cells in row-major order: digits 1-9 fill cells,
/// while `.`, `_`, and `0` leave them empty. Whitespace is ignored.
#[derive(Parser, Debug)]
#[command(name = "digitwise", version, about)]
struct Cli {
    /// Path to the puzzle file; reads standard input when omitted.
    puzzle: Option<PathBuf>,

    /// Give up after this many full-board passes.
    #[arg(long)]
    max_passes: Option<u32>,

    /// Suppress the per-placement trace.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(SolveOutcome::Solved) => ExitCode::SUCCESS,
        Ok(SolveOutcome::Stalled) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<SolveOutcome, Box<dyn Error>> {
    let text = match &cli.puzzle {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut board: Board = text.parse()?;
    log::info!("parsed puzzle with {} empty cells", board.empty_count());
    println!("{}", render(&board));

    let solver = match cli.max_passes {
        Some(limit) => PropagationSolver::with_pass_limit(limit),
        None => PropagationSolver::new(),
    };

    let quiet = cli.quiet;
    let report = solver.solve_with_observer(&mut board, &mut |event: CellSolved| {
        log::debug!(
            "pass {}: {} = {}",
            event.pass,
            event.position,
            event.digit
        );
        if !quiet {
            println!("pass {}: {} = {}", event.pass, event.position, event.digit);
        }
    })?;

    println!();
    println!("{}", render(&board));
    match report.outcome() {
        SolveOutcome::Solved => {
            println!(
                "solved in {} passes ({} cells deduced)",
                report.passes(),
                report.placements().len()
            );
        }
        SolveOutcome::Stalled => {
            println!(
                "stalled after {} passes ({} cells deduced, {} still empty)",
                report.passes(),
                report.placements().len(),
                board.empty_count()
            );
        }
    }
    Ok(report.outcome())
}

/// Renders the board with 3x3 block separators.
fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..9 {
        if row > 0 {
            out.push('\n');
            if row % 3 == 0 {
                out.push_str("------+-------+------\n");
            }
        }
        for col in 0..9 {
            if col > 0 {
                out.push(' ');
                if col % 3 == 0 {
                    out.push_str("| ");
                }
            }
            match board.cell(Position::new(row, col)) {
                Some(digit) => out.push(char::from(b'0' + digit.value())),
                None => out.push('.'),
            }
        }
    }
    out
}
