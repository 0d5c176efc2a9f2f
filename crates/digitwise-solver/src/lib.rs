//! Elimination-only sudoku solving.
//!
//! This crate deduces the digit for each unfilled cell of a board using pure
//! logical elimination; there is no guessing and no backtracking. The
//! building blocks are:
//!
//! - [`options`]: the set of digits not yet present in a row, column, or box
//! - [`deduce`]: per-cell candidate deduction, combining the three unit
//!   option sets with a box-local cross-exclusion step
//! - [`validate`]: read-only per-unit duplicate checks
//! - [`PropagationSolver`]: the pass loop that repeatedly scans the board
//!   and commits every cell whose candidate set has exactly one member,
//!   until the board is complete or a full pass makes no progress
//!
//! Boards a solver of this kind cannot finish are reported as
//! [`SolveOutcome::Stalled`] rather than treated as errors: stalling is a
//! legitimate terminal state for elimination-only solving.
//!
//! # Examples
//!
//! ```
//! use digitwise_core::Board;
//! use digitwise_solver::PropagationSolver;
//!
//! let mut board: Board = "
//!     _23 456 789
//!     456 789 123
//!     789 123 456
//!     231 564 897
//!     564 897 231
//!     897 231 564
//!     312 645 978
//!     645 978 312
//!     978 312 645
//! "
//! .parse()?;
//!
//! let report = PropagationSolver::new().solve(&mut board)?;
//! assert!(report.outcome().is_solved());
//! assert!(board.is_complete());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::engine::{
    CellSolved, PropagationSolver, SolveError, SolveObserver, SolveOutcome, SolveReport,
};

pub mod deduce;
mod engine;
pub mod options;
pub mod validate;
