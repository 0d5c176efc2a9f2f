//! Core data structures for elimination-based sudoku solving.
//!
//! This crate provides the board-level types shared by the solver and the
//! command-line front end:
//!
//! - [`digit`]: type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: a compact set of digits, used for candidate and
//!   option-set computations
//! - [`position`]: `(row, col)` cell addressing and box derivation
//! - [`board`]: the 9x9 grid of filled-or-empty cells, with text parsing
//!   and formatting
//!
//! # Examples
//!
//! ```
//! use digitwise_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! board.place(Position::new(4, 4), Digit::D5)?;
//!
//! assert_eq!(board.cell(Position::new(4, 4)), Some(Digit::D5));
//! assert_eq!(board.empty_count(), 80);
//! # Ok::<(), digitwise_core::CellOccupied>(())
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod position;

pub use self::{
    board::{Board, CellOccupied, ParseGridError},
    digit::Digit,
    digit_set::DigitSet,
    position::Position,
};
