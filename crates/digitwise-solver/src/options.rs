//! Unit option sets.
//!
//! A *unit* is a row, a column, or a 3x3 box: any group of nine cells that
//! must contain each digit at most once. The functions here compute, for one
//! unit, the set of digits not yet present among its filled cells — the
//! digits the unit can still receive.
//!
//! All three are pure reads over a [`Board`]; they never mutate anything.

use digitwise_core::{Board, DigitSet, Position};

/// Returns the digits not yet present in `row`.
///
/// # Panics
///
/// Panics if `row` is not in the range 0-8.
#[must_use]
pub fn row_options(board: &Board, row: u8) -> DigitSet {
    let mut options = DigitSet::FULL;
    for col in 0..9 {
        if let Some(digit) = board.cell(Position::new(row, col)) {
            options.remove(digit);
        }
    }
    options
}

/// Returns the digits not yet present in `col`.
///
/// # Panics
///
/// Panics if `col` is not in the range 0-8.
#[must_use]
pub fn col_options(board: &Board, col: u8) -> DigitSet {
    let mut options = DigitSet::FULL;
    for row in 0..9 {
        if let Some(digit) = board.cell(Position::new(row, col)) {
            options.remove(digit);
        }
    }
    options
}

/// Returns the digits not yet present in the 3x3 box `box_index`.
///
/// Takes the box index rather than a member cell's coordinates so that all
/// cells of one box share a single, explicit addressing scheme (see
/// [`Position::box_index`]).
///
/// # Panics
///
/// Panics if `box_index` is not in the range 0-8.
#[must_use]
pub fn box_options(board: &Board, box_index: u8) -> DigitSet {
    let mut options = DigitSet::FULL;
    for pos in Position::box_positions(box_index) {
        if let Some(digit) = board.cell(pos) {
            options.remove(digit);
        }
    }
    options
}
