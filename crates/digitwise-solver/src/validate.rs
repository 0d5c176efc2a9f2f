//! Read-only unit validity checks.
//!
//! A unit (row, column, or 3x3 box) is valid when no digit appears twice
//! among its filled cells. These checks verify the solver's input
//! precondition and back test assertions; the pass loop itself never needs
//! them to make deductions.

use digitwise_core::{Board, Digit, DigitSet, Position};

fn unit_is_valid<I>(cells: I) -> bool
where
    I: IntoIterator<Item = Option<Digit>>,
{
    let mut seen = DigitSet::EMPTY;
    for cell in cells {
        if let Some(digit) = cell {
            if seen.contains(digit) {
                return false;
            }
            seen.insert(digit);
        }
    }
    true
}

/// Returns `true` if no digit appears twice among the filled cells of `row`.
///
/// # Panics
///
/// Panics if `row` is not in the range 0-8.
#[must_use]
pub fn row_is_valid(board: &Board, row: u8) -> bool {
    unit_is_valid((0..9).map(|col| board.cell(Position::new(row, col))))
}

/// Returns `true` if no digit appears twice among the filled cells of `col`.
///
/// # Panics
///
/// Panics if `col` is not in the range 0-8.
#[must_use]
pub fn col_is_valid(board: &Board, col: u8) -> bool {
    unit_is_valid((0..9).map(|row| board.cell(Position::new(row, col))))
}

/// Returns `true` if no digit appears twice among the filled cells of the
/// 3x3 box `box_index`.
///
/// # Panics
///
/// Panics if `box_index` is not in the range 0-8.
#[must_use]
pub fn box_is_valid(board: &Board, box_index: u8) -> bool {
    unit_is_valid(Position::box_positions(box_index).map(|pos| board.cell(pos)))
}

/// Returns `true` if all 27 units of the board are valid.
#[must_use]
pub fn board_is_valid(board: &Board) -> bool {
    (0..9).all(|i| row_is_valid(board, i) && col_is_valid(board, i) && box_is_valid(board, i))
}
