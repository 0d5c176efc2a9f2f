//! Per-cell candidate deduction.
//!
//! This is the algorithmic heart of the solver: given one empty cell, it
//! computes the set of digits that cell could legally hold, combining the
//! standard row/column/box elimination with a box-local cross-exclusion
//! step.

use digitwise_core::{Board, DigitSet, Position};

use crate::options;

/// Returns the candidate digits for the cell at `pos`.
///
/// A filled cell has no candidates: the result is [`DigitSet::EMPTY`], a
/// no-op signal rather than an error.
///
/// For an empty cell the result is the intersection of two sets:
///
/// 1. **Direct candidates** — digits missing from the cell's row, column,
///    and box alike (`row_options & col_options & box_options`).
/// 2. **Box-forced digits** — digits that no *other* empty cell in the same
///    box could hold. Each empty co-member of the box contributes the
///    complement of its own direct candidate set; those complements are
///    intersected, starting from [`DigitSet::FULL`] so a box with no other
///    empty cell imposes no restriction.
///
/// A digit surviving both sets is legal here and impossible everywhere else
/// in the box, so it must belong to this cell once the box is filled. This
/// is hidden-single reasoning restricted to box co-members: it can decide a
/// cell whose direct set still has several digits.
///
/// All co-members share the cell's box, so the box option set is computed
/// once and reused for every neighbor.
///
/// # Examples
///
/// ```
/// use digitwise_core::{Board, Digit, DigitSet, Position};
/// use digitwise_solver::deduce;
///
/// // Row 4 determines the lone empty cell by elimination.
/// let board: Board = "
///     123 456 789
///     456 789 123
///     789 123 456
///     231 564 897
///     564 8_7 231
///     897 231 564
///     312 645 978
///     645 978 312
///     978 312 645
/// "
/// .parse()?;
///
/// let candidates = deduce::candidates(&board, Position::new(4, 4));
/// assert_eq!(candidates.single(), Some(Digit::D9));
/// # Ok::<(), digitwise_core::ParseGridError>(())
/// ```
#[must_use]
pub fn candidates(board: &Board, pos: Position) -> DigitSet {
    if board.cell(pos).is_some() {
        return DigitSet::EMPTY;
    }

    let box_index = pos.box_index();
    let box_opts = options::box_options(board, box_index);
    let direct =
        options::row_options(board, pos.row()) & options::col_options(board, pos.col()) & box_opts;

    let mut forced = DigitSet::FULL;
    for neighbor in Position::box_positions(box_index) {
        if neighbor == pos || board.cell(neighbor).is_some() {
            continue;
        }
        let neighbor_direct = options::row_options(board, neighbor.row())
            & options::col_options(board, neighbor.col())
            & box_opts;
        forced &= !neighbor_direct;
    }

    direct & forced
}
