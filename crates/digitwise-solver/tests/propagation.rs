//! End-to-end solves through the propagation pass loop.

use digitwise_core::{Board, Digit, Position};
use digitwise_solver::{CellSolved, PropagationSolver, SolveError, SolveOutcome};

// A complete, consistent grid; the puzzles below blank cells out of it so
// every expected deduction is known in advance.
const SOLUTION: &str = "
    123 456 789
    456 789 123
    789 123 456
    231 564 897
    564 897 231
    897 231 564
    312 645 978
    645 978 312
    978 312 645
";

fn solution() -> Board {
    SOLUTION.parse().unwrap()
}

fn blank(cells: &[(u8, u8)]) -> Board {
    let solution = solution();
    let mut board = Board::new();
    for pos in Position::ALL {
        if !cells.contains(&(pos.row(), pos.col())) {
            board.place(pos, solution.cell(pos).unwrap()).unwrap();
        }
    }
    board
}

#[test]
fn single_missing_cell_solves_in_one_pass_with_one_event() {
    let mut board = blank(&[(4, 4)]);
    let report = PropagationSolver::new().solve(&mut board).unwrap();

    assert_eq!(report.outcome(), SolveOutcome::Solved);
    assert_eq!(report.passes(), 1);
    assert_eq!(
        report.placements(),
        [CellSolved {
            position: Position::new(4, 4),
            digit: Digit::D9,
            pass: 1,
        }]
    );
    assert_eq!(board, solution());
}

#[test]
fn one_blank_per_row_and_column_solves_in_one_pass() {
    // The main diagonal leaves exactly one empty cell in every row, so
    // every cell is decided directly; commits land in row-major order.
    let diagonal: Vec<_> = (0..9).map(|i| (i, i)).collect();
    let mut board = blank(&diagonal);
    let report = PropagationSolver::new().solve(&mut board).unwrap();

    assert_eq!(report.outcome(), SolveOutcome::Solved);
    assert_eq!(report.passes(), 1);
    assert_eq!(report.placements().len(), 9);

    let expected_digits = [1, 5, 9, 5, 9, 1, 9, 1, 5].map(Digit::from_value);
    for (i, (event, expected)) in report
        .placements()
        .iter()
        .zip(expected_digits)
        .enumerate()
    {
        #[expect(clippy::cast_possible_truncation)]
        let i = i as u8;
        assert_eq!(event.position, Position::new(i, i));
        assert_eq!(event.digit, expected);
        assert_eq!(event.pass, 1);
    }
    assert_eq!(board, solution());
}

#[test]
fn deferred_cell_is_committed_on_the_second_pass() {
    // (0, 0) is visited first but cannot be decided until its box
    // co-member (2, 1) and row peer (0, 7) have been filled, which happens
    // later in pass 1; pass 2 then finishes the board.
    let mut board = blank(&[(0, 0), (0, 7), (2, 1), (2, 3), (5, 0), (6, 1)]);
    let report = PropagationSolver::new().solve(&mut board).unwrap();

    assert_eq!(report.outcome(), SolveOutcome::Solved);
    assert_eq!(report.passes(), 2);

    let expected = [
        ((0, 7), 8, 1),
        ((2, 1), 8, 1),
        ((2, 3), 1, 1),
        ((5, 0), 8, 1),
        ((6, 1), 1, 1),
        ((0, 0), 1, 2),
    ]
    .map(|((row, col), digit, pass)| CellSolved {
        position: Position::new(row, col),
        digit: Digit::from_value(digit),
        pass,
    });
    assert_eq!(report.placements(), expected);
    assert_eq!(board, solution());
}

#[test]
fn empty_board_stalls_on_pass_one_and_stays_stalled() {
    let mut board = Board::new();
    let solver = PropagationSolver::new();

    let report = solver.solve(&mut board).unwrap();
    assert_eq!(report.outcome(), SolveOutcome::Stalled);
    assert_eq!(report.passes(), 1);
    assert!(report.placements().is_empty());

    // a stalled board is a fixed point: another solve commits nothing
    let again = solver.solve(&mut board).unwrap();
    assert_eq!(again.outcome(), SolveOutcome::Stalled);
    assert!(again.placements().is_empty());
    assert_eq!(board.empty_count(), 81);
}

#[test]
fn duplicate_given_is_refused_before_solving() {
    let mut board = Board::new();
    board.place(Position::new(6, 2), Digit::D3).unwrap();
    board.place(Position::new(6, 6), Digit::D3).unwrap();
    assert!(!digitwise_solver::validate::row_is_valid(&board, 6));

    let err = PropagationSolver::new().solve(&mut board).unwrap_err();
    assert_eq!(err, SolveError::Inconsistent);
    assert_eq!(board.empty_count(), 79);
}

#[test]
fn empty_count_decreases_on_every_pass() {
    let mut board = blank(&[(0, 0), (0, 7), (2, 1), (2, 3), (5, 0), (6, 1)]);
    let before = board.empty_count();

    let mut per_pass = Vec::new();
    let report = PropagationSolver::new()
        .solve_with_observer(&mut board, &mut |event: CellSolved| {
            let pass = event.pass as usize;
            if per_pass.len() < pass {
                per_pass.resize(pass, 0usize);
            }
            per_pass[pass - 1] += 1;
        })
        .unwrap();

    // pass labels are non-decreasing and every executed pass commits
    assert_eq!(per_pass.len(), report.passes() as usize);
    assert!(per_pass.iter().all(|&count| count > 0));
    assert_eq!(per_pass.iter().sum::<usize>(), before - board.empty_count());
    assert!(
        report
            .placements()
            .windows(2)
            .all(|pair| pair[0].pass <= pair[1].pass)
    );
}

#[test]
fn well_known_puzzle_makes_progress_and_stays_consistent() {
    let mut board: Board = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    "
    .parse()
    .unwrap();
    let before = board.empty_count();

    let report = PropagationSolver::new().solve(&mut board).unwrap();

    assert!(!report.placements().is_empty());
    assert!(board.empty_count() < before);
    assert!(digitwise_solver::validate::board_is_valid(&board));
    if report.is_solved() {
        assert!(board.is_complete());
    } else {
        // a stall leaves earlier deductions committed
        assert_eq!(
            board.empty_count(),
            before - report.placements().len()
        );
    }
}
