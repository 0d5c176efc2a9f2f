//! The propagation pass loop.

use digitwise_core::{Board, CellOccupied, Digit, Position};

use crate::{deduce, validate};

/// A single committed deduction: `digit` was placed at `position` during
/// full-board pass `pass` (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSolved {
    /// The cell that was filled.
    pub position: Position,
    /// The digit deduced for it.
    pub digit: Digit,
    /// The pass during which the commitment happened.
    pub pass: u32,
}

/// Receives [`CellSolved`] events synchronously, in commit order.
///
/// The solver calls the observer from inside the scan pass, so observers
/// should return promptly. Any `FnMut(CellSolved)` closure is an observer:
///
/// ```
/// use digitwise_core::Board;
/// use digitwise_solver::{CellSolved, PropagationSolver};
///
/// let mut board = Board::new();
/// let mut trace = Vec::new();
/// let report = PropagationSolver::new()
///     .solve_with_observer(&mut board, &mut |event: CellSolved| trace.push(event))?;
/// assert_eq!(trace, report.placements());
/// # Ok::<(), digitwise_solver::SolveError>(())
/// ```
pub trait SolveObserver {
    /// Called once for every committed cell.
    fn cell_solved(&mut self, event: CellSolved);
}

impl<F: FnMut(CellSolved)> SolveObserver for F {
    fn cell_solved(&mut self, event: CellSolved) {
        self(event);
    }
}

/// Terminal state of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// Every cell is filled.
    Solved,
    /// A full pass committed nothing: the board cannot be advanced by pure
    /// elimination. This is a reported result, not an error.
    Stalled,
}

/// Summary of one solve: terminal outcome, passes run, and every placement
/// in commit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    outcome: SolveOutcome,
    passes: u32,
    placements: Vec<CellSolved>,
}

impl SolveReport {
    /// Returns the terminal outcome.
    #[must_use]
    pub const fn outcome(&self) -> SolveOutcome {
        self.outcome
    }

    /// Returns the number of full-board passes that ran.
    #[must_use]
    pub const fn passes(&self) -> u32 {
        self.passes
    }

    /// Returns every placement in commit order.
    #[must_use]
    pub fn placements(&self) -> &[CellSolved] {
        &self.placements
    }

    /// Returns `true` if the board was completely solved.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.outcome.is_solved()
    }
}

/// Errors that abort a solve before a terminal outcome is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolveError {
    /// The input board already violates a row, column, or box uniqueness
    /// constraint. Detected before anything is committed.
    #[display("board violates a row, column, or box uniqueness constraint")]
    Inconsistent,
    /// A deduction tried to overwrite a filled cell. This cannot happen for
    /// a correct engine and indicates a defect.
    #[from]
    Occupied(CellOccupied),
    /// The configured pass cap was reached before a terminal outcome.
    #[display("no fixed point reached within {limit} passes")]
    PassLimitExceeded {
        /// The cap that was exceeded.
        limit: u32,
    },
}

/// Drives repeated full-board scans until the board is solved or stalls.
///
/// Each pass visits all 81 cells in row-major order and immediately commits
/// every cell whose candidate set (see [`deduce::candidates`]) has exactly
/// one member, so later cells in the same pass observe earlier commits.
/// After a pass the solver is done (board complete), stalled (no commits),
/// or scans again.
///
/// # Examples
///
/// ```
/// use digitwise_core::Board;
/// use digitwise_solver::PropagationSolver;
///
/// let mut board: Board = "
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
/// let report = PropagationSolver::new().solve(&mut board)?;
/// assert!(report.is_solved());
/// assert_eq!(report.passes(), 1);
/// assert_eq!(report.placements().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PropagationSolver {
    pass_limit: u32,
}

impl Default for PropagationSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PropagationSolver {
    /// Default pass cap. A non-terminal pass fills at least one of the 81
    /// cells, so no correct solve can run longer than this.
    pub const DEFAULT_PASS_LIMIT: u32 = 81;

    /// Creates a solver with [`Self::DEFAULT_PASS_LIMIT`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pass_limit: Self::DEFAULT_PASS_LIMIT,
        }
    }

    /// Creates a solver that gives up with [`SolveError::PassLimitExceeded`]
    /// after `limit` passes without a terminal outcome.
    #[must_use]
    pub const fn with_pass_limit(limit: u32) -> Self {
        Self { pass_limit: limit }
    }

    /// Solves `board` in place, collecting placements into the report.
    ///
    /// # Errors
    ///
    /// See [`solve_with_observer`](Self::solve_with_observer).
    pub fn solve(&self, board: &mut Board) -> Result<SolveReport, SolveError> {
        self.solve_with_observer(board, &mut |_: CellSolved| {})
    }

    /// Solves `board` in place, reporting each placement to `observer` as
    /// it is committed.
    ///
    /// The board is mutated even when the solve stalls: every deduction made
    /// up to the stall remains committed.
    ///
    /// # Errors
    ///
    /// - [`SolveError::Inconsistent`] if the input board fails the unit
    ///   validity check; nothing is committed in that case.
    /// - [`SolveError::Occupied`] if a deduction tries to overwrite a filled
    ///   cell (a defect, impossible for consistent input).
    /// - [`SolveError::PassLimitExceeded`] if the configured cap runs out
    ///   before the board is solved or stalls.
    pub fn solve_with_observer<O>(
        &self,
        board: &mut Board,
        observer: &mut O,
    ) -> Result<SolveReport, SolveError>
    where
        O: SolveObserver + ?Sized,
    {
        if !validate::board_is_valid(board) {
            return Err(SolveError::Inconsistent);
        }

        let mut placements = Vec::new();
        let mut passes = 0u32;
        while !board.is_complete() {
            if passes >= self.pass_limit {
                return Err(SolveError::PassLimitExceeded {
                    limit: self.pass_limit,
                });
            }
            passes += 1;

            let mut committed = false;
            for position in Position::ALL {
                if board.cell(position).is_some() {
                    continue;
                }
                if let Some(digit) = deduce::candidates(board, position).single() {
                    board.place(position, digit)?;
                    let event = CellSolved {
                        position,
                        digit,
                        pass: passes,
                    };
                    observer.cell_solved(event);
                    placements.push(event);
                    committed = true;
                }
            }
            debug_assert!(validate::board_is_valid(board));

            if !committed {
                return Ok(SolveReport {
                    outcome: SolveOutcome::Stalled,
                    passes,
                    placements,
                });
            }
        }

        Ok(SolveReport {
            outcome: SolveOutcome::Solved,
            passes,
            placements,
        })
    }
}
