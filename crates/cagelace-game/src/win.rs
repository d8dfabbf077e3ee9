//! Win evaluation against the known solution.

use cagelace_core::{CellIndex, CellSet, Digit};

use crate::Board;

/// The outcome of a completion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Every cell holds a value.
    pub complete: bool,
    /// Every value matches the solution. Only meaningful when `complete`.
    pub correct: bool,
}

/// Evaluates a completion attempt.
///
/// Returns `None` while any cell is empty; a partial board never yields a
/// verdict. Once the board is full, `correct` reports a digit-for-digit
/// match against the solution.
#[must_use]
pub fn evaluate(board: &Board, solution: &[Digit; 81]) -> Option<Verdict> {
    if !board.is_complete() {
        return None;
    }
    let correct = board
        .cells()
        .all(|(cell, state)| state.as_digit() == Some(solution[cell.index()]));
    Some(Verdict {
        complete: true,
        correct,
    })
}

/// Returns the filled cells whose value differs from the solution.
///
/// Empty and note-only cells are never reported; this drives check mode on
/// a partial board.
#[must_use]
pub fn incorrect_cells(board: &Board, solution: &[Digit; 81]) -> CellSet {
    let mut incorrect = CellSet::new();
    for (cell, state) in board.cells() {
        if let Some(digit) = state.as_digit()
            && digit != solution[cell.index()]
        {
            incorrect.insert(cell);
        }
    }
    incorrect
}
