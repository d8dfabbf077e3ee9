//! The mutable 81-cell board and its propagation rule.

use std::collections::VecDeque;

use cagelace_core::{CageLayout, CellIndex, CellSet, Digit, RelationResolver};

use crate::{CellState, EditOutcome};

/// The mutable grid of cell values and candidate notes.
///
/// The board is the single writer of cell state. Edits are total: an
/// operation either applies in full (including any propagation cascade) or
/// reports [`EditOutcome::NoOp`] and changes nothing.
///
/// # Examples
///
/// ```
/// use cagelace_core::{CellIndex, Digit, Puzzle, RelationResolver};
/// use cagelace_game::{Board, CellState};
///
/// let puzzle = Puzzle::preset();
/// let relations = RelationResolver::new(puzzle.layout());
/// let mut board = Board::new();
///
/// board.set_value(CellIndex::new(0), Digit::D7, &relations);
/// assert_eq!(board.cell(CellIndex::new(0)).as_digit(), Some(Digit::D7));
///
/// // Entering the same digit again toggles the cell back to empty
/// board.set_value(CellIndex::new(0), Digit::D7, &relations);
/// assert!(board.cell(CellIndex::new(0)).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [CellState; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [CellState::Empty; 81],
        }
    }

    /// Returns the state of a cell.
    #[must_use]
    pub const fn cell(&self, cell: CellIndex) -> &CellState {
        &self.cells[cell.index()]
    }

    /// Returns an iterator over all cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = (CellIndex, &CellState)> {
        CellIndex::ALL.iter().map(|&cell| (cell, self.cell(cell)))
    }

    /// Returns `true` if every cell holds a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(CellState::is_value)
    }

    /// Returns the raw cell array, for snapshotting.
    #[must_use]
    pub const fn to_cells(&self) -> [CellState; 81] {
        self.cells
    }

    /// Restores the board from a snapshotted cell array.
    pub const fn restore(&mut self, cells: [CellState; 81]) {
        self.cells = cells;
    }

    /// Places a digit, or toggles the cell back to empty when it already
    /// holds that digit.
    ///
    /// Placing discards the cell's notes and runs the propagation rule:
    /// the digit is removed from the notes of every related cell, and any
    /// related cell left with a single note auto-resolves (cascading).
    /// Toggling off does not propagate; nothing new was placed.
    pub fn set_value(
        &mut self,
        cell: CellIndex,
        digit: Digit,
        relations: &RelationResolver,
    ) -> EditOutcome {
        if self.cells[cell.index()] == CellState::Value(digit) {
            self.cells[cell.index()].clear();
            return EditOutcome::Cleared;
        }
        self.cells[cell.index()].set_value(digit);
        self.clear_related_notes(cell, digit, relations);
        EditOutcome::Set
    }

    /// Toggles a candidate note, clearing any placed value first.
    pub fn toggle_note(&mut self, cell: CellIndex, digit: Digit) -> EditOutcome {
        if self.cells[cell.index()].toggle_note(digit) {
            EditOutcome::Set
        } else {
            EditOutcome::Cleared
        }
    }

    /// Empties a cell, discarding its value and notes.
    pub fn clear_cell(&mut self, cell: CellIndex) -> EditOutcome {
        if self.cells[cell.index()].is_empty() {
            return EditOutcome::NoOp;
        }
        self.cells[cell.index()].clear();
        EditOutcome::Cleared
    }

    /// Replaces a cell's notes with the full candidate pool of its cage:
    /// the union of all digits appearing in any sum combination.
    ///
    /// Cells outside any cage are untouched ([`EditOutcome::NoOp`]), as is a
    /// cell whose notes already equal the pool.
    pub fn fill_cage_notes(&mut self, cell: CellIndex, layout: &CageLayout) -> EditOutcome {
        let Some(id) = layout.cage_of(cell) else {
            return EditOutcome::NoOp;
        };
        let pool = layout.cage(id).combination_digits();
        // An infeasible cage has an empty pool, which normalizes to Empty
        let target = if pool.is_empty() {
            CellState::Empty
        } else {
            CellState::Notes(pool)
        };
        if self.cells[cell.index()] == target {
            return EditOutcome::NoOp;
        }
        self.cells[cell.index()] = target;
        EditOutcome::Set
    }

    /// Removes `digit` from the notes of every cell related to `cell`,
    /// auto-resolving cells left with exactly one note.
    ///
    /// Implemented as a worklist rather than recursion: each auto-resolved
    /// cell is enqueued and processed once, tracked in an owned visited set,
    /// so the cascade terminates and is independent of visitation order.
    fn clear_related_notes(
        &mut self,
        cell: CellIndex,
        digit: Digit,
        relations: &RelationResolver,
    ) {
        let mut queue = VecDeque::new();
        let mut resolved = CellSet::new();
        resolved.insert(cell);
        queue.push_back((cell, digit));

        while let Some((from, placed)) = queue.pop_front() {
            for peer in relations.related(from) {
                if !self.cells[peer.index()].remove_note(placed) {
                    continue;
                }
                if resolved.contains(peer) {
                    continue;
                }
                if let Some(sole) = self.cells[peer.index()].notes().as_single() {
                    log::debug!("auto-resolving {peer} to {sole} after {placed} at {from}");
                    self.cells[peer.index()].set_value(sole);
                    resolved.insert(peer);
                    queue.push_back((peer, sole));
                }
            }
        }
    }
}
