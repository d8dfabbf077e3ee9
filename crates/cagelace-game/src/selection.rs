//! Selection handling and selection-derived facts.
//!
//! This module turns already-decoded pointer intents (begin/extend/finish a
//! drag) into a selected cell set, and computes the pure facts a renderer
//! derives from a selection: the cage-completion calculator value, same-value
//! cells, and conflict cells. No rendering happens here.

use cagelace_core::{CageLayout, CellIndex, CellSet, RelationResolver};

use crate::Board;

/// Accumulates a pointer drag into a selection set.
///
/// A drag that never leaves its starting cell yields a singleton selection;
/// anything else yields a multi-cell selection. Cardinality of the finished
/// set is the only distinction downstream logic needs.
#[derive(Debug, Clone, Default)]
pub struct DragSelect {
    cells: CellSet,
    active: bool,
}

impl DragSelect {
    /// Creates an idle drag tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag at a cell, discarding any previous in-progress drag.
    pub fn begin(&mut self, cell: CellIndex) {
        self.cells = CellSet::new();
        self.cells.insert(cell);
        self.active = true;
    }

    /// Adds a cell swept over while dragging. Ignored when no drag is active.
    pub fn extend(&mut self, cell: CellIndex) {
        if self.active {
            self.cells.insert(cell);
        }
    }

    /// Ends the drag and returns the final selection.
    pub fn finish(&mut self) -> CellSet {
        self.active = false;
        self.cells
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the cells swept so far.
    #[must_use]
    pub const fn cells(&self) -> CellSet {
        self.cells
    }
}

/// Computes the live calculator value for a multi-cell selection.
///
/// When the selection is exactly a union of whole cages (every intersecting
/// cage fully covered, with no leftover cells), the value is the sum of
/// those cages' targets. Any other selection, including the empty one,
/// yields 0.
#[must_use]
pub fn cage_completion_sum(selection: CellSet, layout: &CageLayout) -> u32 {
    if selection.is_empty() {
        return 0;
    }
    let mut covered_cells = 0;
    let mut sum = 0;
    for (_, cage) in layout.cages() {
        if !cage.cells().intersects(selection) {
            continue;
        }
        if selection.is_superset(cage.cells()) {
            covered_cells += cage.len();
            sum += u32::from(cage.target_sum());
        }
    }
    if covered_cells == selection.len() { sum } else { 0 }
}

/// Returns every other cell holding the same value as `cell`.
///
/// Empty and note-only cells never match anything.
#[must_use]
pub fn same_value_cells(board: &Board, cell: CellIndex) -> CellSet {
    let Some(digit) = board.cell(cell).as_digit() else {
        return CellSet::EMPTY;
    };
    let mut matches = CellSet::new();
    for (other, state) in board.cells() {
        if other != cell && state.as_digit() == Some(digit) {
            matches.insert(other);
        }
    }
    matches
}

/// Returns the conflict set for `cell`: related cells sharing its value,
/// plus `cell` itself when any such peer exists.
///
/// Both sides of a conflict are marked so a renderer can highlight the
/// selected cell and each offending peer symmetrically.
#[must_use]
pub fn conflict_cells(board: &Board, relations: &RelationResolver, cell: CellIndex) -> CellSet {
    let Some(digit) = board.cell(cell).as_digit() else {
        return CellSet::EMPTY;
    };
    let mut conflicts = CellSet::new();
    for peer in relations.related(cell) {
        if board.cell(peer).as_digit() == Some(digit) {
            conflicts.insert(peer);
        }
    }
    if !conflicts.is_empty() {
        conflicts.insert(cell);
    }
    conflicts
}
