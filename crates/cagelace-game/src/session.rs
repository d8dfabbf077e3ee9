//! A play session tying the board, history, selection, and win check
//! together.

use cagelace_core::{
    CageId, CageLayout, CellIndex, CellSet, Digit, DigitSet, Puzzle, PuzzleDescriptor, PuzzleError,
    RelationResolver,
};

use crate::{
    Board, CellState, ComboToggles, EditOutcome, GameError, History, Verdict,
    combo::MAX_DISPLAYED_COMBOS,
    selection::{self, DragSelect},
    win,
};

/// Everything undo restores: cells, strike-out flags, and the selection.
#[derive(Debug, Clone)]
struct Snapshot {
    cells: [CellState; 81],
    combos: ComboToggles,
    selection: CellSet,
}

/// A Killer Sudoku play session.
///
/// The session owns all mutable state and maps input intents 1:1 onto
/// engine operations. Every mutating intent snapshots state first, applies
/// the edit in full, lets propagation settle, and only then updates the win
/// verdict; intents that would change nothing push no snapshot and report
/// [`EditOutcome::NoOp`].
///
/// The session renders nothing. A render sink reads the board, selection,
/// calculator value, combination list, and check-mode facts through the
/// read-only accessors after each intent.
///
/// # Examples
///
/// ```
/// use cagelace_core::{CellIndex, Digit, Puzzle};
/// use cagelace_game::GameSession;
///
/// let mut session = GameSession::new(Puzzle::preset());
/// session.select([CellIndex::new(0)]);
/// session.set_digit(Digit::D7);
/// assert_eq!(
///     session.board().cell(CellIndex::new(0)).as_digit(),
///     Some(Digit::D7)
/// );
///
/// assert!(session.undo());
/// assert!(session.board().cell(CellIndex::new(0)).is_empty());
/// ```
#[derive(Debug)]
pub struct GameSession {
    puzzle: Puzzle,
    relations: RelationResolver,
    board: Board,
    combos: ComboToggles,
    selection: CellSet,
    drag: DragSelect,
    history: History<Snapshot>,
    checking: bool,
    elapsed_seconds: u64,
    verdict: Option<Verdict>,
}

impl GameSession {
    /// Creates a session for a validated puzzle with an empty board.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let relations = RelationResolver::new(puzzle.layout());
        let combos = ComboToggles::new(puzzle.layout());
        Self {
            puzzle,
            relations,
            board: Board::new(),
            combos,
            selection: CellSet::new(),
            drag: DragSelect::new(),
            history: History::new(),
            checking: false,
            elapsed_seconds: 0,
            verdict: None,
        }
    }

    /// Creates a session from raw puzzle data.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] when the descriptor fails validation.
    pub fn from_descriptor(descriptor: PuzzleDescriptor) -> Result<Self, PuzzleError> {
        Ok(Self::new(descriptor.into_puzzle()?))
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cage partition.
    #[must_use]
    pub const fn layout(&self) -> &CageLayout {
        self.puzzle.layout()
    }

    /// Returns the peer relation table.
    #[must_use]
    pub const fn relations(&self) -> &RelationResolver {
        &self.relations
    }

    /// Returns the current selection.
    #[must_use]
    pub const fn selection(&self) -> CellSet {
        self.selection
    }

    /// Returns `true` if an undo would succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns `true` while check mode is active.
    #[must_use]
    pub const fn is_checking(&self) -> bool {
        self.checking
    }

    /// Returns the seconds counted so far.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Advances the elapsed-time counter by one second.
    ///
    /// The caller owns the clock; the session only counts. Display
    /// formatting is not the engine's concern.
    pub const fn tick(&mut self) {
        self.elapsed_seconds += 1;
    }

    /// Starts a pointer drag at a cell. Entering a new selection leaves
    /// check mode, as any interaction with the board does.
    pub fn begin_drag(&mut self, cell: CellIndex) {
        self.checking = false;
        self.drag.begin(cell);
    }

    /// Adds a cell swept over while dragging.
    pub fn drag_over(&mut self, cell: CellIndex) {
        self.drag.extend(cell);
    }

    /// Ends the drag, making the swept cells the selection.
    pub fn end_drag(&mut self) {
        self.selection = self.drag.finish();
    }

    /// Replaces the selection directly, bypassing drag tracking.
    pub fn select<I: IntoIterator<Item = CellIndex>>(&mut self, cells: I) {
        self.checking = false;
        self.selection = cells.into_iter().collect();
    }

    /// Returns the cage owning the single selected cell, if the selection
    /// is a singleton inside a cage.
    #[must_use]
    pub fn selected_cage(&self) -> Option<CageId> {
        let cell = self.selection.as_single()?;
        self.layout().cage_of(cell)
    }

    /// Applies a digit to every selected cell (toggle-off on cells already
    /// holding it), then runs propagation and the win check.
    ///
    /// An empty selection is a no-op with [`EditOutcome::NoOp`] as the
    /// signal; no snapshot is taken.
    pub fn set_digit(&mut self, digit: Digit) -> EditOutcome {
        self.checking = false;
        self.mutate(|session| {
            let mut outcome = EditOutcome::NoOp;
            for cell in session.selection {
                let applied = session.board.set_value(cell, digit, &session.relations);
                outcome = combine(outcome, applied);
            }
            outcome
        })
    }

    /// Toggles a candidate note on every selected cell.
    pub fn toggle_note(&mut self, digit: Digit) -> EditOutcome {
        self.checking = false;
        self.mutate(|session| {
            let mut outcome = EditOutcome::NoOp;
            for cell in session.selection {
                let applied = session.board.toggle_note(cell, digit);
                outcome = combine(outcome, applied);
            }
            outcome
        })
    }

    /// Empties every selected cell.
    pub fn delete(&mut self) -> EditOutcome {
        self.mutate(|session| {
            let mut outcome = EditOutcome::NoOp;
            for cell in session.selection {
                let applied = session.board.clear_cell(cell);
                outcome = combine(outcome, applied);
            }
            outcome
        })
    }

    /// Fills each selected cage cell with its cage's full candidate pool.
    ///
    /// Selected cells outside any cage are skipped.
    pub fn fill_cage_notes(&mut self) -> EditOutcome {
        self.mutate(|session| {
            let mut outcome = EditOutcome::NoOp;
            for cell in session.selection {
                let applied = session.board.fill_cage_notes(cell, session.puzzle.layout());
                outcome = combine(outcome, applied);
            }
            outcome
        })
    }

    /// Strikes out (or restores) one displayed combination of the selected
    /// cage, returning the new struck state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoCageSelected`] unless the selection is a
    /// singleton inside a cage, and [`GameError::ComboSlotOutOfRange`] when
    /// `slot` does not address a displayed combination.
    pub fn toggle_combo(&mut self, slot: usize) -> Result<bool, GameError> {
        let cage = self.selected_cage().ok_or(GameError::NoCageSelected)?;
        let shown = self.displayed_combo_count(cage);
        if slot >= shown {
            return Err(GameError::ComboSlotOutOfRange { slot });
        }
        self.snapshot();
        let result = self.combos.toggle(cage, slot);
        if result.is_err() {
            self.history.undo();
        }
        result
    }

    /// Restores the state before the most recent mutating action.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            log::debug!("undo requested with empty history");
            return false;
        };
        self.board.restore(snapshot.cells);
        self.combos = snapshot.combos;
        self.selection = snapshot.selection;
        self.settle_verdict();
        true
    }

    /// Resets the session to a fresh board, clearing history, strike-outs,
    /// selection, check mode, and the timer.
    pub fn restart(&mut self) {
        log::debug!("restarting session");
        self.board = Board::new();
        self.combos.clear();
        self.history.clear();
        self.selection = CellSet::new();
        self.drag = DragSelect::new();
        self.checking = false;
        self.elapsed_seconds = 0;
        self.verdict = None;
    }

    /// Toggles check mode, returning the new state.
    pub const fn toggle_check_mode(&mut self) -> bool {
        self.checking = !self.checking;
        self.checking
    }

    /// Returns the filled cells that differ from the solution, while check
    /// mode is active; the empty set otherwise.
    #[must_use]
    pub fn incorrect_cells(&self) -> CellSet {
        if self.checking {
            win::incorrect_cells(&self.board, self.puzzle.solution())
        } else {
            CellSet::EMPTY
        }
    }

    /// Returns the live calculator value for the current selection.
    ///
    /// A singleton selection shows its cage's target; a multi-cell
    /// selection shows the summed targets when it covers whole cages
    /// exactly, 0 otherwise.
    #[must_use]
    pub fn calculator_value(&self) -> u32 {
        if let Some(cell) = self.selection.as_single() {
            return self
                .layout()
                .cage_of(cell)
                .map_or(0, |id| u32::from(self.layout().cage(id).target_sum()));
        }
        selection::cage_completion_sum(self.selection, self.layout())
    }

    /// Returns the displayed combinations of the selected cage with their
    /// struck-out flags, or an empty list for non-singleton selections.
    #[must_use]
    pub fn displayed_combos(&self) -> Vec<(DigitSet, bool)> {
        let Some(cage) = self.selected_cage() else {
            return Vec::new();
        };
        self.layout()
            .cage(cage)
            .combinations()
            .into_iter()
            .take(MAX_DISPLAYED_COMBOS)
            .enumerate()
            .map(|(slot, combo)| (combo, self.combos.is_struck(cage, slot)))
            .collect()
    }

    /// Returns the other cells sharing the selected cell's value, for a
    /// singleton selection.
    #[must_use]
    pub fn same_value_cells(&self) -> CellSet {
        self.selection
            .as_single()
            .map_or(CellSet::EMPTY, |cell| {
                selection::same_value_cells(&self.board, cell)
            })
    }

    /// Returns the conflict set for the selected cell (both sides marked),
    /// for a singleton selection.
    #[must_use]
    pub fn conflict_cells(&self) -> CellSet {
        self.selection
            .as_single()
            .map_or(CellSet::EMPTY, |cell| {
                selection::conflict_cells(&self.board, &self.relations, cell)
            })
    }

    /// Takes the pending verdict, if a completion attempt just finished.
    ///
    /// The verdict is re-evaluated after every edit that changes cells, so
    /// fixing a wrong digit on a full board (overtyping it) produces a fresh
    /// verdict. Taking consumes it until the next such edit.
    pub const fn take_verdict(&mut self) -> Option<Verdict> {
        self.verdict.take()
    }

    fn displayed_combo_count(&self, cage: CageId) -> usize {
        self.layout()
            .cage(cage)
            .combinations()
            .len()
            .min(MAX_DISPLAYED_COMBOS)
    }

    fn snapshot(&mut self) {
        self.history.push(Snapshot {
            cells: self.board.to_cells(),
            combos: self.combos.clone(),
            selection: self.selection,
        });
    }

    /// Runs a mutating edit under the snapshot-first discipline: the
    /// snapshot is taken before the edit and discarded again when the edit
    /// turns out to change nothing, so undo depth tracks actual changes.
    fn mutate<F>(&mut self, edit: F) -> EditOutcome
    where
        F: FnOnce(&mut Self) -> EditOutcome,
    {
        self.snapshot();
        let outcome = edit(self);
        if outcome.is_no_op() {
            self.history.undo();
        } else {
            self.settle_verdict();
        }
        outcome
    }

    fn settle_verdict(&mut self) {
        self.verdict = if self.board.is_complete() {
            win::evaluate(&self.board, self.puzzle.solution())
        } else {
            None
        };
    }
}

const fn combine(a: EditOutcome, b: EditOutcome) -> EditOutcome {
    match (a, b) {
        (EditOutcome::NoOp, other) | (other, EditOutcome::NoOp) => other,
        (EditOutcome::Set, _) | (_, EditOutcome::Set) => EditOutcome::Set,
        (EditOutcome::Cleared, EditOutcome::Cleared) => EditOutcome::Cleared,
    }
}
