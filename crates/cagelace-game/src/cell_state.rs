//! State of a single board cell.

use cagelace_core::{Digit, DigitSet};

/// The state of one cell: empty, a placed value, or candidate notes.
///
/// The representation makes the core invariant unexpressible rather than
/// merely checked: a cell can never hold both a value and notes, and a
/// `Notes` cell always has at least one note (removing the last note
/// normalizes back to [`CellState::Empty`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// No value and no notes.
    #[default]
    Empty,
    /// A placed digit.
    Value(Digit),
    /// Candidate notes; never empty.
    Notes(DigitSet),
}

impl CellState {
    /// Returns the placed digit, if any.
    #[must_use]
    pub const fn as_digit(&self) -> Option<Digit> {
        match self {
            Self::Value(digit) => Some(*digit),
            Self::Empty | Self::Notes(_) => None,
        }
    }

    /// Returns the candidate notes, or the empty set for non-note cells.
    #[must_use]
    pub const fn notes(&self) -> DigitSet {
        match self {
            Self::Notes(notes) => *notes,
            Self::Empty | Self::Value(_) => DigitSet::EMPTY,
        }
    }

    /// Replaces this cell with a placed value, discarding any notes.
    pub const fn set_value(&mut self, digit: Digit) {
        *self = Self::Value(digit);
    }

    /// Replaces this cell's notes, discarding any value. An empty set
    /// normalizes to [`CellState::Empty`].
    pub const fn set_notes(&mut self, notes: DigitSet) {
        *self = if notes.is_empty() {
            Self::Empty
        } else {
            Self::Notes(notes)
        };
    }

    /// Empties the cell.
    pub const fn clear(&mut self) {
        *self = Self::Empty;
    }

    /// Toggles membership of `digit` in this cell's notes.
    ///
    /// A value cell is cleared first, so toggling a note on it yields a
    /// single-note cell. Returns `true` if the digit was added.
    pub fn toggle_note(&mut self, digit: Digit) -> bool {
        let mut notes = self.notes();
        let added = if notes.contains(digit) {
            notes.remove(digit);
            false
        } else {
            notes.insert(digit);
            true
        };
        self.set_notes(notes);
        added
    }

    /// Removes `digit` from this cell's notes, if present.
    ///
    /// Returns `true` if a note was removed. Value and empty cells are
    /// untouched.
    pub fn remove_note(&mut self, digit: Digit) -> bool {
        let Self::Notes(notes) = self else {
            return false;
        };
        if !notes.contains(digit) {
            return false;
        }
        let mut notes = *notes;
        notes.remove(digit);
        self.set_notes(notes);
        true
    }
}

#[cfg(test)]
mod tests {
    use cagelace_core::Digit::*;

    use super::*;

    #[test]
    fn test_value_and_notes_are_exclusive() {
        let mut cell = CellState::Empty;
        cell.toggle_note(D3);
        cell.toggle_note(D5);
        assert_eq!(cell.notes(), DigitSet::from_iter([D3, D5]));

        cell.set_value(D7);
        assert_eq!(cell.as_digit(), Some(D7));
        assert!(cell.notes().is_empty());

        // Toggling a note on a value cell clears the value first
        cell.toggle_note(D2);
        assert_eq!(cell.as_digit(), None);
        assert_eq!(cell.notes(), DigitSet::from_iter([D2]));
    }

    #[test]
    fn test_removing_last_note_normalizes_to_empty() {
        let mut cell = CellState::Empty;
        cell.toggle_note(D9);
        assert!(cell.is_notes());

        assert!(cell.remove_note(D9));
        assert_eq!(cell, CellState::Empty);
    }

    #[test]
    fn test_remove_note_reports_change() {
        let mut cell = CellState::Empty;
        assert!(!cell.remove_note(D1));

        cell.set_value(D1);
        assert!(!cell.remove_note(D1));
        assert_eq!(cell.as_digit(), Some(D1));

        cell.set_notes(DigitSet::from_iter([D1, D2]));
        assert!(cell.remove_note(D1));
        assert!(!cell.remove_note(D1));
        assert_eq!(cell.notes(), DigitSet::from_iter([D2]));
    }

    #[test]
    fn test_set_notes_empty_normalizes() {
        let mut cell = CellState::Value(D4);
        cell.set_notes(DigitSet::EMPTY);
        assert_eq!(cell, CellState::Empty);
    }
}
