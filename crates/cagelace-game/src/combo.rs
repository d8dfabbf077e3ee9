//! Per-cage combination strike-out state.

use cagelace_core::{CageId, CageLayout};

use crate::GameError;

/// Number of combinations shown per cage; strike-out flags cover only these.
pub const MAX_DISPLAYED_COMBOS: usize = 12;

/// Strike-out flags for each cage's displayed combinations.
///
/// Flags are aligned positionally to the first [`MAX_DISPLAYED_COMBOS`]
/// combinations in generation order and are keyed by [`CageId`], the stable
/// handle assigned at layout load. The flags are purely advisory bookkeeping
/// for the solver's benefit; they never influence values or notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboToggles {
    struck: Vec<[bool; MAX_DISPLAYED_COMBOS]>,
}

impl ComboToggles {
    /// Creates cleared flags for every cage in the layout.
    #[must_use]
    pub fn new(layout: &CageLayout) -> Self {
        Self {
            struck: vec![[false; MAX_DISPLAYED_COMBOS]; layout.cage_count()],
        }
    }

    /// Toggles the flag for one combination slot, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownCage`] for a handle from another layout
    /// and [`GameError::ComboSlotOutOfRange`] for a slot at or beyond
    /// [`MAX_DISPLAYED_COMBOS`].
    pub fn toggle(&mut self, cage: CageId, slot: usize) -> Result<bool, GameError> {
        if slot >= MAX_DISPLAYED_COMBOS {
            return Err(GameError::ComboSlotOutOfRange { slot });
        }
        let flags = self
            .struck
            .get_mut(cage.index())
            .ok_or(GameError::UnknownCage)?;
        flags[slot] = !flags[slot];
        Ok(flags[slot])
    }

    /// Returns whether a combination slot is struck out.
    #[must_use]
    pub fn is_struck(&self, cage: CageId, slot: usize) -> bool {
        slot < MAX_DISPLAYED_COMBOS
            && self
                .struck
                .get(cage.index())
                .is_some_and(|flags| flags[slot])
    }

    /// Clears every flag.
    pub fn clear(&mut self) {
        for flags in &mut self.struck {
            *flags = [false; MAX_DISPLAYED_COMBOS];
        }
    }
}

#[cfg(test)]
mod tests {
    use cagelace_core::Puzzle;

    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let puzzle = Puzzle::preset();
        let mut toggles = ComboToggles::new(puzzle.layout());
        let (id, _) = puzzle.layout().cages().next().unwrap();

        assert!(!toggles.is_struck(id, 0));
        assert_eq!(toggles.toggle(id, 0), Ok(true));
        assert!(toggles.is_struck(id, 0));
        assert_eq!(toggles.toggle(id, 0), Ok(false));
        assert!(!toggles.is_struck(id, 0));
    }

    #[test]
    fn test_slots_are_independent() {
        let puzzle = Puzzle::preset();
        let mut toggles = ComboToggles::new(puzzle.layout());
        let mut ids = puzzle.layout().cages().map(|(id, _)| id);
        let first = ids.next().unwrap();
        let second = ids.next().unwrap();

        toggles.toggle(first, 2).unwrap();
        assert!(!toggles.is_struck(first, 1));
        assert!(!toggles.is_struck(second, 2));
    }

    #[test]
    fn test_slot_out_of_range() {
        let puzzle = Puzzle::preset();
        let mut toggles = ComboToggles::new(puzzle.layout());
        let (id, _) = puzzle.layout().cages().next().unwrap();

        assert_eq!(
            toggles.toggle(id, MAX_DISPLAYED_COMBOS),
            Err(GameError::ComboSlotOutOfRange {
                slot: MAX_DISPLAYED_COMBOS
            })
        );
    }

    #[test]
    fn test_clear() {
        let puzzle = Puzzle::preset();
        let mut toggles = ComboToggles::new(puzzle.layout());
        let (id, _) = puzzle.layout().cages().next().unwrap();

        toggles.toggle(id, 3).unwrap();
        toggles.clear();
        assert!(!toggles.is_struck(id, 3));
    }
}
