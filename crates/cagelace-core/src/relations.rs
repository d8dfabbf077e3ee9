//! Precomputed peer relations: row, column, box, and cage.

use crate::{CageLayout, CellIndex, CellSet};

/// Answers, for any cell, which other cells constrain it.
///
/// Two cells are related when they share a row, a column, a 3×3 box, or a
/// cage. The relation is computed once from static geometry plus the cage
/// layout, then served from a lookup table. It is symmetric and excludes the
/// cell itself.
///
/// # Examples
///
/// ```
/// use cagelace_core::{CellIndex, Puzzle, RelationResolver};
///
/// let puzzle = Puzzle::preset();
/// let relations = RelationResolver::new(puzzle.layout());
///
/// let peers = relations.related(CellIndex::new(0));
/// assert!(peers.contains(CellIndex::new(8))); // same row
/// assert!(peers.contains(CellIndex::new(72))); // same column
/// assert!(!peers.contains(CellIndex::new(0))); // never the cell itself
/// ```
#[derive(Debug, Clone)]
pub struct RelationResolver {
    related: Box<[CellSet; 81]>,
}

impl RelationResolver {
    /// Builds the relation table for a cage layout.
    #[must_use]
    pub fn new(layout: &CageLayout) -> Self {
        let mut related = Box::new([CellSet::EMPTY; 81]);
        for cell in CellIndex::ALL {
            for other in CellIndex::ALL {
                if cell != other && cell.shares_house(other) {
                    related[cell.index()].insert(other);
                }
            }
        }
        for (_, cage) in layout.cages() {
            for cell in cage.cells() {
                for other in cage.cells() {
                    if cell != other {
                        related[cell.index()].insert(other);
                    }
                }
            }
        }
        Self { related }
    }

    /// Returns every cell related to `cell`, excluding `cell` itself.
    #[must_use]
    pub fn related(&self, cell: CellIndex) -> CellSet {
        self.related[cell.index()]
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Puzzle;

    use super::*;

    fn preset_relations() -> RelationResolver {
        let puzzle = Puzzle::preset();
        RelationResolver::new(puzzle.layout())
    }

    #[test]
    fn test_row_col_box_membership() {
        let relations = preset_relations();
        let peers = relations.related(CellIndex::new(40)); // center cell, R5C5

        for col in 0..9 {
            if col != 4 {
                assert!(peers.contains(CellIndex::from_row_col(4, col)));
            }
        }
        for row in 0..9 {
            if row != 4 {
                assert!(peers.contains(CellIndex::from_row_col(row, 4)));
            }
        }
        assert!(peers.contains(CellIndex::from_row_col(3, 3))); // same box
        assert!(!peers.contains(CellIndex::new(40)));
    }

    #[test]
    fn test_cage_membership() {
        let puzzle = Puzzle::preset();
        let relations = RelationResolver::new(puzzle.layout());

        // Cells 4 (R1C5) and 15 (R2C7) share a cage in the preset but no
        // row, column, or box
        let a = CellIndex::new(4);
        let b = CellIndex::new(15);
        assert!(!a.shares_house(b));
        assert!(relations.related(a).contains(b));
        assert!(relations.related(b).contains(a));
    }

    proptest! {
        #[test]
        fn prop_relation_is_symmetric(i in 0u8..81, j in 0u8..81) {
            let relations = preset_relations();
            let a = CellIndex::new(i);
            let b = CellIndex::new(j);
            prop_assert_eq!(
                relations.related(a).contains(b),
                relations.related(b).contains(a)
            );
        }

        #[test]
        fn prop_cell_never_relates_to_itself(i in 0u8..81) {
            let relations = preset_relations();
            let cell = CellIndex::new(i);
            prop_assert!(!relations.related(cell).contains(cell));
        }
    }
}
