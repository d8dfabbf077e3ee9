//! Cages and the cage partition of the board.

use crate::{CellIndex, CellSet, DigitSet, combination};

/// A stable handle to a cage within a [`CageLayout`].
///
/// Handles are assigned once, in descriptor order, when the layout is built.
/// They stay valid for the lifetime of the layout and are cheap keys for
/// per-cage state held elsewhere (e.g. combination strike-out flags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CageId(u16);

impl CageId {
    /// Returns the position of this cage in the layout's cage list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A cage: a set of cells whose values must sum to a fixed target.
///
/// # Examples
///
/// ```
/// use cagelace_core::{Cage, CellIndex, CellSet};
///
/// let cells = CellSet::from_iter([CellIndex::new(0), CellIndex::new(1)]);
/// let cage = Cage::new(13, cells);
/// assert_eq!(cage.len(), 2);
/// assert_eq!(cage.combinations().len(), 3); // (4,9), (5,8), (6,7)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cage {
    target_sum: u8,
    cells: CellSet,
}

impl Cage {
    /// Creates a cage from a target sum and member cells.
    #[must_use]
    pub const fn new(target_sum: u8, cells: CellSet) -> Self {
        Self { target_sum, cells }
    }

    /// Returns the sum the member cells must total once solved.
    #[must_use]
    pub const fn target_sum(&self) -> u8 {
        self.target_sum
    }

    /// Returns the member cells.
    #[must_use]
    pub const fn cells(&self) -> CellSet {
        self.cells
    }

    /// Returns the number of member cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the cage has no member cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `cell` is a member of this cage.
    #[must_use]
    pub const fn contains(&self, cell: CellIndex) -> bool {
        self.cells.contains(cell)
    }

    /// Enumerates all sum combinations for this cage, in lexicographic order.
    #[must_use]
    pub fn combinations(&self) -> Vec<DigitSet> {
        // a cage never exceeds 9 cells
        #[expect(clippy::cast_possible_truncation)]
        let len = self.len() as u8;
        combination::combinations(self.target_sum, len)
    }

    /// Returns the union of all digits appearing in any combination.
    ///
    /// This is the candidate pool a member cell can draw from when only the
    /// cage constraint is considered.
    #[must_use]
    pub fn combination_digits(&self) -> DigitSet {
        self.combinations()
            .into_iter()
            .fold(DigitSet::EMPTY, DigitSet::union)
    }
}

/// The reason a cage list was rejected as a board partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// A cage has no member cells.
    #[display("cage {cage} has no cells")]
    EmptyCage {
        /// Position of the offending cage in the input list.
        cage: usize,
    },
    /// A cage has more than nine member cells, which no digit assignment can
    /// satisfy.
    #[display("cage {cage} has {len} cells, more than the 9 distinct digits allow")]
    OversizedCage {
        /// Position of the offending cage in the input list.
        cage: usize,
        /// Number of member cells.
        len: usize,
    },
    /// A cell belongs to more than one cage.
    #[display("cell {cell} belongs to more than one cage")]
    OverlappingCell {
        /// The cell claimed twice.
        cell: CellIndex,
    },
    /// A cell belongs to no cage.
    #[display("cell {cell} belongs to no cage")]
    UncoveredCell {
        /// The cell left out of the partition.
        cell: CellIndex,
    },
}

/// The cage partition of the board, with O(1) cell-to-cage lookup.
///
/// Built once from puzzle data; immutable afterwards. Every cell belongs to
/// exactly one cage (enforced at construction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CageLayout {
    cages: Vec<Cage>,
    cell_to_cage: [Option<CageId>; 81],
}

impl CageLayout {
    /// Builds a layout from a cage list, validating that the cages partition
    /// the 81 cells.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if any cage is empty or has more than nine
    /// cells, if two cages share a cell, or if some cell is left uncovered.
    pub fn from_cages(cages: Vec<Cage>) -> Result<Self, LayoutError> {
        let mut cell_to_cage = [None; 81];
        for (i, cage) in cages.iter().enumerate() {
            if cage.is_empty() {
                return Err(LayoutError::EmptyCage { cage: i });
            }
            if cage.len() > 9 {
                return Err(LayoutError::OversizedCage {
                    cage: i,
                    len: cage.len(),
                });
            }
            for cell in cage.cells() {
                let slot = &mut cell_to_cage[cell.index()];
                if slot.is_some() {
                    return Err(LayoutError::OverlappingCell { cell });
                }
                // cages are disjoint and non-empty here, so the id fits u16
                #[expect(clippy::cast_possible_truncation)]
                let id = CageId(i as u16);
                *slot = Some(id);
            }
        }
        for cell in CellIndex::ALL {
            if cell_to_cage[cell.index()].is_none() {
                return Err(LayoutError::UncoveredCell { cell });
            }
        }
        Ok(Self {
            cages,
            cell_to_cage,
        })
    }

    /// Returns the cage with the given handle.
    #[must_use]
    pub fn cage(&self, id: CageId) -> &Cage {
        &self.cages[id.index()]
    }

    /// Returns the handle of the cage owning `cell`.
    ///
    /// The return type is an `Option` so that a layout that failed partition
    /// validation can still be probed in tests; for a validated layout every
    /// cell has an owner.
    #[must_use]
    pub fn cage_of(&self, cell: CellIndex) -> Option<CageId> {
        self.cell_to_cage[cell.index()]
    }

    /// Returns the number of cages.
    #[must_use]
    pub fn cage_count(&self) -> usize {
        self.cages.len()
    }

    /// Returns an iterator over all cages with their handles, in load order.
    pub fn cages(&self) -> impl Iterator<Item = (CageId, &Cage)> {
        self.cages.iter().enumerate().map(|(i, cage)| {
            #[expect(clippy::cast_possible_truncation)]
            let id = CageId(i as u16);
            (id, cage)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::Digit::*;

    use super::*;

    fn cage(target_sum: u8, cells: &[u8]) -> Cage {
        Cage::new(
            target_sum,
            cells.iter().map(|&i| CellIndex::new(i)).collect(),
        )
    }

    /// Nine row-shaped cages, each summing to 45.
    fn row_cages() -> Vec<Cage> {
        (0..9)
            .map(|row| {
                let cells: Vec<u8> = (0..9).map(|col| row * 9 + col).collect();
                cage(45, &cells)
            })
            .collect()
    }

    #[test]
    fn test_combination_digits_pool() {
        let cage = cage(13, &[0, 1]);
        let expected = DigitSet::from_iter([D4, D5, D6, D7, D8, D9]);
        assert_eq!(cage.combination_digits(), expected);
    }

    #[test]
    fn test_valid_partition() {
        let layout = CageLayout::from_cages(row_cages()).expect("rows partition the board");
        assert_eq!(layout.cage_count(), 9);

        let id = layout.cage_of(CellIndex::new(40)).expect("cell 40 covered");
        assert_eq!(layout.cage(id).target_sum(), 45);
        assert!(layout.cage(id).contains(CellIndex::new(36)));

        // Every cell in row 4 resolves to the same cage
        for col in 0..9 {
            let cell = CellIndex::from_row_col(4, col);
            assert_eq!(layout.cage_of(cell), Some(id));
        }
    }

    #[test]
    fn test_rejects_empty_cage() {
        let mut cages = row_cages();
        cages.push(Cage::new(5, CellSet::EMPTY));
        assert_eq!(
            CageLayout::from_cages(cages),
            Err(LayoutError::EmptyCage { cage: 9 })
        );
    }

    #[test]
    fn test_rejects_oversized_cage() {
        let cells: Vec<u8> = (0..10).collect();
        let cages = vec![cage(50, &cells)];
        assert_eq!(
            CageLayout::from_cages(cages),
            Err(LayoutError::OversizedCage { cage: 0, len: 10 })
        );
    }

    #[test]
    fn test_rejects_overlap() {
        let mut cages = row_cages();
        cages.push(cage(3, &[0]));
        assert_eq!(
            CageLayout::from_cages(cages),
            Err(LayoutError::OverlappingCell {
                cell: CellIndex::new(0)
            })
        );
    }

    #[test]
    fn test_rejects_uncovered_cell() {
        let mut cages = row_cages();
        cages.pop();
        assert_eq!(
            CageLayout::from_cages(cages),
            Err(LayoutError::UncoveredCell {
                cell: CellIndex::new(72)
            })
        );
    }

    #[test]
    fn test_cages_iteration_preserves_load_order() {
        let layout = CageLayout::from_cages(row_cages()).unwrap();
        let ids: Vec<_> = layout.cages().map(|(id, _)| id.index()).collect();
        assert_eq!(ids, (0..9).collect::<Vec<_>>());
    }
}
