//! A set of board cells, backed by an 81-bit mask.

use std::{
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::CellIndex;

/// A set of cells on the 9×9 board.
///
/// The implementation uses a 128-bit integer where bits 0-80 represent the
/// cells in row-major order. Used for selections, peer sets, and the visited
/// set during constraint propagation. Iteration yields cells in ascending
/// index order.
///
/// # Examples
///
/// ```
/// use cagelace_core::{CellIndex, CellSet};
///
/// let mut selection = CellSet::new();
/// selection.insert(CellIndex::new(0));
/// selection.insert(CellIndex::new(1));
///
/// assert_eq!(selection.len(), 2);
/// assert!(selection.contains(CellIndex::new(0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellSet {
    bits: u128,
}

const MASK: u128 = (1 << 81) - 1;

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all 81 cells.
    pub const FULL: Self = Self { bits: MASK };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns the number of cells in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Inserts a cell into the set.
    pub const fn insert(&mut self, cell: CellIndex) {
        self.bits |= 1 << cell.index();
    }

    /// Removes a cell from the set.
    pub const fn remove(&mut self, cell: CellIndex) {
        self.bits &= !(1 << cell.index());
    }

    /// Returns `true` if the set contains the cell.
    #[must_use]
    pub const fn contains(&self, cell: CellIndex) -> bool {
        self.bits & (1 << cell.index()) != 0
    }

    /// Returns the only cell in the set, or `None` if the set does not
    /// contain exactly one cell.
    #[must_use]
    pub fn as_single(&self) -> Option<CellIndex> {
        if self.bits.count_ones() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Returns `true` if every cell of `other` is also in `self`.
    #[must_use]
    pub const fn is_superset(&self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Returns `true` if the two sets share at least one cell.
    #[must_use]
    pub const fn intersects(&self, other: Self) -> bool {
        self.bits & other.bits != 0
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns an iterator over the cells in ascending index order.
    #[must_use]
    pub fn iter(&self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl BitOr for CellSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for CellSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for CellSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl FromIterator<CellIndex> for CellSet {
    fn from_iter<I: IntoIterator<Item = CellIndex>>(iter: I) -> Self {
        let mut set = Self::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = CellIndex;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &CellSet {
    type Item = CellIndex;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the cells of a [`CellSet`] in ascending index order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u128,
}

impl Iterator for Iter {
    type Item = CellIndex;

    fn next(&mut self) -> Option<CellIndex> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(CellIndex::new(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}
