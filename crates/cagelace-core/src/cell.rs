//! Cell index type for the 9×9 board.

use std::fmt::{self, Display};

/// An index into the 81-cell board, in row-major order.
///
/// Cell 0 is the top-left corner, cell 80 the bottom-right. The type
/// guarantees at construction time that the index is within range, so
/// lookups into 81-element containers never need bounds checks at the
/// call site.
///
/// # Examples
///
/// ```
/// use cagelace_core::CellIndex;
///
/// let cell = CellIndex::new(40);
/// assert_eq!(cell.row(), 4);
/// assert_eq!(cell.col(), 4);
/// assert_eq!(cell.box_index(), 4);
///
/// assert_eq!(CellIndex::try_new(81), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex {
    index: u8,
}

impl CellIndex {
    /// Array containing all 81 cell indices in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { index: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Creates a cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80. Use [`CellIndex::try_new`]
    /// for input that has not been validated yet.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 81, "cell index out of range");
        Self { index }
    }

    /// Creates a cell index, returning `None` when `index` is out of range.
    #[must_use]
    pub const fn try_new(index: u8) -> Option<Self> {
        if index < 81 { Some(Self { index }) } else { None }
    }

    /// Creates a cell index from row and column coordinates (each 0-8).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self {
            index: row * 9 + col,
        }
    }

    /// Returns the raw index (0-80) as a `usize` for container indexing.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.index / 9
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.index % 9
    }

    /// Returns the 3×3 box index (0-8, left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }

    /// Returns `true` if the two cells share a row, column, or 3×3 box.
    ///
    /// Cage membership is not geometry and is layered on top by
    /// [`RelationResolver`](crate::RelationResolver).
    #[must_use]
    pub const fn shares_house(self, other: Self) -> bool {
        self.row() == other.row()
            || self.col() == other.col()
            || self.box_index() == other.box_index()
    }
}

impl Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row() + 1, self.col() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates() {
        let cell = CellIndex::new(0);
        assert_eq!((cell.row(), cell.col(), cell.box_index()), (0, 0, 0));

        let cell = CellIndex::new(80);
        assert_eq!((cell.row(), cell.col(), cell.box_index()), (8, 8, 8));

        let cell = CellIndex::new(13);
        assert_eq!((cell.row(), cell.col(), cell.box_index()), (1, 4, 1));
    }

    #[test]
    fn test_from_row_col_round_trip() {
        for cell in CellIndex::ALL {
            assert_eq!(CellIndex::from_row_col(cell.row(), cell.col()), cell);
        }
    }

    #[test]
    fn test_try_new_bounds() {
        assert_eq!(CellIndex::try_new(0), Some(CellIndex::new(0)));
        assert_eq!(CellIndex::try_new(80), Some(CellIndex::new(80)));
        assert_eq!(CellIndex::try_new(81), None);
    }

    #[test]
    fn test_shares_house() {
        let a = CellIndex::from_row_col(0, 0);
        assert!(a.shares_house(CellIndex::from_row_col(0, 8))); // row
        assert!(a.shares_house(CellIndex::from_row_col(8, 0))); // column
        assert!(a.shares_house(CellIndex::from_row_col(2, 2))); // box
        assert!(!a.shares_house(CellIndex::from_row_col(3, 3)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CellIndex::new(0)), "R1C1");
        assert_eq!(format!("{}", CellIndex::new(80)), "R9C9");
    }

    #[test]
    #[should_panic(expected = "cell index out of range")]
    fn test_new_out_of_range_panics() {
        let _ = CellIndex::new(81);
    }
}
