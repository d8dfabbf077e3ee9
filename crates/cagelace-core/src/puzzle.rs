//! Puzzle descriptors and validated puzzle data.
//!
//! A [`PuzzleDescriptor`] is the raw, externally supplied shape (solution
//! digits plus cage list), deserializable from the JSON layout puzzle feeds
//! use. [`PuzzleDescriptor::into_puzzle`] validates it into a [`Puzzle`]
//! whose invariants (digit ranges, cage partition) the engine can rely on.

use serde::{Deserialize, Serialize};

use crate::{Cage, CageLayout, CellIndex, CellSet, Digit, cage::LayoutError};

/// A single cage in a puzzle descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CageSpec {
    /// The sum the member cells must total.
    pub target_sum: u8,
    /// Member cell indices (0-80).
    pub cells: Vec<u8>,
}

/// Raw puzzle data as supplied by a puzzle feed.
///
/// # Examples
///
/// ```
/// use cagelace_core::PuzzleDescriptor;
///
/// let descriptor = PuzzleDescriptor::preset();
/// let puzzle = descriptor.into_puzzle().expect("preset data is valid");
/// assert_eq!(puzzle.layout().cage_count(), 27);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleDescriptor {
    /// The full answer grid, 81 digits in row-major order.
    pub solution: Vec<u8>,
    /// The cage partition.
    pub cages: Vec<CageSpec>,
}

/// The reason a puzzle descriptor was rejected.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum PuzzleError {
    /// The solution does not contain exactly 81 entries.
    #[display("solution has {len} entries, expected 81")]
    SolutionLength {
        /// Number of entries supplied.
        len: usize,
    },
    /// A solution entry is not a digit 1-9.
    #[display("solution entry {index} is {value}, not a digit 1-9")]
    InvalidSolutionDigit {
        /// Index of the offending entry.
        index: usize,
        /// The supplied value.
        value: u8,
    },
    /// A cage references a cell index outside 0-80.
    #[display("cage {cage} references cell {value}, outside 0-80")]
    CellOutOfRange {
        /// Position of the offending cage in the descriptor.
        cage: usize,
        /// The supplied cell index.
        value: u8,
    },
    /// The cage list is not a partition of the board.
    #[display("invalid cage layout: {_0}")]
    #[from]
    Layout(LayoutError),
}

impl PuzzleDescriptor {
    /// Returns the built-in puzzle instance.
    ///
    /// This is real, hand-checked puzzle data (the cage sums match the
    /// solution and the cages partition the board), standing in for a feed
    /// or generator.
    #[must_use]
    pub fn preset() -> Self {
        #[rustfmt::skip]
        let solution = vec![
            7, 6, 5, 9, 4, 1, 8, 3, 2,
            3, 2, 8, 5, 6, 7, 1, 4, 9,
            9, 1, 4, 8, 3, 2, 5, 6, 7,
            6, 7, 9, 3, 2, 8, 4, 1, 5,
            8, 5, 2, 6, 1, 4, 9, 7, 3,
            4, 3, 1, 7, 5, 9, 6, 2, 8,
            5, 9, 3, 4, 7, 6, 2, 8, 1,
            2, 4, 7, 1, 8, 5, 3, 9, 6,
            1, 8, 6, 2, 9, 3, 7, 5, 4,
        ];
        let cages = [
            (13, vec![0, 1]),
            (14, vec![2, 3]),
            (26, vec![4, 12, 13, 14, 15, 22]),
            (9, vec![5, 6]),
            (18, vec![7, 8, 16, 17]),
            (18, vec![9, 18, 27]),
            (11, vec![10, 11, 19]),
            (15, vec![20, 21, 30]),
            (11, vec![23, 24, 33]),
            (28, vec![25, 34, 42, 43, 44, 52]),
            (12, vec![26, 35]),
            (16, vec![28, 29]),
            (15, vec![31, 32, 40, 41]),
            (17, vec![36, 45, 54]),
            (17, vec![37, 46, 55]),
            (8, vec![38, 39]),
            (15, vec![47, 48, 56, 57]),
            (12, vec![49, 58]),
            (17, vec![50, 51, 60]),
            (9, vec![53, 62]),
            (11, vec![59, 68]),
            (20, vec![61, 69, 70]),
            (15, vec![63, 64, 72, 73]),
            (16, vec![65, 66, 67]),
            (10, vec![71, 80]),
            (17, vec![74, 75, 76]),
            (15, vec![77, 78, 79]),
        ]
        .into_iter()
        .map(|(target_sum, cells)| CageSpec { target_sum, cells })
        .collect();
        Self { solution, cages }
    }

    /// Validates the descriptor into a [`Puzzle`].
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] if the solution is not 81 digits 1-9, a
    /// cage references a cell outside the board, or the cages do not
    /// partition the 81 cells.
    pub fn into_puzzle(self) -> Result<Puzzle, PuzzleError> {
        if self.solution.len() != 81 {
            return Err(PuzzleError::SolutionLength {
                len: self.solution.len(),
            });
        }
        let mut solution = [Digit::D1; 81];
        for (index, (&value, slot)) in self.solution.iter().zip(&mut solution).enumerate() {
            *slot = Digit::try_from_value(value)
                .ok_or(PuzzleError::InvalidSolutionDigit { index, value })?;
        }

        let mut cages = Vec::with_capacity(self.cages.len());
        for (i, spec) in self.cages.iter().enumerate() {
            let mut cells = CellSet::new();
            for &value in &spec.cells {
                let cell = CellIndex::try_new(value)
                    .ok_or(PuzzleError::CellOutOfRange { cage: i, value })?;
                cells.insert(cell);
            }
            cages.push(Cage::new(spec.target_sum, cells));
        }
        let layout = CageLayout::from_cages(cages)?;
        Ok(Puzzle { solution, layout })
    }
}

/// Validated puzzle data: the answer grid and the cage partition.
///
/// The solution is an immutable reference grid used only for final
/// validation and check mode; the engine never consults it while assisting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    solution: [Digit; 81],
    layout: CageLayout,
}

impl Puzzle {
    /// Returns the built-in puzzle instance.
    ///
    /// # Panics
    ///
    /// Never panics; the embedded descriptor is valid by construction and
    /// covered by tests.
    #[must_use]
    pub fn preset() -> Self {
        PuzzleDescriptor::preset()
            .into_puzzle()
            .expect("preset descriptor is valid")
    }

    /// Returns the full answer grid.
    #[must_use]
    pub const fn solution(&self) -> &[Digit; 81] {
        &self.solution
    }

    /// Returns the answer digit for a cell.
    #[must_use]
    pub fn solution_at(&self, cell: CellIndex) -> Digit {
        self.solution[cell.index()]
    }

    /// Returns the cage partition.
    #[must_use]
    pub const fn layout(&self) -> &CageLayout {
        &self.layout
    }
}
