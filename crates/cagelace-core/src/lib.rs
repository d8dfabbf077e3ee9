//! Core data structures and pure algorithms for Killer Sudoku.
//!
//! This crate provides the value types and stateless computations the game
//! engine builds on. Nothing here mutates play state; the mutable session
//! lives in the `cagelace-game` crate.
//!
//! # Overview
//!
//! 1. **Core types**
//!    - [`digit`]: Type-safe digits 1-9
//!    - [`cell`]: Validated cell indices on the 81-cell board
//! 2. **Set containers**
//!    - [`digit_set`]: 9-bit sets of digits (candidate notes, combinations)
//!    - [`cell_set`]: 81-bit sets of cells (selections, peer sets)
//! 3. **Killer-specific structure**
//!    - [`cage`]: Cages and the validated cage partition of the board
//!    - [`combination`]: Enumeration of cage sum combinations
//!    - [`relations`]: Precomputed row/column/box/cage peer lookup
//! 4. **Puzzle data**
//!    - [`puzzle`]: Serde-friendly descriptors and validated puzzles
//!
//! # Examples
//!
//! ```
//! use cagelace_core::{CellIndex, Puzzle, RelationResolver};
//!
//! let puzzle = Puzzle::preset();
//! let relations = RelationResolver::new(puzzle.layout());
//!
//! // The top-left cell is constrained by its row, column, box, and cage
//! let peers = relations.related(CellIndex::new(0));
//! assert!(peers.len() >= 20);
//! ```

pub mod cage;
pub mod cell;
pub mod cell_set;
pub mod combination;
pub mod digit;
pub mod digit_set;
pub mod puzzle;
pub mod relations;

// Re-export commonly used types
pub use self::{
    cage::{Cage, CageId, CageLayout, LayoutError},
    cell::CellIndex,
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    puzzle::{CageSpec, Puzzle, PuzzleDescriptor, PuzzleError},
    relations::RelationResolver,
};
