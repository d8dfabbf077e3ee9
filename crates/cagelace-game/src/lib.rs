//! Mutable game state and play logic for Killer Sudoku.
//!
//! This crate layers a play session over the pure types in
//! `cagelace-core`: cell values and candidate notes, note propagation on
//! placement, snapshot-based undo, combination strike-outs, selection
//! handling, and win evaluation.
//!
//! # Overview
//!
//! 1. **Board state**
//!    - [`cell_state`]: A single cell (empty, value, or notes)
//!    - [`board`]: The 81-cell grid and the note-propagation rule
//! 2. **Session bookkeeping**
//!    - [`history`]: Bounded undo stack of state snapshots
//!    - [`combo`]: Per-cage combination strike-out flags
//!    - [`selection`]: Drag selection and selection-derived facts
//!    - [`win`]: Completion verdicts and check-mode mismatches
//! 3. **The session**
//!    - [`session`]: [`GameSession`], tying all of the above together
//!
//! # Examples
//!
//! ```
//! use cagelace_core::{CellIndex, Digit, Puzzle};
//! use cagelace_game::GameSession;
//!
//! let mut session = GameSession::new(Puzzle::preset());
//! session.select([CellIndex::new(0)]);
//! session.set_digit(Digit::D7);
//! session.toggle_note(Digit::D3);
//! assert!(session.undo());
//! ```

pub mod board;
pub mod cell_state;
pub mod combo;
pub mod history;
pub mod selection;
pub mod session;
pub mod win;

// Re-export commonly used types
pub use self::{
    board::Board,
    cell_state::CellState,
    combo::{ComboToggles, MAX_DISPLAYED_COMBOS},
    history::History,
    selection::DragSelect,
    session::GameSession,
    win::Verdict,
};

/// How a board edit turned out.
///
/// Every mutating operation reports one of these; `NoOp` is the signal the
/// session uses to discard the snapshot it took before the edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum EditOutcome {
    /// The edit placed or added something.
    Set,
    /// The edit removed or toggled something off.
    Cleared,
    /// Nothing changed.
    NoOp,
}

/// The reason a game operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The cage handle does not belong to this layout.
    #[display("unknown cage")]
    UnknownCage,
    /// The slot does not address a displayed combination.
    #[display("combination slot {slot} out of range")]
    ComboSlotOutOfRange {
        /// The supplied slot.
        slot: usize,
    },
    /// The operation needs a single selected cage cell.
    #[display("no cage selected")]
    NoCageSelected,
}
