//! Example walking through a short play session.
//!
//! This example shows how to:
//! - Load a puzzle descriptor from feed JSON
//! - Select cells and enter values and notes
//! - Read the calculator value and combination list for a cage
//! - Undo and run check mode
//!
//! # Usage
//!
//! ```sh
//! cargo run --example walkthrough
//! ```
//!
//! Propagation decisions are logged at debug level:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example walkthrough
//! ```

use cagelace_core::{CellIndex, Digit, PuzzleDescriptor};
use cagelace_game::GameSession;

fn main() {
    env_logger::init();

    // The preset as it would arrive from a puzzle feed
    let json = serde_json::to_string(&PuzzleDescriptor::preset()).unwrap();
    let descriptor: PuzzleDescriptor = serde_json::from_str(&json).unwrap();
    let mut session = GameSession::from_descriptor(descriptor).unwrap();

    // Inspect the top-left cage
    session.select([CellIndex::new(0)]);
    println!("Cage target: {}", session.calculator_value());
    println!("Combinations:");
    for (combo, struck) in session.displayed_combos() {
        let digits = combo
            .into_iter()
            .map(|digit| digit.to_string())
            .collect::<Vec<_>>()
            .join("+");
        let marker = if struck { " (struck)" } else { "" };
        println!("  {digits}{marker}");
    }
    println!();

    // Pencil the cage's candidate pool, then strike one combination out
    session.fill_cage_notes();
    session.toggle_combo(0).unwrap();

    // Place a few digits; watch the notes propagate with RUST_LOG=debug
    for (index, digit) in [(0, Digit::D7), (1, Digit::D6), (2, Digit::D5)] {
        session.select([CellIndex::new(index)]);
        session.set_digit(digit);
    }
    print_board(&session);

    // Select a whole pair of cages to read their summed targets
    session.select([0, 1, 2, 3].map(CellIndex::new));
    println!("Selected cage sums: {}", session.calculator_value());
    println!();

    // Undo the last placement, then check what is on the board
    session.undo();
    session.toggle_check_mode();
    let incorrect = session.incorrect_cells();
    println!("Cells contradicting the solution: {}", incorrect.len());
    print_board(&session);
}

fn print_board(session: &GameSession) {
    for row in 0..9u8 {
        let line = (0..9u8)
            .map(|col| {
                let state = session.board().cell(CellIndex::from_row_col(row, col));
                state
                    .as_digit()
                    .map_or_else(|| ".".to_owned(), |digit| digit.to_string())
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {line}");
    }
    println!();
}
