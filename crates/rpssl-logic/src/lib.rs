//! Game logic for Rock-Paper-Scissors-Lizard-Spock
//!
//! Simulates many rounds of randomly chosen moves, resolves each round under
//! the beats relation and tallies per-move wins and losses.
//! This crate is compiled to:
//! - Native (for the `rpssl-sim` command line tool)
//! - WASM (for in-browser simulation)

mod moves;
mod random;
mod rules;
mod game;
mod stats;
mod report;
mod simulation;

#[cfg(feature = "wasm")]
mod wasm;

pub use moves::{Move, MoveSet};
pub use random::SeededRng;
pub use rules::{RuleTable, RuleTableError, STANDARD_RULES};
pub use game::{
    find_winner, generate_moves, play_round, random_move, Draw, RoundOutcome, TieReason,
};
pub use stats::Statistics;
pub use report::{win_percentage, MoveSummary, Report};
pub use simulation::{simulate, Simulation, SimulationConfig, SimulationState};
