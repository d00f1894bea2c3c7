//! Game state and flow

pub mod state;

pub use state::{Battle, BattleState, Outcome};
