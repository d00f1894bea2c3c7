//! Combat system

pub mod round;

pub use round::{exchange_blows, RoundReport};
