//! Terminal input/output

pub mod prompt;

pub use prompt::{read_hit_points, wait_for_quit, PromptError};
