//! Core domain types for the guessing game
//!
//! Pure, dependency-light types: validated words and per-letter evaluation.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark, evaluate_guess};
pub use word::{WORD_LENGTH, Word, WordError};
