//! Wordle Game
//!
//! A Wordle-style guessing game: six attempts to find a five-letter word.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{Command, GameConfig, GameStatus, GuessEngine};
//! use wordle_game::wordlists::CandidateList;
//!
//! let mut engine = GuessEngine::new(CandidateList::builtin(), GameConfig::default().with_seed(7));
//! engine.apply(Command::NewRound);
//!
//! for ch in "grape".chars() {
//!     engine.apply(Command::Letter(ch));
//! }
//! engine.apply(Command::Submit);
//!
//! assert_eq!(engine.attempts_used(), 1);
//! assert!(engine.status() != GameStatus::Lost);
//! ```

// Core domain types
pub mod core;

// Round state and rules
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
