//! Round state and game rules
//!
//! [`GuessEngine`] owns a round and applies [`Command`]s to it. Presentation
//! layers read its state after every command and never mutate it directly.

mod board;
mod config;
mod engine;
mod state;

pub use board::LetterBoard;
pub use config::GameConfig;
pub use engine::{GuessEngine, MAX_ATTEMPTS};
pub use state::{Command, GameStatus, Row, RowKind};
