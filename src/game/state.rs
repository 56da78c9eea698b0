//! Status, commands and per-slot views

use crate::core::Feedback;

/// Outcome of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost end the round; nothing but a new round changes state after
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Input forwarded by a presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Letter(char),
    Delete,
    Submit,
    NewRound,
}

/// What a guess slot currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A submitted guess
    Submitted,
    /// The slot receiving the in-progress guess
    Current,
    /// Not reached yet
    Empty,
}

/// Read-only view of one guess slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    /// Submitted word, in-progress letters, or empty
    pub letters: String,
    /// Present only for submitted rows
    pub feedback: Option<Feedback>,
}

impl Row {
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters.chars().nth(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_won_and_lost_are_terminal() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
        assert_eq!(GameStatus::default(), GameStatus::InProgress);
    }

    #[test]
    fn row_letter_at() {
        let row = Row {
            kind: RowKind::Current,
            letters: "lem".to_string(),
            feedback: None,
        };
        assert_eq!(row.letter_at(0), Some('l'));
        assert_eq!(row.letter_at(2), Some('m'));
        assert_eq!(row.letter_at(3), None);
    }
}
