//! Best-known mark per letter, for on-screen keyboards

use crate::core::{Feedback, Mark, Word};

/// Strongest mark seen for each letter a-z across submitted guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterBoard {
    marks: [Option<Mark>; 26],
}

impl LetterBoard {
    /// Fold one evaluated guess into the board
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &mark) in guess.chars().iter().zip(feedback.marks()) {
            let slot = &mut self.marks[usize::from(letter - b'a')];
            *slot = (*slot).max(Some(mark));
        }
    }

    /// Mark for `letter`, or `None` if it has not been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Mark> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let index = (letter.to_ascii_lowercase() as u8) - b'a';
        self.marks[usize::from(index)]
    }
}
