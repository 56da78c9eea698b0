//! Per-letter guess evaluation
//!
//! A guess is scored one position at a time:
//! - `Correct` = same letter at the same position
//! - `Present` = letter appears somewhere else in the solution
//! - `Absent` = letter does not appear in the solution
//!
//! `Present` is decided by plain containment. Repeated letters in a guess are
//! not consumed against the solution, so "eerie" against "fence" marks every
//! `e` that is not an exact match as present.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Evaluation of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Emoji tile for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code used in plain output (G, Y, -)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Marks for every position of an evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against `solution`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("appla").unwrap();
    /// let solution = Word::new("apple").unwrap();
    /// let feedback = Feedback::calculate(&guess, &solution);
    ///
    /// assert_eq!(feedback.marks()[3], Mark::Correct);
    /// assert_eq!(feedback.marks()[4], Mark::Present);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];

        for (i, (&letter, &expected)) in guess.chars().iter().zip(solution.chars()).enumerate() {
            marks[i] = if letter == expected {
                Mark::Correct
            } else if solution.has_letter(letter) {
                Mark::Present
            } else {
                Mark::Absent
            };
        }

        Self(marks)
    }

    /// The mark at each position
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count positions with the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}

/// Evaluate `word` against `solution`, returning one mark per position
///
/// Pure function; see [`Feedback::calculate`].
#[must_use]
pub fn evaluate_guess(word: &Word, solution: &Word) -> [Mark; WORD_LENGTH] {
    *Feedback::calculate(word, solution).marks()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Absent, Correct, Present};

    fn eval(guess: &str, solution: &str) -> [Mark; WORD_LENGTH] {
        evaluate_guess(&Word::new(guess).unwrap(), &Word::new(solution).unwrap())
    }

    #[test]
    fn exact_match_is_all_correct() {
        assert_eq!(eval("apple", "apple"), [Correct; 5]);
        let word = Word::new("apple").unwrap();
        assert!(Feedback::calculate(&word, &word).is_solved());
    }

    #[test]
    fn no_common_letters_is_all_absent() {
        assert_eq!(eval("xxxxx", "apple"), [Absent; 5]);
    }

    #[test]
    fn mismatched_letter_found_elsewhere_is_present() {
        // 'a' at the end of "appla" is not at position 4 of "apple" but
        // appears at position 0
        assert_eq!(
            eval("appla", "apple"),
            [Correct, Correct, Correct, Correct, Present]
        );
    }

    #[test]
    fn repeated_letters_use_containment() {
        // "fence" has one 'n'; every misplaced 'n' in the guess is present
        assert_eq!(
            eval("nnnnn", "fence"),
            [Present, Present, Correct, Present, Present]
        );
        assert_eq!(
            eval("eerie", "fence"),
            [Present, Correct, Absent, Absent, Correct]
        );
    }

    #[test]
    fn mixed_marks() {
        assert_eq!(
            eval("grape", "earth"),
            [Absent, Present, Present, Absent, Present]
        );
    }

    #[test]
    fn evaluation_ignores_case() {
        assert_eq!(eval("APPLE", "apple"), [Correct; 5]);
    }

    #[test]
    fn feedback_display_and_emoji() {
        let feedback =
            Feedback::calculate(&Word::new("appla").unwrap(), &Word::new("apple").unwrap());
        assert_eq!(feedback.to_string(), "GGGGY");
        assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟨");
        assert_eq!(feedback.count(Correct), 4);
        assert_eq!(feedback.count(Present), 1);
        assert!(!feedback.is_solved());
    }

    #[test]
    fn mark_ordering_ranks_correct_highest() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }
}
