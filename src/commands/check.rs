//! Guess checking command
//!
//! Evaluates a single guess against a chosen solution.

use crate::core::{Feedback, Word, WordError};

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub solution: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `solution`
///
/// Neither word has to be in the candidate list.
///
/// # Errors
///
/// Returns an error if either word is not 5 ASCII letters.
pub fn check_guess(guess: &str, solution: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    let feedback = Feedback::calculate(&guess, &solution);

    Ok(CheckResult {
        guess,
        solution,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    #[test]
    fn check_exact_match() {
        let result = check_guess("Piano", "piano").unwrap();
        assert!(result.feedback.is_solved());
        assert_eq!(result.guess.text(), "piano");
    }

    #[test]
    fn check_partial_match() {
        let result = check_guess("noble", "lemon").unwrap();
        assert_eq!(result.feedback.to_string(), "YY-YY");
        assert_eq!(result.feedback.count(Mark::Correct), 0);
    }

    #[test]
    fn check_invalid_words() {
        assert_eq!(
            check_guess("pian", "piano").err(),
            Some(WordError::InvalidLength(4))
        );
        assert!(check_guess("piano", "pian0").is_err());
    }
}
