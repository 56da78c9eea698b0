//! Candidate word lists
//!
//! The built-in list is embedded at build time; custom lists are loaded with
//! [`loader::load_from_file`].

mod embedded;
pub mod loader;

pub use embedded::{CANDIDATES, CANDIDATES_COUNT};

use crate::core::{Word, WordError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a candidate list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid word {word:?} on line {line}")]
    InvalidWord {
        line: usize,
        word: String,
        #[source]
        source: WordError,
    },
    #[error("word list is empty")]
    Empty,
}

/// Ordered, non-empty pool of possible solutions
///
/// Every entry is a [`Word`], so all entries share the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    words: Vec<Word>,
}

impl CandidateList {
    /// Build a candidate list from already-validated words
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// The embedded candidate list
    ///
    /// # Panics
    /// Will not panic - the build script rejects an empty or malformed
    /// `data/candidates.txt`, and the tests below check every entry.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_slice(CANDIDATES).expect("embedded candidate list is valid")
    }

    /// Build a candidate list from string slices
    ///
    /// # Errors
    /// Returns `WordListError::InvalidWord` for the first malformed entry
    /// (lines are 1-based), or `WordListError::Empty` for an empty slice.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::CandidateList;
    ///
    /// let list = CandidateList::from_slice(&["apple", "lemon"]).unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert!(CandidateList::from_slice(&["apples"]).is_err());
    /// ```
    pub fn from_slice(slice: &[&str]) -> Result<Self, WordListError> {
        let words = slice
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                Word::new(s).map_err(|source| WordListError::InvalidWord {
                    line: i + 1,
                    word: s.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_count_matches_const() {
        assert_eq!(CANDIDATES.len(), CANDIDATES_COUNT);
        assert_eq!(CANDIDATES_COUNT, 15);
    }

    #[test]
    fn candidates_are_valid_words() {
        for &word in CANDIDATES {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn builtin_list_keeps_order() {
        let list = CandidateList::builtin();
        assert_eq!(list.len(), CANDIDATES_COUNT);
        assert_eq!(list.words()[0].text(), "apple");
        assert_eq!(list.words()[14].text(), "piano");
        assert!(list.contains(&Word::new("mango").unwrap()));
        assert!(!list.is_empty());
    }

    #[test]
    fn empty_list_rejected() {
        assert!(matches!(CandidateList::new(Vec::new()), Err(WordListError::Empty)));
        assert!(matches!(CandidateList::from_slice(&[]), Err(WordListError::Empty)));
    }

    #[test]
    fn invalid_entry_reports_line() {
        let err = CandidateList::from_slice(&["apple", "pear", "lemon"]).unwrap_err();
        match err {
            WordListError::InvalidWord { line, word, source } => {
                assert_eq!(line, 2);
                assert_eq!(word, "pear");
                assert_eq!(source, WordError::InvalidLength(4));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
