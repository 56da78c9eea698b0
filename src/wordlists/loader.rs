//! Word list loading utilities
//!
//! Loads candidate lists from plain-text files: one word per line, blank
//! lines and `#` comments ignored.

use super::{CandidateList, WordListError};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load a candidate list from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read,
/// `WordListError::InvalidWord` for the first malformed line, or
/// `WordListError::Empty` if no words remain after filtering.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let list = load_from_file("data/candidates.txt").unwrap();
/// println!("Loaded {} words", list.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CandidateList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let list = parse_word_list(&content)?;
    tracing::debug!(path = %path.display(), words = list.len(), "loaded word list");
    Ok(list)
}

/// Parse word list text into a candidate list
///
/// # Errors
///
/// Same as [`load_from_file`], minus the I/O case.
pub fn parse_word_list(content: &str) -> Result<CandidateList, WordListError> {
    let mut words = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| WordListError::InvalidWord {
            line: i + 1,
            word: trimmed.to_string(),
            source,
        })?;
        words.push(word);
    }

    CandidateList::new(words)
}
