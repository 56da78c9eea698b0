//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use crate::game::{GameStatus, LetterBoard, Row};
use colored::{ColoredString, Colorize};

/// QWERTY layout used by on-screen keyboards
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A single colored tile, e.g. `" A "` on a green background
#[must_use]
pub fn tile(letter: Option<char>, mark: Option<Mark>) -> ColoredString {
    let text = format!(" {} ", letter.map_or('_', |c| c.to_ascii_uppercase()));
    match mark {
        Some(Mark::Correct) => text.black().on_green().bold(),
        Some(Mark::Present) => text.black().on_yellow().bold(),
        Some(Mark::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// All tiles of a row, colored when the row has been evaluated
#[must_use]
pub fn format_row(row: &Row) -> String {
    (0..crate::core::WORD_LENGTH)
        .map(|i| {
            let mark = row.feedback.map(|f| f.marks()[i]);
            tile(row.letter_at(i), mark).to_string()
        })
        .collect()
}

/// Uppercase word followed by its emoji marks, e.g. `APPLA 🟩🟩🟩🟩🟨`
#[must_use]
pub fn feedback_summary(word: &Word, feedback: &Feedback) -> String {
    format!("{} {}", word.text().to_uppercase(), feedback.to_emoji())
}

/// Keyboard lines with each letter colored by its best-known mark
#[must_use]
pub fn format_keyboard(board: &LetterBoard) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|keys| {
            keys.chars()
                .map(|c| tile(Some(c), board.get(c)).to_string())
                .collect::<String>()
        })
        .collect()
}

/// End-of-round message, or `None` while the round is still running
#[must_use]
pub fn round_over_message(status: GameStatus, solution: Option<&Word>) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won => Some("Congratulations! You won!".to_string()),
        GameStatus::Lost => Some(format!(
            "Game Over! The word was {}.",
            solution.map_or("?", Word::text)
        )),
    }
}
