//! Display functions for command results

use super::formatters::{feedback_summary, format_keyboard, format_row, round_over_message};
use crate::commands::CheckResult;
use crate::game::{GameStatus, GuessEngine, Row, RowKind};
use colored::Colorize;

/// Print the result of checking one guess
pub fn print_check_result(result: &CheckResult) {
    let row = Row {
        kind: RowKind::Submitted,
        letters: result.guess.text().to_string(),
        feedback: Some(result.feedback),
    };

    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Checking {} against {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.solution.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", format_row(&row));
    println!("  {}", feedback_summary(&result.guess, &result.feedback));
    println!("  {}\n", result.feedback);
}

/// Print every slot plus the keyboard
pub fn print_board(engine: &GuessEngine) {
    println!();
    for row in engine.rows() {
        println!("  {}", format_row(&row));
    }
    println!();
    for (indent, line) in format_keyboard(&engine.letter_board()).iter().enumerate() {
        println!("  {}{line}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print the end-of-round banner and guess history
pub fn print_round_over(engine: &GuessEngine) {
    let Some(message) = round_over_message(engine.status(), engine.solution()) else {
        return;
    };

    println!("{}", "═".repeat(40).bright_cyan());
    if engine.status() == GameStatus::Won {
        println!("  {}", message.bright_green().bold());
    } else {
        println!("  {}", message.bright_red().bold());
    }
    for (i, (word, feedback)) in engine.feedback().iter().enumerate() {
        println!(
            "    {}. {}",
            (i + 1).to_string().bright_black(),
            feedback_summary(word, feedback)
        );
    }
    println!("{}", "═".repeat(40).bright_cyan());
}
