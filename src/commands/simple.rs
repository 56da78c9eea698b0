//! Simple interactive CLI mode
//!
//! Line-based game without TUI: each line is a whole guess.

use crate::core::Word;
use crate::game::{Command, GuessEngine};
use crate::output::{print_board, print_round_over};
use std::io::{self, Write};

/// What a line of input did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Quit,
    NewRound,
    Submitted,
    RoundOver,
    Invalid(String),
}

/// Apply one line of input to the engine
///
/// `quit`/`q` ends the session, `new`/`n` starts a new round, anything else
/// is treated as a guess and typed into the engine letter by letter.
pub fn handle_line(engine: &mut GuessEngine, line: &str) -> LineOutcome {
    let input = line.trim().to_lowercase();

    match input.as_str() {
        "quit" | "q" | "exit" => return LineOutcome::Quit,
        "new" | "n" | "restart" => {
            engine.apply(Command::NewRound);
            return LineOutcome::NewRound;
        }
        _ => {}
    }

    if engine.status().is_terminal() {
        return LineOutcome::RoundOver;
    }

    if let Err(e) = Word::new(input.as_str()) {
        return LineOutcome::Invalid(e.to_string());
    }

    while engine.apply(Command::Delete) {}
    for ch in input.chars() {
        engine.apply(Command::Letter(ch));
    }

    if engine.apply(Command::Submit) {
        LineOutcome::Submitted
    } else {
        LineOutcome::Invalid("Guess was not accepted".to_string())
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(engine: &mut GuessEngine) -> io::Result<()> {
    println!("\n╔════════════════════════════════════════╗");
    println!("║          Guess the word                ║");
    println!("╚════════════════════════════════════════╝\n");
    println!("Type a 5-letter word and press Enter.");
    println!("Commands: 'new' for a new round, 'quit' to exit\n");

    if engine.solution().is_none() {
        engine.apply(Command::NewRound);
    }
    print_board(engine);

    loop {
        let prompt = format!("Guess {}", engine.attempts_used() + 1);
        let Some(line) = get_user_input(&prompt)? else {
            println!();
            return Ok(());
        };

        match handle_line(engine, &line) {
            LineOutcome::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineOutcome::NewRound => {
                println!("\n🔄 New round started!");
                print_board(engine);
            }
            LineOutcome::Submitted => {
                print_board(engine);
                if engine.status().is_terminal() {
                    print_round_over(engine);
                    println!("Type 'new' to play again or 'quit' to exit.\n");
                }
            }
            LineOutcome::RoundOver => {
                println!("The round is over. Type 'new' to play again or 'quit' to exit.\n");
            }
            LineOutcome::Invalid(reason) => println!("❌ {reason}\n"),
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameStatus, MAX_ATTEMPTS};
    use crate::wordlists::CandidateList;

    fn engine() -> GuessEngine {
        let list = CandidateList::from_slice(&["apple", "lemon"]).unwrap();
        let mut engine = GuessEngine::new(list, GameConfig::default().with_seed(3));
        engine.start_round(false);
        engine
    }

    #[test]
    fn commands_are_recognized() {
        let mut engine = engine();
        assert_eq!(handle_line(&mut engine, " QUIT "), LineOutcome::Quit);
        assert_eq!(handle_line(&mut engine, "q"), LineOutcome::Quit);

        let before = engine.solution().cloned();
        assert_eq!(handle_line(&mut engine, "new"), LineOutcome::NewRound);
        assert_ne!(engine.solution().cloned(), before);
    }

    #[test]
    fn invalid_guesses_do_not_use_attempts() {
        let mut engine = engine();
        assert!(matches!(handle_line(&mut engine, "app"), LineOutcome::Invalid(_)));
        assert!(matches!(handle_line(&mut engine, "app1e"), LineOutcome::Invalid(_)));
        assert!(matches!(handle_line(&mut engine, "apples"), LineOutcome::Invalid(_)));
        assert_eq!(engine.attempts_used(), 0);
        assert_eq!(engine.current_guess(), "");
    }

    #[test]
    fn correct_line_wins() {
        let mut engine = engine();
        let solution = engine.solution().unwrap().text().to_uppercase();

        assert_eq!(handle_line(&mut engine, &solution), LineOutcome::Submitted);
        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(handle_line(&mut engine, "zzzzz"), LineOutcome::RoundOver);
    }

    #[test]
    fn six_misses_lose() {
        let mut engine = engine();
        for _ in 0..MAX_ATTEMPTS {
            assert_eq!(handle_line(&mut engine, "zzzzz"), LineOutcome::Submitted);
        }
        assert_eq!(engine.status(), GameStatus::Lost);
    }
}
