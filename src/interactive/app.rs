//! TUI application state and logic

use crate::game::{Command, GameStatus, GuessEngine, MAX_ATTEMPTS};
use crate::output::formatters::round_over_message;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub engine: GuessEngine,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across rounds in this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = number of guesses used in a won round
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    /// Wrap an engine, starting its first round if none is running
    #[must_use]
    pub fn new(mut engine: GuessEngine) -> Self {
        if engine.solution().is_none() {
            engine.apply(Command::NewRound);
        }

        Self {
            engine,
            messages: vec![Message {
                text: "Guess the word! Type letters, Enter to submit.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Translate a key press into engine commands
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_round(),
            _ if self.engine.status().is_terminal() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_round(),
                _ => {}
            },
            KeyCode::Char(c) => {
                self.engine.apply(Command::Letter(c));
            }
            KeyCode::Backspace => {
                self.engine.apply(Command::Delete);
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        if !self.engine.apply(Command::Submit) {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        let status = self.engine.status();
        if !status.is_terminal() {
            return;
        }

        self.stats.total_games += 1;
        if status == GameStatus::Won {
            self.stats.games_won += 1;
            self.stats.guess_distribution[self.engine.attempts_used()] += 1;
        }

        if let Some(text) = round_over_message(status, self.engine.solution()) {
            let style = if status == GameStatus::Won {
                MessageStyle::Success
            } else {
                MessageStyle::Error
            };
            self.add_message(&text, style);
        }
        self.add_message("Press Enter or 'n' to restart, 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_round(&mut self) {
        self.engine.apply(Command::NewRound);
        self.messages.clear();
        self.add_message("New round started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::CandidateList;

    fn make_app(words: &[&str]) -> App {
        let list = CandidateList::from_slice(words).unwrap();
        App::new(GuessEngine::new(list, GameConfig::default().with_seed(1)))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn new_app_starts_a_round() {
        let app = make_app(&["lemon"]);
        assert_eq!(app.engine.solution().unwrap().text(), "lemon");
        assert_eq!(app.engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn typing_and_backspace() {
        let mut app = make_app(&["lemon"]);
        press(&mut app, KeyCode::Char('L'));
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.engine.current_guess(), "le");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.engine.current_guess(), "l");
    }

    #[test]
    fn short_submit_reports_error() {
        let mut app = make_app(&["lemon"]);
        type_word(&mut app, "lem");

        assert_eq!(app.engine.attempts_used(), 0);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Not enough letters");
    }

    #[test]
    fn winning_updates_stats() {
        let mut app = make_app(&["lemon"]);
        type_word(&mut app, "mango");
        type_word(&mut app, "lemon");

        assert_eq!(app.engine.status(), GameStatus::Won);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Congratulations! You won!")
        );
    }

    #[test]
    fn losing_shows_solution_and_restart() {
        let mut app = make_app(&["lemon", "mango"]);
        let solution = app.engine.solution().unwrap().text().to_string();
        for _ in 0..MAX_ATTEMPTS {
            type_word(&mut app, "zzzzz");
        }

        assert_eq!(app.engine.status(), GameStatus::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == format!("Game Over! The word was {solution}."))
        );

        // Letters are ignored once the round is over; 'n' restarts
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.engine.current_guess(), "");
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.engine.status(), GameStatus::InProgress);
        assert_ne!(app.engine.solution().unwrap().text(), solution);
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_keys() {
        let mut app = make_app(&["lemon"]);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "'q' is a letter while playing");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app2 = make_app(&["lemon"]);
        app2.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app2.should_quit);
    }

    #[test]
    fn ctrl_n_restarts_mid_round() {
        let mut app = make_app(&["lemon", "mango"]);
        press(&mut app, KeyCode::Char('a'));
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert_eq!(app.engine.current_guess(), "");
        assert!(app.engine.previous_solution().is_some());
    }

    #[test]
    fn messages_are_capped() {
        let mut app = make_app(&["lemon"]);
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }

    #[test]
    fn win_rate() {
        let stats = Statistics {
            total_games: 4,
            games_won: 3,
            ..Statistics::default()
        };
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
