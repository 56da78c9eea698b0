//! Guess engine: one round of the game at a time

use super::board::LetterBoard;
use super::config::GameConfig;
use super::state::{Command, GameStatus, Row, RowKind};
use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::wordlists::CandidateList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of guess slots per round
pub const MAX_ATTEMPTS: usize = 6;

/// Owns the round state and applies the rules of the game
///
/// All operations are synchronous. Invalid input (letters after the round
/// ended, a short submission, a non-letter key) is ignored rather than
/// reported; mutating methods return whether anything changed.
///
/// # Examples
/// ```
/// use wordle_game::game::{GameConfig, GameStatus, GuessEngine};
/// use wordle_game::wordlists::CandidateList;
///
/// let list = CandidateList::from_slice(&["lemon"]).unwrap();
/// let mut engine = GuessEngine::new(list, GameConfig::default());
/// engine.start_round(false);
///
/// for ch in "lemon".chars() {
///     engine.append_letter(ch);
/// }
/// engine.submit_guess();
/// assert_eq!(engine.status(), GameStatus::Won);
/// ```
#[derive(Debug)]
pub struct GuessEngine {
    candidates: CandidateList,
    config: GameConfig,
    rng: StdRng,
    solution: Option<Word>,
    previous_solution: Option<Word>,
    guesses: [Option<Word>; MAX_ATTEMPTS],
    current_guess: String,
    status: GameStatus,
}

impl GuessEngine {
    /// Create an engine with no round started
    ///
    /// Input is ignored until [`start_round`](Self::start_round) draws a
    /// solution.
    #[must_use]
    pub fn new(candidates: CandidateList, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            candidates,
            config,
            rng,
            solution: None,
            previous_solution: None,
            guesses: Default::default(),
            current_guess: String::with_capacity(WORD_LENGTH),
            status: GameStatus::InProgress,
        }
    }

    /// Draw a new solution and reset the round
    ///
    /// With `exclude_previous` and more than one candidate, the solution being
    /// replaced is left out of this draw.
    pub fn start_round(&mut self, exclude_previous: bool) {
        let previous = self.solution.take();
        let words = self.candidates.words();

        let mut pool: Vec<&Word> = match &previous {
            Some(prev) if exclude_previous && words.len() > 1 => {
                words.iter().filter(|w| *w != prev).collect()
            }
            _ => words.iter().collect(),
        };
        // A list made only of copies of the previous word
        if pool.is_empty() {
            pool = words.iter().collect();
        }

        let solution = pool[self.rng.random_range(0..pool.len())].clone();
        tracing::debug!(pool = pool.len(), exclude_previous, "round started");

        self.previous_solution = previous;
        self.solution = Some(solution);
        self.guesses = Default::default();
        self.current_guess.clear();
        self.status = GameStatus::InProgress;
    }

    /// Append a letter to the in-progress guess
    pub fn append_letter(&mut self, ch: char) -> bool {
        if !self.accepts_input()
            || !ch.is_ascii_alphabetic()
            || self.current_guess.len() == WORD_LENGTH
        {
            return false;
        }
        self.current_guess.push(ch.to_ascii_lowercase());
        true
    }

    /// Remove the last letter of the in-progress guess
    pub fn delete_letter(&mut self) -> bool {
        self.accepts_input() && self.current_guess.pop().is_some()
    }

    /// Submit the in-progress guess into the next empty slot
    ///
    /// Only a full-length guess is accepted. Sets the status to `Won` on an
    /// exact match, or `Lost` once every slot is filled.
    pub fn submit_guess(&mut self) -> bool {
        if self.status != GameStatus::InProgress || self.current_guess.len() != WORD_LENGTH {
            return false;
        }
        let Some(solution) = &self.solution else {
            return false;
        };
        let Ok(word) = Word::new(self.current_guess.as_str()) else {
            return false;
        };
        let Some(slot) = self.guesses.iter_mut().find(|slot| slot.is_none()) else {
            return false;
        };

        let won = word == *solution;
        tracing::debug!(guess = %word, "guess submitted");
        *slot = Some(word);
        self.current_guess.clear();

        let attempts = self.attempts_used();
        if won {
            self.status = GameStatus::Won;
            tracing::info!(attempts, "round won");
        } else if attempts == MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            tracing::info!(solution = %solution, "round lost");
        }
        true
    }

    /// Dispatch a command from any input source
    ///
    /// `NewRound` honors the configured previous-solution exclusion.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Letter(ch) => self.append_letter(ch),
            Command::Delete => self.delete_letter(),
            Command::Submit => self.submit_guess(),
            Command::NewRound => {
                self.start_round(self.config.exclude_previous);
                true
            }
        }
    }

    fn accepts_input(&self) -> bool {
        self.status == GameStatus::InProgress && self.solution.is_some()
    }

    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        self.solution.as_ref()
    }

    #[must_use]
    pub fn previous_solution(&self) -> Option<&Word> {
        self.previous_solution.as_ref()
    }

    #[must_use]
    pub const fn guesses(&self) -> &[Option<Word>; MAX_ATTEMPTS] {
        &self.guesses
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    /// Number of filled slots
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.guesses.iter().take_while(|slot| slot.is_some()).count()
    }

    /// Feedback for each submitted guess, in order
    #[must_use]
    pub fn feedback(&self) -> Vec<(&Word, Feedback)> {
        let Some(solution) = &self.solution else {
            return Vec::new();
        };
        self.guesses
            .iter()
            .map_while(Option::as_ref)
            .map(|guess| (guess, Feedback::calculate(guess, solution)))
            .collect()
    }

    /// One view per slot
    ///
    /// While the round is in progress the first empty slot is the `Current`
    /// row holding the in-progress letters.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        let current = self.accepts_input().then(|| self.attempts_used());

        self.guesses
            .iter()
            .enumerate()
            .map(|(i, slot)| match (slot, &self.solution) {
                (Some(guess), Some(solution)) => Row {
                    kind: RowKind::Submitted,
                    letters: guess.text().to_string(),
                    feedback: Some(Feedback::calculate(guess, solution)),
                },
                _ if current == Some(i) => Row {
                    kind: RowKind::Current,
                    letters: self.current_guess.clone(),
                    feedback: None,
                },
                _ => Row {
                    kind: RowKind::Empty,
                    letters: String::new(),
                    feedback: None,
                },
            })
            .collect()
    }

    /// Best-known mark per letter over the submitted guesses
    #[must_use]
    pub fn letter_board(&self) -> LetterBoard {
        let mut board = LetterBoard::default();
        for (guess, feedback) in self.feedback() {
            board.record(guess, &feedback);
        }
        board
    }
}
