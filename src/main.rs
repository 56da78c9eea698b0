//! Wordle Game - CLI
//!
//! Guess the word in six tries, in a TUI or in plain line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};
use wordle_game::{
    commands::{check_guess, run_simple},
    game::{GameConfig, GuessEngine},
    output::print_check_result,
    wordlists::{CandidateList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle-style word guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default, 15 words) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for reproducible solution draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Allow the same solution twice in a row
    #[arg(long, global = true)]
    allow_repeats: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the marks a guess would get against a solution
    Check {
        /// The guessed word
        guess: String,

        /// The solution to compare against
        solution: String,
    },
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Load the candidate list based on the -w flag
fn load_candidates(wordlist: &str) -> Result<CandidateList> {
    match wordlist {
        "builtin" => Ok(CandidateList::builtin()),
        path => load_from_file(path).with_context(|| format!("cannot use word list '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            run_play_command(build_engine(&cli.wordlist, cli.seed, cli.allow_repeats)?)
        }
        Commands::Simple => {
            run_simple_command(build_engine(&cli.wordlist, cli.seed, cli.allow_repeats)?)
        }
        Commands::Check { guess, solution } => run_check_command(&guess, &solution),
    }
}

fn build_engine(wordlist: &str, seed: Option<u64>, allow_repeats: bool) -> Result<GuessEngine> {
    let candidates = load_candidates(wordlist)?;
    let config = GameConfig::new(!allow_repeats, seed);
    tracing::info!(
        candidates = candidates.len(),
        exclude_previous = config.exclude_previous,
        "starting game"
    );
    Ok(GuessEngine::new(candidates, config))
}

fn run_check_command(guess: &str, solution: &str) -> Result<()> {
    let result = check_guess(guess, solution).context("invalid word")?;
    print_check_result(&result);
    Ok(())
}

fn run_play_command(engine: GuessEngine) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    run_tui(App::new(engine))
}

fn run_simple_command(mut engine: GuessEngine) -> Result<()> {
    run_simple(&mut engine).context("reading input failed")
}
