//! Wordle Blitz - CLI
//!
//! Timed Wordle with a TUI (default) and a line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_blitz::{
    commands::{run_simple, score_words},
    game::{DEFAULT_PENALTY_SECONDS, DEFAULT_ROUND_SECONDS, GameConfig, GameEngine},
    logging,
    output::print_score_result,
    wordlists::{ALLOWED, SOLUTIONS, WordBank, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_blitz",
    about = "Timed Wordle: one opening guess, then race the clock",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Round length in seconds
    #[arg(short, long, global = true, default_value_t = DEFAULT_ROUND_SECONDS)]
    time: f64,

    /// Seconds deducted for an invalid word after the opening guess
    #[arg(short, long, global = true, default_value_t = DEFAULT_PENALTY_SECONDS)]
    penalty: f64,

    /// Accepted-guess word list (one word per line); defaults to the built-in list
    #[arg(short, long, global = true)]
    allowed: Option<PathBuf>,

    /// Target word list (one word per line); defaults to the built-in list
    #[arg(short, long, global = true)]
    solutions: Option<PathBuf>,

    /// Write logs to this file instead of stderr (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode: one guess per line
    Simple,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

/// Read a word list file, or fall back to the embedded list
fn read_word_list(path: Option<&PathBuf>, embedded: &[&str]) -> Result<Vec<String>> {
    match path {
        Some(path) => {
            let text = loader::load_from_file(path)
                .with_context(|| format!("Failed to read word list {}", path.display()))?;
            Ok(loader::parse_word_list(&text))
        }
        None => Ok(embedded.iter().map(|word| (*word).to_string()).collect()),
    }
}

/// Load word lists based on the --allowed / --solutions flags
fn load_word_bank(allowed: Option<&PathBuf>, solutions: Option<&PathBuf>) -> Result<WordBank> {
    if allowed.is_none() && solutions.is_none() {
        return WordBank::embedded().context("Unusable built-in word lists");
    }

    let allowed = read_word_list(allowed, ALLOWED)?;
    let solutions = read_word_list(solutions, SOLUTIONS)?;
    WordBank::new(allowed, solutions).context("Unusable word lists")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref()).context("Failed to set up logging")?;

    let config = GameConfig {
        round_seconds: cli.time,
        invalid_penalty_seconds: cli.penalty,
    };
    config.validate().context("Invalid settings")?;

    let bank = load_word_bank(cli.allowed.as_ref(), cli.solutions.as_ref())?;
    log::info!(
        "loaded {} valid words, {} solutions",
        bank.valid_count(),
        bank.solutions().len()
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(bank, config),
        Commands::Simple => run_simple_command(bank, config),
        Commands::Score { guess, target } => run_score_command(&guess, &target, &bank),
    }
}

fn run_play_command(bank: WordBank, config: GameConfig) -> Result<()> {
    use wordle_blitz::interactive::{App, run_tui};

    let engine = GameEngine::with_config(bank, config);
    run_tui(App::new(engine))
}

fn run_simple_command(bank: WordBank, config: GameConfig) -> Result<()> {
    let mut engine = GameEngine::with_config(bank, config);
    run_simple(&mut engine, io::stdin().lock()).map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(guess: &str, target: &str, bank: &WordBank) -> Result<()> {
    let result = score_words(guess, target, bank).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}
