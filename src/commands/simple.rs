//! Simple line-mode play
//!
//! Text-based rounds without the TUI: one guess per line. The clock advances
//! by the wall time spent between lines.

use crate::core::WORD_LENGTH;
use crate::game::{GameEngine, GameEvent, InputEvent, ScoredGuess};
use crate::output::{print_clock, print_round_result, print_scored_guess, print_statistics};
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// What a line of input asks for
#[derive(Debug, PartialEq, Eq)]
enum LineCommand {
    Quit,
    NewGame,
    Restart,
    Stats,
    Guess(String),
}

fn parse_line(line: &str) -> LineCommand {
    let input = line.trim().to_lowercase();
    match input.as_str() {
        "quit" | "q" | "exit" => LineCommand::Quit,
        "new" | "n" => LineCommand::NewGame,
        "restart" | "r" => LineCommand::Restart,
        "stats" | "s" => LineCommand::Stats,
        _ => LineCommand::Guess(input),
    }
}

/// Run rounds reading guesses from `reader` until EOF or `quit`
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
pub fn run_simple<R: BufRead>(engine: &mut GameEngine, mut reader: R) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║            Wordle Blitz - Line Mode              ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!("Type a {WORD_LENGTH}-letter guess and press Enter.");
    println!(
        "After your opening guess the clock resets; invalid words then cost {}s.",
        engine.config().invalid_penalty_seconds
    );
    println!("Commands: 'new', 'restart', 'stats', 'quit'\n");

    engine.new_game();
    let mut last_tick = Instant::now();

    loop {
        report_events(engine);

        if !engine.is_game_over() {
            print_clock(engine.remaining_seconds(), engine.config().round_seconds);
        }
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = reader.read_line(&mut line).map_err(|e| e.to_string())?;
        if read == 0 {
            break;
        }

        let now = Instant::now();
        engine.tick(now.duration_since(last_tick).as_secs_f64());
        last_tick = now;

        match parse_line(&line) {
            LineCommand::Quit => break,
            LineCommand::NewGame => engine.handle(InputEvent::NewGame),
            LineCommand::Restart => engine.handle(InputEvent::Restart),
            LineCommand::Stats => print_statistics(&engine.stats()),
            LineCommand::Guess(word) => {
                if engine.is_game_over() {
                    report_events(engine);
                    println!("Round over. Type 'new' or 'restart'.");
                    continue;
                }
                submit_word(engine, &word);
            }
        }
    }

    report_events(engine);
    println!("\n👋 Thanks for playing!");
    print_statistics(&engine.stats());
    Ok(())
}

/// Replace whatever is typed in the active row with `word` and submit it
fn submit_word(engine: &mut GameEngine, word: &str) {
    if word.chars().count() != WORD_LENGTH || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        println!("❌ Guesses must be exactly {WORD_LENGTH} letters");
        return;
    }

    while engine.cursor() > 0 {
        engine.handle(InputEvent::Backspace);
    }
    for letter in word.chars() {
        engine.handle(InputEvent::Letter(letter));
    }
    engine.handle(InputEvent::Submit);
}

fn report_events(engine: &mut GameEngine) {
    for event in engine.drain_events() {
        match event {
            GameEvent::GuessScored { word, verdicts, .. } => {
                let guess = ScoredGuess { word, verdicts };
                print_scored_guess(engine.history().len(), &guess);
            }
            GameEvent::InvalidWordShown(true) => {
                if engine.initial_guess_submitted() {
                    println!(
                        "❌ Not in word list (-{}s)",
                        engine.config().invalid_penalty_seconds
                    );
                } else {
                    println!("❌ Not in word list");
                }
            }
            GameEvent::GameWon => {
                print_round_result(true, engine.target(), engine.history());
                print_statistics(&engine.stats());
            }
            GameEvent::GameLost => {
                print_round_result(false, engine.target(), engine.history());
                print_statistics(&engine.stats());
            }
            GameEvent::RoundReset => println!("\n🔄 New round! Clock is running.\n"),
            GameEvent::SlotChanged { .. }
            | GameEvent::InvalidWordShown(false)
            | GameEvent::TimerDisplay(_) => {}
        }
    }
}
