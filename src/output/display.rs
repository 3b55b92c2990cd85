//! Colored printing for line-mode play

use super::formatters::{create_progress_bar, format_clock, share_grid, verdicts_to_emoji};
use crate::commands::ScoreResult;
use crate::core::Verdict;
use crate::game::{ScoredGuess, Statistics};
use colored::{ColoredString, Colorize};

fn colored_letter(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::WrongSpot => text.black().on_yellow().bold(),
        Verdict::Incorrect => text.white().on_bright_black(),
        Verdict::Empty | Verdict::Occupied => text.normal(),
    }
}

/// Print a scored guess as colored tiles
pub fn print_scored_guess(turn: usize, guess: &ScoredGuess) {
    let tiles: Vec<String> = guess
        .word
        .chars()
        .zip(guess.verdicts)
        .map(|(letter, verdict)| colored_letter(letter, verdict).to_string())
        .collect();
    println!("  {:>2}. {}", turn.to_string().bright_black(), tiles.join(" "));
}

/// Print the time left with a bar relative to the round length
pub fn print_clock(remaining: f64, round_seconds: f64) {
    let bar = create_progress_bar(remaining, round_seconds, 30);
    let colored_bar = if remaining <= round_seconds / 6.0 {
        bar.red()
    } else {
        bar.cyan()
    };
    println!("  ⏱  {} [{}]", format_clock(remaining).bold(), colored_bar);
}

/// Print the end-of-round banner
pub fn print_round_result(won: bool, target: &str, history: &[ScoredGuess]) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    if won {
        println!(
            "{}",
            format!("  🎉 Solved in {} guess(es)!", history.len())
                .bright_green()
                .bold()
        );
    } else {
        println!("{}", "  ⌛ Time's up!".red().bold());
        println!(
            "  The word was {}",
            target.to_uppercase().bright_yellow().bold()
        );
    }
    if !history.is_empty() {
        println!("\n{}", share_grid(history));
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!(
        "  Played: {}  Won: {}  Lost: {}  Win rate: {}",
        stats.played,
        stats.won.to_string().green(),
        stats.lost.to_string().red(),
        format!("{:.0}%", stats.win_rate()).bright_yellow()
    );
}

/// Print the verdicts of a one-shot score
pub fn print_score_result(result: &ScoreResult) {
    let guess = ScoredGuess {
        word: result.guess.clone(),
        verdicts: std::array::from_fn(|i| result.verdicts.get(i).copied().unwrap_or_default()),
    };
    println!(
        "\n{} vs {}",
        result.guess.to_uppercase().bright_white().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    print_scored_guess(1, &guess);
    println!("  {}", verdicts_to_emoji(&result.verdicts));
    if !result.guess_in_word_list {
        println!("  {}", "(guess is not in the word list)".bright_black());
    }
}
