//! Formatting utilities for terminal output

use crate::core::Verdict;
use crate::game::{Clock, ScoredGuess};

/// Format verdicts as an emoji string
#[must_use]
pub fn verdicts_to_emoji(verdicts: &[Verdict]) -> String {
    verdicts.iter().map(|v| v.to_emoji()).collect()
}

/// Zero-padded `MM:SS` for a number of seconds
#[must_use]
pub fn format_clock(seconds: f64) -> String {
    Clock::from_seconds(seconds).to_string()
}

/// Emoji grid of a round, one line per guess
#[must_use]
pub fn share_grid(history: &[ScoredGuess]) -> String {
    history
        .iter()
        .map(|guess| verdicts_to_emoji(&guess.verdicts))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
