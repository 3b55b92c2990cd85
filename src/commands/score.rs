//! One-shot scoring command
//!
//! Scores a guess against a chosen target without playing a round.

use crate::core::{Verdict, WORD_LENGTH, score};
use crate::wordlists::WordBank;
use crate::wordlists::loader::normalize;

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: String,
    pub target: String,
    pub verdicts: Vec<Verdict>,
    /// Whether the guess would be accepted during play
    pub guess_in_word_list: bool,
}

fn check_shape(label: &str, word: &str) -> Result<String, String> {
    let word = normalize(word);
    if word.chars().count() != WORD_LENGTH {
        return Err(format!(
            "Invalid {label}: must be exactly {WORD_LENGTH} letters, got '{word}'"
        ));
    }
    if !word.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(format!("Invalid {label}: '{word}' contains non-letters"));
    }
    Ok(word)
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not exactly five ASCII letters.
pub fn score_words(guess: &str, target: &str, bank: &WordBank) -> Result<ScoreResult, String> {
    let guess = check_shape("guess", guess)?;
    let target = check_shape("target", target)?;

    Ok(ScoreResult {
        verdicts: score(&guess, &target),
        guess_in_word_list: bank.is_valid(&guess),
        guess,
        target,
    })
}
