//! Dictionary of accepted guesses and playable targets

use super::loader::{normalize, parse_word_list};
use super::{ALLOWED, SOLUTIONS};
use crate::core::WORD_LENGTH;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for unusable word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordBankError {
    EmptyValidWords,
    EmptySolutions,
}

impl fmt::Display for WordBankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValidWords => write!(f, "Valid-guess word list is empty"),
            Self::EmptySolutions => {
                write!(f, "Solution word list has no {WORD_LENGTH}-letter words")
            }
        }
    }
}

impl std::error::Error for WordBankError {}

/// Valid-guess dictionary plus the smaller list of target words
///
/// Immutable once built. Both lists are guaranteed non-empty.
#[derive(Debug, Clone)]
pub struct WordBank {
    valid_words: FxHashSet<String>,
    solutions: Vec<String>,
}

impl WordBank {
    /// Build a bank from already-split word lists
    ///
    /// Words are normalized (trimmed, lowercased). Solutions that are not
    /// exactly [`WORD_LENGTH`] letters can never fill a row and are dropped.
    ///
    /// # Errors
    /// Returns `WordBankError` if either list ends up empty.
    pub fn new<I, J, S, T>(valid_words: I, solutions: J) -> Result<Self, WordBankError>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let valid_words: FxHashSet<String> = valid_words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        if valid_words.is_empty() {
            return Err(WordBankError::EmptyValidWords);
        }

        let mut dropped = 0usize;
        let solutions: Vec<String> = solutions
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .filter(|w| {
                let fits = w.chars().count() == WORD_LENGTH;
                if !fits {
                    dropped += 1;
                }
                fits
            })
            .collect();
        if dropped > 0 {
            log::warn!("dropped {dropped} solution(s) not {WORD_LENGTH} letters long");
        }
        if solutions.is_empty() {
            return Err(WordBankError::EmptySolutions);
        }

        log::debug!(
            "word bank ready: {} valid words, {} solutions",
            valid_words.len(),
            solutions.len()
        );

        Ok(Self {
            valid_words,
            solutions,
        })
    }

    /// Build a bank from two line-delimited texts
    ///
    /// # Errors
    /// Returns `WordBankError` if either text contains no words.
    ///
    /// # Examples
    /// ```
    /// use wordle_blitz::wordlists::WordBank;
    ///
    /// let bank = WordBank::from_text("crane\nslate\nTRACE\n", "crane\n").unwrap();
    /// assert!(bank.is_valid("trace"));
    /// assert!(!bank.is_valid("zzzzz"));
    /// ```
    pub fn from_text(valid_text: &str, solutions_text: &str) -> Result<Self, WordBankError> {
        Self::new(parse_word_list(valid_text), parse_word_list(solutions_text))
    }

    /// Bank built from the lists compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded lists were built empty.
    pub fn embedded() -> Result<Self, WordBankError> {
        Self::new(ALLOWED, SOLUTIONS)
    }

    /// Whether `word` is an accepted guess. Case and whitespace are ignored.
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.valid_words.contains(&normalize(word))
    }

    /// Draw a target uniformly at random from the solutions
    #[must_use]
    pub fn pick_target<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        // `solutions` is non-empty by construction
        self.solutions
            .choose(rng)
            .cloned()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid_words.len()
    }

    #[must_use]
    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank() -> WordBank {
        WordBank::from_text("crane\nslate\ntrace\ncrate\n", "crane\nslate\n").unwrap()
    }

    #[test]
    fn validity_ignores_case_and_whitespace() {
        let bank = bank();
        assert!(bank.is_valid("crane"));
        assert!(bank.is_valid("CRANE"));
        assert!(bank.is_valid("  Trace \n"));
        assert!(!bank.is_valid("zzzzz"));
        assert!(!bank.is_valid(""));
    }

    #[test]
    fn unwritten_slots_are_never_valid() {
        assert!(!bank().is_valid("cra\0\0"));
    }

    #[test]
    fn list_entries_are_normalized() {
        let bank = WordBank::from_text("  CRANE \r\n", " Crane\n").unwrap();
        assert!(bank.is_valid("crane"));
        assert_eq!(bank.solutions(), &["crane".to_string()]);
    }

    #[test]
    fn empty_valid_list_is_rejected() {
        assert_eq!(
            WordBank::from_text("\n\n", "crane").unwrap_err(),
            WordBankError::EmptyValidWords
        );
    }

    #[test]
    fn empty_solution_list_is_rejected() {
        assert_eq!(
            WordBank::from_text("crane", "  \n").unwrap_err(),
            WordBankError::EmptySolutions
        );
    }

    #[test]
    fn wrong_length_solutions_are_dropped() {
        let bank = WordBank::from_text("crane", "cranes\ncrane\nab").unwrap();
        assert_eq!(bank.solutions(), &["crane".to_string()]);

        assert_eq!(
            WordBank::from_text("crane", "toolong").unwrap_err(),
            WordBankError::EmptySolutions
        );
    }

    #[test]
    fn pick_target_draws_from_solutions() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let target = bank.pick_target(&mut rng);
            assert!(bank.solutions().contains(&target));
        }
    }

    #[test]
    fn pick_target_reaches_every_solution() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(11);
        let picked: FxHashSet<String> = (0..200).map(|_| bank.pick_target(&mut rng)).collect();
        assert_eq!(picked.len(), bank.solutions().len());
    }

    #[test]
    fn builds_from_string_slices() {
        let bank = WordBank::new(&["crane", "Slate"], &["CRANE"]).unwrap();
        assert!(bank.is_valid("slate"));
        assert_eq!(bank.solutions(), ["crane".to_string()]);
    }

    #[test]
    fn embedded_bank_loads() {
        let bank = WordBank::embedded().unwrap();
        assert_eq!(bank.solutions().len(), SOLUTIONS.len());
        for solution in bank.solutions() {
            assert!(bank.is_valid(solution), "{solution} not in allowed list");
        }
    }
}
