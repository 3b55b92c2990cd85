//! Events flowing into and out of the engine

use super::Clock;
use crate::core::{RowId, Verdict, WORD_LENGTH};

/// Decoded player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Backspace,
    Submit,
    /// Start a new round with a freshly drawn target
    NewGame,
    /// Start the round over on the same target
    Restart,
}

/// State changes the presentation layer reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    SlotChanged {
        row: RowId,
        index: usize,
        letter: Option<char>,
        verdict: Verdict,
    },
    /// Show or hide the "not in word list" message
    InvalidWordShown(bool),
    /// A row was accepted and scored
    GuessScored {
        row: RowId,
        word: String,
        verdicts: [Verdict; WORD_LENGTH],
    },
    GameWon,
    GameLost,
    TimerDisplay(Clock),
    /// A round (re)started; hide any end-of-round messaging
    RoundReset,
}

/// A submitted guess and how it scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    pub word: String,
    pub verdicts: [Verdict; WORD_LENGTH],
}

impl ScoredGuess {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.verdicts.iter().all(|&v| v == Verdict::Correct)
    }
}
