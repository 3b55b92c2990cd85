//! Guess rows and their letter slots
//!
//! Rows are fixed-capacity buffers that get cleared in place between guesses.

use super::Verdict;
use std::fmt;

/// Number of letters in every word the game plays with
pub const WORD_LENGTH: usize = 5;

/// Placeholder contributed by an unwritten slot. No dictionary word contains it.
pub const BLANK: char = '\0';

/// One letter position of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slot {
    pub letter: Option<char>,
    pub verdict: Verdict,
}

/// Identifies one of the two rows owned by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowId {
    /// Row for the opening guess
    Initial,
    /// Row reused for every guess after the opening one
    Guessing,
}

impl RowId {
    /// Both rows, in board order
    pub const ALL: [Self; 2] = [Self::Initial, Self::Guessing];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Initial => 0,
            Self::Guessing => 1,
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => f.write_str("initial"),
            Self::Guessing => f.write_str("guessing"),
        }
    }
}

/// An in-progress or submitted guess
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuessRow {
    slots: [Slot; WORD_LENGTH],
}

impl GuessRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots in the row
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        WORD_LENGTH
    }

    /// Always false; rows have a fixed, non-zero length
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Get the slot at a position
    ///
    /// # Panics
    /// Panics if `index >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub fn slot(&self, index: usize) -> Slot {
        self.slots[index]
    }

    /// Concatenation of the slot letters, with [`BLANK`] for unwritten slots
    ///
    /// # Examples
    /// ```
    /// use wordle_blitz::core::GuessRow;
    ///
    /// let mut row = GuessRow::new();
    /// row.set_letter(0, Some('h'));
    /// row.set_letter(1, Some('i'));
    /// assert_eq!(row.current_word(), "hi\0\0\0");
    /// ```
    #[must_use]
    pub fn current_word(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.letter.unwrap_or(BLANK))
            .collect()
    }

    /// Write a letter without validation
    ///
    /// # Panics
    /// Panics if `index >= WORD_LENGTH`; range checks belong to the caller.
    pub fn set_letter(&mut self, index: usize, letter: Option<char>) {
        self.slots[index].letter = letter;
    }

    /// Write a verdict without validation
    ///
    /// # Panics
    /// Panics if `index >= WORD_LENGTH`; range checks belong to the caller.
    pub fn set_verdict(&mut self, index: usize, verdict: Verdict) {
        self.slots[index].verdict = verdict;
    }

    /// Reset every slot to an empty letter and `Empty` verdict
    pub fn clear(&mut self) {
        self.slots = [Slot::default(); WORD_LENGTH];
    }

    /// True iff every slot is `Correct`
    #[must_use]
    pub fn is_fully_correct(&self) -> bool {
        self.slots
            .iter()
            .all(|slot| slot.verdict == Verdict::Correct)
    }

    /// Verdicts of all slots, in order
    #[must_use]
    pub fn verdicts(&self) -> [Verdict; WORD_LENGTH] {
        self.slots.map(|slot| slot.verdict)
    }
}
