//! Per-letter verdicts
//!
//! A slot starts `Empty`, becomes `Occupied` while the player types into it, and
//! receives one of the three terminal verdicts when its row is scored.

use std::fmt;

/// State of a single letter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Verdict {
    /// No letter written yet
    #[default]
    Empty,
    /// Letter typed but not yet scored
    Occupied,
    /// Letter is in the target at this position
    Correct,
    /// Letter is in the target at another position
    WrongSpot,
    /// Letter is not (or no longer) available in the target
    Incorrect,
}

impl Verdict {
    /// Whether this verdict is the result of scoring a submitted row
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Correct | Self::WrongSpot | Self::Incorrect)
    }

    /// Emoji square for a verdict, in the familiar share format
    ///
    /// # Examples
    /// ```
    /// use wordle_blitz::core::Verdict;
    ///
    /// assert_eq!(Verdict::Correct.to_emoji(), '🟩');
    /// assert_eq!(Verdict::WrongSpot.to_emoji(), '🟨');
    /// ```
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongSpot => '🟨',
            Self::Incorrect => '⬛',
            Self::Empty | Self::Occupied => '⬜',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Occupied => "occupied",
            Self::Correct => "correct",
            Self::WrongSpot => "wrong spot",
            Self::Incorrect => "incorrect",
        };
        f.write_str(name)
    }
}
