//! Board primitives: tile verdicts, guess rows and the scoring rule
//!
//! Nothing here knows about time or input; the engine in [`crate::game`]
//! drives these types.

mod row;
mod scorer;
mod verdict;

pub use row::{BLANK, GuessRow, RowId, Slot, WORD_LENGTH};
pub use scorer::score;
pub use verdict::Verdict;
