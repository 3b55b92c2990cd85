//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, a loader for custom
//! lists, and the [`WordBank`] the engine queries.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{WordBank, WordBankError};
pub use embedded::{ALLOWED, ALLOWED_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
