//! Round logic: board state machine, countdown timer and their events
//!
//! The engine owns the timer; the timer only reports back through its
//! registered expiry callback.

mod config;
mod engine;
mod events;
mod timer;

pub use config::{ConfigError, DEFAULT_PENALTY_SECONDS, DEFAULT_ROUND_SECONDS, GameConfig};
pub use engine::{GameEngine, Phase, Statistics};
pub use events::{GameEvent, InputEvent, ScoredGuess};
pub use timer::{Clock, CountdownTimer, TimerStatus};
