//! Wordle Blitz
//!
//! A timed Wordle engine: one opening guess, then as many guesses as the clock
//! allows. Invalid words after the opening guess cost time.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_blitz::game::{GameConfig, GameEngine, InputEvent, Phase};
//! use wordle_blitz::wordlists::WordBank;
//!
//! let bank = WordBank::from_text("crane\nslate", "crane").unwrap();
//! let mut engine = GameEngine::with_config(bank, GameConfig::default());
//! engine.new_game();
//!
//! for c in "crane".chars() {
//!     engine.handle(InputEvent::Letter(c));
//! }
//! engine.handle(InputEvent::Submit);
//! assert_eq!(engine.phase(), Phase::Won);
//! ```

// Core domain types
pub mod core;

// Round logic and timer
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
