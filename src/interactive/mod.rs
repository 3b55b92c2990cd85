//! Interactive terminal front end
//!
//! Decodes key presses into engine input and redraws the board every tick.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
