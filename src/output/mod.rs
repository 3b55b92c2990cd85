//! Terminal output formatting
//!
//! Display utilities for line-mode play and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_clock, print_round_result, print_score_result, print_scored_guess, print_statistics,
};
pub use formatters::{format_clock, share_grid, verdicts_to_emoji};
