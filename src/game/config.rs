//! Round configuration

use std::fmt;

/// Default length of a round, in seconds
pub const DEFAULT_ROUND_SECONDS: f64 = 180.0;

/// Default time taken off for an invalid word after the opening guess
pub const DEFAULT_PENALTY_SECONDS: f64 = 10.0;

/// Error type for unusable settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NonPositiveRoundLength(f64),
    NegativePenalty(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveRoundLength(secs) => {
                write!(f, "Round length must be a positive finite number, got {secs}")
            }
            Self::NegativePenalty(secs) => {
                write!(f, "Invalid-word penalty must be finite and not negative, got {secs}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Timing rules for a round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Countdown length, used at round start and again after the opening guess
    pub round_seconds: f64,
    /// Deducted for an invalid word once the opening guess is in
    pub invalid_penalty_seconds: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_seconds: DEFAULT_ROUND_SECONDS,
            invalid_penalty_seconds: DEFAULT_PENALTY_SECONDS,
        }
    }
}

impl GameConfig {
    /// Check the settings can drive a round
    ///
    /// # Errors
    /// Returns `ConfigError` for a round length that is not a positive finite
    /// number, or a penalty that is negative or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.round_seconds.is_finite() || self.round_seconds <= 0.0 {
            return Err(ConfigError::NonPositiveRoundLength(self.round_seconds));
        }
        if !self.invalid_penalty_seconds.is_finite() || self.invalid_penalty_seconds < 0.0 {
            return Err(ConfigError::NegativePenalty(self.invalid_penalty_seconds));
        }
        Ok(())
    }
}
