//! Logger setup
//!
//! Filtering follows `RUST_LOG` and defaults to `warn`. The terminal UI owns the
//! screen, so its logs should be sent to a file.

use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::io;
use std::path::Path;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global logger, writing to `log_file` or stderr
///
/// Calling this more than once keeps the first logger.
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be created.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format_timestamp_millis();

    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
    Ok(())
}
