//! Diagnostic logging on stderr.
//!
//! Stdout only ever carries the report; everything from `tracing` goes to stderr.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Environment variable holding an `EnvFilter` directive (e.g. `debug`).
pub const LOG_ENV: &str = "CURIOUS_LOG";

/// Default filter directive for a given `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Reads `.env` first so `CURIOUS_LOG` can live there.
pub fn init(verbosity: u8) -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let filter = match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(&directive)
            .map_err(|e| AppError::new(4, format!("Invalid {LOG_ENV} directive '{directive}': {e}")))?,
        Err(_) => EnvFilter::new(level_for_verbosity(verbosity)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::new(4, format!("Failed to initialize logging: {e}")))
}
