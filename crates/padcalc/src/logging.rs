//! Tracing setup
//!
//! The terminal belongs to the TUI, so log output only ever goes to a file.
//! Without `--log-file` no subscriber is installed and every event is dropped.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::CalculatorConfig;
use crate::error::{AppError, AppResult};

/// Builds the event filter: `RUST_LOG` if set, otherwise `level`
pub fn build_filter(level: &str) -> AppResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    parse_filter(level)
}

/// Parses a filter directive such as `debug` or `padcalc=trace`
pub fn parse_filter(level: &str) -> AppResult<EnvFilter> {
    if level.trim().is_empty() {
        return Err(AppError::config("log level must not be empty"));
    }
    EnvFilter::try_new(level)
        .map_err(|e| AppError::config(format!("invalid log level '{level}': {e}")))
}

/// Installs the global subscriber. Returns whether logging is enabled.
pub fn init(config: &CalculatorConfig) -> AppResult<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let filter = build_filter(&config.log_level)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false);

    let result = if config.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| AppError::logging(e.to_string()))?;

    tracing::info!(path = %path.display(), level = %config.log_level, "logging initialised");
    Ok(true)
}
