//! Calculator configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Runtime configuration, built from the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Start with the history panel open
    pub show_history: bool,
    /// Print the session history to stdout on exit
    pub print_history: bool,
    /// Log file; logging is disabled when unset
    pub log_file: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is not set
    pub log_level: String,
    /// Write log records as JSON lines
    pub log_json: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            show_history: false,
            print_history: false,
            log_file: None,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the history panel starts open
    #[must_use]
    pub const fn with_show_history(mut self, show: bool) -> Self {
        self.show_history = show;
        self
    }

    /// Set whether history is printed on exit
    #[must_use]
    pub const fn with_print_history(mut self, print: bool) -> Self {
        self.print_history = print;
        self
    }

    /// Set the log file
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Set the log filter directive
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set JSON log output
    #[must_use]
    pub const fn with_log_json(mut self, json: bool) -> Self {
        self.log_json = json;
        self
    }

    /// Checks settings that clap cannot
    pub fn validate(&self) -> AppResult<()> {
        if self.log_level.trim().is_empty() {
            return Err(AppError::config("log level must not be empty"));
        }
        if self.log_file.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(AppError::config("log file path must not be empty"));
        }
        Ok(())
    }
}
