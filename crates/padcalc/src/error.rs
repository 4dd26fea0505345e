//! Error types for the binary

use thiserror::Error;

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Errors that can stop the application
#[derive(Debug, Error)]
pub enum AppError {
    /// IO error (terminal setup, log file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging could not be initialised
    #[error("Logging error: {message}")]
    Logging {
        /// Error message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },
}

impl AppError {
    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = AppError::config("bad level");
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("bad level"));
    }

    #[test]
    fn test_logging_error() {
        let err = AppError::logging("already set");
        assert_eq!(err.to_string(), "Logging error: already set");
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_question_mark_conversion() {
        fn open() -> AppResult<()> {
            std::fs::File::open("/definitely/not/here/padcalc.log")?;
            Ok(())
        }
        assert!(matches!(open(), Err(AppError::Io(_))));
    }
}
