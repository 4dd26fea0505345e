//! Core calculator: accumulation, parsing, evaluation and history.
//!
//! Everything in here is presentation-free; the TUI and the driver only talk
//! to [`Accumulator`].

pub mod accumulator;
pub mod evaluator;
pub mod history;
mod operations;
pub mod parser;

pub use accumulator::{format_result, Accumulator, Input};
pub use operations::{Calculator, Operation};

use thiserror::Error;

/// Result type for the evaluation pipeline
pub type CalcResult<T> = Result<T, CalcError>;

/// Literal shown on the display when an evaluation fails
pub const ERROR_SENTINEL: &str = "Error";

/// Why an equation could not be reduced to a finite number.
///
/// These never leave [`Accumulator::evaluate`]; the user only ever sees
/// [`ERROR_SENTINEL`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Nothing to evaluate
    #[error("Empty expression")]
    EmptyExpression,
    /// Equation text is not a valid arithmetic expression
    #[error("Invalid expression: {0}")]
    Parse(String),
    /// Division with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,
    /// Arithmetic produced NaN or an infinity
    #[error("Non-finite result: {0}")]
    NonFinite(f64),
}

impl CalcError {
    /// Creates a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_empty_expression() {
        assert_eq!(CalcError::EmptyExpression.to_string(), "Empty expression");
    }

    #[test]
    fn test_calc_error_display_parse() {
        let err = CalcError::parse("unexpected token");
        assert_eq!(err.to_string(), "Invalid expression: unexpected token");
    }

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_non_finite() {
        let err = CalcError::NonFinite(f64::INFINITY);
        assert_eq!(err.to_string(), "Non-finite result: inf");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }

    #[test]
    fn test_error_sentinel_is_not_numeric() {
        assert!(ERROR_SENTINEL.parse::<f64>().is_err());
        assert!(!ERROR_SENTINEL.is_empty());
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}

    #[test]
    fn test_calc_error_is_send_sync_static() {
        _assert_send_sync_static::<CalcError>();
    }
}
