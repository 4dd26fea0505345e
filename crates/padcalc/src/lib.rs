//! padcalc - keypad calculator
//!
//! A calculator driven by discrete keypad presses. Each press updates a
//! display (the number being typed) and an equation (everything typed so
//! far). Evaluating parses the equation with a small recursive-descent
//! parser, formats the result, and appends `"<equation> = <result>"` to an
//! append-only history. Any failure shows `Error` instead.
//!
//! # Example
//!
//! ```rust
//! use padcalc::prelude::*;
//!
//! let mut acc = Accumulator::new();
//! acc.append_digit('1');
//! acc.append_digit('0');
//! acc.append_operator(Operation::Divide);
//! acc.append_digit('4');
//! acc.evaluate();
//!
//! assert_eq!(acc.display(), "2.50");
//! assert_eq!(acc.history().last().unwrap().display(), "10 / 4 = 2.50");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

pub use config::CalculatorConfig;
pub use error::{AppError, AppResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{
        format_result, Accumulator, CalcError, CalcResult, Calculator, Input, Operation,
        ERROR_SENTINEL,
    };
    pub use crate::driver::{AccumulatorDriver, CalculatorDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("2 + 3").unwrap(), 5.0);
    }

    #[test]
    fn test_calculator_direct() {
        let calc = Calculator::new();
        assert_eq!(calc.calculate(6.0, 7.0, Operation::Multiply).unwrap(), 42.0);
    }

    #[test]
    fn test_parser_direct() {
        let ast = Parser::parse_str("1 + 2 * 3").unwrap();
        assert_eq!(Evaluator::new().evaluate(&ast).unwrap(), 7.0);
    }

    #[test]
    fn test_accumulator_end_to_end() {
        let mut acc = Accumulator::new();
        for input in "3+4=".chars().filter_map(Input::from_char) {
            acc.apply(input);
        }
        assert_eq!(acc.display(), "7");
        assert_eq!(acc.history().export_formatted(), "3 + 4 = 7");
    }

    #[test]
    fn test_error_surfaces_only_as_sentinel() {
        let mut acc = Accumulator::new();
        acc.append_digit('1');
        acc.append_operator(Operation::Divide);
        acc.append_digit('0');
        assert!(acc.evaluate().is_none());
        assert_eq!(acc.display(), ERROR_SENTINEL);
    }
}
