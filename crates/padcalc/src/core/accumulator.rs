//! Expression accumulator
//!
//! Builds an equation string one keypress at a time while tracking the number
//! currently being typed. On evaluate the equation is handed to the
//! [`Evaluator`], the result is formatted and recorded in the [`History`].
//!
//! ```text
//! key   display   equation
//!  3    "3"       "3"
//!  +    "0"       "3 + "
//!  4    "4"       "3 + 4"
//!  =    "7"       "7"
//! ```

use crate::core::evaluator::Evaluator;
use crate::core::history::{History, HistoryEntry};
use crate::core::{Operation, ERROR_SENTINEL};
use tracing::{debug, trace};

const INITIAL_DISPLAY: &str = "0";

/// A discrete input token, as produced by a keypad button or a key binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A digit `0-9` or the decimal point
    Digit(char),
    /// One of the four binary operators
    Operator(Operation),
    /// Evaluate the equation
    Evaluate,
    /// Reset display and equation
    Clear,
}

impl Input {
    /// Maps a single character to an input token, if it has one
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Self::Digit(c)),
            '=' => Some(Self::Evaluate),
            'c' | 'C' => Some(Self::Clear),
            _ => Operation::from_char(c).map(Self::Operator),
        }
    }
}

/// Display, equation and history of one calculator session
#[derive(Debug)]
pub struct Accumulator {
    display: String,
    equation: String,
    history: History,
    evaluator: Evaluator,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// Creates an accumulator showing `"0"` with an empty equation
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            equation: String::new(),
            history: History::new(),
            evaluator: Evaluator::new(),
        }
    }

    /// Appends a digit or decimal point.
    ///
    /// A display of exactly `"0"` is replaced rather than extended; anything
    /// else, the error sentinel included, gets the digit appended.
    /// Characters outside `[0-9.]` are ignored.
    pub fn append_digit(&mut self, digit: char) {
        if !(digit.is_ascii_digit() || digit == '.') {
            debug!(?digit, "ignoring non-digit input");
            return;
        }
        trace!(?digit, "append digit");

        if self.display == INITIAL_DISPLAY {
            self.display.clear();
        }
        self.display.push(digit);
        self.equation.push(digit);
    }

    /// Appends `" op "` to the equation and starts a new number
    pub fn append_operator(&mut self, op: Operation) {
        trace!(%op, "append operator");
        INITIAL_DISPLAY.clone_into(&mut self.display);
        self.equation.push(' ');
        self.equation.push(op.symbol());
        self.equation.push(' ');
    }

    /// Evaluates the equation.
    ///
    /// On success the formatted result replaces both the display and the
    /// equation, and the new history record is returned. On failure the
    /// display shows [`ERROR_SENTINEL`], the equation is emptied and `None`
    /// is returned.
    pub fn evaluate(&mut self) -> Option<&HistoryEntry> {
        match self.evaluator.evaluate_str(&self.equation) {
            Ok(value) => {
                let formatted = format_result(value);
                debug!(equation = %self.equation, result = %formatted, "evaluated");
                self.display.clone_from(&formatted);
                let entry = self.history.record(&self.equation, &formatted);
                self.equation = formatted;
                Some(entry)
            }
            Err(err) => {
                debug!(equation = %self.equation, error = %err, "evaluation failed");
                ERROR_SENTINEL.clone_into(&mut self.display);
                self.equation.clear();
                None
            }
        }
    }

    /// Resets display to `"0"` and empties the equation. History is kept.
    pub fn clear(&mut self) {
        trace!("clear");
        INITIAL_DISPLAY.clone_into(&mut self.display);
        self.equation.clear();
    }

    /// Dispatches one input token
    pub fn apply(&mut self, input: Input) {
        match input {
            Input::Digit(d) => self.append_digit(d),
            Input::Operator(op) => self.append_operator(op),
            Input::Evaluate => {
                self.evaluate();
            }
            Input::Clear => self.clear(),
        }
    }

    /// The number currently being typed, or the last result
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The full pending expression
    #[must_use]
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// Completed evaluations, oldest first
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether the last evaluation failed
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_SENTINEL
    }
}

/// Formats an evaluation result for display.
///
/// Integral values print without a fractional part, everything else with
/// exactly two decimals.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        // covers -0
        "0".to_string()
    } else if value.fract() == 0.0 {
        format!("{value}")
    } else {
        format!("{value:.2}")
    }
}
