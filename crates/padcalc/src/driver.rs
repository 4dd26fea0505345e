//! Calculator drivers
//!
//! A driver feeds [`Input`] tokens to a calculator and reads back what the
//! user would see. Scenarios written against [`CalculatorDriver`] run
//! unchanged against the bare accumulator and against the TUI, which goes
//! through real key events.

use crate::core::{Accumulator, Input, ERROR_SENTINEL};

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Feeds one input token
    fn press(&mut self, input: Input);

    /// Gets the current display value
    fn display(&self) -> String;

    /// Gets the pending equation
    fn equation(&self) -> String;

    /// Gets history records as `"<equation> = <result>"`, oldest first
    fn history(&self) -> Vec<String>;

    /// Types a string of calculator characters (`0-9 . + - * / = c`).
    /// Whitespace and unmapped characters are skipped.
    fn type_keys(&mut self, keys: &str) {
        for input in keys.chars().filter_map(Input::from_char) {
            self.press(input);
        }
    }
}

/// Driver talking to an [`Accumulator`] directly
#[derive(Debug, Default)]
pub struct AccumulatorDriver {
    accumulator: Accumulator,
}

impl AccumulatorDriver {
    /// Creates a driver over a fresh accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying accumulator
    #[must_use]
    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }
}

impl CalculatorDriver for AccumulatorDriver {
    fn press(&mut self, input: Input) {
        self.accumulator.apply(input);
    }

    fn display(&self) -> String {
        self.accumulator.display().to_string()
    }

    fn equation(&self) -> String {
        self.accumulator.equation().to_string()
    }

    fn history(&self) -> Vec<String> {
        self.accumulator
            .history()
            .iter()
            .map(|entry| entry.display())
            .collect()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, Input};
    use crate::tui::{CalculatorApp, InputHandler};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Drives a [`CalculatorApp`] through synthesized key events
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
        handler: InputHandler,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self {
                app,
                handler: InputHandler::new(),
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }

        /// Sends a raw key event
        pub fn send_key(&mut self, event: KeyEvent) {
            let action = self.handler.handle_key(event);
            self.app.handle(action);
        }

        /// The key a user would press to produce `input`
        #[must_use]
        pub fn key_for(input: Input) -> KeyEvent {
            let code = match input {
                Input::Digit(c) => KeyCode::Char(c),
                Input::Operator(op) => KeyCode::Char(op.symbol()),
                Input::Evaluate => KeyCode::Enter,
                Input::Clear => KeyCode::Esc,
            };
            KeyEvent::new(code, KeyModifiers::NONE)
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, input: Input) {
            self.send_key(Self::key_for(input));
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn equation(&self) -> String {
            self.app.equation().to_string()
        }

        fn history(&self) -> Vec<String> {
            self.app
                .history()
                .iter()
                .map(|entry| entry.display())
                .collect()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared scenarios =====
// Each runs against any CalculatorDriver starting from a fresh state.

/// The first digit replaces the initial zero
pub fn verify_leading_zero_replaced<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(driver.display(), "0");
    driver.type_keys("5");
    assert_eq!(driver.display(), "5");
    driver.type_keys("3");
    assert_eq!(driver.display(), "53");
    driver.press(Input::Clear);
}

/// Integer and fractional results, and their history records
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let before = driver.history().len();

    driver.type_keys("3 + 4 =");
    assert_eq!(driver.display(), "7");
    assert_eq!(driver.equation(), "7");
    driver.press(Input::Clear);

    driver.type_keys("10 / 4 =");
    assert_eq!(driver.display(), "2.50");
    driver.press(Input::Clear);

    let history = driver.history();
    assert_eq!(history.len(), before + 2);
    assert_eq!(history[before], "3 + 4 = 7");
    assert_eq!(history[before + 1], "10 / 4 = 2.50");
}

/// Failed evaluations show the sentinel and leave history untouched
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    let before = driver.history().len();

    for keys in ["=", "5 + =", "1 / 0 =", "1.2.3 + 1 ="] {
        driver.press(Input::Clear);
        driver.type_keys(keys);
        assert_eq!(driver.display(), ERROR_SENTINEL, "keys: {keys}");
        assert_eq!(driver.equation(), "", "keys: {keys}");
    }

    assert_eq!(driver.history().len(), before);
    driver.press(Input::Clear);
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.equation(), "");
}

/// Operators after a result continue from it
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Input::Clear);
    driver.type_keys("2 + 3 = * 4 =");
    assert_eq!(driver.display(), "20");
    assert_eq!(driver.history().last().map(String::as_str), Some("5 * 4 = 20"));

    driver.press(Input::Clear);
    driver.type_keys("2 - 2 = 7");
    assert_eq!(driver.display(), "7");
    driver.press(Input::Clear);
}

/// Standard precedence and unary minus
pub fn verify_precedence<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Input::Clear);
    driver.type_keys("2 + 3 * 4 =");
    assert_eq!(driver.display(), "14");

    driver.press(Input::Clear);
    driver.type_keys("3 + - 4 =");
    assert_eq!(driver.display(), "-1");
    driver.press(Input::Clear);
}
