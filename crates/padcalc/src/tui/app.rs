//! TUI application state

use ratatui::layout::Rect;
use tracing::trace;

use super::input::KeyAction;
use super::keypad::{ButtonAction, Keypad};
use crate::config::CalculatorConfig;
use crate::core::history::History;
use crate::core::{Accumulator, Input};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// Display, equation and history
    accumulator: Accumulator,
    /// On-screen keypad with highlight state
    keypad: Keypad,
    /// Whether the history panel is visible
    show_history: bool,
    /// How many records the history panel is scrolled back from the newest
    history_scroll: usize,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates a calculator app from a configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            accumulator: Accumulator::new(),
            keypad: Keypad::new(),
            show_history: config.show_history,
            history_scroll: 0,
            should_quit: false,
        }
    }

    /// Returns the number currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        self.accumulator.display()
    }

    /// Returns the pending equation
    #[must_use]
    pub fn equation(&self) -> &str {
        self.accumulator.equation()
    }

    /// Returns the calculation history
    #[must_use]
    pub fn history(&self) -> &History {
        self.accumulator.history()
    }

    /// Returns the underlying accumulator
    #[must_use]
    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the history panel is visible
    #[must_use]
    pub fn show_history(&self) -> bool {
        self.show_history
    }

    /// Returns the history scroll offset (0 = newest records visible)
    #[must_use]
    pub fn history_scroll(&self) -> usize {
        self.history_scroll
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a keyboard action
    pub fn handle(&mut self, action: KeyAction) {
        trace!(?action, "key action");
        match action {
            KeyAction::Calc(input) => self.press(input),
            KeyAction::ToggleHistory => self.toggle_history(),
            KeyAction::ScrollUp => self.scroll_up(),
            KeyAction::ScrollDown => self.scroll_down(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Handles a mouse click at `(x, y)` on a keypad drawn in `keypad_area`
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        let Some(idx) = self.keypad.hit_test(keypad_area, x, y) else {
            return;
        };
        let Some(button) = self.keypad.get_button(idx) else {
            return;
        };
        trace!(label = %button.label, "keypad click");
        match button.action {
            ButtonAction::Calc(input) => self.press(input),
            ButtonAction::ToggleHistory => {
                self.toggle_history();
                self.keypad.release_all();
                self.keypad.press_button(idx);
            }
        }
    }

    fn press(&mut self, input: Input) {
        let before = self.accumulator.history().len();
        self.accumulator.apply(input);
        self.keypad.highlight_input(input);
        if self.accumulator.history().len() != before {
            self.history_scroll = 0;
        }
    }

    fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
    }

    fn scroll_up(&mut self) {
        let max = self.history().len().saturating_sub(1);
        self.history_scroll = (self.history_scroll + 1).min(max);
    }

    fn scroll_down(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(1);
    }
}
