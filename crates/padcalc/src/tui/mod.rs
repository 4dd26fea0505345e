//! Terminal frontend: keyboard mapping, keypad, app state, rendering and
//! terminal setup

mod app;
mod input;
mod keypad;
mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonAction, Keypad, KeypadButton, KeypadWidget};
pub use terminal::{AlternateScreen, RawMode};
pub use ui::{keypad_area, render, CalculatorUI, HELP_SHORTCUTS, TITLE};
