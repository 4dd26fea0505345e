//! Keyboard input handling
//!
//! Maps crossterm key events to [`KeyAction`]s. Calculator keys resolve to the
//! same [`Input`] tokens the keypad produces.

use crate::core::{Input, Operation};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed a token to the accumulator
    Calc(Input),
    /// Show or hide the history panel
    ToggleHistory,
    /// Scroll history towards older records
    ScrollUp,
    /// Scroll history towards newer records
    ScrollDown,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

impl KeyAction {
    /// Returns the accumulator input carried by this action, if any
    #[must_use]
    pub const fn input(&self) -> Option<Input> {
        match self {
            Self::Calc(input) => Some(*input),
            _ => None,
        }
    }
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Windows reports releases too
        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::map_char(c),
            KeyCode::Enter => KeyAction::Calc(Input::Evaluate),
            KeyCode::Esc => KeyAction::Calc(Input::Clear),
            KeyCode::Tab => KeyAction::ToggleHistory,
            KeyCode::Up | KeyCode::PageUp => KeyAction::ScrollUp,
            KeyCode::Down | KeyCode::PageDown => KeyAction::ScrollDown,
            _ => KeyAction::None,
        }
    }

    /// Maps a typed character to an action
    #[must_use]
    pub fn map_char(c: char) -> KeyAction {
        match c {
            '0'..='9' | '.' => KeyAction::Calc(Input::Digit(c)),
            '=' => KeyAction::Calc(Input::Evaluate),
            'c' | 'C' => KeyAction::Calc(Input::Clear),
            'h' | 'H' => KeyAction::ToggleHistory,
            'q' | 'Q' => KeyAction::Quit,
            _ => Operation::from_char(c).map_or(KeyAction::None, |op| {
                KeyAction::Calc(Input::Operator(op))
            }),
        }
    }

    /// Returns true if the character drives the accumulator
    #[must_use]
    pub fn is_calculator_char(c: char) -> bool {
        Self::map_char(c).input().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Constructor tests =====

    #[test]
    fn test_input_handler_new() {
        let handler = InputHandler::new();
        let _ = format!("{:?}", handler);
    }

    // ===== Calculator key tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Calc(Input::Digit(c))
            );
        }
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Calc(Input::Digit('.'))
        );
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for op in Operation::ALL {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(op.symbol()))),
                KeyAction::Calc(Input::Operator(op))
            );
        }
    }

    #[test]
    fn test_unsupported_operators_ignored() {
        let handler = InputHandler::new();
        for c in ['%', '^', '(', ')', ' '] {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::None
            );
        }
    }

    #[test]
    fn test_handle_evaluate_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Calc(Input::Evaluate)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Calc(Input::Evaluate)
        );
    }

    #[test]
    fn test_handle_clear_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::Esc, KeyCode::Char('c'), KeyCode::Char('C')] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                KeyAction::Calc(Input::Clear)
            );
        }
    }

    // ===== Panel key tests =====

    #[test]
    fn test_handle_history_toggle() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('h'))),
            KeyAction::ToggleHistory
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Tab)),
            KeyAction::ToggleHistory
        );
    }

    #[test]
    fn test_handle_scroll_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Up)),
            KeyAction::ScrollUp
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::PageUp)),
            KeyAction::ScrollUp
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Down)),
            KeyAction::ScrollDown
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::PageDown)),
            KeyAction::ScrollDown
        );
    }

    // ===== Quit tests =====

    #[test]
    fn test_handle_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_ctrl_other_is_none() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('5'))),
            KeyAction::None
        );
    }

    // ===== Ignored input tests =====

    #[test]
    fn test_unknown_keys_are_none() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::Backspace,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Home,
            KeyCode::F(1),
            KeyCode::Char('x'),
        ] {
            assert_eq!(handler.handle_key(key_event(code)), KeyAction::None);
        }
    }

    #[test]
    fn test_key_release_is_none() {
        let handler = InputHandler::new();
        let event = KeyEvent::new_with_kind(
            KeyCode::Char('5'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }

    #[test]
    fn test_shift_modifier_still_maps() {
        let handler = InputHandler::new();
        let event = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key(event),
            KeyAction::Calc(Input::Operator(Operation::Add))
        );
    }

    // ===== Helper tests =====

    #[test]
    fn test_key_action_input() {
        assert_eq!(
            KeyAction::Calc(Input::Evaluate).input(),
            Some(Input::Evaluate)
        );
        assert_eq!(KeyAction::Quit.input(), None);
        assert_eq!(KeyAction::ToggleHistory.input(), None);
    }

    #[test]
    fn test_is_calculator_char() {
        assert!(InputHandler::is_calculator_char('7'));
        assert!(InputHandler::is_calculator_char('/'));
        assert!(InputHandler::is_calculator_char('='));
        assert!(!InputHandler::is_calculator_char('h'));
        assert!(!InputHandler::is_calculator_char('q'));
        assert!(!InputHandler::is_calculator_char('%'));
    }

    #[test]
    fn test_char_mapping_matches_input_from_char() {
        for b in 0u8..=127 {
            let c = char::from(b);
            assert_eq!(InputHandler::map_char(c).input(), Input::from_char(c), "{c:?}");
        }
    }
}
