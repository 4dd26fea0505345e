//! On-screen keypad
//!
//! The keypad mirrors the calculator's button grid. Buttons can be clicked
//! with the mouse and are highlighted when the matching key is typed.
//!
//! ```text
//! [ C ] [ / ] [ * ] [ - ]
//! [ 7 ] [ 8 ] [ 9 ] [ + ]
//! [ 4 ] [ 5 ] [ 6 ] [ = ]
//! [ 1 ] [ 2 ] [ 3 ] [ = ]
//! [   0     ] [ . ] [ H ]
//! ```
//!
//! `0` spans two columns and `=` spans two rows.

use crate::core::{Input, Operation};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

const ROWS: usize = 5;
const COLS: usize = 4;

/// What pressing a keypad button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Feed a token to the accumulator
    Calc(Input),
    /// Show or hide the history panel
    ToggleHistory,
}

/// A single keypad button and the grid cells it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The symbol on the button
    pub label: char,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The action this button performs
    pub action: ButtonAction,
    /// Top-left grid row
    pub row: usize,
    /// Top-left grid column
    pub col: usize,
    /// Rows covered
    pub row_span: usize,
    /// Columns covered
    pub col_span: usize,
}

impl KeypadButton {
    fn new(label: char, action: ButtonAction, row: usize, col: usize) -> Self {
        Self {
            label,
            pressed: false,
            action,
            row,
            col,
            row_span: 1,
            col_span: 1,
        }
    }

    /// Creates a digit or decimal point button
    #[must_use]
    pub fn digit(d: char, row: usize, col: usize) -> Self {
        Self::new(d, ButtonAction::Calc(Input::Digit(d)), row, col)
    }

    /// Creates an operator button
    #[must_use]
    pub fn operator(op: Operation, row: usize, col: usize) -> Self {
        Self::new(op.symbol(), ButtonAction::Calc(Input::Operator(op)), row, col)
    }

    /// Creates the equals button
    #[must_use]
    pub fn equals(row: usize, col: usize) -> Self {
        Self::new('=', ButtonAction::Calc(Input::Evaluate), row, col)
    }

    /// Creates the clear button
    #[must_use]
    pub fn clear(row: usize, col: usize) -> Self {
        Self::new('C', ButtonAction::Calc(Input::Clear), row, col)
    }

    /// Creates the history toggle button
    #[must_use]
    pub fn history(row: usize, col: usize) -> Self {
        Self::new('H', ButtonAction::ToggleHistory, row, col)
    }

    /// Widens the button over `rows` x `cols` cells
    #[must_use]
    pub fn spanning(mut self, rows: usize, cols: usize) -> Self {
        self.row_span = rows;
        self.col_span = cols;
        self
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Returns the accumulator input for this button, if any
    #[must_use]
    pub fn input(&self) -> Option<Input> {
        match self.action {
            ButtonAction::Calc(input) => Some(input),
            ButtonAction::ToggleHistory => None,
        }
    }

    /// Whether the button covers the given grid cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        (self.row..self.row + self.row_span).contains(&row)
            && (self.col..self.col + self.col_span).contains(&col)
    }
}

/// The calculator keypad: a 5x4 grid of buttons, some spanning several cells
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: C / * -
            KeypadButton::clear(0, 0),
            KeypadButton::operator(Operation::Divide, 0, 1),
            KeypadButton::operator(Operation::Multiply, 0, 2),
            KeypadButton::operator(Operation::Subtract, 0, 3),
            // Row 1: 7 8 9 +
            KeypadButton::digit('7', 1, 0),
            KeypadButton::digit('8', 1, 1),
            KeypadButton::digit('9', 1, 2),
            KeypadButton::operator(Operation::Add, 1, 3),
            // Row 2: 4 5 6 =
            KeypadButton::digit('4', 2, 0),
            KeypadButton::digit('5', 2, 1),
            KeypadButton::digit('6', 2, 2),
            KeypadButton::equals(2, 3).spanning(2, 1),
            // Row 3: 1 2 3
            KeypadButton::digit('1', 3, 0),
            KeypadButton::digit('2', 3, 1),
            KeypadButton::digit('3', 3, 2),
            // Row 4: 0 . H
            KeypadButton::digit('0', 4, 0).spanning(1, 2),
            KeypadButton::digit('.', 4, 2),
            KeypadButton::history(4, 3),
        ];

        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Returns the index of the button covering a grid cell
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: char) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Finds the button that produces an input
    #[must_use]
    pub fn find_button_by_input(&self, input: Input) -> Option<usize> {
        self.buttons.iter().position(|b| b.input() == Some(input))
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button producing `input`
    pub fn highlight_input(&mut self, input: Input) {
        self.release_all();
        if let Some(idx) = self.find_button_by_input(input) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Size of one grid cell inside `area`, or `None` if it does not fit
    fn cell_size(area: Rect) -> Option<(u16, u16)> {
        let width = area.width.saturating_sub(2) / COLS as u16;
        let height = area.height.saturating_sub(2) / ROWS as u16;
        (width > 0 && height > 0).then_some((width, height))
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let (btn_width, btn_height) = Self::cell_size(area)?;
        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        if row < ROWS && col < COLS {
            self.button_at(row, col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn button_style(btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match btn.action {
            ButtonAction::Calc(Input::Digit(_)) => Style::default().fg(Color::White),
            ButtonAction::Calc(Input::Operator(_)) => Style::default().fg(Color::Yellow),
            ButtonAction::Calc(Input::Evaluate) => Style::default().fg(Color::Green),
            ButtonAction::Calc(Input::Clear) => Style::default().fg(Color::Red),
            ButtonAction::ToggleHistory => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let Some((btn_width, btn_height)) = Keypad::cell_size(area) else {
            return;
        };
        if btn_width < 3 {
            return;
        }

        let inner_x = area.x + 1;
        let inner_y = area.y + 1;

        for btn in self.keypad.buttons() {
            let x = inner_x + btn.col as u16 * btn_width;
            let y = inner_y + btn.row as u16 * btn_height;
            let width = btn.col_span as u16 * btn_width;
            let height = btn.row_span as u16 * btn_height;

            let label = format!("[{}]", btn.label);
            let label_x = x + width.saturating_sub(label.len() as u16) / 2;
            let label_y = y + height / 2;

            buf.set_span(
                label_x,
                label_y,
                &Span::styled(label, Self::button_style(btn)),
                width,
            );
        }
    }
}
