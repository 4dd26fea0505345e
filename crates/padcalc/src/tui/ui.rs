//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Width of the keypad column, borders included
pub const KEYPAD_WIDTH: u16 = 26;
/// Height of the keypad, borders included
pub const KEYPAD_HEIGHT: u16 = 12;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Splits the full terminal area into (main column, keypad)
fn split_columns(area: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Min(24), Constraint::Length(KEYPAD_WIDTH)])
        .split(area);
    let keypad = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(KEYPAD_HEIGHT), Constraint::Min(0)])
        .split(columns[1]);
    (columns[0], keypad[0])
}

/// Where the keypad is drawn for a given terminal area; mouse clicks are
/// resolved against this rectangle.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    split_columns(area).1
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Creates the main column layout
    fn create_layout(&self, area: Rect) -> Vec<Rect> {
        let mut constraints = vec![
            Constraint::Length(3), // Equation
            Constraint::Length(3), // Display
        ];
        if self.app.show_history() {
            constraints.push(Constraint::Min(3));
        } else {
            constraints.push(Constraint::Min(0));
        }
        constraints.push(Constraint::Length(3)); // Help

        Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area)
            .to_vec()
    }

    fn render_equation(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.equation(),
            Style::default().fg(Color::Gray),
        ))
        .block(
            Block::default()
                .title(" Equation ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .render(area, buf);
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.accumulator().is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Line::from(Span::styled(self.app.display(), style)).right_aligned())
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    /// Records visible in a panel of `rows` lines, oldest first
    fn visible_history(&self, rows: usize) -> Vec<ListItem<'a>> {
        let entries = self.app.history().as_slice();
        let end = entries.len().saturating_sub(self.app.history_scroll());
        let start = end.saturating_sub(rows);

        entries[start..end]
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.equation.as_str(), Style::default().fg(Color::Gray)),
                    Span::raw(" = "),
                    Span::styled(entry.result.as_str(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect()
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let rows = area.height.saturating_sub(2) as usize;
        let title = if self.app.history_scroll() > 0 {
            format!(" History (-{}) ", self.app.history_scroll())
        } else {
            " History ".to_string()
        };

        List::new(self.visible_history(rows))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = HELP_SHORTCUTS
            .iter()
            .flat_map(|(key, desc)| {
                [
                    Span::styled(*key, Style::default().fg(Color::Yellow)),
                    Span::styled(format!(" {desc}  "), Style::default().fg(Color::Gray)),
                ]
            })
            .collect();

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let (main_area, keypad) = split_columns(area);
        let chunks = self.create_layout(main_area);

        self.render_equation(chunks[0], buf);
        self.render_display(chunks[1], buf);
        if self.app.show_history() {
            self.render_history(chunks[2], buf);
        }
        Self::render_help(chunks[3], buf);

        KeypadWidget::new(self.app.keypad()).render(keypad, buf);
    }
}

/// Title shown on the outer border
pub const TITLE: &str = " padcalc ";

/// Key bindings shown in the footer
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Enter/=", "Evaluate"),
    ("Esc/c", "Clear"),
    ("h", "History"),
    ("↑/↓", "Scroll"),
    ("q", "Quit"),
];
