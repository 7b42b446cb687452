//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Help text for the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 . ( )", "Insert"),
    ("+ - * /", "Operator"),
    ("Enter =", "Evaluate"),
    ("Bksp", "Delete"),
    ("Esc", "Clear"),
    ("Mouse", "Click keys"),
    ("?", "Help"),
    ("Ctrl+C", "Quit"),
];

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Display panel
    pub display: Rect,
    /// Buffer status panel
    pub status: Rect,
    /// Keypad, when shown
    pub keypad: Option<Rect>,
    /// Help sidebar, when shown
    pub help: Option<Rect>,
}

/// Splits the frame area into panels
#[must_use]
pub fn layout(app: &CalculatorApp, area: Rect) -> UiLayout {
    let show_keypad = app.config().show_keypad;
    let show_help = app.show_help();

    let mut constraints = vec![Constraint::Min(24)];
    if show_keypad {
        constraints.push(Constraint::Length(22));
    }
    if show_help {
        constraints.push(Constraint::Length(24));
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints(constraints)
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(columns[0]);

    let mut rest = columns.iter().skip(1).copied();
    let keypad = if show_keypad { rest.next() } else { None };
    let help = if show_help { rest.next() } else { None };

    UiLayout {
        display: rows[0],
        status: rows[1],
        keypad,
        help,
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
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

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let expression = self.app.expression();
        let (state, buffer_text) = if expression.is_empty() {
            ("empty", "(empty)")
        } else {
            ("editing", expression)
        };

        let label = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::from(vec![
                Span::styled("Buffer ", label),
                Span::styled(buffer_text, Style::default().fg(Color::Gray)),
            ]),
            Line::from(vec![
                Span::styled("State  ", label),
                Span::styled(state, Style::default().fg(Color::Cyan)),
            ]),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Expression ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>9}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(self.app.config().title.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let regions = layout(self.app, area);
        self.render_display(regions.display, buf);
        self.render_status(regions.status, buf);

        if let Some(keypad_area) = regions.keypad {
            KeypadWidget::new(self.app.keypad()).render(keypad_area, buf);
        }
        if let Some(help_area) = regions.help {
            Self::render_help(help_area, buf);
        }
    }
}
