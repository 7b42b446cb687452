//! Numerical Keypad for TUI Calculator
//!
//! This module provides an interactive keypad that can be:
//! - Clicked with the mouse
//! - Highlighted when the corresponding key is typed

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::input::{KeypadKey, NamedAction, KEYPAD_COLS, KEYPAD_LAYOUT, KEYPAD_ROWS};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The control behind the button
    pub key: KeypadKey,
    /// Whether the button is currently pressed/highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a released button
    #[must_use]
    pub fn new(key: KeypadKey) -> Self {
        Self {
            key,
            pressed: false,
        }
    }

    /// Returns the label on the button
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.key.label
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    fn style(&self) -> Style {
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match self.key.action {
            Some(NamedAction::Calculate) => Style::default().fg(Color::Green),
            Some(NamedAction::Clear | NamedAction::Delete) => Style::default().fg(Color::Red),
            None if self.key.is_operator() => Style::default().fg(Color::Yellow),
            None if self.key.label.chars().all(|c| c.is_ascii_digit()) => {
                Style::default().fg(Color::White)
            }
            None => Style::default().fg(Color::Cyan),
        }
    }
}

/// Maps a DOM key name to the label of the button it corresponds to
fn label_for_key(key: &str) -> &str {
    match key {
        "*" => "×",
        "/" => "÷",
        "Enter" => "=",
        "Backspace" => "⌫",
        "Escape" => "C",
        other => other,
    }
}

/// The 5x4 keypad grid
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
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
        Self {
            buttons: KEYPAD_LAYOUT
                .iter()
                .flatten()
                .copied()
                .map(KeypadButton::new)
                .collect(),
        }
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < KEYPAD_ROWS && col < KEYPAD_COLS {
            self.buttons.get(row * KEYPAD_COLS + col)
        } else {
            None
        }
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label() == label)
    }

    /// Finds the button a typed key corresponds to
    #[must_use]
    pub fn find_button_for_key(&self, key: &str) -> Option<usize> {
        self.find_button_by_label(label_for_key(key))
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

    /// Highlights the button for a typed key, releasing the others
    pub fn highlight_key(&mut self, key: &str) {
        self.release_all();
        if let Some(idx) = self.find_button_for_key(key) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons
            .iter()
            .enumerate()
            .map(|(i, btn)| ((i / KEYPAD_COLS, i % KEYPAD_COLS), btn))
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let (btn_width, btn_height) = cell_size(area.width - 2, area.height - 2)?;

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        (row < KEYPAD_ROWS && col < KEYPAD_COLS).then_some(row * KEYPAD_COLS + col)
    }
}

/// Narrowest cell that still fits a bracketed label
const MIN_BUTTON_WIDTH: u16 = 3;

/// Cell size for a keypad drawn inside `width` x `height`, or `None` when
/// the buttons would not be drawn
fn cell_size(width: u16, height: u16) -> Option<(u16, u16)> {
    let btn_width = width / KEYPAD_COLS as u16;
    let btn_height = height / KEYPAD_ROWS as u16;
    (btn_width >= MIN_BUTTON_WIDTH && btn_height > 0).then_some((btn_width, btn_height))
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
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let Some((btn_width, btn_height)) = cell_size(inner.width, inner.height) else {
            return;
        };

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let label = format!("[{}]", btn.label());
            let label_width = label.chars().count() as u16;
            let label_x = x + btn_width.saturating_sub(label_width) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(label_x, label_y, &Span::styled(label, btn.style()), btn_width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(keypad: &Keypad, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(keypad).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    // ===== Keypad tests =====

    #[test]
    fn test_get_button_at() {
        let keypad = Keypad::default();
        assert_eq!(keypad.get_button_at(0, 1).unwrap().label(), "⌫");
        assert_eq!(keypad.get_button_at(4, 0).unwrap().label(), "0");
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_find_button_by_label() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_button_by_label("C"), Some(0));
        assert_eq!(keypad.find_button_by_label("+"), Some(19));
        assert_eq!(keypad.find_button_by_label("^"), None);
    }

    #[test]
    fn test_find_button_for_key() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_button_for_key("*"), keypad.find_button_by_label("×"));
        assert_eq!(keypad.find_button_for_key("/"), keypad.find_button_by_label("÷"));
        assert_eq!(keypad.find_button_for_key("Enter"), keypad.find_button_by_label("="));
        assert_eq!(keypad.find_button_for_key("="), keypad.find_button_by_label("="));
        assert_eq!(keypad.find_button_for_key("Escape"), Some(0));
        assert_eq!(keypad.find_button_for_key("Backspace"), Some(1));
        assert_eq!(keypad.find_button_for_key("x"), None);
    }

    #[test]
    fn test_highlight_key() {
        let mut keypad = Keypad::new();
        keypad.highlight_key("5");
        let five = keypad.find_button_by_label("5").unwrap();
        assert!(keypad.get_button(five).unwrap().pressed);
        assert_eq!(keypad.buttons().filter(|b| b.pressed).count(), 1);

        keypad.highlight_key("x");
        assert_eq!(keypad.buttons().filter(|b| b.pressed).count(), 0);
    }

    #[test]
    fn test_press_and_release() {
        let mut keypad = Keypad::new();
        keypad.press_button(3);
        keypad.press_button(99);
        assert!(keypad.get_button(3).unwrap().pressed);
        keypad.release_all();
        assert!(!keypad.get_button(3).unwrap().pressed);
    }

    #[test]
    fn test_buttons_with_positions() {
        let keypad = Keypad::new();
        let positions: Vec<_> = keypad.buttons_with_positions().map(|(pos, _)| pos).collect();
        assert_eq!(positions[0], (0, 0));
        assert_eq!(positions[5], (1, 1));
        assert_eq!(positions[19], (4, 3));
    }

    // ===== Hit test tests =====

    #[test]
    fn test_hit_test_corners() {
        let keypad = Keypad::new();
        // 4 columns of 5 cells, 5 rows of 2 cells, plus border
        let area = Rect::new(10, 5, 22, 12);
        assert_eq!(keypad.hit_test(area, 11, 6), Some(0));
        assert_eq!(keypad.hit_test(area, 30, 15), Some(19));
        assert_eq!(keypad.hit_test(area, 16, 8), Some(5));
    }

    #[test]
    fn test_hit_test_outside_and_border() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 5, 22, 12);
        assert_eq!(keypad.hit_test(area, 9, 6), None);
        assert_eq!(keypad.hit_test(area, 11, 17), None);
        assert_eq!(keypad.hit_test(area, 10, 6), None);
        assert_eq!(keypad.hit_test(area, 11, 5), None);
    }

    #[test]
    fn test_hit_test_too_small() {
        let keypad = Keypad::new();
        assert_eq!(keypad.hit_test(Rect::new(0, 0, 5, 5), 1, 1), None);
    }

    #[test]
    fn test_hit_test_ignores_undrawn_buttons() {
        let keypad = Keypad::new();
        // Cells two columns wide leave no room for "[x]", so nothing is drawn
        let area = Rect::new(0, 0, 10, 12);
        assert!(!rendered(&keypad, 10, 12).contains('['));
        for x in 1..9 {
            for y in 1..11 {
                assert_eq!(keypad.hit_test(area, x, y), None, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_hit_test_at_minimum_drawn_width() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 14, 7);
        assert!(rendered(&keypad, 14, 7).contains("[C]"));
        assert_eq!(keypad.hit_test(area, 1, 1), Some(0));
        assert_eq!(keypad.hit_test(area, 12, 5), Some(19));
    }

    // ===== Widget tests =====

    #[test]
    fn test_widget_renders_labels() {
        let content = rendered(&Keypad::new(), 22, 12);
        assert!(content.contains("Keypad"));
        for label in ["[7]", "[=]", "[C]", "[(]", "[+]"] {
            assert!(content.contains(label), "{label}");
        }
    }

    #[test]
    fn test_widget_too_small_draws_border_only() {
        let content = rendered(&Keypad::new(), 4, 4);
        assert!(!content.contains("[7]"));
    }

    #[test]
    fn test_button_styles() {
        let keypad = Keypad::new();
        let style_of = |label| {
            keypad
                .get_button(keypad.find_button_by_label(label).unwrap())
                .unwrap()
                .style()
        };
        assert_eq!(style_of("7").fg, Some(Color::White));
        assert_eq!(style_of("×").fg, Some(Color::Yellow));
        assert_eq!(style_of("=").fg, Some(Color::Green));
        assert_eq!(style_of("C").fg, Some(Color::Red));
        assert_eq!(style_of("(").fg, Some(Color::Cyan));
    }

    #[test]
    fn test_pressed_style() {
        let mut button = KeypadButton::new(KEYPAD_LAYOUT[1][0]);
        button.set_pressed(true);
        assert_eq!(button.style().bg, Some(Color::Yellow));
    }
}
