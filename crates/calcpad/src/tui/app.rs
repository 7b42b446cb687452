//! TUI Application State

use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::config::CalculatorConfig;
use crate::core::{Readout, ERROR_TEXT};
use crate::input::{InputAdapter, KeyDisposition};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// Buffer plus the rendered display text
    adapter: InputAdapter<String>,
    /// Clickable keypad with highlight state
    keypad: Keypad,
    /// Settings the app was started with
    config: CalculatorConfig,
    /// Whether the help panel is visible
    show_help: bool,
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
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator app from a configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            adapter: InputAdapter::new(String::new()),
            keypad: Keypad::new(),
            show_help: config.show_help,
            config,
            should_quit: false,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.adapter.surface()
    }

    /// Returns the raw buffer text
    #[must_use]
    pub fn expression(&self) -> &str {
        self.adapter.buffer().text()
    }

    /// Returns true while the display shows the error readout
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display() == ERROR_TEXT
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns whether the help panel is visible
    #[must_use]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Shows or hides the help panel
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies a keyboard action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Calculator(key) => {
                self.type_key(&key);
            }
            KeyAction::ToggleHelp => self.toggle_help(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Types a key by DOM key name, highlighting its keypad button
    pub fn type_key(&mut self, key: &str) -> KeyDisposition {
        self.keypad.highlight_key(key);
        self.adapter.handle_key(key)
    }

    /// Presses a keypad button by index
    pub fn press_button(&mut self, index: usize) -> Option<Readout> {
        let control = self.keypad.get_button(index)?.key.control();
        self.keypad.release_all();
        self.keypad.press_button(index);
        self.adapter.handle_control(&control)
    }

    /// Presses a keypad button by label
    pub fn press_label(&mut self, label: &str) -> Option<Readout> {
        let index = self.keypad.find_button_by_label(label)?;
        self.press_button(index)
    }

    /// Handles a mouse click at `(x, y)` on a keypad drawn in `keypad_area`
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<Readout> {
        let index = self.keypad.hit_test(keypad_area, x, y)?;
        self.press_button(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_all(app: &mut CalculatorApp, keys: &[&str]) {
        for key in keys {
            app.type_key(key);
        }
    }

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.display(), "0");
        assert!(app.expression().is_empty());
        assert!(!app.is_error());
        assert!(!app.should_quit());
        assert!(app.show_help());
    }

    #[test]
    fn test_app_with_config() {
        let config = CalculatorConfig {
            show_help: false,
            title: " custom ".into(),
            ..CalculatorConfig::default()
        };
        let app = CalculatorApp::with_config(config);
        assert!(!app.show_help());
        assert_eq!(app.config().title, " custom ");
    }

    // ===== Key tests =====

    #[test]
    fn test_type_keys_and_evaluate() {
        let mut app = CalculatorApp::default();
        type_all(&mut app, &["2", "+", "3", "*", "4"]);
        assert_eq!(app.display(), "2+3*4");
        assert_eq!(app.type_key("Enter"), KeyDisposition::Handled);
        assert_eq!(app.display(), "14");
        assert_eq!(app.expression(), "14");
    }

    #[test]
    fn test_type_key_highlights_button() {
        let mut app = CalculatorApp::new();
        app.type_key("*");
        let pressed: Vec<_> = app.keypad().buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].label(), "×");
    }

    #[test]
    fn test_ignored_key() {
        let mut app = CalculatorApp::new();
        assert_eq!(app.type_key("x"), KeyDisposition::Ignored);
        assert_eq!(app.display(), "0");
    }

    #[test]
    fn test_error_then_fresh_input() {
        let mut app = CalculatorApp::new();
        type_all(&mut app, &["5", "/", "0", "Enter"]);
        assert!(app.is_error());
        assert!(app.expression().is_empty());
        app.type_key("3");
        assert!(!app.is_error());
        assert_eq!(app.display(), "3");
    }

    // ===== Action tests =====

    #[test]
    fn test_handle_action() {
        let mut app = CalculatorApp::new();
        app.handle_action(KeyAction::Calculator("9".into()));
        assert_eq!(app.display(), "9");

        app.handle_action(KeyAction::ToggleHelp);
        assert!(!app.show_help());

        app.handle_action(KeyAction::None);
        assert_eq!(app.display(), "9");

        app.handle_action(KeyAction::Quit);
        assert!(app.should_quit());
    }

    // ===== Keypad tests =====

    #[test]
    fn test_press_label() {
        let mut app = CalculatorApp::new();
        for label in ["6", "×", "7"] {
            app.press_label(label);
        }
        assert_eq!(app.display(), "6*7");
        assert_eq!(app.press_label("="), Some(Readout::Expression("42".into())));
        assert_eq!(app.press_label("^"), None);
    }

    #[test]
    fn test_press_delete_and_clear() {
        let mut app = CalculatorApp::new();
        for label in ["1", "2", "⌫"] {
            app.press_label(label);
        }
        assert_eq!(app.display(), "1");
        assert_eq!(app.press_label("C"), Some(Readout::Empty));
        assert_eq!(app.display(), "0");
    }

    #[test]
    fn test_press_button_out_of_range() {
        let mut app = CalculatorApp::new();
        assert_eq!(app.press_button(20), None);
    }

    #[test]
    fn test_click_keypad() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 22, 12);
        // Row 1, col 0 is "7"
        assert_eq!(app.click(area, 1, 3), Some(Readout::Expression("7".into())));
        assert!(app.keypad().get_button(4).unwrap().pressed);
        assert_eq!(app.click(area, 0, 0), None);
    }
}
