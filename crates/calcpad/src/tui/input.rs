//! Keyboard input handling
//!
//! Crossterm key events are turned into the DOM-style key names the input
//! adapter understands, so the terminal and the browser share one mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// A key for the calculator, by DOM key name (`"7"`, `"Enter"`, ...)
    Calculator(String),
    /// Show or hide the help panel
    ToggleHelp,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
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
            KeyCode::Char('?') => KeyAction::ToggleHelp,
            code => key_name(code).map_or(KeyAction::None, KeyAction::Calculator),
        }
    }
}

/// Returns the DOM `KeyboardEvent.key` name for a key code
#[must_use]
pub fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(c) => Some(c.to_string()),
        KeyCode::Enter => Some("Enter".to_string()),
        KeyCode::Backspace => Some("Backspace".to_string()),
        KeyCode::Esc => Some("Escape".to_string()),
        KeyCode::Delete => Some("Delete".to_string()),
        KeyCode::Tab => Some("Tab".to_string()),
        _ => None,
    }
}
