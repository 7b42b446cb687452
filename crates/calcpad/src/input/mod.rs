//! Input adapter
//!
//! Translates labelled-control activations and keyboard events into
//! [`ExpressionBuffer`] calls and renders the resulting [`Readout`] onto a
//! [`DisplaySurface`]. The adapter owns the buffer; front ends own the adapter.

mod layout;

pub use layout::{KeypadKey, KEYPAD_COLS, KEYPAD_LAYOUT, KEYPAD_ROWS};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::{ExpressionBuffer, Readout};

/// Semantic action derived from an input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a token to the buffer
    Insert(String),
    /// Empty the buffer
    Clear,
    /// Remove the last character
    Delete,
    /// Evaluate the buffer
    Evaluate,
}

/// Named control action carried by a control's action attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedAction {
    /// `clear`
    Clear,
    /// `delete`
    Delete,
    /// `calculate`
    Calculate,
}

impl NamedAction {
    /// Returns the attribute value naming this action
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Delete => "delete",
            Self::Calculate => "calculate",
        }
    }
}

impl fmt::Display for NamedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Action attribute that names no known action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown control action '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for NamedAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clear" => Ok(Self::Clear),
            "delete" => Ok(Self::Delete),
            "calculate" => Ok(Self::Calculate),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

impl From<NamedAction> for Action {
    fn from(action: NamedAction) -> Self {
        match action {
            NamedAction::Clear => Self::Clear,
            NamedAction::Delete => Self::Delete,
            NamedAction::Calculate => Self::Evaluate,
        }
    }
}

/// The two attributes a labelled control may carry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Control {
    /// Literal value token (`data-value`)
    pub value: Option<String>,
    /// Named action (`data-action`)
    pub action: Option<String>,
}

impl Control {
    /// Creates a control carrying a literal value
    #[must_use]
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            action: None,
        }
    }

    /// Creates a control carrying a named action
    #[must_use]
    pub fn action(action: NamedAction) -> Self {
        Self {
            value: None,
            action: Some(action.name().to_string()),
        }
    }

    /// Resolves the control to an action.
    ///
    /// A recognised action wins over the value. An unrecognised action falls
    /// back to the value, and a control with no non-empty value is ignored.
    #[must_use]
    pub fn resolve(&self) -> Option<Action> {
        if let Some(name) = self.action.as_deref() {
            match name.parse::<NamedAction>() {
                Ok(action) => return Some(action.into()),
                Err(err) => tracing::debug!(%err, "falling back to control value"),
            }
        }

        self.value
            .as_deref()
            .map(normalize_glyph)
            .filter(|token| !token.is_empty())
            .map(Action::Insert)
    }
}

/// Maps display-only glyphs to the canonical operator characters
/// (`×` → `*`, `÷` → `/`).
///
/// Every occurrence is replaced, not only a value made of a single glyph, so
/// a multi-character value such as `2×3` also becomes `2*3`.
#[must_use]
pub fn normalize_glyph(value: &str) -> String {
    value.replace('×', "*").replace('÷', "/")
}

/// Maps a keyboard key name to an action.
///
/// Key names follow the DOM `KeyboardEvent.key` convention: single
/// characters for printable keys, `Enter`, `Backspace`, `Escape` otherwise.
#[must_use]
pub fn key_to_action(key: &str) -> Option<Action> {
    match key {
        "Enter" | "=" => Some(Action::Evaluate),
        "Backspace" => Some(Action::Delete),
        "Escape" => Some(Action::Clear),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c @ ('0'..='9' | '+' | '-' | '*' | '/' | '.' | '(' | ')')), None) => {
                    Some(Action::Insert(c.to_string()))
                }
                _ => None,
            }
        }
    }
}

/// Whether a key event was consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Recognised; the host must suppress its default behaviour
    Handled,
    /// Not a calculator key
    Ignored,
}

impl KeyDisposition {
    /// Returns true if the host's default behaviour must be suppressed
    #[must_use]
    pub const fn prevent_default(self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// A single text-rendering target
pub trait DisplaySurface {
    /// Replaces the displayed text
    fn render(&mut self, text: &str);
}

impl DisplaySurface for String {
    fn render(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Owns the expression buffer and mirrors it onto a display surface
#[derive(Debug)]
pub struct InputAdapter<S> {
    buffer: ExpressionBuffer,
    surface: S,
}

impl<S: DisplaySurface> InputAdapter<S> {
    /// Creates an adapter and clears the buffer, so the surface shows `"0"`
    pub fn new(surface: S) -> Self {
        let mut adapter = Self {
            buffer: ExpressionBuffer::new(),
            surface,
        };
        adapter.dispatch(Action::Clear);
        adapter
    }

    /// Applies an action to the buffer and renders the outcome
    pub fn dispatch(&mut self, action: Action) -> Readout {
        let readout = match action {
            Action::Insert(token) => self.buffer.append(&token),
            Action::Clear => self.buffer.clear(),
            Action::Delete => self.buffer.delete(),
            Action::Evaluate => self.buffer.evaluate(),
        };
        self.surface.render(readout.text());
        readout
    }

    /// Handles activation of a labelled control; returns `None` if the
    /// control resolves to nothing
    pub fn handle_control(&mut self, control: &Control) -> Option<Readout> {
        let action = control.resolve()?;
        Some(self.dispatch(action))
    }

    /// Handles a keyboard event
    pub fn handle_key(&mut self, key: &str) -> KeyDisposition {
        match key_to_action(key) {
            Some(action) => {
                self.dispatch(action);
                KeyDisposition::Handled
            }
            None => {
                tracing::debug!(key, "ignored key");
                KeyDisposition::Ignored
            }
        }
    }

    /// Returns the expression buffer
    #[must_use]
    pub fn buffer(&self) -> &ExpressionBuffer {
        &self.buffer
    }

    /// Returns the display surface
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the display surface mutably
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
