//! Shared keypad layout
//!
//! ```text
//! [ C ] [ ⌫ ] [ ( ] [ ) ]
//! [ 7 ] [ 8 ] [ 9 ] [ ÷ ]
//! [ 4 ] [ 5 ] [ 6 ] [ × ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ 0 ] [ . ] [ = ] [ + ]
//! ```

use super::{Control, NamedAction};

/// Number of keypad rows
pub const KEYPAD_ROWS: usize = 5;

/// Number of keypad columns
pub const KEYPAD_COLS: usize = 4;

/// A labelled keypad control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadKey {
    /// Button label
    pub label: &'static str,
    /// Literal value, if any
    pub value: Option<&'static str>,
    /// Named action, if any
    pub action: Option<NamedAction>,
}

impl KeypadKey {
    const fn value(label: &'static str) -> Self {
        Self {
            label,
            value: Some(label),
            action: None,
        }
    }

    const fn action(label: &'static str, action: NamedAction) -> Self {
        Self {
            label,
            value: None,
            action: Some(action),
        }
    }

    /// Returns the control attributes for this key
    #[must_use]
    pub fn control(&self) -> Control {
        Control {
            value: self.value.map(str::to_string),
            action: self.action.map(|a| a.name().to_string()),
        }
    }

    /// Returns a stable element id, e.g. `key-7`, `key-times`, `key-clear`
    #[must_use]
    pub fn id(&self) -> String {
        if let Some(action) = self.action {
            return format!("key-{}", action.name());
        }
        let name = match self.label {
            "+" => "plus",
            "-" => "minus",
            "×" => "times",
            "÷" => "divide",
            "." => "dot",
            "(" => "open",
            ")" => "close",
            digit => digit,
        };
        format!("key-{name}")
    }

    /// Returns true for the operator keys
    #[must_use]
    pub fn is_operator(&self) -> bool {
        matches!(self.label, "+" | "-" | "×" | "÷")
    }
}

/// The keypad, row-major
pub const KEYPAD_LAYOUT: [[KeypadKey; KEYPAD_COLS]; KEYPAD_ROWS] = [
    [
        KeypadKey::action("C", NamedAction::Clear),
        KeypadKey::action("⌫", NamedAction::Delete),
        KeypadKey::value("("),
        KeypadKey::value(")"),
    ],
    [
        KeypadKey::value("7"),
        KeypadKey::value("8"),
        KeypadKey::value("9"),
        KeypadKey::value("÷"),
    ],
    [
        KeypadKey::value("4"),
        KeypadKey::value("5"),
        KeypadKey::value("6"),
        KeypadKey::value("×"),
    ],
    [
        KeypadKey::value("1"),
        KeypadKey::value("2"),
        KeypadKey::value("3"),
        KeypadKey::value("-"),
    ],
    [
        KeypadKey::value("0"),
        KeypadKey::value("."),
        KeypadKey::action("=", NamedAction::Calculate),
        KeypadKey::value("+"),
    ],
];
