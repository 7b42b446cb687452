//! WASM Keypad for Calculator
//!
//! Lays the shared keypad out as DOM buttons. Each button carries the
//! `data-value` / `data-action` attributes the browser click handler reads.

use super::dom::{DomElement, ACTION_ATTR, KEY_CLASS, VALUE_ATTR};
use crate::input::{KeypadKey, KEYPAD_COLS, KEYPAD_LAYOUT, KEYPAD_ROWS};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The control behind this button
    pub key: KeypadKey,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(key: KeypadKey, row: usize, col: usize) -> Self {
        Self {
            id: key.id(),
            key,
            row,
            col,
        }
    }

    /// Builds the `<button>` element for this definition
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        let mut button = DomElement::new("button")
            .with_id(&self.id)
            .with_class(KEY_CLASS)
            .with_class(&format!("keypad-row-{}", self.row))
            .with_class(&format!("keypad-col-{}", self.col))
            .with_text(self.key.label);
        if let Some(value) = self.key.value {
            button = button.with_attr(VALUE_ATTR, value);
        }
        if let Some(action) = self.key.action {
            button = button.with_attr(ACTION_ATTR, action.name());
        }
        if self.key.is_operator() {
            button = button.with_class("operator");
        }
        button
    }
}

/// WASM Keypad layout
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    /// Button definitions, row-major
    buttons: Vec<KeypadButtonDef>,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = KEYPAD_LAYOUT
            .iter()
            .enumerate()
            .flat_map(|(row, keys)| {
                keys.iter()
                    .enumerate()
                    .map(move |(col, key)| KeypadButtonDef::new(*key, row, col))
            })
            .collect();
        Self { buttons }
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row < KEYPAD_ROWS && col < KEYPAD_COLS {
            self.buttons.get(row * KEYPAD_COLS + col)
        } else {
            None
        }
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.key.label == label)
    }

    /// Creates DOM elements for all keypad buttons
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons.iter().map(KeypadButtonDef::to_element).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NamedAction;

    #[test]
    fn test_get_button_at() {
        let keypad = WasmKeypad::default();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().key.label, "C");
        assert_eq!(keypad.get_button_at(1, 3).unwrap().key.label, "÷");
        assert_eq!(keypad.get_button_at(4, 2).unwrap().id, "key-calculate");
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_button_rows_and_cols() {
        let keypad = WasmKeypad::new();
        let five = keypad.find_button_by_label("5").unwrap();
        assert_eq!((five.row, five.col), (2, 1));
    }

    #[test]
    fn test_find_button_by_id() {
        let keypad = WasmKeypad::new();
        let delete = keypad.find_button_by_id("key-delete").unwrap();
        assert_eq!(delete.key.action, Some(NamedAction::Delete));
        assert!(keypad.find_button_by_id("key-power").is_none());
    }

    #[test]
    fn test_find_button_by_label() {
        let keypad = WasmKeypad::new();
        assert_eq!(keypad.find_button_by_label("×").unwrap().id, "key-times");
        assert!(keypad.find_button_by_label("^").is_none());
    }

    #[test]
    fn test_button_element_value_attrs() {
        let keypad = WasmKeypad::new();
        let elem = keypad.find_button_by_label("÷").unwrap().to_element();
        assert_eq!(elem.tag, "button");
        assert_eq!(elem.get_attr(VALUE_ATTR), Some("÷"));
        assert_eq!(elem.get_attr(ACTION_ATTR), None);
        assert!(elem.has_class(KEY_CLASS));
        assert!(elem.has_class("operator"));
        assert!(elem.has_class("keypad-row-1"));
        assert!(elem.has_class("keypad-col-3"));
    }

    #[test]
    fn test_button_element_action_attrs() {
        let keypad = WasmKeypad::new();
        let elem = keypad.find_button_by_label("C").unwrap().to_element();
        assert_eq!(elem.get_attr(ACTION_ATTR), Some("clear"));
        assert_eq!(elem.get_attr(VALUE_ATTR), None);
        assert!(!elem.has_class("operator"));
    }

    #[test]
    fn test_create_dom_elements_in_layout_order() {
        let elements = WasmKeypad::new().create_dom_elements();
        assert_eq!(elements.len(), 20);
        assert_eq!(elements[0].text_content, "C");
        assert_eq!(elements[19].id, "key-plus");
    }
}
