//! Mock DOM for WASM Testing
//!
//! A small in-memory stand-in for the browser document: elements with ids,
//! attributes and classes, plus a log of dispatched events. The calculator
//! page is reproduced by [`MockDom::calculator`], so the browser wiring can be
//! tested without web-sys.

use std::collections::HashMap;

use super::keypad::WasmKeypad;
use crate::input::DisplaySurface;

/// Id of the display element
pub const DISPLAY_ID: &str = "display";

/// Class carried by every keypad control
pub const KEY_CLASS: &str = "key";

/// Attribute holding a control's literal value
pub const VALUE_ATTR: &str = "data-value";

/// Attribute holding a control's named action
pub const ACTION_ATTR: &str = "data-action";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events the calculator listens to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Keydown event on the window
    KeyDown {
        /// `KeyboardEvent.key`
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// A dispatched event and whether its default behaviour was suppressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchedEvent {
    /// The event
    pub event: DomEvent,
    /// Whether `preventDefault` was called
    pub default_prevented: bool,
}

/// Mock DOM for testing WASM calculator without browser.
///
/// The document is flat: elements are kept by id in registration order,
/// which stands in for document order.
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID
    elements: HashMap<String, DomElement>,
    /// Registration order, for document-order queries
    order: Vec<String>,
    /// Event history for verification
    event_history: Vec<DispatchedEvent>,
}

impl MockDom {
    /// Creates a new mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page: a `#display` element and one `.key`
    /// button per keypad control
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let display = DomElement::new("div")
            .with_id(DISPLAY_ID)
            .with_class("display")
            .with_text("0");

        dom.register_element(display);
        for button in WasmKeypad::new().create_dom_elements() {
            dom.register_element(button);
        }

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if element.id.is_empty() {
            return;
        }
        if !self.elements.contains_key(&element.id) {
            self.order.push(element.id.clone());
        }
        self.elements.insert(element.id.clone(), element);
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Returns the registered elements carrying `class`, in document order
    #[must_use]
    pub fn elements_with_class(&self, class: &str) -> Vec<&DomElement> {
        self.order
            .iter()
            .filter_map(|id| self.elements.get(id))
            .filter(|elem| elem.has_class(class))
            .collect()
    }

    /// Records a dispatched event
    pub fn record_event(&mut self, event: DomEvent, default_prevented: bool) {
        self.event_history.push(DispatchedEvent {
            event,
            default_prevented,
        });
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DispatchedEvent] {
        &self.event_history
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }
}

impl DisplaySurface for MockDom {
    fn render(&mut self, text: &str) {
        self.set_element_text(DISPLAY_ID, text);
    }
}
