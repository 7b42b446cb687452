//! WASM Calculator
//!
//! The browser wiring run against the mock DOM: clicks read the clicked
//! element's `data-value` / `data-action` attributes, key events go through
//! the keyboard mapping, and the readout lands in `#display`.

use super::dom::{DomEvent, MockDom, ACTION_ATTR, DISPLAY_ID, KEY_CLASS, VALUE_ATTR};
use crate::core::Readout;
use crate::input::{Control, InputAdapter, KeyDisposition};

/// WASM Calculator bound to a mock document
#[derive(Debug)]
pub struct WasmCalculator {
    adapter: InputAdapter<MockDom>,
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmCalculator {
    /// Creates a calculator on a fresh calculator page
    #[must_use]
    pub fn new() -> Self {
        Self::with_dom(MockDom::calculator())
    }

    /// Creates a calculator on an existing document; the display is reset
    /// to `"0"`
    #[must_use]
    pub fn with_dom(dom: MockDom) -> Self {
        Self {
            adapter: InputAdapter::new(dom),
        }
    }

    /// Clicks an element. Returns `None` if the element is not a keypad
    /// control or resolves to no action.
    pub fn click(&mut self, element_id: &str) -> Option<Readout> {
        let control = self
            .adapter
            .surface()
            .get_element(element_id)
            .filter(|elem| elem.has_class(KEY_CLASS))
            .map(|elem| Control {
                value: elem.get_attr(VALUE_ATTR).map(str::to_string),
                action: elem.get_attr(ACTION_ATTR).map(str::to_string),
            });

        self.adapter
            .surface_mut()
            .record_event(DomEvent::click(element_id), false);

        self.adapter.handle_control(&control?)
    }

    /// Dispatches a keydown event on the window
    pub fn key_down(&mut self, key: &str) -> KeyDisposition {
        let disposition = self.adapter.handle_key(key);
        self.adapter
            .surface_mut()
            .record_event(DomEvent::key_down(key), disposition.prevent_default());
        disposition
    }

    /// Returns the `#display` text
    #[must_use]
    pub fn display(&self) -> &str {
        self.dom().get_element_text(DISPLAY_ID).unwrap_or_default()
    }

    /// Returns the raw buffer text
    #[must_use]
    pub fn expression(&self) -> &str {
        self.adapter.buffer().text()
    }

    /// Returns the document
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.adapter.surface()
    }
}
