//! Browser bindings
//!
//! Binds the input adapter to the real document: a click listener on every
//! `.key` element, a keydown listener on the window, and `#display` as the
//! rendering target. The module mounts itself on start.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Element, Event, KeyboardEvent};

use super::dom::{ACTION_ATTR, DISPLAY_ID, KEY_CLASS, VALUE_ATTR};
use crate::input::{Control, DisplaySurface, InputAdapter};

/// `#display` as a rendering target
#[derive(Debug)]
struct ElementSurface(Element);

impl DisplaySurface for ElementSurface {
    fn render(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

type SharedAdapter = Rc<RefCell<InputAdapter<ElementSurface>>>;

/// Browser Calculator - the live page binding
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    adapter: SharedAdapter,
    listeners: Vec<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Binds to the current document
    pub fn mount() -> Result<BrowserCalculator, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let display = document
            .get_element_by_id(DISPLAY_ID)
            .ok_or_else(|| JsValue::from_str("missing #display element"))?;

        let adapter: SharedAdapter =
            Rc::new(RefCell::new(InputAdapter::new(ElementSurface(display))));
        let mut listeners = Vec::new();

        let keys = document.query_selector_all(&format!(".{KEY_CLASS}"))?;
        for index in 0..keys.length() {
            let Some(element) = keys.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let target = element.clone();
            let shared = Rc::clone(&adapter);
            let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let control = Control {
                    value: target.get_attribute(VALUE_ATTR),
                    action: target.get_attribute(ACTION_ATTR),
                };
                shared.borrow_mut().handle_control(&control);
            });
            element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            listeners.push(on_click);
        }

        let shared = Rc::clone(&adapter);
        let on_keydown = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if shared
                .borrow_mut()
                .handle_key(&key_event.key())
                .prevent_default()
            {
                event.prevent_default();
            }
        });
        window.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
        listeners.push(on_keydown);

        Ok(Self { adapter, listeners })
    }

    /// Returns the raw buffer text
    #[wasm_bindgen(getter)]
    pub fn expression(&self) -> String {
        self.adapter.borrow().buffer().text().to_string()
    }

    /// Returns the number of bound listeners
    #[wasm_bindgen(getter)]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Mounts the calculator when the module is instantiated
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    match BrowserCalculator::mount() {
        Ok(calculator) => {
            console::log_1(&format!("calcpad mounted ({} listeners)", calculator.listener_count()).into());
            // Listeners must outlive this call; the page owns them from here on
            std::mem::forget(calculator);
        }
        Err(err) => console::error_2(&"calcpad failed to mount:".into(), &err),
    }
}
