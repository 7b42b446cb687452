//! WASM Frontend for Calculator
//!
//! The browser binding lives behind the `wasm` feature; everything else runs
//! against the mock DOM and is always compiled so it can be tested natively.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::WasmCalculator;
pub use dom::{
    DispatchedEvent, DomElement, DomEvent, MockDom, ACTION_ATTR, DISPLAY_ID, KEY_CLASS, VALUE_ATTR,
};
pub use driver::WasmDriver;
pub use keypad::{KeypadButtonDef, WasmKeypad};
