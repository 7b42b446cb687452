//! TUI Frontend for Calculator

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{key_name, InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{layout, render, CalculatorUI, UiLayout, HELP_SHORTCUTS};
