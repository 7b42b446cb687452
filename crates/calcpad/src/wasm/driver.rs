//! WASM Driver - Unified Testing Interface
//!
//! Implements [`CalculatorDriver`] for the mock-DOM calculator so the
//! shared checks run against the browser wiring too.

use super::calculator::WasmCalculator;
use super::dom::MockDom;
use super::keypad::WasmKeypad;
use crate::driver::CalculatorDriver;
use crate::input::KeyDisposition;

/// WASM Driver wrapping the calculator and its keypad layout
#[derive(Debug, Default)]
pub struct WasmDriver {
    /// The calculator instance
    calculator: WasmCalculator,
    /// Label to element-id lookup
    keypad: WasmKeypad,
}

impl WasmDriver {
    /// Creates a new WASM driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a WASM driver with an existing calculator
    #[must_use]
    pub fn with_calculator(calculator: WasmCalculator) -> Self {
        Self {
            calculator,
            keypad: WasmKeypad::new(),
        }
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &WasmCalculator {
        &self.calculator
    }

    /// Returns a mutable reference to the calculator
    pub fn calculator_mut(&mut self) -> &mut WasmCalculator {
        &mut self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.calculator.dom()
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, label: &str) -> bool {
        let Some(id) = self
            .keypad
            .find_button_by_label(label)
            .map(|btn| btn.id.clone())
        else {
            return false;
        };
        self.calculator.click(&id);
        true
    }

    fn type_key(&mut self, key: &str) -> KeyDisposition {
        self.calculator.key_down(key)
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn expression(&self) -> String {
        self.calculator.expression().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{
        run_all_checks, verify_chaining, verify_clear, verify_delete, verify_errors,
        verify_ignored_keys, verify_keypad_glyphs, verify_leading_zero, verify_precedence,
    };
    use crate::wasm::dom::DomEvent;

    #[test]
    fn test_wasm_driver_new() {
        let driver = WasmDriver::new();
        assert_eq!(driver.display(), "0");
        assert!(driver.expression().is_empty());
    }

    #[test]
    fn test_wasm_driver_with_calculator() {
        let mut calc = WasmCalculator::new();
        calc.key_down("9");
        let driver = WasmDriver::with_calculator(calc);
        assert_eq!(driver.display(), "9");
    }

    #[test]
    fn test_wasm_driver_calculator_access() {
        let mut driver = WasmDriver::new();
        driver.calculator_mut().click("key-4");
        assert_eq!(driver.calculator().expression(), "4");
    }

    #[test]
    fn test_press_dispatches_click() {
        let mut driver = WasmDriver::new();
        assert!(driver.press("×"));
        assert_eq!(
            driver.dom().event_history().last().unwrap().event,
            DomEvent::click("key-times")
        );
    }

    #[test]
    fn test_press_unknown_label() {
        let mut driver = WasmDriver::new();
        assert!(!driver.press("%"));
        assert!(driver.dom().event_history().is_empty());
    }

    #[test]
    fn test_type_text_prevents_default() {
        let mut driver = WasmDriver::new();
        driver.type_text("1+2");
        assert!(driver
            .dom()
            .event_history()
            .iter()
            .all(|e| e.default_prevented));
    }

    // ===== Shared check tests =====

    #[test]
    fn test_unified_clear() {
        verify_clear(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_delete() {
        verify_delete(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_leading_zero() {
        verify_leading_zero(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_precedence() {
        verify_precedence(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_keypad_glyphs() {
        verify_keypad_glyphs(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_errors() {
        verify_errors(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_chaining() {
        verify_chaining(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_ignored_keys() {
        verify_ignored_keys(&mut WasmDriver::new());
    }

    #[test]
    fn test_all_checks() {
        run_all_checks(&mut WasmDriver::new());
    }
}
