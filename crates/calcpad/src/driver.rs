//! Unified Calculator Driver
//!
//! Write the interaction once, run it against every front end. Each front
//! end implements [`CalculatorDriver`]; the `verify_*` functions below drive
//! a front end through its keypad and keyboard and assert on what the
//! display shows.

use crate::input::KeyDisposition;

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses the keypad button with `label`; false if there is none
    fn press(&mut self, label: &str) -> bool;

    /// Types a key by DOM key name
    fn type_key(&mut self, key: &str) -> KeyDisposition;

    /// Returns the display text
    fn display(&self) -> String;

    /// Returns the raw buffer text
    fn expression(&self) -> String;

    /// Types every character of `text` as a key
    fn type_text(&mut self, text: &str) {
        let mut key = [0u8; 4];
        for c in text.chars() {
            self.type_key(c.encode_utf8(&mut key));
        }
    }

    /// Presses each labelled button in order
    fn press_all(&mut self, labels: &[&str]) {
        for label in labels {
            self.press(label);
        }
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::input::KeyDisposition;
    use crate::tui::CalculatorApp;

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, label: &str) -> bool {
            match self.app.keypad().find_button_by_label(label) {
                Some(index) => {
                    self.app.press_button(index);
                    true
                }
                None => false,
            }
        }

        fn type_key(&mut self, key: &str) -> KeyDisposition {
            self.app.type_key(key)
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn expression(&self) -> String {
            self.app.expression().to_string()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared checks =====
// These work with ANY CalculatorDriver implementation

fn reset<D: CalculatorDriver>(driver: &mut D) {
    driver.type_key("Escape");
    assert_eq!(driver.display(), "0");
}

/// Verifies that clear always yields `"0"` and an empty buffer
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.type_text("12+3");
    assert!(driver.press("C"));
    assert_eq!(driver.display(), "0");
    assert!(driver.expression().is_empty());

    driver.type_text("(");
    driver.type_key("Enter");
    assert_eq!(driver.display(), "Error");
    driver.press("C");
    assert_eq!(driver.display(), "0");
}

/// Verifies that delete on an empty buffer is a no-op
pub fn verify_delete<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.press_all(&["⌫", "⌫"]);
    assert_eq!(driver.display(), "0");
    assert!(driver.expression().is_empty());

    driver.type_text("123");
    driver.type_key("Backspace");
    assert_eq!(driver.display(), "12");
    driver.press_all(&["⌫", "⌫"]);
    assert_eq!(driver.display(), "0");
}

/// Verifies the leading-zero rules
pub fn verify_leading_zero<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.press_all(&["0", "0"]);
    assert_eq!(driver.expression(), "0");
    driver.press("5");
    assert_eq!(driver.expression(), "5");

    reset(driver);
    driver.press_all(&["0", "."]);
    assert_eq!(driver.expression(), "0.");

    reset(driver);
    driver.press_all(&["0", "+"]);
    assert_eq!(driver.expression(), "0+");
}

/// Verifies `*` and `/` bind tighter than `+` and `-`
pub fn verify_precedence<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.type_text("2+3*4");
    driver.type_key("Enter");
    assert_eq!(driver.display(), "14");

    reset(driver);
    driver.type_text("(2+3)*4=");
    assert_eq!(driver.display(), "20");
}

/// Verifies the display glyphs on the keypad insert canonical operators
pub fn verify_keypad_glyphs<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.press_all(&["6", "×", "7"]);
    assert_eq!(driver.expression(), "6*7");
    driver.press("=");
    assert_eq!(driver.display(), "42");

    reset(driver);
    driver.press_all(&["9", "÷", "2", "="]);
    assert_eq!(driver.display(), "4.5");
}

/// Verifies division by zero and malformed input show `"Error"` once
pub fn verify_errors<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.press_all(&["5", "÷", "0", "="]);
    assert_eq!(driver.display(), "Error");
    assert!(driver.expression().is_empty());
    driver.press("7");
    assert_eq!(driver.display(), "7");

    reset(driver);
    driver.type_text("2++");
    driver.type_key("=");
    assert_eq!(driver.display(), "Error");
    assert!(driver.expression().is_empty());
}

/// Verifies results can be chained
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.type_text("1+1");
    driver.type_key("Enter");
    assert_eq!(driver.display(), "2");
    driver.type_text("+3");
    driver.type_key("Enter");
    assert_eq!(driver.display(), "5");

    // Evaluating a bare result leaves it unchanged
    driver.type_key("Enter");
    assert_eq!(driver.display(), "5");
}

/// Verifies unrecognised keys are ignored
pub fn verify_ignored_keys<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.type_text("4");
    for key in ["a", "^", "%", "Tab", "ArrowLeft"] {
        assert_eq!(driver.type_key(key), KeyDisposition::Ignored, "{key}");
    }
    assert_eq!(driver.display(), "4");
    assert!(!driver.press("^"));
}

/// Complete verification suite
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_clear(driver);
    verify_delete(driver);
    verify_leading_zero(driver);
    verify_precedence(driver);
    verify_keypad_glyphs(driver);
    verify_errors(driver);
    verify_chaining(driver);
    verify_ignored_keys(driver);
}
