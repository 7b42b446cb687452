//! calcpad - a keypad calculator
//!
//! An expression buffer driven by button presses and key strokes, with a
//! terminal front end and a browser front end sharing one input adapter.
//!
//! - [`core`]: the expression buffer, parser, evaluator and number formatting
//! - [`input`]: controls and keys to buffer actions, plus the display surface
//! - [`tui`]: ratatui front end (feature `tui`)
//! - [`wasm`]: DOM front end; the live browser binding needs feature `wasm`
//!
//! # Example
//!
//! ```rust
//! use calcpad::prelude::*;
//!
//! let mut buffer = ExpressionBuffer::new();
//! buffer.append("2+3*4");
//! assert_eq!(buffer.evaluate(), Readout::Expression("14".into()));
//!
//! // Failures clear the buffer and show "Error" once
//! buffer.append("/0");
//! assert_eq!(buffer.evaluate().text(), "Error");
//! assert!(buffer.is_empty());
//!
//! // The input adapter renders onto any surface
//! let mut adapter = InputAdapter::new(String::new());
//! adapter.handle_key("7");
//! adapter.handle_control(&Control::value("×"));
//! adapter.handle_key("6");
//! adapter.handle_key("Enter");
//! assert_eq!(adapter.surface(), "42");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod input;

#[cfg(feature = "tui")]
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

/// WASM module - always available for testing
/// (the mock DOM allows testing without browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError};
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{
        format_number, BufferState, CalcError, CalcResult, ExpressionBuffer, Invalid, Operation,
        Readout,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::input::{
        Action, Control, DisplaySurface, InputAdapter, KeyDisposition, NamedAction,
    };

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmCalculator, WasmDriver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("2 + 3"), Ok(5.0));
    }

    #[test]
    fn test_parser_direct() {
        let ast = Parser::parse_str("1 + 2 * 3").unwrap();
        assert_eq!(Evaluator::new().evaluate(&ast), 7.0);
    }

    #[test]
    fn test_buffer_session() {
        let mut buffer = ExpressionBuffer::new();
        assert_eq!(buffer.state(), BufferState::Empty);
        buffer.append("1+1");
        assert_eq!(buffer.evaluate().text(), "2");
        buffer.append("+3");
        assert_eq!(buffer.evaluate().text(), "5");
    }

    #[test]
    fn test_error_handling() {
        let eval = Evaluator::new();
        assert!(matches!(
            eval.evaluate_str("1 / 0").unwrap_err().cause(),
            Invalid::NonFinite(_)
        ));
        assert!(matches!(
            eval.evaluate_str("1 + * 2").unwrap_err().cause(),
            Invalid::Syntax(_)
        ));
        assert!(matches!(
            eval.evaluate_str("").unwrap_err().cause(),
            Invalid::Syntax(_)
        ));
    }

    #[test]
    fn test_format_number_reexport() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(Operation::Multiply.symbol(), "*");
    }

    #[test]
    fn test_adapter_over_mock_dom() {
        let mut calc = WasmCalculator::new();
        calc.click("key-8");
        calc.key_down("Enter");
        assert_eq!(calc.display(), "8");
    }
}
