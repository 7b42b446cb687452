//! Core calculator: expression buffer, parser and evaluator
//!
//! Everything here is front-end agnostic. The input adapter and the TUI/WASM
//! front ends only ever talk to [`ExpressionBuffer`].

pub mod buffer;
pub mod evaluator;
mod format;
mod operations;
pub mod parser;

pub use buffer::{BufferState, ExpressionBuffer, Readout, EMPTY_TEXT, ERROR_TEXT};
pub use format::format_number;
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error type.
///
/// There is a single error kind; the wrapped [`Invalid`] says why the
/// expression was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The buffer does not hold a computable arithmetic expression
    #[error("Invalid expression: {0}")]
    InvalidExpression(#[from] Invalid),
}

/// Why an expression was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Invalid {
    /// A character outside the arithmetic alphabet
    #[error("unexpected character '{0}'")]
    DisallowedChar(char),
    /// The expression does not parse
    #[error("{0}")]
    Syntax(String),
    /// The result is infinite or not a number
    #[error("result is not finite ({0})")]
    NonFinite(f64),
    /// The result can only be written in exponent notation
    #[error("result {0} cannot be entered on the keypad")]
    Unrepresentable(String),
}

impl CalcError {
    /// Creates a syntax error
    #[must_use]
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::InvalidExpression(Invalid::Syntax(message.into()))
    }

    /// Returns the cause of the error
    #[must_use]
    pub fn cause(&self) -> &Invalid {
        match self {
            Self::InvalidExpression(cause) => cause,
        }
    }
}

/// Operator characters accepted in the buffer
pub const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Returns true if `c` belongs to the arithmetic alphabet
/// (`0-9 + - * / ( ) .` and whitespace)
#[must_use]
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_digit()
        || OPERATORS.contains(&c)
        || matches!(c, '(' | ')' | '.')
        || c.is_whitespace()
}

/// Checks a whole expression against the arithmetic alphabet
pub fn validate_alphabet(expression: &str) -> CalcResult<()> {
    match expression.chars().find(|c| !is_allowed_char(*c)) {
        Some(c) => Err(Invalid::DisallowedChar(c).into()),
        None => Ok(()),
    }
}
