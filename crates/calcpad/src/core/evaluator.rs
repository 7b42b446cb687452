//! AST evaluator
//!
//! Evaluation itself cannot fail: intermediate infinities and NaNs propagate
//! as IEEE-754 values. The finiteness check happens once, on the final value.

use crate::core::parser::{AstNode, Parser};
use crate::core::{format_number, is_allowed_char, validate_alphabet, CalcResult, Invalid};

/// Evaluator for arithmetic expressions
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an AST node
    #[must_use]
    pub fn evaluate(&self, node: &AstNode) -> f64 {
        match node {
            AstNode::Number(n) => *n,
            AstNode::Negate(inner) => -self.evaluate(inner),
            AstNode::BinaryOp { left, op, right } => {
                op.apply(self.evaluate(left), self.evaluate(right))
            }
        }
    }

    /// Validates, parses and evaluates a string expression.
    ///
    /// Fails when the text leaves the arithmetic alphabet, does not parse, or
    /// produces an infinite or NaN result.
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        validate_alphabet(input)?;
        let ast = Parser::parse_str(input)?;
        let value = self.evaluate(&ast);

        if !value.is_finite() {
            return Err(Invalid::NonFinite(value).into());
        }

        Ok(value)
    }

    /// Evaluates an expression and formats the result as the text that
    /// replaces the buffer.
    ///
    /// Results that can only be written in exponent notation are rejected so
    /// the buffer never leaves the arithmetic alphabet.
    pub fn evaluate_to_text(&self, input: &str) -> CalcResult<String> {
        let value = self.evaluate_str(input)?;
        let text = format_number(value);

        if !text.chars().all(is_allowed_char) {
            return Err(Invalid::Unrepresentable(text).into());
        }

        Ok(text)
    }
}
