//! Expression buffer
//!
//! Holds the expression under construction and implements the
//! append/delete/clear/evaluate state machine. Every operation returns the
//! [`Readout`] the display must show afterwards.
//!
//! States: Empty, Editing, and a transient Error. A failed evaluation clears
//! the buffer and returns [`Readout::Error`] once; nothing remembers the
//! failure, so the next input starts from Empty.

use std::fmt;

use crate::core::evaluator::Evaluator;
use crate::core::OPERATORS;

/// Text shown when the buffer is empty
pub const EMPTY_TEXT: &str = "0";

/// Text shown after a failed evaluation
pub const ERROR_TEXT: &str = "Error";

/// What the display shows after a buffer operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readout {
    /// Empty buffer, rendered as `"0"`
    Empty,
    /// The buffer text, rendered verbatim
    Expression(String),
    /// One-shot error display, rendered as `"Error"`
    Error,
}

impl Readout {
    /// Returns the text to render
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Empty => EMPTY_TEXT,
            Self::Expression(text) => text,
            Self::Error => ERROR_TEXT,
        }
    }

    /// Returns true for the error readout
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Persistent buffer state (the Error state is never stored)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferState {
    /// Nothing entered
    Empty,
    /// An expression is being edited
    Editing,
}

/// The expression under construction
#[derive(Debug, Default, Clone)]
pub struct ExpressionBuffer {
    text: String,
    evaluator: Evaluator,
}

impl ExpressionBuffer {
    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw buffer text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if nothing has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> BufferState {
        if self.text.is_empty() {
            BufferState::Empty
        } else {
            BufferState::Editing
        }
    }

    /// Returns what the display should show for the current text
    #[must_use]
    pub fn readout(&self) -> Readout {
        if self.text.is_empty() {
            Readout::Empty
        } else {
            Readout::Expression(self.text.clone())
        }
    }

    /// Appends a token.
    ///
    /// A lone `"0"` absorbs another `"0"` and is replaced by anything other
    /// than `"."` or an operator, so `0` then `5` reads `5` while `0` then `.`
    /// reads `0.`. Nothing else is validated here; malformed expressions are
    /// reported by [`evaluate`](Self::evaluate).
    pub fn append(&mut self, token: &str) -> Readout {
        if self.text == "0" {
            if token == "0" {
                return self.readout();
            }
            if token != "." && !is_operator(token) {
                self.text.clear();
            }
        }
        self.text.push_str(token);
        tracing::trace!(token, text = %self.text, "append");
        self.readout()
    }

    /// Removes the last character, if any
    pub fn delete(&mut self) -> Readout {
        self.text.pop();
        tracing::trace!(text = %self.text, "delete");
        self.readout()
    }

    /// Empties the buffer
    pub fn clear(&mut self) -> Readout {
        self.text.clear();
        tracing::trace!("clear");
        self.readout()
    }

    /// Evaluates the buffer.
    ///
    /// On success the canonical result replaces the buffer so it can be
    /// chained. On failure the buffer is emptied and [`Readout::Error`] is
    /// returned. An empty buffer is left alone.
    pub fn evaluate(&mut self) -> Readout {
        if self.text.is_empty() {
            return self.readout();
        }

        match self.evaluator.evaluate_to_text(&self.text) {
            Ok(result) => {
                tracing::debug!(expression = %self.text, %result, "evaluated");
                self.text = result;
                self.readout()
            }
            Err(error) => {
                tracing::debug!(expression = %self.text, %error, "evaluation failed");
                self.text.clear();
                Readout::Error
            }
        }
    }
}

fn is_operator(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if OPERATORS.contains(&c))
}
