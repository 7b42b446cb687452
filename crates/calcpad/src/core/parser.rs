//! Expression tokenizer and recursive descent parser
//!
//! The accepted language is a stricter subset of JavaScript arithmetic:
//! numeric literals, `+ - * / **`, unary `+`/`-` and parentheses. Inputs that
//! a JavaScript engine would reject are rejected here too, e.g. `2++`, `05`,
//! `-2**2` or `2(3)`. The expression is parsed on its own, so text that only
//! a surrounding wrapper could balance (`1)+(2`) and comments (`1/*2*/+3`)
//! are rejected as well.

use crate::core::{CalcError, CalcResult, Invalid, Operation};

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Operator; `+` and `-` are binary or unary depending on position
    Operator(Operation),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

impl Token {
    /// Short human readable form used in error messages
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Number(n) => format!("number {}", crate::core::format_number(*n)),
            Self::Operator(op) => format!("'{}'", op.symbol()),
            Self::LeftParen => "'('".to_string(),
            Self::RightParen => "')'".to_string(),
        }
    }
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a new binary operation node
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '+' | '-' => {
                self.advance();
                if self.current_char() == Some(ch) {
                    return Err(CalcError::syntax(format!(
                        "'{ch}{ch}' is not an arithmetic operator"
                    )));
                }
                if ch == '+' {
                    Token::Operator(Operation::Add)
                } else {
                    Token::Operator(Operation::Subtract)
                }
            }
            '*' => {
                self.advance();
                if self.current_char() == Some('*') {
                    self.advance();
                    Token::Operator(Operation::Power)
                } else {
                    Token::Operator(Operation::Multiply)
                }
            }
            '/' => {
                self.advance();
                if matches!(self.current_char(), Some('/' | '*')) {
                    return Err(CalcError::syntax("comments are not supported"));
                }
                Token::Operator(Operation::Divide)
            }
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            _ => return Err(Invalid::DisallowedChar(ch).into()),
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn skip_digits(&mut self) {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;

        if self.current_char() == Some('.') {
            self.advance();
            if !self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                return Err(CalcError::syntax("unexpected '.'"));
            }
            self.skip_digits();
        } else {
            let leading_zero = self.current_char() == Some('0');
            self.advance();
            if leading_zero && self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.skip_digits();
                return Err(CalcError::syntax(format!(
                    "leading zeros are not allowed: '{}'",
                    &self.input[start..self.pos]
                )));
            }
            self.skip_digits();
            if self.current_char() == Some('.') {
                self.advance();
                self.skip_digits();
            }
        }

        let num_str = &self.input[start..self.pos];
        let value: f64 = num_str
            .parse()
            .map_err(|_| CalcError::syntax(format!("invalid number: '{num_str}'")))?;

        Ok(Token::Number(value))
    }
}

/// Recursive descent parser for expressions
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= power (('*' | '/') power)*
/// power      ::= unary | primary ('**' power)?   // right associative
/// unary      ::= ('+' | '-') unary | primary
/// primary    ::= NUMBER | '(' expression ')'
/// ```
///
/// A unary expression cannot be the base of `**`: `-2**2` is rejected and
/// must be written `(-2)**2` or `-(2**2)`.
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a string expression into an AST
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let tokens = Tokenizer::new(input).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses tokens into an AST, requiring every token to be consumed
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::syntax("empty expression"));
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(CalcError::syntax(format!(
                "unexpected {} at position {}",
                token.describe(),
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_term()?;

        while let Some(Token::Operator(op @ (Operation::Add | Operation::Subtract))) =
            self.current()
        {
            let op = *op;
            self.advance();
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_power()?;

        while let Some(Token::Operator(op @ (Operation::Multiply | Operation::Divide))) =
            self.current()
        {
            let op = *op;
            self.advance();
            let right = self.parse_power()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_power(&mut self) -> CalcResult<AstNode> {
        if matches!(
            self.current(),
            Some(Token::Operator(Operation::Add | Operation::Subtract))
        ) {
            let unary = self.parse_unary()?;
            if self.at_power() {
                return Err(CalcError::syntax(
                    "unary operator before '**' must be parenthesized",
                ));
            }
            return Ok(unary);
        }

        let base = self.parse_primary()?;

        if self.at_power() {
            self.advance();
            let exponent = self.parse_power()?;
            return Ok(AstNode::binary(base, Operation::Power, exponent));
        }

        Ok(base)
    }

    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        match self.current() {
            Some(Token::Operator(Operation::Subtract)) => {
                self.advance();
                Ok(AstNode::negate(self.parse_unary()?))
            }
            // Unary plus is the identity on numbers
            Some(Token::Operator(Operation::Add)) => {
                self.advance();
                self.parse_unary()
            }
            _ => self.parse_primary(),
        }
    }

    fn at_power(&self) -> bool {
        matches!(self.current(), Some(Token::Operator(Operation::Power)))
    }

    fn parse_primary(&mut self) -> CalcResult<AstNode> {
        let token = self
            .advance()
            .ok_or_else(|| CalcError::syntax("unexpected end of expression"))?;

        match token {
            Token::Number(n) => Ok(AstNode::number(*n)),
            Token::LeftParen => {
                let expr = self.parse_expression()?;
                match self.advance() {
                    Some(Token::RightParen) => Ok(expr),
                    Some(t) => Err(CalcError::syntax(format!(
                        "expected ')' but found {}",
                        t.describe()
                    ))),
                    None => Err(CalcError::syntax("unclosed parenthesis")),
                }
            }
            other => Err(CalcError::syntax(format!(
                "unexpected {}",
                other.describe()
            ))),
        }
    }
}
