//! # Calculator Tokens
//!
//! This module defines the lexical units that flow through the pipeline:
//!
//! - [`Operator`]: one of the eight operator/parenthesis symbols
//!   `+ - * x / ^ ( )`, with its [`Assoc`] and arithmetic,
//! - [`Token`]: either a numeric literal (a double) or an [`Operator`].
//!
//! Token streams between stages are plain space-delimited strings; these types
//! give each piece of such a string a meaning.
use crate::CalcError;
use std::fmt;

/// The characters that always form a token of their own.
pub const OPERATOR_CHARS: &str = "+-*x/^()";

/// Associativity of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    /// `a op b op c` groups as `(a op b) op c`.
    Left,
    /// `a op b op c` groups as `a op (b op c)`.
    Right,
}

/// An operator or parenthesis symbol.
///
/// `*` and `x` are both multiplication but stay distinct so that the postfix
/// output echoes the symbol the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `x`
    Times,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Operator {
    /// All operators, in table order.
    pub const ALL: [Operator; 8] = [
        Operator::Pow,
        Operator::Mul,
        Operator::Times,
        Operator::Div,
        Operator::Add,
        Operator::Sub,
        Operator::LParen,
        Operator::RParen,
    ];

    /// Looks up the operator spelled by `symbol`.
    ///
    /// ```rust
    /// # use stackcalc::Operator;
    /// assert_eq!(Operator::from_symbol("x"), Some(Operator::Times));
    /// assert_eq!(Operator::from_symbol("**"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Operator::from_char(ch),
            _ => None,
        }
    }

    pub fn from_char(ch: char) -> Option<Operator> {
        Some(match ch {
            '+' => Operator::Add,
            '-' => Operator::Sub,
            '*' => Operator::Mul,
            'x' => Operator::Times,
            '/' => Operator::Div,
            '^' => Operator::Pow,
            '(' => Operator::LParen,
            ')' => Operator::RParen,
            _ => return None,
        })
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Times => "x",
            Operator::Div => "/",
            Operator::Pow => "^",
            Operator::LParen => "(",
            Operator::RParen => ")",
        }
    }

    #[inline]
    pub fn is_paren(self) -> bool {
        matches!(self, Operator::LParen | Operator::RParen)
    }

    #[inline]
    pub fn is_binary(&self) -> bool {
        !self.is_paren()
    }

    /// Only `^` is right-associative.
    pub fn assoc(self) -> Assoc {
        match self {
            Operator::Pow => Assoc::Right,
            _ => Assoc::Left,
        }
    }

    /// Applies a binary operator to `left` and `right`.
    ///
    /// Returns `None` for parentheses. Division by zero follows IEEE 754
    /// (infinity or NaN) rather than failing.
    pub fn apply(self, left: f64, right: f64) -> Option<f64> {
        Some(match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul | Operator::Times => left * right,
            Operator::Div => left / right,
            Operator::Pow => left.powf(right),
            Operator::LParen | Operator::RParen => return None,
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A lexical unit: a numeric literal or an operator symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
}

impl Token {
    /// Classifies a single token of a postfix stream.
    ///
    /// Numbers take priority; anything that is neither a number nor an
    /// operator symbol is an [`CalcError::InvalidNumberFormat`].
    ///
    /// ```rust
    /// # use stackcalc::{Operator, Token};
    /// assert_eq!(Token::parse("2.5").unwrap(), Token::Number(2.5));
    /// assert_eq!(Token::parse("^").unwrap(), Token::Operator(Operator::Pow));
    /// assert!(Token::parse(".").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Token, CalcError> {
        if let Ok(n) = text.parse::<f64>() {
            return Ok(Token::Number(n));
        }
        Operator::from_symbol(text)
            .map(Token::Operator)
            .ok_or_else(|| CalcError::invalid_number(text))
    }

    /// Parses `text` as a numeric literal.
    pub fn number(text: &str) -> Result<Token, CalcError> {
        text.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| CalcError::invalid_number(text))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Operator(op) => write!(f, "{op}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_operator_char_round_trips() {
        for ch in OPERATOR_CHARS.chars() {
            let op = Operator::from_char(ch).unwrap();
            assert_eq!(op.symbol(), ch.to_string());
        }
        assert_eq!(Operator::ALL.len(), OPERATOR_CHARS.len());
    }

    #[test]
    fn from_symbol_rejects_multi_char_and_unknown() {
        assert_eq!(Operator::from_symbol(""), None);
        assert_eq!(Operator::from_symbol("++"), None);
        assert_eq!(Operator::from_symbol("%"), None);
        assert_eq!(Operator::from_symbol("X"), None);
    }

    #[test]
    fn only_pow_is_right_assoc() {
        for op in Operator::ALL {
            let expected = if op == Operator::Pow {
                Assoc::Right
            } else {
                Assoc::Left
            };
            assert_eq!(op.assoc(), expected, "{op}");
        }
    }

    #[test]
    fn apply_arithmetic() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), Some(7.0));
        assert_eq!(Operator::Sub.apply(3.0, 4.0), Some(-1.0));
        assert_eq!(Operator::Mul.apply(3.0, 4.0), Some(12.0));
        assert_eq!(Operator::Times.apply(3.0, 4.0), Some(12.0));
        assert_eq!(Operator::Div.apply(3.0, 4.0), Some(0.75));
        assert_eq!(Operator::Pow.apply(2.0, 10.0), Some(1024.0));
        assert_eq!(Operator::LParen.apply(1.0, 1.0), None);
    }

    #[test]
    fn divide_by_zero_is_infinite() {
        let v = Operator::Div.apply(1.0, 0.0).unwrap();
        assert!(v.is_infinite());
    }

    #[test]
    fn token_display_renders_shortest_number() {
        assert_eq!(Token::Number(7.0).to_string(), "7");
        assert_eq!(Token::Number(2.5).to_string(), "2.5");
        assert_eq!(Token::Operator(Operator::Times).to_string(), "x");
    }

    #[test]
    fn number_rejects_bare_point() {
        let err = Token::number(".").unwrap_err();
        assert!(matches!(err, CalcError::InvalidNumberFormat { .. }));
        assert_eq!(Token::number(".5").unwrap(), Token::Number(0.5));
        assert_eq!(Token::number("5.").unwrap(), Token::Number(5.0));
    }
}
