//! # Calculator Error Type
//!
//! This module defines [`CalcError`], the single error surface of the
//! expression pipeline. It covers:
//!
//! - **Input validation** (disallowed characters, unbalanced parentheses),
//! - **Numeric parsing** (a token that should be a number is not),
//! - **Postfix evaluation** (wrong operand count),
//! - **Container misuse** (stack underflow, missing operator), wrapped from
//!   [`ContainerError`] with `#[from]` so `?` works at call sites.
//!
//! Every variant is recoverable: the shell reports it and prompts again.
use arraystack::ContainerError;
use smartstring::alias::String;
use thiserror::Error;

/// Represents all possible errors that can occur within the calculator.
///
/// # Examples
/// ```rust
/// # use stackcalc::{CalcError, evaluate};
/// let err = evaluate("5 +").unwrap_err();
/// assert!(matches!(err, CalcError::MalformedExpression { .. }));
/// ```
///
/// Wrapping a container error:
/// ```rust
/// # use stackcalc::CalcError;
/// # use arraystack::ContainerError;
/// let err: CalcError = ContainerError::StackUnderflow.into();
/// assert!(matches!(err, CalcError::Container(ContainerError::StackUnderflow)));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A token in numeric position does not parse as a double.
    #[error("invalid number format {token:?}")]
    InvalidNumberFormat {
        /// The offending token text.
        token: String,
    },

    /// A `(` or `)` has no partner.
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    /// The postfix stream does not reduce to exactly one value.
    #[error("malformed expression: {reason}")]
    MalformedExpression {
        /// What went wrong, in words meant for the user.
        reason: String,
    },

    /// The raw input contains a character outside the allowed set.
    #[error("invalid character {ch:?} at position {pos}; allowed characters are 0-9 . + - / x * ^ ( )")]
    DisallowedCharacter {
        /// The first disallowed character.
        ch: char,
        /// Its 0-based character offset in the input.
        pos: usize,
    },

    /// A stack or table operation failed.
    #[error("container error: {0}")]
    Container(#[from] ContainerError),
}

impl CalcError {
    pub(crate) fn invalid_number(token: &str) -> Self {
        CalcError::InvalidNumberFormat {
            token: String::from(token),
        }
    }

    pub(crate) fn malformed(reason: &str) -> Self {
        CalcError::MalformedExpression {
            reason: String::from(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_error_trait_obj(e: &dyn std::error::Error) -> &dyn std::error::Error {
        e
    }

    #[test]
    fn parse_failure_names_token() {
        let err = CalcError::invalid_number(".");
        let _ = _assert_error_trait_obj(&err);
        assert_eq!(err.to_string(), "invalid number format \".\"");
    }

    #[test]
    fn container_error_maps_to_calc_error() {
        let err: CalcError = ContainerError::StackUnderflow.into();
        assert!(matches!(
            err,
            CalcError::Container(ContainerError::StackUnderflow)
        ));
        assert!(err.to_string().contains("stack underflow"));
    }

    #[test]
    fn disallowed_character_lists_allowed_set() {
        let err = CalcError::DisallowedCharacter { ch: 'a', pos: 3 };
        let msg = err.to_string();
        assert!(msg.contains("'a'"));
        assert!(msg.contains("position 3"));
        assert!(msg.contains("0-9"));
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}
    #[test]
    fn calc_error_is_send_sync_static() {
        _assert_send_sync_static::<CalcError>();
    }
}
