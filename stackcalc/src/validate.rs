//! Input validation for the interactive shell.
//!
//! The pipeline expects a string made only of digits, `.`, whitespace and the
//! eight operator/parenthesis symbols, with balanced parentheses. [`validate`]
//! checks both before any conversion is attempted.

use crate::CalcError;
use arraystack::Stack;
use once_cell::sync::Lazy;
use regex::Regex;

static ALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9x+\-/()*^.\s]*$").expect("allow-list regex is valid"));

static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9x+\-/()*^.\s]").expect("deny regex is valid"));

/// Checks `raw` against the allowed character set and parenthesis balance.
///
/// ```rust
/// # use stackcalc::{validate, CalcError};
/// assert!(validate("(1 + 2) x 3").is_ok());
/// assert!(matches!(validate("1 % 2"), Err(CalcError::DisallowedCharacter { ch: '%', pos: 2 })));
/// assert_eq!(validate("(1 + 2"), Err(CalcError::MismatchedParentheses));
/// ```
pub fn validate(raw: &str) -> Result<(), CalcError> {
    if !ALLOWED_RE.is_match(raw) {
        if let Some(m) = DISALLOWED_RE.find(raw) {
            let pos = raw[..m.start()].chars().count();
            let ch = m.as_str().chars().next().unwrap_or_default();
            return Err(CalcError::DisallowedCharacter { ch, pos });
        }
    }
    if !parens_match(raw) {
        return Err(CalcError::MismatchedParentheses);
    }
    Ok(())
}

/// Returns `true` if every `(` has a matching `)` after it and vice versa.
pub fn parens_match(raw: &str) -> bool {
    let mut open: Stack<char> = Stack::new();
    for ch in raw.chars() {
        match ch {
            '(' => open.push(ch),
            ')' => {
                if open.pop() != Ok('(') {
                    return false;
                }
            }
            _ => {}
        }
    }
    open.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowed_characters() {
        for raw in ["", "1", " 3 + 4 * 2 ", "2^3^2", "(1.5 x 2) / .5 - 1", "\t7\t"] {
            assert_eq!(validate(raw), Ok(()), "{raw:?}");
        }
    }

    #[test]
    fn reports_first_disallowed_character() {
        assert_eq!(
            validate("1 + a + b"),
            Err(CalcError::DisallowedCharacter { ch: 'a', pos: 4 })
        );
        assert_eq!(
            validate("2X3"),
            Err(CalcError::DisallowedCharacter { ch: 'X', pos: 1 })
        );
    }

    #[test]
    fn position_counts_characters_not_bytes() {
        assert_eq!(
            validate("1+é"),
            Err(CalcError::DisallowedCharacter { ch: 'é', pos: 2 })
        );
    }

    #[test]
    fn character_check_runs_before_paren_check() {
        assert!(matches!(
            validate("(1 % 2"),
            Err(CalcError::DisallowedCharacter { .. })
        ));
    }

    #[test]
    fn paren_balance() {
        assert!(parens_match("((1) + (2))"));
        assert!(parens_match("no parens"));
        assert!(!parens_match(")("));
        assert!(!parens_match("(()"));
        assert!(!parens_match("())"));
        assert_eq!(validate(")1("), Err(CalcError::MismatchedParentheses));
    }
}
