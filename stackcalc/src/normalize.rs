//! Tokenizer/normalizer.
//!
//! Turns a raw, already-validated expression into a token stream with exactly
//! one space between adjacent tokens. Operator and parenthesis characters
//! always stand alone; digits and `.` accumulate into a numeric literal;
//! whitespace is dropped.
//!
//! Since whitespace is dropped rather than treated as a separator, `1 2`
//! normalizes to `12`.

use crate::token::OPERATOR_CHARS;
use smartstring::alias::String;

/// Inserts single-space separators around every operator and parenthesis.
///
/// ```rust
/// # use stackcalc::normalize;
/// assert_eq!(normalize("(3+4)*2").as_str(), "( 3 + 4 ) * 2");
/// assert_eq!(normalize("  1.5x  2 ").as_str(), "1.5 x 2");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::new();
    let mut in_number = false;

    for ch in raw.chars() {
        if OPERATOR_CHARS.contains(ch) {
            if in_number {
                out.push(' ');
                in_number = false;
            }
            out.push(ch);
            out.push(' ');
        } else if ch.is_whitespace() {
            continue;
        } else {
            out.push(ch);
            in_number = true;
        }
    }

    let normalized = String::from(out.trim());
    log::trace!("normalize {raw:?} -> {normalized:?}");
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separates_operators_and_numbers() {
        assert_eq!(normalize("3+4*2").as_str(), "3 + 4 * 2");
        assert_eq!(normalize("2^3^2").as_str(), "2 ^ 3 ^ 2");
        assert_eq!(normalize("10/4-1").as_str(), "10 / 4 - 1");
    }

    #[test]
    fn keeps_decimal_literals_whole() {
        assert_eq!(normalize("12.75x0.5").as_str(), "12.75 x 0.5");
        assert_eq!(normalize(".5+5.").as_str(), ".5 + 5.");
    }

    #[test]
    fn consecutive_parens_are_isolated() {
        assert_eq!(normalize("((1))").as_str(), "( ( 1 ) )");
        assert_eq!(normalize("(1)(2)").as_str(), "( 1 ) ( 2 )");
    }

    #[test]
    fn whitespace_and_tabs_are_dropped() {
        assert_eq!(normalize(" \t3 \t+\t 4 ").as_str(), "3 + 4");
        assert_eq!(normalize("1 2").as_str(), "12");
    }

    #[test]
    fn bare_point_passes_through() {
        assert_eq!(normalize(".+1").as_str(), ". + 1");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(normalize("").as_str(), "");
        assert_eq!(normalize("   ").as_str(), "");
    }

    #[test]
    fn normalizing_twice_is_a_no_op() {
        for raw in ["3+4*2", "(1.5 x2)^ 3", "((7))", "8/2/2", ""] {
            let once = normalize(raw);
            let twice = normalize(&once);
            assert_eq!(once, twice, "{raw:?}");
        }
    }
}
