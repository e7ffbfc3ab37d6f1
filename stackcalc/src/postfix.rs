//! Infix to postfix conversion (shunting-yard).
//!
//! Consumes the space-delimited stream produced by
//! [`normalize`](crate::normalize) and emits a space-delimited Reverse Polish
//! stream. Operators wait on a [`Stack`] until an operator of lower binding
//! power, a closing parenthesis, or the end of input releases them.
//!
//! An incoming left-associative operator releases stacked operators of equal
//! or higher precedence; `^` is right-associative and releases only strictly
//! higher ones. How many operators one incoming token may release is set by
//! [`PopStrategy`].

use crate::{CalcError, Operator, OperatorTable, Token, token::Assoc};
use arraystack::Stack;
use smartstring::alias::String;

/// How many stacked operators an incoming binary operator may release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopStrategy {
    /// Keep releasing while the precedence rule holds (standard shunting-yard).
    #[default]
    Drain,
    /// Release at most one operator per incoming token.
    ///
    /// Compatible with older output, but misorders chains such as
    /// `1 - 2 * 3 + 4`, which converts to `1 2 3 * 4 + -` and evaluates to -9.
    Single,
}

/// Converts an infix token stream to postfix with [`PopStrategy::Drain`].
///
/// ```rust
/// # use stackcalc::to_postfix;
/// assert_eq!(to_postfix("3 + 4 * 2").unwrap().as_str(), "3 4 2 * +");
/// assert_eq!(to_postfix("( 3 + 4 ) * 2").unwrap().as_str(), "3 4 + 2 *");
/// ```
pub fn to_postfix(tokens: &str) -> Result<String, CalcError> {
    to_postfix_with(tokens, PopStrategy::default())
}

/// Converts an infix token stream to postfix using `strategy`.
pub fn to_postfix_with(tokens: &str, strategy: PopStrategy) -> Result<String, CalcError> {
    let table = OperatorTable::standard();
    let mut ops: Stack<Operator> = Stack::new();
    let mut out = String::new();

    for text in tokens.split(' ') {
        if text.is_empty() {
            continue;
        }

        let Some(op) = table.lookup(text) else {
            let num = Token::number(text)?;
            log::trace!("num {num}");
            emit(&mut out, num);
            continue;
        };

        if ops.is_empty() {
            ops.push(op);
            continue;
        }

        match op {
            Operator::RParen => loop {
                match ops.pop() {
                    Ok(Operator::LParen) => break,
                    Ok(Operator::RParen) | Err(_) => return Err(CalcError::MismatchedParentheses),
                    Ok(top) => emit(&mut out, Token::Operator(top)),
                }
            },
            Operator::LParen => ops.push(op),
            _ => {
                let prec = table.precedence(op)?;
                while let Some(&top) = ops.peek().ok() {
                    if !releases(op, prec, table.precedence(top)?) {
                        break;
                    }
                    let top = ops.pop()?;
                    log::trace!("{op} releases {top}");
                    emit(&mut out, Token::Operator(top));
                    if strategy == PopStrategy::Single {
                        break;
                    }
                }
                ops.push(op);
            }
        }
        log::trace!("op {op}; stack [{ops}]");
    }

    while let Ok(top) = ops.pop() {
        if top.is_paren() {
            return Err(CalcError::MismatchedParentheses);
        }
        emit(&mut out, Token::Operator(top));
    }

    Ok(String::from(out.trim_end()))
}

/// Whether `incoming` (of precedence `prec`) pops an operator of `top_prec`.
fn releases(incoming: Operator, prec: i32, top_prec: i32) -> bool {
    match incoming.assoc() {
        Assoc::Left => top_prec >= prec,
        Assoc::Right => top_prec > prec,
    }
}

fn emit(out: &mut String, token: Token) {
    out.push_str(&token.to_string());
    out.push(' ');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pf(tokens: &str) -> std::string::String {
        to_postfix(tokens).unwrap().to_string()
    }

    #[test]
    fn single_number() {
        assert_eq!(pf("42"), "42");
    }

    #[test]
    fn precedence_orders_operators() {
        assert_eq!(pf("3 + 4 * 2"), "3 4 2 * +");
        assert_eq!(pf("3 * 4 + 2"), "3 4 * 2 +");
        assert_eq!(pf("2 + 3 ^ 2 * 4"), "2 3 2 ^ 4 * +");
    }

    #[test]
    fn left_assoc_chains() {
        assert_eq!(pf("3 - 4 - 5"), "3 4 - 5 -");
        assert_eq!(pf("8 / 2 / 2"), "8 2 / 2 /");
        assert_eq!(pf("2 x 3 * 4"), "2 3 x 4 *");
    }

    #[test]
    fn pow_is_right_assoc() {
        assert_eq!(pf("2 ^ 3 ^ 2"), "2 3 2 ^ ^");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(pf("( 3 + 4 ) * 2"), "3 4 + 2 *");
        assert_eq!(pf("2 * ( 3 + 4 * ( 5 - 1 ) )"), "2 3 4 5 1 - * + *");
        assert_eq!(pf("( ( 7 ) )"), "7");
    }

    #[test]
    fn numbers_are_rerendered() {
        assert_eq!(pf("007 + 2.50"), "7 2.5 +");
    }

    #[test]
    fn trailing_separator_is_ignored() {
        assert_eq!(pf("1 + 2 "), "1 2 +");
        assert_eq!(pf(""), "");
    }

    #[test]
    fn bad_number_is_rejected() {
        let err = to_postfix(". + 1").unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidNumberFormat { ref token } if token.as_str() == "."
        ));
    }

    #[test]
    fn unbalanced_parens_are_rejected() {
        for tokens in [") (", "( 1 + 2", "1 + 2 )", ") 1", "( ( 1 )", "1 ) )"] {
            assert_eq!(
                to_postfix(tokens),
                Err(CalcError::MismatchedParentheses),
                "{tokens:?}"
            );
        }
    }

    #[test]
    fn drain_and_single_differ_on_mixed_chain() {
        let tokens = "1 - 2 * 3 + 4";
        assert_eq!(
            to_postfix_with(tokens, PopStrategy::Drain).unwrap().as_str(),
            "1 2 3 * - 4 +"
        );
        assert_eq!(
            to_postfix_with(tokens, PopStrategy::Single).unwrap().as_str(),
            "1 2 3 * 4 + -"
        );
    }

    #[test]
    fn strategies_agree_on_simple_input() {
        for tokens in ["3 + 4 * 2", "3 - 4 - 5", "2 ^ 3 ^ 2", "( 3 + 4 ) * 2"] {
            assert_eq!(
                to_postfix_with(tokens, PopStrategy::Drain),
                to_postfix_with(tokens, PopStrategy::Single),
                "{tokens:?}"
            );
        }
    }
}
