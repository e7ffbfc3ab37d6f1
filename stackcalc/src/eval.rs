//! Postfix evaluator.
//!
//! Numbers are pushed onto an operand [`Stack`] of doubles. Each binary
//! operator pops its right operand, then its left, and pushes the result. A
//! well-formed stream leaves exactly one value behind.
//!
//! There is no unary minus. `--5` or a leading `-5` runs out of operands and
//! is reported as [`CalcError::MalformedExpression`]; write `0 - 5` instead.

use crate::{CalcError, Token};
use arraystack::Stack;

const MISSING_OPERAND: &str =
    "operator is missing an operand; avoid double negation (--5) and write negative numbers as 0 - n";

/// Evaluates a space-delimited postfix stream.
///
/// ```rust
/// # use stackcalc::evaluate;
/// assert_eq!(evaluate("3 4 2 * +").unwrap(), 11.0);
/// assert_eq!(evaluate("2 3 2 ^ ^").unwrap(), 512.0);
/// assert!(evaluate("5 +").is_err());
/// ```
pub fn evaluate(postfix: &str) -> Result<f64, CalcError> {
    let mut operands: Stack<f64> = Stack::new();

    for text in postfix.split(' ') {
        if text.is_empty() {
            continue;
        }

        let op = match Token::parse(text)? {
            Token::Number(n) => {
                operands.push(n);
                continue;
            }
            Token::Operator(op) if op.is_binary() => op,
            Token::Operator(_) => return Err(CalcError::invalid_number(text)),
        };

        let right = operands
            .pop()
            .map_err(|_| CalcError::malformed(MISSING_OPERAND))?;
        let left = operands
            .pop()
            .map_err(|_| CalcError::malformed(MISSING_OPERAND))?;
        let value = op
            .apply(left, right)
            .ok_or_else(|| CalcError::invalid_number(text))?;
        log::trace!("{left} {op} {right} = {value}");
        operands.push(value);
    }

    match operands.len() {
        1 => Ok(operands.pop()?),
        0 => Err(CalcError::malformed("nothing to evaluate")),
        n => Err(CalcError::MalformedExpression {
            reason: format!("{n} values left without an operator to combine them").into(),
        }),
    }
}
