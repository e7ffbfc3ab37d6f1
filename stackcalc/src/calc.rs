//! Pipeline façade.
//!
//! [`Calculator`] strings the three stages together:
//! raw text → [`normalize`] → [`to_postfix_with`] → [`evaluate`].
//! It carries the converter's [`PopStrategy`] and nothing else; every call
//! builds its own stacks and operator table.

use crate::{CalcError, PopStrategy, evaluate, normalize, to_postfix_with};
use smartstring::alias::String;
use std::fmt;

/// The intermediate forms and the value of one expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// Space-separated infix tokens.
    pub normalized: String,
    /// Space-separated Reverse Polish tokens.
    pub postfix: String,
    pub value: f64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input: {}", self.normalized)?;
        writeln!(f, "Reverse Polish Notation: {}", self.postfix)?;
        write!(f, "Result: {}", self.value)
    }
}

/// Runs expressions through the tokenizer, converter and evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    strategy: PopStrategy,
}

impl Calculator {
    pub fn new(strategy: PopStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> PopStrategy {
        self.strategy
    }

    pub fn normalize(&self, raw: &str) -> String {
        normalize(raw)
    }

    pub fn to_postfix(&self, tokens: &str) -> Result<String, CalcError> {
        to_postfix_with(tokens, self.strategy)
    }

    pub fn evaluate(&self, postfix: &str) -> Result<f64, CalcError> {
        evaluate(postfix)
    }

    /// Runs the whole pipeline on a validated expression.
    ///
    /// ```rust
    /// # use stackcalc::Calculator;
    /// let calc = Calculator::default().calculate("(3+4)*2").unwrap();
    /// assert_eq!(calc.normalized.as_str(), "( 3 + 4 ) * 2");
    /// assert_eq!(calc.postfix.as_str(), "3 4 + 2 *");
    /// assert_eq!(calc.value, 14.0);
    /// ```
    pub fn calculate(&self, raw: &str) -> Result<Calculation, CalcError> {
        let normalized = self.normalize(raw);
        log::debug!("normalized: {normalized}");
        let postfix = self.to_postfix(&normalized)?;
        log::debug!("postfix: {postfix}");
        let value = self.evaluate(&postfix)?;
        log::debug!("value: {value}");
        Ok(Calculation {
            normalized,
            postfix,
            value,
        })
    }
}
