//! Operator precedence table.
//!
//! [`OperatorTable`] maps each [`Operator`] to an integer precedence. It is
//! backed by an [`ArrayMap`], so lookup is a linear scan over at most eight
//! entries. Parentheses carry [`PAREN_PRECEDENCE`], a sentinel lower than any
//! binary operator, so an open parenthesis on the operator stack is never
//! popped by a precedence comparison.
//!
//! | symbol            | precedence |
//! |-------------------|-----------:|
//! | `^`               | 4          |
//! | `*` `x` `/`       | 3          |
//! | `+` `-`           | 2          |
//! | `(` `)`           | -1         |

use crate::Operator;
use arraystack::{ArrayMap, ContainerError};
use smartstring::alias::String;

/// Precedence given to `(` and `)`; only used for matching, never compared.
pub const PAREN_PRECEDENCE: i32 = -1;

/// Read-only mapping from operator to precedence.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    map: ArrayMap<Operator, i32>,
}

impl OperatorTable {
    /// Builds a table from `(operator, precedence)` pairs.
    ///
    /// Fails with [`ContainerError::DuplicateKey`] if an operator is listed twice.
    ///
    /// ```rust
    /// # use stackcalc::{Operator, OperatorTable};
    /// let table = OperatorTable::try_new([(Operator::Add, 1), (Operator::Mul, 2)]).unwrap();
    /// assert!(table.contains("+"));
    /// assert!(!table.contains("^"));
    /// ```
    pub fn try_new<I>(pairs: I) -> Result<Self, ContainerError>
    where
        I: IntoIterator<Item = (Operator, i32)>,
    {
        let mut map = ArrayMap::with_capacity(Operator::ALL.len());
        for (op, prec) in pairs {
            map.insert(op, prec)?;
        }
        Ok(Self { map })
    }

    /// The calculator's table: `^` over `* x /` over `+ -`.
    pub fn standard() -> Self {
        let map = Operator::ALL
            .into_iter()
            .map(|op| {
                let prec = match op {
                    Operator::Pow => 4,
                    Operator::Mul | Operator::Times | Operator::Div => 3,
                    Operator::Add | Operator::Sub => 2,
                    Operator::LParen | Operator::RParen => PAREN_PRECEDENCE,
                };
                (op, prec)
            })
            .collect();
        Self { map }
    }

    /// Returns `true` if `symbol` names an operator registered in this table.
    pub fn contains(&self, symbol: &str) -> bool {
        self.lookup(symbol).is_some()
    }

    /// Returns the registered operator spelled by `symbol`.
    pub fn lookup(&self, symbol: &str) -> Option<Operator> {
        Operator::from_symbol(symbol).filter(|op| self.map.contains_key(op))
    }

    /// Precedence of a registered operator.
    pub fn precedence(&self, op: Operator) -> Result<i32, ContainerError> {
        self.map.get(&op).copied()
    }

    /// Precedence of the operator spelled by `symbol`.
    ///
    /// ```rust
    /// # use stackcalc::OperatorTable;
    /// let table = OperatorTable::standard();
    /// assert_eq!(table.precedence_of("x").unwrap(), 3);
    /// assert!(table.precedence_of("%").is_err());
    /// ```
    pub fn precedence_of(&self, symbol: &str) -> Result<i32, ContainerError> {
        match Operator::from_symbol(symbol) {
            Some(op) => self.precedence(op),
            None => Err(ContainerError::KeyNotFound {
                key: String::from(format!("{symbol:?}")),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::standard()
    }
}
