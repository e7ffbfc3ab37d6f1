//! # stackcalc
//!
//! A stack-based calculator for infix arithmetic over doubles: `+ - * x / ^`,
//! parentheses, integer and decimal literals.
//!
//! An expression goes through three stages, each exchanging a plain
//! space-delimited string with the next:
//!
//! - [`normalize`] — separates every operator and parenthesis with single
//!   spaces,
//! - [`to_postfix`] — shunting-yard conversion to Reverse Polish notation,
//!   driven by an [`OperatorTable`] and an operator [`Stack`](arraystack::Stack),
//! - [`evaluate`] — reduces the postfix stream on an operand stack.
//!
//! [`validate`] checks the raw text beforehand, and [`Calculator`] runs the
//! whole pipeline with a chosen [`PopStrategy`].
//!
//! ## Example
//!
//! ```rust
//! use stackcalc::{evaluate, normalize, to_postfix};
//!
//! let tokens = normalize("3+4*2");
//! assert_eq!(tokens.as_str(), "3 + 4 * 2");
//!
//! let postfix = to_postfix(&tokens).unwrap();
//! assert_eq!(postfix.as_str(), "3 4 2 * +");
//!
//! assert_eq!(evaluate(&postfix).unwrap(), 11.0);
//! ```
//!
//! ## Modules
//!
//! - [`token`] — [`Operator`] and [`Token`]
//! - [`oper`] — operator precedence table
//! - [`normalize`](mod@normalize) — tokenizer
//! - [`postfix`] — infix to postfix conversion
//! - [`eval`] — postfix evaluation
//! - [`validate`](mod@validate) — allowed characters and parenthesis balance
//! - [`calc`] — pipeline façade
//! - [`error`] — [`CalcError`]
pub mod calc;
pub mod error;
pub mod eval;
pub mod normalize;
pub mod oper;
pub mod postfix;
pub mod token;
pub mod validate;

pub use calc::{Calculation, Calculator};
pub use error::CalcError;
pub use eval::evaluate;
pub use normalize::normalize;
pub use oper::{OperatorTable, PAREN_PRECEDENCE};
pub use postfix::{PopStrategy, to_postfix, to_postfix_with};
pub use token::{Assoc, Operator, Token};
pub use validate::{parens_match, validate};
