//! # arraystack
//!
//! Two small hand-rolled containers backed by a growable array:
//!
//! - [`Stack`] — a LIFO stack whose capacity doubles when full and never
//!   shrinks.
//! - [`ArrayMap`] — an insertion-ordered key/value map with linear-scan
//!   lookup, meant for tables of a handful of entries.
//!
//! Neither container hands back a placeholder on misuse: popping an empty
//! stack or looking up a missing key fails with a [`ContainerError`].
//!
//! ## Example
//!
//! ```rust
//! use arraystack::{ArrayMap, ContainerError, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(1.5);
//! stack.push(2.0);
//! assert_eq!(stack.pop(), Ok(2.0));
//! assert_eq!(stack.pop(), Ok(1.5));
//! assert_eq!(stack.pop(), Err(ContainerError::StackUnderflow));
//!
//! let mut map = ArrayMap::new();
//! map.insert("+", 2).unwrap();
//! assert_eq!(map.get(&"+"), Ok(&2));
//! assert!(map.get(&"%").is_err());
//! ```
pub mod error;
pub mod map;
pub mod stack;

pub use error::ContainerError;
pub use map::ArrayMap;
pub use stack::Stack;
