//! Error type shared by the containers in this crate.
//!
//! Both [`Stack`](crate::Stack) and [`ArrayMap`](crate::ArrayMap) report
//! misuse through [`ContainerError`] instead of handing back a default or
//! stale slot.

use smartstring::alias::String;
use thiserror::Error;

/// Errors produced by [`Stack`](crate::Stack) and [`ArrayMap`](crate::ArrayMap).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// `pop` or `peek` was called on an empty stack.
    #[error("stack underflow")]
    StackUnderflow,

    /// A lookup or update named a key that is not in the map.
    #[error("key {key} not found")]
    KeyNotFound {
        /// Debug rendering of the missing key.
        key: String,
    },

    /// An insert named a key that is already in the map.
    #[error("duplicate key {key}")]
    DuplicateKey {
        /// Debug rendering of the offending key.
        key: String,
    },
}

impl ContainerError {
    pub(crate) fn key_not_found<K: std::fmt::Debug>(key: &K) -> Self {
        ContainerError::KeyNotFound {
            key: String::from(format!("{key:?}")),
        }
    }

    pub(crate) fn duplicate_key<K: std::fmt::Debug>(key: &K) -> Self {
        ContainerError::DuplicateKey {
            key: String::from(format!("{key:?}")),
        }
    }
}
