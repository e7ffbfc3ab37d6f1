//! # map
//!
//! A minimal key/value map over a growable array of pairs.
//!
//! Lookups scan the entries linearly, so this is only meant for tables of a
//! few entries (an operator table, for instance). Entries keep insertion
//! order, keys are unique, and a missing key is reported as
//! [`ContainerError::KeyNotFound`].
//!
//! ## Example
//! ```rust
//! # use arraystack::{ArrayMap, ContainerError};
//! let mut m = ArrayMap::new();
//! m.insert("x", 3).unwrap();
//! m.set(&"x", 4).unwrap();
//! assert_eq!(m.get(&"x"), Ok(&4));
//! assert!(matches!(m.insert("x", 5), Err(ContainerError::DuplicateKey { .. })));
//! ```

use crate::ContainerError;
use std::fmt;

const DEFAULT_CAPACITY: usize = 10;

/// An insertion-ordered map with linear-scan lookup.
#[derive(Debug, Clone)]
pub struct ArrayMap<K, V> {
    entries: Vec<(K, V)>,
    cap: usize,
}

impl<K, V> ArrayMap<K, V>
where
    K: PartialEq + fmt::Debug,
{
    /// Creates an empty map with the default capacity of 10.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty map able to hold `capacity` entries before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = capacity.max(1);
        Self {
            entries: Vec::with_capacity(cap),
            cap,
        }
    }

    /// Adds a new entry.
    ///
    /// Fails with [`ContainerError::DuplicateKey`] if `key` is already present;
    /// use [`ArrayMap::set`] to update an existing entry.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), ContainerError> {
        if self.position(&key).is_some() {
            return Err(ContainerError::duplicate_key(&key));
        }
        if self.entries.len() == self.cap {
            let new_cap = self.cap * 2;
            self.entries.reserve_exact(new_cap - self.entries.len());
            log::trace!("map grow {} -> {}", self.cap, new_cap);
            self.cap = new_cap;
        }
        self.entries.push((key, value));
        Ok(())
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Result<&V, ContainerError> {
        self.position(key)
            .map(|i| &self.entries[i].1)
            .ok_or_else(|| ContainerError::key_not_found(key))
    }

    /// Replaces the value stored under an existing `key`.
    pub fn set(&mut self, key: &K, value: V) -> Result<(), ContainerError> {
        let i = self
            .position(key)
            .ok_or_else(|| ContainerError::key_not_found(key))?;
        self.entries[i].1 = value;
        Ok(())
    }

    /// Removes the entry for `key`, returning `true` if one was present.
    ///
    /// Remaining entries keep their relative order.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.position(key) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.iter().any(|(_, v)| v == value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Removes every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl<K, V> Default for ArrayMap<K, V>
where
    K: PartialEq + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for ArrayMap<K, V>
where
    K: PartialEq + fmt::Debug,
{
    /// Builds a map from pairs. A repeated key keeps the last value.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            match map.position(&k) {
                Some(i) => map.entries[i].1 = v,
                None => {
                    // cannot fail: the key was just checked
                    let _ = map.insert(k, v);
                }
            }
        }
        map
    }
}
