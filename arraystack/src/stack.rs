//! # stack
//!
//! A generic LIFO stack over a growable array.
//!
//! Capacity is tracked explicitly: when a push would exceed it, the backing
//! storage is doubled. Capacity never shrinks, not even on [`Stack::clear`].
//! Popping or peeking an empty stack returns
//! [`ContainerError::StackUnderflow`].
//!
//! ## Example
//! ```rust
//! # use arraystack::Stack;
//! let mut st = Stack::with_capacity(2);
//! st.push('a');
//! st.push('b');
//! st.push('c'); // grows to 4
//! assert_eq!(st.capacity(), 4);
//! assert_eq!(st.peek(), Ok(&'c'));
//! assert_eq!(st.len(), 3);
//! ```

use crate::ContainerError;
use std::fmt;

const DEFAULT_CAPACITY: usize = 10;

/// An array-backed last-in, first-out stack.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
    cap: usize,
}

impl<T> Stack<T> {
    /// Creates an empty stack with the default capacity of 10.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty stack able to hold `capacity` items before growing.
    ///
    /// A capacity of zero is rounded up to one so that doubling makes progress.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = capacity.max(1);
        Self {
            items: Vec::with_capacity(cap),
            cap,
        }
    }

    /// Pushes `item` on top of the stack, doubling the capacity if full.
    pub fn push(&mut self, item: T) {
        if self.items.len() == self.cap {
            self.grow();
        }
        self.items.push(item);
    }

    /// Removes and returns the top item.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.items.pop().ok_or(ContainerError::StackUnderflow)
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.items.last().ok_or(ContainerError::StackUnderflow)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items currently on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of items the stack can hold before the next growth.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Removes every item, keeping the current capacity.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }

    fn grow(&mut self) {
        let new_cap = self.cap * 2;
        self.items.reserve_exact(new_cap - self.items.len());
        log::trace!("stack grow {} -> {}", self.cap, new_cap);
        self.cap = new_cap;
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    /// Writes the items top to bottom, separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
