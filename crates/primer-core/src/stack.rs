//! # Stack
//!
//! Last-in-first-out container. Reading from an empty stack is an error the
//! caller has to handle; there is no silent default.
//!
//! ```text
//!   push(4)  push(5)   pop() → 5   peek() → 4
//!   ┌───┐    ┌───┐     ┌───┐       ┌───┐
//!   │   │    │ 5 │ top │   │       │   │
//!   │ 4 │    │ 4 │     │ 4 │ top   │ 4 │ top (unchanged)
//!   └───┘    └───┘     └───┘       └───┘
//! ```

use crate::error::{CoreError, CoreResult};

/// A LIFO stack backed by a `Vec`.
///
/// ## Example
/// ```rust
/// use primer_core::{CoreError, Stack};
///
/// let mut stack = Stack::new();
/// assert!(stack.is_empty());
///
/// stack.push("a");
/// stack.push("b");
/// assert_eq!(stack.peek(), Ok(&"b"));
/// assert_eq!(stack.pop(), Ok("b"));
/// assert_eq!(stack.size(), 1);
///
/// stack.clear();
/// assert_eq!(stack.pop(), Err(CoreError::EmptyStack));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` items before reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes `item` on top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// ## Errors
    /// [`CoreError::EmptyStack`] when there is nothing to pop.
    pub fn pop(&mut self) -> CoreResult<T> {
        self.items.pop().ok_or(CoreError::EmptyStack)
    }

    /// Returns the top item without removing it.
    ///
    /// ## Errors
    /// [`CoreError::EmptyStack`] when there is nothing to peek at.
    pub fn peek(&self) -> CoreResult<&T> {
        self.items.last().ok_or(CoreError::EmptyStack)
    }

    /// Returns true when the stack holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items currently on the stack.
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

/// Items are pushed in iteration order, so the last one ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pop_returns_last_pushed() {
        let mut stack = Stack::new();
        stack.push(4);
        stack.push(5);

        assert_eq!(stack.pop(), Ok(5));
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn test_pop_empty_is_error() {
        let mut stack: Stack<i32> = Stack::new();
        let err = stack.pop().unwrap_err();

        assert_eq!(err, CoreError::EmptyStack);
        assert!(err.to_string().to_lowercase().contains("empty"));
    }

    #[test]
    fn test_pop_after_clear_is_error() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.clear();

        assert_eq!(stack.size(), 0);
        assert_eq!(stack.pop(), Err(CoreError::EmptyStack));
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = Stack::new();
        stack.push(4);
        stack.push(9);

        assert_eq!(stack.peek(), Ok(&9));
        assert_eq!(stack.size(), 2);
    }

    #[test]
    fn test_peek_empty_is_error() {
        let stack: Stack<String> = Stack::default();
        assert_eq!(stack.peek(), Err(CoreError::EmptyStack));
    }

    #[test]
    fn test_is_empty() {
        let mut stack = Stack::with_capacity(4);
        assert!(stack.is_empty());

        stack.push(5);
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_collect_puts_last_item_on_top() {
        let mut stack: Stack<char> = "abc".chars().collect();
        stack.extend(['d']);

        assert_eq!(stack.pop(), Ok('d'));
        assert_eq!(stack.pop(), Ok('c'));
        assert_eq!(stack.size(), 2);
    }

    proptest! {
        #[test]
        fn test_pops_reverse_push_order(items: Vec<i32>) {
            let mut stack = Stack::new();
            for item in &items {
                stack.push(*item);
            }
            prop_assert_eq!(stack.size(), items.len());

            let mut popped = Vec::with_capacity(items.len());
            while let Ok(item) = stack.pop() {
                popped.push(item);
            }
            popped.reverse();

            prop_assert_eq!(popped, items);
            prop_assert!(stack.is_empty());
        }
    }
}
