//! `Stack` — LIFO discipline over one owned linked sequence.

use crate::sequence::LinkedSequence;

/// A last-in-first-out stack.
///
/// Elements enter and leave at the head, so removal order is the reverse of
/// arrival order. This is the frontier used by the depth-first traversals.
#[derive(Debug)]
pub struct Stack<T> {
    items: LinkedSequence<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self {
            items: LinkedSequence::new(),
        }
    }

    /// Returns the number of stacked elements.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no stacked elements.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes `value` onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.push_front(value);
    }

    /// Removes and returns the top element, newest first.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the top element without removing it.
    pub fn top(&self) -> Option<&T> {
        self.items.front()
    }
}
