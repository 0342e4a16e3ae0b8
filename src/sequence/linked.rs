//! `LinkedSequence` — an owned singly-linked sequence.
//!
//! Goals:
//! - single-owner node chain (`Option<Box<..>>` links, no arena or indices)
//! - O(1) `push_front`/`pop_front`, tail-walk `push_back`, tracked `len`
//! - iterative teardown so deep chains cannot overflow the call stack
//!
//! This is the backing store for the [`Queue`](crate::sequence::Queue) and
//! [`Stack`](crate::sequence::Stack) frontier disciplines; each wrapper exposes
//! the complementary removal end of one owned sequence.

use core::fmt;

/// A link to the next node, if any.
type Link<T> = Option<Box<Node<T>>>;

/// One owned element in the chain.
struct Node<T> {
    value: T,
    next: Link<T>,
}

/// An owned singly-linked sequence of elements.
pub struct LinkedSequence<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedSequence<T> {
    /// Creates an empty sequence.
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prepends `value` as the new head.
    pub fn push_front(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Appends `value` after the current tail.
    ///
    /// Walks the chain to the final link; the sequence stays a plain
    /// head-owned chain with no tail pointer to keep in sync.
    pub fn push_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Removes and returns the head element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Returns a reference to the head element.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Iterates the elements head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedSequence<T> {
    fn drop(&mut self) {
        // Unlink one node at a time; the default recursive Box drop would
        // recurse once per element.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::new();
        for value in iter {
            sequence.push_back(value);
        }
        sequence
    }
}

/// Head-to-tail borrowing iterator over a [`LinkedSequence`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}
