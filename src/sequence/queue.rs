//! `Queue` — FIFO discipline over one owned linked sequence.

use crate::sequence::LinkedSequence;

/// A first-in-first-out queue.
///
/// Elements enter at the tail (`enqueue`) and leave at the head (`dequeue`),
/// so removal order equals arrival order. This is the frontier used by the
/// breadth-first traversals.
#[derive(Debug)]
pub struct Queue<T> {
    items: LinkedSequence<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            items: LinkedSequence::new(),
        }
    }

    /// Returns the number of queued elements.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no queued elements.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `value` to the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the front element, oldest first.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the front element without removing it.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_is_first_in_first_out() {
        let mut queue = Queue::new();
        queue.enqueue('a');
        queue.enqueue('b');
        queue.enqueue('c');

        assert_eq!(queue.dequeue(), Some('a'));
        assert_eq!(queue.dequeue(), Some('b'));
        assert_eq!(queue.dequeue(), Some('c'));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn front_peeks_without_removing() {
        let mut queue = Queue::new();
        queue.enqueue(10);
        queue.enqueue(20);

        assert_eq!(queue.front(), Some(&10));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn interleaved_operations_keep_order() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Some(1));
        queue.enqueue(3);

        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert!(queue.is_empty());
    }
}
