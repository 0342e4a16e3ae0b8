//! Ordered-sequence primitives backing the traversal frontiers.
//!
//! One owned singly-linked sequence, two removal disciplines:
//! - `queue`: FIFO (breadth-first frontier)
//! - `stack`: LIFO (depth-first frontier)

pub mod linked;
pub mod queue;
pub mod stack;

pub use linked::LinkedSequence;
pub use queue::Queue;
pub use stack::Stack;
