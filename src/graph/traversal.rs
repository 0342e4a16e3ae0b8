//! Deterministic breadth-first and depth-first traversal.
//!
//! All four traversals start from [`Graph::roots`], expand neighbors in
//! the numeric-then-lexicographic order of [`order::ascending`], and
//! record each reachable vertex exactly once. Iterative and recursive
//! variants of the same strategy produce identical sequences; the
//! recursive ones drive the same frontier through self-recursion, one
//! frontier element per call.
//!
//! Visited vertices are tracked in a plain `Vec` probed linearly, which
//! keeps recorded order and membership in one structure.

use std::cmp::Ordering;

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::order::{self, Vertex};
use crate::sequence::{Queue, Stack};

use super::Graph;

impl<T: Vertex> Graph<T> {
    /// Visits vertices breadth-first from the roots, using an explicit
    /// queue.
    ///
    /// Roots enter the queue in ascending order, and each dequeued
    /// vertex enqueues its not-yet-visited neighbors in ascending
    /// order, so ties at equal depth resolve deterministically. Without
    /// roots the result is empty.
    pub fn iterative_breadth_first_search(&self) -> Vec<T> {
        let mut frontier = Queue::new();
        let mut visited: Vec<T> = Vec::new();

        for root in self.roots() {
            frontier.enqueue(root);
        }

        while let Some(current) = frontier.dequeue() {
            if !visited.contains(&current) {
                visited.push(current.clone());
            }
            // Expansion happens on every dequeue; the enqueue-time
            // filter keeps revisits from changing the recorded order.
            for neighbor in self.neighbors_sorted(&current, order::ascending) {
                if !visited.contains(&neighbor) {
                    frontier.enqueue(neighbor);
                }
            }
        }

        #[cfg(feature = "tracing")]
        debug!(visited = visited.len(), "breadth-first traversal complete");
        visited
    }

    /// Visits vertices depth-first from the roots, using an explicit
    /// stack.
    ///
    /// Among the unvisited neighbors of a vertex the smallest branch is
    /// explored first; remaining roots are taken up once a branch is
    /// exhausted. Without roots the result is empty.
    pub fn iterative_depth_first_search(&self) -> Vec<T> {
        let mut frontier = Stack::new();
        let mut visited: Vec<T> = Vec::new();

        // Seeded in reverse so roots pop in ascending order.
        for root in self.roots().into_iter().rev() {
            frontier.push(root);
        }

        while let Some(current) = frontier.pop() {
            if !visited.contains(&current) {
                visited.push(current.clone());
                // Neighbors push unconditionally in descending order;
                // the pop-time check above filters stale entries.
                for neighbor in self.neighbors_sorted(&current, order::descending) {
                    frontier.push(neighbor);
                }
            }
        }

        #[cfg(feature = "tracing")]
        debug!(visited = visited.len(), "depth-first traversal complete");
        visited
    }

    /// Visits vertices breadth-first from the roots, driving the queue
    /// by self-recursion.
    ///
    /// Produces exactly the sequence of
    /// [`iterative_breadth_first_search`](Self::iterative_breadth_first_search).
    /// Recursion depth grows with the number of queue operations, so
    /// very large graphs can exhaust the call stack.
    pub fn recursive_breadth_first_search(&self) -> Vec<T> {
        let mut frontier = Queue::new();
        let mut visited = Vec::new();

        for root in self.roots() {
            frontier.enqueue(root);
        }

        self.breadth_first_step(&mut frontier, &mut visited);

        #[cfg(feature = "tracing")]
        debug!(visited = visited.len(), "breadth-first traversal complete");
        visited
    }

    /// Visits vertices depth-first from the roots, driving the stack by
    /// self-recursion.
    ///
    /// Produces exactly the sequence of
    /// [`iterative_depth_first_search`](Self::iterative_depth_first_search).
    /// Recursion depth grows with the number of stack operations, so
    /// very large graphs can exhaust the call stack.
    pub fn recursive_depth_first_search(&self) -> Vec<T> {
        let mut frontier = Stack::new();
        let mut visited = Vec::new();

        for root in self.roots().into_iter().rev() {
            frontier.push(root);
        }

        self.depth_first_step(&mut frontier, &mut visited);

        #[cfg(feature = "tracing")]
        debug!(visited = visited.len(), "depth-first traversal complete");
        visited
    }

    /// One queue step: dequeue, record if new, enqueue unvisited
    /// neighbors, recurse until the queue drains.
    fn breadth_first_step(&self, frontier: &mut Queue<T>, visited: &mut Vec<T>) {
        let Some(current) = frontier.dequeue() else {
            return;
        };
        if !visited.contains(&current) {
            visited.push(current.clone());
        }
        for neighbor in self.neighbors_sorted(&current, order::ascending) {
            if !visited.contains(&neighbor) {
                frontier.enqueue(neighbor);
            }
        }
        self.breadth_first_step(frontier, visited);
    }

    /// One stack step: pop, and if new, record and push neighbors
    /// descending, then recurse until the stack drains.
    fn depth_first_step(&self, frontier: &mut Stack<T>, visited: &mut Vec<T>) {
        let Some(current) = frontier.pop() else {
            return;
        };
        if !visited.contains(&current) {
            visited.push(current.clone());
            for neighbor in self.neighbors_sorted(&current, order::descending) {
                frontier.push(neighbor);
            }
        }
        self.depth_first_step(frontier, visited);
    }

    /// Destinations of edges leaving `vertex`, deduplicated and sorted
    /// by `cmp`.
    fn neighbors_sorted(&self, vertex: &T, cmp: fn(&T, &T) -> Ordering) -> Vec<T> {
        let successors = self
            .edges
            .iter()
            .filter(|edge| edge.source() == vertex)
            .map(|edge| edge.destination().clone())
            .collect();
        order::sorted_set(successors, cmp)
    }
}
