//! `Edge` — a directed ordered pair of vertices.

use serde::{Deserialize, Serialize};

/// A directed edge from a source vertex to a destination vertex.
///
/// Self-loops (`source == destination`) are permitted. Equality and hashing
/// cover both endpoints in order, so edge collections carry set semantics:
/// inserting `(a, b)` twice stores it once, and `(a, b)` is distinct from
/// `(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<T> {
    source: T,
    destination: T,
}

impl<T> Edge<T> {
    /// Creates the directed edge `source -> destination`.
    pub const fn new(source: T, destination: T) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Returns the vertex this edge starts from.
    pub const fn source(&self) -> &T {
        &self.source
    }

    /// Returns the vertex this edge points to.
    pub const fn destination(&self) -> &T {
        &self.destination
    }
}

impl<T> From<(T, T)> for Edge<T> {
    fn from((source, destination): (T, T)) -> Self {
        Self::new(source, destination)
    }
}
