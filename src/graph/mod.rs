//! Relation analysis and deterministic traversal over an immutable graph.
//!
//! The engine is organized in three layers on one type:
//! - construction and raw accessors (this module)
//! - relation-property derivation: reflexivity, symmetry, transitivity,
//!   antisymmetry, equivalence, roots, equivalence classes (`relation`)
//! - breadth-first and depth-first traversal, iterative and recursive
//!   (`traversal`)

pub mod edge;
mod relation;
mod traversal;

pub use edge::Edge;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::order::Vertex;

/// An immutable directed graph `(V, E)` analyzed as a binary relation.
///
/// Constructed once from a vertex set and an edge set, then only queried;
/// every derivation (relation properties, roots, equivalence classes,
/// traversal orders) is recomputed from the raw edge set on each call.
/// Queries scan the edge set linearly instead of precomputing adjacency,
/// so results always reflect the raw relation exactly as given.
///
/// | Query family | Cost | Notes |
/// |--------------|------|-------|
/// | degree / membership | O(E) | single edge scan |
/// | `is_reflexive` | O(V·E) | edge scan per vertex |
/// | `is_symmetric` | O(E²) | mirror scan per edge |
/// | `is_transitive` | O(E³) | worst case |
/// | `roots` | O(V·E³) | re-derives equivalence per candidate |
/// | traversals | O((V+E)²) | visited list probed linearly |
///
/// # Example
///
/// ```
/// use relgraph::Graph;
///
/// let graph = Graph::from_pairs([1, 2, 3], [(1, 2), (2, 3)]);
/// assert_eq!(graph.roots(), vec![1]);
/// assert_eq!(graph.iterative_breadth_first_search(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Eq + std::hash::Hash",
    deserialize = "T: Deserialize<'de> + Eq + std::hash::Hash"
))]
pub struct Graph<T> {
    vertices: HashSet<T>,
    edges: HashSet<Edge<T>>,
}

impl<T: Vertex> Graph<T> {
    /// Creates a graph from a vertex set and an edge set.
    ///
    /// Every edge endpoint must be a member of `vertices`; this is a caller
    /// contract, verified in debug builds only.
    pub fn new(vertices: HashSet<T>, edges: HashSet<Edge<T>>) -> Self {
        debug_assert!(
            edges.iter().all(|edge| {
                vertices.contains(edge.source()) && vertices.contains(edge.destination())
            }),
            "edge endpoints must be members of the vertex set"
        );
        Self { vertices, edges }
    }

    /// Creates a graph from vertex values and `(source, destination)` pairs.
    ///
    /// Duplicates on either side collapse under set semantics.
    pub fn from_pairs(
        vertices: impl IntoIterator<Item = T>,
        pairs: impl IntoIterator<Item = (T, T)>,
    ) -> Self {
        Self::new(
            vertices.into_iter().collect(),
            pairs.into_iter().map(Edge::from).collect(),
        )
    }

    /// Returns the vertex set.
    pub fn vertices(&self) -> &HashSet<T> {
        &self.vertices
    }

    /// Returns the edge set.
    pub fn edges(&self) -> &HashSet<Edge<T>> {
        &self.edges
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if `vertex` is a member of the vertex set.
    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.vertices.contains(vertex)
    }

    /// Returns `true` if the edge `source -> destination` is present.
    pub fn contains_edge(&self, source: &T, destination: &T) -> bool {
        self.edges
            .iter()
            .any(|edge| edge.source() == source && edge.destination() == destination)
    }

    /// Counts edges ending at `vertex`.
    pub fn in_degree(&self, vertex: &T) -> usize {
        self.edges
            .iter()
            .filter(|edge| edge.destination() == vertex)
            .count()
    }

    /// Counts edges starting from `vertex`.
    pub fn out_degree(&self, vertex: &T) -> usize {
        self.edges
            .iter()
            .filter(|edge| edge.source() == vertex)
            .count()
    }
}
