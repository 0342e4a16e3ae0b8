//! Relation properties derived from the edge set.
//!
//! The graph is read as a binary relation on its vertex set: an edge
//! `a -> b` means `a R b`. Each predicate quantifies over vertices and
//! edges with plain nested scans and value equality, so the answers hold
//! for exactly the relation that was supplied, including the vacuous
//! truths on an empty edge set.

use std::collections::HashSet;

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::order::{self, Vertex};

use super::Graph;

impl<T: Vertex> Graph<T> {
    /// Returns `true` if every vertex relates to itself.
    ///
    /// A graph with vertices but no self-loops is not reflexive; a graph
    /// with no vertices is.
    pub fn is_reflexive(&self) -> bool {
        self.vertices.iter().all(|vertex| {
            self.edges
                .iter()
                .any(|edge| edge.source() == vertex && edge.destination() == vertex)
        })
    }

    /// Returns `true` if every edge `a -> b` has a mirror `b -> a`.
    ///
    /// Self-loops mirror themselves. Vacuously true without edges.
    pub fn is_symmetric(&self) -> bool {
        self.edges.iter().all(|edge| {
            self.edges.iter().any(|mirror| {
                mirror.source() == edge.destination() && mirror.destination() == edge.source()
            })
        })
    }

    /// Returns `true` if every two-step path `a -> b -> c` has the
    /// shortcut `a -> c`.
    ///
    /// Vacuously true when no edge pair chains.
    pub fn is_transitive(&self) -> bool {
        self.edges.iter().all(|first| {
            self.edges
                .iter()
                .filter(|second| first.destination() == second.source())
                .all(|second| {
                    self.edges.iter().any(|shortcut| {
                        shortcut.source() == first.source()
                            && shortcut.destination() == second.destination()
                    })
                })
        })
    }

    /// Returns `true` if no two distinct vertices relate in both
    /// directions.
    ///
    /// Self-loops are exempt, so antisymmetry and reflexivity can hold
    /// together.
    pub fn is_antisymmetric(&self) -> bool {
        !self.edges.iter().any(|edge| {
            self.edges.iter().any(|mirror| {
                edge.source() == mirror.destination()
                    && edge.destination() == mirror.source()
                    && edge.source() != edge.destination()
            })
        })
    }

    /// Returns `true` if the relation is reflexive, symmetric, and
    /// transitive.
    pub fn is_equivalence(&self) -> bool {
        self.is_reflexive() && self.is_symmetric() && self.is_transitive()
    }

    /// Returns the equivalence class of `vertex`, or the empty set when
    /// the relation is not an equivalence.
    ///
    /// Membership is collected from edges incident to `vertex`: the
    /// destination of every outgoing edge and the source of every
    /// incoming one. Under an equivalence relation the self-loop puts
    /// `vertex` itself in its own class. A vertex outside the graph has
    /// no incident edges and therefore an empty class.
    pub fn equivalence_class(&self, vertex: &T) -> HashSet<T> {
        let mut class = HashSet::new();
        if !self.is_equivalence() {
            return class;
        }
        for edge in &self.edges {
            if edge.source() == vertex {
                class.insert(edge.destination().clone());
            } else if edge.destination() == vertex {
                class.insert(edge.source().clone());
            }
        }
        class
    }

    /// Returns the traversal entry points in ascending order.
    ///
    /// A vertex is a root if it has no incoming edges and at least one
    /// outgoing edge, or, when the relation is an equivalence, if it is
    /// the minimum of its own equivalence class. Isolated vertices match
    /// neither rule. The result is ordered by [`order::ascending`], with
    /// duplicates under that ordering collapsed to the naturally
    /// smallest representative.
    pub fn roots(&self) -> Vec<T> {
        let mut roots = Vec::new();
        for vertex in &self.vertices {
            if self.is_degree_root(vertex)
                || (self.equivalence_class(vertex).contains(vertex)
                    && self.is_class_minimum(vertex))
            {
                roots.push(vertex.clone());
            }
        }
        let roots = order::sorted_set(roots, order::ascending);
        #[cfg(feature = "tracing")]
        debug!(count = roots.len(), "derived root set");
        roots
    }

    fn is_degree_root(&self, vertex: &T) -> bool {
        self.in_degree(vertex) == 0 && self.out_degree(vertex) > 0
    }

    /// `vertex` is no greater than every member of its class, under the
    /// vertex type's own ordering.
    fn is_class_minimum(&self, vertex: &T) -> bool {
        self.equivalence_class(vertex)
            .iter()
            .all(|member| vertex <= member)
    }
}
