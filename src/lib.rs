//! # `relgraph` - Relation Classification and Deterministic Traversal
//!
//! A small engine for analyzing finite directed graphs as binary
//! relations. A [`Graph`] is built once from explicit vertex and edge
//! sets and then queried: classify the relation (reflexive, symmetric,
//! transitive, antisymmetric, equivalence), derive its equivalence
//! classes and traversal roots, and walk it breadth-first or
//! depth-first with fully deterministic output.
//!
//! ## Determinism Guarantees
//!
//! ### Ordering
//! - **Canonical vertex order**: Every vertex sequence the engine emits
//!   is ordered by [`order::ascending`], which compares vertices
//!   numerically when both render as integers and lexicographically
//!   otherwise. Distinct vertices that compare equal under that order
//!   (`"7"` and `"07"`) collapse to the naturally smallest
//!   representative. When one comparison rule covers the whole vertex
//!   domain (every value numeric, or none), two graphs with equal
//!   vertex and edge sets produce byte-identical output, independent
//!   of hash iteration order; a domain mixing both rules is ordered
//!   pairwise, so positions there can follow encounter order.
//! - **Root seeding**: Traversals start from [`Graph::roots`] in
//!   ascending order and expand neighbors in ascending order, so ties
//!   at equal depth always resolve the same way.
//! - **Paired strategies**: The recursive traversals reproduce their
//!   iterative counterparts element for element.
//!
//! ### Value semantics
//! - **No identity**: Vertices compare by value everywhere. Interning,
//!   indices, and reference identity play no part in any result.
//! - **Immutable input**: A constructed graph never changes, so every
//!   query is a pure function of the supplied sets.
//!
//! ## Key Features
//!
//! - **Relation classification**: The five property checks quantify
//!   directly over the edge set, including the vacuous truths on empty
//!   graphs.
//! - **Dual root criterion**: Sources (no incoming, some outgoing edge)
//!   and the minima of equivalence classes both qualify as entry points.
//! - **Four traversals**: Breadth-first and depth-first, each in an
//!   iterative and a recursive rendition over the same frontier types.
//! - **Owned frontier structures**: [`Queue`] and [`Stack`] are built
//!   on a singly linked [`LinkedSequence`] with O(1) front operations
//!   and iterative teardown.
//!
//! ## Architecture
//!
//! Three layers, each usable on its own:
//!
//! 1. **Ordering** ([`order`]):
//!    - The [`Vertex`] capability bundle, blanket-implemented
//!    - Numeric-then-lexicographic comparators shared by every query
//!
//! 2. **Sequences** ([`sequence`]):
//!    - [`LinkedSequence`], a singly linked list with head and tail
//!      insertion
//!    - [`Queue`] and [`Stack`] adapters exposing FIFO and LIFO fronts
//!
//! 3. **Graph engine** ([`graph`]):
//!    - [`Edge`] and [`Graph`] construction over hash sets
//!    - Relation predicates, roots, and equivalence classes
//!    - The four deterministic traversals
//!
//! ## Example
//!
//! ```rust
//! use relgraph::Graph;
//!
//! let graph = Graph::from_pairs(
//!     [1, 2, 3],
//!     [(1, 1), (2, 2), (3, 3), (1, 2), (2, 1), (1, 3), (3, 1), (2, 3), (3, 2)],
//! );
//!
//! assert!(graph.is_equivalence());
//! assert_eq!(graph.roots(), vec![1]);
//! assert_eq!(graph.equivalence_class(&2).len(), 3);
//! assert_eq!(graph.iterative_breadth_first_search(), vec![1, 2, 3]);
//! assert_eq!(
//!     graph.recursive_depth_first_search(),
//!     graph.iterative_depth_first_search(),
//! );
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;
pub mod order;
pub mod sequence;

pub use graph::{Edge, Graph};
pub use order::Vertex;
pub use sequence::{LinkedSequence, Queue, Stack};

// Compile-time assertions for memory layout expectations
const _: () = {
    use core::mem;

    // The frontier adapters are thin wrappers over the linked sequence.
    assert!(mem::size_of::<Queue<u32>>() == mem::size_of::<LinkedSequence<u32>>());
    assert!(mem::size_of::<Stack<u32>>() == mem::size_of::<LinkedSequence<u32>>());

    // The `Option<Box<_>>` head uses the null niche, keeping the
    // sequence at one pointer plus one length regardless of `T`.
    assert!(mem::size_of::<LinkedSequence<u64>>() == mem::size_of::<usize>() * 2);
    assert!(mem::size_of::<LinkedSequence<String>>() == mem::size_of::<usize>() * 2);
};
