//! Vertex capability bounds and the numerical-if-possible vertex ordering.
//!
//! Every user-visible ordering in this crate (root sets, per-vertex neighbor
//! expansion) goes through the same pair of comparators:
//! - compare as parsed integers when both textual forms parse as `i64`
//! - fall back to lexicographic order of the textual form otherwise
//!
//! Injecting one comparator everywhere keeps traversal output bit-for-bit
//! reproducible across runs and platforms for any vertex domain the
//! comparator totally orders; a domain mixing parseable and unparseable
//! forms is ordered pairwise (see [`ascending`]).

use core::cmp::Ordering;
use core::fmt::Display;
use core::hash::Hash;

/// Capability set required of a vertex type.
///
/// Equality and hashing give set membership, `Ord` gives the natural total
/// order (used for equivalence-class minima), and `Display` gives the textual
/// form consumed by the numerical comparators below. Blanket-implemented; any
/// type meeting the bounds is a vertex.
pub trait Vertex: Clone + Eq + Hash + Ord + Display {}

impl<T: Clone + Eq + Hash + Ord + Display> Vertex for T {}

/// Ascending numerical-if-possible order.
///
/// `"9"` sorts before `"10"`, while `"alpha"` and `"beta"` (or any operand
/// whose textual form does not parse as an integer, including `i64` overflow)
/// compare lexicographically.
///
/// The branch is chosen per pair, so the relation is not transitive once
/// parseable and unparseable forms mix: `"2" < "10"` numerically, while
/// `"10" < "1a"` and `"1a" < "2"` lexicographically. Ordered containers in
/// this crate therefore place values by pairwise insertion rather than a
/// bulk sort.
pub fn ascending<T: Vertex>(a: &T, b: &T) -> Ordering {
    let (a, b) = (a.to_string(), b.to_string());
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(lhs), Ok(rhs)) => lhs.cmp(&rhs),
        _ => a.cmp(&b),
    }
}

/// Descending numerical-if-possible order; the exact reversal of [`ascending`].
pub fn descending<T: Vertex>(a: &T, b: &T) -> Ordering {
    ascending(b, a)
}

/// Builds an ordered set under `cmp` by pairwise insertion, the way a
/// comparator-keyed tree set fills: each value collapses into an equal entry
/// met during the scan, keeping the naturally smaller (`Ord`) of the two, or
/// lands before the first entry comparing greater. Placement uses individual
/// comparisons only, so `cmp` does not have to be transitive over the whole
/// input.
pub(crate) fn sorted_set<T: Vertex>(values: Vec<T>, cmp: fn(&T, &T) -> Ordering) -> Vec<T> {
    let mut result: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        let mut insert_at = result.len();
        let mut equal_at = None;
        for (index, existing) in result.iter().enumerate() {
            match cmp(&value, existing) {
                Ordering::Equal => {
                    equal_at = Some(index);
                    break;
                }
                Ordering::Less => {
                    insert_at = index;
                    break;
                }
                Ordering::Greater => {}
            }
        }
        if let Some(index) = equal_at {
            // The naturally smaller of the pair survives.
            if value < result[index] {
                result[index] = value;
            }
        } else {
            result.insert(insert_at, value);
        }
    }
    result
}
