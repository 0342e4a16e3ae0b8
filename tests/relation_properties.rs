//! End-to-end checks of relation classification, equivalence classes,
//! and root derivation, including randomized partition round-trips.

use std::collections::HashSet;

use proptest::prelude::*;
use relgraph::Graph;

#[test]
fn test_chain_classification_end_to_end() {
    let graph = Graph::from_pairs([1, 2, 3], [(1, 2), (2, 3)]);

    assert!(!graph.is_reflexive());
    assert!(!graph.is_symmetric());
    // The shortcut 1 -> 3 is missing.
    assert!(!graph.is_transitive());
    assert!(graph.is_antisymmetric());
    assert!(!graph.is_equivalence());

    assert_eq!(graph.roots(), vec![1]);
    assert!(graph.equivalence_class(&1).is_empty());
    assert_eq!(graph.iterative_breadth_first_search(), vec![1, 2, 3]);
    assert_eq!(graph.recursive_breadth_first_search(), vec![1, 2, 3]);
    assert_eq!(graph.iterative_depth_first_search(), vec![1, 2, 3]);
    assert_eq!(graph.recursive_depth_first_search(), vec![1, 2, 3]);
}

#[test]
fn test_full_equivalence_classification_end_to_end() {
    let graph = Graph::from_pairs(
        [1, 2, 3],
        [
            (1, 1),
            (2, 2),
            (3, 3),
            (1, 2),
            (2, 1),
            (1, 3),
            (3, 1),
            (2, 3),
            (3, 2),
        ],
    );

    assert!(graph.is_equivalence());
    assert!(!graph.is_antisymmetric());

    let class: HashSet<u32> = HashSet::from([1, 2, 3]);
    for vertex in [1, 2, 3] {
        assert_eq!(graph.equivalence_class(&vertex), class);
    }

    assert_eq!(graph.roots(), vec![1]);
    assert_eq!(graph.iterative_breadth_first_search(), vec![1, 2, 3]);
    assert_eq!(graph.recursive_depth_first_search(), vec![1, 2, 3]);
}

#[test]
fn test_empty_graph_is_vacuously_everything() {
    let graph: Graph<u32> = Graph::from_pairs([], []);

    assert!(graph.is_reflexive());
    assert!(graph.is_symmetric());
    assert!(graph.is_transitive());
    assert!(graph.is_antisymmetric());
    assert!(graph.is_equivalence());
    assert!(graph.roots().is_empty());
    assert!(graph.iterative_breadth_first_search().is_empty());
    assert!(graph.recursive_breadth_first_search().is_empty());
    assert!(graph.iterative_depth_first_search().is_empty());
    assert!(graph.recursive_depth_first_search().is_empty());
}

#[test]
fn test_single_self_loop_satisfies_all_properties() {
    let graph = Graph::from_pairs([1], [(1, 1)]);

    assert!(graph.is_reflexive());
    assert!(graph.is_symmetric());
    assert!(graph.is_transitive());
    assert!(graph.is_antisymmetric());
    assert!(graph.is_equivalence());

    assert_eq!(graph.roots(), vec![1]);
    assert_eq!(graph.equivalence_class(&1), HashSet::from([1]));
    assert_eq!(graph.iterative_breadth_first_search(), vec![1]);
    assert_eq!(graph.iterative_depth_first_search(), vec![1]);
}

#[test]
fn test_total_order_is_not_an_equivalence_and_has_no_roots() {
    // <= on {1, 2, 3}: reflexive, antisymmetric, transitive.
    let graph = Graph::from_pairs(
        [1, 2, 3],
        [(1, 1), (2, 2), (3, 3), (1, 2), (1, 3), (2, 3)],
    );

    assert!(graph.is_reflexive());
    assert!(graph.is_antisymmetric());
    assert!(graph.is_transitive());
    assert!(!graph.is_symmetric());
    assert!(!graph.is_equivalence());

    // Self-loops give every vertex an incoming edge, and without the
    // equivalence rule no vertex qualifies.
    assert!(graph.roots().is_empty());
    assert!(graph.iterative_breadth_first_search().is_empty());
}

#[test]
fn test_two_classes_partition_and_both_minima_are_roots() {
    let graph = Graph::from_pairs(
        [1, 2, 3],
        [(1, 1), (2, 2), (3, 3), (1, 2), (2, 1)],
    );

    assert!(graph.is_equivalence());
    assert_eq!(graph.equivalence_class(&1), HashSet::from([1, 2]));
    assert_eq!(graph.equivalence_class(&2), HashSet::from([1, 2]));
    assert_eq!(graph.equivalence_class(&3), HashSet::from([3]));

    assert_eq!(graph.roots(), vec![1, 3]);
    assert_eq!(graph.iterative_breadth_first_search(), vec![1, 3, 2]);
    assert_eq!(graph.iterative_depth_first_search(), vec![1, 2, 3]);
}

#[test]
fn test_vertices_equal_under_ordering_collapse_in_root_output() {
    // "07" and "7" are distinct vertices but parse to the same integer,
    // so the ordered root set keeps only one of them: the naturally
    // smallest, no matter which one hash iteration presents first.
    let graph = Graph::from_pairs(
        ["07", "7", "8"].map(String::from),
        [("07", "8"), ("7", "8")].map(|(a, b)| (String::from(a), String::from(b))),
    );

    assert_eq!(graph.roots(), vec![String::from("07")]);
}

#[test]
fn test_mixed_vertex_domains_derive_roots_without_panicking() {
    // Numeric and non-numeric names in one root set: the comparator
    // switches rules per pair, so no transitive chain spans the mix and
    // root ordering must hold up under any hash iteration order.
    let mut vertices: Vec<String> = (0..15).map(|i| i.to_string()).collect();
    vertices.extend((0..15).map(|i| format!("{i}a")));
    vertices.push(String::from("sink"));

    let pairs: Vec<(String, String)> = vertices
        .iter()
        .filter(|name| name.as_str() != "sink")
        .map(|name| (name.clone(), String::from("sink")))
        .collect();
    let graph = Graph::from_pairs(vertices.clone(), pairs);

    let roots = graph.roots();
    assert_eq!(roots.len(), 30);
    for name in vertices.iter().filter(|name| name.as_str() != "sink") {
        assert!(roots.contains(name), "missing root {name}");
    }
}

#[test]
fn test_graph_deserializes_from_json_fixture() {
    let fixture = r#"{
        "vertices": ["10", "9", "banana"],
        "edges": [
            { "source": "9", "destination": "banana" },
            { "source": "10", "destination": "banana" }
        ]
    }"#;

    let graph: Graph<String> = serde_json::from_str(fixture).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    // Numeric order for the numeric pair, not lexicographic.
    let expected: Vec<String> = ["9", "10"].map(String::from).into();
    assert_eq!(graph.roots(), expected);
}

#[test]
fn test_serde_round_trip_preserves_query_results() {
    let graph = Graph::from_pairs([1u32, 2, 3], [(1, 2), (2, 3), (1, 3)]);

    let json = serde_json::to_string(&graph).unwrap();
    let restored: Graph<u32> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.roots(), graph.roots());
    assert_eq!(restored.is_transitive(), graph.is_transitive());
    assert_eq!(
        restored.iterative_breadth_first_search(),
        graph.iterative_breadth_first_search()
    );
}

/// Random graph over vertices `0..n` with arbitrary edge pairs.
fn arbitrary_graph() -> impl Strategy<Value = Graph<u8>> {
    (1u8..7).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n), 0..24)
            .prop_map(move |pairs| Graph::from_pairs(0..n, pairs))
    })
}

/// Random block assignment; the graph relates exactly the vertices
/// sharing a block, which is an equivalence relation by construction.
fn partitioned_graph() -> impl Strategy<Value = (Vec<u8>, Graph<u8>)> {
    proptest::collection::vec(0u8..4, 1..7).prop_map(|blocks| {
        let n = blocks.len() as u8;
        let mut pairs = Vec::new();
        for i in 0..n {
            for j in 0..n {
                if blocks[i as usize] == blocks[j as usize] {
                    pairs.push((i, j));
                }
            }
        }
        let graph = Graph::from_pairs(0..n, pairs);
        (blocks, graph)
    })
}

proptest! {
    #[test]
    fn test_equivalence_is_the_conjunction_of_its_parts(graph in arbitrary_graph()) {
        prop_assert_eq!(
            graph.is_equivalence(),
            graph.is_reflexive() && graph.is_symmetric() && graph.is_transitive()
        );
    }

    #[test]
    fn test_roots_are_sorted_unique_members(graph in arbitrary_graph()) {
        let roots = graph.roots();

        prop_assert!(roots.windows(2).all(|pair| pair[0] < pair[1]));
        for root in &roots {
            prop_assert!(graph.contains_vertex(root));
            prop_assert!(
                graph.out_degree(root) > 0 || graph.in_degree(root) > 0,
                "isolated vertex {root} reported as root"
            );
        }
        // Derivation is pure, so repeated calls must agree.
        prop_assert_eq!(roots, graph.roots());
    }

    #[test]
    fn test_classes_are_empty_unless_equivalence(graph in arbitrary_graph()) {
        if !graph.is_equivalence() {
            for vertex in graph.vertices() {
                prop_assert!(graph.equivalence_class(vertex).is_empty());
            }
        }
    }

    #[test]
    fn test_partition_edges_form_an_equivalence(
        (blocks, graph) in partitioned_graph()
    ) {
        prop_assert!(graph.is_equivalence());

        for i in 0..blocks.len() {
            let expected: HashSet<u8> = (0..blocks.len())
                .filter(|&j| blocks[j] == blocks[i])
                .map(|j| j as u8)
                .collect();
            prop_assert_eq!(graph.equivalence_class(&(i as u8)), expected);
        }
    }

    #[test]
    fn test_partition_roots_are_block_minima(
        (blocks, graph) in partitioned_graph()
    ) {
        let mut minima = Vec::new();
        for block in 0u8..4 {
            if let Some(min) = (0..blocks.len()).find(|&j| blocks[j] == block) {
                minima.push(min as u8);
            }
        }
        minima.sort_unstable();

        prop_assert_eq!(graph.roots(), minima);
    }
}
