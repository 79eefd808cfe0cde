use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use crate::codec::{self, Primitives};
use crate::geo::haversine_distance;
use crate::graph::error::GraphError;
use crate::graph::traits::util::{node, t_network, tags};
use crate::graph::Graph;

#[test]
fn retained_ways_resolve_and_have_positive_length() {
    let graph = t_network(false);

    assert_eq!(graph.ways().len(), 2);
    for way in graph.ways() {
        assert!(way.node_ids.len() >= 2);
        assert!(way.dist > 0.0, "way {} has no length", way.id);
        for &node_id in &way.node_ids {
            assert!(graph.node(node_id).is_some(), "node {node_id} unresolved");
        }
    }
}

#[test]
fn every_decoded_node_lands_in_the_arena() {
    let graph = t_network(false);
    assert_eq!(graph.node_count(), 4);
}

#[test]
fn back_references_cover_every_touch() {
    let graph = t_network(false);

    assert_eq!(graph.node(1).unwrap().ways, vec![0]);
    assert_eq!(graph.node(2).unwrap().ways, vec![0, 1]);
    assert_eq!(graph.node(3).unwrap().ways, vec![0]);
    assert_eq!(graph.node(4).unwrap().ways, vec![1]);

    // One index entry per (way, node) touch; the junction node twice.
    assert_eq!(graph.index().size(), 5);
}

#[test]
fn edges_join_consecutive_way_nodes_with_positive_weights() {
    let graph = t_network(false);

    assert_eq!(graph.size(), 4);
    assert_eq!(graph.edge_count(), 6);

    for (a, b) in [(1, 2), (2, 3), (2, 4)] {
        let forward = graph.edge_weight(a, b).expect("missing forward edge");
        let reverse = graph.edge_weight(b, a).expect("missing reverse edge");

        assert!(forward > 0.0);
        assert_eq!(forward, reverse, "asymmetric weights on {a} <-> {b}");
    }
}

#[test]
fn edge_weights_are_distance_over_speed() {
    let graph = t_network(false);

    let n1 = graph.node(1).unwrap().point();
    let n2 = graph.node(2).unwrap().point();

    // The main road is primary with no maxspeed tag: 35 mph.
    let expected = haversine_distance(n1, n2) / 35.0;
    let weight = graph.edge_weight(1, 2).unwrap();

    assert!((weight - expected).abs() < 1e-15);
}

#[test]
fn oneway_ways_emit_no_reverse_edges() {
    let graph = t_network(true);

    assert!(graph.edge_weight(1, 2).is_some());
    assert!(graph.edge_weight(2, 1).is_none());
    assert!(graph.edge_weight(2, 3).is_some());
    assert!(graph.edge_weight(3, 2).is_none());

    // The spur carries no oneway tag and stays bidirectional.
    assert!(graph.edge_weight(2, 4).is_some());
    assert!(graph.edge_weight(4, 2).is_some());
}

#[test]
fn undrivable_and_degenerate_ways_are_dropped() {
    let primitives = Primitives {
        nodes: vec![node(1, 0.0, 0.0), node(2, 0.0, 0.001)],
        ways: vec![
            codec::Way {
                id: 20,
                node_ids: vec![1, 2],
                tags: tags(&[("highway", "footway")]),
            },
            codec::Way {
                id: 21,
                node_ids: vec![1, 2],
                tags: tags(&[("highway", "unclassified")]),
            },
            codec::Way {
                id: 22,
                node_ids: vec![1],
                tags: tags(&[("highway", "primary")]),
            },
            codec::Way {
                id: 23,
                node_ids: vec![1, 2],
                tags: HashMap::new(),
            },
            codec::Way {
                id: 24,
                node_ids: vec![1, 2],
                tags: tags(&[("highway", "residential")]),
            },
        ],
        relations: 3,
    };

    let graph = Graph::from_elements(primitives).expect("could not build");
    assert_eq!(graph.ways().len(), 1);
    assert_eq!(graph.ways()[0].id, 24);
}

#[test]
fn a_dangling_node_reference_is_fatal() {
    let primitives = Primitives {
        nodes: vec![node(1, 0.0, 0.0)],
        ways: vec![codec::Way {
            id: 30,
            node_ids: vec![1, 99],
            tags: tags(&[("highway", "primary")]),
        }],
        relations: 0,
    };

    assert!(matches!(
        Graph::from_elements(primitives),
        Err(GraphError::MissingNode(99))
    ));
}

#[test]
fn an_extract_without_drivable_ways_is_fatal() {
    let primitives = Primitives {
        nodes: vec![node(1, 0.0, 0.0), node(2, 0.0, 0.001)],
        ways: vec![codec::Way {
            id: 31,
            node_ids: vec![1, 2],
            tags: tags(&[("highway", "cycleway")]),
        }],
        relations: 0,
    };

    assert!(matches!(
        Graph::from_elements(primitives),
        Err(GraphError::NoRetainedWays)
    ));
}

#[test]
fn zero_length_segments_never_become_edges() {
    // N1 and N2 coincide; N3 is distinct. The walk accumulates across
    // the degenerate pair and emits a single edge spanning it.
    let primitives = Primitives {
        nodes: vec![node(1, 0.0, 0.0), node(2, 0.0, 0.0), node(3, 0.0, 0.001)],
        ways: vec![codec::Way {
            id: 40,
            node_ids: vec![1, 2, 3],
            tags: tags(&[("highway", "service")]),
        }],
        relations: 0,
    };

    let graph = Graph::from_elements(primitives).expect("could not build");

    assert_eq!(graph.edge_count(), 2);
    assert!(graph.edge_weight(1, 3).is_some());
    assert!(graph.edge_weight(3, 1).is_some());
    assert!(graph.edge_weight(1, 2).is_none());
    assert!(graph.edge_weight(2, 3).is_none());
}

#[test]
fn every_edge_is_positive_and_resolvable() {
    let graph = t_network(false);

    for (a, b, weight) in graph.edges() {
        assert!(weight > 0.0, "edge {a} -> {b} has weight {weight}");
        assert!(graph.node(a).is_some());
        assert!(graph.node(b).is_some());
    }
}

#[test]
fn rebuilding_from_identical_input_is_idempotent() {
    let first = t_network(false);
    let second = t_network(false);

    assert_eq!(first.node_count(), second.node_count());
    assert_eq!(first.size(), second.size());
    assert_eq!(first.edge_count(), second.edge_count());

    for (a, b, weight) in first.edges() {
        assert_eq!(second.edge_weight(a, b), Some(weight));
    }
}

#[test]
fn parallel_ways_overwrite_rather_than_stack() {
    // Two retained ways covering the same pair at different speeds: the
    // later way's weight wins.
    let primitives = Primitives {
        nodes: vec![node(1, 0.0, 0.0), node(2, 0.0, 0.001)],
        ways: vec![
            codec::Way {
                id: 50,
                node_ids: vec![1, 2],
                tags: tags(&[("highway", "service")]),
            },
            codec::Way {
                id: 51,
                node_ids: vec![1, 2],
                tags: tags(&[("highway", "motorway")]),
            },
        ],
        relations: 0,
    };

    let graph = Graph::from_elements(primitives).expect("could not build");
    let n1 = graph.node(1).unwrap().point();
    let n2 = graph.node(2).unwrap().point();

    let expected = haversine_distance(n1, n2) / 55.0;
    assert!((graph.edge_weight(1, 2).unwrap() - expected).abs() < 1e-15);
}

#[test]
#[ignore = "requires a real extract; set OSM_PBF to its path"]
fn ingest_extract_end_to_end() {
    let path = PathBuf::from(env::var("OSM_PBF").expect("OSM_PBF not set"));
    let graph = Graph::from_pbf(&path).expect("could not build graph");

    assert!(graph.size() > 0);
    assert!(graph.edge_count() > 0);
}
