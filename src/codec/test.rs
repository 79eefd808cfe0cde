use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use crate::codec::primitive::{Node, Way};
use crate::codec::reader::{read_primitives, Primitives};

fn tags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn way_tag_accessors() {
    let way = Way {
        id: 7,
        node_ids: vec![1, 2],
        tags: tags(&[("highway", "primary"), ("maxspeed", "45")]),
    };

    assert_eq!(way.highway(), Some("primary"));
    assert_eq!(way.maxspeed(), Some("45"));

    let untagged = Way {
        id: 8,
        node_ids: vec![2, 3],
        tags: HashMap::new(),
    };
    assert_eq!(untagged.highway(), None);
    assert_eq!(untagged.maxspeed(), None);
}

#[test]
fn merge_concatenates_streams() {
    let left = Primitives {
        nodes: vec![Node {
            id: 1,
            lat: 0.0,
            lon: 0.0,
            tags: HashMap::new(),
        }],
        ways: vec![],
        relations: 2,
    };
    let right = Primitives {
        nodes: vec![Node {
            id: 2,
            lat: 0.0,
            lon: 0.001,
            tags: HashMap::new(),
        }],
        ways: vec![Way {
            id: 10,
            node_ids: vec![1, 2],
            tags: tags(&[("highway", "residential")]),
        }],
        relations: 1,
    };

    let merged = left.merge(right);
    assert_eq!(
        merged.nodes.iter().map(|n| n.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(merged.ways.len(), 1);
    assert_eq!(merged.relations, 3);
}

#[test]
#[ignore = "requires a real extract; set OSM_PBF to its path"]
fn decode_extract() {
    let path = PathBuf::from(env::var("OSM_PBF").expect("OSM_PBF not set"));
    let primitives = read_primitives(&path).expect("could not decode extract");

    assert!(!primitives.nodes.is_empty(), "extract contained no nodes");
    assert!(!primitives.ways.is_empty(), "extract contained no ways");
}
