//! Owned OSM primitives, stripped to the fields the road network needs.

use std::collections::HashMap;

/// A decoded OSM node: position plus its raw tag mapping.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    pub tags: HashMap<String, String>,
}

/// A decoded OSM way: the ordered node references plus its raw tags.
#[derive(Debug, Clone)]
pub struct Way {
    pub id: i64,
    pub node_ids: Vec<i64>,
    pub tags: HashMap<String, String>,
}

impl Way {
    #[inline]
    pub fn highway(&self) -> Option<&str> {
        self.tags.get("highway").map(String::as_str)
    }

    #[inline]
    pub fn maxspeed(&self) -> Option<&str> {
        self.tags.get("maxspeed").map(String::as_str)
    }
}
