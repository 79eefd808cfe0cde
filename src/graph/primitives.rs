//! Arena records for the road network.
//!
//! Nodes reference ways and ways reference nodes; both live in arenas on
//! [`Graph`](crate::graph::Graph) and cross-reference each other by
//! stable index, so no owning cycles exist. A node's `ways` list holds
//! indices into the way arena; a way's `node_ids` are the OSM node ids
//! that double as keys of the node arena.

use std::collections::HashMap;

use geo::Point;
use rstar::{PointDistance, RTreeObject, AABB};

/// A node of the extract, retained whether or not a drivable way
/// references it. Position, raw tags, and the back-references into the
/// way arena populated during topology building.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    pub tags: HashMap<String, String>,
    /// Indices into the way arena of every retained way touching this node.
    pub ways: Vec<usize>,
}

impl Node {
    #[inline]
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

/// A retained drivable way.
#[derive(Debug, Clone)]
pub struct Way {
    pub id: i64,
    /// Ordered node references; at least two, each resolvable in the
    /// node arena once the topology pass completes.
    pub node_ids: Vec<i64>,
    pub tags: HashMap<String, String>,
    /// Total great-circle length in kilometers.
    pub dist: f64,
    /// Inferred speed in miles per hour, at least 1.
    pub max_speed: u32,
}

impl Way {
    /// A `oneway` tag of any value marks the way as one-directional.
    #[inline]
    pub fn oneway(&self) -> bool {
        self.tags.contains_key("oneway")
    }
}

/// Spatial-index entry: one per (way, node) touch, keyed by a degenerate
/// `(lat, lon)` rectangle around the node position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedNode {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
}

impl IndexedNode {
    #[inline]
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl RTreeObject for IndexedNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.lat, self.lon])
    }
}

impl PointDistance for IndexedNode {
    /// Squared planar distance in degree space. Valid for the
    /// sub-kilometer neighborhoods snapping operates in, where planar
    /// and geodesic nearest-neighbor agree.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let d_lat = self.lat - point[0];
        let d_lon = self.lon - point[1];
        d_lat * d_lat + d_lon * d_lon
    }
}
