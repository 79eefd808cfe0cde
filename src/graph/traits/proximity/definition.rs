use geo::Point;

use crate::graph::primitives::IndexedNode;

/// Spatial queries over the indexed road-network nodes.
pub trait Scan {
    /// The indexed node nearest to `point`, or `None` when the index is
    /// empty. Ties between equidistant nodes resolve to any one of them,
    /// deterministically for a given index.
    fn nearest_node(&self, point: Point<f64>) -> Option<&IndexedNode>;
}
