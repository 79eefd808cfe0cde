use geo::Point;

use crate::geo::index_key;
use crate::graph::primitives::IndexedNode;
use crate::graph::traits::proximity::definition::Scan;
use crate::graph::Graph;

impl Scan for Graph {
    #[inline]
    fn nearest_node(&self, point: Point<f64>) -> Option<&IndexedNode> {
        self.index.nearest_neighbor(&index_key(point))
    }
}
