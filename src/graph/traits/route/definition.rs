use std::sync::atomic::AtomicBool;

use geo::Point;

use crate::graph::error::RouteError;
use crate::graph::item::{NodeIx, Weight};

/// Shortest-travel-time routing over the network graph.
pub trait Route {
    /// The minimum-weight path between two vertices, as the total cost
    /// and the ordered vertex ids from `start` to `finish` inclusive.
    fn route_nodes(&self, start: NodeIx, finish: NodeIx)
        -> Result<(Weight, Vec<NodeIx>), RouteError>;

    /// As [`route_nodes`](Route::route_nodes), polling `cancel` between
    /// relaxation rounds so the caller can abandon a long query.
    fn route_nodes_interruptible(
        &self,
        start: NodeIx,
        finish: NodeIx,
        cancel: &AtomicBool,
    ) -> Result<(Weight, Vec<NodeIx>), RouteError>;

    /// Snaps both points to their nearest indexed nodes and routes
    /// between them, returning the path as coordinates.
    fn route_points(
        &self,
        start: Point<f64>,
        finish: Point<f64>,
    ) -> Result<(Weight, Vec<Point<f64>>), RouteError>;
}
