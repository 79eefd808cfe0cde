use geo::Point;
use log::{debug, error};

use crate::graph::error::{MatchError, RouteError};
use crate::graph::primitives::IndexedNode;
use crate::graph::traits::r#match::definition::Match;
use crate::graph::{Graph, Route, Scan};

impl Graph {
    /// Snaps a fix and verifies the snap is routable. An indexed node
    /// missing from the graph breaks the build invariants, so it is
    /// reported as an internal inconsistency rather than repaired.
    fn snap(&self, point: Point<f64>) -> Result<&IndexedNode, MatchError> {
        let node = self
            .nearest_node(point)
            .ok_or(MatchError::Route(RouteError::EmptyIndex))?;

        if !self.contains_vertex(node.id) {
            error!("Snapped node {} is absent from the graph", node.id);
            return Err(MatchError::Detached(node.id));
        }

        Ok(node)
    }
}

impl Match for Graph {
    fn map_match(&self, points: &[Point<f64>]) -> Result<Vec<Point<f64>>, MatchError> {
        if points.len() < 2 {
            return Err(MatchError::InsufficientPoints(points.len()));
        }

        let mut origin = self.snap(points[0])?;
        debug!("Matching {} fixes from node {}", points.len(), origin.id);

        let mut matched = Vec::new();
        for point in &points[1..] {
            let destination = self.snap(*point)?;

            let (_, path) = self.route_nodes(origin.id, destination.id)?;
            matched.extend(self.get_line(&path));

            origin = destination;
        }

        Ok(matched)
    }
}
