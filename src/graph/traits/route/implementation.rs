use std::sync::atomic::AtomicBool;

use geo::Point;
use log::debug;

use crate::graph::dijkstra::shortest_path;
use crate::graph::error::RouteError;
use crate::graph::item::{NodeIx, Weight};
use crate::graph::traits::route::definition::Route;
use crate::graph::{Graph, Scan};

impl Route for Graph {
    fn route_nodes(
        &self,
        start: NodeIx,
        finish: NodeIx,
    ) -> Result<(Weight, Vec<NodeIx>), RouteError> {
        debug!("Routing {start} -> {finish}");
        shortest_path(&self.graph, start, finish, None)
    }

    fn route_nodes_interruptible(
        &self,
        start: NodeIx,
        finish: NodeIx,
        cancel: &AtomicBool,
    ) -> Result<(Weight, Vec<NodeIx>), RouteError> {
        shortest_path(&self.graph, start, finish, Some(cancel))
    }

    fn route_points(
        &self,
        start: Point<f64>,
        finish: Point<f64>,
    ) -> Result<(Weight, Vec<Point<f64>>), RouteError> {
        let start_node = self.nearest_node(start).ok_or(RouteError::EmptyIndex)?;
        let finish_node = self.nearest_node(finish).ok_or(RouteError::EmptyIndex)?;

        let (weight, path) = self.route_nodes(start_node.id, finish_node.id)?;
        Ok((weight, self.get_line(&path)))
    }
}
