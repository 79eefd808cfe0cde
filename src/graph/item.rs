use geo::Point;
use petgraph::graphmap::GraphMap;
use petgraph::Directed;
use rstar::RTree;
use rustc_hash::{FxHashMap, FxHasher};

use std::fmt::{Debug, Formatter};
use std::hash::BuildHasherDefault;

use crate::graph::primitives::{IndexedNode, Node, Way};

/// Vertex key shared between the node arena, the spatial index, and the
/// routing graph: the OSM node id.
pub type NodeIx = i64;

/// Edge weight: segment kilometers divided by way miles-per-hour. An
/// opaque positive scalar; only the relative ordering of path costs is
/// meaningful.
pub type Weight = f64;

pub(crate) type GraphStructure = GraphMap<NodeIx, Weight, Directed, BuildHasherDefault<FxHasher>>;

/// The frozen road network: every structure a query needs, built once
/// from an extract and immutable thereafter. Concurrent readers need no
/// synchronisation.
pub struct Graph {
    pub(crate) graph: GraphStructure,
    pub(crate) nodes: FxHashMap<NodeIx, Node>,
    pub(crate) ways: Vec<Way>,
    pub(crate) index: RTree<IndexedNode>,
}

impl Debug for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph with {} vertices and {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        )
    }
}

impl Graph {
    /// The spatial index over retained way-nodes.
    pub fn index(&self) -> &RTree<IndexedNode> {
        &self.index
    }

    /// Number of vertices in the routing graph.
    pub fn size(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of directed edges in the routing graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Looks a node up in the arena by its OSM id.
    pub fn node(&self, id: NodeIx) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Number of nodes in the arena (every node of the extract).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The retained drivable ways, in decode order.
    pub fn ways(&self) -> &[Way] {
        &self.ways
    }

    /// Whether `id` is a vertex of the routing graph.
    #[inline]
    pub fn contains_vertex(&self, id: NodeIx) -> bool {
        self.graph.contains_node(id)
    }

    /// The weight of the directed edge `a -> b`, if present.
    pub fn edge_weight(&self, a: NodeIx, b: NodeIx) -> Option<Weight> {
        self.graph.edge_weight(a, b).copied()
    }

    /// Every directed edge of the routing graph.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIx, NodeIx, Weight)> + '_ {
        self.graph.all_edges().map(|(a, b, weight)| (a, b, *weight))
    }

    #[inline]
    pub fn get_position(&self, node_index: NodeIx) -> Option<Point<f64>> {
        self.nodes.get(&node_index).map(Node::point)
    }

    /// Resolves a vertex path to its coordinates, in order.
    #[inline]
    pub fn get_line(&self, nodes: &[NodeIx]) -> Vec<Point<f64>> {
        nodes
            .iter()
            .filter_map(|node| self.get_position(*node))
            .collect::<Vec<_>>()
    }
}
