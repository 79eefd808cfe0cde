use std::path::Path;
use std::time::Instant;

use log::{debug, error, info, warn};
use rstar::RTree;
use rustc_hash::FxHashMap;

use crate::codec::{self, Primitives};
use crate::geo::haversine_distance;
use crate::graph::error::GraphError;
use crate::graph::item::{Graph, GraphStructure};
use crate::graph::primitives::{IndexedNode, Node, Way};
use crate::graph::speed;

impl Graph {
    /// Builds the road network from an `.osm.pbf` extract.
    ///
    /// This is the whole startup batch: decode, filter, topology,
    /// contraction, index. Any failure is fatal. The caller should
    /// abort rather than retry, since the extract will not have changed.
    pub fn from_pbf(path: &Path) -> crate::Result<Graph> {
        let start_time = Instant::now();

        info!("Ingesting {}", path.display());
        let primitives = codec::read_primitives(path)?;

        info!(
            "Nodes: {}, Ways: {}, Relations: {}",
            primitives.nodes.len(),
            primitives.ways.len(),
            primitives.relations
        );
        debug!("Decode took: {:?}", start_time.elapsed());

        Ok(Graph::from_elements(primitives)?)
    }

    /// Builds the road network from already-decoded primitives. This is
    /// the path [`from_pbf`](Graph::from_pbf) takes after decoding.
    pub fn from_elements(primitives: Primitives) -> Result<Graph, GraphError> {
        let mut start_time = Instant::now();

        // Every decoded node is retained: a drivable way may reference a
        // node that carries no road tags of its own.
        let mut nodes: FxHashMap<i64, Node> = primitives
            .nodes
            .into_iter()
            .map(|node| {
                (
                    node.id,
                    Node {
                        id: node.id,
                        lat: node.lat,
                        lon: node.lon,
                        tags: node.tags,
                        ways: Vec::new(),
                    },
                )
            })
            .collect();

        let mut ways: Vec<Way> = primitives
            .ways
            .into_iter()
            .filter(|way| speed::is_drivable(way.highway()) && way.node_ids.len() >= 2)
            .map(|way| {
                let max_speed = speed::way_speed(way.highway().unwrap_or_default(), way.maxspeed());
                Way {
                    id: way.id,
                    node_ids: way.node_ids,
                    tags: way.tags,
                    dist: 0.0,
                    max_speed,
                }
            })
            .collect();

        if ways.is_empty() {
            return Err(GraphError::NoRetainedWays);
        }

        debug!("Filter took: {:?}", start_time.elapsed());
        start_time = Instant::now();

        // Topology: resolve every node reference, record the way
        // back-references, stage the spatial entries, and accumulate each
        // way's great-circle length.
        let mut entries = Vec::new();
        for (way_ix, way) in ways.iter_mut().enumerate() {
            let mut dist = 0.0;
            let mut prior = None;

            for &node_id in &way.node_ids {
                let node = nodes
                    .get_mut(&node_id)
                    .ok_or(GraphError::MissingNode(node_id))?;
                node.ways.push(way_ix);

                entries.push(IndexedNode {
                    id: node.id,
                    lat: node.lat,
                    lon: node.lon,
                });

                let point = node.point();
                if let Some(prior) = prior {
                    dist += haversine_distance(prior, point);
                }
                prior = Some(point);
            }

            way.dist = dist;
            if way.dist == 0.0 {
                warn!("Way {} has zero length", way.id);
            }
        }

        debug!("Topology took: {:?}", start_time.elapsed());
        start_time = Instant::now();

        let mut graph = GraphStructure::default();
        for way in &ways {
            contract_way(&mut graph, way, &nodes);
        }

        debug!("Contraction took: {:?}", start_time.elapsed());
        start_time = Instant::now();

        let index = RTree::bulk_load(entries);
        debug!("RTree bulk load took: {:?}", start_time.elapsed());

        info!(
            "Finished. Indexed {} node entries; graph has {} vertices and {} edges",
            index.size(),
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Graph {
            graph,
            nodes,
            ways,
            index,
        })
    }
}

/// Walks one way, emitting a travel-time edge between each consecutive
/// pair of intersection nodes and accumulating distance across any
/// interior node that is not one.
///
/// A node counts as an intersection when at least one retained way
/// back-references it, which holds for every node of this way after the
/// topology pass. Re-adding a vertex is a no-op; re-adding an edge
/// replaces its weight, acceptable because parallel segments between the
/// same pair differ by less than the model's accuracy.
fn contract_way(graph: &mut GraphStructure, way: &Way, nodes: &FxHashMap<i64, Node>) {
    let first = way.node_ids[0];
    let mut current = first;
    let mut segment_dist = 0.0;

    for pair in way.node_ids.windows(2) {
        let (prior, next) = (pair[0], pair[1]);
        segment_dist += haversine_distance(nodes[&prior].point(), nodes[&next].point());

        if nodes[&next].ways.is_empty() {
            continue;
        }

        let travel_time = segment_dist / way.max_speed as f64;
        if travel_time == 0.0 {
            // Coincident nodes; a zero-weight edge would break the
            // strictly-positive invariant, so keep accumulating instead.
            error!(
                "Zero travel time on way {}: {} km at {} mph",
                way.id, segment_dist, way.max_speed
            );
            continue;
        }

        graph.add_node(current);
        graph.add_node(next);

        graph.add_edge(current, next, travel_time);
        if !way.oneway() {
            graph.add_edge(next, current, travel_time);
        }

        segment_dist = 0.0;
        current = next;
    }

    if current == first {
        debug!("Way {} contributed no edges", way.id);
    }
}
