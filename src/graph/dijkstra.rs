use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use rustc_hash::FxHashMap;

use crate::graph::error::RouteError;
use crate::graph::item::{GraphStructure, NodeIx, Weight};

/// Heap entry, ordered so the cheapest candidate pops first. Equal costs
/// break on the node id, keeping extraction order deterministic.
struct Candidate {
    cost: Weight,
    node: NodeIx,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Single-source shortest path over the weighted directed graph.
///
/// Weights are non-negative by construction, so plain Dijkstra applies:
/// a binary heap of `(cost, node)` candidates, stale entries skipped on
/// extraction, predecessors recorded for path reconstruction. When a
/// `cancel` flag is supplied it is polled between relaxation rounds so a
/// caller can abandon a long-running query.
pub(crate) fn shortest_path(
    graph: &GraphStructure,
    start: NodeIx,
    finish: NodeIx,
    cancel: Option<&AtomicBool>,
) -> Result<(Weight, Vec<NodeIx>), RouteError> {
    if !graph.contains_node(start) {
        return Err(RouteError::UnknownNode(start));
    }
    if !graph.contains_node(finish) {
        return Err(RouteError::UnknownNode(finish));
    }

    let mut distances: FxHashMap<NodeIx, Weight> = FxHashMap::default();
    let mut parents: FxHashMap<NodeIx, NodeIx> = FxHashMap::default();
    let mut heap = BinaryHeap::new();

    distances.insert(start, 0.0);
    heap.push(Candidate {
        cost: 0.0,
        node: start,
    });

    while let Some(Candidate { cost, node }) = heap.pop() {
        if cancel.is_some_and(|flag| flag.load(AtomicOrdering::Relaxed)) {
            return Err(RouteError::Cancelled);
        }

        if node == finish {
            return Ok((cost, unwind(&parents, start, finish)));
        }

        // A cheaper entry for this node was already extracted.
        if distances.get(&node).is_some_and(|best| cost > *best) {
            continue;
        }

        for (_, next, weight) in graph.edges(node) {
            let next_cost = cost + *weight;

            match distances.entry(next) {
                Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    parents.insert(next, node);
                    heap.push(Candidate {
                        cost: next_cost,
                        node: next,
                    });
                }
                Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        parents.insert(next, node);
                        heap.push(Candidate {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    Err(RouteError::NoPath {
        from: start,
        to: finish,
    })
}

fn unwind(parents: &FxHashMap<NodeIx, NodeIx>, start: NodeIx, finish: NodeIx) -> Vec<NodeIx> {
    let mut path = vec![finish];

    let mut current = finish;
    while current != start {
        current = parents[&current];
        path.push(current);
    }

    path.reverse();
    path
}
