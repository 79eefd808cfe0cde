use std::path::Path;

use osmpbf::{Element, ElementReader};

use crate::codec::error::CodecError;
use crate::codec::primitive::{Node, Way};

/// Everything a single decode pass produces: the full node and way
/// streams, plus a tally of relations (which carry no routing
/// information and are only counted).
#[derive(Debug, Default)]
pub struct Primitives {
    pub nodes: Vec<Node>,
    pub ways: Vec<Way>,
    pub relations: u64,
}

impl Primitives {
    /// Folds one decoded element into the accumulator.
    fn fold(mut self, element: Element) -> Self {
        match element {
            Element::Node(node) => self.nodes.push(Node {
                id: node.id(),
                lat: node.lat(),
                lon: node.lon(),
                tags: node
                    .tags()
                    .map(|(k, v)| (k.to_owned(), v.to_owned()))
                    .collect(),
            }),
            Element::DenseNode(node) => self.nodes.push(Node {
                id: node.id(),
                lat: node.lat(),
                lon: node.lon(),
                tags: node
                    .tags()
                    .map(|(k, v)| (k.to_owned(), v.to_owned()))
                    .collect(),
            }),
            Element::Way(way) => self.ways.push(Way {
                id: way.id(),
                node_ids: way.refs().collect(),
                tags: way
                    .tags()
                    .map(|(k, v)| (k.to_owned(), v.to_owned()))
                    .collect(),
            }),
            Element::Relation(_) => self.relations += 1,
        }

        self
    }

    /// Combines two accumulators, preserving per-blob order.
    pub(crate) fn merge(mut self, other: Self) -> Self {
        self.nodes.extend(other.nodes);
        self.ways.extend(other.ways);
        self.relations += other.relations;
        self
    }
}

/// Decodes every primitive of the extract at `path` in one forward pass.
///
/// Blob decompression and decoding run on parallel workers inside the
/// `osmpbf` reader; the per-worker accumulators are merged into a single
/// [`Primitives`] before returning. Ingestion is a single-shot batch:
/// any decode failure other than a clean end-of-stream surfaces as a
/// [`CodecError`] and the caller is expected to abort.
pub fn read_primitives(path: &Path) -> Result<Primitives, CodecError> {
    let reader = ElementReader::from_path(path)?;

    reader
        .par_map_reduce(
            |element| Primitives::default().fold(element),
            Primitives::default,
            Primitives::merge,
        )
        .map_err(CodecError::from)
}
