use crate::codec::CodecError;
use crate::graph::item::NodeIx;

/// Fatal problems while building the network. The data is static, so
/// none of these are retryable; startup should abort.
#[derive(Debug)]
pub enum GraphError {
    /// The extract could not be opened or decoded.
    Codec(CodecError),
    /// A retained way references a node the extract never declared.
    MissingNode(NodeIx),
    /// The extract contained no drivable ways at all.
    NoRetainedWays,
}

impl From<CodecError> for GraphError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}

/// Routing failures between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    /// The spatial index is empty, so there is nothing to snap to.
    EmptyIndex,
    /// An endpoint is not a vertex of the routing graph.
    UnknownNode(NodeIx),
    /// The destination is unreachable from the source.
    NoPath { from: NodeIx, to: NodeIx },
    /// The caller abandoned the query.
    Cancelled,
}

/// Failures matching a trace onto the network.
#[derive(Debug, PartialEq, Eq)]
pub enum MatchError {
    /// Matching needs at least two fix points.
    InsufficientPoints(usize),
    /// A snapped node is missing from the routing graph. An internal
    /// inconsistency, since every indexed node lies on a retained way.
    Detached(NodeIx),
    Route(RouteError),
}

impl From<RouteError> for MatchError {
    fn from(value: RouteError) -> Self {
        Self::Route(value)
    }
}
