//! Map-matching over an OpenStreetMap road network.
//!
//! At startup an `.osm.pbf` extract is decoded and reduced into a single
//! immutable [`Graph`]: the drivable ways of the extract, a spatial index
//! over their nodes, and a travel-time weighted directed graph between
//! them. Matching a GPS trace is then snap-then-route: every fix is
//! snapped to its nearest indexed node, and consecutive snaps are joined
//! by the shortest travel-time path.

pub mod codec;
pub mod geo;
pub mod graph;
pub mod server;

pub use graph::{Graph, Match, Route, Scan};

use crate::codec::CodecError;
use crate::graph::{GraphError, MatchError, RouteError};

/// Crate-wide error, aggregating the per-module error kinds.
#[derive(Debug)]
pub enum Error {
    Codec(CodecError),
    Graph(GraphError),
    Route(RouteError),
    Match(MatchError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Converts errors from their submodule error type into the
/// corresponding [`Error`] variant.
#[macro_export]
macro_rules! impl_err {
    ($from:ty, $variant:ident) => {
        impl From<$from> for $crate::Error {
            fn from(value: $from) -> Self {
                $crate::Error::$variant(value)
            }
        }
    };
}

impl_err!(CodecError, Codec);
impl_err!(GraphError, Graph);
impl_err!(RouteError, Route);
impl_err!(MatchError, Match);
