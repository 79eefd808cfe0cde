//! The routable road network: arena records, spatial index, weighted
//! graph, and the query traits served over it.

mod builder;
mod dijkstra;
pub mod error;
mod item;
mod primitives;
mod speed;
#[cfg(test)]
mod test;
mod traits;

#[doc(inline)]
pub use error::{GraphError, MatchError, RouteError};
#[doc(inline)]
pub use item::{Graph, NodeIx, Weight};
#[doc(inline)]
pub use primitives::{IndexedNode, Node, Way};
#[doc(inline)]
pub use traits::{Match, Route, Scan};
