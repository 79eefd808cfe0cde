use geo::Point;

use crate::graph::error::MatchError;

/// Map matching: projecting an ordered trace of raw fixes onto the road
/// network.
pub trait Match {
    /// Snaps every fix to its nearest indexed node and joins consecutive
    /// snaps by their shortest travel-time path, returning the
    /// concatenated polyline.
    ///
    /// Consecutive hops share their join node, which therefore appears
    /// twice in the output: once ending a hop and once starting the
    /// next.
    fn map_match(&self, points: &[Point<f64>]) -> Result<Vec<Point<f64>>, MatchError>;
}
