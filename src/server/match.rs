use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use geo::Point;
use log::debug;

use crate::graph::{Graph, Match};
use crate::server::error::ServerError;

/// Parses a `lat1,lon1;lat2,lon2;...` path segment.
pub(crate) fn parse_points(raw: &str) -> Result<Vec<Point<f64>>, ServerError> {
    raw.split(';')
        .map(|pair| {
            let (lat, lon) = pair
                .split_once(',')
                .ok_or_else(|| ServerError::InvalidPoint(pair.to_string()))?;

            let lat: f64 = lat
                .trim()
                .parse()
                .map_err(|_| ServerError::InvalidPoint(pair.to_string()))?;
            let lon: f64 = lon
                .trim()
                .parse()
                .map_err(|_| ServerError::InvalidPoint(pair.to_string()))?;

            Ok(Point::new(lon, lat))
        })
        .collect()
}

/// `GET /match/:points`: match a trace and return the road polyline as
/// `[lon, lat]` pairs.
pub(crate) async fn get_match(
    State(graph): State<Arc<Graph>>,
    Path(points): Path<String>,
) -> Result<Json<Vec<[f64; 2]>>, ServerError> {
    let fixes = parse_points(&points)?;
    debug!("Match input: {fixes:?}");

    let matched = graph.map_match(&fixes)?;

    Ok(Json(matched.iter().map(|point| [point.x(), point.y()]).collect()))
}
