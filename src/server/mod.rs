//! Thin HTTP surface over the matcher.
//!
//! One operation: `GET /match/:points`, where `:points` is
//! `lat1,lon1;lat2,lon2;...`. Success returns a JSON array of
//! `[lon, lat]` pairs, longitude first per the usual line-string
//! convention. Failures return an empty body with a 4xx or
//! 5xx status; see [`ServerError`].

mod error;
mod r#match;

#[cfg(test)]
mod test;

pub use error::ServerError;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::graph::Graph;

async fn health_check() -> &'static str {
    "ok"
}

/// Builds the service router over a frozen graph.
pub fn router(graph: Arc<Graph>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/match/:points", get(r#match::get_match))
        .with_state(graph)
}
