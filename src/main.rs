use std::env;
use std::path::Path;
use std::sync::Arc;

use dotenv::dotenv;
use log::info;

use roadsnap::{server, Graph};

/// Fallback extract, a small state-sized download kept next to the
/// binary during development.
const DEFAULT_PBF: &str = "delaware-latest.osm.pbf";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let pbf = env::var("OSM_PBF").unwrap_or_else(|_| DEFAULT_PBF.to_string());
    let port: u16 = env::var("APP_PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(8080);

    // The whole build runs before the listener opens: the service only
    // ever answers queries against a complete, frozen graph.
    let graph = Graph::from_pbf(Path::new(&pbf)).map_err(|err| format!("{err:?}"))?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on port {port}");

    axum::serve(listener, server::router(Arc::new(graph))).await?;

    Ok(())
}
