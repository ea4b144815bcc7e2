mod directions;
mod error;
mod routes;
mod state;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use axum::serve;
use nearby_core::dataset::Dataset;
use tracing::{Level, info};

use crate::routes::app;
use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_DATASET: &str = "data/locations.json";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let dataset_path = std::env::var("NEARBY_DATASET")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET));
    let bind_address =
        std::env::var("NEARBY_BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

    let state = Arc::new(AppState {
        dataset: Dataset::from_path(&dataset_path)?,
        title: std::env::var("NEARBY_TITLE").ok(),
    });

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on {}", bind_address);

    serve(listener, app(state)).await?;

    Ok(())
}
