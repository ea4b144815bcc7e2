use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::directions::directions_handler;
use crate::state::AppState;
use crate::view::view_handler;

pub fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/view", get(view_handler))
        .route("/locations/{id}/directions", get(directions_handler))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}
