use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use nearby_core::{deep_link::NavigationLink, finder::Finder, location::LocationId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;
use crate::view::platform;

pub struct DirectionsResponse(NavigationLink);

impl IntoResponse for DirectionsResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

pub async fn directions_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<DirectionsResponse, ApiError> {
    let id = LocationId::parse_lenient(&id);
    let platform = platform(&headers);
    debug!("Directions to {} for {:?}", id, platform);

    Finder::new(&state.dataset)
        .directions(&id, platform)
        .map(DirectionsResponse)
        .ok_or_else(|| ApiError::NotFound(format!("No location with id {id}")))
}
