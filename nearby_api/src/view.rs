use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header::USER_AGENT};
use axum::response::{IntoResponse, Response};
use nearby_core::{
    deep_link::Platform,
    finder::Finder,
    geolocation::GeolocationError,
    geopoint::GeoPoint,
    location::LocationId,
    view::FinderView,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// What the browser knows after its own geolocation attempt.
///
/// `lat`/`lng` are sent once a position was acquired. `geo_error` carries the
/// provider's message when it failed, and is empty when no message was given.
/// Neither means the request is still pending.
#[derive(Deserialize)]
pub struct ViewQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub geo_error: Option<String>,
    pub geo_unsupported: Option<bool>,
    pub selected: Option<String>,
}

impl ViewQuery {
    fn geolocation(&self) -> Result<Option<Result<GeoPoint, GeolocationError>>, ApiError> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => return Ok(Some(Ok(GeoPoint::new(lat, lng)))),
            (None, None) => {}
            _ => {
                return Err(ApiError::BadRequest(
                    "lat and lng must be given together".to_string(),
                ));
            }
        }

        if self.geo_unsupported.unwrap_or(false) {
            return Ok(Some(Err(GeolocationError::Unsupported)));
        }

        Ok(self.geo_error.as_ref().map(|message| {
            Err(GeolocationError::Unavailable(
                Some(message.trim().to_string()).filter(|message| !message.is_empty()),
            ))
        }))
    }
}

pub struct ViewResponse(FinderView);

impl IntoResponse for ViewResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

pub fn platform(headers: &HeaderMap) -> Platform {
    headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(Platform::from_user_agent)
        .unwrap_or_default()
}

pub async fn view_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ViewQuery>,
) -> Result<ViewResponse, ApiError> {
    let mut finder = Finder::new(&state.dataset);
    if let Some(title) = &state.title {
        finder = finder.with_title(title.as_str());
    }

    if let Some(result) = query.geolocation()? {
        finder.apply_geolocation(result);
    }

    if let Some(selected) = &query.selected {
        finder.select(LocationId::parse_lenient(selected));
    }

    Ok(ViewResponse(finder.view(platform(&headers))))
}
