use crate::geopoint::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Map center used when neither a selection nor a user position is known.
pub const DEFAULT_MAP_CENTER: GeoPoint = GeoPoint {
    lat: 37.7749,
    lng: -122.4194,
};

pub const DEFAULT_MAP_ZOOM: u8 = 13;
pub const RECENTER_ZOOM: u8 = 14;

pub const DEFAULT_TITLE: &str = "🌸 Free Period Products Near Me";
pub const MAP_ATTRIBUTION: &str = "Map data © OpenStreetMap contributors.";

pub const GEOLOCATION_UNSUPPORTED_MESSAGE: &str = "Geolocation not supported by your browser.";
pub const GEOLOCATION_DENIED_MESSAGE: &str = "Location permission denied.";
pub const GEOLOCATION_TIMEOUT_MESSAGE: &str = "Timeout expired";

pub const DISTANCE_UNKNOWN_LABEL: &str = "Distance unknown";
pub const USER_MARKER_POPUP: &str = "Your location";
pub const LIST_DIRECTIONS_LABEL: &str = "Open Directions in Maps";
pub const POPUP_DIRECTIONS_LABEL: &str = "Open in Maps";
