use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::EARTH_RADIUS_KM;

/// A latitude/longitude pair in degrees.
///
/// Used both for the visitor's position and for the coordinates of a
/// [`Location`](crate::location::Location). Values are not range checked.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn haversine_distance_km(&self, other: &GeoPoint) -> f64 {
        haversine_distance_km(self.lat, self.lng, other.lat, other.lng)
    }
}

/// Haversine distance in kilometers on a sphere of mean Earth radius.
pub fn haversine_distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);

    // Rounding can push `a` a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding positive zero turns -0.0 into 0.0 and leaves everything else unchanged.
        write!(f, "{},{}", self.lat + 0.0, self.lng + 0.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParsePositionError {
    #[error("Expected a position formatted as \"lat,lng\", got \"{0}\"")]
    Format(String),
    #[error("Invalid coordinate \"{0}\"")]
    Coordinate(String),
}

impl FromStr for GeoPoint {
    type Err = ParsePositionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = input
            .split_once(',')
            .ok_or_else(|| ParsePositionError::Format(input.to_string()))?;

        let parse = |value: &str| {
            value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ParsePositionError::Coordinate(value.trim().to_string()))
        };

        Ok(GeoPoint::new(parse(lat)?, parse(lng)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero_km_apart() {
        let points = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(37.7749, -122.4194),
            GeoPoint::new(-33.8688, 151.2093),
            GeoPoint::new(89.9, 179.9),
        ];

        for point in points {
            assert!(point.haversine_distance_km(&point).abs() < 1e-9);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (GeoPoint::new(37.0, -122.0), GeoPoint::new(38.0, -122.0)),
            (GeoPoint::new(51.5074, -0.1278), GeoPoint::new(48.8566, 2.3522)),
            (GeoPoint::new(-33.8688, 151.2093), GeoPoint::new(40.7128, -74.006)),
        ];

        for (a, b) in pairs {
            let forward = a.haversine_distance_km(&b);
            let backward = b.haversine_distance_km(&a);
            assert!((forward - backward).abs() < 1e-9, "{forward} != {backward}");
        }
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = GeoPoint::new(37.0, -122.0);
        let b = GeoPoint::new(38.0, -122.0);

        let distance = a.haversine_distance_km(&b);
        assert!((distance - 111.19).abs() < 0.01, "got {distance}");
    }

    #[test]
    fn london_to_paris() {
        let london = GeoPoint::new(51.5074, -0.1278);
        let paris = GeoPoint::new(48.8566, 2.3522);

        let distance = london.haversine_distance_km(&paris);
        assert!((distance - 343.5).abs() < 1.0, "got {distance}");
    }

    #[test]
    fn antipodal_points_are_half_the_circumference_apart() {
        let distance = haversine_distance_km(0.0, 0.0, 0.0, 180.0);
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn should_parse_position() {
        assert_eq!(
            "37.7749, -122.4194".parse::<GeoPoint>(),
            Ok(GeoPoint::new(37.7749, -122.4194))
        );
        assert_eq!(
            "37.7749".parse::<GeoPoint>(),
            Err(ParsePositionError::Format("37.7749".to_string()))
        );
        assert_eq!(
            "abc,1".parse::<GeoPoint>(),
            Err(ParsePositionError::Coordinate("abc".to_string()))
        );
        assert_eq!(
            "NaN,1".parse::<GeoPoint>(),
            Err(ParsePositionError::Coordinate("NaN".to_string()))
        );
    }

    #[test]
    fn display_uses_shortest_number_form() {
        assert_eq!(GeoPoint::new(37.0, -122.0).to_string(), "37,-122");
        assert_eq!(
            GeoPoint::new(37.7749, -122.4194).to_string(),
            "37.7749,-122.4194"
        );
    }

    #[test]
    fn display_drops_the_sign_of_zero() {
        assert_eq!(GeoPoint::new(-0.0, -0.0).to_string(), "0,0");
        assert_eq!(GeoPoint::new(-0.0, -122.5).to_string(), "0,-122.5");
    }
}
