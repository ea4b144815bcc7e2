use std::cmp::Ordering;

use serde::Serialize;

use crate::{geopoint::GeoPoint, location::Location};

/// A location annotated with its distance from the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedLocation<'a> {
    #[serde(flatten)]
    pub location: &'a Location,

    /// `None` until the visitor's position is known.
    pub distance_km: Option<f64>,
}

/// Derives the ranked list from the static locations.
///
/// Without a user position every distance is unknown and the input order is
/// kept. With one, locations are sorted by ascending distance. The sort is
/// stable so equally distant locations keep their dataset order.
pub fn rank_locations(locations: &[Location], user: Option<GeoPoint>) -> Vec<RankedLocation<'_>> {
    let Some(user) = user else {
        return locations
            .iter()
            .map(|location| RankedLocation {
                location,
                distance_km: None,
            })
            .collect();
    };

    let mut ranked: Vec<RankedLocation> = locations
        .iter()
        .map(|location| RankedLocation {
            location,
            distance_km: Some(user.haversine_distance_km(&location.point())),
        })
        .collect();

    ranked.sort_by(|a, b| compare_distances(a.distance_km, b.distance_km));

    ranked
}

/// Unknown distances sort after every known distance.
fn compare_distances(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
