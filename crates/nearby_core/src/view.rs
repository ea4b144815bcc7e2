//! Pure derivation of what the finder shows: the ranked list and the map.
//!
//! Renderers (the CLI table, the HTTP JSON endpoint) only consume
//! [`FinderView`]. Nothing here is cached, every view is derived from the
//! current inputs.

use serde::Serialize;

use crate::{
    constants::{
        DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM, LIST_DIRECTIONS_LABEL, MAP_ATTRIBUTION,
        POPUP_DIRECTIONS_LABEL, USER_MARKER_POPUP,
    },
    deep_link::{NavigationLink, Platform, directions_link},
    distance_format::distance_label,
    geolocation::GeolocationStatus,
    geopoint::GeoPoint,
    location::{Location, LocationId},
    ranking::{RankedLocation, rank_locations},
    selection::Selection,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinderView {
    pub title: String,

    /// Advisory shown when the position could not be acquired.
    pub banner: Option<String>,
    pub rows: Vec<ListRow>,
    pub map: MapView,
    pub attribution: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListRow {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    pub distance_km: Option<f64>,
    pub distance_label: String,
    pub active: bool,

    /// Only present on the active row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<RowDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowDetails {
    pub notes: String,
    pub directions_label: &'static str,
    pub directions: NavigationLink,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Marker {
    User {
        position: GeoPoint,
        popup: &'static str,
    },
    /// Clicking a location marker selects `id`.
    Location {
        id: LocationId,
        position: GeoPoint,
        popup: MarkerPopup,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPopup {
    pub name: String,
    pub address: String,
    pub directions_label: &'static str,
    pub directions: NavigationLink,
}

pub struct ViewInput<'a> {
    pub title: &'a str,
    pub locations: &'a [Location],
    pub geolocation: &'a GeolocationStatus,
    pub selection: &'a Selection,
    pub platform: Platform,
}

/// Center of the map: the active location, else the visitor, else the
/// default center.
pub fn map_center(active: Option<&RankedLocation>, user: Option<GeoPoint>) -> GeoPoint {
    active
        .map(|entry| entry.location.point())
        .or(user)
        .unwrap_or(DEFAULT_MAP_CENTER)
}

pub fn build_view(input: ViewInput) -> FinderView {
    let user = input.geolocation.position();
    let ranked = rank_locations(input.locations, user);
    let active = input.selection.resolve(&ranked);
    let active_id = active.map(|entry| &entry.location.id);

    let rows = ranked
        .iter()
        .map(|entry| {
            let location = entry.location;
            let is_active = Some(&location.id) == active_id;

            ListRow {
                id: location.id.clone(),
                name: location.name.clone(),
                address: location.address.clone(),
                distance_km: entry.distance_km,
                distance_label: distance_label(entry.distance_km),
                active: is_active,
                details: is_active.then(|| RowDetails {
                    notes: location.notes.clone(),
                    directions_label: LIST_DIRECTIONS_LABEL,
                    directions: directions_link(input.platform, &location.address, location.point()),
                }),
            }
        })
        .collect();

    let markers = user
        .map(|position| Marker::User {
            position,
            popup: USER_MARKER_POPUP,
        })
        .into_iter()
        .chain(ranked.iter().map(|entry| location_marker(entry.location, input.platform)))
        .collect();

    FinderView {
        title: input.title.to_string(),
        banner: input.geolocation.error_message().map(str::to_string),
        rows,
        map: MapView {
            center: map_center(active, user),
            zoom: DEFAULT_MAP_ZOOM,
            markers,
        },
        attribution: MAP_ATTRIBUTION,
    }
}

fn location_marker(location: &Location, platform: Platform) -> Marker {
    Marker::Location {
        id: location.id.clone(),
        position: location.point(),
        popup: MarkerPopup {
            name: location.name.clone(),
            address: location.address.clone(),
            directions_label: POPUP_DIRECTIONS_LABEL,
            directions: directions_link(platform, &location.address, location.point()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::DEFAULT_TITLE, geolocation::GeolocationError, test_utils::location,
    };

    fn view(
        locations: &[Location],
        geolocation: &GeolocationStatus,
        selection: &Selection,
    ) -> FinderView {
        build_view(ViewInput {
            title: DEFAULT_TITLE,
            locations,
            geolocation,
            selection,
            platform: Platform::Other,
        })
    }

    #[test]
    fn end_to_end_with_position() {
        let locations = vec![location(1, 37.0, -122.0), location(2, 38.0, -122.0)];
        let mut geolocation = GeolocationStatus::default();
        geolocation.settle(Ok(GeoPoint::new(37.0, -122.0)));
        let selection = Selection::new(&locations);

        let view = view(&locations, &geolocation, &selection);

        assert_eq!(view.banner, None);
        assert_eq!(view.rows[0].id, LocationId::number(1));
        assert_eq!(view.rows[0].distance_label, "0 m away");
        assert!(view.rows[0].active);
        assert_eq!(view.rows[1].id, LocationId::number(2));
        assert_eq!(view.rows[1].distance_label, "111.2 km away");
        assert!(!view.rows[1].active);
        assert_eq!(view.map.center, GeoPoint::new(37.0, -122.0));
        assert_eq!(view.map.zoom, 13);
    }

    #[test]
    fn only_active_row_has_details() {
        let locations = vec![location(1, 37.0, -122.0), location(2, 38.0, -122.0)];
        let mut selection = Selection::new(&locations);
        selection.select(LocationId::number(2));

        let view = view(&locations, &GeolocationStatus::Pending, &selection);

        assert!(view.rows[0].details.is_none());
        let details = view.rows[1].details.as_ref().unwrap();
        assert_eq!(details.notes, "Notes for 2");
        assert_eq!(details.directions_label, "Open Directions in Maps");
        assert!(details.directions.url.contains("destination=38%2C-122"));
        assert_eq!(view.map.center, GeoPoint::new(38.0, -122.0));
    }

    #[test]
    fn failed_geolocation_shows_banner_and_unknown_distances() {
        let locations = vec![location(2, 38.0, -122.0), location(1, 37.0, -122.0)];
        let mut geolocation = GeolocationStatus::default();
        geolocation.settle(Err(GeolocationError::PermissionDenied(None)));

        let view = view(&locations, &geolocation, &Selection::new(&locations));

        assert_eq!(view.banner.as_deref(), Some("Location permission denied."));
        assert_eq!(view.rows[0].id, LocationId::number(2));
        assert!(view.rows.iter().all(|row| row.distance_label == "Distance unknown"));
        assert!(
            view.map
                .markers
                .iter()
                .all(|marker| matches!(marker, Marker::Location { .. }))
        );
    }

    #[test]
    fn unknown_selection_falls_back_to_first_row() {
        let locations = vec![location(1, 37.0, -122.0), location(2, 38.0, -122.0)];
        let mut geolocation = GeolocationStatus::default();
        geolocation.settle(Ok(GeoPoint::new(38.1, -122.0)));
        let mut selection = Selection::new(&locations);
        selection.select(LocationId::from("nope"));

        let view = view(&locations, &geolocation, &selection);

        assert_eq!(view.rows[0].id, LocationId::number(2));
        assert!(view.rows[0].active);
        assert_eq!(view.rows.iter().filter(|row| row.active).count(), 1);
        assert_eq!(view.map.center, GeoPoint::new(38.0, -122.0));
    }

    #[test]
    fn empty_list_centers_on_user_then_default() {
        let mut geolocation = GeolocationStatus::default();
        let selection = Selection::new(&[]);

        let pending = view(&[], &geolocation, &selection);
        assert!(pending.rows.is_empty());
        assert_eq!(pending.map.center, DEFAULT_MAP_CENTER);

        geolocation.settle(Ok(GeoPoint::new(1.0, 2.0)));
        let located = view(&[], &geolocation, &selection);
        assert_eq!(located.map.center, GeoPoint::new(1.0, 2.0));
        assert_eq!(
            located.map.markers,
            vec![Marker::User {
                position: GeoPoint::new(1.0, 2.0),
                popup: "Your location"
            }]
        );
    }

    #[test]
    fn markers_carry_platform_links() {
        let locations = vec![location(1, 37.0, -122.0)];

        let view = build_view(ViewInput {
            title: DEFAULT_TITLE,
            locations: &locations,
            geolocation: &GeolocationStatus::Pending,
            selection: &Selection::new(&locations),
            platform: Platform::Ios,
        });

        let Marker::Location { id, popup, .. } = &view.map.markers[0] else {
            panic!("expected a location marker");
        };
        assert_eq!(id, &LocationId::number(1));
        assert_eq!(popup.directions_label, "Open in Maps");
        assert!(popup.directions.url.starts_with("https://maps.apple.com/"));
        assert!(popup.directions.url.contains("q=1%20Main%20St"));
    }

    #[test]
    fn serializes_rows_for_the_browser() {
        let locations = vec![location(1, 37.0, -122.0)];

        let view = view(&locations, &GeolocationStatus::Pending, &Selection::new(&locations));
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["rows"][0]["id"], 1);
        assert_eq!(json["rows"][0]["distance_km"], serde_json::Value::Null);
        assert_eq!(json["rows"][0]["details"]["directions"]["target"], "_blank");
        assert_eq!(json["map"]["markers"][0]["kind"], "location");
        assert_eq!(json["banner"], serde_json::Value::Null);
    }
}
