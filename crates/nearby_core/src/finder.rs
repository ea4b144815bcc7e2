use tracing::debug;

use crate::{
    constants::DEFAULT_TITLE,
    dataset::Dataset,
    deep_link::{NavigationLink, Platform, directions_link},
    geolocation::{GeolocationError, GeolocationStatus},
    geopoint::GeoPoint,
    location::LocationId,
    map_camera::{MapCamera, Recenter},
    ranking::{RankedLocation, rank_locations},
    selection::Selection,
    view::{FinderView, ViewInput, build_view, map_center},
};

/// State of one finder session.
///
/// Holds the only mutable values of the finder: the geolocation outcome, the
/// selection and the map camera. Everything shown is derived from them on
/// demand.
#[derive(Debug, Clone)]
pub struct Finder {
    title: String,
    dataset: Dataset,
    geolocation: GeolocationStatus,
    selection: Selection,
    camera: MapCamera,
}

impl Finder {
    pub fn new(dataset: &Dataset) -> Self {
        Finder {
            title: DEFAULT_TITLE.to_string(),
            selection: Selection::new(dataset.locations()),
            dataset: dataset.clone(),
            geolocation: GeolocationStatus::default(),
            camera: MapCamera::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Records the outcome of the position request. Returns `false` if an
    /// outcome was already recorded.
    pub fn apply_geolocation(&mut self, result: Result<GeoPoint, GeolocationError>) -> bool {
        self.geolocation.settle(result)
    }

    pub fn geolocation(&self) -> &GeolocationStatus {
        &self.geolocation
    }

    pub fn user_position(&self) -> Option<GeoPoint> {
        self.geolocation.position()
    }

    pub fn ranked(&self) -> Vec<RankedLocation<'_>> {
        rank_locations(self.dataset.locations(), self.user_position())
    }

    pub fn select(&mut self, id: LocationId) {
        debug!("Selecting location {}", id);
        self.selection.select(id);
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The active location after fallback to the first ranked entry.
    pub fn selected(&self) -> Option<RankedLocation<'_>> {
        self.selection.resolve(&self.ranked()).copied()
    }

    pub fn map_center(&self) -> GeoPoint {
        map_center(self.selected().as_ref(), self.user_position())
    }

    pub fn view(&self, platform: Platform) -> FinderView {
        build_view(ViewInput {
            title: &self.title,
            locations: self.dataset.locations(),
            geolocation: &self.geolocation,
            selection: &self.selection,
            platform,
        })
    }

    /// Directions link for the location `id`, if it exists.
    pub fn directions(&self, id: &LocationId, platform: Platform) -> Option<NavigationLink> {
        self.dataset
            .get(id)
            .map(|location| directions_link(platform, &location.address, location.point()))
    }

    /// Moves the map camera to the current center, if it changed.
    pub fn recenter(&mut self) -> Option<Recenter> {
        let center = self.map_center();
        self.camera.follow(center)
    }
}
