use serde::Serialize;

use crate::{constants::RECENTER_ZOOM, geopoint::GeoPoint};

/// Command for the map surface to move to `center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recenter {
    pub center: GeoPoint,
    pub zoom: u8,
    pub animate: bool,
}

/// Remembers the last center pushed to the map so the map is only moved when
/// the computed center actually changes.
#[derive(Debug, Clone, Default)]
pub struct MapCamera {
    center: Option<GeoPoint>,
}

impl MapCamera {
    pub fn follow(&mut self, center: GeoPoint) -> Option<Recenter> {
        if self.center == Some(center) {
            return None;
        }

        self.center = Some(center);

        Some(Recenter {
            center,
            zoom: RECENTER_ZOOM,
            animate: true,
        })
    }
}
