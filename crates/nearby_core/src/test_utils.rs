use crate::{
    dataset::Dataset,
    location::{Location, LocationId},
};

pub fn location(id: u64, lat: f64, lng: f64) -> Location {
    Location {
        id: LocationId::number(id),
        name: format!("Location {id}"),
        address: format!("{id} Main St"),
        notes: format!("Notes for {id}"),
        lat,
        lng,
    }
}

/// The two-location dataset used by the end-to-end scenarios.
pub fn two_location_dataset() -> Dataset {
    Dataset::new(vec![location(1, 37.0, -122.0), location(2, 38.0, -122.0)]).unwrap()
}
