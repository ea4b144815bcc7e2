pub mod constants;
pub mod dataset;
pub mod deep_link;
pub mod distance_format;
pub mod finder;
pub mod geolocation;
pub mod geopoint;
pub mod location;
pub mod map_camera;
pub mod ranking;
pub mod schema;
pub mod selection;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;
