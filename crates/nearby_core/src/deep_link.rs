//! Hand-off of turn-by-turn navigation to an external maps application.
//!
//! The platform is always an explicit input so that link construction stays a
//! pure function. Classifying a user agent is a separate step done by the
//! caller, usually at the edge (HTTP header, CLI flag).

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::geopoint::GeoPoint;

/// Characters escaped by `encodeURIComponent`: everything but ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const IOS_MARKERS: [&str; 3] = ["iPad", "iPhone", "iPod"];

pub const APPLE_MAPS_URL: &str = "https://maps.apple.com/";
pub const GOOGLE_MAPS_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Ios,
    #[default]
    Other,
}

impl Platform {
    pub fn from_user_agent(user_agent: &str) -> Self {
        if IOS_MARKERS
            .iter()
            .any(|marker| user_agent.contains(marker))
        {
            Platform::Ios
        } else {
            Platform::Other
        }
    }
}

/// A link to open in a new browsing context that gets no reference back to
/// the page that opened it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationLink {
    pub url: String,
    pub target: &'static str,
    pub features: &'static str,
}

impl NavigationLink {
    pub fn new(url: String) -> Self {
        NavigationLink {
            url,
            target: "_blank",
            features: "noopener,noreferrer",
        }
    }
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Builds the directions URL for `destination` on the given platform.
///
/// iOS devices get an Apple Maps link with the address as query, everything
/// else a Google Maps walking directions link.
pub fn directions_url(platform: Platform, address: &str, destination: GeoPoint) -> String {
    let coordinates = encode_component(&destination.to_string());

    match platform {
        Platform::Ios => format!(
            "{APPLE_MAPS_URL}?daddr={coordinates}&q={}",
            encode_component(address)
        ),
        Platform::Other => format!(
            "{GOOGLE_MAPS_DIRECTIONS_URL}?api=1&destination={coordinates}&travelmode=walking"
        ),
    }
}

pub fn directions_link(platform: Platform, address: &str, destination: GeoPoint) -> NavigationLink {
    NavigationLink::new(directions_url(platform, address, destination))
}
