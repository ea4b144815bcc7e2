use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::geopoint::GeoPoint;

/// Identifier of a [`Location`].
///
/// Datasets written by hand tend to use small integers while exported ones
/// use strings, so any JSON number or string is accepted. Two ids are equal
/// only if they have the same kind and value: `1` and `"1"` are different
/// locations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum LocationId {
    Number(Number),
    Text(String),
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationId::Number(id) => write!(f, "{id}"),
            LocationId::Text(id) => f.write_str(id),
        }
    }
}

impl From<Number> for LocationId {
    fn from(value: Number) -> Self {
        LocationId::Number(value)
    }
}

impl From<&str> for LocationId {
    fn from(value: &str) -> Self {
        LocationId::Text(value.to_owned())
    }
}

impl From<String> for LocationId {
    fn from(value: String) -> Self {
        LocationId::Text(value)
    }
}

impl LocationId {
    pub fn number(id: u64) -> Self {
        LocationId::Number(id.into())
    }

    /// Parses an id coming from a URL or a command line argument.
    ///
    /// Input written as a JSON number becomes [`LocationId::Number`],
    /// anything else is kept as text.
    pub fn parse_lenient(input: &str) -> Self {
        input
            .parse::<Number>()
            .map(LocationId::Number)
            .unwrap_or_else(|_| LocationId::Text(input.to_owned()))
    }
}

/// A facility shown by the finder. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub notes: String,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}
