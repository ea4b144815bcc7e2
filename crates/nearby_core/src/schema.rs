use schemars::schema_for;

use crate::location::Location;

/// JSON schema of a dataset file: an array of locations.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(Vec<Location>))
}
