use std::{
    io::{BufReader, Read},
    path::{Path, PathBuf},
    sync::Arc,
};

use fxhash::FxHashSet;
use thiserror::Error;
use tracing::{debug, info};

use crate::location::{Location, LocationId};

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate location id {0}")]
    DuplicateId(LocationId),
}

/// The static list of locations, loaded once at startup.
///
/// Cloning is cheap and every clone shares the same immutable slice.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    locations: Arc<[Location]>,
}

impl Dataset {
    pub fn new(locations: Vec<Location>) -> Result<Self, DatasetError> {
        let mut seen = FxHashSet::default();
        for location in &locations {
            if !seen.insert(&location.id) {
                return Err(DatasetError::DuplicateId(location.id.clone()));
            }
        }

        Ok(Dataset {
            locations: locations.into(),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        info!("Loading dataset {:?}", path);
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(BufReader::new(file))?;
        debug!("Loaded {} locations", dataset.len());

        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let locations: Vec<Location> = serde_json::from_reader(reader)?;
        Self::new(locations)
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let locations: Vec<Location> = serde_json::from_str(json)?;
        Self::new(locations)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn get(&self, id: &LocationId) -> Option<&Location> {
        self.locations.iter().find(|location| &location.id == id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
