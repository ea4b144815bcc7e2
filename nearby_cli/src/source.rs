use std::path::PathBuf;

use clap::Args;
use nearby_core::{dataset::Dataset, deep_link::Platform};

/// Where locations come from and which platform links are built for.
#[derive(Args)]
pub struct SourceArgs {
    /// Dataset file, a JSON array of locations
    #[arg(long, env = "NEARBY_DATASET", default_value = "data/locations.json")]
    pub dataset: PathBuf,

    /// User agent used to pick the maps application (iPhone, iPad and iPod get Apple Maps)
    #[arg(long, env = "NEARBY_USER_AGENT")]
    pub user_agent: Option<String>,
}

impl SourceArgs {
    pub fn load_dataset(&self) -> Result<Dataset, anyhow::Error> {
        Ok(Dataset::from_path(&self.dataset)?)
    }

    pub fn platform(&self) -> Platform {
        self.user_agent
            .as_deref()
            .map(Platform::from_user_agent)
            .unwrap_or_default()
    }
}
