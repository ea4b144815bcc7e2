use clap::Args;
use nearby_core::{finder::Finder, location::LocationId};
use tracing::info;

use crate::{parsers, source::SourceArgs};

#[derive(Args)]
pub struct DirectionsArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Location to navigate to
    #[arg(long, value_parser = parsers::parse_location_id)]
    id: LocationId,
}

pub fn run(args: DirectionsArgs) -> Result<(), anyhow::Error> {
    let dataset = args.source.load_dataset()?;
    let finder = Finder::new(&dataset);
    let platform = args.source.platform();

    let link = finder
        .directions(&args.id, platform)
        .ok_or_else(|| anyhow::anyhow!("No location with id {}", args.id))?;

    info!("Directions to {} for {:?}", args.id, platform);
    println!("{}", link.url);

    Ok(())
}
