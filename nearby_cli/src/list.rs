use std::path::{Path, PathBuf};

use clap::Args;
use nearby_core::{
    finder::Finder,
    geolocation::{
        CachedProvider, FixedProvider, GeolocationError, GeolocationOptions, request_position,
    },
    geopoint::GeoPoint,
    location::LocationId,
};
use tracing::{info, warn};

use crate::{
    fix_cache::{cache_fix, get_cached_fix},
    parsers,
    render::render_table,
    source::SourceArgs,
};

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Current position as "lat,lng". Without it geolocation is unavailable
    #[arg(short, long, env = "NEARBY_POSITION", value_parser = parsers::parse_position, allow_hyphen_values = true)]
    position: Option<GeoPoint>,

    /// Location to select
    #[arg(short, long, value_parser = parsers::parse_location_id)]
    select: Option<LocationId>,

    /// Give up on geolocation after this long (e.g. "8s", "PT8S")
    #[arg(long, value_parser = parsers::parse_duration, default_value = "8s")]
    timeout: jiff::SignedDuration,

    /// Reuse a previous fix up to this age
    #[arg(long, value_parser = parsers::parse_duration, default_value = "60s")]
    maximum_age: jiff::SignedDuration,

    /// File remembering the last fix between runs
    #[arg(long, env = "NEARBY_FIX_CACHE")]
    fix_cache: Option<PathBuf>,

    /// Print the view as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub async fn run(args: ListArgs) -> Result<(), anyhow::Error> {
    let dataset = args.source.load_dataset()?;
    let mut finder = Finder::new(&dataset);

    let options = GeolocationOptions {
        timeout: args.timeout,
        maximum_age: args.maximum_age,
        ..GeolocationOptions::default()
    };
    finder.apply_geolocation(locate(args.position, args.fix_cache.as_deref(), options).await);

    if let Some(id) = args.select {
        finder.select(id);
    }

    let view = finder.view(args.source.platform());
    info!("Showing {} locations", view.rows.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.title);
        if let Some(banner) = &view.banner {
            println!("Location: {banner}");
        }
        println!("{}", render_table(&view));
        println!("{}", view.attribution);
    }

    Ok(())
}

/// Requests the position once. A fix remembered in `fix_cache` is reused
/// while it is younger than `options.maximum_age`.
async fn locate(
    position: Option<GeoPoint>,
    fix_cache: Option<&Path>,
    options: GeolocationOptions,
) -> Result<GeoPoint, GeolocationError> {
    let Some(position) = position else {
        return request_position::<FixedProvider>(None, options).await;
    };

    let Some(fix_cache) = fix_cache else {
        return request_position(Some(&FixedProvider::new(position)), options).await;
    };

    let provider = match get_cached_fix(fix_cache) {
        Ok(Some(fix)) => CachedProvider::with_fix(FixedProvider::new(position), fix),
        Ok(None) => CachedProvider::new(FixedProvider::new(position)),
        Err(error) => {
            warn!("Ignoring fix cache {:?}: {}", fix_cache, error);
            CachedProvider::new(FixedProvider::new(position))
        }
    };

    let result = request_position(Some(&provider), options).await;

    if let Some(fix) = provider.last_fix()
        && let Err(error) = cache_fix(fix_cache, &fix)
    {
        warn!("Failed to write fix cache {:?}: {}", fix_cache, error);
    }

    result
}
