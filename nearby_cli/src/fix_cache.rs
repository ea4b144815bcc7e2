use std::{
    io::{BufWriter, Write},
    path::Path,
};

use nearby_core::geolocation::PositionFix;

pub fn cache_fix(path: &Path, fix: &PositionFix) -> Result<(), anyhow::Error> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, fix)?;
    writer.flush()?;

    Ok(())
}

pub fn get_cached_fix(path: &Path) -> Result<Option<PositionFix>, anyhow::Error> {
    if !path.is_file() {
        return Ok(None);
    }

    let file = std::fs::File::open(path)?;
    let fix: PositionFix = serde_json::from_reader(file)?;

    Ok(Some(fix))
}
