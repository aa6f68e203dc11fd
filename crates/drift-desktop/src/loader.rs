use std::path::Path;

use anyhow::{Context, Result};
use drift_core::{Extent, Sprite, SpriteDescriptor};
use log::info;

/// Decode the manifest's PNG into a sprite. Runs once at startup; the
/// decoded raster is reused for every frame.
pub fn load_sprite(base: &Path, desc: &SpriteDescriptor) -> Result<Sprite> {
    let path = base.join(&desc.path);
    let decoded = image::open(&path)
        .with_context(|| format!("could not decode `{}`", path.display()))?
        .into_rgba8();
    let extent = Extent::new(decoded.width(), decoded.height());
    desc.check_extent(extent)?;
    let sprite = Sprite::from_rgba_bytes(extent, decoded.as_raw())?;
    info!(
        "loaded sprite `{}` ({}x{})",
        desc.name, extent.width, extent.height
    );
    Ok(sprite)
}
