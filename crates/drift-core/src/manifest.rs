use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sprite::Extent;

/// Sprite manifest naming the raster assets the shell composites.
/// Parsed from a JSON string the binary compiles in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteManifest {
    pub sprites: Vec<SpriteDescriptor>,
}

/// Describes a single raster asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Human-readable name (e.g., "logo").
    pub name: String,
    /// Relative path to the PNG file.
    pub path: String,
    /// Declared pixel width, checked against the decoded raster.
    pub width: u32,
    /// Declared pixel height, checked against the decoded raster.
    pub height: u32,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("manifest lists no sprites")]
    Empty,
    #[error(
        "sprite `{name}`: decoded raster is {actual_width}x{actual_height}, \
         manifest declares {declared_width}x{declared_height}"
    )]
    SizeMismatch {
        name: String,
        declared_width: u32,
        declared_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

impl SpriteManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: SpriteManifest = serde_json::from_str(json)?;
        if manifest.sprites.is_empty() {
            return Err(ManifestError::Empty);
        }
        Ok(manifest)
    }

    /// The sprite the animation composites.
    pub fn primary(&self) -> &SpriteDescriptor {
        &self.sprites[0]
    }
}

impl SpriteDescriptor {
    pub fn declared_extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    /// Verify the decoded raster matches the declared size.
    pub fn check_extent(&self, actual: Extent) -> Result<(), ManifestError> {
        if actual == self.declared_extent() {
            Ok(())
        } else {
            Err(ManifestError::SizeMismatch {
                name: self.name.clone(),
                declared_width: self.width,
                declared_height: self.height,
                actual_width: actual.width,
                actual_height: actual.height,
            })
        }
    }
}
