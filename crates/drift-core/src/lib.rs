pub mod clock;
pub mod config;
pub mod manifest;
pub mod rng;
pub mod runner;
pub mod sprite;
pub mod state;
pub mod surface;
pub mod tint;

// Re-export key types at crate root for convenience
pub use clock::FrameClock;
pub use config::{AnimationConfig, ClearPolicy, StartPosition};
pub use manifest::{ManifestError, SpriteDescriptor, SpriteManifest};
pub use rng::Rng;
pub use runner::AnimationRunner;
pub use sprite::{Extent, Rgba8, Sprite, SpriteError};
pub use state::{AnimationState, BounceReport};
pub use surface::{SoftwareSurface, Surface};
pub use tint::Tint;
