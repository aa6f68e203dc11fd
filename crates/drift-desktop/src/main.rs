//! drift: a bouncing-logo desktop overlay.
//!
//! Opens a borderless transparent window, composites the logo into it at
//! 30 Hz, and bounces it off the window edges with fade-in and a random
//! recolor on every bounce.

mod loader;
mod overlay;

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use drift_core::{AnimationConfig, AnimationRunner, FrameClock, SoftwareSurface, SpriteManifest};
use log::info;

use crate::overlay::Overlay;

const WIDTH: usize = 1280;
const HEIGHT: usize = 720;
const MANIFEST: &str = include_str!("../assets/manifest.json");
const ASSET_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let manifest = SpriteManifest::from_json(MANIFEST)?;
    let sprite = loader::load_sprite(Path::new(ASSET_DIR), manifest.primary())?;

    let config = AnimationConfig::default();
    let mut overlay = Overlay::open("drift", WIDTH, HEIGHT)?;
    let mut surface = SoftwareSurface::new(overlay.extent());

    let seed = time_seed();
    info!(
        "running at {} fps in a {}x{} overlay (seed {})",
        config.fps, WIDTH, HEIGHT, seed
    );

    let mut clock = FrameClock::new(config.fps);
    let mut runner = AnimationRunner::new(sprite, config, seed, overlay.extent());

    while overlay.running() {
        surface.resize(overlay.extent());
        runner.tick(&mut surface);
        overlay.present(surface.pixels(), surface.extent())?;
        clock.pace();
    }

    info!("overlay closed, shutting down");
    Ok(())
}

/// Seed the generator once at process start from the wall clock.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(1)
}
