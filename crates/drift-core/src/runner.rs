use log::debug;

use crate::config::{AnimationConfig, ClearPolicy, StartPosition};
use crate::rng::Rng;
use crate::sprite::{Extent, Sprite};
use crate::state::AnimationState;
use crate::surface::Surface;

/// Wires the state machine to a surface: one `tick` per frame.
pub struct AnimationRunner {
    config: AnimationConfig,
    sprite: Sprite,
    state: AnimationState,
    rng: Rng,
}

impl AnimationRunner {
    /// Build the runner and place the sprite according to the config's
    /// start policy, sampling against the given startup bounds.
    pub fn new(sprite: Sprite, config: AnimationConfig, seed: u64, bounds: Extent) -> Self {
        let mut rng = Rng::new(seed);
        let state = match config.start {
            StartPosition::Origin => AnimationState::at_origin(&config),
            StartPosition::Random => {
                AnimationState::at_random(bounds, sprite.extent(), &config, &mut rng)
            }
        };
        Self {
            config,
            sprite,
            state,
            rng,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Advance one frame and composite the result.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        let bounds = surface.extent();
        let report = self
            .state
            .advance(bounds, self.sprite.extent(), &self.config, &mut self.rng);
        if report.any() {
            debug!(
                "bounce at {:?} (x: {}, y: {})",
                self.state.pos(),
                report.x,
                report.y
            );
        }

        if self.config.clear == ClearPolicy::EveryFrame {
            surface.clear();
        }
        surface.blit(&self.sprite, self.state.pos(), self.state.tint());
    }
}
