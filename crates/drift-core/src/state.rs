//! The bounce/fade animation state machine.
//!
//! `advance` is the pure per-frame transition: position, velocity and tint
//! in, position, velocity and tint out. Drawing happens elsewhere, behind
//! the [`Surface`](crate::surface::Surface) trait, so this stays testable
//! without a framebuffer.

use glam::IVec2;

use crate::config::AnimationConfig;
use crate::rng::Rng;
use crate::sprite::Extent;
use crate::tint::Tint;

/// Rejection-sampling cap for the random start. A sprite larger than the
/// bounds can never produce a valid candidate, so the search stops here
/// and falls back to the origin instead of spinning.
const MAX_SAMPLE_ATTEMPTS: u32 = 1024;

/// Which axes rejected their move this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BounceReport {
    pub x: bool,
    pub y: bool,
}

impl BounceReport {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Position, velocity and tint of the moving sprite.
///
/// Invariant: after every `advance`, `0 <= x` and
/// `x + sprite.width <= bounds.width` (same for y), except on the update
/// that detects a collision, which rejects the move on the offending axis
/// rather than clamping. Starting positions that already violate the
/// invariant are the producer's fault and are not self-corrected.
#[derive(Debug, Clone)]
pub struct AnimationState {
    pos: IVec2,
    vel: IVec2,
    tint: Tint,
}

impl AnimationState {
    /// State pinned to the top-left corner.
    pub fn at_origin(cfg: &AnimationConfig) -> Self {
        Self::at(IVec2::ZERO, cfg)
    }

    /// State at an explicit position, with the config's velocity and
    /// starting alpha.
    pub fn at(pos: IVec2, cfg: &AnimationConfig) -> Self {
        Self {
            pos,
            vel: cfg.velocity,
            tint: Tint::OPAQUE.with_alpha(cfg.initial_alpha()),
        }
    }

    /// State at a uniformly random in-bounds position.
    ///
    /// Candidates are drawn over the full bounds and rejected until one
    /// keeps the sprite fully inside; the search is capped at
    /// [`MAX_SAMPLE_ATTEMPTS`].
    pub fn at_random(bounds: Extent, sprite: Extent, cfg: &AnimationConfig, rng: &mut Rng) -> Self {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let candidate = IVec2::new(
                rng.next_int(bounds.width.max(1)) as i32,
                rng.next_int(bounds.height.max(1)) as i32,
            );
            if within(candidate.x, sprite.width, bounds.width)
                && within(candidate.y, sprite.height, bounds.height)
            {
                return Self::at(candidate, cfg);
            }
        }
        Self::at_origin(cfg)
    }

    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    pub fn vel(&self) -> IVec2 {
        self.vel
    }

    pub fn tint(&self) -> Tint {
        self.tint
    }

    /// Run one frame of the animation.
    ///
    /// Each axis is tested independently: an in-bounds tentative move is
    /// committed, an out-of-bounds one is rejected for this frame and the
    /// velocity component negated. When at least one axis bounced and
    /// tinting is on, a single new mask color is sampled for the frame,
    /// keeping the current alpha. The fade then advances regardless of
    /// collisions, clamped at full opacity.
    pub fn advance(
        &mut self,
        bounds: Extent,
        sprite: Extent,
        cfg: &AnimationConfig,
        rng: &mut Rng,
    ) -> BounceReport {
        let tentative = self.pos + self.vel;
        let mut report = BounceReport::default();

        if within(tentative.x, sprite.width, bounds.width) {
            self.pos.x = tentative.x;
        } else {
            self.vel.x = -self.vel.x;
            report.x = true;
        }
        if within(tentative.y, sprite.height, bounds.height) {
            self.pos.y = tentative.y;
        } else {
            self.vel.y = -self.vel.y;
            report.y = true;
        }

        // One resample per frame, even on a corner hit.
        if report.any() && cfg.tint_on_bounce {
            self.tint = Tint::random(rng, self.tint.a);
        }

        if let Some(step) = cfg.alpha_step() {
            self.tint.a = (self.tint.a + step).min(1.0);
        }

        report
    }
}

/// Whether a coordinate keeps a span of `size` pixels fully inside
/// `[0, limit]`.
fn within(coord: i32, size: u32, limit: u32) -> bool {
    0 <= coord && coord + size as i32 <= limit as i32
}
