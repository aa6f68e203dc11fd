use glam::IVec2;

/// How the previous frame's pixels are handled before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearPolicy {
    /// Full transparent clear before every blit.
    #[default]
    EveryFrame,
    /// No clear. Only correct over a fully opaque window background,
    /// where the opaque sprite repaint leaves no visible stale pixels.
    Never,
}

/// Where the sprite starts its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartPosition {
    /// Top-left corner.
    Origin,
    /// Uniformly sampled so the sprite starts fully in bounds.
    #[default]
    Random,
}

/// Animation configuration, a plain struct of compiled constants.
/// The default is the richest variant: tint-on-bounce plus fade-in.
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Target frame rate in Hz.
    pub fps: f32,
    /// Per-frame displacement in pixels; sign flips on collision.
    pub velocity: IVec2,
    /// Starting position policy.
    pub start: StartPosition,
    /// Resample a random mask color whenever an axis bounces.
    pub tint_on_bounce: bool,
    /// Fade the sprite in from fully transparent over this many seconds.
    /// `None` draws at full opacity from the first frame.
    pub fade_seconds: Option<f32>,
    /// Compositing policy for the previous frame's pixels.
    pub clear: ClearPolicy,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fps: 30.0,
            velocity: IVec2::new(7, 7),
            start: StartPosition::Random,
            tint_on_bounce: true,
            fade_seconds: Some(3.0),
            clear: ClearPolicy::EveryFrame,
        }
    }
}

impl AnimationConfig {
    /// The simplest variant: opaque repaint from the corner, no tinting,
    /// no fade, no per-frame clear.
    pub fn plain() -> Self {
        Self {
            start: StartPosition::Origin,
            tint_on_bounce: false,
            fade_seconds: None,
            clear: ClearPolicy::Never,
            ..Self::default()
        }
    }

    // -- Builder pattern --

    pub fn with_fps(mut self, fps: f32) -> Self {
        self.fps = fps.max(1.0);
        self
    }

    pub fn with_velocity(mut self, velocity: IVec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_start(mut self, start: StartPosition) -> Self {
        self.start = start;
        self
    }

    pub fn with_tint_on_bounce(mut self, enabled: bool) -> Self {
        self.tint_on_bounce = enabled;
        self
    }

    pub fn with_fade(mut self, seconds: Option<f32>) -> Self {
        self.fade_seconds = seconds;
        self
    }

    pub fn with_clear(mut self, clear: ClearPolicy) -> Self {
        self.clear = clear;
        self
    }

    /// Per-frame alpha increment for the fade, `None` when fading is off.
    pub fn alpha_step(&self) -> Option<f32> {
        self.fade_seconds.map(|secs| 1.0 / (secs * self.fps))
    }

    /// Alpha the sprite starts at: 0 when fading in, 1 otherwise.
    pub fn initial_alpha(&self) -> f32 {
        if self.fade_seconds.is_some() {
            0.0
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_richest_variant() {
        let cfg = AnimationConfig::default();
        assert_eq!(cfg.velocity, IVec2::new(7, 7));
        assert!(cfg.tint_on_bounce);
        assert_eq!(cfg.fade_seconds, Some(3.0));
        assert_eq!(cfg.clear, ClearPolicy::EveryFrame);
        assert_eq!(cfg.initial_alpha(), 0.0);
    }

    #[test]
    fn plain_variant_disables_everything() {
        let cfg = AnimationConfig::plain();
        assert_eq!(cfg.start, StartPosition::Origin);
        assert!(!cfg.tint_on_bounce);
        assert_eq!(cfg.alpha_step(), None);
        assert_eq!(cfg.initial_alpha(), 1.0);
        assert_eq!(cfg.clear, ClearPolicy::Never);
    }

    #[test]
    fn alpha_step_matches_fps_and_duration() {
        let cfg = AnimationConfig::default()
            .with_fps(32.0)
            .with_fade(Some(0.5));
        // 32 fps over half a second: 16 frames, 1/16 per frame.
        assert_eq!(cfg.alpha_step(), Some(1.0 / 16.0));
    }

    #[test]
    fn builder_pattern() {
        let cfg = AnimationConfig::default()
            .with_velocity(IVec2::new(3, -2))
            .with_start(StartPosition::Origin)
            .with_tint_on_bounce(false);
        assert_eq!(cfg.velocity, IVec2::new(3, -2));
        assert_eq!(cfg.start, StartPosition::Origin);
        assert!(!cfg.tint_on_bounce);
    }
}
