use crate::rng::Rng;
use crate::sprite::Rgba8;

/// RGBA mask color applied when compositing the sprite, each channel in
/// [0, 1]. Alpha carries the fade-in, the color channels carry the
/// per-bounce recoloring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Tint {
    /// Identity mask: the sprite draws exactly as decoded.
    pub const OPAQUE: Tint = Tint {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a.clamp(0.0, 1.0);
        self
    }

    /// Uniform random color channels, keeping the given alpha.
    pub fn random(rng: &mut Rng, alpha: f32) -> Self {
        Self::new(rng.next_f32(), rng.next_f32(), rng.next_f32(), alpha)
    }

    /// Multiply a source pixel by the mask.
    pub fn apply(&self, px: Rgba8) -> Rgba8 {
        Rgba8::new(
            (px.r as f32 * self.r).round() as u8,
            (px.g as f32 * self.g).round() as u8,
            (px.b as f32 * self.b).round() as u8,
            (px.a as f32 * self.a).round() as u8,
        )
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::OPAQUE
    }
}
