//! Drawing surface contract and the software compositor behind it.
//!
//! The state machine never touches pixels; it hands a position and a tint
//! to a [`Surface`]. The shell presents whatever the surface holds.

use glam::IVec2;

use crate::sprite::{Extent, Rgba8, Sprite};
use crate::tint::Tint;

/// A drawing surface the animation composites into.
pub trait Surface {
    /// Current bounds, queried once per frame.
    fn extent(&self) -> Extent;

    /// Full transparent clear.
    fn clear(&mut self);

    /// Paint the sprite at `pos`, masked by `tint`, clipped to the surface.
    fn blit(&mut self, sprite: &Sprite, pos: IVec2, tint: Tint);
}

// ---------------------------------------------------------------------------
// Software compositor
// ---------------------------------------------------------------------------

/// CPU framebuffer in the 0xAARRGGBB layout the overlay window presents.
pub struct SoftwareSurface {
    extent: Extent,
    pixels: Vec<u32>,
}

impl SoftwareSurface {
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            pixels: vec![0; extent.width as usize * extent.height as usize],
        }
    }

    /// Track a bounds change. Reallocates and clears only when the extent
    /// actually differs, so calling this every frame is cheap.
    pub fn resize(&mut self, extent: Extent) {
        if extent != self.extent {
            self.extent = extent;
            self.pixels = vec![0; extent.width as usize * extent.height as usize];
        }
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

impl Surface for SoftwareSurface {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn blit(&mut self, sprite: &Sprite, pos: IVec2, tint: Tint) {
        let src = sprite.extent();
        let dst = self.extent;
        for row in 0..src.height {
            let y = pos.y + row as i32;
            if y < 0 || y >= dst.height as i32 {
                continue;
            }
            for col in 0..src.width {
                let x = pos.x + col as i32;
                if x < 0 || x >= dst.width as i32 {
                    continue;
                }
                let masked = tint.apply(sprite.pixel(col, row));
                let idx = y as usize * dst.width as usize + x as usize;
                self.pixels[idx] = over(self.pixels[idx], masked);
            }
        }
    }
}

/// Straight (non-premultiplied) source-over compositing of one pixel.
fn over(dst: u32, src: Rgba8) -> u32 {
    match src.a {
        255 => return src.to_argb(),
        0 => return dst,
        _ => {}
    }
    let sa = src.a as u32;
    let da = (dst >> 24) & 0xff;
    let out_a = sa + da * (255 - sa) / 255;
    if out_a == 0 {
        return 0;
    }
    let channel = |s: u32, d: u32| (s * sa + d * da * (255 - sa) / 255) / out_a;
    let r = channel(src.r as u32, (dst >> 16) & 0xff);
    let g = channel(src.g as u32, (dst >> 8) & 0xff);
    let b = channel(src.b as u32, dst & 0xff);
    (out_a << 24) | (r << 16) | (g << 8) | b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_sprite(w: u32, h: u32) -> Sprite {
        Sprite::solid(Extent::new(w, h), Rgba8::new(255, 255, 255, 255))
    }

    #[test]
    fn clear_zeroes_the_framebuffer() {
        let mut surface = SoftwareSurface::new(Extent::new(4, 4));
        surface.blit(&white_sprite(4, 4), IVec2::ZERO, Tint::OPAQUE);
        assert!(surface.pixels().iter().any(|&p| p != 0));
        surface.clear();
        assert!(surface.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn opaque_blit_lands_at_the_position() {
        let mut surface = SoftwareSurface::new(Extent::new(8, 8));
        surface.blit(&white_sprite(2, 2), IVec2::new(3, 4), Tint::OPAQUE);
        assert_eq!(surface.pixels()[4 * 8 + 3], 0xffff_ffff);
        assert_eq!(surface.pixels()[5 * 8 + 4], 0xffff_ffff);
        assert_eq!(surface.pixels()[0], 0);
    }

    #[test]
    fn blit_clips_at_the_edges() {
        let mut surface = SoftwareSurface::new(Extent::new(4, 4));
        surface.blit(&white_sprite(3, 3), IVec2::new(-1, 2), Tint::OPAQUE);
        // Only the overlap was written.
        assert_eq!(surface.pixels()[2 * 4], 0xffff_ffff);
        assert_eq!(surface.pixels()[3 * 4 + 1], 0xffff_ffff);
        assert_eq!(surface.pixels()[0], 0);
        // Fully off-surface positions write nothing and do not panic.
        surface.clear();
        surface.blit(&white_sprite(3, 3), IVec2::new(100, 100), Tint::OPAQUE);
        assert!(surface.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn tint_masks_the_source() {
        let mut surface = SoftwareSurface::new(Extent::new(1, 1));
        surface.blit(
            &white_sprite(1, 1),
            IVec2::ZERO,
            Tint::new(1.0, 0.0, 0.0, 1.0),
        );
        assert_eq!(surface.pixels()[0], 0xffff_0000);
    }

    #[test]
    fn transparent_source_leaves_destination() {
        let mut surface = SoftwareSurface::new(Extent::new(1, 1));
        surface.blit(&white_sprite(1, 1), IVec2::ZERO, Tint::OPAQUE);
        surface.blit(
            &white_sprite(1, 1),
            IVec2::ZERO,
            Tint::OPAQUE.with_alpha(0.0),
        );
        assert_eq!(surface.pixels()[0], 0xffff_ffff);
    }

    #[test]
    fn half_alpha_over_opaque_black_blends() {
        let mut surface = SoftwareSurface::new(Extent::new(1, 1));
        surface.blit(
            &Sprite::solid(Extent::new(1, 1), Rgba8::new(0, 0, 0, 255)),
            IVec2::ZERO,
            Tint::OPAQUE,
        );
        surface.blit(
            &white_sprite(1, 1),
            IVec2::ZERO,
            Tint::OPAQUE.with_alpha(0.5),
        );
        let px = surface.pixels()[0];
        assert_eq!(px >> 24, 0xff, "over an opaque destination alpha stays full");
        let r = (px >> 16) & 0xff;
        assert!((126..=129).contains(&r), "half white over black, got {:#x}", px);
    }

    #[test]
    fn resize_reallocates_only_on_change() {
        let mut surface = SoftwareSurface::new(Extent::new(4, 4));
        surface.blit(&white_sprite(1, 1), IVec2::ZERO, Tint::OPAQUE);
        surface.resize(Extent::new(4, 4));
        assert_eq!(surface.pixels()[0], 0xffff_ffff, "same extent keeps pixels");
        surface.resize(Extent::new(2, 2));
        assert_eq!(surface.pixels().len(), 4);
        assert!(surface.pixels().iter().all(|&p| p == 0));
    }
}
