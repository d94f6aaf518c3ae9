//! Per-pixel collision between unrotated sprite masks
//!
//! Fallback for cases where rectangle bounds are too coarse. Masks are placed
//! at the top-left of their (rounded) AABB; rotation and scale are not
//! supported here.

use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// Boolean opacity mask, row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelMask {
    width: u32,
    height: u32,
    solid: Vec<bool>,
}

impl PixelMask {
    /// Mask from one alpha byte per pixel; `None` if the buffer size is wrong
    pub fn from_alpha(width: u32, height: u32, alpha: &[u8], threshold: u8) -> Option<Self> {
        if alpha.len() != (width as usize) * (height as usize) {
            log::warn!(
                "PixelMask::from_alpha: expected {} bytes, got {}",
                width as usize * height as usize,
                alpha.len()
            );
            return None;
        }
        Some(Self {
            width,
            height,
            solid: alpha.iter().map(|a| *a >= threshold).collect(),
        })
    }

    /// Mask from tightly packed RGBA8 pixels, using the alpha channel
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8], threshold: u8) -> Option<Self> {
        if rgba.len() != (width as usize) * (height as usize) * 4 {
            log::warn!("PixelMask::from_rgba: buffer is not {width}x{height} RGBA8");
            return None;
        }
        let alpha: Vec<u8> = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Self::from_alpha(width, height, &alpha, threshold)
    }

    /// Fully solid mask
    pub fn solid(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            solid: vec![true; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Opacity at local pixel coordinates; out of range reads as empty
    pub fn is_solid(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        self.solid[y as usize * self.width as usize + x as usize]
    }
}

/// True if any pixel is solid in both masks where their rectangles overlap
///
/// Rectangle locations are rounded to whole pixels first.
pub fn per_pixel_collision(bounds_a: &Rect, mask_a: &PixelMask, bounds_b: &Rect, mask_b: &PixelMask) -> bool {
    let ax = bounds_a.x.round() as i64;
    let ay = bounds_a.y.round() as i64;
    let bx = bounds_b.x.round() as i64;
    let by = bounds_b.y.round() as i64;

    let left = ax.max(bx);
    let top = ay.max(by);
    let right = ax
        .saturating_add(mask_a.width as i64)
        .min(bx.saturating_add(mask_b.width as i64));
    let bottom = ay
        .saturating_add(mask_a.height as i64)
        .min(by.saturating_add(mask_b.height as i64));

    for y in top..bottom {
        for x in left..right {
            if mask_a.is_solid(x - ax, y - ay) && mask_b.is_solid(x - bx, y - by) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x4 mask with only the top-left 2x2 quadrant solid
    fn corner_mask() -> PixelMask {
        #[rustfmt::skip]
        let alpha: [u8; 16] = [
            255, 255, 0, 0,
            255, 255, 0, 0,
            0,   0,   0, 0,
            0,   0,   0, 0,
        ];
        PixelMask::from_alpha(4, 4, &alpha, 128).unwrap()
    }

    #[test]
    fn test_mask_from_rgba() {
        let rgba: [u8; 8] = [10, 20, 30, 255, 10, 20, 30, 0];
        let mask = PixelMask::from_rgba(2, 1, &rgba, 1).unwrap();
        assert!(mask.is_solid(0, 0));
        assert!(!mask.is_solid(1, 0));
        assert!(!mask.is_solid(5, 0));
        assert!(PixelMask::from_rgba(3, 1, &rgba, 1).is_none());
    }

    #[test]
    fn test_transparent_overlap_does_not_collide() {
        let a = corner_mask();
        let b = PixelMask::solid(2, 2);
        // b covers a's transparent bottom-right quadrant
        assert!(!per_pixel_collision(
            &Rect::new(0.0, 0.0, 4.0, 4.0),
            &a,
            &Rect::new(2.0, 2.0, 2.0, 2.0),
            &b
        ));
        // b shifted onto a's solid quadrant
        assert!(per_pixel_collision(
            &Rect::new(0.0, 0.0, 4.0, 4.0),
            &a,
            &Rect::new(1.0, 1.0, 2.0, 2.0),
            &b
        ));
    }

    #[test]
    fn test_huge_coordinates_do_not_overflow() {
        let m = PixelMask::solid(4, 4);
        let far = Rect::new(f32::MAX, f32::MAX, 4.0, 4.0);
        assert!(!per_pixel_collision(&far, &m, &Rect::new(0.0, 0.0, 4.0, 4.0), &m));
        // Both saturate to i64::MAX and share only an empty overlap
        assert!(!per_pixel_collision(&far, &m, &far, &m));
    }

    #[test]
    fn test_disjoint_rects_never_collide() {
        let m = PixelMask::solid(4, 4);
        assert!(!per_pixel_collision(
            &Rect::new(0.0, 0.0, 4.0, 4.0),
            &m,
            &Rect::new(10.0, 0.0, 4.0, 4.0),
            &m
        ));
    }
}
