//! Rotation of points and rectangles about an arbitrary pivot
//!
//! Screen space (y down): a positive angle turns clockwise on screen.
//! Callers pass angles through untouched; NaN or infinite angles produce NaN
//! coordinates rather than being trapped here.

use glam::Vec2;

use super::rect::Rect;
use super::rotated_rect::RotatedRectangle;

/// Rotate `point` about `origin` by `angle` radians
///
/// x' = (x-ox)·cosθ − (y-oy)·sinθ + ox
/// y' = (x-ox)·sinθ + (y-oy)·cosθ + oy
#[inline]
pub fn rotate_point(point: Vec2, origin: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    rotate_point_sc(point, origin, sin, cos)
}

/// Same as [`rotate_point`] with the sine/cosine already evaluated
#[inline]
pub(crate) fn rotate_point_sc(point: Vec2, origin: Vec2, sin: f32, cos: f32) -> Vec2 {
    let d = point - origin;
    Vec2::new(d.x * cos - d.y * sin + origin.x, d.x * sin + d.y * cos + origin.y)
}

/// Rotate the four corners and the center of `rect` about `origin`
pub fn rotate_rectangle(rect: &Rect, origin: Vec2, angle: f32) -> RotatedRectangle {
    let (sin, cos) = angle.sin_cos();
    let [tl, tr, br, bl] = rect.corners().map(|c| rotate_point_sc(c, origin, sin, cos));
    let center = rotate_point_sc(rect.center(), origin, sin, cos);
    RotatedRectangle {
        top_left: tl,
        top_right: tr,
        bottom_right: br,
        bottom_left: bl,
        center,
    }
}
