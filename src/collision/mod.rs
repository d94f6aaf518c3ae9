//! Collision detection and response
//!
//! - `sat`: Separating Axis Theorem over convex polygons (narrow phase)
//! - `response`: velocity inversion and separation helpers
//! - `pixel`: optional per-pixel mask test
//!
//! There is no broad phase: scenes test pairs linearly.

pub mod pixel;
pub mod response;
pub mod sat;

pub use pixel::{PixelMask, per_pixel_collision};
pub use response::{bounce_inside, bounce_velocity, reflect_velocity, separate};
pub use sat::{CollisionResult, polygon_collision};

use glam::Vec2;

use crate::geom::Bounds;

/// Test two entity bounds
///
/// With `use_rotated` the rotated outlines are compared, otherwise the
/// axis-aligned boxes. A rotated outline can reach outside its AABB, so the
/// early rejection for static pairs uses the outlines' own hulls.
pub fn bounds_collision(a: &Bounds, b: &Bounds, velocity: Vec2, use_rotated: bool) -> CollisionResult {
    if !use_rotated {
        return polygon_collision(&a.aabb.to_polygon(), &b.aabb.to_polygon(), velocity);
    }

    if velocity == Vec2::ZERO {
        if let (Some(ha), Some(hb)) = (a.rotated.aabb(), b.rotated.aabb()) {
            if !ha.intersects(&hb) {
                return CollisionResult::miss();
            }
        }
    }
    polygon_collision(&a.rotated, &b.rotated, velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Transform, compute_bounds};
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_bounds_collision_rotated_vs_aabb() {
        let a = Transform::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0))
            .centered()
            .with_rotation(FRAC_PI_4);
        let b = Transform::new(Vec2::new(16.0, 16.0), Vec2::new(10.0, 10.0)).centered();
        let ba = compute_bounds(&a, Vec2::ZERO);
        let bb = compute_bounds(&b, Vec2::ZERO);
        // Unrotated boxes are one unit apart on both axes
        assert!(!bounds_collision(&ba, &bb, Vec2::ZERO, false).intersect);
        // The diamond pokes out of its AABB toward b but not far enough
        assert!(!bounds_collision(&ba, &bb, Vec2::ZERO, true).intersect);

        let near = Transform::new(Vec2::new(16.0, 5.0), Vec2::new(10.0, 10.0)).centered();
        let bn = compute_bounds(&near, Vec2::ZERO);
        // AABBs are 1 unit apart, the diamond's tip reaches 2.07 past its box
        assert!(!bounds_collision(&ba, &bn, Vec2::ZERO, false).intersect);
        assert!(bounds_collision(&ba, &bn, Vec2::ZERO, true).intersect);
    }
}
