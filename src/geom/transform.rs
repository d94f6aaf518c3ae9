//! Entity transform and bounds derivation
//!
//! `Transform` is a plain value: writing a field never recomputes anything.
//! Mutate every field that changes this frame, then call [`compute_bounds`]
//! once. Entities cache the result (see `entity.rs`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::polygon::Polygon;
use super::rect::Rect;
use super::rotated_rect::RotatedRectangle;
use super::rotation::rotate_rectangle;
use crate::normalize_angle;

/// Position, motion and shape parameters of an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    /// Position before the last move (for direction inference)
    #[serde(default)]
    pub old_position: Vec2,
    #[serde(default)]
    pub velocity: Vec2,
    pub scale: Vec2,
    /// Radians, positive turns clockwise on screen
    pub rotation: f32,
    /// Pivot for drawing and rotation, in unscaled local units
    pub origin: Vec2,
    /// Unscaled logical width/height
    pub size: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            old_position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
            origin: Vec2::ZERO,
            size: Vec2::ZERO,
        }
    }
}

impl Transform {
    /// Transform at `position` with the given logical size, unit scale
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            old_position: position,
            size,
            ..Self::default()
        }
    }

    /// Builder: pivot in unscaled local units
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Builder: pivot at the center of the logical size
    pub fn centered(self) -> Self {
        let half = self.size * 0.5;
        self.with_origin(half)
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// `size * scale`, componentwise
    #[inline]
    pub fn scaled_size(&self) -> Vec2 {
        self.size * self.scale
    }

    /// Origin in scaled (world) units
    #[inline]
    pub fn scaled_origin(&self) -> Vec2 {
        self.origin * self.scale
    }

    /// Move to `position`, remembering where we were
    pub fn set_position(&mut self, position: Vec2) {
        self.old_position = self.position;
        self.position = position;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.set_position(self.position + delta);
    }

    /// Apply velocity over `dt` seconds
    pub fn integrate(&mut self, dt: f32) {
        self.translate(self.velocity * dt);
    }

    /// Displacement of the last move
    pub fn direction(&self) -> Vec2 {
        self.position - self.old_position
    }

    /// Turn by `delta` radians, keeping the angle in [-π, π)
    pub fn rotate_by(&mut self, delta: f32) {
        self.rotation = normalize_angle(self.rotation + delta);
    }
}

/// Derived bounds of one entity: the axis-aligned box and the rotated outline
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    /// Unrotated box at `position - origin * scale`
    pub aabb: Rect,
    /// The same box turned about the transform's pivot ("BoundsR")
    pub rotated: Polygon,
}

impl Bounds {
    /// Rotated outline as a rectangle, `None` if the polygon is not a quad
    pub fn rotated_rect(&self) -> Option<RotatedRectangle> {
        match *self.rotated.points() {
            [top_left, top_right, bottom_right, bottom_left] => Some(RotatedRectangle {
                top_left,
                top_right,
                bottom_right,
                bottom_left,
                center: self.rotated.centroid(),
            }),
            _ => None,
        }
    }
}

/// Derive bounds from a transform
///
/// `alignment` shifts the pivot for sub-shapes whose anchor differs from the
/// nominal origin (an animation frame drawn off-center, for instance); pass
/// `Vec2::ZERO` when not needed. It is in unscaled units like `origin`.
pub fn compute_bounds(transform: &Transform, alignment: Vec2) -> Bounds {
    let scaled = transform.scaled_size();
    let pivot = (transform.origin + alignment) * transform.scale;
    let aabb = Rect::from_location_size(transform.position - pivot, scaled);

    // Rotate the local box about the local pivot, then move it to the AABB
    let local = Rect::from_location_size(Vec2::ZERO, scaled);
    let turned = rotate_rectangle(&local, pivot, transform.rotation);
    let mut rotated = turned.to_polygon();
    rotated.offset(aabb.x, aabb.y);

    Bounds { aabb, rotated }
}

/// Bounds for an arbitrary local outline instead of the logical rectangle
///
/// `local_points` are in unscaled local units (same frame as `origin`).
pub fn compute_outline_bounds(transform: &Transform, local_points: &[Vec2]) -> Bounds {
    use super::rotation::rotate_point_sc;

    let pivot = transform.scaled_origin();
    let top_left = transform.position - pivot;
    let (sin, cos) = transform.rotation.sin_cos();
    let points = local_points
        .iter()
        .map(|p| rotate_point_sc(*p * transform.scale, pivot, sin, cos) + top_left)
        .collect();
    let rotated = Polygon::new(points);
    let aabb = Rect::from_location_size(top_left, transform.scaled_size());

    Bounds { aabb, rotated }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_scaled_size_and_origin() {
        let t = Transform::new(Vec2::ZERO, Vec2::new(20.0, 10.0))
            .with_origin(Vec2::new(10.0, 5.0))
            .with_scale(Vec2::new(2.0, 3.0));
        assert_eq!(t.scaled_size(), Vec2::new(40.0, 30.0));
        assert_eq!(t.scaled_origin(), Vec2::new(20.0, 15.0));
    }

    #[test]
    fn test_aabb_subtracts_scaled_origin() {
        let t = Transform::new(Vec2::new(100.0, 50.0), Vec2::new(20.0, 10.0))
            .with_origin(Vec2::new(10.0, 5.0))
            .with_scale(Vec2::splat(2.0));
        let b = compute_bounds(&t, Vec2::ZERO);
        assert_eq!(b.aabb, Rect::new(80.0, 40.0, 40.0, 20.0));
    }

    #[test]
    fn test_alignment_shifts_pivot() {
        let t = Transform::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0))
            .with_scale(Vec2::splat(2.0));
        let b = compute_bounds(&t, Vec2::new(1.0, 2.0));
        assert_eq!(b.aabb.location(), Vec2::new(98.0, 96.0));
    }

    #[test]
    fn test_unrotated_outline_matches_aabb() {
        let t = Transform::new(Vec2::new(30.0, 40.0), Vec2::new(16.0, 8.0)).centered();
        let b = compute_bounds(&t, Vec2::ZERO);
        for (p, c) in b.rotated.points().iter().zip(b.aabb.corners()) {
            assert!(approx_eq(*p, c, 1e-4), "{p:?} vs {c:?}");
        }
    }

    #[test]
    fn test_rotation_turns_about_position() {
        // Centered 20x10 box at (100, 100) turned a quarter: becomes 10x20
        let t = Transform::new(Vec2::new(100.0, 100.0), Vec2::new(20.0, 10.0))
            .centered()
            .with_rotation(FRAC_PI_2);
        let b = compute_bounds(&t, Vec2::ZERO);
        assert!(approx_eq(b.rotated.centroid(), Vec2::new(100.0, 100.0), 1e-4));
        let hull = b.rotated.aabb().unwrap();
        assert!((hull.width - 10.0).abs() < 1e-4);
        assert!((hull.height - 20.0).abs() < 1e-4);
        // The axis-aligned box is not rotated
        assert_eq!(b.aabb, Rect::new(90.0, 95.0, 20.0, 10.0));
    }

    #[test]
    fn test_rotation_about_top_left_origin() {
        let t = Transform::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 4.0)).with_rotation(FRAC_PI_2);
        let b = compute_bounds(&t, Vec2::ZERO);
        // Top-right corner (10, 0) swings down to (0, 10)
        assert!(approx_eq(b.rotated.points()[1], Vec2::new(0.0, 10.0), 1e-4));
        assert!(approx_eq(b.rotated.points()[0], Vec2::ZERO, 1e-4));
    }

    #[test]
    fn test_bounds_rotated_rect_round_trip() {
        let t = Transform::new(Vec2::new(5.0, 5.0), Vec2::new(4.0, 4.0)).centered();
        let b = compute_bounds(&t, Vec2::ZERO);
        let rr = b.rotated_rect().unwrap();
        assert!(approx_eq(rr.center, Vec2::new(5.0, 5.0), 1e-5));
        assert_eq!(rr.to_polygon(), b.rotated);
    }

    #[test]
    fn test_nan_rotation_propagates() {
        let t = Transform::new(Vec2::ZERO, Vec2::ONE).with_rotation(f32::NAN);
        let b = compute_bounds(&t, Vec2::ZERO);
        assert!(b.rotated.points().iter().any(|p| p.x.is_nan()));
    }

    #[test]
    fn test_integrate_records_old_position() {
        let mut t = Transform::new(Vec2::new(1.0, 1.0), Vec2::ONE).with_velocity(Vec2::new(10.0, 0.0));
        t.integrate(0.5);
        assert_eq!(t.position, Vec2::new(6.0, 1.0));
        assert_eq!(t.old_position, Vec2::new(1.0, 1.0));
        assert_eq!(t.direction(), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_outline_bounds_triangle() {
        let t = Transform::new(Vec2::new(10.0, 10.0), Vec2::new(4.0, 4.0)).with_scale(Vec2::splat(2.0));
        let tri = [Vec2::ZERO, Vec2::new(4.0, 0.0), Vec2::new(0.0, 4.0)];
        let b = compute_outline_bounds(&t, &tri);
        assert_eq!(b.rotated.points()[1], Vec2::new(18.0, 10.0));
        assert_eq!(b.aabb, Rect::new(10.0, 10.0, 8.0, 8.0));
    }
}
