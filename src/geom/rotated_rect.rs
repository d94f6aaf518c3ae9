//! Rectangle rotated into world space
//!
//! A lighter alternative to [`Polygon`] when the shape is known to be a
//! rectangle: only two axes per rectangle need testing because opposite
//! edges are parallel.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::polygon::Polygon;
use super::rect::Rect;
use crate::collision::sat::{Projection, edge_axis, interval_distance};

/// Four rotated corners plus the rotated center
///
/// Only ever produced by [`super::rotate_rectangle`]; the corners always
/// describe one rectangle turned about one pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotatedRectangle {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
    pub center: Vec2,
}

impl RotatedRectangle {
    /// Corners in perimeter order (TL, TR, BR, BL)
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// The two unique edge directions (top edge, right edge)
    fn edge_axes(&self) -> [Option<Vec2>; 2] {
        [
            edge_axis(self.top_right - self.top_left),
            edge_axis(self.bottom_right - self.top_right),
        ]
    }

    /// Separating Axis test against another rotated rectangle
    ///
    /// Touching counts as intersecting. Agrees with running both rectangles
    /// through [`crate::collision::polygon_collision`].
    pub fn intersects(&self, other: &RotatedRectangle) -> bool {
        let a = self.corners();
        let b = other.corners();
        let mut tested = 0;

        for axis in self.edge_axes().into_iter().chain(other.edge_axes()).flatten() {
            tested += 1;
            let pa = Projection::of(&a, axis);
            let pb = Projection::of(&b, axis);
            if interval_distance(pa, pb) > 0.0 {
                return false;
            }
        }

        // Two points have no axis at all; treat as non-colliding
        tested > 0
    }

    /// Copy moved by `delta`; the shape and angle are unchanged
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            top_left: self.top_left + delta,
            top_right: self.top_right + delta,
            bottom_right: self.bottom_right + delta,
            bottom_left: self.bottom_left + delta,
            center: self.center + delta,
        }
    }

    /// Axis-aligned hull of the rotated corners
    pub fn aabb(&self) -> Rect {
        let [tl, tr, br, bl] = self.corners();
        let min = tl.min(tr).min(br).min(bl);
        let max = tl.max(tr).max(br).max(bl);
        Rect::from_location_size(min, max - min)
    }

    /// General polygon with the same winding
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.corners().to_vec())
    }
}
