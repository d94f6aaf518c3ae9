//! Separating Axis Theorem for convex polygons
//!
//! Every edge normal of both polygons is a candidate axis. If the projections
//! of the two shapes are disjoint on any axis the shapes do not overlap.
//! Velocity sweeps polygon A's interval along each axis to answer "will they
//! overlap after this step".

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DEGENERATE_EDGE_SQ;
use crate::geom::Polygon;

/// Result of a polygon collision query
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CollisionResult {
    /// Overlap once A moves by the relative velocity (current position included)
    pub will_intersect: bool,
    /// Overlap right now
    pub intersect: bool,
    /// Smallest push that separates A from B, pointing from B toward A.
    /// Zero unless `intersect` is set.
    pub minimum_translation_vector: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self::default()
    }
}

/// Scalar interval of a shape projected onto an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Projection {
    pub min: f32,
    pub max: f32,
}

impl Projection {
    pub fn of(points: &[Vec2], axis: Vec2) -> Self {
        points.iter().fold(
            Projection {
                min: f32::INFINITY,
                max: f32::NEG_INFINITY,
            },
            |acc, p| {
                let d = p.dot(axis);
                Projection {
                    min: acc.min.min(d),
                    max: acc.max.max(d),
                }
            },
        )
    }
}

/// Gap between two intervals; negative when they overlap (by that amount)
#[inline]
pub(crate) fn interval_distance(a: Projection, b: Projection) -> f32 {
    if a.min < b.min {
        b.min - a.max
    } else {
        a.min - b.max
    }
}

/// Unit normal of an edge, `None` for a zero-length edge
#[inline]
pub(crate) fn edge_axis(edge: Vec2) -> Option<Vec2> {
    if edge.length_squared() <= DEGENERATE_EDGE_SQ {
        return None;
    }
    Some(edge.perp().normalize())
}

/// Test two convex polygons, with A moving by `velocity` relative to B
///
/// Polygons with fewer than three vertices are treated as non-colliding and
/// return [`CollisionResult::miss`]; so is a pair with no usable axis at all.
/// Zero-length edges are skipped.
///
/// Axis order is A's edges then B's, in winding order. On equal overlap the
/// first axis wins, so the translation vector is deterministic.
pub fn polygon_collision(a: &Polygon, b: &Polygon, velocity: Vec2) -> CollisionResult {
    if a.len() < 3 || b.len() < 3 {
        log::debug!(
            "polygon_collision: degenerate input ({} / {} points), treating as miss",
            a.len(),
            b.len()
        );
        return CollisionResult::miss();
    }

    let mut intersect = true;
    let mut will_intersect = true;
    let mut min_overlap = f32::INFINITY;
    let mut translation_axis = Vec2::ZERO;
    let mut tested = 0usize;
    let center_delta = a.centroid() - b.centroid();

    for edge in a.edges().iter().chain(b.edges()) {
        let Some(axis) = edge_axis(*edge) else {
            continue;
        };
        tested += 1;

        let mut pa = Projection::of(a.points(), axis);
        let pb = Projection::of(b.points(), axis);

        let distance = interval_distance(pa, pb);
        if distance > 0.0 {
            intersect = false;
        } else if intersect && -distance < min_overlap {
            min_overlap = -distance;
            translation_axis = if center_delta.dot(axis) < 0.0 { -axis } else { axis };
        }

        // Sweep A along the axis by its projected velocity
        let v = axis.dot(velocity);
        if v < 0.0 {
            pa.min += v;
        } else {
            pa.max += v;
        }
        if interval_distance(pa, pb) > 0.0 {
            will_intersect = false;
        }

        if !intersect && !will_intersect {
            break;
        }
    }

    if tested == 0 {
        return CollisionResult::miss();
    }

    CollisionResult {
        will_intersect,
        intersect,
        minimum_translation_vector: if intersect {
            translation_axis * min_overlap
        } else {
            Vec2::ZERO
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_eq;
    use crate::geom::{Rect, rotate_rectangle};
    use std::f32::consts::FRAC_PI_4;

    fn square(x: f32, y: f32, size: f32) -> Polygon {
        Rect::new(x, y, size, size).to_polygon()
    }

    #[test]
    fn test_far_squares_miss() {
        let r = polygon_collision(&square(0.0, 0.0, 10.0), &square(100.0, 100.0, 10.0), Vec2::ZERO);
        assert!(!r.intersect);
        assert!(!r.will_intersect);
        assert_eq!(r.minimum_translation_vector, Vec2::ZERO);
    }

    #[test]
    fn test_overlapping_squares_mtv() {
        let r = polygon_collision(&square(0.0, 0.0, 10.0), &square(5.0, 5.0, 10.0), Vec2::ZERO);
        assert!(r.intersect);
        assert!(r.will_intersect);
        // Both axes overlap by 5; A's top edge comes first, so the push is vertical,
        // pointing from B's center back toward A's (upward on screen)
        assert!(approx_eq(r.minimum_translation_vector, Vec2::new(0.0, -5.0), 1e-5));
    }

    #[test]
    fn test_mtv_separates() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(7.0, 2.0, 10.0);
        let r = polygon_collision(&a, &b, Vec2::ZERO);
        assert!(approx_eq(r.minimum_translation_vector, Vec2::new(-3.0, 0.0), 1e-5));
        let moved = a.translated(r.minimum_translation_vector * 1.001);
        assert!(!polygon_collision(&moved, &b, Vec2::ZERO).intersect);
    }

    #[test]
    fn test_touching_counts_as_intersect() {
        let r = polygon_collision(&square(0.0, 0.0, 10.0), &square(10.0, 0.0, 10.0), Vec2::ZERO);
        assert!(r.intersect);
        assert_eq!(r.minimum_translation_vector.length(), 0.0);
    }

    #[test]
    fn test_velocity_predicts_hit() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(20.0, 0.0, 10.0);
        let r = polygon_collision(&a, &b, Vec2::new(15.0, 0.0));
        assert!(!r.intersect);
        assert!(r.will_intersect);

        let r = polygon_collision(&a, &b, Vec2::new(5.0, 0.0));
        assert!(!r.will_intersect);

        // Moving away never predicts a hit
        let r = polygon_collision(&a, &b, Vec2::new(-50.0, 0.0));
        assert!(!r.will_intersect);
    }

    #[test]
    fn test_rotated_diamond_misses_corner() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let diamond = rotate_rectangle(&r, r.center(), FRAC_PI_4).to_polygon();
        let res = polygon_collision(&diamond, &square(11.0, 11.0, 10.0), Vec2::ZERO);
        assert!(!res.intersect);
    }

    #[test]
    fn test_triangle_against_square() {
        let tri = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
        ]);
        // Square sits beyond the hypotenuse but inside the triangle's AABB
        assert!(!polygon_collision(&tri, &square(6.0, 6.0, 3.0), Vec2::ZERO).intersect);
        assert!(polygon_collision(&tri, &square(1.0, 1.0, 3.0), Vec2::ZERO).intersect);
    }

    #[test]
    fn test_degenerate_polygons_miss() {
        let seg = Polygon::new(vec![Vec2::ZERO, Vec2::new(10.0, 10.0)]);
        let r = polygon_collision(&seg, &square(0.0, 0.0, 10.0), Vec2::ZERO);
        assert_eq!(r, CollisionResult::miss());
        assert_eq!(
            polygon_collision(&Polygon::default(), &Polygon::default(), Vec2::ZERO),
            CollisionResult::miss()
        );
    }

    #[test]
    fn test_zero_width_rectangle_skips_axes() {
        // Only the vertical edges of a zero-width rectangle give an axis
        let sliver = Rect::new(5.0, -5.0, 0.0, 20.0).to_polygon();
        let r = polygon_collision(&sliver, &square(0.0, 0.0, 10.0), Vec2::ZERO);
        assert!(r.intersect);
        let r = polygon_collision(&sliver, &square(20.0, 0.0, 10.0), Vec2::ZERO);
        assert!(!r.intersect);
    }

    #[test]
    fn test_all_points_coincident_misses() {
        let dot = Polygon::new(vec![Vec2::ONE; 4]);
        assert_eq!(polygon_collision(&dot, &dot, Vec2::ZERO), CollisionResult::miss());
    }
}
