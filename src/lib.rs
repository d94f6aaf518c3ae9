//! Roto Bounds - rotated 2D bounds and collision for sprite entities
//!
//! Core modules:
//! - `geom`: Rectangles, rotation math, polygons, transforms and bounds derivation
//! - `collision`: Separating Axis Theorem, response helpers, per-pixel masks
//! - `view`: Camera and visibility culling
//! - `entity`: Capability interface for anything that has bounds
//! - `scene`: Per-frame update loop (integrate, recompute, cull, collide)
//! - `debug`: Debug overlay line geometry
//! - `settings`: JSON-backed configuration
//!
//! Threading: nothing in this crate is synchronized. Geometry values are plain
//! data and must only be mutated from the thread running the scene update.
//! Background loaders may build new values but must hand them over instead of
//! touching live ones.

pub mod collision;
pub mod debug;
pub mod entity;
pub mod geom;
pub mod scene;
pub mod settings;
pub mod view;

pub use collision::{CollisionResult, polygon_collision};
pub use entity::{AnimatedSprite, Body, Bounded, DebugPolygon, Sprite};
pub use geom::{Bounds, Polygon, Rect, RotatedRectangle, Transform, compute_bounds};
pub use scene::Scene;
pub use settings::{Settings, SettingsError};
pub use view::{Camera, ViewCuller};

/// Crate-wide numeric constants
pub mod consts {
    /// Tolerance used by geometry tests and degenerate-edge checks
    pub const EPSILON: f32 = 1e-5;
    /// Squared edge length below which an edge is treated as zero-length
    pub const DEGENERATE_EDGE_SQ: f32 = 1e-12;
    /// Smallest camera zoom accepted; lower values are clamped
    pub const MIN_ZOOM: f32 = 0.01;
    /// Fixed simulation timestep used by the demo scene (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Default viewport size in pixels
    pub const DEFAULT_VIEWPORT: (f32, f32) = (800.0, 600.0);
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can land exactly on TAU for tiny negative inputs
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// Returns true when `a` and `b` differ by at most `eps` on both axes
#[inline]
pub fn approx_eq(a: glam::Vec2, b: glam::Vec2, eps: f32) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle_wraps() {
        // 3π lands on either end of the range depending on rounding
        let n = normalize_angle(3.0 * PI);
        assert!((-PI..PI).contains(&n));
        assert!((n.cos() + 1.0).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) - (-PI / 2.0)).abs() < 1e-6);
        assert!((normalize_angle(2.5 * PI) - PI / 2.0).abs() < 1e-5);
        let n = normalize_angle(PI);
        assert!((-PI..PI).contains(&n));
    }

    #[test]
    fn test_normalize_angle_passes_nan_through() {
        assert!(normalize_angle(f32::NAN).is_nan());
    }
}
