//! Debug overlay line generation
//!
//! Draws bounds, rotated outlines, centroids and pivots as a line list (two
//! vertices per segment). What gets drawn is decided by the config passed in.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vertex::{Vertex, colors};
use crate::entity::Bounded;

/// Which debug layers to draw and in what colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugOverlayConfig {
    pub show_bounds: bool,
    pub show_rotated_bounds: bool,
    pub show_centroids: bool,
    pub show_origins: bool,
    /// Half-length of centroid/origin crosses (pixels)
    pub marker_size: f32,
    pub bounds_color: [f32; 4],
    pub rotated_color: [f32; 4],
    pub centroid_color: [f32; 4],
    pub origin_color: [f32; 4],
}

impl Default for DebugOverlayConfig {
    fn default() -> Self {
        Self::off()
    }
}

impl DebugOverlayConfig {
    /// Nothing drawn
    pub fn off() -> Self {
        Self {
            show_bounds: false,
            show_rotated_bounds: false,
            show_centroids: false,
            show_origins: false,
            marker_size: 3.0,
            bounds_color: colors::BOUNDS,
            rotated_color: colors::ROTATED_BOUNDS,
            centroid_color: colors::CENTROID,
            origin_color: colors::ORIGIN,
        }
    }

    /// Every layer drawn
    pub fn all() -> Self {
        Self {
            show_bounds: true,
            show_rotated_bounds: true,
            show_centroids: true,
            show_origins: true,
            ..Self::off()
        }
    }

    pub fn any_enabled(&self) -> bool {
        self.show_bounds || self.show_rotated_bounds || self.show_centroids || self.show_origins
    }
}

/// Closed outline through `points`
fn push_outline(out: &mut Vec<Vertex>, points: &[Vec2], color: [f32; 4]) {
    let n = points.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        out.push(Vertex::at(points[i], color));
        out.push(Vertex::at(points[(i + 1) % n], color));
    }
}

/// Plus-shaped marker
fn push_cross(out: &mut Vec<Vertex>, center: Vec2, half: f32, color: [f32; 4]) {
    out.push(Vertex::at(center - Vec2::new(half, 0.0), color));
    out.push(Vertex::at(center + Vec2::new(half, 0.0), color));
    out.push(Vertex::at(center - Vec2::new(0.0, half), color));
    out.push(Vertex::at(center + Vec2::new(0.0, half), color));
}

/// Line-list vertices for every enabled layer of every body
pub fn overlay_lines<'a, B: Bounded + 'a>(
    config: &DebugOverlayConfig,
    bodies: impl IntoIterator<Item = &'a B>,
) -> Vec<Vertex> {
    let mut out = Vec::new();
    if !config.any_enabled() {
        return out;
    }

    for body in bodies {
        if config.show_bounds {
            push_outline(&mut out, &body.bounds().corners(), config.bounds_color);
        }
        if config.show_rotated_bounds {
            push_outline(&mut out, body.bounds_r().points(), config.rotated_color);
        }
        if config.show_centroids && !body.bounds_r().is_empty() {
            push_cross(&mut out, body.bounds_r().centroid(), config.marker_size, config.centroid_color);
        }
        if config.show_origins {
            push_cross(&mut out, body.transform().position, config.marker_size, config.origin_color);
        }
    }

    out
}
