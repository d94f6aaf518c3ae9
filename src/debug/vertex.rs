//! Vertex type for debug line buffers

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// 2D vertex with position and color, ready for a GPU line-list buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(p: Vec2, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }
}

/// Default overlay colors
pub mod colors {
    pub const BOUNDS: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
    pub const ROTATED_BOUNDS: [f32; 4] = [1.0, 0.4, 0.2, 1.0];
    pub const CENTROID: [f32; 4] = [0.9, 0.85, 0.3, 1.0];
    pub const ORIGIN: [f32; 4] = [0.4, 0.7, 1.0, 1.0];
}
