//! Ordered vertex list with cached edge vectors
//!
//! Vertex order is the perimeter winding and defines adjacency:
//! `edges[i] = points[(i + 1) % n] - points[i]`. Edges depend only on the
//! relative positions of the points, so a pure translation keeps them valid.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "PolygonData", into = "PolygonData")]
pub struct Polygon {
    points: Vec<Vec2>,
    edges: Vec<Vec2>,
}

/// Serialized form: points only, edges are rebuilt on load
#[derive(Serialize, Deserialize)]
struct PolygonData {
    points: Vec<Vec2>,
}

impl From<PolygonData> for Polygon {
    fn from(data: PolygonData) -> Self {
        Self::new(data.points)
    }
}

impl From<Polygon> for PolygonData {
    fn from(polygon: Polygon) -> Self {
        Self { points: polygon.points }
    }
}

impl Polygon {
    /// Store `points` in the given order and derive edges immediately
    pub fn new(points: Vec<Vec2>) -> Self {
        let mut polygon = Self {
            points,
            edges: Vec::new(),
        };
        polygon.build_edges();
        polygon
    }

    pub fn from_rect(rect: &Rect) -> Self {
        rect.to_polygon()
    }

    /// Recompute the edge list from the current point order
    pub fn build_edges(&mut self) {
        let n = self.points.len();
        self.edges.clear();
        if n < 2 {
            return;
        }
        self.edges.reserve(n);
        for i in 0..n {
            self.edges.push(self.points[(i + 1) % n] - self.points[i]);
        }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn edges(&self) -> &[Vec2] {
        &self.edges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a vertex at the end of the winding and rebuild edges
    pub fn push_point(&mut self, point: Vec2) {
        self.points.push(point);
        self.build_edges();
    }

    /// Replace every vertex and rebuild edges
    pub fn set_points(&mut self, points: Vec<Vec2>) {
        self.points = points;
        self.build_edges();
    }

    /// Translate every vertex in place; edges are left untouched
    pub fn offset(&mut self, dx: f32, dy: f32) {
        let delta = Vec2::new(dx, dy);
        for p in &mut self.points {
            *p += delta;
        }
    }

    /// Translated copy
    pub fn translated(&self, delta: Vec2) -> Self {
        let mut copy = self.clone();
        copy.offset(delta.x, delta.y);
        copy
    }

    /// Arithmetic mean of the vertices, zero for an empty polygon
    ///
    /// This is the vertex average, not the area centroid. The two agree for
    /// rectangles and regular polygons, which is what bounds produce.
    pub fn centroid(&self) -> Vec2 {
        if self.points.is_empty() {
            return Vec2::ZERO;
        }
        let sum: Vec2 = self.points.iter().copied().sum();
        sum / self.points.len() as f32
    }

    /// Axis-aligned hull, `None` for an empty polygon
    pub fn aabb(&self) -> Option<Rect> {
        Rect::from_points(self.points.iter().copied())
    }
}
