//! Visibility culling against a viewport or camera

use super::camera::Camera;
use crate::geom::Rect;

/// Axis-aligned visibility tests
///
/// `margin` inflates the visible area on every side so entities just off
/// screen keep updating (useful for sprites whose art overhangs their bounds).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewCuller {
    pub margin: f32,
}

impl ViewCuller {
    pub fn new(margin: f32) -> Self {
        Self { margin }
    }

    /// True if `bounds` overlaps `viewport` (touching edges count)
    pub fn is_visible(&self, viewport: &Rect, bounds: &Rect) -> bool {
        viewport.inflate(self.margin, self.margin).intersects(bounds)
    }

    /// True if `bounds` overlaps what `camera` currently shows
    pub fn is_visible_to(&self, camera: &Camera, bounds: &Rect) -> bool {
        self.is_visible(&camera.visible_rect(), bounds)
    }

    /// Indices of visible bounds, in input order
    pub fn visible_indices<'a>(&self, viewport: &Rect, bounds: impl IntoIterator<Item = &'a Rect>) -> Vec<usize> {
        let area = viewport.inflate(self.margin, self.margin);
        bounds
            .into_iter()
            .enumerate()
            .filter_map(|(i, b)| area.intersects(b).then_some(i))
            .collect()
    }
}
