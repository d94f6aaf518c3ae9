//! 2D camera with zoom about an anchor point
//!
//! Screen = (world - position - zoom_offset) * zoom + zoom_offset
//!
//! `position` is the world point shown at the viewport's top-left when zoom
//! is 1. `zoom_offset` is the screen point that stays fixed while zooming
//! (usually the viewport center).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MIN_ZOOM;
use crate::geom::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec2,
    zoom: f32,
    pub zoom_offset: Vec2,
    /// Screen-space viewport (pixels)
    pub viewport: Rect,
}

impl Camera {
    /// Unzoomed camera anchored at the viewport center
    pub fn new(viewport: Rect) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            zoom_offset: viewport.center(),
            viewport,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set zoom, clamping non-positive or NaN values to `MIN_ZOOM`
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_nan() || zoom < MIN_ZOOM {
            log::warn!("Camera zoom {zoom} out of range, clamping to {MIN_ZOOM}");
            self.zoom = MIN_ZOOM;
        } else {
            self.zoom = zoom;
        }
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.set_zoom(zoom);
        self
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position - self.zoom_offset) * self.zoom + self.zoom_offset
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.zoom_offset) / self.zoom + self.zoom_offset + self.position
    }

    /// World-space rectangle covered by the viewport
    ///
    /// Zooming in (zoom > 1) shrinks it by 1/zoom around the zoom anchor.
    pub fn visible_rect(&self) -> Rect {
        let top_left = self.screen_to_world(self.viewport.location());
        Rect::from_location_size(top_left, self.viewport.size() / self.zoom)
    }
}
