//! Things that have bounds
//!
//! Each entity owns its transform and a cached [`Bounds`]. Writing to the
//! transform never refreshes the cache; call `recompute_bounds` once after
//! the frame's mutations so bounds are never built from a half-updated
//! transform.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geom::{Bounds, Polygon, Rect, Transform, compute_bounds, compute_outline_bounds};

/// Capability interface shared by every bounded entity
pub trait Bounded {
    fn transform(&self) -> &Transform;
    fn transform_mut(&mut self) -> &mut Transform;
    /// Cached bounds from the last `recompute_bounds`
    fn cached_bounds(&self) -> &Bounds;
    /// Rebuild the cached bounds from the current transform
    fn recompute_bounds(&mut self);

    /// Axis-aligned bounds
    fn bounds(&self) -> &Rect {
        &self.cached_bounds().aabb
    }

    /// Rotated outline ("BoundsR")
    fn bounds_r(&self) -> &Polygon {
        &self.cached_bounds().rotated
    }
}

/// Plain rectangular sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub transform: Transform,
    #[serde(skip)]
    bounds: Bounds,
}

impl Sprite {
    pub fn new(transform: Transform) -> Self {
        let bounds = compute_bounds(&transform, Vec2::ZERO);
        Self { transform, bounds }
    }
}

impl Bounded for Sprite {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn cached_bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn recompute_bounds(&mut self) {
        self.bounds = compute_bounds(&self.transform, Vec2::ZERO);
    }
}

/// Sprite drawn from a sequence of frames whose anchors differ
///
/// `frame_alignment[i]` is how far frame `i`'s anchor sits from the nominal
/// origin, in unscaled units. Which frame is current is decided elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatedSprite {
    pub transform: Transform,
    frame_alignment: Vec<Vec2>,
    frame: usize,
    #[serde(skip)]
    bounds: Bounds,
}

impl AnimatedSprite {
    pub fn new(transform: Transform, frame_alignment: Vec<Vec2>) -> Self {
        let mut sprite = Self {
            transform,
            frame_alignment,
            frame: 0,
            bounds: Bounds::default(),
        };
        sprite.recompute_bounds();
        sprite
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn frame_count(&self) -> usize {
        self.frame_alignment.len()
    }

    /// Select a frame, wrapping past the end
    pub fn set_frame(&mut self, frame: usize) {
        self.frame = match self.frame_alignment.len() {
            0 => 0,
            n => frame % n,
        };
    }

    /// Alignment correction of the current frame
    pub fn alignment(&self) -> Vec2 {
        self.frame_alignment.get(self.frame).copied().unwrap_or(Vec2::ZERO)
    }
}

impl Bounded for AnimatedSprite {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn cached_bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn recompute_bounds(&mut self) {
        self.bounds = compute_bounds(&self.transform, self.alignment());
    }
}

/// Convex outline given in local (unscaled) coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugPolygon {
    pub transform: Transform,
    local_points: Vec<Vec2>,
    #[serde(skip)]
    bounds: Bounds,
}

impl DebugPolygon {
    pub fn new(transform: Transform, local_points: Vec<Vec2>) -> Self {
        let bounds = compute_outline_bounds(&transform, &local_points);
        Self {
            transform,
            local_points,
            bounds,
        }
    }

    /// Regular n-gon inscribed in the transform's logical size
    pub fn regular(transform: Transform, sides: usize) -> Self {
        let half = transform.size * 0.5;
        let points = (0..sides.max(3))
            .map(|i| {
                let theta = i as f32 / sides.max(3) as f32 * std::f32::consts::TAU;
                half + Vec2::new(theta.cos(), theta.sin()) * half
            })
            .collect();
        Self::new(transform, points)
    }

    pub fn local_points(&self) -> &[Vec2] {
        &self.local_points
    }
}

impl Bounded for DebugPolygon {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn cached_bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn recompute_bounds(&mut self) {
        self.bounds = compute_outline_bounds(&self.transform, &self.local_points);
    }
}

/// Any scene entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Body {
    Sprite(Sprite),
    Animated(AnimatedSprite),
    Outline(DebugPolygon),
}

impl Body {
    fn inner(&self) -> &dyn Bounded {
        match self {
            Body::Sprite(s) => s,
            Body::Animated(a) => a,
            Body::Outline(p) => p,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Bounded {
        match self {
            Body::Sprite(s) => s,
            Body::Animated(a) => a,
            Body::Outline(p) => p,
        }
    }
}

impl Bounded for Body {
    fn transform(&self) -> &Transform {
        self.inner().transform()
    }

    fn transform_mut(&mut self) -> &mut Transform {
        self.inner_mut().transform_mut()
    }

    fn cached_bounds(&self) -> &Bounds {
        self.inner().cached_bounds()
    }

    fn recompute_bounds(&mut self) {
        self.inner_mut().recompute_bounds();
    }
}

impl From<Sprite> for Body {
    fn from(s: Sprite) -> Self {
        Body::Sprite(s)
    }
}

impl From<AnimatedSprite> for Body {
    fn from(a: AnimatedSprite) -> Self {
        Body::Animated(a)
    }
}

impl From<DebugPolygon> for Body {
    fn from(p: DebugPolygon) -> Self {
        Body::Outline(p)
    }
}
