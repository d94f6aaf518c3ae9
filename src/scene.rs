//! Per-frame scene update
//!
//! Order each frame:
//! 1. integrate velocities (records old positions)
//! 2. recompute every entity's bounds once
//! 3. rebuild the drawable list from the camera's visible area
//! 4. test every pair (no broad phase) and record contacts
//! 5. optionally bounce colliding pairs and keep bodies inside the arena
//!
//! Single-threaded: `update` must run on the thread that owns the scene.
//! A background loader may build a new `Scene` but must not touch this one.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::collision::{CollisionResult, bounce_inside, bounce_velocity, bounds_collision};
use crate::entity::{AnimatedSprite, Body, Bounded, DebugPolygon, Sprite};
use crate::geom::{Rect, Transform};
use crate::settings::Settings;
use crate::view::{Camera, ViewCuller};

/// One colliding pair found during an update (`a < b`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub a: usize,
    pub b: usize,
    pub result: CollisionResult,
}

#[derive(Debug, Clone)]
pub struct Scene {
    bodies: Vec<Body>,
    pub camera: Camera,
    pub settings: Settings,
    /// Bodies bounce off these walls when set
    pub arena: Option<Rect>,
    drawable: Vec<usize>,
    contacts: Vec<Contact>,
    frame: u64,
}

impl Scene {
    pub fn new(settings: Settings) -> Self {
        let viewport = Rect::new(0.0, 0.0, settings.viewport_width, settings.viewport_height);
        Self {
            bodies: Vec::new(),
            camera: Camera::new(viewport),
            settings,
            arena: None,
            drawable: Vec::new(),
            contacts: Vec::new(),
            frame: 0,
        }
    }

    /// Deterministic scene of `count` mixed bodies scattered over the viewport
    pub fn random(seed: u64, count: usize, settings: Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut scene = Self::new(settings);
        let area = scene.camera.viewport;
        scene.arena = Some(area);

        for i in 0..count {
            let size = Vec2::new(rng.random_range(8.0..48.0), rng.random_range(8.0..48.0));
            // Viewports narrower than two bodies collapse the range to its low end
            let (x_lo, y_lo) = (area.left() + size.x, area.top() + size.y);
            let position = Vec2::new(
                rng.random_range(x_lo..=(area.right() - size.x).max(x_lo)),
                rng.random_range(y_lo..=(area.bottom() - size.y).max(y_lo)),
            );
            let velocity = Vec2::new(rng.random_range(-120.0..120.0), rng.random_range(-120.0..120.0));
            let transform = Transform::new(position, size)
                .centered()
                .with_rotation(rng.random_range(-std::f32::consts::PI..std::f32::consts::PI))
                .with_velocity(velocity);

            let body: Body = match i % 3 {
                0 => Sprite::new(transform).into(),
                1 => AnimatedSprite::new(transform, vec![Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)]).into(),
                _ => DebugPolygon::regular(transform, rng.random_range(3..8)).into(),
            };
            scene.spawn(body);
        }

        log::info!("Scene seeded with {} bodies (seed {seed})", scene.bodies.len());
        scene
    }

    /// Add a body, returning its index
    pub fn spawn(&mut self, body: impl Into<Body>) -> usize {
        let mut body = body.into();
        body.recompute_bounds();
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access; bounds refresh on the next `update`
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Indices of bodies visible after the last update
    pub fn drawable(&self) -> &[usize] {
        &self.drawable
    }

    /// Pairs found colliding in the last update
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance one fixed step
    pub fn update(&mut self, dt: f32) {
        self.frame += 1;

        for body in &mut self.bodies {
            body.transform_mut().integrate(dt);
            body.recompute_bounds();
        }

        self.rebuild_drawable();
        self.find_contacts(dt);

        if self.settings.collision.bounce {
            self.resolve_contacts();
        }
        if let Some(arena) = self.arena {
            self.keep_inside(arena);
        }

        log::debug!(
            "frame {}: {} drawable, {} contacts",
            self.frame,
            self.drawable.len(),
            self.contacts.len()
        );
    }

    fn rebuild_drawable(&mut self) {
        self.drawable.clear();
        if !self.settings.culling.enabled {
            self.drawable.extend(0..self.bodies.len());
            return;
        }
        let culler = ViewCuller::new(self.settings.culling.margin);
        let visible = self.camera.visible_rect();
        self.drawable = culler.visible_indices(&visible, self.bodies.iter().map(|b| b.bounds()));
    }

    fn find_contacts(&mut self, dt: f32) {
        self.contacts.clear();
        let cfg = self.settings.collision;

        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let (a, b) = (&self.bodies[i], &self.bodies[j]);
                let relative = if cfg.predict_with_velocity {
                    (a.transform().velocity - b.transform().velocity) * dt
                } else {
                    Vec2::ZERO
                };
                let result = bounds_collision(
                    a.cached_bounds(),
                    b.cached_bounds(),
                    relative,
                    cfg.use_rotated_bounds,
                );
                let hit = if cfg.predict_with_velocity {
                    result.will_intersect
                } else {
                    result.intersect
                };
                if hit {
                    self.contacts.push(Contact { a: i, b: j, result });
                }
            }
        }
    }

    /// Split the translation vector between both bodies and invert velocities
    fn resolve_contacts(&mut self) {
        for contact in &self.contacts {
            let mtv = contact.result.minimum_translation_vector;
            if mtv == Vec2::ZERO {
                continue;
            }
            {
                let ta = self.bodies[contact.a].transform_mut();
                ta.velocity = bounce_velocity(ta.velocity, mtv);
                ta.position += mtv * 0.5;
            }
            {
                let tb = self.bodies[contact.b].transform_mut();
                tb.velocity = bounce_velocity(tb.velocity, -mtv);
                tb.position -= mtv * 0.5;
            }
        }
        for contact in &self.contacts {
            self.bodies[contact.a].recompute_bounds();
            self.bodies[contact.b].recompute_bounds();
        }
    }

    fn keep_inside(&mut self, arena: Rect) {
        for body in &mut self.bodies {
            let hull = body.bounds_r().aabb().unwrap_or(*body.bounds());
            let t = body.transform_mut();
            let (velocity, correction) = bounce_inside(&hull, &arena, t.velocity);
            t.velocity = velocity;
            if correction != Vec2::ZERO {
                t.position += correction;
                body.recompute_bounds();
            }
        }
    }
}
