//! Roto Bounds headless demo
//!
//! Seeds a scene of rotated sprites, runs it at a fixed timestep and logs
//! culling and collision activity.
//!
//! Usage: `roto-bounds [settings.json] [seed] [frames]`

use roto_bounds::collision::polygon_collision;
use roto_bounds::consts::SIM_DT;
use roto_bounds::debug::overlay_lines;
use roto_bounds::{Bounded, Scene, Settings};

const DEFAULT_SEED: u64 = 0x5EED;
const DEFAULT_FRAMES: u64 = 600;
const BODY_COUNT: usize = 24;

fn main() {
    env_logger::init();
    log::info!("Roto Bounds demo starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_SEED);
    let frames = args.next().and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_FRAMES);

    let mut scene = Scene::random(seed, BODY_COUNT, settings);
    let mut total_contacts = 0usize;
    let mut overlay_vertices = 0usize;

    for _ in 0..frames {
        // Spin every body a little; bounds pick it up on the next update
        for (i, body) in scene.bodies_mut().iter_mut().enumerate() {
            let spin = if i % 2 == 0 { 0.8 } else { -0.5 };
            body.transform_mut().rotate_by(spin * SIM_DT);
        }
        scene.update(SIM_DT);

        total_contacts += scene.contacts().len();
        for contact in scene.contacts() {
            log::debug!(
                "frame {}: bodies {} and {} collide, mtv {:?}",
                scene.frame(),
                contact.a,
                contact.b,
                contact.result.minimum_translation_vector
            );
        }

        if scene.settings.debug.any_enabled() {
            let drawable = scene.drawable().iter().map(|&i| &scene.bodies()[i]);
            overlay_vertices += overlay_lines(&scene.settings.debug, drawable).len();
        }
    }

    // Sanity check the narrow phase on the final frame
    let bodies = scene.bodies();
    let overlapping = (0..bodies.len())
        .flat_map(|i| ((i + 1)..bodies.len()).map(move |j| (i, j)))
        .filter(|&(i, j)| polygon_collision(bodies[i].bounds_r(), bodies[j].bounds_r(), glam::Vec2::ZERO).intersect)
        .count();

    log::info!(
        "Ran {} frames: {} contacts total, {} drawable at end, {} overlapping at end, {} overlay vertices",
        scene.frame(),
        total_contacts,
        scene.drawable().len(),
        overlapping,
        overlay_vertices
    );
    println!(
        "frames={} contacts={} drawable={} overlapping={}",
        scene.frame(),
        total_contacts,
        scene.drawable().len(),
        overlapping
    );
}
