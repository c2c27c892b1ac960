//! World state: the body registry and driver flags
//!
//! The host owns a `World` and feeds it input events and frame ticks. All
//! randomness comes from the seeded RNG so a seed plus an input script replays
//! identically.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::Body;
use super::bounds::Bounds;
use super::collision::separate_overlapping;
use super::scatter::scatter;
use crate::consts::{RANDOM_SPAWN_DROP, SPAWN_HEIGHT};
use crate::renderer::{BodyTransform, RenderSink};
use crate::settings::PhysicsSettings;

/// The simulation: every body plus the frame driver's flags
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Physics tuning
    pub settings: PhysicsSettings,
    /// Container size
    pub bounds: Bounds,
    /// Bodies in spawn order (later bodies draw on top)
    pub bodies: Vec<Body>,
    /// Frame driver is scheduled
    pub running: bool,
    /// Free bodies hold still while set
    pub paused: bool,
    /// Frames simulated since creation
    pub frame: u64,
    /// Next entity ID
    next_id: u32,
}

impl World {
    /// Create an empty world, stopped and paused
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::with_settings(width, height, seed, PhysicsSettings::default())
    }

    pub fn with_settings(width: f32, height: f32, seed: u64, settings: PhysicsSettings) -> Self {
        log::info!("World created: {width}x{height}, seed {seed}");
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings: settings.sanitized(),
            bounds: Bounds::new(width, height),
            bodies: Vec::new(),
            running: false,
            paused: true,
            frame: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_full(&self) -> bool {
        self.bodies.len() >= self.settings.max_bodies
    }

    pub fn body(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: u32) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Top-most body under a point
    pub fn body_at(&self, point: Vec2) -> Option<u32> {
        self.bodies.iter().rev().find(|b| b.contains(point)).map(|b| b.id)
    }

    /// Add a body at rest at `pos` (clamped into the container)
    ///
    /// Returns `None` when the registry is full.
    pub fn spawn_at(&mut self, pos: Vec2) -> Option<u32> {
        if self.is_full() {
            log::debug!("Spawn ignored: {} bodies already", self.bodies.len());
            return None;
        }
        let radius = self.settings.body_radius();
        let id = self.next_entity_id();
        let pos = self.bounds.clamp(pos, radius);
        self.bodies.push(Body::new(id, pos, radius, self.settings.density));
        log::debug!("Spawned body {id} at {pos:?}");
        Some(id)
    }

    /// Lay out `count` bodies evenly along the top of the container
    ///
    /// Returns the number actually spawned (the cap still applies).
    pub fn spawn_initial(&mut self, count: usize) -> usize {
        let count = count.min(self.settings.max_bodies.saturating_sub(self.bodies.len()));
        let spacing = self.bounds.width / (count + 1) as f32;
        (0..count)
            .filter_map(|i| self.spawn_at(Vec2::new(spacing * (i + 1) as f32, SPAWN_HEIGHT)))
            .count()
    }

    /// Drop a body in at a random spot along the top with a random toss
    pub fn add_random(&mut self) -> Option<u32> {
        if self.is_full() {
            log::debug!("Random spawn ignored: {} bodies already", self.bodies.len());
            return None;
        }
        let radius = self.settings.body_radius();
        let span = (self.bounds.width - 2.0 * radius).max(0.0);
        let pos = Vec2::new(
            self.rng.random::<f32>() * span + radius,
            radius + RANDOM_SPAWN_DROP,
        );
        let vel = Vec2::new(
            (self.rng.random::<f32>() - 0.5) * 10.0,
            self.rng.random::<f32>() * 3.0,
        );
        let spin = (self.rng.random::<f32>() - 0.5) * 5.0;

        let id = self.spawn_at(pos)?;
        if let Some(body) = self.body_mut(id) {
            body.vel = vel;
            body.angular_vel = spin;
        }
        Some(id)
    }

    /// Discard every body. Ids start over.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.next_id = 1;
    }

    /// Stop the driver and rebuild the same number of bodies in the
    /// initial layout. The host restarts the driver once it has settled.
    pub fn reset_soft(&mut self) {
        let count = self.bodies.len();
        self.stop();
        self.clear();
        self.spawn_initial(count);
        log::info!("Soft reset: {count} bodies");
    }

    /// Stop the driver and rebuild `count` bodies in the initial layout
    pub fn reset_hard(&mut self, count: usize) {
        self.stop();
        self.clear();
        let spawned = self.spawn_initial(count);
        log::info!("Hard reset: {spawned} bodies");
    }

    /// Adapt to a new container size
    ///
    /// Free bodies are stopped and clamped inside, then overlapping ones are
    /// pushed apart. Dragged bodies are only clamped.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
        for body in &mut self.bodies {
            if !body.is_dragging() {
                body.vel = Vec2::ZERO;
            }
            body.pos = self.bounds.clamp(body.pos, body.radius);
        }
        let passes = separate_overlapping(&mut self.bodies, &self.bounds);
        log::info!("Resized to {width}x{height} ({passes} separation passes)");
    }

    /// Apply random impulses to every free body (e.g. on scroll)
    pub fn scatter(&mut self, intensity: f32) -> usize {
        scatter(&mut self.bodies, intensity, &mut self.rng)
    }

    /// Start the frame driver. Returns false if it was already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        log::info!("Frame driver started");
        true
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("Frame driver stopped");
        }
        self.running = false;
    }

    /// Let bodies fall and make sure the driver runs
    pub fn unpause(&mut self) {
        self.paused = false;
        log::info!("Unpaused");
        self.start();
    }

    /// Push the current placement of every body to a renderer
    pub fn render<S: RenderSink>(&self, sink: &mut S) {
        for body in &self.bodies {
            sink.place(&BodyTransform::from_body(body));
        }
    }

    /// Snapshot of every body's placement
    pub fn transforms(&self) -> Vec<BodyTransform> {
        self.bodies.iter().map(BodyTransform::from_body).collect()
    }
}
