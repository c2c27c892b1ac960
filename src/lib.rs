//! Ball Toss - draggable, throwable disks in a bounded 2D viewport
//!
//! Core modules:
//! - `sim`: Per-frame physics (integration, collisions, drag and throw)
//! - `renderer`: Renderer-agnostic transform extraction
//! - `platform`: Browser bindings (wasm32 only)
//! - `settings`: Physics tuning with LocalStorage persistence

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use renderer::{BodyTransform, RenderSink};
pub use settings::PhysicsSettings;
pub use sim::{Body, Bounds, PointerId, World, tick};

/// Physics configuration constants
///
/// Velocities are in units per frame, accelerations in units per frame².
pub mod consts {
    /// Downward acceleration applied every frame
    pub const GRAVITY: f32 = 0.4;
    /// Air friction (velocity multiplier per frame)
    pub const FRICTION: f32 = 0.98;
    /// Extra horizontal and spin drag while touching the floor
    pub const GROUND_FRICTION: f32 = 0.99;
    /// Restitution for wall bounces and body-body impulses
    pub const BOUNCE_DAMPING: f32 = 0.95;

    /// Throw speed cap
    pub const MAX_THROW_VELOCITY: f32 = 15.0;
    /// Scale from drag speed (units/s) to throw velocity (units/frame)
    pub const VELOCITY_MULTIPLIER: f32 = 0.3;
    /// Number of trailing drag samples used to estimate a throw
    pub const THROW_WINDOW: usize = 3;
    /// Drag samples kept per body
    pub const DRAG_HISTORY_CAPACITY: usize = 5;

    /// Body defaults
    pub const BODY_DIAMETER: f32 = 70.0;
    pub const BODY_RADIUS: f32 = BODY_DIAMETER / 2.0;
    /// mass = π·r²·density
    pub const MASS_DENSITY: f32 = 0.1;
    /// Spawn requests beyond this are ignored
    pub const MAX_BODIES: usize = 40;
    /// Bodies created by a hard reset when no count is given
    pub const DEFAULT_HARD_RESET_COUNT: usize = 4;

    /// Below this speed a free body gets extra damping so it settles
    pub const REST_SPEED: f32 = 0.1;
    pub const REST_DAMPING: f32 = 0.9;

    /// Energy bleed applied after each body-body impulse
    pub const COLLISION_DAMPING: f32 = 0.98;
    /// Closing speeds below this get a fixed nudge instead of an impulse
    pub const MIN_SEPARATION: f32 = 0.1;
    /// Tangential relative velocity to spin conversion
    pub const ROTATIONAL_COUPLING: f32 = 0.1;

    /// Velocity given to a body shoved by a dragged body
    pub const DRAG_PUSH_STRENGTH: f32 = 0.5;
    /// Fraction of the overlap a shoved body is moved out of the way
    pub const DRAG_NUDGE: f32 = 0.3;

    /// Scatter force per unit of trigger intensity
    pub const SCATTER_FACTOR: f32 = 0.3;
    pub const SCATTER_MAX_FORCE: f32 = 8.0;

    /// Overlap separation passes run after a resize
    pub const SEPARATION_ITERATIONS: usize = 10;

    /// Initial layout height (center y)
    pub const SPAWN_HEIGHT: f32 = 50.0;
    /// Random spawns appear this far below the top edge
    pub const RANDOM_SPAWN_DROP: f32 = 10.0;
}

/// Clamp a coordinate into `[radius, extent - radius]`.
///
/// Falls back to `radius` when the extent is narrower than the body.
#[inline]
pub fn clamp_axis(value: f32, radius: f32, extent: f32) -> f32 {
    value.min(extent - radius).max(radius)
}

/// Mass of a disk of the given radius
#[inline]
pub fn disk_mass(radius: f32, density: f32) -> f32 {
    std::f32::consts::PI * radius * radius * density
}
