//! Physics simulation module
//!
//! Everything that moves bodies lives here. This module stays pure:
//! - One tick per host frame, per-frame units throughout
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod body;
pub mod bounds;
pub mod collision;
pub mod drag;
pub mod input;
pub mod integrator;
pub mod scatter;
pub mod state;
pub mod throw;
pub mod tick;

pub use body::{Body, DragGrip, DragHistory, DragSample, PointerId};
pub use bounds::Bounds;
pub use collision::{Contact, disk_contact, resolve_collisions, separate_overlapping};
pub use drag::{end_drag, start_drag, update_drag};
pub use integrator::step;
pub use scatter::scatter;
pub use state::World;
pub use throw::release_velocity;
pub use tick::tick;
