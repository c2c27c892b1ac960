//! Frame driver
//!
//! One call per animation frame at whatever cadence the host schedules.
//! Synchronous and deterministic for fixed inputs.

use super::collision::resolve_collisions;
use super::integrator::step;
use super::state::World;

/// Advance the world by one frame
///
/// Integrates every free body, then resolves body-body collisions. Does
/// nothing while stopped or paused (dragged bodies are moved by input events,
/// not here). Returns whether physics ran.
pub fn tick(world: &mut World) -> bool {
    if !world.running || world.paused {
        return false;
    }

    world.frame += 1;

    for body in &mut world.bodies {
        step(body, &world.bounds, &world.settings);
    }

    let contacts = resolve_collisions(&mut world.bodies, &world.bounds, world.settings.bounce_damping);
    if contacts > 0 {
        log::trace!("Frame {}: {contacts} contacts", world.frame);
    }

    true
}
