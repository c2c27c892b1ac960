//! Per-frame integration for free bodies
//!
//! Semi-implicit Euler with per-frame units: forces, friction, position, then
//! wall response and a final clamp.

use super::body::Body;
use super::bounds::Bounds;
use crate::clamp_axis;
use crate::consts::{REST_DAMPING, REST_SPEED};
use crate::settings::PhysicsSettings;

/// Advance one free body by one frame. Dragged bodies are left untouched.
pub fn step(body: &mut Body, bounds: &Bounds, settings: &PhysicsSettings) {
    if body.is_dragging() {
        return;
    }

    body.vel.y += settings.gravity;
    body.vel *= settings.friction;
    body.pos += body.vel;

    // Rest settling
    if body.vel.length() < REST_SPEED {
        body.vel *= REST_DAMPING;
    }

    bounce_off_walls(body, bounds, settings);

    // Corners can violate both axes in one frame
    body.pos.x = clamp_axis(body.pos.x, body.radius, bounds.width);
    body.pos.y = clamp_axis(body.pos.y, body.radius, bounds.height);

    body.rotation += body.angular_vel;
}

/// Reflect off the container walls, each axis independently
fn bounce_off_walls(body: &mut Body, bounds: &Bounds, settings: &PhysicsSettings) {
    let r = body.radius;
    let damping = settings.bounce_damping;

    if body.pos.x - r <= 0.0 {
        body.pos.x = r;
        body.vel.x = -body.vel.x * damping;
        body.angular_vel = -body.angular_vel;
    } else if body.pos.x + r >= bounds.width {
        body.pos.x = bounds.width - r;
        body.vel.x = -body.vel.x * damping;
        body.angular_vel = -body.angular_vel;
    }

    if body.pos.y - r <= 0.0 {
        body.pos.y = r;
        body.vel.y = -body.vel.y * damping;
    } else if body.pos.y + r >= bounds.height {
        body.pos.y = bounds.height - r;
        body.vel.y = -body.vel.y * damping;
        // Floor drag
        body.vel.x *= settings.ground_friction;
        body.angular_vel *= settings.ground_friction;
    }
}
