//! Pointer drag handling
//!
//! A dragged body follows the pointer exactly (keeping the grab offset) and
//! always wins against free bodies: it is pushed out of any overlap by the
//! full amount, while the body it ran into gets shoved out of the way.

use glam::Vec2;

use super::body::{Body, DragGrip, PointerId};
use super::bounds::Bounds;
use super::collision::disk_contact;
use super::throw::release_velocity;
use crate::consts::{DRAG_NUDGE, DRAG_PUSH_STRENGTH};
use crate::settings::PhysicsSettings;

/// Grab a body. The grab point stays fixed relative to the body.
pub fn start_drag(body: &mut Body, pointer: PointerId, pointer_pos: Vec2, time_ms: f64) {
    body.grip = Some(DragGrip {
        pointer,
        offset: body.pos - pointer_pos,
    });
    body.drag_history.restart(body.pos, time_ms);
    log::debug!("Drag start: body {} by pointer {:?}", body.id, pointer);
}

/// Move the dragged body at `index` toward the pointer
///
/// No-op for a body that is not being dragged.
pub fn update_drag(bodies: &mut [Body], index: usize, pointer_pos: Vec2, bounds: &Bounds, time_ms: f64) {
    let Some(dragged) = bodies.get(index) else {
        return;
    };
    let Some(grip) = dragged.grip else {
        return;
    };

    let desired = bounds.clamp(pointer_pos + grip.offset, dragged.radius);
    let resolved = resolve_drag_collisions(bodies, index, desired, bounds);

    let body = &mut bodies[index];
    body.pos = resolved;
    body.drag_history.push(resolved, time_ms);
}

/// Push the dragged body's desired position out of every free body it
/// overlaps, shoving those bodies away in turn
fn resolve_drag_collisions(bodies: &mut [Body], index: usize, desired: Vec2, bounds: &Bounds) -> Vec2 {
    let radius = bodies[index].radius;
    let mut resolved = desired;

    for (i, other) in bodies.iter_mut().enumerate() {
        if i == index || other.is_dragging() {
            continue;
        }
        // Normal points from the other body toward the dragged one
        let Some(contact) = disk_contact(other.pos, other.radius, resolved, radius) else {
            continue;
        };

        resolved += contact.normal * contact.overlap;

        // Kick runs along the contact normal, toward the dragged body
        other.vel += contact.normal * DRAG_PUSH_STRENGTH;
        other.pos -= contact.normal * (contact.overlap * DRAG_NUDGE);
        other.pos = bounds.clamp(other.pos, other.radius);
    }

    bounds.clamp(resolved, radius)
}

/// Let go of a body, turning its recent motion into a throw
///
/// Returns the release velocity, or `None` if the body was not being dragged.
pub fn end_drag(body: &mut Body, settings: &PhysicsSettings) -> Option<Vec2> {
    body.grip.take()?;

    let velocity = release_velocity(
        &body.drag_history,
        settings.velocity_multiplier,
        settings.max_throw_velocity,
    );
    body.vel = velocity;
    body.drag_history.clear();

    log::debug!("Drag end: body {} thrown at {:?}", body.id, velocity);
    Some(velocity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(id: u32, x: f32, y: f32) -> Body {
        Body::new(id, Vec2::new(x, y), 35.0, 0.1)
    }

    #[test]
    fn test_grab_offset_is_kept() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut bodies = vec![body(1, 100.0, 100.0)];

        start_drag(&mut bodies[0], PointerId::MOUSE, Vec2::new(110.0, 90.0), 0.0);
        assert_eq!(bodies[0].drag_history.len(), 1);

        update_drag(&mut bodies, 0, Vec2::new(310.0, 290.0), &bounds, 16.0);
        assert_eq!(bodies[0].pos, Vec2::new(300.0, 300.0));
        assert_eq!(bodies[0].drag_history.len(), 2);
    }

    #[test]
    fn test_drag_is_clamped_to_container() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut bodies = vec![body(1, 100.0, 100.0)];

        start_drag(&mut bodies[0], PointerId::MOUSE, Vec2::new(100.0, 100.0), 0.0);
        update_drag(&mut bodies, 0, Vec2::new(-200.0, 5000.0), &bounds, 16.0);

        assert_eq!(bodies[0].pos, Vec2::new(35.0, 565.0));
    }

    #[test]
    fn test_update_without_grab_is_noop() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut bodies = vec![body(1, 100.0, 100.0)];

        update_drag(&mut bodies, 0, Vec2::new(400.0, 400.0), &bounds, 16.0);
        update_drag(&mut bodies, 7, Vec2::new(400.0, 400.0), &bounds, 16.0);

        assert_eq!(bodies[0].pos, Vec2::new(100.0, 100.0));
        assert!(bodies[0].drag_history.is_empty());
    }

    #[test]
    fn test_dragged_body_shoves_free_body() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut bodies = vec![body(1, 100.0, 300.0), body(2, 300.0, 300.0)];

        start_drag(&mut bodies[0], PointerId::MOUSE, Vec2::new(100.0, 300.0), 0.0);
        // Pointer lands 40 units left of the free body: 30 overlap
        update_drag(&mut bodies, 0, Vec2::new(260.0, 300.0), &bounds, 16.0);

        // Dragged body takes full priority
        assert!((bodies[0].pos.x - 230.0).abs() < 1e-4);
        // Free body nudged right by 0.3 * overlap, kicked along the normal
        assert!((bodies[1].pos.x - 309.0).abs() < 1e-4);
        assert!((bodies[1].vel.x + DRAG_PUSH_STRENGTH).abs() < 1e-6);
        assert_eq!(bodies[1].vel.y, 0.0);
    }

    #[test]
    fn test_coincident_centers_do_not_push() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut bodies = vec![body(1, 100.0, 300.0), body(2, 300.0, 300.0)];

        start_drag(&mut bodies[0], PointerId::MOUSE, Vec2::new(100.0, 300.0), 0.0);
        update_drag(&mut bodies, 0, Vec2::new(300.0, 300.0), &bounds, 16.0);

        // No direction to push along
        assert_eq!(bodies[0].pos, Vec2::new(300.0, 300.0));
        assert_eq!(bodies[1].pos, Vec2::new(300.0, 300.0));
        assert_eq!(bodies[1].vel, Vec2::ZERO);
    }

    #[test]
    fn test_other_dragged_bodies_are_ignored() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut bodies = vec![body(1, 100.0, 300.0), body(2, 300.0, 300.0)];

        start_drag(&mut bodies[0], PointerId::MOUSE, Vec2::new(100.0, 300.0), 0.0);
        start_drag(&mut bodies[1], PointerId::TOUCH, Vec2::new(300.0, 300.0), 0.0);
        update_drag(&mut bodies, 0, Vec2::new(260.0, 300.0), &bounds, 16.0);

        assert_eq!(bodies[0].pos.x, 260.0);
        assert_eq!(bodies[1].pos.x, 300.0);
    }

    #[test]
    fn test_history_is_bounded() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut bodies = vec![body(1, 100.0, 100.0)];

        start_drag(&mut bodies[0], PointerId::MOUSE, Vec2::new(100.0, 100.0), 0.0);
        for i in 1..20 {
            update_drag(&mut bodies, 0, Vec2::new(100.0 + i as f32, 100.0), &bounds, i as f64 * 16.0);
        }

        assert_eq!(bodies[0].drag_history.len(), 5);
    }

    #[test]
    fn test_release_throws_and_clears() {
        let settings = PhysicsSettings::default();
        let bounds = Bounds::new(800.0, 600.0);
        let mut bodies = vec![body(1, 100.0, 300.0)];

        start_drag(&mut bodies[0], PointerId::MOUSE, Vec2::new(100.0, 300.0), 0.0);
        update_drag(&mut bodies, 0, Vec2::new(110.0, 300.0), &bounds, 100.0);
        let thrown = end_drag(&mut bodies[0], &settings).unwrap();

        assert!((thrown.x - 15.0).abs() < 1e-4);
        assert_eq!(bodies[0].vel, thrown);
        assert!(!bodies[0].is_dragging());
        assert!(bodies[0].drag_history.is_empty());

        // Second release is a no-op
        assert!(end_drag(&mut bodies[0], &settings).is_none());
        assert_eq!(bodies[0].vel, thrown);
    }

    #[test]
    fn test_click_without_move_drops_dead() {
        let settings = PhysicsSettings::default();
        let mut b = body(1, 100.0, 300.0);
        b.vel = Vec2::new(4.0, -2.0);

        start_drag(&mut b, PointerId::MOUSE, Vec2::new(100.0, 300.0), 0.0);
        let thrown = end_drag(&mut b, &settings).unwrap();

        assert_eq!(thrown, Vec2::ZERO);
        assert_eq!(b.vel, Vec2::ZERO);
    }
}
