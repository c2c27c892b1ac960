//! Disk-disk collision detection and response
//!
//! Positional correction splits the overlap by mass, then an impulse along the
//! contact normal handles the velocities. Coincident centers have no defined
//! normal and are skipped; the next frame's motion separates them.

use glam::Vec2;

use super::body::Body;
use super::bounds::Bounds;
use crate::consts::{COLLISION_DAMPING, MIN_SEPARATION, ROTATIONAL_COUPLING, SEPARATION_ITERATIONS};

/// Overlap between two disks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from the first disk's center toward the second
    pub normal: Vec2,
    /// Penetration depth, always positive
    pub overlap: f32,
}

/// Detect overlap between disks at `a` and `b`
///
/// Returns `None` when the disks are apart or touching, and when the centers
/// coincide (no usable normal).
pub fn disk_contact(a: Vec2, ra: f32, b: Vec2, rb: f32) -> Option<Contact> {
    let delta = b - a;
    let distance = delta.length();
    let min_distance = ra + rb;

    if distance >= min_distance || distance <= 0.0 {
        return None;
    }

    Some(Contact {
        normal: delta / distance,
        overlap: min_distance - distance,
    })
}

/// Borrow two distinct bodies mutably
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// Resolve every overlapping pair of free bodies (O(n²))
///
/// Returns the number of contacts handled.
pub fn resolve_collisions(bodies: &mut [Body], bounds: &Bounds, restitution: f32) -> usize {
    let mut contacts = 0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (a, b) = pair_mut(bodies, i, j);
            if a.is_dragging() || b.is_dragging() {
                continue;
            }
            if let Some(contact) = disk_contact(a.pos, a.radius, b.pos, b.radius) {
                resolve_pair(a, b, contact, bounds, restitution);
                contacts += 1;
            }
        }
    }
    contacts
}

/// Separate and bounce one overlapping pair
pub fn resolve_pair(a: &mut Body, b: &mut Body, contact: Contact, bounds: &Bounds, restitution: f32) {
    separate(a, b, contact, bounds);
    apply_impulse(a, b, contact.normal, restitution);
}

/// Push the pair apart along the normal; heavier bodies move less
fn separate(a: &mut Body, b: &mut Body, contact: Contact, bounds: &Bounds) {
    let Contact { normal, overlap } = contact;
    let total_mass = a.mass + b.mass;

    a.pos -= normal * overlap * (b.mass / total_mass);
    b.pos += normal * overlap * (a.mass / total_mass);

    a.pos = bounds.clamp(a.pos, a.radius);
    b.pos = bounds.clamp(b.pos, b.radius);
}

/// Velocity response along the contact normal
fn apply_impulse(a: &mut Body, b: &mut Body, normal: Vec2, restitution: f32) {
    let relative_vel = b.vel - a.vel;
    let vel_along_normal = relative_vel.dot(normal);

    // Already separating
    if vel_along_normal > 0.0 {
        return;
    }

    // Resting contact: nudge apart instead of a vanishing impulse
    if vel_along_normal.abs() < MIN_SEPARATION {
        a.vel -= normal * MIN_SEPARATION;
        b.vel += normal * MIN_SEPARATION;
        return;
    }

    let j = -(1.0 + restitution) * vel_along_normal / (1.0 / a.mass + 1.0 / b.mass);
    let impulse = normal * j;
    a.vel -= impulse / a.mass;
    b.vel += impulse / b.mass;

    // Cheap spin from the tangential part of the hit
    let angular_impulse = relative_vel.perp_dot(normal) * ROTATIONAL_COUPLING;
    a.angular_vel -= angular_impulse / a.mass;
    b.angular_vel += angular_impulse / b.mass;

    a.vel *= COLLISION_DAMPING;
    b.vel *= COLLISION_DAMPING;
}

/// Iteratively push overlapping free bodies apart by half the overlap each
///
/// Used after a resize, when bodies may have been clamped on top of each
/// other. Stops early once a pass finds no overlap. Returns the number of
/// passes run.
pub fn separate_overlapping(bodies: &mut [Body], bounds: &Bounds) -> usize {
    let mut passes = 0;
    for _ in 0..SEPARATION_ITERATIONS {
        passes += 1;
        let mut has_overlap = false;

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (a, b) = pair_mut(bodies, i, j);
                if a.is_dragging() || b.is_dragging() {
                    continue;
                }
                let Some(contact) = disk_contact(a.pos, a.radius, b.pos, b.radius) else {
                    continue;
                };
                has_overlap = true;

                let shift = contact.normal * (contact.overlap * 0.5);
                a.pos = bounds.clamp(a.pos - shift, a.radius);
                b.pos = bounds.clamp(b.pos + shift, b.radius);
            }
        }

        if !has_overlap {
            break;
        }
    }
    passes
}
