//! Random "wake up" impulses

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::body::Body;
use crate::consts::{SCATTER_FACTOR, SCATTER_MAX_FORCE};

/// Kick every free body in a random direction
///
/// Force scales with `intensity` (e.g. a scroll delta) up to a cap; each body
/// gets between half and all of it, plus a random spin of up to ±1. Existing
/// velocity is kept. Returns the number of bodies kicked.
pub fn scatter<R: Rng>(bodies: &mut [Body], intensity: f32, rng: &mut R) -> usize {
    let force_multiplier = (intensity * SCATTER_FACTOR).min(SCATTER_MAX_FORCE);
    let mut kicked = 0;

    for body in bodies.iter_mut().filter(|b| !b.is_dragging()) {
        let angle = rng.random::<f32>() * TAU;
        let force = (rng.random::<f32>() * 0.5 + 0.5) * force_multiplier;
        body.vel += Vec2::from_angle(angle) * force;
        body.angular_vel += (rng.random::<f32>() - 0.5) * 2.0;
        kicked += 1;
    }

    log::debug!("Scatter: intensity {intensity}, {kicked} bodies kicked");
    kicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::{DragGrip, PointerId};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn bodies(n: u32) -> Vec<Body> {
        (0..n)
            .map(|i| Body::new(i, Vec2::new(100.0 + i as f32 * 80.0, 100.0), 35.0, 0.1))
            .collect()
    }

    #[test]
    fn test_kick_magnitude_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut bodies = bodies(20);

        scatter(&mut bodies, 10.0, &mut rng);

        // 10 * 0.3 = 3, so each kick is in [1.5, 3]
        for b in &bodies {
            let speed = b.vel.length();
            assert!(speed >= 1.5 - 1e-4 && speed <= 3.0 + 1e-4, "speed {speed}");
            assert!(b.angular_vel.abs() <= 1.0);
        }
    }

    #[test]
    fn test_force_is_capped() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut bodies = bodies(20);

        scatter(&mut bodies, 10_000.0, &mut rng);

        for b in &bodies {
            assert!(b.vel.length() <= SCATTER_MAX_FORCE + 1e-4);
            assert!(b.vel.length() >= SCATTER_MAX_FORCE * 0.5 - 1e-4);
        }
    }

    #[test]
    fn test_additive_and_skips_dragged() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut bodies = bodies(2);
        bodies[0].vel = Vec2::new(100.0, 0.0);
        bodies[1].grip = Some(DragGrip {
            pointer: PointerId::MOUSE,
            offset: Vec2::ZERO,
        });

        let kicked = scatter(&mut bodies, 5.0, &mut rng);

        assert_eq!(kicked, 1);
        // 1.5 force at most, so the existing velocity dominates
        assert!(bodies[0].vel.x > 98.0);
        assert_eq!(bodies[1].vel, Vec2::ZERO);
        assert_eq!(bodies[1].angular_vel, 0.0);
    }

    #[test]
    fn test_same_seed_same_kicks() {
        let mut a = bodies(5);
        let mut b = bodies(5);
        scatter(&mut a, 12.0, &mut Pcg32::seed_from_u64(42));
        scatter(&mut b, 12.0, &mut Pcg32::seed_from_u64(42));
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.vel, y.vel);
            assert_eq!(x.angular_vel, y.angular_vel);
        }
    }
}
