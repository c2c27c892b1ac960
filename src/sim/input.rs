//! Host input events
//!
//! The host forwards pointer and touch events here with positions already in
//! container space and a millisecond timestamp. Events run to completion
//! between frame ticks.

use glam::Vec2;

use super::body::PointerId;
use super::drag::{end_drag, start_drag, update_drag};
use super::state::World;

impl World {
    /// Grab a body with a pointer
    ///
    /// `target` is the body the host hit-tested; without one the top-most
    /// body under the pointer is used. A pointer holds one body at a time, so
    /// anything it already held is released first. Returns the grabbed id.
    pub fn on_pointer_down(
        &mut self,
        pointer: PointerId,
        pos: Vec2,
        target: Option<u32>,
        time_ms: f64,
    ) -> Option<u32> {
        let id = target.or_else(|| self.body_at(pos))?;
        let index = self.bodies.iter().position(|b| b.id == id)?;
        if self.bodies[index].is_dragging() {
            // Held already, by this pointer or another
            return None;
        }

        self.on_pointer_up(pointer);
        start_drag(&mut self.bodies[index], pointer, pos, time_ms);
        Some(id)
    }

    /// Move every body held by this pointer
    pub fn on_pointer_move(&mut self, pointer: PointerId, pos: Vec2, time_ms: f64) {
        for index in 0..self.bodies.len() {
            if self.bodies[index].dragged_by(pointer) {
                update_drag(&mut self.bodies, index, pos, &self.bounds, time_ms);
            }
        }
    }

    /// Release (throw) every body held by this pointer
    ///
    /// Returns how many bodies were released.
    pub fn on_pointer_up(&mut self, pointer: PointerId) -> usize {
        let settings = &self.settings;
        self.bodies
            .iter_mut()
            .filter(|b| b.dragged_by(pointer))
            .filter_map(|b| end_drag(b, settings))
            .count()
    }

    /// Touch down. Only a single touch point starts a drag.
    pub fn on_touch_start(&mut self, touches: &[Vec2], target: Option<u32>, time_ms: f64) -> Option<u32> {
        match touches {
            [pos] => self.on_pointer_down(PointerId::TOUCH, *pos, target, time_ms),
            _ => None,
        }
    }

    /// Touch move. Multi-touch gestures are ignored.
    pub fn on_touch_move(&mut self, touches: &[Vec2], time_ms: f64) {
        if let [pos] = touches {
            self.on_pointer_move(PointerId::TOUCH, *pos, time_ms);
        }
    }

    pub fn on_touch_end(&mut self) -> usize {
        self.on_pointer_up(PointerId::TOUCH)
    }
}
