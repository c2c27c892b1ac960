//! Simulated disks and their drag bookkeeping

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DRAG_HISTORY_CAPACITY;
use crate::disk_mass;

/// Identifies the input source driving a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub u32);

impl PointerId {
    /// The mouse (or primary pen)
    pub const MOUSE: PointerId = PointerId(0);
    /// The single touch point the touch surface tracks
    pub const TOUCH: PointerId = PointerId(1);
}

/// A recorded drag position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSample {
    pub pos: Vec2,
    /// Host timestamp in milliseconds
    pub time_ms: f64,
}

/// Fixed-capacity FIFO of recent drag samples (oldest first)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DragHistory {
    samples: VecDeque<DragSample>,
}

impl DragHistory {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(DRAG_HISTORY_CAPACITY + 1),
        }
    }

    /// Append a sample, evicting the oldest past capacity
    pub fn push(&mut self, pos: Vec2, time_ms: f64) {
        self.samples.push_back(DragSample { pos, time_ms });
        while self.samples.len() > DRAG_HISTORY_CAPACITY {
            self.samples.pop_front();
        }
    }

    /// Drop everything and start over from a single sample
    pub fn restart(&mut self, pos: Vec2, time_ms: f64) {
        self.samples.clear();
        self.push(pos, time_ms);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in chronological order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DragSample> + ExactSizeIterator {
        self.samples.iter()
    }

    /// The newest `n` samples, oldest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &DragSample> {
        self.samples.iter().skip(self.samples.len().saturating_sub(n))
    }
}

/// Active grab on a body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragGrip {
    pub pointer: PointerId,
    /// body.pos - pointer position at grab time
    pub offset: Vec2,
}

/// A simulated disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
    /// Degrees, cosmetic only
    pub rotation: f32,
    pub angular_vel: f32,
    /// Present while a pointer holds this body
    pub grip: Option<DragGrip>,
    pub drag_history: DragHistory,
}

impl Body {
    /// Create a body at rest. Radius must be positive.
    pub fn new(id: u32, pos: Vec2, radius: f32, density: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            radius,
            mass: disk_mass(radius, density),
            rotation: 0.0,
            angular_vel: 0.0,
            grip: None,
            drag_history: DragHistory::new(),
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.grip.is_some()
    }

    /// Whether this body is being dragged by the given pointer
    #[inline]
    pub fn dragged_by(&self, pointer: PointerId) -> bool {
        self.grip.is_some_and(|g| g.pointer == pointer)
    }

    /// Whether the point lies on this disk
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_mass_from_radius() {
        let body = Body::new(1, Vec2::ZERO, 35.0, 0.1);
        assert!((body.mass - PI * 35.0 * 35.0 * 0.1).abs() < 1e-3);
        assert!(body.mass > 0.0);
    }

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = DragHistory::new();
        for i in 0..8 {
            history.push(Vec2::new(i as f32, 0.0), i as f64 * 10.0);
        }
        assert_eq!(history.len(), DRAG_HISTORY_CAPACITY);
        let xs: Vec<f32> = history.iter().map(|s| s.pos.x).collect();
        assert_eq!(xs, vec![3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_history_recent_window() {
        let mut history = DragHistory::new();
        history.push(Vec2::ZERO, 0.0);
        history.push(Vec2::X, 1.0);
        assert_eq!(history.recent(3).count(), 2);

        history.push(Vec2::Y, 2.0);
        history.push(Vec2::ONE, 3.0);
        let times: Vec<f64> = history.recent(3).map(|s| s.time_ms).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_restart_leaves_single_sample() {
        let mut history = DragHistory::new();
        history.push(Vec2::ZERO, 0.0);
        history.push(Vec2::X, 1.0);
        history.restart(Vec2::Y, 5.0);
        assert_eq!(history.len(), 1);
        assert_eq!(history.iter().next().unwrap().pos, Vec2::Y);
    }

    #[test]
    fn test_dragged_by_pointer() {
        let mut body = Body::new(1, Vec2::ZERO, 10.0, 0.1);
        assert!(!body.is_dragging());
        body.grip = Some(DragGrip {
            pointer: PointerId::TOUCH,
            offset: Vec2::ZERO,
        });
        assert!(body.dragged_by(PointerId::TOUCH));
        assert!(!body.dragged_by(PointerId::MOUSE));
    }
}
