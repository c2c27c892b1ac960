//! Container rectangle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp_axis;

/// The viewport bodies live in, origin at the top-left, y pointing down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Clamp a center position so a disk of `radius` stays inside
    #[inline]
    pub fn clamp(&self, pos: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            clamp_axis(pos.x, radius, self.width),
            clamp_axis(pos.y, radius, self.height),
        )
    }

    /// Whether a disk of `radius` at `pos` is fully inside (within `eps`)
    pub fn contains(&self, pos: Vec2, radius: f32, eps: f32) -> bool {
        let fits = |v: f32, extent: f32| {
            if extent < 2.0 * radius {
                (v - radius).abs() <= eps
            } else {
                v >= radius - eps && v <= extent - radius + eps
            }
        };
        fits(pos.x, self.width) && fits(pos.y, self.height)
    }
}
