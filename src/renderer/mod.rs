//! Renderer-agnostic placement extraction
//!
//! The physics never touches a visual tree. Each frame the host pulls one
//! `BodyTransform` per body and copies it into whatever it draws with.

use serde::{Deserialize, Serialize};

use crate::sim::Body;

/// Where to draw one body: top-left corner of its bounding square plus spin
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyTransform {
    pub id: u32,
    pub left: f32,
    pub top: f32,
    /// Width and height of the bounding square
    pub size: f32,
    /// Degrees
    pub rotation: f32,
}

impl BodyTransform {
    /// Floats per transform in a packed buffer
    pub const STRIDE: usize = 5;

    pub fn from_body(body: &Body) -> Self {
        Self {
            id: body.id,
            left: body.pos.x - body.radius,
            top: body.pos.y - body.radius,
            size: body.radius * 2.0,
            rotation: body.rotation,
        }
    }

    /// `[id, left, top, size, rotation]`
    pub fn to_array(&self) -> [f32; Self::STRIDE] {
        [self.id as f32, self.left, self.top, self.size, self.rotation]
    }
}

/// Something that draws bodies
pub trait RenderSink {
    fn place(&mut self, transform: &BodyTransform);
}

impl RenderSink for Vec<BodyTransform> {
    fn place(&mut self, transform: &BodyTransform) {
        self.push(*transform);
    }
}

/// Flat `[id, left, top, size, rotation, ...]` buffer for handing to JS
impl RenderSink for Vec<f32> {
    fn place(&mut self, transform: &BodyTransform) {
        self.extend_from_slice(&transform.to_array());
    }
}
