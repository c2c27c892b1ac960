//! Release velocity estimation

use glam::Vec2;

use super::body::DragHistory;
use crate::consts::THROW_WINDOW;

/// Estimate the velocity a drag should leave behind on release
///
/// Uses the newest [`THROW_WINDOW`] samples: displacement over elapsed
/// seconds, scaled by `multiplier` and capped at `max_speed` with the
/// direction preserved. Too little history or no elapsed time means no throw.
pub fn release_velocity(history: &DragHistory, multiplier: f32, max_speed: f32) -> Vec2 {
    if history.len() < 2 {
        return Vec2::ZERO;
    }

    let mut recent = history.recent(THROW_WINDOW);
    let (Some(first), Some(last)) = (recent.next(), recent.last()) else {
        return Vec2::ZERO;
    };

    let elapsed_secs = ((last.time_ms - first.time_ms) / 1000.0) as f32;
    if elapsed_secs <= 0.0 {
        return Vec2::ZERO;
    }

    let velocity = (last.pos - first.pos) / elapsed_secs * multiplier;
    velocity.clamp_length_max(max_speed)
}
