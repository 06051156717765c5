//! Heading math for a sprite drawn nose-up.
//!
//! Headings are degrees, `0` pointing up (toward negative y), growing clockwise in screen space
//! (y down). Values are deliberately left unnormalised: `-90`, `190` or `450` are all valid, and
//! the interpolation endpoint is chosen so a rotation never sweeps more than half a turn.

use crate::foundation::core::Point;

/// Offset between the `atan2` bearing and a nose-up sprite.
pub const SPRITE_FORWARD_OFFSET_DEG: f64 = 90.0;

/// Heading the sprite must have at `from` to face `to`.
///
/// Returns `-90` when both points coincide (`atan2(0, 0) == 0`); callers that care about the
/// degenerate case check the distance first.
pub fn required_heading(from: Point, to: Point) -> f64 {
    let dy = from.y - to.y;
    let dx = from.x - to.x;
    dy.atan2(dx).to_degrees() - SPRITE_FORWARD_OFFSET_DEG
}

/// Interpolation endpoint for rotating from `start` toward `end` the short way.
///
/// The result differs from `end` by a multiple of 360.
pub fn shortest_rotation_target(start: f64, end: f64) -> f64 {
    let diff = start - end;
    if diff < -180.0 {
        end - 360.0
    } else if diff > 180.0 {
        end + 360.0
    } else {
        end
    }
}

/// One rotation: where it starts, the heading stored once it ends, and the value the tween
/// actually interpolates toward.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RotationPlan {
    pub start: f64,
    /// Canonical heading written back when the rotation completes.
    pub target: f64,
    /// Transient endpoint, `target` shifted by ±360 when that shortens the sweep.
    pub animate_to: f64,
}

impl RotationPlan {
    pub fn new(start: f64, target: f64) -> Self {
        Self {
            start,
            target,
            animate_to: shortest_rotation_target(start, target),
        }
    }

    /// Plan the rotation needed at `from`, currently heading `start`, to face `to`.
    pub fn toward(start: f64, from: Point, to: Point) -> Self {
        Self::new(start, required_heading(from, to))
    }

    /// Signed sweep of the animation, in degrees.
    pub fn sweep(&self) -> f64 {
        self.animate_to - self.start
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/heading.rs"]
mod tests;
