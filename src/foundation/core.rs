use std::time::Duration;

use crate::foundation::error::{CarDriveError, CarDriveResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

impl Fps {
    pub fn new(num: u32, den: u32) -> CarDriveResult<Self> {
        if den == 0 {
            return Err(CarDriveError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(CarDriveError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Timestamp of the start of frame `f`.
    pub fn frame_time(self, f: FrameIndex) -> Duration {
        let nanos = u128::from(f.0) * u128::from(self.den) * NANOS_PER_SEC / u128::from(self.num);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Whole frames needed to cover `span`, rounded up.
    pub fn frames_in(self, span: Duration) -> u64 {
        let scaled = span.as_nanos() * u128::from(self.num);
        let per_frame = u128::from(self.den) * NANOS_PER_SEC;
        u64::try_from(scaled.div_ceil(per_frame)).unwrap_or(u64::MAX)
    }
}

/// Width × height of a drawing surface or display, in the same units as pointer coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> CarDriveResult<Self> {
        if width == 0 || height == 0 {
            return Err(CarDriveError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
