use std::{path::Path, time::Duration};

use anyhow::Context as _;

use crate::{
    animation::ease::Ease,
    foundation::error::{CarDriveError, CarDriveResult},
};

pub const ROTATE_DURATION_MS_DEFAULT: u64 = 1000;
pub const MOVE_DURATION_MS_DEFAULT: u64 = 2000;
pub const PAINT_PATH_DEFAULT: bool = false;

/// Size the sprite is resized to when the view is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpriteSize {
    pub width: u32,
    pub height: u32,
}

impl Default for SpriteSize {
    fn default() -> Self {
        Self {
            width: 100,
            height: 200,
        }
    }
}

/// Construction-time settings of a [`crate::CarView`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarConfig {
    /// Stroke the travel path under the car.
    pub paint_path: bool,
    pub rotate_duration_ms: u64,
    pub move_duration_ms: u64,
    pub sprite_size: SpriteSize,
    /// Distance between the bottom of the display and the car's starting centre.
    pub start_bottom_offset: f64,
    pub path_stroke_width: f64,
    /// Straight-alpha RGBA.
    pub path_color: [u8; 4],
    pub ease: Ease,
    /// Taps closer than this to the car are ignored.
    pub zero_distance_tolerance: f64,
}

impl Default for CarConfig {
    fn default() -> Self {
        Self {
            paint_path: PAINT_PATH_DEFAULT,
            rotate_duration_ms: ROTATE_DURATION_MS_DEFAULT,
            move_duration_ms: MOVE_DURATION_MS_DEFAULT,
            sprite_size: SpriteSize::default(),
            start_bottom_offset: 300.0,
            path_stroke_width: 5.0,
            path_color: [0, 0, 0, 255],
            ease: Ease::Linear,
            zero_distance_tolerance: 1e-9,
        }
    }
}

impl CarConfig {
    pub fn with_paint_path(mut self, paint_path: bool) -> Self {
        self.paint_path = paint_path;
        self
    }

    pub fn rotate_duration(&self) -> Duration {
        Duration::from_millis(self.rotate_duration_ms)
    }

    pub fn move_duration(&self) -> Duration {
        Duration::from_millis(self.move_duration_ms)
    }

    pub fn validate(&self) -> CarDriveResult<()> {
        if self.rotate_duration_ms == 0 || self.move_duration_ms == 0 {
            return Err(CarDriveError::validation(
                "rotate_duration_ms and move_duration_ms must be > 0",
            ));
        }
        if self.sprite_size.width == 0 || self.sprite_size.height == 0 {
            return Err(CarDriveError::validation(
                "sprite_size width/height must be non-zero",
            ));
        }
        if !self.start_bottom_offset.is_finite() {
            return Err(CarDriveError::validation(
                "start_bottom_offset must be finite",
            ));
        }
        if !self.path_stroke_width.is_finite() || self.path_stroke_width <= 0.0 {
            return Err(CarDriveError::validation("path_stroke_width must be > 0"));
        }
        if !self.zero_distance_tolerance.is_finite() || self.zero_distance_tolerance < 0.0 {
            return Err(CarDriveError::validation(
                "zero_distance_tolerance must be >= 0",
            ));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> CarDriveResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> CarDriveResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read car config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/config.rs"]
mod tests;
