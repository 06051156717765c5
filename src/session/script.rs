use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;

use crate::{
    assets::sprite::Sprite,
    foundation::{
        core::{Canvas, Fps},
        error::{CarDriveError, CarDriveResult},
    },
    view::config::CarConfig,
};

/// One tap, delivered `at_ms` after the replay starts.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptedTap {
    pub at_ms: u64,
    pub x: f64,
    pub y: f64,
}

impl ScriptedTap {
    pub fn at(&self) -> Duration {
        Duration::from_millis(self.at_ms)
    }
}

fn default_fps() -> Fps {
    Fps { num: 60, den: 1 }
}

fn default_background() -> [u8; 4] {
    [255, 255, 255, 255]
}

/// A scripted sequence of taps against one car view, replayed at a fixed frame rate.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriveScript {
    pub display: Canvas,
    #[serde(default)]
    pub config: CarConfig,
    #[serde(default = "default_fps")]
    pub fps: Fps,
    /// Defaults to the last tap plus one full drive.
    #[serde(default)]
    pub duration_ms: Option<u64>,
    /// Sprite file, relative to the script's directory. The built-in car is used when absent.
    #[serde(default)]
    pub sprite: Option<PathBuf>,
    /// Straight RGBA.
    #[serde(default = "default_background")]
    pub background: [u8; 4],
    #[serde(default)]
    pub taps: Vec<ScriptedTap>,
}

impl DriveScript {
    pub fn new(display: Canvas) -> Self {
        Self {
            display,
            config: CarConfig::default(),
            fps: default_fps(),
            duration_ms: None,
            sprite: None,
            background: default_background(),
            taps: Vec::new(),
        }
    }

    pub fn with_tap(mut self, at_ms: u64, x: f64, y: f64) -> Self {
        self.taps.push(ScriptedTap { at_ms, x, y });
        self
    }

    pub fn validate(&self) -> CarDriveResult<()> {
        Canvas::new(self.display.width, self.display.height)?;
        Fps::new(self.fps.num, self.fps.den)?;
        self.config.validate()?;
        if !self.taps.windows(2).all(|w| w[0].at_ms <= w[1].at_ms) {
            return Err(CarDriveError::validation("taps must be sorted by at_ms"));
        }
        if let Some(tap) = self
            .taps
            .iter()
            .find(|t| !t.x.is_finite() || !t.y.is_finite())
        {
            return Err(CarDriveError::validation(format!(
                "tap at {} ms has a non-finite coordinate",
                tap.at_ms
            )));
        }
        Ok(())
    }

    pub fn duration(&self) -> Duration {
        if let Some(ms) = self.duration_ms {
            return Duration::from_millis(ms);
        }
        let last = self.taps.last().map(ScriptedTap::at).unwrap_or_default();
        last.saturating_add(self.config.rotate_duration())
            .saturating_add(self.config.move_duration())
    }

    /// Frames needed to show the whole script, the last one at or after `duration()`.
    pub fn frame_count(&self) -> u64 {
        self.fps.frames_in(self.duration()).saturating_add(1)
    }

    pub fn from_json_str(s: &str) -> CarDriveResult<Self> {
        let script: Self = serde_json::from_str(s)?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_path(path: &Path) -> CarDriveResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read drive script '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> CarDriveResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load the configured sprite, resolving relative paths against `base_dir`.
    pub fn load_sprite(&self, base_dir: &Path) -> CarDriveResult<Sprite> {
        match &self.sprite {
            Some(rel) => Sprite::from_path(&base_dir.join(rel), self.config.sprite_size),
            None => Sprite::builtin_car(self.config.sprite_size),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/script.rs"]
mod tests;
