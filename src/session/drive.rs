use std::path::Path;

use crate::{
    assets::sprite::Sprite,
    encode::sink::{FrameSink, SinkConfig},
    foundation::{
        core::{Fps, FrameIndex},
        error::{CarDriveError, CarDriveResult},
    },
    render::{cpu::CarRenderer, frame::FrameRGBA},
    session::{
        replay::{Replay, TapOutcome},
        script::DriveScript,
    },
    view::car::CarView,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SessionStats {
    pub frames_rendered: u64,
    pub taps_consumed: u64,
    pub taps_dropped: u64,
}

/// Renders a [`DriveScript`] frame by frame.
///
/// Frames are meant to be requested in increasing order; asking for an earlier frame replays the
/// script from the start.
pub struct DriveSession {
    script: DriveScript,
    replay: Replay,
    renderer: CarRenderer,
}

impl DriveSession {
    pub fn new(script: DriveScript, sprite: Sprite) -> CarDriveResult<Self> {
        let replay = Replay::new(&script)?;
        let renderer = CarRenderer::new(script.display, sprite, script.background)?;
        Ok(Self {
            script,
            replay,
            renderer,
        })
    }

    /// Load a script and its sprite (relative to the script's directory).
    pub fn from_script_path(path: &Path) -> CarDriveResult<Self> {
        let script = DriveScript::from_path(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let sprite = script.load_sprite(base)?;
        Self::new(script, sprite)
    }

    pub fn script(&self) -> &DriveScript {
        &self.script
    }

    pub fn fps(&self) -> Fps {
        self.script.fps
    }

    pub fn frame_count(&self) -> u64 {
        self.script.frame_count()
    }

    pub fn view(&self) -> &CarView {
        self.replay.view()
    }

    pub fn outcomes(&self) -> &[TapOutcome] {
        self.replay.outcomes()
    }

    pub fn render_frame(&mut self, idx: FrameIndex) -> CarDriveResult<FrameRGBA> {
        let count = self.frame_count();
        if idx.0 >= count {
            return Err(CarDriveError::validation(format!(
                "frame {} is out of range (script has {count} frames)",
                idx.0
            )));
        }

        let t = self.script.fps.frame_time(idx);
        if t < self.replay.clock() {
            tracing::debug!(frame = idx.0, "rewinding replay");
            self.replay = Replay::new(&self.script)?;
        }
        self.replay.advance_to(t);
        self.renderer.render(self.replay.view())
    }

    /// Render every frame of the script into `sink`.
    #[tracing::instrument(skip(self, sink))]
    pub fn render_to(&mut self, sink: &mut dyn FrameSink) -> CarDriveResult<SessionStats> {
        let count = self.frame_count();
        let canvas = self.renderer.canvas();
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps: self.script.fps,
        })?;

        if let Err(err) = self.push_all(count, sink) {
            // Let the sink release what it started; the frame error is the one reported.
            if let Err(end_err) = sink.end() {
                tracing::warn!(error = %end_err, "sink end failed after a frame error");
            }
            return Err(err);
        }
        sink.end()?;

        let consumed = self.outcomes().iter().filter(|o| o.consumed).count() as u64;
        let stats = SessionStats {
            frames_rendered: count,
            taps_consumed: consumed,
            taps_dropped: self.outcomes().len() as u64 - consumed,
        };
        tracing::info!(?stats, "drive rendered");
        Ok(stats)
    }

    fn push_all(&mut self, count: u64, sink: &mut dyn FrameSink) -> CarDriveResult<()> {
        for i in 0..count {
            let idx = FrameIndex(i);
            let frame = self.render_frame(idx)?;
            sink.push_frame(idx, &frame)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/drive.rs"]
mod tests;
