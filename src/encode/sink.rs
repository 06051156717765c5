use crate::{
    foundation::{
        core::{Fps, FrameIndex},
        error::CarDriveResult,
    },
    render::frame::FrameRGBA,
};

/// Configuration handed to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
}

/// Consumer of rendered frames.
///
/// Ordering contract: `push_frame` is called with strictly increasing `FrameIndex`.
pub trait FrameSink {
    fn begin(&mut self, cfg: SinkConfig) -> CarDriveResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> CarDriveResult<()>;
    fn end(&mut self) -> CarDriveResult<()>;
}

/// Keeps every frame in memory. Tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> CarDriveResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> CarDriveResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> CarDriveResult<()> {
        self.ended = true;
        Ok(())
    }
}
