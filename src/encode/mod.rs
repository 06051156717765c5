//! Frame sinks: where a replayed drive's frames go.

pub(crate) mod ffmpeg;
pub(crate) mod sink;
