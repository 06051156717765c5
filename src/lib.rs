//! `cardrive` is a single-widget library: a car sprite that turns to face a tap and then drives
//! to it in a straight line.
//!
//! # Pieces
//!
//! - [`CarView`]: the widget state machine (`Idle -> Rotating -> Translating -> Idle`). Pointer
//!   events go in through [`CarView::on_pointer`]; time goes in through [`CarView::tick`].
//! - [`RotationPlan`] / [`PathMeasure`]: the heading and arc-length math behind the two phases.
//! - [`Tween`] / [`TweenSequence`]: the tick-driven scheduler that chains the phases.
//! - [`CarRenderer`]: draws a view (and optionally its travel path) with `vello_cpu`.
//! - [`DriveScript`] / [`DriveSession`]: headless replay of timed taps into frames, PNGs, or an
//!   MP4 through the system `ffmpeg`.
//!
//! Headings are degrees with `0` pointing up and positive angles turning clockwise on screen.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod encode;
mod foundation;
mod geometry;
mod render;
mod session;
mod view;

pub use animation::ease::Ease;
pub use animation::tween::{Lerp, SequenceEvent, Tween, TweenEvent, TweenSequence};
pub use assets::sprite::Sprite;
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, Point, Rect, Rgba8Premul, Vec2,
};
pub use foundation::error::{CarDriveError, CarDriveResult};
pub use geometry::heading::{
    RotationPlan, SPRITE_FORWARD_OFFSET_DEG, required_heading, shortest_rotation_target,
};
pub use geometry::path::PathMeasure;
pub use render::cpu::{CarRenderer, car_transform};
pub use render::frame::FrameRGBA;
pub use session::drive::{DriveSession, SessionStats};
pub use session::replay::{Replay, TapOutcome};
pub use session::script::{DriveScript, ScriptedTap};
pub use view::car::{CarView, DriveState, TickReport, Transition, start_position};
pub use view::config::{
    CarConfig, MOVE_DURATION_MS_DEFAULT, PAINT_PATH_DEFAULT, ROTATE_DURATION_MS_DEFAULT,
    SpriteSize,
};
pub use view::display::{DisplaySize, FixedDisplay};
pub use view::input::{PointerEvent, PointerKind};
