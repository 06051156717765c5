use std::time::Duration;

use crate::{
    animation::tween::{SequenceEvent, Tween, TweenEvent, TweenSequence},
    foundation::{
        core::{Canvas, Point},
        error::CarDriveResult,
    },
    geometry::{heading::RotationPlan, path::PathMeasure},
    view::{
        config::CarConfig,
        display::DisplaySize,
        input::{PointerEvent, PointerKind},
    },
};

const ROTATE_PHASE: usize = 0;
const MOVE_PHASE: usize = 1;

/// Where the car is in its tap-to-drive cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveState {
    Idle,
    Rotating,
    Translating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: DriveState,
    pub to: DriveState,
}

/// What one [`CarView::tick`] did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Heading or position changed; the view should be drawn again.
    pub redraw: bool,
    pub transitions: Vec<Transition>,
}

/// The drive that is currently playing.
#[derive(Clone, Debug)]
struct ActiveDrive {
    rotation: RotationPlan,
    measure: PathMeasure,
    sequence: TweenSequence,
}

/// A car sprite that turns toward a tap and then drives to it.
///
/// Heading and position only change inside [`CarView::tick`]; [`CarView::on_pointer`] only
/// decides whether a new drive starts.
#[derive(Clone, Debug)]
pub struct CarView {
    config: CarConfig,
    display: Canvas,
    position: Point,
    heading: f64,
    state: DriveState,
    active: Option<ActiveDrive>,
    /// Last travelled (or travelling) path, kept for the debug stroke.
    path: Option<PathMeasure>,
}

impl CarView {
    pub fn new(config: CarConfig, display: &dyn DisplaySize) -> CarDriveResult<Self> {
        config.validate()?;
        let size = display.size()?;
        let position = start_position(size, config.start_bottom_offset);
        tracing::debug!(?size, ?position, "car view created");
        Ok(Self {
            config,
            display: size,
            position,
            heading: 0.0,
            state: DriveState::Idle,
            active: None,
            path: None,
        })
    }

    pub fn config(&self) -> &CarConfig {
        &self.config
    }

    pub fn display(&self) -> Canvas {
        self.display
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Stored heading in degrees. During a rotation this may sit outside the canonical range.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn state(&self) -> DriveState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        self.state != DriveState::Idle
    }

    pub fn path(&self) -> Option<&PathMeasure> {
        self.path.as_ref()
    }

    /// Rotation of the drive in progress.
    pub fn rotation_plan(&self) -> Option<RotationPlan> {
        self.active.as_ref().map(|a| a.rotation)
    }

    /// Handle a pointer event. Returns `true` when the event was consumed.
    ///
    /// Only `Down` while idle is consumed. Events arriving mid-drive are dropped, not queued.
    #[tracing::instrument(level = "debug", skip(self), fields(state = ?self.state))]
    pub fn on_pointer(&mut self, ev: &PointerEvent) -> bool {
        if ev.kind != PointerKind::Down || self.is_moving() {
            return false;
        }

        let destination = ev.position;
        if self.position.distance(destination) <= self.config.zero_distance_tolerance {
            tracing::debug!(?destination, "tap on the car itself, nothing to do");
            return true;
        }

        let rotation = RotationPlan::toward(self.heading, self.position, destination);
        let measure = PathMeasure::straight(self.position, destination);
        let sequence = TweenSequence::new(vec![
            Tween::new(
                rotation.start,
                rotation.animate_to,
                self.config.rotate_duration(),
                self.config.ease,
            ),
            Tween::new(0.0, 1.0, self.config.move_duration(), self.config.ease),
        ]);

        tracing::debug!(
            ?destination,
            target = rotation.target,
            animate_to = rotation.animate_to,
            length = measure.length(),
            "drive started"
        );

        self.path = Some(measure.clone());
        self.active = Some(ActiveDrive {
            rotation,
            measure,
            sequence,
        });
        self.state = DriveState::Rotating;
        true
    }

    /// Advance the running drive by `dt`.
    pub fn tick(&mut self, dt: Duration) -> TickReport {
        let mut report = TickReport::default();
        let Some(mut active) = self.active.take() else {
            return report;
        };

        for SequenceEvent { index, event } in active.sequence.advance(dt) {
            match (index, event) {
                (ROTATE_PHASE, TweenEvent::Updated(deg)) => {
                    self.heading = deg;
                    report.redraw = true;
                }
                (ROTATE_PHASE, TweenEvent::Finished) => {
                    self.heading = active.rotation.target;
                    tracing::debug!(heading = self.heading, "rotation finished");
                    self.transition(DriveState::Translating, &mut report);
                    report.redraw = true;
                }
                (MOVE_PHASE, TweenEvent::Updated(progress)) => {
                    self.position = active.measure.point_at_fraction(progress);
                    report.redraw = true;
                }
                (MOVE_PHASE, TweenEvent::Finished) => {
                    tracing::debug!(position = ?self.position, "drive finished");
                    self.transition(DriveState::Idle, &mut report);
                }
                _ => {}
            }
        }

        if !active.sequence.is_finished() {
            self.active = Some(active);
        }
        report
    }

    fn transition(&mut self, to: DriveState, report: &mut TickReport) {
        report.transitions.push(Transition {
            from: self.state,
            to,
        });
        self.state = to;
    }
}

/// Horizontally centred, `bottom_offset` above the bottom edge.
pub fn start_position(display: Canvas, bottom_offset: f64) -> Point {
    Point::new(
        f64::from(display.width / 2),
        f64::from(display.height) - bottom_offset,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/view/car.rs"]
mod tests;
