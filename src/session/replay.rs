use std::time::Duration;

use crate::{
    foundation::{core::Point, error::CarDriveResult},
    geometry::heading::RotationPlan,
    session::script::{DriveScript, ScriptedTap},
    view::{
        car::{CarView, DriveState},
        input::PointerEvent,
    },
};

/// What happened to one scripted tap.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TapOutcome {
    pub at_ms: u64,
    pub destination: Point,
    /// State of the car when the tap arrived.
    pub state: DriveState,
    /// The view consumed the tap.
    pub consumed: bool,
    /// Rotation planned for the drive the tap started, if it started one.
    pub rotation: Option<RotationPlan>,
}

impl TapOutcome {
    pub fn started_drive(&self) -> bool {
        self.rotation.is_some()
    }
}

/// Plays a [`DriveScript`]'s taps against a [`CarView`] on a monotonic clock.
///
/// Ticks are split at tap timestamps so every tap lands at its exact time regardless of the
/// frame cadence used to advance the clock.
#[derive(Clone, Debug)]
pub struct Replay {
    view: CarView,
    taps: Vec<ScriptedTap>,
    next_tap: usize,
    clock: Duration,
    outcomes: Vec<TapOutcome>,
}

impl Replay {
    pub fn new(script: &DriveScript) -> CarDriveResult<Self> {
        script.validate()?;
        let view = CarView::new(script.config.clone(), &script.display)?;
        Ok(Self {
            view,
            taps: script.taps.clone(),
            next_tap: 0,
            clock: Duration::ZERO,
            outcomes: Vec::new(),
        })
    }

    pub fn view(&self) -> &CarView {
        &self.view
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn outcomes(&self) -> &[TapOutcome] {
        &self.outcomes
    }

    pub fn is_done(&self) -> bool {
        self.next_tap >= self.taps.len() && !self.view.is_moving()
    }

    /// Move the clock forward to `t`, delivering taps due on the way. Earlier `t` is a no-op.
    pub fn advance_to(&mut self, t: Duration) {
        while let Some(tap) = self.taps.get(self.next_tap).copied() {
            let at = tap.at();
            if at > t {
                break;
            }
            self.tick_until(at);
            self.deliver(tap);
            self.next_tap += 1;
        }
        self.tick_until(t);
    }

    /// Advance until every tap has been delivered and the last drive has finished.
    pub fn run_to_end(&mut self, step: Duration) {
        let step = step.max(Duration::from_millis(1));
        while !self.is_done() {
            self.advance_to(self.clock + step);
        }
    }

    fn tick_until(&mut self, t: Duration) {
        if t > self.clock {
            self.view.tick(t - self.clock);
            self.clock = t;
        }
    }

    fn deliver(&mut self, tap: ScriptedTap) {
        let state = self.view.state();
        let [down, up] = PointerEvent::tap(tap.x, tap.y);
        let consumed = self.view.on_pointer(&down);
        self.view.on_pointer(&up);

        let rotation = if state == DriveState::Idle {
            self.view.rotation_plan()
        } else {
            None
        };
        tracing::debug!(at_ms = tap.at_ms, ?state, consumed, "tap delivered");
        self.outcomes.push(TapOutcome {
            at_ms: tap.at_ms,
            destination: down.position,
            state,
            consumed,
            rotation,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/replay.rs"]
mod tests;
