use std::time::Duration;

use crate::animation::ease::Ease;

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Callback-free description of what happened to a tween during one `advance`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenEvent {
    Started,
    Updated(f64),
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TweenStatus {
    Pending,
    Running,
    Finished,
}

/// A scalar animation from `from` to `to` over a fixed duration.
///
/// Time only moves through [`Tween::advance`]; the host decides the frame cadence.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    ease: Ease,
    elapsed: Duration,
    status: TweenStatus,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            ease,
            elapsed: Duration::ZERO,
            status: TweenStatus::Pending,
        }
    }

    pub fn linear(from: f64, to: f64, duration: Duration) -> Self {
        Self::new(from, to, duration, Ease::Linear)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear time fraction in `[0, 1]`. A zero-length tween is complete as soon as it starts.
    pub fn fraction(&self) -> f64 {
        if self.duration.is_zero() {
            return if self.status == TweenStatus::Pending {
                0.0
            } else {
                1.0
            };
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Current interpolated value. Exactly `to` once finished.
    pub fn value(&self) -> f64 {
        if self.status == TweenStatus::Finished {
            return self.to;
        }
        f64::lerp(&self.from, &self.to, self.ease.apply(self.fraction()))
    }

    pub fn is_finished(&self) -> bool {
        self.status == TweenStatus::Finished
    }

    /// Advance by `dt`, appending events in order. Returns the part of `dt` past the end.
    ///
    /// `Finished` is emitted exactly once, after the last `Updated`.
    pub fn advance(&mut self, dt: Duration, out: &mut Vec<TweenEvent>) -> Duration {
        match self.status {
            TweenStatus::Finished => return dt,
            TweenStatus::Pending => {
                self.status = TweenStatus::Running;
                out.push(TweenEvent::Started);
            }
            TweenStatus::Running => {}
        }

        let remaining = self.duration.saturating_sub(self.elapsed);
        if dt < remaining {
            self.elapsed += dt;
            out.push(TweenEvent::Updated(self.value()));
            return Duration::ZERO;
        }

        self.elapsed = self.duration;
        self.status = TweenStatus::Finished;
        out.push(TweenEvent::Updated(self.to));
        out.push(TweenEvent::Finished);
        dt - remaining
    }
}

/// Event from a [`TweenSequence`], tagged with the index of the tween that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceEvent {
    pub index: usize,
    pub event: TweenEvent,
}

/// Tweens played strictly one after another.
///
/// Tween `n + 1` never starts before tween `n` has emitted `Finished`. Time left over when a
/// tween ends within one `advance` carries into the next one.
#[derive(Clone, Debug, Default)]
pub struct TweenSequence {
    tweens: Vec<Tween>,
    current: usize,
}

impl TweenSequence {
    pub fn new(tweens: Vec<Tween>) -> Self {
        Self { tweens, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        (self.current < self.tweens.len()).then_some(self.current)
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.tweens.len()
    }

    pub fn total_duration(&self) -> Duration {
        self.tweens.iter().map(Tween::duration).sum()
    }

    pub fn advance(&mut self, dt: Duration) -> Vec<SequenceEvent> {
        let mut out = Vec::new();
        let mut scratch = Vec::with_capacity(3);
        let mut dt = dt;

        while let Some(tween) = self.tweens.get_mut(self.current) {
            scratch.clear();
            let leftover = tween.advance(dt, &mut scratch);
            let index = self.current;
            out.extend(scratch.iter().map(|&event| SequenceEvent { index, event }));

            if !tween.is_finished() {
                break;
            }
            self.current += 1;
            // The next tween starts on the next advance unless time is left in this one.
            if leftover.is_zero() {
                break;
            }
            dt = leftover;
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
