//! A single time-based interpolation.

use crate::{Ease, Lerp};

/// How many times a tween plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Play one cycle.
    Once,
    /// Play one cycle plus `n` repeats.
    Times(u32),
    /// Repeat until killed.
    Forever,
}

impl Repeat {
    fn cycles(self) -> Option<u64> {
        match self {
            Repeat::Once => Some(1),
            Repeat::Times(n) => Some(u64::from(n) + 1),
            Repeat::Forever => None,
        }
    }
}

/// Result of advancing a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step<T> {
    /// Still waiting out its delay, or already finished earlier.
    Idle,
    /// New interpolated value.
    Update(T),
    /// Final value; the tween will not produce anything else.
    Complete(T),
}

/// Interpolates a value from `from` to `to`.
#[derive(Debug, Clone)]
pub struct Tween<T> {
    from: T,
    to: T,
    /// Seconds per cycle.
    duration: f32,
    /// Seconds before the first cycle starts.
    delay: f32,
    ease: Ease,
    repeat: Repeat,
    /// Play odd cycles backwards.
    yoyo: bool,
    /// Seconds since creation, including the delay.
    elapsed: f32,
    finished: bool,
}

impl<T: Lerp> Tween<T> {
    /// A single linear cycle from `from` to `to`.
    pub fn new(from: T, to: T, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            ease: Ease::Linear,
            repeat: Repeat::Once,
            yoyo: false,
            elapsed: 0.0,
            finished: false,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn from_value(&self) -> T {
        self.from
    }

    pub fn to_value(&self) -> T {
        self.to
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Move the clock forward by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> Step<T> {
        if self.finished {
            return Step::Idle;
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed < self.delay {
            return Step::Idle;
        }

        if self.duration <= 0.0 {
            self.finished = true;
            return Step::Complete(self.to);
        }

        let mut local = self.elapsed - self.delay;
        if self.repeat == Repeat::Forever {
            // Keep the clock small; wrapping by two cycles preserves yoyo parity.
            let period = self.duration * 2.0;
            if local >= period {
                local %= period;
                self.elapsed = self.delay + local;
            }
        }

        let cycle = (local / self.duration).floor() as u64;
        if let Some(total) = self.repeat.cycles() {
            if cycle >= total {
                self.finished = true;
                let last_reversed = self.yoyo && (total - 1) % 2 == 1;
                let value = if last_reversed { self.from } else { self.to };
                return Step::Complete(value);
            }
        }

        let t = (local - cycle as f32 * self.duration) / self.duration;
        Step::Update(self.sample(t, self.yoyo && cycle % 2 == 1))
    }

    /// Restart between new endpoints, keeping timing and easing.
    ///
    /// The delay is not applied again.
    pub fn redirect(&mut self, from: T, to: T) {
        self.from = from;
        self.to = to;
        self.elapsed = self.delay;
        self.finished = false;
    }

    fn sample(&self, t: f32, reversed: bool) -> T {
        let progress = if reversed {
            self.ease.apply(1.0 - t)
        } else {
            self.ease.apply(t)
        };
        T::lerp(self.from, self.to, progress)
    }
}
