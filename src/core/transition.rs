use serde::{Deserialize, Serialize};

/// Interpolation between two values of the same type.
pub trait Lerp: Copy {
    /// Returns the value at `t` in `[0, 1]` between `self` and `to`.
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        if t >= 1.0 {
            return to;
        }
        self + (to - self) * t
    }
}

/// Timing curve applied to a transition's normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    /// Symmetric cubic ease-in-out.
    #[default]
    CubicInOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let t = t * 2.0;
                if t <= 1.0 {
                    t * t * t / 2.0
                } else {
                    let t = t - 2.0;
                    (t * t * t + 2.0) / 2.0
                }
            }
        }
    }
}

/// A scheduled animation of one attribute set.
///
/// Times are milliseconds on the owning engine's clock. Before `start_ms` the
/// transition samples to `from`; after `start_ms + duration_ms` it samples to
/// `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<T: Lerp> {
    from: T,
    to: T,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl<T: Lerp> Transition<T> {
    #[must_use]
    pub fn new(from: T, to: T, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(0.0),
            easing,
        }
    }

    /// A transition that is already at rest on `value`.
    #[must_use]
    pub fn settled(value: T) -> Self {
        Self::new(value, value, f64::NEG_INFINITY, 0.0, Easing::Linear)
    }

    #[must_use]
    pub fn from_value(&self) -> T {
        self.from
    }

    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }

    #[must_use]
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if now_ms < self.start_ms {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn sample(&self, now_ms: f64) -> T {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return self.to;
        }
        if progress <= 0.0 {
            return self.from;
        }
        self.from.lerp(self.to, self.easing.apply(progress))
    }

    #[must_use]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms >= self.end_ms()
    }

    /// Replaces this transition with one heading to `to`, starting from the
    /// value sampled at `now_ms`.
    #[must_use]
    pub fn retarget(&self, now_ms: f64, to: T, delay_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self::new(
            self.sample(now_ms),
            to,
            now_ms + delay_ms.max(0.0),
            duration_ms,
            easing,
        )
    }
}
