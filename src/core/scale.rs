use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::DataPoint;
use crate::core::ticks::nice_ticks;

/// Value axis mapping `[0, domain_max]` onto `[range_height, 0]`.
///
/// The pixel axis is inverted: `0` maps to the plot bottom and `domain_max`
/// maps to the plot top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_max: f64,
    range_height: f64,
    clamped: bool,
    round: bool,
}

impl LinearScale {
    /// Builds a scale, clamping `domain_max` to at least `epsilon`.
    ///
    /// Non-finite or non-positive maxima (empty series, all values <= 0)
    /// collapse to `epsilon`, producing a flat chart instead of a division by
    /// zero. A non-finite or non-positive `epsilon` falls back to `f64::EPSILON`.
    #[must_use]
    pub fn new(domain_max: f64, range_height: f64, epsilon: f64) -> Self {
        let epsilon = if epsilon.is_finite() && epsilon > 0.0 {
            epsilon
        } else {
            f64::EPSILON
        };
        let clamped = !domain_max.is_finite() || domain_max < epsilon;
        Self {
            domain_max: if clamped { epsilon } else { domain_max },
            range_height: if range_height.is_finite() {
                range_height.max(0.0)
            } else {
                0.0
            },
            clamped,
            round: false,
        }
    }

    /// Builds a scale whose domain is `[0, max(value)]` over `points`.
    #[must_use]
    pub fn from_points(points: &[DataPoint], range_height: f64, epsilon: f64) -> Self {
        let max = points
            .iter()
            .map(|point| point.value)
            .filter(|value| value.is_finite())
            .fold(f64::NEG_INFINITY, f64::max);
        Self::new(max, range_height, epsilon)
    }

    /// Snaps mapped output to whole pixels.
    #[must_use]
    pub fn with_rounding(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, self.domain_max)
    }

    #[must_use]
    pub fn domain_max(self) -> f64 {
        self.domain_max
    }

    #[must_use]
    pub fn range_height(self) -> f64 {
        self.range_height
    }

    /// `true` when the requested maximum was replaced by the epsilon floor.
    #[must_use]
    pub fn is_clamped(self) -> bool {
        self.clamped
    }

    /// Maps a value to a plot-local y coordinate.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = value / self.domain_max;
        let y = self.range_height - normalized * self.range_height;
        if self.round { y.round() } else { y }
    }

    /// Inverse of [`LinearScale::map`].
    #[must_use]
    pub fn invert(self, y: f64) -> f64 {
        if self.range_height <= 0.0 {
            return 0.0;
        }
        (self.range_height - y) / self.range_height * self.domain_max
    }

    /// Plot-local y of the zero baseline.
    #[must_use]
    pub fn baseline(self) -> f64 {
        self.map(0.0)
    }

    /// Human-friendly tick values over the domain.
    ///
    /// A clamped (degenerate) domain yields only the zero tick.
    #[must_use]
    pub fn ticks(self, target_count: usize) -> SmallVec<[f64; 16]> {
        if self.clamped {
            let mut ticks = SmallVec::new();
            ticks.push(0.0);
            return ticks;
        }
        nice_ticks(0.0, self.domain_max, target_count)
    }
}
