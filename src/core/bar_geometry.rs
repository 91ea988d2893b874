use serde::{Deserialize, Serialize};

use crate::core::transition::Lerp;
use crate::core::{BandScale, DataPoint, LinearScale};

/// Plot-local rectangle of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// `true` when the plot-local point lies inside a non-empty rectangle.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && x >= self.x
            && x < self.x + self.width
            && y >= self.y
            && y <= self.y + self.height
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

impl Lerp for BarGeometry {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            x: self.x.lerp(to.x, t),
            y: self.y.lerp(to.y, t),
            width: self.width.lerp(to.width, t),
            height: self.height.lerp(to.height, t),
        }
    }
}

/// Target geometry of `point`: its band slot, rising from the zero baseline.
///
/// Values below zero map under the baseline; they are drawn as zero-height
/// bars on the baseline rather than as negative rectangles.
#[must_use]
pub fn project_bar(point: &DataPoint, band: &BandScale, linear: LinearScale) -> Option<BarGeometry> {
    let x = band.position(&point.label)?;
    let baseline = linear.baseline();
    let top = linear.map(point.value).min(baseline);
    Some(BarGeometry::new(x, top, band.bandwidth(), baseline - top))
}

/// Geometry an entering bar starts from: full band width, zero height at the
/// baseline.
#[must_use]
pub fn baseline_bar(label: &str, band: &BandScale, linear: LinearScale) -> Option<BarGeometry> {
    let x = band.position(label)?;
    Some(BarGeometry::new(x, linear.baseline(), band.bandwidth(), 0.0))
}
