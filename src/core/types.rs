use serde::{Deserialize, Serialize};

/// Measured size of the host container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` when both dimensions are non-zero.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Fixed insets between the container edge and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::uniform(0.0)
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(20.0)
    }
}

/// Drawable region inside the container once margins are removed.
///
/// `width`/`height` saturate at zero so an unmeasured container degrades to an
/// empty plot instead of negative ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn from_container(container: Viewport, margin: Margin) -> Self {
        Self {
            left: margin.left,
            top: margin.top,
            width: (f64::from(container.width) - margin.horizontal()).max(0.0),
            height: (f64::from(container.height) - margin.vertical()).max(0.0),
        }
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Converts container-local coordinates to plot-local coordinates.
    #[must_use]
    pub fn to_plot_space(self, x: f64, y: f64) -> (f64, f64) {
        (x - self.left, y - self.top)
    }
}

/// One `(label, value)` record of the input series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl<L: Into<String>> From<(L, f64)> for DataPoint {
    fn from((label, value): (L, f64)) -> Self {
        Self::new(label, value)
    }
}
