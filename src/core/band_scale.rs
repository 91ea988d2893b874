use indexmap::IndexSet;

use crate::core::DataPoint;

/// Band placement of one label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub index: usize,
    /// Left edge of the bar (not the band) in plot-local pixels.
    pub x: f64,
    pub bandwidth: f64,
}

impl Band {
    #[must_use]
    pub fn center(self) -> f64 {
        self.x + self.bandwidth * 0.5
    }
}

/// Categorical scale laying labels out left-to-right in contiguous bands.
///
/// Each band is `range_width / n` wide. `padding` is the blank fraction of a
/// band, split evenly on both sides, so the bar occupies `1 - padding` of it.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: IndexSet<String>,
    range_width: f64,
    padding: f64,
    step: f64,
    bandwidth: f64,
    offset: f64,
}

impl BandScale {
    /// Builds a scale over `labels` in iteration order.
    ///
    /// Repeated labels keep the slot of their first occurrence.
    #[must_use]
    pub fn new<I, S>(labels: I, range_width: f64, padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let domain: IndexSet<String> = labels.into_iter().map(Into::into).collect();
        let range_width = if range_width.is_finite() {
            range_width.max(0.0)
        } else {
            0.0
        };
        let padding = if padding.is_finite() {
            padding.clamp(0.0, 1.0)
        } else {
            0.0
        };

        let step = if domain.is_empty() {
            0.0
        } else {
            range_width / domain.len() as f64
        };

        Self {
            domain,
            range_width,
            padding,
            step,
            bandwidth: step * (1.0 - padding),
            offset: step * padding * 0.5,
        }
    }

    #[must_use]
    pub fn from_points(points: &[DataPoint], range_width: f64, padding: f64) -> Self {
        Self::new(
            points.iter().map(|point| point.label.as_str()),
            range_width,
            padding,
        )
    }

    /// Snaps the step, bar offset and bandwidth to whole pixels, centering the
    /// leftover space.
    #[must_use]
    pub fn with_rounding(mut self, round: bool) -> Self {
        if !round || self.domain.is_empty() {
            return self;
        }
        let step = self.step.floor();
        let leftover = self.range_width - step * self.domain.len() as f64;
        self.step = step;
        self.bandwidth = (step * (1.0 - self.padding)).round();
        self.offset = (leftover * 0.5).round() + ((step - self.bandwidth) * 0.5).round();
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Distinct labels in band order.
    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    #[must_use]
    pub fn range_width(&self) -> f64 {
        self.range_width
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Left edge of the bar for `label`, or `None` outside the domain.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<f64> {
        self.band(label).map(|band| band.x)
    }

    #[must_use]
    pub fn band(&self, label: &str) -> Option<Band> {
        let index = self.domain.get_index_of(label)?;
        Some(Band {
            index,
            x: self.offset + index as f64 * self.step,
            bandwidth: self.bandwidth,
        })
    }
}
