use crate::core::{BandScale, DataPoint, LinearScale, PlotArea};

use super::ChartEngineConfig;

/// Both scales for one reconciliation pass.
///
/// Built fresh from the series and plot area on every pass and dropped once
/// the pass has consumed it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSet {
    pub band: BandScale,
    pub linear: LinearScale,
}

impl ScaleSet {
    #[must_use]
    pub fn resolve(series: &[DataPoint], plot: PlotArea, config: &ChartEngineConfig) -> Self {
        let band = BandScale::from_points(series, plot.width, config.band_padding)
            .with_rounding(config.round_to_pixels);
        let linear = LinearScale::from_points(series, plot.height, config.domain_epsilon)
            .with_rounding(config.round_to_pixels);
        Self { band, linear }
    }

    /// `(label, band centre)` targets for the bottom axis, in band order.
    #[must_use]
    pub fn label_ticks(&self) -> Vec<(String, f64)> {
        self.band
            .domain()
            .filter_map(|label| {
                self.band
                    .band(label)
                    .map(|band| (label.to_owned(), band.center()))
            })
            .collect()
    }

    /// `(value, y)` targets for the left axis.
    #[must_use]
    pub fn value_ticks(&self, target_count: usize) -> Vec<(f64, f64)> {
        self.linear
            .ticks(target_count)
            .into_iter()
            .map(|value| (value, self.linear.map(value)))
            .collect()
    }
}
