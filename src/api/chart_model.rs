use crate::core::{DataPoint, PlotArea, Viewport};

use super::{AxisModel, AxisOrientation, ChartEngineConfig, ChartLifecycle, KeyedBars};

/// Chart domain state carried across renders.
///
/// The controller is the only owner of cross-call memory: the staged series,
/// the keyed bars of the previous pass and the animated axes.
pub(super) struct ChartModel {
    pub(super) config: ChartEngineConfig,
    pub(super) lifecycle: ChartLifecycle,
    pub(super) container: Option<Viewport>,
    pub(super) plot: PlotArea,
    pub(super) series: Option<Vec<DataPoint>>,
    pub(super) bars: KeyedBars,
    pub(super) label_axis: AxisModel,
    pub(super) value_axis: AxisModel,
}

impl ChartModel {
    pub(super) fn new(config: ChartEngineConfig) -> Self {
        Self {
            config,
            lifecycle: ChartLifecycle::Uninitialized,
            container: None,
            plot: PlotArea::from_container(Viewport::new(0, 0), config.margin),
            series: None,
            bars: KeyedBars::new(),
            label_axis: AxisModel::new(AxisOrientation::Bottom),
            value_axis: AxisModel::new(AxisOrientation::Left),
        }
    }
}
