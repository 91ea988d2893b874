use crate::core::{DataPoint, PlotArea, Viewport};
use crate::extensions::TooltipState;
use crate::render::Renderer;

use super::{AxisTickState, BarDiff, ChartEngine, ChartEngineConfig, ChartLifecycle, VisualBar};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.core.model.config
    }

    #[must_use]
    pub fn lifecycle(&self) -> ChartLifecycle {
        self.core.model.lifecycle
    }

    #[must_use]
    pub fn container(&self) -> Option<Viewport> {
        self.core.model.container
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.core.model.plot
    }

    /// Current (or staged) series; `None` until data is supplied.
    #[must_use]
    pub fn series(&self) -> Option<&[DataPoint]> {
        self.core.model.series.as_deref()
    }

    /// Live bars in paint order.
    pub fn bars(&self) -> impl Iterator<Item = &VisualBar> {
        self.core.model.bars.values()
    }

    #[must_use]
    pub fn bar(&self, label: &str) -> Option<&VisualBar> {
        self.core.model.bars.get(label)
    }

    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.core.model.bars.len()
    }

    /// Diff of the most recent reconciliation pass.
    #[must_use]
    pub fn last_diff(&self) -> Option<&BarDiff> {
        self.core.runtime.last_diff.as_ref()
    }

    /// Number of reconciliation passes so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.core.runtime.generation
    }

    #[must_use]
    pub fn label_axis_ticks(&self) -> Vec<AxisTickState> {
        self.core
            .model
            .label_axis
            .ticks_at(self.core.runtime.clock_ms)
    }

    #[must_use]
    pub fn value_axis_ticks(&self) -> Vec<AxisTickState> {
        self.core
            .model
            .value_axis
            .ticks_at(self.core.runtime.clock_ms)
    }

    #[must_use]
    pub fn tooltip(&self) -> TooltipState {
        self.core.runtime.tooltip.state(self.core.runtime.clock_ms)
    }
}
