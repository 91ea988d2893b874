use crate::error::ChartResult;
use crate::render::Renderer;

use super::{BarSnapshot, ChartEngine, EngineSnapshot};

impl<R: Renderer> ChartEngine<R> {
    /// Captures bars, axes and tooltip at the current clock.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let now_ms = self.core.runtime.clock_ms;
        EngineSnapshot {
            lifecycle: self.core.model.lifecycle,
            container: self.core.model.container,
            plot_area: self.core.model.plot,
            clock_ms: now_ms,
            generation: self.core.runtime.generation,
            bars: self
                .core
                .model
                .bars
                .values()
                .map(|bar| BarSnapshot {
                    id: bar.id,
                    label: bar.key.clone(),
                    value: bar.datum.value,
                    current: bar.geometry_at(now_ms),
                    target: bar.target(),
                    fill: bar.fill,
                })
                .collect(),
            label_ticks: self.core.model.label_axis.ticks_at(now_ms),
            value_ticks: self.core.model.value_axis.ticks_at(now_ms),
            hovered: self.core.runtime.hovered.clone(),
            tooltip: self.core.runtime.tooltip.state(now_ms),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_pretty()
    }
}
