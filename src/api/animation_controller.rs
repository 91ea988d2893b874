use tracing::trace;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;
use super::validation::validate_delta_ms;

impl<R: Renderer> ChartEngine<R> {
    /// Advances the animation clock by `delta_ms`.
    ///
    /// Transitions are sampled lazily, so this only moves time forward and
    /// drops axis ticks that finished fading out.
    pub fn advance_time(&mut self, delta_ms: f64) -> ChartResult<()> {
        let delta_ms = validate_delta_ms(delta_ms)?;
        self.core.runtime.clock_ms += delta_ms;
        let now_ms = self.core.runtime.clock_ms;
        let pruned =
            self.core.model.label_axis.prune(now_ms) + self.core.model.value_axis.prune(now_ms);
        trace!(delta_ms, now_ms, pruned, "advance animation clock");
        Ok(())
    }

    /// Advances the clock until every transition has settled.
    pub fn settle(&mut self) -> ChartResult<()> {
        let remaining = self.pending_animation_ms();
        self.advance_time(remaining)
    }

    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.core.runtime.clock_ms
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        let now_ms = self.core.runtime.clock_ms;
        self.core
            .model
            .bars
            .values()
            .any(|bar| bar.is_animating(now_ms))
            || self.core.model.label_axis.is_animating(now_ms)
            || self.core.model.value_axis.is_animating(now_ms)
            || self.core.runtime.tooltip.is_animating(now_ms)
    }

    /// Milliseconds until the last running transition ends.
    #[must_use]
    pub fn pending_animation_ms(&self) -> f64 {
        let now_ms = self.core.runtime.clock_ms;
        let bar_end = self
            .core
            .model
            .bars
            .values()
            .map(|bar| bar.transition.end_ms())
            .fold(now_ms, f64::max);
        let axis_end = self
            .core
            .model
            .label_axis
            .end_ms()
            .max(self.core.model.value_axis.end_ms());
        let tooltip_end = self.core.runtime.tooltip.end_ms().max(now_ms);
        (bar_end.max(axis_end).max(tooltip_end) - now_ms).max(0.0)
    }
}
