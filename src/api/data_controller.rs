use tracing::{debug, warn};

use crate::core::{DataPoint, PlotArea, Viewport, format_tick, nice_tick_step};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{BarBindings, ChartEvent};
use crate::render::Renderer;

use super::validation::{duplicate_labels, validate_series};
use super::{BarDiff, ChartEngine, ChartLifecycle, ScaleSet, TickTarget, TransitionPlan, reconcile};

impl<R: Renderer> ChartEngine<R> {
    /// Creates the drawing surface for a measured container.
    ///
    /// Runs the first reconciliation immediately when data was staged with
    /// [`ChartEngine::set_data`] before mounting.
    pub fn mount(&mut self, container: Viewport) -> ChartResult<Option<BarDiff>> {
        let lifecycle = self.core.model.lifecycle;
        if lifecycle != ChartLifecycle::Uninitialized {
            return Err(ChartError::InvalidLifecycle {
                operation: "mount",
                state: lifecycle,
            });
        }

        self.apply_container(container);
        self.core.model.lifecycle = ChartLifecycle::Mounted;
        debug!(
            width = container.width,
            height = container.height,
            "mount chart"
        );

        if self.core.model.series.is_some() {
            return Ok(Some(self.run_render_pass()));
        }
        self.refresh_axes(&ScaleSet::resolve(
            &[],
            self.core.model.plot,
            &self.core.model.config,
        ));
        Ok(None)
    }

    /// Replaces the series.
    ///
    /// Before mounting the series is only staged. Once mounted every call
    /// reconciles and returns the resulting diff. Non-finite values are
    /// rejected and leave the previous series in place.
    pub fn set_data(&mut self, series: Vec<DataPoint>) -> ChartResult<Option<BarDiff>> {
        validate_series(&series)?;
        debug!(count = series.len(), "set data");
        self.core.model.series = Some(series);
        if !self.core.model.lifecycle.is_mounted() {
            return Ok(None);
        }
        Ok(Some(self.run_render_pass()))
    }

    /// Edits the owned series in place, then behaves like `set_data`.
    pub fn update_data<F>(&mut self, edit: F) -> ChartResult<Option<BarDiff>>
    where
        F: FnOnce(&mut Vec<DataPoint>),
    {
        let mut series = self.core.model.series.clone().unwrap_or_default();
        edit(&mut series);
        self.set_data(series)
    }

    /// Re-measures the container and re-renders against the new ranges.
    pub fn resize(&mut self, container: Viewport) -> ChartResult<Option<BarDiff>> {
        let lifecycle = self.core.model.lifecycle;
        if !lifecycle.is_mounted() {
            return Err(ChartError::InvalidLifecycle {
                operation: "resize",
                state: lifecycle,
            });
        }

        self.apply_container(container);
        debug!(
            width = container.width,
            height = container.height,
            "resize chart"
        );

        if lifecycle.has_rendered() {
            return Ok(Some(self.run_render_pass()));
        }
        self.refresh_axes(&ScaleSet::resolve(
            &[],
            self.core.model.plot,
            &self.core.model.config,
        ));
        Ok(None)
    }

    fn apply_container(&mut self, container: Viewport) {
        if !container.is_valid() {
            warn!(
                width = container.width,
                height = container.height,
                "container has zero size; chart stays empty until resized"
            );
        }
        self.core.model.container = Some(container);
        self.core.model.plot = PlotArea::from_container(container, self.core.model.config.margin);
    }

    /// Scales, axes, reconciliation and rebinding for the current series.
    fn run_render_pass(&mut self) -> BarDiff {
        let now_ms = self.core.runtime.clock_ms;
        let config = self.core.model.config;
        let series: &[DataPoint] = self.core.model.series.as_deref().unwrap_or(&[]);

        let scales = ScaleSet::resolve(series, self.core.model.plot, &config);
        if scales.linear.is_clamped() && !series.is_empty() {
            warn!(
                epsilon = config.domain_epsilon,
                "no positive values; value axis clamped to epsilon"
            );
        }
        let duplicates = duplicate_labels(series);
        if !duplicates.is_empty() {
            warn!(
                labels = ?duplicates,
                "duplicate labels; later data points win their keyed slot"
            );
        }

        let plan = TransitionPlan {
            now_ms,
            duration_ms: config.transition_duration_ms,
            stagger_ms: config.enter_stagger_ms,
            easing: config.easing,
            fill: config.bar_fill,
        };
        let previous = std::mem::take(&mut self.core.model.bars);
        let outcome = reconcile(previous, series, &scales, &plan, &mut self.core.runtime.ids);
        self.core.model.bars = outcome.bars;
        let diff = outcome.diff;

        self.refresh_axes(&scales);

        self.core.runtime.generation += 1;
        self.core.runtime.bindings = BarBindings::bind(
            self.core.runtime.generation,
            self.core.model.bars.values().map(|bar| &bar.datum),
        );
        self.core.model.lifecycle = ChartLifecycle::Rendered;

        if let Some(label) = self.core.runtime.hovered.as_deref() {
            match self.core.model.bars.get(label) {
                Some(bar) => self
                    .core
                    .runtime
                    .tooltip
                    .refresh(&bar.datum.label, bar.datum.value),
                None => {
                    self.core.runtime.hovered = None;
                    self.core.runtime.tooltip.hide(now_ms);
                    self.emit_event(ChartEvent::HoverEnd);
                }
            }
        }

        debug!(
            generation = self.core.runtime.generation,
            entered = diff.entered_count(),
            updated = diff.updated_count(),
            exited = diff.exited_count(),
            "reconciled bars"
        );
        self.core.runtime.last_diff = Some(diff.clone());
        diff
    }

    pub(super) fn refresh_axes(&mut self, scales: &ScaleSet) {
        let now_ms = self.core.runtime.clock_ms;
        let axis = self.core.model.config.axis;

        let label_targets: Vec<TickTarget> = scales
            .label_ticks()
            .into_iter()
            .map(|(label, position)| TickTarget::category(label, position))
            .collect();
        self.core.model.label_axis.update(
            &label_targets,
            now_ms,
            axis.transition_duration_ms,
            self.core.model.config.easing,
            |_| f64::NAN,
        );

        // A clamped domain only carries the zero tick, printed without decimals.
        let step = if scales.linear.is_clamped() {
            0.0
        } else {
            nice_tick_step(0.0, scales.linear.domain_max(), axis.value_tick_count)
        };
        let value_targets: Vec<TickTarget> = scales
            .value_ticks(axis.value_tick_count)
            .into_iter()
            .map(|(value, position)| {
                TickTarget::numeric(value, format_tick(value, step), position)
            })
            .collect();
        debug!(
            labels = label_targets.len(),
            domain_max = scales.linear.domain_max(),
            value_ticks = value_targets.len(),
            "refresh axes"
        );
        let linear = scales.linear;
        self.core.model.value_axis.update(
            &value_targets,
            now_ms,
            axis.transition_duration_ms,
            self.core.model.config.easing,
            |value| linear.map(value),
        );
    }
}
