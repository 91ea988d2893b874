use crate::core::Viewport;
use crate::render::{
    BarPrimitive, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    TooltipPrimitive,
};

use super::ChartEngine;

/// Baseline shift of bottom-axis labels, in ems below the tick anchor.
const BOTTOM_LABEL_DY_EM: f64 = 0.71;
/// Baseline shift that vertically centres left-axis labels on their tick.
const LEFT_LABEL_DY_EM: f64 = 0.32;
/// Average glyph advance used to size the tooltip box.
const TOOLTIP_GLYPH_EM: f64 = 0.6;
const TOOLTIP_PADDING_PX: f64 = 4.0;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the scene at the current clock.
    ///
    /// Paint order: axis lines, bars (series order), axis labels, tooltip.
    /// A zero-size or unmounted container yields an empty frame.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let container = self.core.model.container.unwrap_or(Viewport::new(0, 0));
        let mut frame = RenderFrame::new(container);
        if !container.is_valid() {
            return frame;
        }

        let now_ms = self.core.runtime.clock_ms;
        let plot = self.core.model.plot;
        let config = &self.core.model.config;
        let axis = config.axis;
        let bottom = plot.top + plot.height;

        frame.axis_lines.push(LinePrimitive::new(
            plot.left,
            bottom,
            plot.left + plot.width,
            bottom,
            axis.stroke_width,
            axis.color,
        ));
        frame.axis_lines.push(LinePrimitive::new(
            plot.left,
            plot.top,
            plot.left,
            bottom,
            axis.stroke_width,
            axis.color,
        ));

        for bar in self.core.model.bars.values() {
            let geometry = bar.geometry_at(now_ms);
            frame.bars.push(BarPrimitive::new(
                bar.key.clone(),
                RectPrimitive::new(
                    plot.left + geometry.x,
                    plot.top + geometry.y,
                    geometry.width.max(0.0),
                    geometry.height.max(0.0),
                    bar.fill,
                ),
            ));
        }

        for tick in self.core.model.label_axis.ticks_at(now_ms) {
            if tick.label.is_empty() || tick.opacity <= 0.0 {
                continue;
            }
            frame.axis_labels.push(TextPrimitive::new(
                tick.label,
                plot.left + tick.position,
                bottom + axis.label_padding_px + axis.font_size_px * BOTTOM_LABEL_DY_EM,
                axis.font_size_px,
                axis.color.with_opacity(tick.opacity),
                TextHAlign::Center,
            ));
        }
        for tick in self.core.model.value_axis.ticks_at(now_ms) {
            if tick.opacity <= 0.0 {
                continue;
            }
            frame.axis_labels.push(TextPrimitive::new(
                tick.label,
                plot.left - axis.label_padding_px,
                plot.top + tick.position + axis.font_size_px * LEFT_LABEL_DY_EM,
                axis.font_size_px,
                axis.color.with_opacity(tick.opacity),
                TextHAlign::Right,
            ));
        }

        let tooltip = &self.core.runtime.tooltip;
        if tooltip.is_visible(now_ms) {
            let style = tooltip.config();
            let state = tooltip.state(now_ms);
            let width = state.text.chars().count() as f64 * style.font_size_px * TOOLTIP_GLYPH_EM
                + TOOLTIP_PADDING_PX * 2.0;
            let height = style.font_size_px + TOOLTIP_PADDING_PX * 2.0;
            let background = RectPrimitive::new(
                state.surface_left,
                state.surface_top,
                width,
                height,
                style.background_color.with_opacity(state.opacity),
            );
            let text = TextPrimitive::new(
                state.text,
                state.surface_left + TOOLTIP_PADDING_PX,
                state.surface_top + TOOLTIP_PADDING_PX + style.font_size_px * 0.8,
                style.font_size_px,
                style.text_color.with_opacity(state.opacity),
                TextHAlign::Left,
            );
            frame.tooltip = Some(TooltipPrimitive::new(background, text));
        }

        frame
    }
}
