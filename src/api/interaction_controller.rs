use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::interaction::{BarBinding, BarBindings, ChartEvent, PointerEvent};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Routes a pointer move to the bar under it.
    ///
    /// Emits hover-start when the pointer enters a bar other than the hovered
    /// one (preceded by hover-end for the previous bar) and hover-end when it
    /// leaves all bars. Moves within the same bar emit nothing.
    pub fn pointer_move(&mut self, pointer: PointerEvent) -> ChartResult<Vec<ChartEvent>> {
        validate_pointer(pointer)?;
        let now_ms = self.core.runtime.clock_ms;
        let hit = self
            .hit_test(pointer)
            .map(|binding| (binding.key.clone(), binding.datum.value));

        let mut events = Vec::new();
        match hit {
            Some((label, _)) if self.core.runtime.hovered.as_deref() == Some(label.as_str()) => {}
            Some((label, value)) => {
                if self.core.runtime.hovered.take().is_some() {
                    events.push(ChartEvent::HoverEnd);
                }
                self.core.runtime.tooltip.show(&label, value, pointer, now_ms);
                events.push(ChartEvent::HoverStart {
                    label: label.clone(),
                    value,
                    x: pointer.page_x,
                    y: pointer.page_y,
                });
                self.core.runtime.hovered = Some(label);
            }
            None => {
                if self.core.runtime.hovered.take().is_some() {
                    self.core.runtime.tooltip.hide(now_ms);
                    events.push(ChartEvent::HoverEnd);
                }
            }
        }

        for event in &events {
            self.emit_event(event.clone());
        }
        Ok(events)
    }

    /// The pointer left the drawing surface.
    pub fn pointer_leave(&mut self) -> Vec<ChartEvent> {
        if self.core.runtime.hovered.take().is_none() {
            return Vec::new();
        }
        let now_ms = self.core.runtime.clock_ms;
        self.core.runtime.tooltip.hide(now_ms);
        self.emit_event(ChartEvent::HoverEnd);
        vec![ChartEvent::HoverEnd]
    }

    /// Routes a click or tap; emits activate for the bar under the pointer.
    pub fn pointer_click(&mut self, pointer: PointerEvent) -> ChartResult<Vec<ChartEvent>> {
        validate_pointer(pointer)?;
        let Some(binding) = self.hit_test(pointer) else {
            return Ok(Vec::new());
        };
        let event = ChartEvent::Activate {
            label: binding.key.clone(),
            value: binding.datum.value,
        };
        debug!(label = %binding.key, "activate bar");
        self.emit_event(event.clone());
        Ok(vec![event])
    }

    #[must_use]
    pub fn hovered_label(&self) -> Option<&str> {
        self.core.runtime.hovered.as_deref()
    }

    #[must_use]
    pub fn bindings(&self) -> &BarBindings {
        &self.core.runtime.bindings
    }

    fn hit_test(&self, pointer: PointerEvent) -> Option<&BarBinding> {
        let now_ms = self.core.runtime.clock_ms;
        let (x, y) = self.core.model.plot.to_plot_space(pointer.x, pointer.y);
        let bars = &self.core.model.bars;
        self.core.runtime.bindings.hit_test(x, y, |key| {
            bars.get(key).map(|bar| bar.geometry_at(now_ms))
        })
    }
}

fn validate_pointer(pointer: PointerEvent) -> ChartResult<()> {
    if !pointer.is_finite() {
        return Err(ChartError::InvalidData(
            "pointer coordinates must be finite".to_owned(),
        ));
    }
    Ok(())
}
