use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::engine_core::EngineCore;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the series, the keyed bars of the previous
/// reconciliation, the animated axes and the tooltip, and hands fully built
/// frames to its renderer.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> ChartEngine<R> {
    /// Paints the current state at the current clock.
    pub fn render(&mut self) -> ChartResult<()> {
        let lifecycle = self.core.model.lifecycle;
        if !lifecycle.is_mounted() {
            return Err(ChartError::InvalidLifecycle {
                operation: "render",
                state: lifecycle,
            });
        }
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
