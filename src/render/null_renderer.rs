use crate::error::ChartResult;
use crate::render::{PaintStats, RenderFrame, Renderer};

/// Renderer that draws nothing, used by tests and headless hosts.
///
/// Frames are still validated and walked in paint order, so `last_stats`
/// reports what a real backend would have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_stats: PaintStats,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let mut stats = PaintStats::default();
        frame.primitives().for_each(|primitive| stats.record(primitive));
        self.frames_rendered += 1;
        self.last_stats = stats;
        Ok(())
    }
}
