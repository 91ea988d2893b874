mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::{PaintStats, Primitive, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    BarPrimitive, Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TooltipPrimitive,
};
pub use svg_renderer::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from reconciliation, animation and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoRenderer;
