use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{BarPrimitive, LinePrimitive, RectPrimitive, TextPrimitive, TooltipPrimitive};

/// Scene for one draw pass, grouped by layer.
///
/// Layers paint bottom to top: axis lines, bars in series order, axis
/// labels, then the tooltip overlay. A zero-sized viewport is a valid
/// (empty) scene.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub axis_lines: Vec<LinePrimitive>,
    pub bars: Vec<BarPrimitive>,
    pub axis_labels: Vec<TextPrimitive>,
    pub tooltip: Option<TooltipPrimitive>,
}

/// One primitive of a frame, as handed out by [`RenderFrame::primitives`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    Line(&'a LinePrimitive),
    Bar(&'a BarPrimitive),
    /// Unkeyed rect behind overlay text.
    Backdrop(&'a RectPrimitive),
    Text(&'a TextPrimitive),
}

impl Primitive<'_> {
    pub fn validate(self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Bar(bar) => bar.validate(),
            Self::Backdrop(rect) => rect.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

/// What a backend drew for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaintStats {
    pub lines_drawn: usize,
    pub bars_drawn: usize,
    pub backdrops_drawn: usize,
    pub texts_drawn: usize,
}

impl PaintStats {
    pub fn record(&mut self, primitive: Primitive<'_>) {
        match primitive {
            Primitive::Line(_) => self.lines_drawn += 1,
            Primitive::Bar(_) => self.bars_drawn += 1,
            Primitive::Backdrop(_) => self.backdrops_drawn += 1,
            Primitive::Text(_) => self.texts_drawn += 1,
        }
    }
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            axis_lines: Vec::new(),
            bars: Vec::new(),
            axis_labels: Vec::new(),
            tooltip: None,
        }
    }

    #[must_use]
    pub fn with_axis_line(mut self, line: LinePrimitive) -> Self {
        self.axis_lines.push(line);
        self
    }

    #[must_use]
    pub fn with_bar(mut self, bar: BarPrimitive) -> Self {
        self.bars.push(bar);
        self
    }

    #[must_use]
    pub fn with_axis_label(mut self, label: TextPrimitive) -> Self {
        self.axis_labels.push(label);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipPrimitive) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Every primitive in paint order.
    pub fn primitives(&self) -> impl Iterator<Item = Primitive<'_>> {
        let overlay = self.tooltip.iter().flat_map(|tooltip| {
            [
                Primitive::Backdrop(&tooltip.background),
                Primitive::Text(&tooltip.text),
            ]
        });
        self.axis_lines
            .iter()
            .map(Primitive::Line)
            .chain(self.bars.iter().map(Primitive::Bar))
            .chain(self.axis_labels.iter().map(Primitive::Text))
            .chain(overlay)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.primitives().try_for_each(Primitive::validate)
    }

    #[must_use]
    pub fn bar(&self, key: &str) -> Option<&BarPrimitive> {
        self.bars.iter().find(|bar| bar.key == key)
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.axis_lines.len()
            + self.bars.len()
            + self.axis_labels.len()
            + self.tooltip.as_ref().map_or(0, |_| 2)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}
