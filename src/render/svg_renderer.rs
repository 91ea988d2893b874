use std::fmt::Write;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, PaintStats, Primitive, RectPrimitive, RenderFrame, Renderer, TextHAlign};

/// Serializes each frame into a standalone SVG document.
///
/// The document scales with its container through `viewBox` and
/// `preserveAspectRatio="xMinYMin meet"`. Bars are `rect.bar` elements with
/// a `data-key` attribute holding their label; the tooltip backdrop is a
/// `rect.tooltip`.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    last_stats: PaintStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered document; empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> PaintStats {
        self.last_stats
    }

    fn write_frame(out: &mut String, frame: &RenderFrame) -> Result<PaintStats, std::fmt::Error> {
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut stats = PaintStats::default();

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="0 0 {width} {height}" preserveAspectRatio="xMinYMin meet" style="overflow: visible">"#
        )?;

        for primitive in frame.primitives() {
            match primitive {
                Primitive::Line(line) => writeln!(
                    out,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"{} stroke-width="{}"/>"#,
                    number(line.x1),
                    number(line.y1),
                    number(line.x2),
                    number(line.y2),
                    line.color.to_hex(),
                    opacity_attr("stroke-opacity", line.color),
                    number(line.stroke_width),
                )?,
                Primitive::Bar(bar) => {
                    write_rect(out, "bar", bar.rect)?;
                    writeln!(out, r#" data-key="{}"/>"#, escape(&bar.key))?;
                }
                Primitive::Backdrop(rect) => {
                    write_rect(out, "tooltip", *rect)?;
                    writeln!(out, "/>")?;
                }
                Primitive::Text(text) => {
                    let anchor = match text.h_align {
                        TextHAlign::Left => "start",
                        TextHAlign::Center => "middle",
                        TextHAlign::Right => "end",
                    };
                    writeln!(
                        out,
                        r#"  <text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="{anchor}" fill="{}"{}>{}</text>"#,
                        number(text.x),
                        number(text.y),
                        number(text.font_size_px),
                        text.color.to_hex(),
                        opacity_attr("fill-opacity", text.color),
                        escape(&text.text),
                    )?;
                }
            }
            stats.record(primitive);
        }

        writeln!(out, "</svg>")?;
        Ok(stats)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let mut document = String::with_capacity(256 + 96 * frame.primitive_count());
        let stats = Self::write_frame(&mut document, frame)
            .map_err(|err| ChartError::InvalidData(format!("failed to write svg: {err}")))?;
        self.document = document;
        self.last_stats = stats;
        Ok(())
    }
}

/// Opens a `<rect>` element; the caller closes it.
fn write_rect(out: &mut String, class: &str, rect: RectPrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"  <rect class="{class}" x="{}" y="{}" width="{}" height="{}" fill="{}"{}"#,
        number(rect.x),
        number(rect.y),
        number(rect.width),
        number(rect.height),
        rect.fill_color.to_hex(),
        opacity_attr("fill-opacity", rect.fill_color),
    )
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, number(color.alpha))
    }
}

fn number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        let text = format!("{rounded:.3}");
        text.trim_end_matches('0').to_owned()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
