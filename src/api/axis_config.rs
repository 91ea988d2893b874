use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Presentation of the bottom (label) and left (value) axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Target number of "nice" ticks on the value axis.
    #[serde(default = "default_value_tick_count")]
    pub value_tick_count: usize,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    /// Gap between the axis line and its tick labels.
    #[serde(default = "default_label_padding_px")]
    pub label_padding_px: f64,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: f64,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_color")]
    pub color: Color,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            value_tick_count: default_value_tick_count(),
            font_size_px: default_font_size_px(),
            label_padding_px: default_label_padding_px(),
            transition_duration_ms: default_transition_duration_ms(),
            stroke_width: default_stroke_width(),
            color: default_color(),
        }
    }
}

impl AxisConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_padding_px.is_finite() || self.label_padding_px < 0.0 {
            return Err(ChartError::InvalidData(
                "axis label padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.transition_duration_ms.is_finite() || self.transition_duration_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "axis transition duration must be finite and >= 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()?;
        Ok(self)
    }
}

fn default_value_tick_count() -> usize {
    10
}

fn default_font_size_px() -> f64 {
    10.0
}

fn default_label_padding_px() -> f64 {
    3.0
}

fn default_transition_duration_ms() -> f64 {
    250.0
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_color() -> Color {
    Color::BLACK
}
