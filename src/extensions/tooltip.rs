use serde::{Deserialize, Serialize};

use crate::core::{Easing, Transition};
use crate::error::{ChartError, ChartResult};
use crate::interaction::PointerEvent;
use crate::render::Color;

/// Presentation of the hover tooltip overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    #[serde(default = "default_visible_opacity")]
    pub visible_opacity: f64,
    #[serde(default = "default_fade_in_ms")]
    pub fade_in_ms: f64,
    #[serde(default = "default_fade_out_ms")]
    pub fade_out_ms: f64,
    #[serde(default = "default_offset_x")]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    #[serde(default = "default_text_color")]
    pub text_color: Color,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            visible_opacity: default_visible_opacity(),
            fade_in_ms: default_fade_in_ms(),
            fade_out_ms: default_fade_out_ms(),
            offset_x: default_offset_x(),
            offset_y: 0.0,
            font_size_px: default_font_size_px(),
            text_color: default_text_color(),
            background_color: default_background_color(),
        }
    }
}

impl TooltipConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.visible_opacity.is_finite() || !(0.0..=1.0).contains(&self.visible_opacity) {
            return Err(ChartError::InvalidData(
                "tooltip opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        for (name, value) in [
            ("fade_in_ms", self.fade_in_ms),
            ("fade_out_ms", self.fade_out_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "tooltip `{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.offset_x.is_finite() || !self.offset_y.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip offsets must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "tooltip font size must be finite and > 0".to_owned(),
            ));
        }
        self.text_color.validate()?;
        self.background_color.validate()?;
        Ok(self)
    }
}

/// Serializable view of the tooltip at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub text: String,
    pub opacity: f64,
    /// Page-space position (`pageX + offset_x`, `pageY + offset_y`).
    pub page_left: f64,
    pub page_top: f64,
    /// Surface-space anchor used when painting into the chart frame.
    pub surface_left: f64,
    pub surface_top: f64,
}

/// The chart's single text overlay, driven only by hover events.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    config: TooltipConfig,
    text: String,
    page: (f64, f64),
    surface: (f64, f64),
    opacity: Transition<f64>,
}

impl Tooltip {
    #[must_use]
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            text: String::new(),
            page: (0.0, 0.0),
            surface: (0.0, 0.0),
            opacity: Transition::settled(0.0),
        }
    }

    #[must_use]
    pub fn config(&self) -> TooltipConfig {
        self.config
    }

    /// Shows `"{label} : {value}"` next to the pointer and fades in.
    pub fn show(&mut self, label: &str, value: f64, pointer: PointerEvent, now_ms: f64) {
        self.refresh(label, value);
        self.page = (
            pointer.page_x + self.config.offset_x,
            pointer.page_y + self.config.offset_y,
        );
        self.surface = (
            pointer.x + self.config.offset_x,
            pointer.y + self.config.offset_y,
        );
        self.opacity = self.opacity.retarget(
            now_ms,
            self.config.visible_opacity,
            0.0,
            self.config.fade_in_ms,
            Easing::CubicInOut,
        );
    }

    /// Rewrites the text for a datum whose value changed under the pointer.
    ///
    /// Position and opacity are left alone.
    pub fn refresh(&mut self, label: &str, value: f64) {
        self.text = format!("{label} : {value}");
    }

    /// Fades out, keeping text and position until fully transparent.
    pub fn hide(&mut self, now_ms: f64) {
        self.opacity =
            self.opacity
                .retarget(now_ms, 0.0, 0.0, self.config.fade_out_ms, Easing::CubicInOut);
    }

    #[must_use]
    pub fn opacity(&self, now_ms: f64) -> f64 {
        self.opacity.sample(now_ms)
    }

    #[must_use]
    pub fn is_visible(&self, now_ms: f64) -> bool {
        !self.text.is_empty() && self.opacity(now_ms) > 0.0
    }

    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        !self.opacity.is_finished(now_ms)
    }

    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.opacity.end_ms()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn state(&self, now_ms: f64) -> TooltipState {
        TooltipState {
            text: self.text.clone(),
            opacity: self.opacity(now_ms),
            page_left: self.page.0,
            page_top: self.page.1,
            surface_left: self.surface.0,
            surface_top: self.surface.1,
        }
    }
}

fn default_visible_opacity() -> f64 {
    0.7
}

fn default_fade_in_ms() -> f64 {
    100.0
}

fn default_fade_out_ms() -> f64 {
    50.0
}

fn default_offset_x() -> f64 {
    -20.0
}

fn default_font_size_px() -> f64 {
    12.0
}

fn default_text_color() -> Color {
    Color::WHITE
}

fn default_background_color() -> Color {
    Color::rgb(0.2, 0.2, 0.2)
}

#[cfg(test)]
mod tests {
    use super::{Tooltip, TooltipConfig};
    use crate::interaction::PointerEvent;

    #[test]
    fn show_formats_label_and_value_and_offsets_page_position() {
        let mut tooltip = Tooltip::new(TooltipConfig::default());
        tooltip.show("Index 3", 42.0, PointerEvent::at(10.0, 20.0).with_page(110.0, 220.0), 0.0);

        let state = tooltip.state(100.0);
        assert_eq!(state.text, "Index 3 : 42");
        assert_eq!(state.page_left, 90.0);
        assert_eq!(state.page_top, 220.0);
        assert_eq!(state.surface_left, -10.0);
        assert!((state.opacity - 0.7).abs() <= 1e-12);
    }

    #[test]
    fn hide_fades_to_transparent() {
        let mut tooltip = Tooltip::new(TooltipConfig::default());
        tooltip.show("A", 1.0, PointerEvent::at(0.0, 0.0), 0.0);
        tooltip.hide(200.0);
        assert!(tooltip.is_visible(225.0));
        assert!(!tooltip.is_visible(250.0));
    }

    #[test]
    fn refresh_replaces_text_without_moving_or_fading() {
        let mut tooltip = Tooltip::new(TooltipConfig::default());
        tooltip.show("A", 1.0, PointerEvent::at(5.0, 5.0), 0.0);
        let before = tooltip.state(100.0);

        tooltip.refresh("A", 2.5);
        let after = tooltip.state(100.0);
        assert_eq!(after.text, "A : 2.5");
        assert_eq!(after.opacity, before.opacity);
        assert_eq!(after.surface_left, before.surface_left);
    }
}
