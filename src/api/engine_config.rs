use serde::{Deserialize, Serialize};

use crate::core::{Easing, Margin};
use crate::error::{ChartError, ChartResult};
use crate::extensions::TooltipConfig;
use crate::render::Color;

use super::AxisConfig;

/// Public engine bootstrap configuration.
///
/// Every field has a serde default, so hosts can persist only the settings
/// they override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default)]
    pub margin: Margin,
    /// Blank fraction of each band, in `[0, 1]`.
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: f64,
    /// Delay added per entering bar, by index within the entering set.
    #[serde(default = "default_enter_stagger_ms")]
    pub enter_stagger_ms: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default = "default_bar_fill")]
    pub bar_fill: Color,
    /// Floor for the value-axis maximum.
    #[serde(default = "default_domain_epsilon")]
    pub domain_epsilon: f64,
    #[serde(default)]
    pub round_to_pixels: bool,
    #[serde(default)]
    pub axis: AxisConfig,
    #[serde(default)]
    pub tooltip: TooltipConfig,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            band_padding: default_band_padding(),
            transition_duration_ms: default_transition_duration_ms(),
            enter_stagger_ms: default_enter_stagger_ms(),
            easing: Easing::default(),
            bar_fill: default_bar_fill(),
            domain_epsilon: default_domain_epsilon(),
            round_to_pixels: false,
            axis: AxisConfig::default(),
            tooltip: TooltipConfig::default(),
        }
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, band_padding: f64) -> Self {
        self.band_padding = band_padding;
        self
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, duration_ms: f64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_enter_stagger_ms(mut self, stagger_ms: f64) -> Self {
        self.enter_stagger_ms = stagger_ms;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_bar_fill(mut self, bar_fill: Color) -> Self {
        self.bar_fill = bar_fill;
        self
    }

    #[must_use]
    pub fn with_domain_epsilon(mut self, epsilon: f64) -> Self {
        self.domain_epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn with_round_to_pixels(mut self, round: bool) -> Self {
        self.round_to_pixels = round;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisConfig) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Checks ranges and finiteness of every field.
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("top", self.margin.top),
            ("right", self.margin.right),
            ("bottom", self.margin.bottom),
            ("left", self.margin.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.band_padding.is_finite() || !(0.0..=1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.transition_duration_ms.is_finite() || self.transition_duration_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "transition duration must be finite and >= 0".to_owned(),
            ));
        }
        if !self.enter_stagger_ms.is_finite() || self.enter_stagger_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "enter stagger must be finite and >= 0".to_owned(),
            ));
        }
        if !self.domain_epsilon.is_finite() || self.domain_epsilon <= 0.0 {
            return Err(ChartError::InvalidData(
                "domain epsilon must be finite and > 0".to_owned(),
            ));
        }
        self.bar_fill.validate()?;
        self.axis.validate()?;
        self.tooltip.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates a config document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

fn default_band_padding() -> f64 {
    0.8
}

fn default_transition_duration_ms() -> f64 {
    250.0
}

fn default_enter_stagger_ms() -> f64 {
    10.0
}

fn default_bar_fill() -> Color {
    Color::rgb(0.0, 0.4, 0.6)
}

fn default_domain_epsilon() -> f64 {
    1e-6
}
