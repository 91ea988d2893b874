use serde::{Deserialize, Serialize};

use crate::core::{BarGeometry, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::TooltipState;
use crate::render::Color;

use super::{AxisTickState, BarId, ChartLifecycle};

/// One bar as captured by [`EngineSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSnapshot {
    pub id: BarId,
    pub label: String,
    pub value: f64,
    pub current: BarGeometry,
    pub target: BarGeometry,
    pub fill: Color,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub lifecycle: ChartLifecycle,
    pub container: Option<Viewport>,
    pub plot_area: PlotArea,
    pub clock_ms: f64,
    pub generation: u64,
    pub bars: Vec<BarSnapshot>,
    pub label_ticks: Vec<AxisTickState>,
    pub value_ticks: Vec<AxisTickState>,
    pub hovered: Option<String>,
    pub tooltip: TooltipState,
}

impl EngineSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot: {e}")))
    }
}
