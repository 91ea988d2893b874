use crate::extensions::{ChartListener, Tooltip};
use crate::interaction::BarBindings;

use super::{BarDiff, BarIdAllocator};

/// Per-session runtime state grouped separately from the chart model.
pub(super) struct ChartRuntimeState {
    pub(super) clock_ms: f64,
    pub(super) ids: BarIdAllocator,
    pub(super) generation: u64,
    pub(super) bindings: BarBindings,
    pub(super) hovered: Option<String>,
    pub(super) tooltip: Tooltip,
    pub(super) listeners: Vec<Box<dyn ChartListener>>,
    pub(super) last_diff: Option<BarDiff>,
}

impl ChartRuntimeState {
    pub(super) fn new(tooltip: Tooltip) -> Self {
        Self {
            clock_ms: 0.0,
            ids: BarIdAllocator::default(),
            generation: 0,
            bindings: BarBindings::default(),
            hovered: None,
            tooltip,
            listeners: Vec::new(),
            last_diff: None,
        }
    }
}
