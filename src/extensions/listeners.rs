use serde::{Deserialize, Serialize};

use crate::api::ChartLifecycle;
use crate::core::PlotArea;
use crate::interaction::ChartEvent;

/// Read-only state passed alongside every event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ListenerContext {
    pub lifecycle: ChartLifecycle,
    pub plot_area: PlotArea,
    pub bar_count: usize,
    pub clock_ms: f64,
}

/// Observer for hover and activation events.
///
/// Listeners are registered once on the engine and survive re-renders; only
/// the bar bindings behind them are rebuilt.
pub trait ChartListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ChartEvent, context: ListenerContext);
}

/// Listener that writes activations to the `tracing` log.
#[derive(Debug, Default)]
pub struct ActivationLogger;

impl ChartListener for ActivationLogger {
    fn id(&self) -> &str {
        "activation-logger"
    }

    fn on_event(&mut self, event: &ChartEvent, _context: ListenerContext) {
        if let ChartEvent::Activate { label, value } = event {
            tracing::info!(label = %label, value, "bar activated");
        }
    }
}
