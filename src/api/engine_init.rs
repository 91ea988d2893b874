use tracing::debug;

use crate::error::ChartResult;
use crate::extensions::Tooltip;
use crate::render::Renderer;

use super::{
    ChartEngine, ChartEngineConfig, chart_model::ChartModel, chart_runtime::ChartRuntimeState,
    engine_core::EngineCore,
};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an unmounted engine.
    ///
    /// Nothing is drawn until a container is supplied with
    /// [`ChartEngine::mount`].
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        debug!(
            band_padding = config.band_padding,
            transition_duration_ms = config.transition_duration_ms,
            "create chart engine"
        );
        Ok(Self {
            renderer,
            core: EngineCore {
                model: ChartModel::new(config),
                runtime: ChartRuntimeState::new(Tooltip::new(config.tooltip)),
            },
        })
    }
}
