use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartListener, ListenerContext};
use crate::interaction::ChartEvent;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Registers a listener with a unique, non-empty identifier.
    ///
    /// Listeners outlive re-renders; only bar bindings are rebuilt.
    pub fn register_listener(&mut self, listener: Box<dyn ChartListener>) -> ChartResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(ChartError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.has_listener(&listener_id) {
            return Err(ChartError::InvalidData(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        self.core.runtime.listeners.push(listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        if let Some(position) = self
            .core
            .runtime
            .listeners
            .iter()
            .position(|entry| entry.id() == listener_id)
        {
            self.core.runtime.listeners.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.core.runtime.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.core
            .runtime
            .listeners
            .iter()
            .any(|listener| listener.id() == listener_id)
    }

    pub(super) fn listener_context(&self) -> ListenerContext {
        ListenerContext {
            lifecycle: self.core.model.lifecycle,
            plot_area: self.core.model.plot,
            bar_count: self.core.model.bars.len(),
            clock_ms: self.core.runtime.clock_ms,
        }
    }

    pub(super) fn emit_event(&mut self, event: ChartEvent) {
        let context = self.listener_context();
        for listener in &mut self.core.runtime.listeners {
            listener.on_event(&event, context);
        }
    }
}
