use serde::{Deserialize, Serialize};

/// Controller state machine: `Uninitialized -> Mounted -> Rendered`.
///
/// `Rendered` is re-entered on every data change; there is no way back to an
/// earlier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartLifecycle {
    /// No container has been measured yet. Data may be staged.
    #[default]
    Uninitialized,
    /// The drawing surface and axis scaffolding exist but no data was drawn.
    Mounted,
    /// At least one reconciliation pass has run.
    Rendered,
}

impl ChartLifecycle {
    #[must_use]
    pub fn is_mounted(self) -> bool {
        !matches!(self, Self::Uninitialized)
    }

    #[must_use]
    pub fn has_rendered(self) -> bool {
        matches!(self, Self::Rendered)
    }
}
