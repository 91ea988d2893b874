//! Collaborators that sit outside the reconciliation core.
//!
//! Listeners observe emitted events; the tooltip is the one text overlay the
//! engine paints on top of the bars.

pub mod listeners;
pub mod tooltip;

pub use listeners::{ActivationLogger, ChartListener, ListenerContext};
pub use tooltip::{Tooltip, TooltipConfig, TooltipState};
