//! bar-chart-rs: animated bar chart engine with keyed reconciliation.
//!
//! A series of `(label, value)` records is mapped onto persistent bars through
//! an explicit enter/update/exit diff. Scales are recomputed from the data on
//! every change, and transitions are sampled against an engine-owned clock so
//! hosts decide when frames are painted.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartLifecycle};
pub use error::{ChartError, ChartResult};
