//! Stateful chart facade.
//!
//! `ChartEngine` is split over several files, each adding one `impl` block:
//! data and lifecycle (`data_controller`), animation clock
//! (`animation_controller`), pointer routing (`interaction_controller`),
//! listeners, frame building and snapshots. Reconciliation itself is the pure
//! [`reconcile`] function.

mod animation_controller;
mod axis_config;
mod axis_ticks;
mod chart_model;
mod chart_runtime;
mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod lifecycle;
mod listener_registry;
mod reconcile;
mod render_frame_builder;
mod scale_coordinator;
mod snapshot_controller;
mod validation;

pub use axis_config::AxisConfig;
pub use axis_ticks::{AxisModel, AxisOrientation, AxisTickState, TickTarget};
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::{BarSnapshot, EngineSnapshot};
pub use lifecycle::ChartLifecycle;
pub use reconcile::{
    BarChange, BarDiff, BarId, BarIdAllocator, ChangeKind, KeyedBars, ReconcileOutcome,
    TransitionPlan, VisualBar, reconcile,
};
pub use scale_coordinator::ScaleSet;
pub use validation::{validate_series, validate_unique_labels};
