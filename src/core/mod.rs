pub mod band_scale;
pub mod bar_geometry;
pub mod scale;
pub mod ticks;
pub mod transition;
pub mod types;

pub use band_scale::{Band, BandScale};
pub use bar_geometry::{BarGeometry, baseline_bar, project_bar};
pub use scale::LinearScale;
pub use ticks::{format_tick, nice_tick_step, nice_ticks};
pub use transition::{Easing, Lerp, Transition};
pub use types::{DataPoint, Margin, PlotArea, Viewport};
