//! Pointer input, emitted chart events, and per-render bar bindings.
//!
//! Bindings hold no state beyond the element set they were built for: the
//! engine replaces them wholesale after every reconciliation, so handlers can
//! never accumulate or point at bars that no longer exist.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{BarGeometry, DataPoint};

/// One pointer sample delivered by the host.
///
/// `x`/`y` are relative to the drawing surface and drive hit testing.
/// `page_x`/`page_y` are absolute page coordinates and are forwarded verbatim
/// in emitted events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerEvent {
    /// Pointer event for hosts where the surface sits at the page origin.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            page_x: x,
            page_y: y,
        }
    }

    #[must_use]
    pub fn with_page(mut self, page_x: f64, page_y: f64) -> Self {
        self.page_x = page_x;
        self.page_y = page_y;
        self
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.page_x.is_finite() && self.page_y.is_finite()
    }
}

/// Events emitted towards external collaborators (tooltip, logging, host).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    HoverStart {
        label: String,
        value: f64,
        x: f64,
        y: f64,
    },
    HoverEnd,
    Activate {
        label: String,
        value: f64,
    },
}

/// Event routing entry for one live bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarBinding {
    pub key: String,
    pub datum: DataPoint,
}

/// Handlers bound to exactly the bars of one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarBindings {
    generation: u64,
    bindings: Vec<BarBinding>,
}

impl BarBindings {
    /// Binds one entry per datum, in paint order.
    #[must_use]
    pub fn bind<'a, I>(generation: u64, data: I) -> Self
    where
        I: IntoIterator<Item = &'a DataPoint>,
    {
        let bindings = data
            .into_iter()
            .map(|datum| BarBinding {
                key: datum.label.clone(),
                datum: datum.clone(),
            })
            .collect();
        Self {
            generation,
            bindings,
        }
    }

    /// Reconciliation pass these bindings belong to.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BarBinding> {
        self.bindings.iter()
    }

    /// Topmost bar under the plot-local point, using each bar's live geometry.
    ///
    /// Bars are painted in binding order, so later bindings win overlaps.
    pub fn hit_test<F>(&self, x: f64, y: f64, geometry_of: F) -> Option<&BarBinding>
    where
        F: Fn(&str) -> Option<BarGeometry>,
    {
        let hit = self.bindings.iter().rev().find(|binding| {
            geometry_of(&binding.key).is_some_and(|geometry| geometry.contains(x, y))
        });
        trace!(x, y, hit = hit.map(|binding| binding.key.as_str()), "bar hit test");
        hit
    }
}
