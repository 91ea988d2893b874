use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Easing, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    /// Horizontal axis under the plot; positions are plot-local x.
    Bottom,
    /// Vertical axis left of the plot; positions are plot-local y.
    Left,
}

/// One tick target handed to [`AxisModel::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct TickTarget {
    /// Identity of the tick across repaints.
    pub key: String,
    pub label: String,
    pub position: f64,
    /// Domain value for ticks that can follow a new scale while fading out.
    pub value: Option<f64>,
}

impl TickTarget {
    /// Category tick, identified by its label.
    #[must_use]
    pub fn category(label: impl Into<String>, position: f64) -> Self {
        let label = label.into();
        Self {
            key: label.clone(),
            label,
            position,
            value: None,
        }
    }

    /// Numeric tick, identified by its value so that a new label precision
    /// relabels the tick instead of replacing it.
    #[must_use]
    pub fn numeric(value: f64, label: impl Into<String>, position: f64) -> Self {
        // Adding zero folds -0 into 0.
        let key = format!("{}", value + 0.0);
        Self {
            key,
            label: label.into(),
            position,
            value: Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct AxisTick {
    label: String,
    value: Option<f64>,
    position: Transition<f64>,
    opacity: Transition<f64>,
    exiting: bool,
}

/// Tick as painted at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTickState {
    pub label: String,
    pub position: f64,
    pub opacity: f64,
}

/// Animated tick set of one axis, keyed by [`TickTarget::key`].
#[derive(Debug, Clone, PartialEq)]
pub struct AxisModel {
    orientation: AxisOrientation,
    ticks: IndexMap<String, AxisTick>,
    painted: bool,
}

impl AxisModel {
    #[must_use]
    pub fn new(orientation: AxisOrientation) -> Self {
        Self {
            orientation,
            ticks: IndexMap::new(),
            painted: false,
        }
    }

    #[must_use]
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    /// Moves the axis to `targets`.
    ///
    /// The first paint is immediate. Afterwards persisting ticks slide to
    /// their new position, new ticks fade in in place, and dropped ticks fade
    /// out while `remap` tells where their value lands on the new scale.
    pub fn update<F>(
        &mut self,
        targets: &[TickTarget],
        now_ms: f64,
        duration_ms: f64,
        easing: Easing,
        remap: F,
    ) where
        F: Fn(f64) -> f64,
    {
        if !self.painted {
            self.ticks = targets
                .iter()
                .map(|target| {
                    (
                        target.key.clone(),
                        AxisTick {
                            label: target.label.clone(),
                            value: target.value,
                            position: Transition::settled(target.position),
                            opacity: Transition::settled(1.0),
                            exiting: false,
                        },
                    )
                })
                .collect();
            self.painted = true;
            return;
        }

        for (key, tick) in &mut self.ticks {
            if targets.iter().any(|target| &target.key == key) {
                continue;
            }
            let destination = tick
                .value
                .map(&remap)
                .filter(|position| position.is_finite())
                .unwrap_or_else(|| tick.position.sample(now_ms));
            tick.position = tick
                .position
                .retarget(now_ms, destination, 0.0, duration_ms, easing);
            tick.opacity = tick.opacity.retarget(now_ms, 0.0, 0.0, duration_ms, easing);
            tick.exiting = true;
        }

        for target in targets {
            match self.ticks.get_mut(&target.key) {
                Some(tick) => {
                    tick.label.clone_from(&target.label);
                    tick.value = target.value;
                    tick.position =
                        tick.position
                            .retarget(now_ms, target.position, 0.0, duration_ms, easing);
                    tick.opacity = tick.opacity.retarget(now_ms, 1.0, 0.0, duration_ms, easing);
                    tick.exiting = false;
                }
                None => {
                    self.ticks.insert(
                        target.key.clone(),
                        AxisTick {
                            label: target.label.clone(),
                            value: target.value,
                            position: Transition::settled(target.position),
                            opacity: Transition::new(0.0, 1.0, now_ms, duration_ms, easing),
                            exiting: false,
                        },
                    );
                }
            }
        }
    }

    /// Drops ticks whose fade-out has finished.
    pub fn prune(&mut self, now_ms: f64) -> usize {
        let before = self.ticks.len();
        self.ticks
            .retain(|_, tick| !(tick.exiting && tick.opacity.is_finished(now_ms)));
        before - self.ticks.len()
    }

    #[must_use]
    pub fn ticks_at(&self, now_ms: f64) -> Vec<AxisTickState> {
        self.ticks
            .values()
            .map(|tick| AxisTickState {
                label: tick.label.clone(),
                position: tick.position.sample(now_ms),
                opacity: tick.opacity.sample(now_ms),
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Time at which the last tick transition ends.
    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.ticks
            .values()
            .map(|tick| tick.position.end_ms().max(tick.opacity.end_ms()))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.ticks.values().any(|tick| {
            !tick.position.is_finished(now_ms) || !tick.opacity.is_finished(now_ms)
        })
    }
}
