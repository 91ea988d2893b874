//! Keyed enter/update/exit reconciliation.
//!
//! `reconcile` is a pure function over owned state: it consumes the previous
//! keyed bars, matches them against the new series by label, and returns both
//! the next keyed bars and a tagged diff describing what happened to every
//! key. It never fails; callers validate values before they get here.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{BarGeometry, DataPoint, Easing, Transition, baseline_bar, project_bar};
use crate::render::Color;

use super::ScaleSet;

/// Stable identity of one visual bar.
///
/// Allocated once when a label enters and kept for as long as the label
/// persists, so re-creation is observable as a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BarId(u64);

impl BarId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Monotonic source of [`BarId`]s, owned by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarIdAllocator {
    next: u64,
}

impl BarIdAllocator {
    pub fn allocate(&mut self) -> BarId {
        let id = BarId(self.next);
        self.next += 1;
        id
    }
}

/// One persistent bar element and its single (possibly finished) transition.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualBar {
    pub id: BarId,
    pub key: String,
    pub datum: DataPoint,
    pub fill: Color,
    pub transition: Transition<BarGeometry>,
}

impl VisualBar {
    /// Geometry as painted at `now_ms`.
    #[must_use]
    pub fn geometry_at(&self, now_ms: f64) -> BarGeometry {
        self.transition.sample(now_ms)
    }

    /// Geometry the bar settles on once its transition finishes.
    #[must_use]
    pub fn target(&self) -> BarGeometry {
        self.transition.target()
    }

    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        !self.transition.is_finished(now_ms)
    }
}

/// Live bars keyed by label, in paint (series) order.
pub type KeyedBars = IndexMap<String, VisualBar>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    Enter,
    Update,
    Exit,
}

/// What one reconciliation pass did to one key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BarChange {
    /// Removed immediately; `last` is the geometry it had when removed.
    Exit {
        key: String,
        id: BarId,
        last: BarGeometry,
    },
    /// Retargeted from its live geometry to the new projection.
    Update {
        key: String,
        id: BarId,
        from: BarGeometry,
        to: BarGeometry,
    },
    /// Created at the baseline and grown after `delay_ms`.
    Enter {
        key: String,
        id: BarId,
        from: BarGeometry,
        to: BarGeometry,
        delay_ms: f64,
    },
}

impl BarChange {
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Exit { key, .. } | Self::Update { key, .. } | Self::Enter { key, .. } => key,
        }
    }

    #[must_use]
    pub fn id(&self) -> BarId {
        match self {
            Self::Exit { id, .. } | Self::Update { id, .. } | Self::Enter { id, .. } => *id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ChangeKind {
        match self {
            Self::Exit { .. } => ChangeKind::Exit,
            Self::Update { .. } => ChangeKind::Update,
            Self::Enter { .. } => ChangeKind::Enter,
        }
    }
}

/// Ordered change list of one pass: exits, then updates, then enters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarDiff {
    pub changes: Vec<BarChange>,
}

impl BarDiff {
    fn of_kind(&self, kind: ChangeKind) -> impl Iterator<Item = &BarChange> {
        self.changes.iter().filter(move |change| change.kind() == kind)
    }

    pub fn entered(&self) -> impl Iterator<Item = &BarChange> {
        self.of_kind(ChangeKind::Enter)
    }

    pub fn updated(&self) -> impl Iterator<Item = &BarChange> {
        self.of_kind(ChangeKind::Update)
    }

    pub fn exited(&self) -> impl Iterator<Item = &BarChange> {
        self.of_kind(ChangeKind::Exit)
    }

    #[must_use]
    pub fn entered_count(&self) -> usize {
        self.entered().count()
    }

    #[must_use]
    pub fn updated_count(&self) -> usize {
        self.updated().count()
    }

    #[must_use]
    pub fn exited_count(&self) -> usize {
        self.exited().count()
    }

    #[must_use]
    pub fn change(&self, key: &str) -> Option<&BarChange> {
        self.changes.iter().find(|change| change.key() == key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Timing and style shared by every change in one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionPlan {
    pub now_ms: f64,
    pub duration_ms: f64,
    pub stagger_ms: f64,
    pub easing: Easing,
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileOutcome {
    pub bars: KeyedBars,
    pub diff: BarDiff,
}

/// Matches `previous` against `series` by label.
///
/// Repeated labels collapse into one key: the bar keeps the slot of the first
/// occurrence and the datum of the last. The returned bars are ordered like
/// the distinct labels of `series`.
pub fn reconcile(
    mut previous: KeyedBars,
    series: &[DataPoint],
    scales: &ScaleSet,
    plan: &TransitionPlan,
    ids: &mut BarIdAllocator,
) -> ReconcileOutcome {
    let mut targets: IndexMap<&str, &DataPoint> = IndexMap::with_capacity(series.len());
    for point in series {
        targets.insert(point.label.as_str(), point);
    }

    let mut exits = Vec::new();
    previous.retain(|key, bar| {
        let keep = targets.contains_key(key.as_str());
        if !keep {
            exits.push(BarChange::Exit {
                key: key.clone(),
                id: bar.id,
                last: bar.geometry_at(plan.now_ms),
            });
        }
        keep
    });

    let mut updates = Vec::new();
    let mut enters = Vec::new();
    let mut bars = KeyedBars::with_capacity(targets.len());

    for (key, datum) in targets {
        let Some(to) = project_bar(datum, &scales.band, scales.linear) else {
            continue;
        };

        let bar = match previous.swap_remove(key) {
            Some(mut bar) => {
                let from = bar.geometry_at(plan.now_ms);
                bar.transition =
                    bar.transition
                        .retarget(plan.now_ms, to, 0.0, plan.duration_ms, plan.easing);
                bar.datum = datum.clone();
                bar.fill = plan.fill;
                updates.push(BarChange::Update {
                    key: key.to_owned(),
                    id: bar.id,
                    from,
                    to,
                });
                bar
            }
            None => {
                let from = baseline_bar(key, &scales.band, scales.linear).unwrap_or(to);
                let delay_ms = enters.len() as f64 * plan.stagger_ms;
                let id = ids.allocate();
                enters.push(BarChange::Enter {
                    key: key.to_owned(),
                    id,
                    from,
                    to,
                    delay_ms,
                });
                VisualBar {
                    id,
                    key: key.to_owned(),
                    datum: datum.clone(),
                    fill: plan.fill,
                    transition: Transition::new(
                        from,
                        to,
                        plan.now_ms + delay_ms,
                        plan.duration_ms,
                        plan.easing,
                    ),
                }
            }
        };
        bars.insert(key.to_owned(), bar);
    }

    let mut changes = exits;
    changes.append(&mut updates);
    changes.append(&mut enters);

    ReconcileOutcome {
        bars,
        diff: BarDiff { changes },
    }
}

#[cfg(test)]
mod tests {
    use super::{BarChange, BarIdAllocator, KeyedBars, TransitionPlan, reconcile};
    use crate::api::ScaleSet;
    use crate::core::{BandScale, DataPoint, Easing, LinearScale};
    use crate::render::Color;

    fn scales(series: &[DataPoint]) -> ScaleSet {
        ScaleSet {
            band: BandScale::from_points(series, 200.0, 0.8),
            linear: LinearScale::from_points(series, 100.0, 1e-6),
        }
    }

    fn plan(now_ms: f64) -> TransitionPlan {
        TransitionPlan {
            now_ms,
            duration_ms: 250.0,
            stagger_ms: 10.0,
            easing: Easing::Linear,
            fill: Color::BLACK,
        }
    }

    #[test]
    fn entering_delays_follow_index_within_entering_set() {
        let series = vec![
            DataPoint::new("A", 1.0),
            DataPoint::new("B", 2.0),
            DataPoint::new("C", 3.0),
        ];
        let mut ids = BarIdAllocator::default();
        let outcome = reconcile(
            KeyedBars::new(),
            &series,
            &scales(&series),
            &plan(0.0),
            &mut ids,
        );
        let delays: Vec<f64> = outcome
            .diff
            .entered()
            .map(|change| match change {
                BarChange::Enter { delay_ms, .. } => *delay_ms,
                _ => f64::NAN,
            })
            .collect();
        assert_eq!(delays, vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn later_duplicate_wins_the_keyed_slot() {
        let series = vec![DataPoint::new("A", 1.0), DataPoint::new("A", 4.0)];
        let mut ids = BarIdAllocator::default();
        let outcome = reconcile(
            KeyedBars::new(),
            &series,
            &scales(&series),
            &plan(0.0),
            &mut ids,
        );
        assert_eq!(outcome.bars.len(), 1);
        assert_eq!(outcome.bars["A"].datum.value, 4.0);
        assert_eq!(outcome.diff.entered_count(), 1);
    }
}
