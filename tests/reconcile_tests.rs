use approx::assert_abs_diff_eq;
use bar_chart_rs::api::{
    BarChange, BarIdAllocator, ChangeKind, ChartEngine, ChartEngineConfig, KeyedBars, ScaleSet,
    TransitionPlan, reconcile, validate_unique_labels,
};
use bar_chart_rs::core::{DataPoint, Easing, Margin, PlotArea, Viewport};
use bar_chart_rs::render::{Color, NullRenderer};
use bar_chart_rs::ChartError;

fn points(items: &[(&str, f64)]) -> Vec<DataPoint> {
    items
        .iter()
        .map(|(label, value)| DataPoint::new(*label, *value))
        .collect()
}

fn engine() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::default().with_margin(Margin::zero());
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.mount(Viewport::new(200, 100)).expect("mount");
    engine
}

#[test]
fn first_render_enters_every_label_from_the_baseline() {
    let mut engine = engine();
    let diff = engine
        .set_data(points(&[("A", 10.0), ("B", 50.0)]))
        .expect("set data")
        .expect("mounted engine reconciles");

    assert_eq!(diff.entered_count(), 2);
    assert_eq!(diff.updated_count(), 0);
    assert_eq!(diff.exited_count(), 0);
    for change in diff.entered() {
        let BarChange::Enter { from, .. } = change else {
            panic!("expected enter");
        };
        assert_eq!(from.height, 0.0);
        assert_eq!(from.y, 100.0);
    }
}

#[test]
fn two_bar_scenario_settles_on_expected_geometry() {
    let mut engine = engine();
    engine
        .set_data(points(&[("A", 10.0), ("B", 50.0)]))
        .expect("set data");
    engine.settle().expect("settle");

    let a = engine.bar("A").expect("A").geometry_at(engine.clock_ms());
    let b = engine.bar("B").expect("B").geometry_at(engine.clock_ms());
    assert_abs_diff_eq!(a.width, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(b.width, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(a.height, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(b.height, 100.0, epsilon = 1e-9);
}

#[test]
fn appended_label_enters_while_existing_label_persists() {
    let mut engine = engine();
    engine.set_data(points(&[("A", 5.0)])).expect("set data");
    let a_id = engine.bar("A").expect("A").id;
    engine.settle().expect("settle");

    let diff = engine
        .set_data(points(&[("A", 5.0), ("B", 9.0)]))
        .expect("set data")
        .expect("diff");

    assert_eq!(diff.exited_count(), 0);
    assert_eq!(diff.change("A").map(BarChange::kind), Some(ChangeKind::Update));
    assert_eq!(diff.change("A").map(BarChange::id), Some(a_id));
    match diff.change("B") {
        Some(BarChange::Enter { delay_ms, .. }) => assert_eq!(*delay_ms, 0.0),
        other => panic!("expected B to enter, got {other:?}"),
    }
    assert_eq!(engine.bar("A").expect("A").id, a_id);
}

#[test]
fn removed_label_exits_and_survivor_keeps_identity() {
    let mut engine = engine();
    engine
        .set_data(points(&[("A", 1.0), ("B", 2.0)]))
        .expect("set data");
    let b_id = engine.bar("B").expect("B").id;
    engine.settle().expect("settle");

    let diff = engine
        .set_data(points(&[("B", 2.0)]))
        .expect("set data")
        .expect("diff");

    assert_eq!(diff.exited_count(), 1);
    assert_eq!(diff.change("A").map(BarChange::kind), Some(ChangeKind::Exit));
    assert_eq!(diff.change("B").map(BarChange::id), Some(b_id));
    assert!(engine.bar("A").is_none());
    assert_eq!(engine.bar_count(), 1);
}

#[test]
fn changes_are_ordered_exits_then_updates_then_enters() {
    let mut engine = engine();
    engine
        .set_data(points(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]))
        .expect("set data");

    let diff = engine
        .set_data(points(&[("D", 1.0), ("B", 2.0), ("E", 3.0), ("C", 4.0)]))
        .expect("set data")
        .expect("diff");

    let kinds: Vec<ChangeKind> = diff.changes.iter().map(BarChange::kind).collect();
    assert_eq!(
        kinds,
        vec![
            ChangeKind::Exit,
            ChangeKind::Update,
            ChangeKind::Update,
            ChangeKind::Enter,
            ChangeKind::Enter,
        ]
    );
    let entering: Vec<&str> = diff.entered().map(BarChange::key).collect();
    assert_eq!(entering, vec!["D", "E"]);
}

#[test]
fn bars_follow_series_order_after_reordering() {
    let mut engine = engine();
    engine
        .set_data(points(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]))
        .expect("set data");
    engine
        .set_data(points(&[("C", 3.0), ("A", 1.0), ("B", 2.0)]))
        .expect("set data");
    engine.settle().expect("settle");

    let labels: Vec<&str> = engine.bars().map(|bar| bar.key.as_str()).collect();
    assert_eq!(labels, vec!["C", "A", "B"]);
    let now = engine.clock_ms();
    let xs: Vec<f64> = engine.bars().map(|bar| bar.geometry_at(now).x).collect();
    assert!(xs.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn empty_series_exits_every_bar() {
    let mut engine = engine();
    engine
        .set_data(points(&[("A", 1.0), ("B", 2.0)]))
        .expect("set data");

    let diff = engine
        .set_data(Vec::new())
        .expect("set data")
        .expect("diff");

    assert_eq!(diff.exited_count(), 2);
    assert_eq!(diff.entered_count(), 0);
    assert_eq!(diff.updated_count(), 0);
    assert_eq!(engine.bar_count(), 0);
}

#[test]
fn rendering_the_same_series_twice_only_updates() {
    let mut engine = engine();
    let series = points(&[("A", 3.0), ("B", 7.0), ("C", 1.0)]);
    engine.set_data(series.clone()).expect("set data");
    let targets: Vec<_> = engine.bars().map(|bar| bar.target()).collect();

    let diff = engine.set_data(series).expect("set data").expect("diff");

    assert_eq!(diff.entered_count(), 0);
    assert_eq!(diff.exited_count(), 0);
    assert_eq!(diff.updated_count(), 3);
    let next: Vec<_> = engine.bars().map(|bar| bar.target()).collect();
    assert_eq!(targets, next);
}

#[test]
fn update_data_edits_the_owned_series_in_place() {
    let mut engine = engine();
    engine
        .set_data(points(&[("A", 1.0), ("B", 2.0)]))
        .expect("set data");

    let diff = engine
        .update_data(|series| {
            series.retain(|point| point.label != "A");
            series.push(DataPoint::new("C", 4.0));
        })
        .expect("update data")
        .expect("diff");

    assert_eq!(diff.exited_count(), 1);
    assert_eq!(diff.entered_count(), 1);
    let labels: Vec<&str> = engine
        .series()
        .expect("series")
        .iter()
        .map(|point| point.label.as_str())
        .collect();
    assert_eq!(labels, vec!["B", "C"]);
}

#[test]
fn duplicate_labels_collapse_into_one_bar_with_later_value() {
    let mut engine = engine();
    engine
        .set_data(points(&[("A", 1.0), ("B", 2.0), ("A", 8.0)]))
        .expect("duplicates are accepted");

    assert_eq!(engine.bar_count(), 2);
    assert_eq!(engine.bar("A").expect("A").datum.value, 8.0);
    let labels: Vec<&str> = engine.bars().map(|bar| bar.key.as_str()).collect();
    assert_eq!(labels, vec!["A", "B"]);
}

#[test]
fn strict_hosts_can_reject_duplicate_labels_up_front() {
    let err = validate_unique_labels(&points(&[("A", 1.0), ("B", 2.0), ("A", 8.0)]))
        .expect_err("duplicate label");
    assert!(matches!(err, ChartError::DuplicateLabel { label } if label == "A"));
    assert!(validate_unique_labels(&points(&[("A", 1.0), ("B", 2.0)])).is_ok());
}

#[test]
fn pure_reconcile_consumes_previous_bars() {
    let plot = PlotArea::from_container(Viewport::new(200, 100), Margin::zero());
    let config = ChartEngineConfig::default();
    let plan = TransitionPlan {
        now_ms: 0.0,
        duration_ms: 250.0,
        stagger_ms: 10.0,
        easing: Easing::Linear,
        fill: Color::BLACK,
    };
    let mut ids = BarIdAllocator::default();

    let first = points(&[("A", 1.0)]);
    let outcome = reconcile(
        KeyedBars::new(),
        &first,
        &ScaleSet::resolve(&first, plot, &config),
        &plan,
        &mut ids,
    );
    let a_id = outcome.bars["A"].id;

    let second = points(&[("B", 1.0)]);
    let outcome = reconcile(
        outcome.bars,
        &second,
        &ScaleSet::resolve(&second, plot, &config),
        &plan,
        &mut ids,
    );
    assert_eq!(outcome.diff.exited().map(BarChange::id).collect::<Vec<_>>(), vec![a_id]);
    assert_ne!(outcome.bars["B"].id, a_id);
}
