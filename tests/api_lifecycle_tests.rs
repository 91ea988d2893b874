use bar_chart_rs::api::{ChartEngine, ChartEngineConfig, ChartLifecycle};
use bar_chart_rs::core::{DataPoint, Viewport};
use bar_chart_rs::render::NullRenderer;
use bar_chart_rs::{ChartError, ChartResult};

fn sample() -> Vec<DataPoint> {
    vec![DataPoint::new("A", 10.0), DataPoint::new("B", 50.0)]
}

fn new_engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine init")
}

#[test]
fn new_engine_starts_uninitialized() {
    let engine = new_engine();
    assert_eq!(engine.lifecycle(), ChartLifecycle::Uninitialized);
    assert!(engine.container().is_none());
    assert!(engine.series().is_none());
    assert_eq!(engine.bar_count(), 0);
}

#[test]
fn render_and_resize_require_a_mounted_surface() {
    let mut engine = new_engine();
    assert!(matches!(
        engine.render(),
        Err(ChartError::InvalidLifecycle {
            operation: "render",
            state: ChartLifecycle::Uninitialized
        })
    ));
    assert!(matches!(
        engine.resize(Viewport::new(100, 100)),
        Err(ChartError::InvalidLifecycle {
            operation: "resize",
            ..
        })
    ));
}

#[test]
fn data_before_mount_is_staged_and_rendered_on_mount() {
    let mut engine = new_engine();
    let staged = engine.set_data(sample()).expect("set data");
    assert!(staged.is_none());
    assert_eq!(engine.lifecycle(), ChartLifecycle::Uninitialized);
    assert_eq!(engine.series().map(<[DataPoint]>::len), Some(2));
    assert_eq!(engine.bar_count(), 0);

    let diff = engine
        .mount(Viewport::new(800, 400))
        .expect("mount")
        .expect("staged data renders on mount");
    assert_eq!(diff.entered_count(), 2);
    assert_eq!(engine.lifecycle(), ChartLifecycle::Rendered);
    assert_eq!(engine.generation(), 1);
}

#[test]
fn mount_without_data_stops_at_mounted() {
    let mut engine = new_engine();
    let diff = engine.mount(Viewport::new(800, 400)).expect("mount");
    assert!(diff.is_none());
    assert_eq!(engine.lifecycle(), ChartLifecycle::Mounted);

    engine.render().expect("mounted chart renders axes");
    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_stats.bars_drawn, 0);
    assert_eq!(renderer.last_stats.lines_drawn, 2);

    engine.set_data(sample()).expect("set data");
    assert_eq!(engine.lifecycle(), ChartLifecycle::Rendered);
}

#[test]
fn mounting_twice_is_rejected() {
    let mut engine = new_engine();
    engine.mount(Viewport::new(800, 400)).expect("mount");
    let err = engine
        .mount(Viewport::new(800, 400))
        .expect_err("second mount must fail");
    assert!(matches!(
        err,
        ChartError::InvalidLifecycle {
            operation: "mount",
            state: ChartLifecycle::Mounted
        }
    ));
}

#[test]
fn every_data_change_rerenders() -> ChartResult<()> {
    let mut engine = new_engine();
    engine.mount(Viewport::new(800, 400))?;
    engine.set_data(sample())?;
    engine.set_data(sample())?;
    engine.update_data(|series| series.push(DataPoint::new("C", 1.0)))?;
    assert_eq!(engine.generation(), 3);
    assert_eq!(engine.lifecycle(), ChartLifecycle::Rendered);
    assert_eq!(engine.bar_count(), 3);
    Ok(())
}

#[test]
fn non_finite_values_are_rejected_and_keep_previous_series() {
    let mut engine = new_engine();
    engine.mount(Viewport::new(800, 400)).expect("mount");
    engine.set_data(sample()).expect("set data");

    let err = engine
        .set_data(vec![DataPoint::new("A", f64::NAN)])
        .expect_err("NaN must be rejected");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(
        engine
            .set_data(vec![DataPoint::new("A", f64::INFINITY)])
            .is_err()
    );
    assert_eq!(engine.series(), Some(sample().as_slice()));
    assert_eq!(engine.bar_count(), 2);
    assert_eq!(engine.generation(), 1);
}

#[test]
fn all_zero_values_degrade_to_a_flat_chart() {
    let mut engine = new_engine();
    engine.mount(Viewport::new(800, 400)).expect("mount");
    engine
        .set_data(vec![DataPoint::new("A", 0.0), DataPoint::new("B", -3.0)])
        .expect("degenerate data is accepted");
    engine.settle().expect("settle");

    let now = engine.clock_ms();
    for bar in engine.bars() {
        let geometry = bar.geometry_at(now);
        assert!(geometry.is_finite());
        assert_eq!(geometry.height, 0.0);
    }
    engine.render().expect("flat chart renders");
}

#[test]
fn zero_size_container_renders_empty_until_resized() {
    let mut engine = new_engine();
    engine.set_data(sample()).expect("set data");
    engine.mount(Viewport::new(0, 0)).expect("zero-size mount is allowed");
    engine.settle().expect("settle");

    let now = engine.clock_ms();
    assert!(engine.bars().all(|bar| bar.geometry_at(now).width == 0.0));
    let frame = engine.build_render_frame();
    assert!(frame.is_empty());
    engine.render().expect("empty frame is valid");

    let diff = engine
        .resize(Viewport::new(240, 140))
        .expect("resize")
        .expect("rendered chart re-renders on resize");
    assert_eq!(diff.updated_count(), 2);
    assert_eq!(diff.entered_count(), 0);
    engine.settle().expect("settle");
    let now = engine.clock_ms();
    for bar in engine.bars() {
        assert!((bar.geometry_at(now).width - 20.0).abs() <= 1e-9);
    }
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = ChartEngineConfig::default().with_band_padding(1.5);
    assert!(matches!(
        ChartEngine::new(NullRenderer::default(), config),
        Err(ChartError::InvalidData(_))
    ));
}
