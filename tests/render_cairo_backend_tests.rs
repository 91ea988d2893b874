#![cfg(feature = "cairo-backend")]

use bar_chart_rs::ChartError;
use bar_chart_rs::api::{ChartEngine, ChartEngineConfig};
use bar_chart_rs::core::{DataPoint, Viewport};
use bar_chart_rs::render::{CairoRenderer, Color};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, .. }));
}

#[test]
fn cairo_renderer_paints_bars_axes_and_labels() {
    let renderer = CairoRenderer::new(900, 500).expect("renderer");
    let mut engine =
        ChartEngine::new(renderer, ChartEngineConfig::default()).expect("engine init");
    engine.mount(Viewport::new(900, 500)).expect("mount");
    engine
        .set_data(vec![
            DataPoint::new("A", 10.0),
            DataPoint::new("B", 20.0),
            DataPoint::new("C", 15.0),
        ])
        .expect("set data");
    engine.settle().expect("settle");

    engine.render().expect("render");
    let renderer = engine.into_renderer();
    let stats = renderer.last_stats();

    assert_eq!(stats.lines_drawn, 2);
    assert_eq!(stats.bars_drawn, 3);
    assert_eq!(stats.backdrops_drawn, 0);
    assert_eq!(stats.texts_drawn, 3 + 11);
}

#[test]
fn cairo_renderer_exports_png() {
    let mut renderer = CairoRenderer::new(120, 80).expect("renderer");
    renderer
        .set_clear_color(Color::rgb(0.9, 0.9, 0.9))
        .expect("clear color");
    let mut engine =
        ChartEngine::new(renderer, ChartEngineConfig::default()).expect("engine init");
    engine.mount(Viewport::new(120, 80)).expect("mount");
    engine
        .set_data(vec![DataPoint::new("A", 1.0)])
        .expect("set data");
    engine.settle().expect("settle");
    engine.render().expect("render");

    let mut png = Vec::new();
    engine.renderer().write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn invalid_clear_color_is_rejected() {
    let mut renderer = CairoRenderer::new(10, 10).expect("renderer");
    assert!(renderer.set_clear_color(Color::rgba(2.0, 0.0, 0.0, 1.0)).is_err());
}
