use std::cell::RefCell;
use std::rc::Rc;

use bar_chart_rs::api::{ChartEngine, ChartEngineConfig, ChartLifecycle};
use bar_chart_rs::core::{DataPoint, Margin, Viewport};
use bar_chart_rs::extensions::{ChartListener, ListenerContext};
use bar_chart_rs::interaction::{ChartEvent, PointerEvent};
use bar_chart_rs::render::NullRenderer;
use bar_chart_rs::{ChartError, ChartResult};

#[derive(Clone)]
struct RecordingListener {
    id: String,
    events: Rc<RefCell<Vec<(ChartEvent, ListenerContext)>>>,
}

impl RecordingListener {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(ChartEvent, ListenerContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartListener for RecordingListener {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &ChartEvent, context: ListenerContext) {
        self.events.borrow_mut().push((event.clone(), context));
    }
}

/// A at x in [40, 60) with height 20, B at x in [140, 160) with height 100.
fn settled_engine() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::default().with_margin(Margin::zero());
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.mount(Viewport::new(200, 100)).expect("mount");
    engine
        .set_data(vec![DataPoint::new("A", 10.0), DataPoint::new("B", 50.0)])
        .expect("set data");
    engine.settle().expect("settle");
    engine
}

fn hover_start(label: &str, value: f64, x: f64, y: f64) -> ChartEvent {
    ChartEvent::HoverStart {
        label: label.to_owned(),
        value,
        x,
        y,
    }
}

#[test]
fn hover_emits_exactly_one_start_with_page_coordinates() -> ChartResult<()> {
    let mut engine = settled_engine();

    let events =
        engine.pointer_move(PointerEvent::at(50.0, 90.0).with_page(350.0, 490.0))?;
    assert_eq!(events, vec![hover_start("A", 10.0, 350.0, 490.0)]);
    assert_eq!(engine.hovered_label(), Some("A"));

    let events = engine.pointer_move(PointerEvent::at(55.0, 95.0))?;
    assert!(events.is_empty());
    Ok(())
}

#[test]
fn leaving_a_bar_emits_exactly_one_hover_end() -> ChartResult<()> {
    let mut engine = settled_engine();
    engine.pointer_move(PointerEvent::at(50.0, 90.0))?;

    let events = engine.pointer_move(PointerEvent::at(100.0, 50.0))?;
    assert_eq!(events, vec![ChartEvent::HoverEnd]);
    assert!(engine.pointer_move(PointerEvent::at(101.0, 50.0))?.is_empty());
    assert!(engine.pointer_leave().is_empty());
    assert!(engine.hovered_label().is_none());
    Ok(())
}

#[test]
fn moving_directly_between_bars_ends_then_starts() -> ChartResult<()> {
    let mut engine = settled_engine();
    engine.pointer_move(PointerEvent::at(150.0, 10.0))?;

    let events = engine.pointer_move(PointerEvent::at(45.0, 85.0))?;
    assert_eq!(
        events,
        vec![ChartEvent::HoverEnd, hover_start("A", 10.0, 45.0, 85.0)]
    );
    Ok(())
}

#[test]
fn pointer_leave_ends_an_active_hover() {
    let mut engine = settled_engine();
    engine
        .pointer_move(PointerEvent::at(150.0, 10.0))
        .expect("pointer move");
    assert_eq!(engine.pointer_leave(), vec![ChartEvent::HoverEnd]);
    assert!(engine.pointer_leave().is_empty());
}

#[test]
fn empty_space_above_a_short_bar_is_not_a_hit() -> ChartResult<()> {
    let mut engine = settled_engine();
    assert!(engine.pointer_move(PointerEvent::at(50.0, 10.0))?.is_empty());
    Ok(())
}

#[test]
fn bars_still_at_the_baseline_are_not_hoverable() -> ChartResult<()> {
    let config = ChartEngineConfig::default().with_margin(Margin::zero());
    let mut engine = ChartEngine::new(NullRenderer::default(), config)?;
    engine.mount(Viewport::new(200, 100))?;
    engine.set_data(vec![DataPoint::new("A", 10.0)])?;
    assert!(engine.pointer_move(PointerEvent::at(100.0, 99.0))?.is_empty());
    Ok(())
}

#[test]
fn click_emits_activate_for_the_bar_under_the_pointer() -> ChartResult<()> {
    let mut engine = settled_engine();
    let events = engine.pointer_click(PointerEvent::at(150.0, 50.0))?;
    assert_eq!(
        events,
        vec![ChartEvent::Activate {
            label: "B".to_owned(),
            value: 50.0
        }]
    );
    assert!(engine.pointer_click(PointerEvent::at(100.0, 50.0))?.is_empty());
    Ok(())
}

#[test]
fn non_finite_pointer_is_rejected() {
    let mut engine = settled_engine();
    assert!(matches!(
        engine.pointer_move(PointerEvent::at(f64::NAN, 1.0)),
        Err(ChartError::InvalidData(_))
    ));
    assert!(engine.pointer_click(PointerEvent::at(1.0, f64::INFINITY)).is_err());
}

#[test]
fn hovered_bar_that_exits_emits_hover_end() -> ChartResult<()> {
    let mut engine = settled_engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine.register_listener(Box::new(RecordingListener::new("recorder", events.clone())))?;
    engine.pointer_move(PointerEvent::at(50.0, 90.0))?;

    engine.set_data(vec![DataPoint::new("B", 50.0)])?;

    let recorded: Vec<ChartEvent> = events.borrow().iter().map(|(e, _)| e.clone()).collect();
    assert_eq!(
        recorded,
        vec![hover_start("A", 10.0, 50.0, 90.0), ChartEvent::HoverEnd]
    );
    assert!(engine.hovered_label().is_none());
    Ok(())
}

#[test]
fn tooltip_follows_a_value_change_of_the_hovered_bar() -> ChartResult<()> {
    let mut engine = settled_engine();
    engine.pointer_move(PointerEvent::at(50.0, 90.0))?;
    engine.advance_time(100.0)?;
    assert_eq!(engine.tooltip().text, "A : 10");

    engine.set_data(vec![DataPoint::new("A", 30.0), DataPoint::new("B", 50.0)])?;

    assert_eq!(engine.hovered_label(), Some("A"));
    assert_eq!(engine.tooltip().text, "A : 30");
    assert!(engine.tooltip().opacity > 0.0);
    Ok(())
}

#[test]
fn handlers_are_rebound_to_the_live_bar_set_only() -> ChartResult<()> {
    let mut engine = settled_engine();
    let first_generation = engine.bindings().generation();
    engine.set_data(vec![DataPoint::new("C", 5.0)])?;
    engine.set_data(vec![DataPoint::new("C", 5.0)])?;

    let bindings = engine.bindings();
    assert_eq!(bindings.generation(), first_generation + 2);
    assert_eq!(bindings.len(), 1);
    let keys: Vec<&str> = bindings.iter().map(|binding| binding.key.as_str()).collect();
    assert_eq!(keys, vec!["C"]);
    Ok(())
}

#[test]
fn listeners_receive_events_with_context() -> ChartResult<()> {
    let mut engine = settled_engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine.register_listener(Box::new(RecordingListener::new("recorder", events.clone())))?;

    engine.pointer_click(PointerEvent::at(50.0, 95.0))?;

    let recorded = events.borrow();
    assert_eq!(recorded.len(), 1);
    let (event, context) = &recorded[0];
    assert!(matches!(event, ChartEvent::Activate { label, .. } if label == "A"));
    assert_eq!(context.lifecycle, ChartLifecycle::Rendered);
    assert_eq!(context.bar_count, 2);
    assert_eq!(context.clock_ms, engine.clock_ms());
    Ok(())
}

#[test]
fn listener_registration_rejects_empty_and_duplicate_ids() {
    let mut engine = settled_engine();
    let events = Rc::new(RefCell::new(Vec::new()));

    assert!(
        engine
            .register_listener(Box::new(RecordingListener::new("", events.clone())))
            .is_err()
    );
    engine
        .register_listener(Box::new(RecordingListener::new("recorder", events.clone())))
        .expect("first registration");
    let err = engine
        .register_listener(Box::new(RecordingListener::new("recorder", events)))
        .expect_err("duplicate id");
    assert!(matches!(err, ChartError::InvalidData(_)));

    assert_eq!(engine.listener_count(), 1);
    assert!(engine.has_listener("recorder"));
    assert!(engine.unregister_listener("recorder"));
    assert!(!engine.unregister_listener("recorder"));
    assert_eq!(engine.listener_count(), 0);
}

#[test]
fn unregistered_listener_stops_receiving_events() -> ChartResult<()> {
    let mut engine = settled_engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine.register_listener(Box::new(RecordingListener::new("recorder", events.clone())))?;
    engine.pointer_move(PointerEvent::at(50.0, 90.0))?;
    engine.unregister_listener("recorder");
    engine.pointer_leave();

    assert_eq!(events.borrow().len(), 1);
    Ok(())
}
