//! Sweeps a pointer across a random chart and prints every emitted event.
//!
//! Shows hover-start/hover-end pairs, the tooltip text and position, and an
//! activation logged through `ActivationLogger`.

use std::cell::RefCell;
use std::rc::Rc;

use bar_chart_rs::api::{ChartEngine, ChartEngineConfig};
use bar_chart_rs::core::{DataPoint, Viewport};
use bar_chart_rs::extensions::{ActivationLogger, ChartListener, ListenerContext};
use bar_chart_rs::interaction::{ChartEvent, PointerEvent};
use bar_chart_rs::render::NullRenderer;
use bar_chart_rs::{ChartResult, telemetry};
use rand::Rng;

/// Page offset of the drawing surface inside the host page.
const SURFACE_ORIGIN: (f64, f64) = (40.0, 120.0);

struct EventPrinter {
    seen: Rc<RefCell<usize>>,
}

impl ChartListener for EventPrinter {
    fn id(&self) -> &str {
        "event-printer"
    }

    fn on_event(&mut self, event: &ChartEvent, context: ListenerContext) {
        *self.seen.borrow_mut() += 1;
        println!("[{:>6.1} ms] {event:?}", context.clock_ms);
    }
}

fn main() -> ChartResult<()> {
    let _ = telemetry::init_default_tracing();
    let mut rng = rand::rng();
    let len = rng.random_range(8..=27);
    let series: Vec<DataPoint> = (0..len)
        .map(|i| DataPoint::new(format!("Index {i}"), f64::from(rng.random_range(1_u32..100))))
        .collect();

    let seen = Rc::new(RefCell::new(0));
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())?;
    engine.register_listener(Box::new(EventPrinter {
        seen: Rc::clone(&seen),
    }))?;
    engine.register_listener(Box::new(ActivationLogger))?;
    engine.set_data(series)?;
    engine.mount(Viewport::new(800, 300))?;
    engine.settle()?;

    let plot = engine.plot_area();
    let y = plot.top + plot.height - 1.0;
    let mut x = 0.0;
    while x <= 800.0 {
        let pointer = PointerEvent::at(x, y).with_page(x + SURFACE_ORIGIN.0, y + SURFACE_ORIGIN.1);
        for event in engine.pointer_move(pointer)? {
            if matches!(event, ChartEvent::HoverStart { .. }) {
                let tooltip = engine.tooltip();
                println!(
                    "    tooltip `{}` at ({}, {})",
                    tooltip.text, tooltip.page_left, tooltip.page_top
                );
                engine.pointer_click(pointer)?;
            }
        }
        engine.advance_time(16.0)?;
        x += 2.0;
    }
    engine.pointer_leave();
    engine.render()?;

    println!("{} events delivered", seen.borrow());
    Ok(())
}
