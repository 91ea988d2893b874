//! Host shell that regenerates a random series on every trigger.
//!
//! Each round draws 8..=27 bars labelled `Index {i}` with integer values in
//! `[0, 100)`, reconciles, plays the transition to the end and prints the diff.
//! The final frame is written to `regenerate_shell.svg`.
//!
//! `cargo run --example regenerate_shell -- [rounds] [seed]`

use bar_chart_rs::api::{BarChange, ChartEngine, ChartEngineConfig};
use bar_chart_rs::core::{DataPoint, Viewport};
use bar_chart_rs::render::SvgRenderer;
use bar_chart_rs::{ChartResult, telemetry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn random_series(rng: &mut impl Rng) -> Vec<DataPoint> {
    let len = rng.random_range(8..=27);
    (0..len)
        .map(|i| DataPoint::new(format!("Index {i}"), f64::from(rng.random_range(0_u32..100))))
        .collect()
}

fn main() -> ChartResult<()> {
    let _ = telemetry::init_tracing_with_directive("bar_chart_rs=debug");

    let mut args = std::env::args().skip(1);
    let rounds: usize = args.next().and_then(|raw| raw.parse().ok()).unwrap_or(5);
    let mut rng = match args.next().and_then(|raw| raw.parse::<u64>().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut engine = ChartEngine::new(SvgRenderer::new(), ChartEngineConfig::default())?;
    engine.set_data(random_series(&mut rng))?;
    let first = engine.mount(Viewport::new(960, 400))?;
    if let Some(diff) = first {
        println!("initial render: {} bars entered", diff.entered_count());
    }

    for round in 1..=rounds {
        while engine.is_animating() {
            engine.advance_time(FRAME_MS)?;
            engine.render()?;
        }

        let Some(diff) = engine.set_data(random_series(&mut rng))? else {
            continue;
        };
        let longest_delay = diff
            .entered()
            .filter_map(|change| match change {
                BarChange::Enter { delay_ms, .. } => Some(*delay_ms),
                _ => None,
            })
            .fold(0.0, f64::max);
        println!(
            "round {round}: exit={} update={} enter={} (last entering bar starts after {longest_delay} ms)",
            diff.exited_count(),
            diff.updated_count(),
            diff.entered_count(),
        );
    }

    engine.settle()?;
    engine.render()?;
    let path = "regenerate_shell.svg";
    if let Err(err) = std::fs::write(path, engine.renderer().document()) {
        eprintln!("failed to write {path}: {err}");
    } else {
        println!("wrote {path}");
    }
    Ok(())
}
