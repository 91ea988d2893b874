use smallvec::SmallVec;

const STEP_TEN_THRESHOLD: f64 = 7.071_067_811_865_476; // sqrt(50)
const STEP_FIVE_THRESHOLD: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const STEP_TWO_THRESHOLD: f64 = std::f64::consts::SQRT_2;

#[derive(Debug, Clone, Copy, PartialEq)]
struct TickSpec {
    first: i64,
    last: i64,
    /// Positive: multiply the index. Negative: divide the index by `-increment`.
    increment: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<TickSpec> {
    if count.is_nan() || count <= 0.0 || !start.is_finite() || !stop.is_finite() || stop <= start {
        return None;
    }

    let step = (stop - start) / count;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= STEP_TEN_THRESHOLD {
        10.0
    } else if error >= STEP_FIVE_THRESHOLD {
        5.0
    } else if error >= STEP_TWO_THRESHOLD {
        2.0
    } else {
        1.0
    };

    let spec = if power < 0.0 {
        let increment = 10f64.powf(-power) / factor;
        let mut first = (start * increment).round() as i64;
        let mut last = (stop * increment).round() as i64;
        if (first as f64) / increment < start {
            first += 1;
        }
        if (last as f64) / increment > stop {
            last -= 1;
        }
        TickSpec {
            first,
            last,
            increment: -increment,
        }
    } else {
        let increment = 10f64.powf(power) * factor;
        let mut first = (start / increment).round() as i64;
        let mut last = (stop / increment).round() as i64;
        if (first as f64) * increment < start {
            first += 1;
        }
        if (last as f64) * increment > stop {
            last -= 1;
        }
        TickSpec {
            first,
            last,
            increment,
        }
    };

    if spec.last < spec.first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some(spec)
}

/// Round-number ticks (1, 2 or 5 times a power of ten) covering `[start, stop]`.
///
/// Values are produced from integer indices so repeated steps never
/// accumulate floating-point drift.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, target_count: usize) -> SmallVec<[f64; 16]> {
    let mut ticks = SmallVec::new();
    if target_count == 0 {
        return ticks;
    }
    if start == stop && start.is_finite() {
        ticks.push(start);
        return ticks;
    }

    let Some(spec) = tick_spec(start, stop, target_count as f64) else {
        return ticks;
    };
    if spec.last < spec.first {
        return ticks;
    }

    for index in spec.first..=spec.last {
        let value = if spec.increment < 0.0 {
            (index as f64) / -spec.increment
        } else {
            (index as f64) * spec.increment
        };
        ticks.push(value);
    }
    ticks
}

/// Distance between consecutive [`nice_ticks`] for the same inputs.
#[must_use]
pub fn nice_tick_step(start: f64, stop: f64, target_count: usize) -> f64 {
    match tick_spec(start, stop, target_count as f64) {
        Some(spec) if spec.increment < 0.0 => 1.0 / -spec.increment,
        Some(spec) => spec.increment,
        None => 0.0,
    }
}

/// Formats a tick value with as many decimals as `step` requires.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 {
        (-step.abs().log10().floor()).max(0.0) as usize
    } else {
        0
    };
    // Normalizes `-0` so the zero tick always reads `0`.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimals$}")
}
