use indexmap::IndexSet;

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Rejects values that would produce undefined bar geometry.
///
/// Empty series and non-positive values are valid; they degrade to a flat
/// chart instead.
pub fn validate_series(series: &[DataPoint]) -> ChartResult<()> {
    if let Some(point) = series.iter().find(|point| !point.value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "value of `{}` must be finite, got {}",
            point.label, point.value
        )));
    }
    Ok(())
}

/// Caller-side uniqueness check for labels.
///
/// The engine accepts duplicates (the later datum wins its key); hosts that
/// want strictness call this before handing data over.
pub fn validate_unique_labels(series: &[DataPoint]) -> ChartResult<()> {
    match duplicate_labels(series).into_iter().next() {
        Some(label) => Err(ChartError::DuplicateLabel { label }),
        None => Ok(()),
    }
}

/// Labels occurring more than once, in order of their second occurrence.
pub(super) fn duplicate_labels(series: &[DataPoint]) -> Vec<String> {
    let mut seen = IndexSet::with_capacity(series.len());
    let mut duplicates = IndexSet::new();
    for point in series {
        if !seen.insert(point.label.as_str()) {
            duplicates.insert(point.label.as_str());
        }
    }
    duplicates.into_iter().map(str::to_owned).collect()
}

pub(super) fn validate_delta_ms(delta_ms: f64) -> ChartResult<f64> {
    if !delta_ms.is_finite() || delta_ms < 0.0 {
        return Err(ChartError::InvalidData(
            "time delta must be finite and >= 0".to_owned(),
        ));
    }
    Ok(delta_ms)
}
