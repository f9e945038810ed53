use crate::core::types::SeriesPoint;

/// Headroom multiplier applied above the data maximum for trend lines.
pub const LINE_HEADROOM_RATIO: f64 = 1.15;

/// Headroom multiplier for bar charts. Intentionally larger than the trend
/// ratio; the two charts do not share a ceiling policy.
pub const BAR_HEADROOM_RATIO: f64 = 1.2;

/// Plot ceiling for a series: the maximum value times `headroom_ratio`.
///
/// Returns `None` for empty input, non-finite values or ratios, or a
/// non-positive result, so callers degrade to a no-op draw instead of
/// propagating NaN into pixel coordinates.
#[must_use]
pub fn value_ceiling(points: &[SeriesPoint], headroom_ratio: f64) -> Option<f64> {
    if points.is_empty() || !headroom_ratio.is_finite() || headroom_ratio <= 0.0 {
        return None;
    }

    let mut max = f64::NEG_INFINITY;
    for point in points {
        if !point.value.is_finite() {
            return None;
        }
        max = max.max(point.value);
    }

    (max > 0.0).then(|| max * headroom_ratio)
}
