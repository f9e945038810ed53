use serde::{Deserialize, Serialize};

use crate::core::layout::PlotLayout;
use crate::core::types::SeriesPoint;

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects a series into the connected polyline of a trend chart.
///
/// Points are spaced evenly across the plot width in series order and scaled
/// vertically against the caller-supplied `value_max`; the projection never
/// recomputes or clamps that ceiling. Degenerate input (fewer than two
/// points, a degenerate layout, or a non-positive or non-finite `value_max`)
/// yields no segments: trend drawing degrades to a no-op instead of failing
/// the render pass.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests consume the exact same geometry output.
#[must_use]
pub fn project_trend_segments(
    points: &[SeriesPoint],
    layout: PlotLayout,
    value_max: f64,
) -> Vec<LineSegment> {
    if points.len() < 2 || layout.is_degenerate() || !value_max.is_finite() || value_max <= 0.0 {
        return Vec::new();
    }

    let step_x = layout.plot_width / (points.len() - 1) as f64;
    let mut mapped = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        mapped.push((
            layout.origin_x + i as f64 * step_x,
            layout.value_to_y(point.value, value_max),
        ));
    }

    mapped
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].0,
            y1: pair[0].1,
            x2: pair[1].0,
            y2: pair[1].1,
        })
        .collect()
}

/// Vertical grid lines, one per trend point, spanning the plot height.
///
/// Shares the horizontal spacing of `project_trend_segments` so grid columns
/// line up with the plotted points. Degenerate input yields no lines.
#[must_use]
pub fn project_grid_columns(point_count: usize, layout: PlotLayout) -> Vec<LineSegment> {
    if point_count < 2 || layout.is_degenerate() {
        return Vec::new();
    }

    let step_x = layout.plot_width / (point_count - 1) as f64;
    (0..point_count)
        .map(|i| {
            let x = layout.origin_x + i as f64 * step_x;
            LineSegment {
                x1: x,
                y1: layout.origin_y,
                x2: x,
                y2: layout.origin_y - layout.plot_height,
            }
        })
        .collect()
}
