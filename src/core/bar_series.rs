use serde::{Deserialize, Serialize};

use crate::core::layout::PlotLayout;
use crate::core::types::SeriesPoint;

/// Horizontal spacing policy for bar charts.
///
/// Each bar occupies a slot of `plot_width / count`; the bar itself is
/// `plot_width / (count * width_factor)` wide and shifted into its slot by
/// `inset_ratio` times the bar width. Larger factors give narrower bars and
/// wider gaps. Both knobs are explicit so chart kinds can keep distinct
/// spacing without hidden constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSpacing {
    pub width_factor: f64,
    pub inset_ratio: f64,
}

impl BarSpacing {
    #[must_use]
    pub const fn new(width_factor: f64, inset_ratio: f64) -> Self {
        Self {
            width_factor,
            inset_ratio,
        }
    }

    /// Spacing used by category charts with several bars.
    #[must_use]
    pub const fn category() -> Self {
        Self::new(1.8, 0.4)
    }

    /// Wider gaps for two-bar comparison charts such as the
    /// principal-vs-interest breakdown.
    #[must_use]
    pub const fn comparison() -> Self {
        Self::new(2.5, 0.5)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width_factor.is_finite()
            && self.width_factor > 0.0
            && self.inset_ratio.is_finite()
            && self.inset_ratio >= 0.0
    }
}

impl Default for BarSpacing {
    fn default() -> Self {
        Self::category()
    }
}

/// One filled bar in pixel coordinates. `y` is the bar top; the bar rests on
/// the layout baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Projects a labeled series into one bar per point.
///
/// Bars are placed in series order, left to right, scaled vertically against
/// the caller-supplied `value_max`. Negative values clamp to zero height
/// rather than extending below the baseline. An empty series, a degenerate
/// layout, an invalid spacing, or a non-positive `value_max` yields no bars,
/// silently. Overlap avoidance is entirely the spacing policy's job.
#[must_use]
pub fn project_category_bars(
    points: &[SeriesPoint],
    layout: PlotLayout,
    value_max: f64,
    spacing: BarSpacing,
) -> Vec<BarGeometry> {
    if points.is_empty()
        || layout.is_degenerate()
        || !spacing.is_valid()
        || !value_max.is_finite()
        || value_max <= 0.0
    {
        return Vec::new();
    }

    let count = points.len() as f64;
    let slot = layout.plot_width / count;
    let width = layout.plot_width / (count * spacing.width_factor);

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let height = (point.value.max(0.0) / value_max) * layout.plot_height;
            BarGeometry {
                x: layout.origin_x + i as f64 * slot + width * spacing.inset_ratio,
                y: layout.origin_y - height,
                width,
                height,
            }
        })
        .collect()
}
