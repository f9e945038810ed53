use serde::{Deserialize, Serialize};

use crate::core::line_series::LineSegment;
use crate::core::types::Viewport;

/// Margin reserved on every canvas side before the plottable area begins.
pub const DEFAULT_MARGIN_PX: f64 = 50.0;

/// Pixel-space plot rectangle shared by every chart kind.
///
/// `origin_x`/`origin_y` is the axis intersection (bottom-left corner of the
/// plot area); y grows downward as on a canvas. A layout is computed fresh
/// per draw pass from the viewport and discarded afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub origin_x: f64,
    pub origin_y: f64,
    pub plot_width: f64,
    pub plot_height: f64,
}

impl PlotLayout {
    /// Computes the plot rectangle for a canvas, reserving `margin_px` on
    /// every side for axes and labels.
    ///
    /// Margins larger than the canvas clamp the plot area to zero size
    /// instead of producing negative extents; projection routines treat such
    /// a layout as degenerate and skip drawing.
    #[must_use]
    pub fn compute(viewport: Viewport, margin_px: f64) -> Self {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let margin = if margin_px.is_finite() {
            margin_px.max(0.0)
        } else {
            0.0
        };

        Self {
            origin_x: margin,
            origin_y: height - margin,
            plot_width: (width - 2.0 * margin).max(0.0),
            plot_height: (height - 2.0 * margin).max(0.0),
        }
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.plot_width <= 0.0 || self.plot_height <= 0.0
    }

    /// Axis baseline and left edge as pixel segments.
    ///
    /// Returns an empty vector for a degenerate layout so callers skip the
    /// axis stroke instead of drawing zero-length lines.
    #[must_use]
    pub fn axis_segments(self) -> Vec<LineSegment> {
        if self.is_degenerate() {
            return Vec::new();
        }

        vec![
            // Horizontal baseline.
            LineSegment {
                x1: self.origin_x,
                y1: self.origin_y,
                x2: self.origin_x + self.plot_width,
                y2: self.origin_y,
            },
            // Vertical left edge.
            LineSegment {
                x1: self.origin_x,
                y1: self.origin_y,
                x2: self.origin_x,
                y2: self.origin_y - self.plot_height,
            },
        ]
    }

    /// Maps a value against `value_max` to a y pixel above the baseline.
    ///
    /// Callers guard `value_max > 0` before mapping.
    #[must_use]
    pub fn value_to_y(self, value: f64, value_max: f64) -> f64 {
        self.origin_y - (value / value_max) * self.plot_height
    }
}
