use crate::core::BarSpacing;
use crate::render::Color;

// Portal palette.
const AXIS: Color = Color::rgba(1.0, 1.0, 1.0, 0.3);
const GRID: Color = Color::rgba(1.0, 1.0, 1.0, 0.08);
const TREND_BLUE: Color = Color::rgb(0.180392, 0.654902, 1.0);
const SALES_GREEN: Color = Color::rgb(0.211765, 0.827451, 0.6);
const INTEREST_AMBER: Color = Color::rgb(1.0, 0.721569, 0.301961);
const CATEGORY_TEXT: Color = Color::rgb(0.811765, 0.913725, 1.0);
const VALUE_TEXT: Color = Color::rgb(0.913725, 0.933333, 0.964706);

/// Presentation defaults for one chart view.
///
/// Everything here is a default, not a contract: hosts restyle freely, and
/// the geometry layer never reads any of it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub axis_color: Color,
    pub axis_stroke_width: f64,
    pub grid_color: Color,
    pub line_color: Color,
    pub line_stroke_width: f64,
    /// Bar fill colors, cycled per bar in series order.
    pub bar_palette: Vec<Color>,
    pub bar_spacing: BarSpacing,
    pub category_label_color: Color,
    pub category_label_font_px: f64,
    /// Vertical gap between the baseline and category labels.
    pub category_label_gap_px: f64,
    pub value_label_color: Color,
    pub value_label_font_px: f64,
    /// Vertical gap between a bar top and its value label.
    pub value_label_gap_px: f64,
    pub title_color: Color,
    pub title_font_px: f64,
    pub title_x_px: f64,
    pub title_y_px: f64,
}

impl ChartStyle {
    /// Styling for the two-bar principal-vs-interest comparison chart:
    /// wider gaps and a distinct color per bar.
    #[must_use]
    pub fn comparison() -> Self {
        Self {
            bar_palette: vec![TREND_BLUE, INTEREST_AMBER],
            bar_spacing: BarSpacing::comparison(),
            value_label_font_px: 11.0,
            value_label_gap_px: 8.0,
            ..Self::default()
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            axis_color: AXIS,
            axis_stroke_width: 1.0,
            grid_color: GRID,
            line_color: TREND_BLUE,
            line_stroke_width: 3.0,
            bar_palette: vec![SALES_GREEN],
            bar_spacing: BarSpacing::category(),
            category_label_color: CATEGORY_TEXT,
            category_label_font_px: 12.0,
            category_label_gap_px: 16.0,
            value_label_color: VALUE_TEXT,
            value_label_font_px: 10.0,
            value_label_gap_px: 5.0,
            title_color: VALUE_TEXT,
            title_font_px: 16.0,
            title_x_px: 60.0,
            title_y_px: 30.0,
        }
    }
}
