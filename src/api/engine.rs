use indexmap::IndexMap;

use crate::api::label_format::format_grouped;
use crate::api::style::ChartStyle;
use crate::core::{DEFAULT_MARGIN_PX, PlotLayout, SeriesPoint, Viewport};
use crate::error::{PortalError, PortalResult};
use crate::finance::LoanTerms;
use crate::render::Renderer;

/// Public engine bootstrap configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    pub margin_px: f64,
    pub style: ChartStyle,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margin_px: DEFAULT_MARGIN_PX,
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin_px: f64) -> Self {
        self.margin_px = margin_px;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }
}

/// Facade composing layout, projection and styling for one portal chart
/// view.
///
/// The engine owns its renderer, one labeled series, and the presentation
/// style; each draw pass recomputes layout and geometry from scratch. Which
/// chart kind gets drawn (trend line or bars) is the caller's per-view
/// decision, made by calling `render_trend` or `render_bars`.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    margin_px: f64,
    style: ChartStyle,
    title: Option<String>,
    points: Vec<SeriesPoint>,
    value_labels: Option<Vec<String>>,
    metadata: IndexMap<String, String>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> PortalResult<Self> {
        if !config.viewport.is_valid() {
            return Err(PortalError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        Ok(Self {
            renderer,
            viewport: config.viewport,
            margin_px: config.margin_px,
            style: config.style,
            title: None,
            points: Vec::new(),
            value_labels: None,
            metadata: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn margin_px(&self) -> f64 {
        self.margin_px
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    #[must_use]
    pub fn value_labels(&self) -> Option<&[String]> {
        self.value_labels.as_deref()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Replaces the plotted series. Any explicit value labels from a
    /// previous series are cleared.
    pub fn set_series(&mut self, points: Vec<SeriesPoint>) {
        self.points = points;
        self.value_labels = None;
    }

    /// Explicit per-bar value label overrides, replacing the default
    /// grouped-digit rendering of each value.
    pub fn set_value_labels(&mut self, labels: Vec<String>) {
        self.value_labels = Some(labels);
    }

    /// Wires an amortization result into the bar chart as the
    /// principal-vs-interest breakdown, with grouped-digit value labels.
    /// Currency symbols stay with the host.
    pub fn set_loan_breakdown(&mut self, terms: LoanTerms) {
        let points = terms.breakdown_points();
        let labels = points
            .iter()
            .map(|point| format_grouped(point.value))
            .collect();
        self.points = points;
        self.value_labels = Some(labels);
    }

    pub fn set_series_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Plot rectangle for the current viewport and margin.
    #[must_use]
    pub fn layout(&self) -> PlotLayout {
        PlotLayout::compute(self.viewport, self.margin_px)
    }

    /// Builds and draws the trend-line frame.
    pub fn render_trend(&mut self) -> PortalResult<()> {
        let frame = self.build_trend_frame();
        self.renderer.render(&frame)
    }

    /// Builds and draws the bar-chart frame.
    pub fn render_bars(&mut self) -> PortalResult<()> {
        let frame = self.build_bar_frame();
        self.renderer.render(&frame)
    }
}
