use crate::api::engine::ChartEngine;
use crate::api::label_format::format_grouped;
use crate::core::{
    BAR_HEADROOM_RATIO, LINE_HEADROOM_RATIO, project_category_bars, project_grid_columns,
    project_trend_segments, value_ceiling,
};
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

impl<R: Renderer> ChartEngine<R> {
    /// Materializes backend-agnostic primitives for one trend-line draw
    /// pass: axes, per-point grid columns, the connected polyline, and the
    /// optional title.
    ///
    /// Degenerate geometry (tiny canvas, short series, no positive ceiling)
    /// drops the affected primitives instead of failing; a resize mid-render
    /// must never crash the host view.
    #[must_use]
    pub fn build_trend_frame(&self) -> RenderFrame {
        let style = self.style().clone();
        let layout = self.layout();
        let mut frame = RenderFrame::new(self.viewport());

        for segment in project_grid_columns(self.points().len(), layout) {
            frame.push_line(LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                1.0,
                style.grid_color,
            ));
        }

        for segment in layout.axis_segments() {
            frame.push_line(LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                style.axis_stroke_width,
                style.axis_color,
            ));
        }

        if let Some(ceiling) = value_ceiling(self.points(), LINE_HEADROOM_RATIO) {
            for segment in project_trend_segments(self.points(), layout, ceiling) {
                frame.push_line(LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    style.line_stroke_width,
                    style.line_color,
                ));
            }
        }

        self.push_title(&mut frame);
        tracing::debug!(
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "built trend frame"
        );
        frame
    }

    /// Materializes backend-agnostic primitives for one bar-chart draw
    /// pass: axes, one filled bar per point, category labels below the
    /// baseline, value labels above each bar, and the optional title.
    ///
    /// Same degradation policy as the trend frame: anything degenerate is
    /// skipped, never an error.
    #[must_use]
    pub fn build_bar_frame(&self) -> RenderFrame {
        let style = self.style().clone();
        let layout = self.layout();
        let mut frame = RenderFrame::new(self.viewport());

        for segment in layout.axis_segments() {
            frame.push_line(LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                style.axis_stroke_width,
                style.axis_color,
            ));
        }

        if let Some(ceiling) = value_ceiling(self.points(), BAR_HEADROOM_RATIO) {
            let bars = project_category_bars(self.points(), layout, ceiling, style.bar_spacing);
            for (i, bar) in bars.iter().enumerate() {
                if bar.height > 0.0 && !style.bar_palette.is_empty() {
                    let color = style.bar_palette[i % style.bar_palette.len()];
                    frame.push_rect(RectPrimitive::new(
                        bar.x, bar.y, bar.width, bar.height, color,
                    ));
                }

                let point = &self.points()[i];
                if !point.label.is_empty() {
                    frame.push_text(TextPrimitive::new(
                        point.label.clone(),
                        bar.x,
                        layout.origin_y + style.category_label_gap_px,
                        style.category_label_font_px,
                        style.category_label_color,
                        TextHAlign::Left,
                    ));
                }

                let value_text = match self.value_labels() {
                    Some(labels) => labels.get(i).cloned().unwrap_or_default(),
                    None => format_grouped(point.value),
                };
                if !value_text.is_empty() {
                    frame.push_text(TextPrimitive::new(
                        value_text,
                        bar.x,
                        bar.y - style.value_label_gap_px,
                        style.value_label_font_px,
                        style.value_label_color,
                        TextHAlign::Left,
                    ));
                }
            }
        }

        self.push_title(&mut frame);
        tracing::debug!(
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "built bar frame"
        );
        frame
    }

    fn push_title(&self, frame: &mut RenderFrame) {
        let style = self.style();
        if let Some(title) = self.title() {
            if !title.is_empty() {
                frame.push_text(TextPrimitive::new(
                    title,
                    style.title_x_px,
                    style.title_y_px,
                    style.title_font_px,
                    style.title_color,
                    TextHAlign::Left,
                ));
            }
        }
    }
}
