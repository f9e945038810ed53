use portal_charts::core::{
    LINE_HEADROOM_RATIO, PlotLayout, SeriesPoint, Viewport, project_grid_columns,
    project_trend_segments, value_ceiling,
};

fn monthly_series(values: &[f64]) -> Vec<SeriesPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| SeriesPoint::new(format!("M{}", i + 1), *v))
        .collect()
}

#[test]
fn polyline_connects_points_in_series_order() {
    let points = monthly_series(&[120.0, 135.0, 140.0, 160.0, 155.0, 170.0, 180.0, 190.0]);
    let layout = PlotLayout::compute(Viewport::new(1000, 600), 50.0);
    let ceiling = value_ceiling(&points, LINE_HEADROOM_RATIO).expect("positive ceiling");

    let segments = project_trend_segments(&points, layout, ceiling);
    assert_eq!(segments.len(), points.len() - 1);

    let step = layout.plot_width / (points.len() - 1) as f64;
    for (i, segment) in segments.iter().enumerate() {
        assert_eq!(segment.x1, layout.origin_x + i as f64 * step);
        assert_eq!(segment.x2, layout.origin_x + (i + 1) as f64 * step);
        // Consecutive segments share their joint.
        if i > 0 {
            assert_eq!(segments[i - 1].x2, segment.x1);
            assert_eq!(segments[i - 1].y2, segment.y1);
        }
    }

    let last = segments.last().expect("non-empty");
    assert_eq!(last.x2, layout.origin_x + layout.plot_width);
}

#[test]
fn caller_supplied_ceiling_is_used_verbatim() {
    let points = monthly_series(&[50.0, 100.0]);
    let layout = PlotLayout::compute(Viewport::new(1000, 600), 50.0);

    let segments = project_trend_segments(&points, layout, 100.0);
    assert_eq!(segments[0].y2, layout.origin_y - layout.plot_height);
    assert_eq!(
        segments[0].y1,
        layout.origin_y - 0.5 * layout.plot_height
    );
}

#[test]
fn short_series_projects_nothing() {
    let layout = PlotLayout::compute(Viewport::new(1000, 600), 50.0);
    assert!(project_trend_segments(&[], layout, 100.0).is_empty());
    assert!(project_trend_segments(&monthly_series(&[42.0]), layout, 100.0).is_empty());
}

#[test]
fn degenerate_inputs_project_nothing() {
    let points = monthly_series(&[1.0, 2.0, 3.0]);
    let tiny = PlotLayout::compute(Viewport::new(40, 40), 50.0);
    assert!(project_trend_segments(&points, tiny, 10.0).is_empty());

    let layout = PlotLayout::compute(Viewport::new(1000, 600), 50.0);
    assert!(project_trend_segments(&points, layout, 0.0).is_empty());
    assert!(project_trend_segments(&points, layout, -5.0).is_empty());
    assert!(project_trend_segments(&points, layout, f64::NAN).is_empty());
}

#[test]
fn grid_columns_align_with_trend_points() {
    let layout = PlotLayout::compute(Viewport::new(1000, 600), 50.0);
    let columns = project_grid_columns(8, layout);
    assert_eq!(columns.len(), 8);

    let step = layout.plot_width / 7.0;
    for (i, column) in columns.iter().enumerate() {
        assert_eq!(column.x1, layout.origin_x + i as f64 * step);
        assert_eq!(column.x1, column.x2);
        assert_eq!(column.y1, layout.origin_y);
        assert_eq!(column.y2, layout.origin_y - layout.plot_height);
    }
}

#[test]
fn grid_skips_degenerate_input() {
    let layout = PlotLayout::compute(Viewport::new(1000, 600), 50.0);
    assert!(project_grid_columns(0, layout).is_empty());
    assert!(project_grid_columns(1, layout).is_empty());

    let tiny = PlotLayout::compute(Viewport::new(40, 40), 50.0);
    assert!(project_grid_columns(8, tiny).is_empty());
}

#[test]
fn ceiling_leaves_headroom_above_maximum() {
    let points = monthly_series(&[120.0, 190.0]);
    let ceiling = value_ceiling(&points, LINE_HEADROOM_RATIO).expect("positive ceiling");
    assert_eq!(ceiling, 190.0 * 1.15);

    assert!(value_ceiling(&[], LINE_HEADROOM_RATIO).is_none());
    assert!(value_ceiling(&monthly_series(&[-3.0, -1.0]), LINE_HEADROOM_RATIO).is_none());
    assert!(value_ceiling(&monthly_series(&[1.0, f64::NAN]), LINE_HEADROOM_RATIO).is_none());
}
