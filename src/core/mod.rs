pub mod bar_series;
pub mod layout;
pub mod line_series;
pub mod scaling;
pub mod types;

pub use bar_series::{BarGeometry, BarSpacing, project_category_bars};
pub use layout::{DEFAULT_MARGIN_PX, PlotLayout};
pub use line_series::{LineSegment, project_grid_columns, project_trend_segments};
pub use scaling::{BAR_HEADROOM_RATIO, LINE_HEADROOM_RATIO, value_ceiling};
pub use types::{SeriesPoint, Viewport};
