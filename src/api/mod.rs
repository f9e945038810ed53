mod engine;
mod engine_snapshot;
mod frame_builder;
mod label_format;
mod style;

pub use engine::{ChartEngine, ChartEngineConfig};
pub use engine_snapshot::EngineSnapshot;
pub use label_format::format_grouped;
pub use style::ChartStyle;
