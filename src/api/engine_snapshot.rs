use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::api::engine::ChartEngine;
use crate::core::{SeriesPoint, Viewport};
use crate::error::{PortalError, PortalResult};
use crate::render::Renderer;

/// Serializable deterministic engine state used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub margin_px: f64,
    pub title: Option<String>,
    pub points: Vec<SeriesPoint>,
    pub value_labels: Option<Vec<String>>,
    pub series_metadata: IndexMap<String, String>,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.viewport(),
            margin_px: self.margin_px(),
            title: self.title().map(str::to_owned),
            points: self.points().to_vec(),
            value_labels: self.value_labels().map(<[String]>::to_vec),
            series_metadata: self.metadata().clone(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> PortalResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|err| PortalError::InvalidData(format!("snapshot serialization failed: {err}")))
    }
}
