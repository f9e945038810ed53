//! portal-charts: chart geometry and loan amortization core for a dealership
//! sales portal.
//!
//! The crate keeps a strict split between deterministic pixel geometry
//! (`core`), loan math (`finance`), backend-agnostic draw commands
//! (`render`), and the composition facade (`api`), so every chart a portal
//! view shows is computable and testable without a drawing surface.

pub mod api;
pub mod core;
pub mod error;
pub mod finance;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartStyle};
pub use error::{PortalError, PortalResult};
