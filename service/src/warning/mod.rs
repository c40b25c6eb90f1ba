//! Flood-warning data service module.
//!
//! Serves the element datasets, detail lookups, risk statistics, and map
//! overlay configuration the dashboard renders.
//!
//! # Architecture
//!
//! The module uses a trait-based design for testability:
//!
//! - [`FloodDataService`] - Trait defining the dashboard-facing operations
//! - [`CannedFloodData`] - Implementation backed by the fixed survey
//!   datasets, with configurable simulated latency
//!
//! Handlers hold an `Arc<dyn FloodDataService>`, so tests can substitute a
//! zero-latency instance (or their own implementation) without touching the
//! REST layer.

mod data;
mod service;
mod types;

pub use service::{CannedFloodData, FloodDataService, Latency};
pub use types::{
    ElementKind, ElementRecord, ElementStat, FloodAreaRecord, GateRecord, LayerConfig, Page,
    PumpRecord, ReservoirRecord, RiskLevelStat, RiskTier, RiverRecord, StationRecord,
};
