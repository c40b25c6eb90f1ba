//! The flood-warning data service.
//!
//! [`FloodDataService`] is the seam the REST layer (and tests) program
//! against. [`CannedFloodData`] is the shipping implementation: it serves
//! the fixed survey datasets with simulated per-operation latency, standing
//! in for the real hydrology backend until it comes online.
//!
//! Operations never fail. Absent lookups degrade to a default record (an
//! unknown kind selects the river dataset, a missing river id the first
//! record) instead of signaling an error; the dashboard relies on that
//! contract.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::MapServiceConfig;

use super::data;
use super::types::{
    ElementKind, ElementRecord, ElementStat, LayerConfig, Page, RiskLevelStat, RiverRecord,
    StationRecord,
};

/// Per-operation artificial latency.
///
/// The dashboard was tuned against a backend with these response times, so
/// the canned service reproduces them by default. Tests use
/// [`Latency::none`] for determinism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub element_stats: Duration,
    pub element_list: Duration,
    pub river_detail: Duration,
    pub station_detail: Duration,
    pub risk_statistics: Duration,
    pub layer_configs: Duration,
}

impl Latency {
    /// The response times the real backend exhibits.
    #[must_use]
    pub const fn realistic() -> Self {
        Self {
            element_stats: Duration::from_millis(500),
            element_list: Duration::from_millis(300),
            river_detail: Duration::from_millis(200),
            station_detail: Duration::from_millis(200),
            risk_statistics: Duration::from_millis(800),
            layer_configs: Duration::from_millis(200),
        }
    }

    /// Zero delay on every operation.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            element_stats: Duration::ZERO,
            element_list: Duration::ZERO,
            river_detail: Duration::ZERO,
            station_detail: Duration::ZERO,
            risk_statistics: Duration::ZERO,
            layer_configs: Duration::ZERO,
        }
    }
}

/// Operations the dashboard consumes.
#[async_trait]
pub trait FloodDataService: Send + Sync {
    /// Per-kind element counters for the summary bar.
    async fn element_stats(&self) -> Vec<ElementStat>;

    /// One page of the dataset for `kind`, filtered by `keyword`.
    ///
    /// The keyword is a case-sensitive substring match on the record name.
    /// `total` reflects the whole filtered list; pages past the end return
    /// an empty slice. Page numbering starts at 1 (0 is treated as 1).
    async fn element_list(
        &self,
        kind: ElementKind,
        page: usize,
        page_size: usize,
        keyword: &str,
    ) -> Page<ElementRecord>;

    /// Detail record for one river, enriched with survey metadata.
    async fn river_detail(&self, id: u32) -> RiverRecord;

    /// Detail record for one gauging station.
    async fn station_detail(&self, id: u32) -> StationRecord;

    /// Three-tier severity breakdown for the risk panel.
    async fn risk_statistics(&self) -> Vec<RiskLevelStat>;

    /// Overlay descriptors handed to the map renderer.
    async fn layer_configs(&self) -> Vec<LayerConfig>;
}

/// Serves the fixed survey datasets.
///
/// Holds no mutable state; every call constructs its own records. The WMS
/// endpoint and workspace are taken from configuration at construction
/// instead of being read ambiently.
#[derive(Debug, Clone)]
pub struct CannedFloodData {
    latency: Latency,
    map_service: MapServiceConfig,
}

impl CannedFloodData {
    #[must_use]
    pub const fn new(latency: Latency, map_service: MapServiceConfig) -> Self {
        Self {
            latency,
            map_service,
        }
    }

    fn dataset(kind: ElementKind) -> Vec<ElementRecord> {
        match kind {
            ElementKind::River => data::rivers().into_iter().map(ElementRecord::River).collect(),
            ElementKind::Pump => data::pumps().into_iter().map(ElementRecord::Pump).collect(),
            ElementKind::Reservoir => data::reservoirs()
                .into_iter()
                .map(ElementRecord::Reservoir)
                .collect(),
            ElementKind::Gate => data::gates().into_iter().map(ElementRecord::Gate).collect(),
            ElementKind::Flood => data::flood_areas()
                .into_iter()
                .map(ElementRecord::Flood)
                .collect(),
        }
    }
}

#[async_trait]
impl FloodDataService for CannedFloodData {
    async fn element_stats(&self) -> Vec<ElementStat> {
        tokio::time::sleep(self.latency.element_stats).await;
        data::element_stats()
    }

    async fn element_list(
        &self,
        kind: ElementKind,
        page: usize,
        page_size: usize,
        keyword: &str,
    ) -> Page<ElementRecord> {
        tokio::time::sleep(self.latency.element_list).await;

        let records = Self::dataset(kind);
        let filtered: Vec<ElementRecord> = if keyword.is_empty() {
            records
        } else {
            records
                .into_iter()
                .filter(|record| record.name().contains(keyword))
                .collect()
        };

        let total = filtered.len();
        let start = page.saturating_sub(1).saturating_mul(page_size);
        let data = filtered.into_iter().skip(start).take(page_size).collect();

        Page { data, total }
    }

    async fn river_detail(&self, id: u32) -> RiverRecord {
        tokio::time::sleep(self.latency.river_detail).await;

        let rivers = data::rivers();
        // Unknown ids fall back to the first record; the detail panel always
        // has something to render.
        let base = match rivers.iter().find(|river| river.id == id) {
            Some(river) => river.clone(),
            None => rivers[0].clone(),
        };

        RiverRecord {
            area: Some("156.8".into()),
            level: Some("二级河流".into()),
            basin: Some("韩江流域".into()),
            start_coord: Some("116.123, 24.456".into()),
            end_coord: Some("116.789, 24.123".into()),
            management: Some("梅州市水务局".into()),
            update_time: Some("2024-01-15 14:30:25".into()),
            ..base
        }
    }

    async fn station_detail(&self, id: u32) -> StationRecord {
        tokio::time::sleep(self.latency.station_detail).await;

        StationRecord {
            id,
            name: "梅江水位站".into(),
            water_level: "2.35".into(),
            risk_level: 1,
            warning_level: Some("3.50".into()),
            guarantee_level: Some("4.20".into()),
            coordinates: Some("116.456, 24.789".into()),
            river: Some("梅江".into()),
            build_time: Some("1985-06-15".into()),
            frequency: Some("每小时".into()),
            last_update: Some("2024-01-15 15:00:00".into()),
        }
    }

    async fn risk_statistics(&self) -> Vec<RiskLevelStat> {
        tokio::time::sleep(self.latency.risk_statistics).await;
        data::risk_statistics()
    }

    async fn layer_configs(&self) -> Vec<LayerConfig> {
        tokio::time::sleep(self.latency.layer_configs).await;

        data::LAYER_TABLE
            .iter()
            .map(|&(name, label, wms_layer, show)| LayerConfig {
                name: name.into(),
                label: label.into(),
                layer: format!("{}:{}", self.map_service.workspace, wms_layer),
                url: Some(self.map_service.wms_url.clone()),
                show,
            })
            .collect()
    }
}
