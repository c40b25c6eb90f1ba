//! Data types for the flood-warning dashboard surface.
//!
//! All records are flat value types, built fresh per request and never
//! mutated afterwards. Field names serialize in camelCase to match the
//! dashboard's JSON contract; optional fields are omitted when absent.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The five element kinds the dashboard can list.
///
/// `from_param` maps an unrecognized tag to [`ElementKind::River`]. That
/// fallback is part of the service contract (the dashboard treats an unknown
/// kind as a recoverable default, never an error) and is pinned by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    River,
    Pump,
    Reservoir,
    Gate,
    Flood,
}

impl ElementKind {
    /// Parse a query-string tag, defaulting to `River` for unknown values.
    #[must_use]
    pub fn from_param(tag: &str) -> Self {
        match tag {
            "pump" => Self::Pump,
            "reservoir" => Self::Reservoir,
            "gate" => Self::Gate,
            "flood" => Self::Flood,
            // "river" and anything unrecognized
            _ => Self::River,
        }
    }
}

/// Per-kind element counter shown in the dashboard summary bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ElementStat {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub label: String,
    pub count: u32,
}

/// A river reach. Detail lookups fill in the optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiverRecord {
    pub id: u32,
    pub name: String,
    /// Bed slope, kept as the display string the survey data carries
    /// (some entries use the per-mille sign).
    pub slope: String,
    /// Length in km, display string.
    pub length: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_coord: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_coord: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

/// A drainage pump station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PumpRecord {
    pub id: u32,
    pub name: String,
    pub capacity: String,
    pub power: String,
    pub status: String,
}

/// A reservoir.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservoirRecord {
    pub id: u32,
    pub name: String,
    pub capacity: String,
    pub current_level: String,
    pub status: String,
}

/// A sluice gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GateRecord {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub gate_type: String,
    pub status: String,
    pub open_level: String,
}

/// A water-level gauging station.
///
/// `risk_level` is a small severity ordinal (1 = normal, 3 = highest) used
/// for color-coding markers on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub id: u32,
    pub name: String,
    pub water_level: String,
    pub risk_level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guarantee_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub river: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

/// A flood-prone (waterlogging) zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FloodAreaRecord {
    pub id: u32,
    pub name: String,
    pub risk_level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drainage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection: Option<String>,
}

/// Severity tier of the risk breakdown panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Normal,
    Low,
    High,
}

/// Display-oriented aggregate for one severity tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskLevelStat {
    #[serde(rename = "type")]
    pub tier: RiskTier,
    pub label: String,
    /// Fill color for the panel, rgba() string.
    pub color: String,
    /// Marker icon color, hex string.
    pub icon_color: String,
    pub count: String,
    pub water_level: String,
}

/// One WMS overlay the map component can toggle.
///
/// `layer` is the fully qualified service layer name
/// (`<workspace>:<layer>`), `url` the WMS endpoint serving it. This is the
/// hand-off contract to the map renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LayerConfig {
    pub name: String,
    pub label: String,
    pub layer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub show: bool,
}

/// A record from any of the five element datasets.
///
/// Serialized untagged so each kind keeps its natural JSON shape in list
/// responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ElementRecord {
    River(RiverRecord),
    Pump(PumpRecord),
    Reservoir(ReservoirRecord),
    Gate(GateRecord),
    Flood(FloodAreaRecord),
}

impl ElementRecord {
    /// Record id, uniform across kinds.
    #[must_use]
    pub const fn id(&self) -> u32 {
        match self {
            Self::River(r) => r.id,
            Self::Pump(r) => r.id,
            Self::Reservoir(r) => r.id,
            Self::Gate(r) => r.id,
            Self::Flood(r) => r.id,
        }
    }

    /// Display name, the field keyword filtering matches against.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::River(r) => &r.name,
            Self::Pump(r) => &r.name,
            Self::Reservoir(r) => &r.name,
            Self::Gate(r) => &r.name,
            Self::Flood(r) => &r.name,
        }
    }
}

/// One page of a filtered dataset.
///
/// `total` is the length of the whole filtered list, not of this slice, so
/// the dashboard can render pagination controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: usize,
}
