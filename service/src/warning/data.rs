//! Canned datasets backing the mock flood-warning service.
//!
//! The records mirror the survey data for the 梅州 pilot area. Every
//! accessor builds a fresh `Vec` so callers can never observe shared
//! mutation.

use super::types::{
    ElementKind, ElementStat, FloodAreaRecord, GateRecord, PumpRecord, ReservoirRecord,
    RiskLevelStat, RiskTier, RiverRecord,
};

fn river(id: u32, name: &str, slope: &str, length: &str) -> RiverRecord {
    RiverRecord {
        id,
        name: name.into(),
        slope: slope.into(),
        length: length.into(),
        area: None,
        level: None,
        basin: None,
        start_coord: None,
        end_coord: None,
        management: None,
        update_time: None,
    }
}

/// The twelve monitored river reaches.
pub fn rivers() -> Vec<RiverRecord> {
    vec![
        river(1, "水东河", "0.2", "15.8"),
        river(2, "五华河", "1.7‰", "8.2"),
        river(3, "程江", "0.5", "25.6"),
        river(4, "梅江", "0.8", "45.2"),
        river(5, "石窟河", "0.3", "12.4"),
        river(6, "周溪河", "0.6", "18.9"),
        river(7, "黄塘河", "0.4", "22.1"),
        river(8, "松源河", "0.7", "16.3"),
        river(9, "丙村河", "0.9", "28.7"),
        river(10, "韩江", "0.2", "156.8"),
        river(11, "汀江", "0.5", "89.4"),
        river(12, "梅潭河", "0.8", "34.2"),
    ]
}

fn pump(id: u32, name: &str, capacity: &str, power: &str, status: &str) -> PumpRecord {
    PumpRecord {
        id,
        name: name.into(),
        capacity: capacity.into(),
        power: power.into(),
        status: status.into(),
    }
}

/// Drainage pump stations.
pub fn pumps() -> Vec<PumpRecord> {
    vec![
        pump(1, "梅江泵站", "50", "200", "正常"),
        pump(2, "程江泵站", "30", "150", "正常"),
        pump(3, "石窟河泵站", "25", "120", "维修"),
        pump(4, "周溪河泵站", "40", "180", "正常"),
        pump(5, "黄塘河泵站", "35", "160", "正常"),
    ]
}

fn reservoir(id: u32, name: &str, capacity: &str, current_level: &str, status: &str) -> ReservoirRecord {
    ReservoirRecord {
        id,
        name: name.into(),
        capacity: capacity.into(),
        current_level: current_level.into(),
        status: status.into(),
    }
}

/// Reservoirs.
pub fn reservoirs() -> Vec<ReservoirRecord> {
    vec![
        reservoir(1, "梅江水库", "1200", "85%", "正常"),
        reservoir(2, "程江水库", "800", "72%", "正常"),
        reservoir(3, "石窟河水库", "600", "90%", "警戒"),
        reservoir(4, "周溪河水库", "450", "68%", "正常"),
    ]
}

fn gate(id: u32, name: &str, gate_type: &str, status: &str, open_level: &str) -> GateRecord {
    GateRecord {
        id,
        name: name.into(),
        gate_type: gate_type.into(),
        status: status.into(),
        open_level: open_level.into(),
    }
}

/// Sluice gates.
pub fn gates() -> Vec<GateRecord> {
    vec![
        gate(1, "梅江水闸", "节制闸", "开启", "60%"),
        gate(2, "程江水闸", "分洪闸", "关闭", "0%"),
        gate(3, "石窟河水闸", "节制闸", "开启", "80%"),
        gate(4, "周溪河水闸", "排涝闸", "开启", "100%"),
    ]
}

fn flood_area(id: u32, name: &str, risk_level: u8) -> FloodAreaRecord {
    FloodAreaRecord {
        id,
        name: name.into(),
        risk_level,
        area: None,
        population: None,
        max_depth: None,
        drainage: None,
        factors: None,
        protection: None,
    }
}

/// Flood-prone zones.
pub fn flood_areas() -> Vec<FloodAreaRecord> {
    vec![
        flood_area(1, "梅江新区易涝区", 2),
        flood_area(2, "程江工业区易涝区", 3),
        flood_area(3, "石窟河居民区易涝区", 1),
        flood_area(4, "周溪河商业区易涝区", 2),
        flood_area(5, "黄塘河农业区易涝区", 1),
    ]
}

/// Per-kind element counters for the summary bar.
pub fn element_stats() -> Vec<ElementStat> {
    let counters = [
        (ElementKind::River, "河流", 30),
        (ElementKind::Pump, "泵站", 15),
        (ElementKind::Reservoir, "水库", 8),
        (ElementKind::Gate, "水闸", 12),
        (ElementKind::Flood, "易涝区", 5),
    ];
    counters
        .into_iter()
        .map(|(kind, label, count)| ElementStat {
            kind,
            label: label.into(),
            count,
        })
        .collect()
}

/// The three-tier severity breakdown for the risk panel.
pub fn risk_statistics() -> Vec<RiskLevelStat> {
    vec![
        RiskLevelStat {
            tier: RiskTier::Normal,
            label: "正常险".into(),
            color: "rgba(52, 144, 220, 0.8)".into(),
            icon_color: "#3490dc".into(),
            count: "15".into(),
            water_level: "2.3m".into(),
        },
        RiskLevelStat {
            tier: RiskTier::Low,
            label: "低风险".into(),
            color: "rgba(255, 193, 7, 0.8)".into(),
            icon_color: "#ffc107".into(),
            count: "8".into(),
            water_level: "3.1m".into(),
        },
        RiskLevelStat {
            tier: RiskTier::High,
            label: "高风险".into(),
            color: "rgba(220, 53, 69, 0.8)".into(),
            icon_color: "#dc3545".into(),
            count: "3".into(),
            water_level: "4.2m".into(),
        },
    ]
}

/// Overlay layers the map can toggle: short name, panel label, WMS layer
/// name within the configured workspace, default visibility.
///
/// The WMS layer name does not always match the short name (legacy naming
/// on the GeoServer side, e.g. `heliu` publishes as `river`).
pub const LAYER_TABLE: [(&str, &str, &str, bool); 10] = [
    ("bengzhan", "泵站", "bengzhan", false),
    ("shuiku", "水库", "shuiku", false),
    ("shuizha", "水闸", "shuizha", false),
    ("heliu", "河流", "river", true),
    ("daolu", "道路", "road", false),
    ("xingzheng", "行政区划", "xingzheng", false),
    ("yilaoqu", "易涝区", "yilaoqu", false),
    ("shuiweizan", "水位站", "swz", true),
    ("yuliangzhan", "雨量站", "ylz", true),
    ("liuliangzhan", "流量站", "llz", true),
];
