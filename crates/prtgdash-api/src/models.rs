// PRTG API response types
//
// Models for the JSON table and historic-data endpoints. PRTG is loose about
// value types (numbers, numeric strings, "-" placeholders, empty strings), so
// raw readings are kept as `serde_json::Value` and interpreted by the core
// crate. Identifier columns are kept untyped too: one malformed cell must not
// fail the whole table. Fields use `#[serde(default)]` because column sets
// vary by request.

use serde::{Deserialize, Serialize};

// ── Channel table ────────────────────────────────────────────────────

/// Response of `api/table.json?content=channels`.
///
/// ```json
/// { "prtg-version": "24.1", "treesize": 2, "channels": [ ... ] }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelTable {
    #[serde(default, rename = "prtg-version")]
    pub prtg_version: Option<serde_json::Value>,
    #[serde(default)]
    pub treesize: Option<serde_json::Value>,
    #[serde(default)]
    pub channels: Vec<ChannelRow>,
}

/// One channel row. `maximum_raw` / `average_raw` are bits per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelRow {
    #[serde(default)]
    pub name: Option<serde_json::Value>,
    #[serde(default)]
    pub maximum_raw: Option<serde_json::Value>,
    #[serde(default)]
    pub average_raw: Option<serde_json::Value>,
    /// Catch-all for extra requested columns.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Historic data ────────────────────────────────────────────────────

/// Response of `api/historicdata.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricData {
    #[serde(default, rename = "prtg-version")]
    pub prtg_version: Option<serde_json::Value>,
    #[serde(default)]
    pub treesize: Option<serde_json::Value>,
    #[serde(default)]
    pub histdata: Vec<HistoricRow>,
}

/// One sample row. Channel columns are named by caption, e.g.
/// `"Traffic In (Speed)"`, and land in `fields`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricRow {
    #[serde(default)]
    pub datetime: Option<serde_json::Value>,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

// ── Sensor table ─────────────────────────────────────────────────────

/// Response of `api/table.json?content=sensors`.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorTable {
    #[serde(default)]
    pub treesize: Option<serde_json::Value>,
    #[serde(default)]
    pub sensors: Vec<SensorRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorRow {
    #[serde(default)]
    pub objid: Option<serde_json::Value>,
    #[serde(default)]
    pub sensor: Option<serde_json::Value>,
    #[serde(default)]
    pub device: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<serde_json::Value>,
}

// ── Error body ───────────────────────────────────────────────────────

/// JSON error envelope returned with HTTP 400.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// ── Graphs ───────────────────────────────────────────────────────────

/// Time span of a `chart.png` graph, mapped to PRTG's `graphid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphPeriod {
    /// Live data, last 2 hours.
    #[default]
    Live,
    /// Last 48 hours.
    #[serde(rename = "48h")]
    Last48Hours,
    /// Last 30 days.
    #[serde(rename = "30d")]
    Last30Days,
    /// Last 365 days.
    #[serde(rename = "365d")]
    Last365Days,
}

impl GraphPeriod {
    pub fn graph_id(self) -> u8 {
        match self {
            Self::Live => 0,
            Self::Last48Hours => 1,
            Self::Last30Days => 2,
            Self::Last365Days => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "Live (2 hours)",
            Self::Last48Hours => "Last 48 hours",
            Self::Last30Days => "Last 30 days",
            Self::Last365Days => "Last 365 days",
        }
    }
}

/// A downloaded graph image.
#[derive(Debug, Clone)]
pub struct GraphImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}
