// ── Sensors ──

use serde::{Deserialize, Serialize};

use super::stats::BandwidthStats;

/// A sensor the caller asked about: display name plus PRTG object ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorRef {
    pub name: String,
    pub id: String,
}

impl SensorRef {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// A row of the server's sensor table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorEntry {
    pub id: u64,
    pub name: String,
    pub device: Option<String>,
    pub status: Option<String>,
}

/// Current traffic figures of one sensor, gaps shown as 0 Mbps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPeaks {
    pub name: String,
    pub id: String,
    pub peak_in_mbps: f64,
    pub peak_out_mbps: f64,
    pub avg_in_mbps: f64,
    pub avg_out_mbps: f64,
}

impl SensorPeaks {
    pub fn from_stats(sensor: &SensorRef, stats: &BandwidthStats) -> Self {
        Self {
            name: sensor.name.clone(),
            id: sensor.id.clone(),
            peak_in_mbps: stats.peak_in(),
            peak_out_mbps: stats.peak_out(),
            avg_in_mbps: stats.avg_in(),
            avg_out_mbps: stats.avg_out(),
        }
    }
}

/// Sum of current peaks across sensors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PeakTotals {
    pub total_peak_in_mbps: f64,
    pub total_peak_out_mbps: f64,
}
