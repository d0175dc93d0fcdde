// ── Historical trend types ──

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::reading::RawReading;

/// One historic sample of a bandwidth sensor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoricRecord {
    pub datetime: Option<String>,
    /// `"Traffic In (Speed)"`, bits/s.
    pub traffic_in: RawReading,
    /// `"Traffic Out (Speed)"`, bits/s.
    pub traffic_out: RawReading,
}

/// One row of the trend: the day's reduced maxima in Mbps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub total_in_mbps: f64,
    pub total_out_mbps: f64,
}

impl DailyTotal {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total_in_mbps: 0.0,
            total_out_mbps: 0.0,
        }
    }

    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
