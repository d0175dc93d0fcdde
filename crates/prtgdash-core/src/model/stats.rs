// ── Current channel stats ──

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::reading::RawReading;

/// Channel name PRTG uses for inbound traffic on bandwidth sensors.
pub const TRAFFIC_IN: &str = "Traffic In";
/// Channel name PRTG uses for outbound traffic on bandwidth sensors.
pub const TRAFFIC_OUT: &str = "Traffic Out";

/// One metric channel of a sensor at fetch time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChannelSample {
    /// Lookup key; not guaranteed unique within a response.
    pub name: String,
    pub maximum_raw: RawReading,
    pub average_raw: RawReading,
}

/// `"<channel>_max"` / `"<channel>_avg"` → Mbps, in response order.
///
/// A key exists only when the raw value was present and numeric; this type
/// never fills gaps. Display code uses [`get_or_zero`](Self::get_or_zero).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandwidthStats(IndexMap<String, f64>);

impl BandwidthStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_key(channel: &str) -> String {
        format!("{channel}_max")
    }

    pub fn avg_key(channel: &str) -> String {
        format!("{channel}_avg")
    }

    pub fn insert(&mut self, key: String, mbps: f64) {
        self.0.insert(key, mbps);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn get_or_zero(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    // ── Traffic shortcuts ────────────────────────────────────────────

    pub fn peak_in(&self) -> f64 {
        self.get_or_zero(&Self::max_key(TRAFFIC_IN))
    }

    pub fn peak_out(&self) -> f64 {
        self.get_or_zero(&Self::max_key(TRAFFIC_OUT))
    }

    pub fn avg_in(&self) -> f64 {
        self.get_or_zero(&Self::avg_key(TRAFFIC_IN))
    }

    pub fn avg_out(&self) -> f64 {
        self.get_or_zero(&Self::avg_key(TRAFFIC_OUT))
    }
}

impl FromIterator<(String, f64)> for BandwidthStats {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
