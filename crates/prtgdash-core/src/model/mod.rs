// ── Domain model ──
//
// Request-scoped types produced from PRTG responses. Nothing here is
// persisted or shared between calls; identity is the lookup key only.

pub mod reading;
pub mod sensor;
pub mod stats;
pub mod trend;

// ── Re-exports ──────────────────────────────────────────────────────

pub use reading::{RawReading, bits_to_mbps, round2};
pub use sensor::{PeakTotals, SensorEntry, SensorPeaks, SensorRef};
pub use stats::{BandwidthStats, ChannelSample, TRAFFIC_IN, TRAFFIC_OUT};
pub use trend::{DailyTotal, HistoricRecord};
