//! Bandwidth stats and trends over the PRTG HTTP API.
//!
//! This crate sits between `prtgdash-api` and presentation consumers:
//!
//! - **Normalization** ([`normalize`]): turns a sensor's channel table into
//!   [`BandwidthStats`], a `"<channel>_max"` / `"<channel>_avg"` → Mbps map
//!   that only contains values PRTG actually reported.
//!
//! - **Historical aggregation** ([`history`]): walks a day window and
//!   reduces every day to one [`DailyTotal`] across sensors, with the
//!   cross-sensor rule spelled out as [`CrossSensorReduction`].
//!
//! - **[`Monitor`]**: facade built from a [`ServerConfig`]. Stats and trend
//!   reads are fail-soft: upstream failures are logged and yield empty data.

pub mod config;
pub mod convert;
pub mod error;
pub mod history;
pub mod model;
pub mod monitor;
pub mod normalize;
pub mod summary;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{AuthCredentials, ServerConfig, TlsVerification};
pub use error::CoreError;
pub use history::{CrossSensorReduction, HistoricalAggregator, HistorySource, MAX_TREND_DAYS};
pub use monitor::Monitor;
pub use normalize::normalize_channels;
pub use summary::summarize_peaks;

pub use model::{
    BandwidthStats, ChannelSample, DailyTotal, HistoricRecord, PeakTotals, RawReading,
    SensorEntry, SensorPeaks, SensorRef,
};

// Graph types come straight from the API crate.
pub use prtgdash_api::{GraphImage, GraphPeriod};
