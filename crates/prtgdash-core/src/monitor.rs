// ── Monitor facade ──
//
// Single entry point for consumers. Owns the `PrtgClient` built from a
// `ServerConfig` and applies the dashboard's fail-soft policy: stats and
// trend calls never return errors, they log and degrade to empty data.
// Listing sensors and downloading graphs stay strict.

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info, warn};

use prtgdash_api::transport::{TlsMode, TransportConfig};
use prtgdash_api::{Credentials, GraphImage, GraphPeriod, PrtgClient};

use crate::config::{ServerConfig, TlsVerification};
use crate::error::CoreError;
use crate::history::{CrossSensorReduction, HistoricalAggregator, HistorySource};
use crate::model::{
    BandwidthStats, ChannelSample, DailyTotal, HistoricRecord, PeakTotals, SensorEntry,
    SensorPeaks, SensorRef,
};
use crate::normalize::normalize_channels;
use crate::summary::summarize_peaks;

/// Read-only view of one PRTG server.
pub struct Monitor {
    config: ServerConfig,
    client: PrtgClient,
}

impl Monitor {
    /// Build the HTTP client for `config`. Does not contact the server.
    pub fn new(config: ServerConfig) -> Result<Self, CoreError> {
        let transport = build_transport(&config);
        let credentials = Credentials::new(
            config.auth.username.clone(),
            config.auth.passhash.clone(),
        );
        let client = PrtgClient::new(config.url.clone(), credentials, &transport)?;
        Ok(Self { config, client })
    }

    /// Wrap an already-built client (tests, custom transports).
    pub fn with_client(config: ServerConfig, client: PrtgClient) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    // ── Fail-soft reads ──────────────────────────────────────────

    /// Current stats of one sensor; empty on any failure.
    pub async fn fetch_bandwidth_stats(&self, sensor_id: &str) -> BandwidthStats {
        match self.client.fetch_channels(sensor_id).await {
            Ok(rows) => {
                let channels: Vec<ChannelSample> = rows.into_iter().map(Into::into).collect();
                let stats = normalize_channels(&channels);
                debug!(sensor_id, keys = stats.len(), "normalized channel table");
                stats
            }
            Err(e) => {
                warn!(sensor_id, error = %e, "error fetching bandwidth data");
                BandwidthStats::new()
            }
        }
    }

    /// Current peaks / averages of each sensor, fetched one after another.
    pub async fn sensor_peaks(&self, sensors: &[SensorRef]) -> Vec<SensorPeaks> {
        let mut peaks = Vec::with_capacity(sensors.len());
        for sensor in sensors {
            let stats = self.fetch_bandwidth_stats(&sensor.id).await;
            peaks.push(SensorPeaks::from_stats(sensor, &stats));
        }
        peaks
    }

    /// Per-sensor peaks plus their summed totals.
    pub async fn peak_summary(&self, sensors: &[SensorRef]) -> (Vec<SensorPeaks>, PeakTotals) {
        let peaks = self.sensor_peaks(sensors).await;
        let totals = summarize_peaks(&peaks);
        (peaks, totals)
    }

    /// Daily trend over the `days` days before `today`, using the configured
    /// reduction.
    pub async fn daily_totals(
        &self,
        sensor_ids: &[String],
        days: u32,
        today: NaiveDate,
    ) -> Vec<DailyTotal> {
        self.daily_totals_with(sensor_ids, days, today, self.config.reduction)
            .await
    }

    /// Daily trend with an explicit cross-sensor reduction.
    pub async fn daily_totals_with(
        &self,
        sensor_ids: &[String],
        days: u32,
        today: NaiveDate,
        reduction: CrossSensorReduction,
    ) -> Vec<DailyTotal> {
        info!(sensors = sensor_ids.len(), days, %reduction, "building daily trend");
        HistoricalAggregator::new(self)
            .with_reduction(reduction)
            .daily_totals(sensor_ids, days, today)
            .await
    }

    // ── Strict reads ─────────────────────────────────────────────

    pub async fn list_sensors(&self) -> Result<Vec<SensorEntry>, CoreError> {
        let rows = self
            .client
            .list_sensors()
            .await
            .map_err(|e| self.core_error(e))?;
        let total = rows.len();
        let entries: Vec<SensorEntry> = rows.into_iter().filter_map(SensorEntry::from_row).collect();
        if entries.len() < total {
            warn!(skipped = total - entries.len(), "sensor rows without a usable objid");
        }
        Ok(entries)
    }

    pub async fn fetch_graph(
        &self,
        sensor_id: &str,
        period: GraphPeriod,
        width: u32,
        height: u32,
    ) -> Result<GraphImage, CoreError> {
        self.client
            .fetch_graph(sensor_id, period, width, height)
            .await
            .map_err(|e| self.core_error(e))
    }

    fn core_error(&self, err: prtgdash_api::Error) -> CoreError {
        CoreError::from(err).with_timeout(self.config.timeout.as_secs())
    }
}

impl HistorySource for Monitor {
    async fn day_samples(
        &self,
        sensor_id: &str,
        day: NaiveDate,
    ) -> Result<Vec<HistoricRecord>, CoreError> {
        let start = day.and_time(NaiveTime::MIN);
        let end = day
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| CoreError::Config {
                message: format!("cannot build end of day for {day}"),
            })?;

        let rows = self
            .client
            .fetch_historic_data(sensor_id, start, end, self.config.history_average_secs)
            .await
            .map_err(|e| self.core_error(e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

fn build_transport(config: &ServerConfig) -> TransportConfig {
    TransportConfig {
        tls: tls_to_transport(&config.tls),
        timeout: config.timeout,
    }
}

fn tls_to_transport(tls: &TlsVerification) -> TlsMode {
    match tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    }
}
