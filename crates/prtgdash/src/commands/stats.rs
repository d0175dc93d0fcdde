//! Current traffic: `stats` and `summary`.

use serde::Serialize;
use tabled::Tabled;

use prtgdash_core::{BandwidthStats, PeakTotals, SensorPeaks, SensorRef};

use crate::cli::{GlobalOpts, StatsArgs, SummaryArgs};
use crate::error::CliError;
use crate::output;

use super::{Session, util};

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct PeaksRow {
    #[tabled(rename = "Sensor")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Peak In (Mbps)")]
    peak_in: String,
    #[tabled(rename = "Peak Out (Mbps)")]
    peak_out: String,
    #[tabled(rename = "Avg In (Mbps)")]
    avg_in: String,
    #[tabled(rename = "Avg Out (Mbps)")]
    avg_out: String,
}

impl From<&SensorPeaks> for PeaksRow {
    fn from(p: &SensorPeaks) -> Self {
        Self {
            name: p.name.clone(),
            id: p.id.clone(),
            peak_in: output::mbps(p.peak_in_mbps),
            peak_out: output::mbps(p.peak_out_mbps),
            avg_in: output::mbps(p.avg_in_mbps),
            avg_out: output::mbps(p.avg_out_mbps),
        }
    }
}

/// Structured output of `stats`: only the values PRTG reported.
#[derive(Debug, Serialize)]
struct SensorStats {
    name: String,
    id: String,
    stats: BandwidthStats,
}

impl From<&SensorStats> for PeaksRow {
    fn from(s: &SensorStats) -> Self {
        let sensor = SensorRef::new(s.name.clone(), s.id.clone());
        PeaksRow::from(&SensorPeaks::from_stats(&sensor, &s.stats))
    }
}

#[derive(Debug, Serialize)]
struct SummaryReport {
    sensors: Vec<SensorPeaks>,
    totals: PeakTotals,
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn handle_stats(
    session: &Session,
    args: StatsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let sensors = util::resolve_sensors(&args.sensors, &session.sensors, &session.profile_name)?;

    let mut results = Vec::with_capacity(sensors.len());
    for sensor in sensors {
        let stats = session.monitor.fetch_bandwidth_stats(&sensor.id).await;
        results.push(SensorStats {
            name: sensor.name,
            id: sensor.id,
            stats,
        });
    }

    let out = output::render_list(&global.output, &results, |s| PeaksRow::from(s), |s| {
        let row = PeaksRow::from(s);
        format!("{}\t{}\t{}", row.name, row.peak_in, row.peak_out)
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle_summary(
    session: &Session,
    args: SummaryArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let sensors = util::resolve_sensors(&args.sensors, &session.sensors, &session.profile_name)?;
    let (peaks, totals) = session.monitor.peak_summary(&sensors).await;
    let report = SummaryReport {
        sensors: peaks,
        totals,
    };

    let color = output::should_color(&global.color);
    let out = output::render_single(
        &global.output,
        &report,
        |r| summary_detail(r, color),
        |r| {
            format!(
                "{}\t{}",
                output::mbps(r.totals.total_peak_in_mbps),
                output::mbps(r.totals.total_peak_out_mbps)
            )
        },
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn summary_detail(report: &SummaryReport, color: bool) -> String {
    let rows: Vec<PeaksRow> = report.sensors.iter().map(PeaksRow::from).collect();
    let table = output::render_table(&rows);
    let total_in = format!("{} Mbps", output::mbps(report.totals.total_peak_in_mbps));
    let total_out = format!("{} Mbps", output::mbps(report.totals.total_peak_out_mbps));
    format!(
        "{table}\n\nTotal peak in:  {}\nTotal peak out: {}",
        output::highlight(&total_in, color),
        output::highlight(&total_out, color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_row_defaults_missing_values_to_zero() {
        let stats: BandwidthStats = [("Traffic In_max".to_string(), 104.5)].into_iter().collect();
        let row = PeaksRow::from(&SensorStats {
            name: "Firstlight".into(),
            id: "12435".into(),
            stats,
        });
        assert_eq!(row.peak_in, "104.50");
        assert_eq!(row.peak_out, "0.00");
        assert_eq!(row.avg_in, "0.00");
    }

    #[test]
    fn summary_detail_lists_totals() {
        let report = SummaryReport {
            sensors: vec![],
            totals: PeakTotals {
                total_peak_in_mbps: 354.5,
                total_peak_out_mbps: 12.0,
            },
        };
        let text = summary_detail(&report, false);
        assert!(text.contains("Total peak in:  354.50 Mbps"));
        assert!(text.contains("Total peak out: 12.00 Mbps"));
    }
}
