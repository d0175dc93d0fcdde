//! Daily trend: per-day maxima over the last N days.

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Tabled;

use prtgdash_core::{CrossSensorReduction, DailyTotal};

use crate::cli::{GlobalOpts, ReductionArg, TrendArgs};
use crate::error::CliError;
use crate::output;

use super::{Session, util};

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Max In (Mbps)")]
    total_in: String,
    #[tabled(rename = "Max Out (Mbps)")]
    total_out: String,
}

impl From<&DailyTotal> for TrendRow {
    fn from(t: &DailyTotal) -> Self {
        Self {
            date: t.date_string(),
            total_in: output::mbps(t.total_in_mbps),
            total_out: output::mbps(t.total_out_mbps),
        }
    }
}

impl From<ReductionArg> for CrossSensorReduction {
    fn from(arg: ReductionArg) -> Self {
        match arg {
            ReductionArg::Max => Self::Max,
            ReductionArg::Sum => Self::Sum,
        }
    }
}

pub async fn handle(session: &Session, args: TrendArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let sensors = util::resolve_sensors(&args.sensors, &session.sensors, &session.profile_name)?;
    let ids: Vec<String> = sensors.into_iter().map(|s| s.id).collect();
    let days = args.days.unwrap_or(session.trend_days);
    let reduction = args
        .reduction
        .map_or(session.monitor.config().reduction, CrossSensorReduction::from);
    let today = chrono::Local::now().date_naive();

    let spinner = spinner(
        &format!("Fetching {days} days of history for {} sensors", ids.len()),
        global.quiet,
    );
    let totals = session
        .monitor
        .daily_totals_with(&ids, days, today, reduction)
        .await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let out = output::render_list(&global.output, &totals, |t| TrendRow::from(t), |t| {
        let row = TrendRow::from(t);
        format!("{}\t{}\t{}", row.date, row.total_in, row.total_out)
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Stderr spinner, only when someone is watching.
fn spinner(message: &str, quiet: bool) -> Option<ProgressBar> {
    if quiet || !std::io::stderr().is_terminal() {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} ({elapsed})") {
        pb.set_style(style);
    }
    pb.set_message(message.to_owned());
    pb.enable_steady_tick(Duration::from_millis(120));
    Some(pb)
}
