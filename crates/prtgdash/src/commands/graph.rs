//! Graph download.

use std::path::PathBuf;

use serde::Serialize;

use prtgdash_core::GraphPeriod;

use crate::cli::{GlobalOpts, GraphArgs, PeriodArg};
use crate::error::CliError;
use crate::output;

use super::{Session, util};

impl From<PeriodArg> for GraphPeriod {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Live => Self::Live,
            PeriodArg::Last48Hours => Self::Last48Hours,
            PeriodArg::Last30Days => Self::Last30Days,
            PeriodArg::Last365Days => Self::Last365Days,
        }
    }
}

#[derive(Debug, Serialize)]
struct SavedGraph {
    sensor: String,
    id: String,
    period: GraphPeriod,
    path: PathBuf,
    bytes: usize,
}

pub async fn handle(session: &Session, args: GraphArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let sensor = util::resolve_sensor(&args.sensor, &session.sensors)?;
    let period = GraphPeriod::from(args.period);

    let image = session
        .monitor
        .fetch_graph(&sensor.id, period, args.width, args.height)
        .await?;

    let path = args
        .out
        .unwrap_or_else(|| default_file_name(&sensor.name, period));
    std::fs::write(&path, &image.bytes)?;
    tracing::info!(path = %path.display(), bytes = image.bytes.len(), "graph saved");

    let saved = SavedGraph {
        sensor: sensor.name,
        id: sensor.id,
        period,
        path,
        bytes: image.bytes.len(),
    };
    let out = output::render_single(
        &global.output,
        &saved,
        |s| {
            format!(
                "Saved {} graph of {} to {} ({} bytes)",
                period.label(),
                s.sensor,
                s.path.display(),
                s.bytes
            )
        },
        |s| s.path.display().to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

/// `<sensor>-<period>.png` with anything outside `[A-Za-z0-9_-]` replaced.
fn default_file_name(sensor_name: &str, period: GraphPeriod) -> PathBuf {
    let slug: String = sensor_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let period = match period {
        GraphPeriod::Live => "live",
        GraphPeriod::Last48Hours => "48h",
        GraphPeriod::Last30Days => "30d",
        GraphPeriod::Last365Days => "365d",
    };
    PathBuf::from(format!("{slug}-{period}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_name_is_filesystem_safe() {
        assert_eq!(
            default_file_name("HE / Transit", GraphPeriod::Last30Days),
            PathBuf::from("HE___Transit-30d.png")
        );
        assert_eq!(
            default_file_name("12363", GraphPeriod::Live),
            PathBuf::from("12363-live.png")
        );
    }
}
