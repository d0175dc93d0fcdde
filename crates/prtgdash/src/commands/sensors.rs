//! Sensor listing.

use tabled::Tabled;

use prtgdash_core::SensorEntry;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::Session;

#[derive(Tabled)]
struct SensorRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Sensor")]
    name: String,
    #[tabled(rename = "Device")]
    device: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Configured")]
    configured: String,
}

pub async fn handle(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let sensors = session.monitor.list_sensors().await?;

    let color = output::should_color(&global.color);
    let configured_name = |entry: &SensorEntry| {
        let id = entry.id.to_string();
        session
            .sensors
            .iter()
            .find(|s| s.id == id)
            .map_or_else(|| output::muted("-", color), |s| s.name.clone())
    };

    let out = output::render_list(
        &global.output,
        &sensors,
        |s| SensorRow {
            id: s.id,
            name: s.name.clone(),
            device: s.device.clone().unwrap_or_default(),
            status: s.status.clone().unwrap_or_default(),
            configured: configured_name(s),
        },
        |s| format!("{}\t{}", s.id, s.name),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
