//! Command dispatch: bridges CLI args -> `Monitor` calls -> output formatting.

pub mod config_cmd;
pub mod graph;
pub mod sensors;
pub mod stats;
pub mod trend;
pub mod util;

use prtgdash_core::{Monitor, SensorRef};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// A connected view of the active profile.
pub struct Session {
    pub monitor: Monitor,
    pub profile_name: String,
    /// Configured sensors, in profile order.
    pub sensors: Vec<SensorRef>,
    pub trend_days: u32,
}

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Stats(args) => stats::handle_stats(session, args, global).await,
        Command::Summary(args) => stats::handle_summary(session, args, global).await,
        Command::Trend(args) => trend::handle(session, args, global).await,
        Command::Graph(args) => graph::handle(session, args, global).await,
        Command::Sensors => sensors::handle(session, global).await,
        // Config and Completions are handled before a session exists
        Command::Config(_) | Command::Completions(_) => Err(CliError::Validation {
            field: "command".into(),
            reason: "does not need a server connection".into(),
        }),
    }
}
