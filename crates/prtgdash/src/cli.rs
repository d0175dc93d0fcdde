//! Clap derive structures for the `prtgdash` CLI.
//!
//! Defines the command tree, global flags, and shared value enums. Only
//! depends on clap + clap_complete so `build.rs` can include it for man pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// prtgdash -- bandwidth stats and daily trends from a PRTG server
#[derive(Debug, Parser)]
#[command(
    name = "prtgdash",
    version,
    about = "Bandwidth stats and daily trends from a PRTG server",
    long_about = "Reads traffic sensors of a PRTG Network Monitor core over its HTTP API.\n\n\
        Shows current peak / average throughput per sensor in Mbps, summed\n\
        totals, day-by-day historical maxima, and downloads sensor graphs.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "PRTG_PROFILE", global = true)]
    pub profile: Option<String>,

    /// PRTG server URL (overrides profile)
    #[arg(long, short = 's', env = "PRTG_SERVER", global = true)]
    pub server: Option<String>,

    /// API user name (overrides profile)
    #[arg(long, short = 'u', env = "PRTG_USERNAME", global = true)]
    pub username: Option<String>,

    /// API passhash
    #[arg(long, env = "PRTG_PASSHASH", global = true, hide_env_values = true)]
    pub passhash: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "PRTG_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "PRTG_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (default from config, 10)
    #[arg(long, env = "PRTG_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// How per-sensor day maxima combine into one daily value.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReductionArg {
    /// Highest single sensor (busiest link)
    Max,
    /// Sum across sensors (total throughput)
    Sum,
}

/// Graph time span.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum PeriodArg {
    /// Live data, last 2 hours
    #[default]
    Live,
    /// Last 48 hours
    #[value(name = "48h")]
    Last48Hours,
    /// Last 30 days
    #[value(name = "30d")]
    Last30Days,
    /// Last 365 days
    #[value(name = "365d")]
    Last365Days,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Current peak and average traffic per sensor
    #[command(alias = "st")]
    Stats(StatsArgs),

    /// Per-sensor peaks plus summed totals
    #[command(alias = "sum")]
    Summary(SummaryArgs),

    /// Daily maxima over the last N days
    #[command(alias = "tr")]
    Trend(TrendArgs),

    /// Download a sensor graph as PNG
    Graph(GraphArgs),

    /// List sensors known to the server
    Sensors,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TRAFFIC
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Sensor names or IDs (default: all sensors of the profile)
    pub sensors: Vec<String>,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Sensor names or IDs (default: all sensors of the profile)
    pub sensors: Vec<String>,
}

#[derive(Debug, Args)]
pub struct TrendArgs {
    /// Number of days before today to cover, at most 3650 (default from config, 7)
    #[arg(long, short = 'd', value_parser = clap::value_parser!(u32).range(0..=3650))]
    pub days: Option<u32>,

    /// Cross-sensor reduction (default from config, max)
    #[arg(long, short = 'r')]
    pub reduction: Option<ReductionArg>,

    /// Sensor names or IDs (default: all sensors of the profile)
    pub sensors: Vec<String>,
}

#[derive(Debug, Args)]
pub struct GraphArgs {
    /// Sensor name or ID
    pub sensor: String,

    /// Time span of the graph
    #[arg(long, default_value = "live")]
    pub period: PeriodArg,

    /// Image width in pixels
    #[arg(long, default_value = "1600")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "700")]
    pub height: u32,

    /// Output file (default: <sensor>-<period>.png)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration (passhashes redacted)
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a passhash in the system keyring
    SetPasshash {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
