mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use prtgdash_core::Monitor;

use crate::cli::{Cli, Command};
use crate::commands::Session;
use crate::error::CliError;

// Fetches are awaited one at a time; a single-threaded runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a server
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "prtgdash", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let cfg = prtgdash_config::load_config_or_default();
            let resolved = config::resolve(&cli.global, &cfg)?;
            tracing::debug!(
                profile = %resolved.profile_name,
                server = %resolved.server.url,
                sensors = resolved.sensors.len(),
                "resolved server config"
            );

            let session = Session {
                monitor: Monitor::new(resolved.server)?,
                profile_name: resolved.profile_name,
                sensors: resolved.sensors,
                trend_days: resolved.trend_days,
            };
            commands::dispatch(cmd, &session, &cli.global).await
        }
    }
}
