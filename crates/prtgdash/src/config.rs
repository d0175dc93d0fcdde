//! CLI flag overrides on top of `prtgdash-config` profiles.
//!
//! This is the single place where global flags meet the TOML profile and
//! become a `prtgdash_core::ServerConfig`.

use secrecy::SecretString;

use prtgdash_config::{Config, Profile};
use prtgdash_core::{AuthCredentials, MAX_TREND_DAYS, SensorRef, ServerConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Everything a server-bound command needs besides the `Monitor`.
#[derive(Debug)]
pub struct Resolved {
    pub profile_name: String,
    pub server: ServerConfig,
    pub sensors: Vec<SensorRef>,
    pub trend_days: u32,
}

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Comma-separated profile names for help text.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().cloned().collect();
    names.sort();
    if names.is_empty() {
        "(none)".into()
    } else {
        names.join(", ")
    }
}

/// Merge config file, active profile, and flags.
///
/// Without a matching profile, `--server` alone is enough: an ad-hoc
/// profile is built from flags and the usual credential chain applies.
pub fn resolve(global: &GlobalOpts, cfg: &Config) -> Result<Resolved, CliError> {
    let profile_name = active_profile_name(global, cfg);

    let mut profile = match (cfg.profiles.get(&profile_name), &global.server) {
        (Some(profile), _) => profile.clone(),
        (None, Some(server)) => Profile::new(server.clone()),
        (None, None) if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available_profiles(cfg),
            });
        }
        (None, None) => {
            return Err(CliError::NoConfig {
                path: prtgdash_config::config_path().display().to_string(),
            });
        }
    };

    // 1. Flag overrides (flag > env > profile)
    if let Some(ref server) = global.server {
        profile.server.clone_from(server);
    }
    if let Some(ref username) = global.username {
        profile.username = Some(username.clone());
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }

    // 2. Credentials (--passhash first, then the profile chain)
    let username = prtgdash_config::resolve_username(&profile, &profile_name)?;
    let passhash = match global.passhash {
        Some(ref hash) => SecretString::from(hash.clone()),
        None => prtgdash_config::resolve_passhash(&profile, &profile_name)?,
    };

    let server = prtgdash_config::build_server_config(
        &profile,
        &cfg.defaults,
        AuthCredentials { username, passhash },
    )?;

    if cfg.defaults.trend_days > MAX_TREND_DAYS {
        return Err(CliError::Validation {
            field: "defaults.trend_days".into(),
            reason: format!("must be at most {MAX_TREND_DAYS}"),
        });
    }

    Ok(Resolved {
        sensors: profile.sensor_refs(),
        trend_days: cfg.defaults.trend_days,
        profile_name,
        server,
    })
}
