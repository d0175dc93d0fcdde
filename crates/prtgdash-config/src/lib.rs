//! Configuration for prtgdash.
//!
//! TOML profiles, passhash resolution (env + keyring + plaintext), and
//! translation to `prtgdash_core::ServerConfig`. The CLI layers its
//! flag overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use prtgdash_core::{
    AuthCredentials, CrossSensorReduction, SensorRef, ServerConfig, TlsVerification,
};

/// Keyring service name under which passhashes are stored.
pub const KEYRING_SERVICE: &str = "prtgdash";

/// Environment variable consulted for the passhash when the profile names none.
pub const PASSHASH_ENV: &str = "PRTG_PASSHASH";

/// Environment variable consulted for the username when the profile has none.
pub const USERNAME_ENV: &str = "PRTG_USERNAME";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named server profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Days covered by `trend` when `--days` is not given.
    #[serde(default = "default_trend_days")]
    pub trend_days: u32,

    #[serde(default)]
    pub reduction: CrossSensorReduction,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
            trend_days: default_trend_days(),
            reduction: CrossSensorReduction::default(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    10
}
fn default_trend_days() -> u32 {
    7
}

/// A named PRTG server profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// PRTG web root (e.g., "https://prtg.example.net").
    pub server: String,

    /// API user name.
    pub username: Option<String>,

    /// Passhash (plaintext; prefer keyring or env var).
    pub passhash: Option<String>,

    /// Environment variable name containing the passhash.
    pub passhash_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout.
    pub timeout: Option<u64>,

    /// `avg` of historic queries in seconds (0 = raw samples).
    pub history_average: Option<u32>,

    /// Override the cross-sensor reduction of the trend.
    pub reduction: Option<CrossSensorReduction>,

    /// Sensors shown by default, in display order.
    #[serde(default)]
    pub sensors: Vec<SensorConfig>,
}

/// A sensor entry of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SensorConfig {
    pub name: String,
    pub id: String,
}

impl Profile {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            username: None,
            passhash: None,
            passhash_env: None,
            ca_cert: None,
            insecure: None,
            timeout: None,
            history_average: None,
            reduction: None,
            sensors: Vec::new(),
        }
    }

    /// The configured sensors as core references, in file order.
    pub fn sensor_refs(&self) -> Vec<SensorRef> {
        self.sensors
            .iter()
            .map(|s| SensorRef::new(s.name.clone(), s.id.clone()))
            .collect()
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("net", "prtgdash", "prtgdash").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("prtgdash");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from `path` + environment.
///
/// Environment keys use `PRTGDASH_` and `__` as the nesting separator,
/// e.g. `PRTGDASH_DEFAULTS__TIMEOUT=30`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("PRTGDASH_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, falling back to defaults (with a warning) when it is unreadable.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        Config::default()
    })
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution (without CLI flags) ───────────────────────

/// Keyring entry name of a profile's passhash.
pub fn keyring_user(profile_name: &str) -> String {
    format!("{profile_name}/passhash")
}

/// Resolve the passhash from the credential chain (no CLI flag step).
pub fn resolve_passhash(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's passhash_env → env var lookup
    if let Some(ref env_name) = profile.passhash_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. Well-known env var
    if let Ok(val) = std::env::var(PASSHASH_ENV) {
        return Ok(SecretString::from(val));
    }

    // 3. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &keyring_user(profile_name)) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 4. Plaintext in config
    if let Some(ref hash) = profile.passhash {
        return Ok(SecretString::from(hash.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Resolve the API user name: profile first, then `PRTG_USERNAME`.
pub fn resolve_username(profile: &Profile, profile_name: &str) -> Result<String, ConfigError> {
    profile
        .username
        .clone()
        .or_else(|| std::env::var(USERNAME_ENV).ok())
        .ok_or_else(|| ConfigError::NoCredentials {
            profile: profile_name.into(),
        })
}

/// Parse and validate a server URL.
pub fn parse_server_url(raw: &str) -> Result<url::Url, ConfigError> {
    let url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {raw}"),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Validation {
            field: "server".into(),
            reason: format!("unsupported scheme '{other}' (use http or https)"),
        }),
    }
}

/// TLS strategy of a profile.
///
/// `insecure = true` (profile, defaults or `--insecure`) accepts any
/// certificate. Otherwise a configured CA file is trusted, and an explicit
/// `insecure = false` selects the system roots. With nothing set,
/// self-signed certificates are accepted, as on-prem PRTG cores typically
/// use them.
pub fn profile_tls(profile: &Profile, force_insecure: bool) -> TlsVerification {
    if force_insecure || profile.insecure == Some(true) {
        return TlsVerification::DangerAcceptInvalid;
    }
    match (&profile.ca_cert, profile.insecure) {
        (Some(ca_path), _) => TlsVerification::CustomCa(ca_path.clone()),
        (None, Some(false)) => TlsVerification::SystemDefaults,
        (None, _) => TlsVerification::DangerAcceptInvalid,
    }
}

/// Build a `ServerConfig` from a profile, without CLI flag overrides.
pub fn profile_to_server_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ServerConfig, ConfigError> {
    let auth = AuthCredentials {
        username: resolve_username(profile, profile_name)?,
        passhash: resolve_passhash(profile, profile_name)?,
    };
    build_server_config(profile, defaults, auth)
}

/// Build a `ServerConfig` from a profile with already-resolved credentials.
pub fn build_server_config(
    profile: &Profile,
    defaults: &Defaults,
    auth: AuthCredentials,
) -> Result<ServerConfig, ConfigError> {
    let url = parse_server_url(&profile.server)?;

    let mut config = ServerConfig::new(url, auth);
    config.tls = profile_tls(profile, defaults.insecure);
    config.timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    config.history_average_secs = profile.history_average.unwrap_or(0);
    config.reduction = profile.reduction.unwrap_or(defaults.reduction);
    Ok(config)
}
