// ── Runtime server configuration ──
//
// Describes *how* to reach one PRTG server. Carries the credential data
// and request tuning, but never touches disk: the CLI builds a
// `ServerConfig` and hands it to `Monitor`.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::history::CrossSensorReduction;

/// The PRTG API user and its passhash.
#[derive(Debug, Clone)]
pub struct AuthCredentials {
    pub username: String,
    pub passhash: SecretString,
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed certs). Default for on-prem PRTG cores.
    #[default]
    DangerAcceptInvalid,
}

/// Configuration for one PRTG server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PRTG web root (e.g., `https://prtg.example.net`).
    pub url: Url,
    pub auth: AuthCredentials,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `avg` parameter of historic queries in seconds; 0 means raw samples.
    pub history_average_secs: u32,
    /// How per-sensor day maxima combine into a daily total.
    pub reduction: CrossSensorReduction,
}

impl ServerConfig {
    pub fn new(url: Url, auth: AuthCredentials) -> Self {
        Self {
            url,
            auth,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(10),
            history_average_secs: 0,
            reduction: CrossSensorReduction::default(),
        }
    }
}
