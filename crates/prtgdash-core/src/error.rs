// ── Core error types ──
//
// User-facing errors from prtgdash-core. Consumers never see reqwest
// errors or JSON parse failures directly; `From<prtgdash_api::Error>`
// translates transport-layer errors into domain variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to PRTG at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Sensor not found: {identifier}")]
    SensorNotFound { identifier: String },

    #[error("Unexpected response: {message}")]
    UnexpectedResponse { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Fill in the configured timeout, which the transport error lacks.
    pub(crate) fn with_timeout(self, timeout_secs: u64) -> Self {
        match self {
            Self::Timeout { .. } => Self::Timeout { timeout_secs },
            other => other,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<prtgdash_api::Error> for CoreError {
    fn from(err: prtgdash_api::Error) -> Self {
        match err {
            prtgdash_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            prtgdash_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| format!("{}://{}", u.scheme(), u.host_str().unwrap_or("")))
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            prtgdash_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            prtgdash_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            prtgdash_api::Error::BadRequest { message } => CoreError::Api {
                message,
                status: Some(400),
            },
            prtgdash_api::Error::UnexpectedStatus { status } => CoreError::Api {
                message: format!("server answered HTTP {status}"),
                status: Some(status),
            },
            prtgdash_api::Error::UnexpectedContentType { expected, got } => {
                CoreError::UnexpectedResponse {
                    message: format!("expected {expected}, got '{got}'"),
                }
            }
            prtgdash_api::Error::Deserialization { message, body: _ } => {
                CoreError::UnexpectedResponse {
                    message: format!("Deserialization error: {message}"),
                }
            }
        }
    }
}
