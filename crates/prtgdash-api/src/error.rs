use thiserror::Error;

/// Top-level error type for the `prtgdash-api` crate.
///
/// Covers every failure mode of a PRTG request: credentials, transport,
/// HTTP status, content type, and body decoding. `prtgdash-core` maps
/// these into domain errors or swallows them where the dashboard must
/// keep rendering.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The server rejected the username / passhash pair (HTTP 401).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── PRTG responses ──────────────────────────────────────────────
    /// HTTP 400 with the message PRTG embedded in the body.
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Any other non-success status.
    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    /// A 200 response whose `Content-Type` is not what the endpoint serves
    /// (e.g. an HTML login page instead of `chart.png`).
    #[error("Unexpected content type: expected {expected}, got '{got}'")]
    UnexpectedContentType { expected: &'static str, got: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the credentials were rejected.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::UnexpectedStatus { status } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if the request ran into the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
