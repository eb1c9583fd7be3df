use thiserror::Error;

/// Top-level error type for the `nsxt-api` crate.
///
/// Covers every failure mode of a manager API call: authentication,
/// transport, structured API errors and response decoding.
/// `nsxt-provider` maps these into adapter-level errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Credentials rejected by the manager (HTTP 401/403).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Manager API ─────────────────────────────────────────────────
    /// Structured error from the manager API.
    ///
    /// `error_code` is the NSX-specific numeric code when the body carries one.
    #[error("NSX API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        error_code: Option<i64>,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Extract the NSX error code, if available.
    pub fn api_error_code(&self) -> Option<i64> {
        match self {
            Self::Api { error_code, .. } => *error_code,
            _ => None,
        }
    }
}
