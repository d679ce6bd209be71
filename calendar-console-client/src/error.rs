use serde::Serialize;
use thiserror::Error;

/// Unified error type for all calendar API operations.
///
/// Variants carry the context needed to render a useful message in the UI
/// status line or inside an open dialog. All variants are serializable for
/// structured error reporting.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.).
    #[error("Network error: {detail}")]
    Network { detail: String },

    /// The HTTP request timed out.
    #[error("Request timed out: {detail}")]
    Timeout { detail: String },

    /// The server rejected the credentials or the token has expired
    /// (HTTP 401).
    #[error("Not authenticated: {detail}")]
    Unauthorized { detail: String },

    /// The authenticated user lacks the required authority (HTTP 403).
    #[error("Access denied: {detail}")]
    Forbidden { detail: String },

    /// The requested entity does not exist (HTTP 404).
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    /// The server rejected the request body (HTTP 400), including the
    /// `idexists` rejection of a create that already carries an id.
    #[error("Validation failed: {detail}")]
    Validation { detail: String },

    /// The response body could not be decoded.
    #[error("Parse error: {detail}")]
    Parse { detail: String },

    /// The server failed to process the request (HTTP 5xx).
    #[error("Server error (HTTP {status}): {detail}")]
    Server { status: u16, detail: String },

    /// Any status the mapping above does not cover.
    #[error("Unexpected response (HTTP {status}): {detail}")]
    Unexpected { status: u16, detail: String },
}

impl ApiError {
    /// Whether the error is expected behavior (bad input, missing entity,
    /// stale session) rather than an infrastructure failure. Used for log
    /// classification: `warn` when `true`, `error` when `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. }
                | Self::Forbidden { .. }
                | Self::NotFound { .. }
                | Self::Validation { .. }
        )
    }
}

/// Result alias for calendar API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
