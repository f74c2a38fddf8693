use reqwest::StatusCode;
use thiserror::Error;

/// Error surface of the API client.
///
/// Non-authorization failures pass through unchanged so the caller can
/// decide how to present them; 401/403 is the only class the client
/// handles itself (via the refresh-and-retry path).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connect, timeout, or an unreadable
    /// response body.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status. `detail` carries the
    /// backend's `{"detail": ...}` message when one was present.
    #[error("{status}: {detail}")]
    Api { status: StatusCode, detail: String },

    /// A request body failed to serialize. Programmer error in practice.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The configured base URL (or a path joined onto it) is invalid.
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// True for 401/403 — the statuses that can trigger a token refresh.
    pub fn is_auth(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        )
    }
}
