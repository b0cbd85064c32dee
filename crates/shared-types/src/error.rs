use serde::{Deserialize, Serialize};
use std::fmt;

/// Status used when no HTTP response was received at all.
pub const NETWORK_ERROR_STATUS: u16 = 0;

/// Message used when no HTTP response was received at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error or server unavailable";

/// Categorization of API client failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The server answered with a non-success status.
    Http,
    /// The request never produced a response.
    Network,
    /// The server answered successfully but the body did not match the schema.
    Decode,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Http => write!(f, "Http"),
            ApiErrorKind::Network => write!(f, "Network"),
            ApiErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

/// Error returned by every doctors API call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// HTTP status, or [`NETWORK_ERROR_STATUS`] for transport failures.
    pub status: u16,
    pub message: String,
}

/// Error payload shape the API uses for non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            status,
            message: message.into(),
        }
    }

    pub fn network() -> Self {
        Self {
            kind: ApiErrorKind::Network,
            status: NETWORK_ERROR_STATUS,
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn decode(status: u16, detail: impl fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            status,
            message: format!("Invalid response from server: {detail}"),
        }
    }

    /// Build an HTTP error from a non-success response body.
    ///
    /// Prefers the body's `error` field, then `message`, then `HTTP <status>`.
    /// Bodies that are not JSON fall through to the status-only message.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .error
            .filter(|m| !m.is_empty())
            .or(parsed.message.filter(|m| !m.is_empty()))
            .unwrap_or_else(|| format!("HTTP {status}"));
        Self::http(status, message)
    }

    pub fn is_network(&self) -> bool {
        self.kind == ApiErrorKind::Network
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}
