use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Generic message used when a failed response carries no `error` field.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// The remote API answered with a non-success status, or could not be reached.
    RemoteRequestFailed,
    /// Rejected on the client before any request was made.
    ValidationError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::RemoteRequestFailed => write!(f, "RemoteRequestFailed"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
        }
    }
}

/// Structured error shared by the API client and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// HTTP status of the failed response, if one was received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Error body shape returned by the remote API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl AppError {
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::RemoteRequestFailed,
            message: message.into(),
            status: Some(status),
            field_errors: HashMap::new(),
        }
    }

    /// A request that never produced an HTTP status (connection refused,
    /// CORS rejection, undecodable body).
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::RemoteRequestFailed,
            message: message.into(),
            status: None,
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            status: None,
            field_errors,
        }
    }

    /// Build a `RemoteRequestFailed` error from a failed response body.
    ///
    /// Uses the body's `error` field verbatim when present and non-empty,
    /// otherwise `fallback`.
    pub fn from_error_body(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Self::remote(status, message)
    }

    pub fn is_validation(&self) -> bool {
        self.kind == AppErrorKind::ValidationError
    }

    /// The message to show inline, falling back to a generic one if empty.
    pub fn friendly_message(&self) -> String {
        if self.message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
