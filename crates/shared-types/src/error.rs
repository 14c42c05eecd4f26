use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Message shown for any timeout or connectivity failure.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Unable to reach the cause list service. Please check your connection and try again.";

/// Categorization of client-side failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// A required field is missing or malformed; caught before any request.
    ValidationError,
    /// Timeout or connectivity loss.
    NetworkError,
    /// Non-2xx response, or a 2xx body that could not be decoded.
    ServerError,
    /// 2xx response whose payload reports `success: false`.
    ApplicationFailure,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::NetworkError => write!(f, "NetworkError"),
            AppErrorKind::ServerError => write!(f, "ServerError"),
            AppErrorKind::ApplicationFailure => write!(f, "ApplicationFailure"),
        }
    }
}

/// Structured error shared by the API client, the cascade and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// HTTP status for `ServerError`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            status: None,
            field_errors,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NetworkError,
            message: message.into(),
            status: None,
            field_errors: HashMap::new(),
        }
    }

    /// A non-2xx response. `detail` is the server's explanation, if it sent one.
    pub fn server(status: u16, detail: Option<String>) -> Self {
        Self {
            kind: AppErrorKind::ServerError,
            message: detail.unwrap_or_default(),
            status: Some(status),
            field_errors: HashMap::new(),
        }
    }

    pub fn application(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::ApplicationFailure,
            message: message.into(),
            status: None,
            field_errors: HashMap::new(),
        }
    }

    pub fn is_network(&self) -> bool {
        self.kind == AppErrorKind::NetworkError
    }

    /// The server-provided detail, when this is a `ServerError` that carried one.
    pub fn server_detail(&self) -> Option<&str> {
        match self.kind {
            AppErrorKind::ServerError if !self.message.trim().is_empty() => Some(&self.message),
            _ => None,
        }
    }

    /// Pick the user-facing message for this error.
    ///
    /// Validation and application failures are shown verbatim, network
    /// failures get a generic retry hint, and server errors show the
    /// server's detail or `fallback` when there is none.
    pub fn display_message(&self, fallback: &str) -> String {
        match self.kind {
            AppErrorKind::NetworkError => NETWORK_ERROR_MESSAGE.to_string(),
            AppErrorKind::ServerError => self
                .server_detail()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
            AppErrorKind::ValidationError | AppErrorKind::ApplicationFailure => {
                if self.message.trim().is_empty() {
                    fallback.to_string()
                } else {
                    self.message.clone()
                }
            }
        }
    }

    /// Extract the `detail` field from a FastAPI-style error body.
    ///
    /// `detail` is either a plain string or a list of `{"msg": ...}`
    /// objects (request validation errors); list messages are joined.
    pub fn parse_detail(body: &[u8]) -> Option<String> {
        let value: serde_json::Value = serde_json::from_slice(body).ok()?;
        match value.get("detail")? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({}): {}", self.kind, status, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for AppError {}
