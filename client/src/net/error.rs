//! Error taxonomy for backend calls.
//!
//! Views never propagate these further; each converts them into local text
//! state. `user_message` picks the backend-provided detail when one exists.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a single backend round trip.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// A 404, or a success body carrying no record.
    #[error("not found")]
    NotFound,
    /// The body did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// Server-side render pass; only the browser talks to the backend.
    #[error("backend calls are only available in the browser")]
    Unavailable,
}

impl ApiError {
    /// Build an error from a non-success status and its raw body text.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 404 {
            return Self::NotFound;
        }
        Self::Status {
            status,
            detail: error_detail(body),
        }
    }

    /// Backend `detail` text if present, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Extract `detail` from an error body.
///
/// Accepts a plain string detail or a list of validation entries with `msg`
/// fields, which are joined with `"; "`.
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_owned())
        }
        serde_json::Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
