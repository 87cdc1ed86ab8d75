//! Failure classification for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Callers never see transport types; every failure is folded into
//! `ApiError` so the store can turn it into a `false` result plus a notice.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("login response carried no token")]
    MissingToken { message: Option<String> },
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Backend-provided message suitable for showing to the user, if any.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::MissingToken { message } => message.as_deref(),
            _ => None,
        }
    }

    /// Build a `Status` error, pulling a message out of a JSON error body.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: error_body_message(body) }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "msg", alias = "detail")]
    message: Option<String>,
}

fn error_body_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
}
