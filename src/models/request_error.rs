//! Request-layer error shapes fed to the retry classifier.
//!
//! The request layer decides at its error-construction boundary whether a
//! failure is a classified API error (numeric status plus message) or
//! anything else. The classifier only ever sees the resulting
//! [`RequestError`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A failed request as seen by the retry classifier.
///
/// # Example
///
/// ```
/// use payroll_core::models::RequestError;
/// use serde_json::json;
///
/// let error = RequestError::from_json(&json!({ "status": 404, "message": "not found" }));
/// assert_eq!(error, RequestError::api(404, "not found"));
///
/// let error = RequestError::from_json(&json!("network down"));
/// assert_eq!(error.status(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestError {
    /// Transport failure, parse failure, or any error without a status.
    #[error("{message}")]
    Unclassified {
        /// Description of the failure.
        message: String,
    },

    /// An error response from the API carrying a status code.
    #[error("HTTP {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message returned by the API.
        message: String,
    },
}

impl RequestError {
    /// Creates a classified API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        RequestError::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates an unclassified error.
    pub fn unclassified(message: impl Into<String>) -> Self {
        RequestError::Unclassified {
            message: message.into(),
        }
    }

    /// Builds an error from optional parts.
    ///
    /// Only a status together with a message makes a classified API
    /// error; any other combination is unclassified.
    pub fn from_parts(status: Option<u16>, message: Option<String>) -> Self {
        match (status, message) {
            (Some(status), Some(message)) => RequestError::Api { status, message },
            (Some(status), None) => {
                RequestError::unclassified(format!("request failed with status {}", status))
            }
            (None, Some(message)) => RequestError::Unclassified { message },
            (None, None) => RequestError::unclassified("request failed"),
        }
    }

    /// Classifies an arbitrary JSON error value.
    ///
    /// A JSON object with a whole-number `status` in the u16 range (`404`
    /// or `404.0`) and a string `message` is an API error. Everything else
    /// is unclassified.
    pub fn from_json(value: &Value) -> Self {
        let status = value.get("status").and_then(status_code);
        let message = value.get("message").and_then(Value::as_str);

        match (status, message) {
            (Some(status), Some(message)) => RequestError::api(status, message),
            (_, Some(message)) => RequestError::unclassified(message),
            (_, None) => match value {
                Value::String(text) => RequestError::unclassified(text.clone()),
                other => RequestError::unclassified(other.to_string()),
            },
        }
    }

    /// Returns the status code for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Api { status, .. } => Some(*status),
            RequestError::Unclassified { .. } => None,
        }
    }

    /// Returns true for API errors with a 4xx status.
    pub fn is_client_error(&self) -> bool {
        matches!(self, RequestError::Api { status, .. } if (400..500).contains(status))
    }
}

fn status_code(value: &Value) -> Option<u16> {
    if let Some(status) = value.as_u64() {
        return u16::try_from(status).ok();
    }
    value
        .as_f64()
        .filter(|s| s.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(s))
        .map(|s| s as u16)
}

/// Whether a request reads or mutates server state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// A query with no side effects.
    #[default]
    Read,
    /// A mutation. Never retried automatically.
    Write,
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestKind::Read => write!(f, "read"),
            RequestKind::Write => write!(f, "write"),
        }
    }
}
