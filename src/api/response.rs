//! Response types for the payroll core API.
//!
//! This module defines the success payloads, the error response structure,
//! and the mapping from [`CoreError`] to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::RetryDecision;
use crate::error::CoreError;
use crate::models::{RequestError, TenureBreakdown};

/// Response body for `POST /tenure`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenureResponse {
    /// The parsed hire date.
    pub hire_date: NaiveDate,
    /// The reference date the tenure was measured against.
    pub as_of: NaiveDate,
    /// Display string.
    pub label: String,
    /// Unit breakdown behind the label.
    pub breakdown: TenureBreakdown,
}

/// Response body for `POST /retry-decision`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryDecisionResponse {
    /// Whether the request should be re-issued.
    pub retry: bool,
    /// The reason behind the answer.
    pub decision: RetryDecision,
    /// How the raw error was classified.
    pub classification: RequestError,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying the given error.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<CoreError> for ApiErrorResponse {
    fn from(error: CoreError) -> Self {
        let message = error.to_string();
        match error {
            CoreError::ConfigNotFound { .. }
            | CoreError::ConfigParseError { .. }
            | CoreError::InvalidPolicy { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            CoreError::InvalidDate { .. } => ApiErrorResponse::bad_request(ApiError::with_details(
                "INVALID_DATE",
                message,
                "Dates must be YYYY-MM-DD or an ISO 8601 timestamp",
            )),
            CoreError::HireDateInFuture { .. } => ApiErrorResponse::bad_request(
                ApiError::new("HIRE_DATE_IN_FUTURE", message),
            ),
            CoreError::PeriodOutOfRange { .. } => ApiErrorResponse::bad_request(
                ApiError::new("PERIOD_OUT_OF_RANGE", message),
            ),
        }
    }
}
