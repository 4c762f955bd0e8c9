//! Request types for the payroll core API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::RequestKind;

/// Default number of periods returned by `/periods/recent`.
pub const DEFAULT_RECENT_PERIODS: u32 = 12;

/// Upper bound on periods returned by `/periods/recent`.
pub const MAX_RECENT_PERIODS: u32 = 36;

/// Query string for `GET /periods`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodQuery {
    /// Offset in months from the current period.
    #[serde(default)]
    pub months_ago: u32,
    /// Whether the cutoff rule applies.
    #[serde(default = "default_apply_cutoff")]
    pub apply_cutoff: bool,
    /// Reference date; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Query string for `GET /periods/recent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentPeriodsQuery {
    /// Number of periods to return.
    #[serde(default = "default_recent_count")]
    pub count: u32,
    /// Whether the cutoff rule applies.
    #[serde(default = "default_apply_cutoff")]
    pub apply_cutoff: bool,
    /// Reference date; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for `POST /tenure`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenureRequest {
    /// Hire date as `YYYY-MM-DD` or an ISO timestamp.
    pub hire_date: String,
    /// Reference date; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for `POST /retry-decision`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryDecisionRequest {
    /// Failures observed before this one.
    pub attempt_count: u32,
    /// Whether the failed request was a read or a write.
    #[serde(default)]
    pub operation: RequestKind,
    /// The raw error value produced by the request layer.
    #[serde(default)]
    pub error: Value,
}

fn default_apply_cutoff() -> bool {
    true
}

fn default_recent_count() -> u32 {
    DEFAULT_RECENT_PERIODS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_query_defaults() {
        let query: PeriodQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.months_ago, 0);
        assert!(query.apply_cutoff);
        assert!(query.as_of.is_none());
    }

    #[test]
    fn test_recent_query_defaults() {
        let query: RecentPeriodsQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.count, DEFAULT_RECENT_PERIODS);
        assert!(query.apply_cutoff);
    }

    #[test]
    fn test_deserialize_retry_decision_request() {
        let json = r#"{
            "attempt_count": 1,
            "operation": "write",
            "error": { "status": 500, "message": "boom" }
        }"#;
        let request: RetryDecisionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.attempt_count, 1);
        assert_eq!(request.operation, RequestKind::Write);
        assert_eq!(request.error["status"], 500);
    }

    #[test]
    fn test_retry_decision_request_defaults_to_read() {
        let request: RetryDecisionRequest =
            serde_json::from_str(r#"{ "attempt_count": 0 }"#).unwrap();
        assert_eq!(request.operation, RequestKind::Read);
        assert!(request.error.is_null());
    }

    #[test]
    fn test_deserialize_tenure_request() {
        let json = r#"{ "hire_date": "2020-01-15", "as_of": "2025-01-15" }"#;
        let request: TenureRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.hire_date, "2020-01-15");
        assert_eq!(request.as_of, NaiveDate::from_ymd_opt(2025, 1, 15));
    }
}
