//! Retry classification for failed requests.
//!
//! The request layer calls into this module after every failed attempt.
//! Decisions are pure functions of their inputs: no counters are kept here,
//! so the same failure always yields the same answer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RetryPolicy;
use crate::models::{RequestError, RequestKind};

/// The outcome of classifying a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryDecision {
    /// Re-issue the request.
    Retry,
    /// The API rejected the request with a 4xx status.
    ClientError,
    /// The retry budget is used up.
    BudgetExhausted,
    /// Mutations are never retried automatically.
    WriteOperation,
}

impl RetryDecision {
    /// Returns true if the request should be re-issued.
    pub fn should_retry(self) -> bool {
        self == RetryDecision::Retry
    }

    /// Returns the wire name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            RetryDecision::Retry => "retry",
            RetryDecision::ClientError => "client_error",
            RetryDecision::BudgetExhausted => "budget_exhausted",
            RetryDecision::WriteOperation => "write_operation",
        }
    }
}

impl std::fmt::Display for RetryDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a failed attempt.
///
/// # Arguments
///
/// * `kind` - Whether the failed request was a read or a write
/// * `attempt_count` - Failures observed before this one (0 on the first failure)
/// * `error` - The failure as built by the request layer
/// * `policy` - The retry budget
///
/// # Example
///
/// ```
/// use payroll_core::calculation::{decide_retry, RetryDecision};
/// use payroll_core::config::RetryPolicy;
/// use payroll_core::models::{RequestError, RequestKind};
///
/// let policy = RetryPolicy::default();
/// let server_error = RequestError::api(503, "unavailable");
///
/// assert_eq!(decide_retry(RequestKind::Read, 0, &server_error, policy), RetryDecision::Retry);
/// assert_eq!(decide_retry(RequestKind::Read, 3, &server_error, policy), RetryDecision::BudgetExhausted);
/// assert_eq!(decide_retry(RequestKind::Write, 0, &server_error, policy), RetryDecision::WriteOperation);
/// ```
pub fn decide_retry(
    kind: RequestKind,
    attempt_count: u32,
    error: &RequestError,
    policy: RetryPolicy,
) -> RetryDecision {
    let decision = if kind == RequestKind::Write {
        RetryDecision::WriteOperation
    } else if error.is_client_error() {
        RetryDecision::ClientError
    } else if attempt_count < policy.max_retries {
        RetryDecision::Retry
    } else {
        RetryDecision::BudgetExhausted
    };

    debug!(
        %kind,
        attempt_count,
        status = ?error.status(),
        %decision,
        "Classified failed request"
    );

    decision
}

/// Decides whether a failed read should be retried under the default
/// budget of three retries.
///
/// # Example
///
/// ```
/// use payroll_core::calculation::should_retry;
/// use payroll_core::models::RequestError;
///
/// assert!(!should_retry(0, &RequestError::api(404, "x")));
/// assert!(should_retry(0, &RequestError::api(500, "x")));
/// assert!(!should_retry(3, &RequestError::api(500, "x")));
/// assert!(should_retry(1, &RequestError::unclassified("network down")));
/// ```
pub fn should_retry(attempt_count: u32, error: &RequestError) -> bool {
    decide_retry(RequestKind::Read, attempt_count, error, RetryPolicy::default()).should_retry()
}

/// Lifecycle of one logical request.
///
/// Transitions not listed on a method leave the state unchanged.
///
/// # Example
///
/// ```
/// use payroll_core::calculation::{RetryDecision, RetryState};
/// use payroll_core::config::RetryPolicy;
/// use payroll_core::models::{RequestError, RequestKind};
///
/// let policy = RetryPolicy::default();
/// let error = RequestError::api(404, "not found");
///
/// let state = RetryState::Idle
///     .begin()
///     .fail(RequestKind::Read, &error, policy);
///
/// assert_eq!(
///     state,
///     RetryState::GivenUp { attempts: 1, reason: RetryDecision::ClientError }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RetryState {
    /// Nothing issued yet.
    Idle,
    /// A request is in flight.
    Attempting {
        /// Failures observed before this attempt.
        failures: u32,
    },
    /// The request failed and will be re-issued.
    RetryScheduled {
        /// Failures observed so far.
        failures: u32,
    },
    /// The request succeeded.
    Succeeded {
        /// Attempts made, including the successful one.
        attempts: u32,
    },
    /// The request failed for good and the error is surfaced to the caller.
    GivenUp {
        /// Attempts made.
        attempts: u32,
        /// Why no further retry was made.
        reason: RetryDecision,
    },
}

impl RetryState {
    /// Issues the request: `Idle` or `RetryScheduled` become `Attempting`.
    pub fn begin(self) -> Self {
        match self {
            RetryState::Idle => RetryState::Attempting { failures: 0 },
            RetryState::RetryScheduled { failures } => RetryState::Attempting { failures },
            other => other,
        }
    }

    /// Records a success: `Attempting` becomes `Succeeded`.
    pub fn succeed(self) -> Self {
        match self {
            RetryState::Attempting { failures } => RetryState::Succeeded {
                attempts: failures + 1,
            },
            other => other,
        }
    }

    /// Records a failure: `Attempting` becomes `RetryScheduled` or `GivenUp`.
    pub fn fail(self, kind: RequestKind, error: &RequestError, policy: RetryPolicy) -> Self {
        match self {
            RetryState::Attempting { failures } => {
                match decide_retry(kind, failures, error, policy) {
                    RetryDecision::Retry => RetryState::RetryScheduled {
                        failures: failures + 1,
                    },
                    reason => RetryState::GivenUp {
                        attempts: failures + 1,
                        reason,
                    },
                }
            }
            other => other,
        }
    }

    /// Returns true for `Succeeded` and `GivenUp`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RetryState::Succeeded { .. } | RetryState::GivenUp { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_display_matches_serialized_name() {
        for decision in [
            RetryDecision::Retry,
            RetryDecision::ClientError,
            RetryDecision::BudgetExhausted,
            RetryDecision::WriteOperation,
        ] {
            let json = serde_json::to_string(&decision).unwrap();
            assert_eq!(json, format!("\"{}\"", decision));
        }
    }

    #[test]
    fn test_not_found_is_never_retried() {
        assert!(!should_retry(0, &RequestError::api(404, "x")));
    }

    #[test]
    fn test_server_error_retried_under_budget() {
        assert!(should_retry(0, &RequestError::api(500, "x")));
        assert!(should_retry(2, &RequestError::api(500, "x")));
    }

    #[test]
    fn test_server_error_stops_at_budget() {
        assert!(!should_retry(3, &RequestError::api(500, "x")));
    }

    #[test]
    fn test_unclassified_error_is_retried() {
        assert!(should_retry(1, &RequestError::unclassified("network down")));
        assert!(!should_retry(3, &RequestError::unclassified("network down")));
    }

    #[test]
    fn test_status_boundaries() {
        assert!(should_retry(0, &RequestError::api(399, "x")));
        assert!(!should_retry(0, &RequestError::api(400, "x")));
        assert!(!should_retry(0, &RequestError::api(499, "x")));
        assert!(should_retry(0, &RequestError::api(500, "x")));
    }

    #[test]
    fn test_writes_are_never_retried() {
        let policy = RetryPolicy::default();
        for error in [
            RequestError::api(503, "x"),
            RequestError::api(404, "x"),
            RequestError::unclassified("x"),
        ] {
            assert_eq!(
                decide_retry(RequestKind::Write, 0, &error, policy),
                RetryDecision::WriteOperation
            );
        }
    }

    #[test]
    fn test_custom_budget() {
        let policy = RetryPolicy { max_retries: 5 };
        let error = RequestError::api(502, "x");
        assert!(decide_retry(RequestKind::Read, 4, &error, policy).should_retry());
        assert!(!decide_retry(RequestKind::Read, 5, &error, policy).should_retry());

        let no_retries = RetryPolicy { max_retries: 0 };
        assert_eq!(
            decide_retry(RequestKind::Read, 0, &error, no_retries),
            RetryDecision::BudgetExhausted
        );
    }

    #[test]
    fn test_lifecycle_success_after_retries() {
        let policy = RetryPolicy::default();
        let error = RequestError::unclassified("timeout");

        let state = RetryState::Idle
            .begin()
            .fail(RequestKind::Read, &error, policy)
            .begin()
            .fail(RequestKind::Read, &error, policy)
            .begin()
            .succeed();

        assert_eq!(state, RetryState::Succeeded { attempts: 3 });
        assert!(state.is_terminal());
    }

    #[test]
    fn test_lifecycle_gives_up_after_four_attempts() {
        let policy = RetryPolicy::default();
        let error = RequestError::api(500, "boom");
        let mut state = RetryState::Idle;
        let mut attempts = 0;

        while !state.is_terminal() {
            state = state.begin();
            attempts += 1;
            state = state.fail(RequestKind::Read, &error, policy);
        }

        assert_eq!(attempts, 4);
        assert_eq!(
            state,
            RetryState::GivenUp {
                attempts: 4,
                reason: RetryDecision::BudgetExhausted
            }
        );
    }

    #[test]
    fn test_lifecycle_write_gives_up_immediately() {
        let state = RetryState::Idle.begin().fail(
            RequestKind::Write,
            &RequestError::unclassified("reset"),
            RetryPolicy::default(),
        );
        assert_eq!(
            state,
            RetryState::GivenUp {
                attempts: 1,
                reason: RetryDecision::WriteOperation
            }
        );
    }

    #[test]
    fn test_invalid_transitions_leave_state_unchanged() {
        let error = RequestError::unclassified("x");
        let policy = RetryPolicy::default();

        assert_eq!(RetryState::Idle.succeed(), RetryState::Idle);
        assert_eq!(
            RetryState::Idle.fail(RequestKind::Read, &error, policy),
            RetryState::Idle
        );
        let done = RetryState::Succeeded { attempts: 1 };
        assert_eq!(done.begin(), done);
    }

    proptest! {
        #[test]
        fn prop_client_errors_never_retry(status in 400u16..500, attempt in 0u32..10) {
            prop_assert!(!should_retry(attempt, &RequestError::api(status, "x")));
        }

        #[test]
        fn prop_other_statuses_follow_budget(status in prop_oneof![100u16..400, 500u16..600], attempt in 0u32..10) {
            prop_assert_eq!(should_retry(attempt, &RequestError::api(status, "x")), attempt < 3);
        }

        #[test]
        fn prop_decision_is_idempotent(status in 100u16..600, attempt in 0u32..10) {
            let error = RequestError::api(status, "x");
            prop_assert_eq!(should_retry(attempt, &error), should_retry(attempt, &error));
        }
    }
}
