//! HTTP request handlers for the payroll core API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    routing::{get, post},
};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    decide_retry, parse_hire_date, recent_periods, render_breakdown, resolve_period,
    tenure_breakdown,
};
use crate::models::{PayrollPeriod, RequestError};

use super::request::{
    MAX_RECENT_PERIODS, PeriodQuery, RecentPeriodsQuery, RetryDecisionRequest, TenureRequest,
};
use super::response::{ApiError, ApiErrorResponse, RetryDecisionResponse, TenureResponse};
use super::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/periods", get(period_handler))
        .route("/periods/recent", get(recent_periods_handler))
        .route("/tenure", post(tenure_handler))
        .route("/retry-decision", post(retry_decision_handler))
        .with_state(state)
}

fn today_or(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Local::now().date_naive())
}

fn query_error(correlation_id: Uuid, rejection: QueryRejection) -> ApiErrorResponse {
    let body_text = rejection.body_text();
    warn!(correlation_id = %correlation_id, error = %body_text, "Query string rejected");
    ApiErrorResponse::bad_request(ApiError::validation_error(body_text))
}

fn json_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Handler for `GET /periods`.
async fn period_handler(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> ApiResult<PayrollPeriod> {
    let correlation_id = Uuid::new_v4();
    let Query(query) = query.map_err(|r| query_error(correlation_id, r))?;
    let config = state.config();

    let period = resolve_period(
        query.months_ago,
        query.apply_cutoff,
        today_or(query.as_of),
        config.period(),
        config.locale(),
    )
    .inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Period resolution failed")
    })?;

    info!(
        correlation_id = %correlation_id,
        months_ago = query.months_ago,
        label = %period.label,
        days = period.days(),
        "Resolved payroll period"
    );
    Ok(Json(period))
}

/// Handler for `GET /periods/recent`.
async fn recent_periods_handler(
    State(state): State<AppState>,
    query: Result<Query<RecentPeriodsQuery>, QueryRejection>,
) -> ApiResult<Vec<PayrollPeriod>> {
    let correlation_id = Uuid::new_v4();
    let Query(query) = query.map_err(|r| query_error(correlation_id, r))?;

    if query.count == 0 || query.count > MAX_RECENT_PERIODS {
        warn!(correlation_id = %correlation_id, count = query.count, "Period count out of range");
        return Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            format!("count must be between 1 and {}", MAX_RECENT_PERIODS),
        )));
    }

    let config = state.config();
    let periods = recent_periods(
        query.count,
        query.apply_cutoff,
        today_or(query.as_of),
        config.period(),
        config.locale(),
    )?;

    info!(correlation_id = %correlation_id, count = periods.len(), "Resolved recent periods");
    Ok(Json(periods))
}

/// Handler for `POST /tenure`.
async fn tenure_handler(
    State(state): State<AppState>,
    payload: Result<Json<TenureRequest>, JsonRejection>,
) -> ApiResult<TenureResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| json_error(correlation_id, r))?;

    let as_of = today_or(request.as_of);
    let result = parse_hire_date(&request.hire_date).and_then(|hire_date| {
        tenure_breakdown(hire_date, as_of).map(|breakdown| (hire_date, breakdown))
    });
    let (hire_date, breakdown) = result.inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Tenure calculation failed")
    })?;

    let label = render_breakdown(&breakdown, state.config().locale());
    info!(correlation_id = %correlation_id, %hire_date, %as_of, "Formatted tenure");

    Ok(Json(TenureResponse {
        hire_date,
        as_of,
        label,
        breakdown,
    }))
}

/// Handler for `POST /retry-decision`.
async fn retry_decision_handler(
    State(state): State<AppState>,
    payload: Result<Json<RetryDecisionRequest>, JsonRejection>,
) -> ApiResult<RetryDecisionResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| json_error(correlation_id, r))?;

    let classification = RequestError::from_json(&request.error);
    let decision = decide_retry(
        request.operation,
        request.attempt_count,
        &classification,
        state.config().retry(),
    );

    info!(
        correlation_id = %correlation_id,
        operation = %request.operation,
        attempt_count = request.attempt_count,
        %decision,
        "Classified failed request"
    );

    Ok(Json(RetryDecisionResponse {
        retry: decision.should_retry(),
        decision,
        classification,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = create_router(AppState::default())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_period_defaults_apply_cutoff() {
        let (status, body) = get_json("/periods?as_of=2025-01-10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["startDate"], "2024-12-01");
        assert_eq!(body["endDate"], "2024-12-31");
        assert_eq!(body["label"], "diciembre 2024");
    }

    #[tokio::test]
    async fn test_period_rejects_negative_offset() {
        let (status, body) = get_json("/periods?months_ago=-1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_recent_periods_rejects_zero_count() {
        let (status, body) = get_json("/periods/recent?count=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[test]
    fn test_today_or_prefers_explicit_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 5).unwrap();
        assert_eq!(today_or(Some(date)), date);
    }
}
