//! HTTP API module for the payroll core.
//!
//! This module exposes the period resolver, tenure formatter and retry
//! classifier as JSON endpoints for presentation code.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DEFAULT_RECENT_PERIODS, MAX_RECENT_PERIODS, PeriodQuery, RecentPeriodsQuery,
    RetryDecisionRequest, TenureRequest,
};
pub use response::{ApiError, ApiErrorResponse, RetryDecisionResponse, TenureResponse};
pub use state::AppState;
