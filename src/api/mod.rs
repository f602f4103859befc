//! HTTP API module for the Child Care Subsidy engine.
//!
//! This module provides the REST endpoints for estimating a family's
//! subsidy and for reading the current rate table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{CALCULATE_PATH, INFO_PATH, create_router};
pub use request::{
    CcsCalculationRequest, HOURLY_RATE_OUT_OF_RANGE_MESSAGE, INVALID_CARE_TYPE_MESSAGE,
    MAX_CHILDREN, MAX_HOURLY_RATE, MIN_HOURLY_RATE, TOO_MANY_CHILDREN_MESSAGE,
};
pub use response::{
    ActivityLevelInfo, ApiError, ApiErrorResponse, CareTypeInfo, CcsCalculationResponse,
    CcsInfoResponse, HourlyCapsInfo, IncomeThresholdsInfo,
};
pub use state::AppState;
