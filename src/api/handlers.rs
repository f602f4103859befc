//! HTTP request handlers for the Child Care Subsidy API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{ActivityLevel, CalculationInput};

use super::request::CcsCalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CcsCalculationResponse, CcsInfoResponse};
use super::state::AppState;

/// Path of the subsidy calculation endpoint.
pub const CALCULATE_PATH: &str = "/api/calculators/child-care-subsidy";

/// Path of the reference data endpoint.
pub const INFO_PATH: &str = "/api/calculators/child-care-subsidy/info";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(CALCULATE_PATH, post(calculate_handler))
        .route(INFO_PATH, get(info_handler))
        .with_state(state)
}

/// Handler for `POST /api/calculators/child-care-subsidy`.
///
/// Accepts a calculation request and returns the subsidy estimate.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CcsCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        income = %request.annual_family_income,
        "Calculating CCS"
    );

    if !ActivityLevel::is_known_code(request.activity_level) {
        warn!(
            correlation_id = %correlation_id,
            activity_level = request.activity_level,
            "Unrecognised activity level, using lowest level"
        );
    }

    let start_time = Instant::now();
    let outcome = CalculationInput::try_from(request)
        .and_then(|input| state.calculator().calculate(&input));

    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                subsidy_percentage = %result.subsidy_percentage,
                subsidy_per_week = %result.subsidy_per_week,
                eligible = result.is_eligible(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CcsCalculationResponse::from(result)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid input for CCS calculation"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for `GET /api/calculators/child-care-subsidy/info`.
///
/// Returns the rate table, thresholds and catalogues for display.
async fn info_handler(State(state): State<AppState>) -> Json<CcsInfoResponse> {
    Json(CcsInfoResponse::from_config(state.config()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_valid_request() -> CcsCalculationRequest {
        CcsCalculationRequest {
            annual_family_income: Decimal::from(100_000),
            child_care_type: 1,
            hourly_rate: Decimal::from(12),
            hours_per_week: 40,
            number_of_children: 1,
            activity_level: 3,
            is_working_or_studying: true,
        }
    }

    async fn post_json(body: String) -> (StatusCode, serde_json::Value) {
        let router = create_router(AppState::default());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(CALCULATE_PATH)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let (status, json) = post_json(body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["subsidyPercentage"].as_f64(), Some(86.0));
        assert_eq!(json["subsidyPerWeek"].as_f64(), Some(412.8));
        assert_eq!(json["eligibilityMessage"], "You are eligible for Child Care Subsidy.");
    }

    #[tokio::test]
    async fn test_invalid_input_returns_400() {
        let mut request = create_valid_request();
        request.number_of_children = 0;
        let body = serde_json::to_string(&request).unwrap();

        let (status, json) = post_json(body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Number of children must be at least 1");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, json) = post_json("{ not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let (status, json) = post_json(r#"{"annualFamilyIncome": 1000}"#.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains("missing field"));
    }

    #[tokio::test]
    async fn test_info_endpoint_returns_rate_table() {
        let router = create_router(AppState::default());
        let response = router
            .oneshot(Request::builder().uri(INFO_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["financialYear"], "2024-25");
        assert_eq!(json["hourlyCaps"]["longDayCare"].as_f64(), Some(13.73));
    }
}
