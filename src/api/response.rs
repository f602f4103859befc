//! Response types for the Child Care Subsidy API.
//!
//! This module defines the calculation and reference-data response bodies,
//! the error response structure and the mapping from engine errors to HTTP
//! status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{CcsConfig, RateTable};
use crate::error::EngineError;
use crate::models::{ActivityLevel, CalculationResult, CareType, format_whole_dollars};

/// Response body for a successful subsidy calculation.
///
/// Monetary fields are plain JSON numbers in AUD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CcsCalculationResponse {
    /// Subsidy percentage applied.
    #[serde(with = "rust_decimal::serde::float")]
    pub subsidy_percentage: Decimal,
    /// Subsidy per hour.
    #[serde(with = "rust_decimal::serde::float")]
    pub subsidy_per_hour: Decimal,
    /// Subsidy per week.
    #[serde(with = "rust_decimal::serde::float")]
    pub subsidy_per_week: Decimal,
    /// Subsidy per fortnight.
    #[serde(with = "rust_decimal::serde::float")]
    pub subsidy_per_fortnight: Decimal,
    /// Subsidy per year.
    #[serde(with = "rust_decimal::serde::float")]
    pub subsidy_per_year: Decimal,
    /// Gap fee per hour.
    #[serde(with = "rust_decimal::serde::float")]
    pub out_of_pocket_per_hour: Decimal,
    /// Gap fee per week.
    #[serde(with = "rust_decimal::serde::float")]
    pub out_of_pocket_per_week: Decimal,
    /// Gap fee per fortnight.
    #[serde(with = "rust_decimal::serde::float")]
    pub out_of_pocket_per_fortnight: Decimal,
    /// Gap fee per year.
    #[serde(with = "rust_decimal::serde::float")]
    pub out_of_pocket_per_year: Decimal,
    /// Unsubsidised cost per week.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_cost_per_week: Decimal,
    /// Subsidised hours per fortnight.
    pub subsidised_hours_per_fortnight: u32,
    /// Hourly cap for the care type.
    #[serde(with = "rust_decimal::serde::float")]
    pub hourly_cap: Decimal,
    /// Whether income exceeds the upper threshold.
    pub is_above_income_threshold: bool,
    /// Human-readable eligibility outcome.
    pub eligibility_message: String,
}

impl From<CalculationResult> for CcsCalculationResponse {
    fn from(result: CalculationResult) -> Self {
        Self {
            subsidy_percentage: result.subsidy_percentage,
            subsidy_per_hour: result.subsidy_per_hour.amount,
            subsidy_per_week: result.subsidy_per_week.amount,
            subsidy_per_fortnight: result.subsidy_per_fortnight.amount,
            subsidy_per_year: result.subsidy_per_year.amount,
            out_of_pocket_per_hour: result.out_of_pocket_per_hour.amount,
            out_of_pocket_per_week: result.out_of_pocket_per_week.amount,
            out_of_pocket_per_fortnight: result.out_of_pocket_per_fortnight.amount,
            out_of_pocket_per_year: result.out_of_pocket_per_year.amount,
            total_cost_per_week: result.total_cost_per_week.amount,
            subsidised_hours_per_fortnight: result.subsidised_hours_per_fortnight,
            hourly_cap: result.hourly_cap,
            is_above_income_threshold: result.is_above_income_threshold,
            eligibility_message: result.eligibility_message,
        }
    }
}

/// Response body for `GET /api/calculators/child-care-subsidy/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CcsInfoResponse {
    /// The financial year the rates apply to.
    pub financial_year: String,
    /// Income thresholds and taper.
    pub income_thresholds: IncomeThresholdsInfo,
    /// Hourly caps by care type.
    pub hourly_caps: HourlyCapsInfo,
    /// The activity level catalogue.
    pub activity_levels: Vec<ActivityLevelInfo>,
    /// The care type catalogue.
    pub child_care_types: Vec<CareTypeInfo>,
}

/// Income thresholds in the reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeThresholdsInfo {
    /// Income at or below which the maximum percentage applies.
    #[serde(with = "rust_decimal::serde::float")]
    pub lower_threshold: Decimal,
    /// Income above which no subsidy is available.
    #[serde(with = "rust_decimal::serde::float")]
    pub upper_threshold: Decimal,
    /// The maximum subsidy percentage.
    #[serde(with = "rust_decimal::serde::float")]
    pub max_subsidy_percentage: Decimal,
    /// Plain-English description of the taper.
    pub description: String,
}

/// Hourly caps in the reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyCapsInfo {
    /// Cap for long day care.
    #[serde(with = "rust_decimal::serde::float")]
    pub long_day_care: Decimal,
    /// Cap for family day care.
    #[serde(with = "rust_decimal::serde::float")]
    pub family_day_care: Decimal,
    /// Cap for outside school hours care.
    #[serde(with = "rust_decimal::serde::float")]
    pub outside_school_hours_care: Decimal,
    /// Cap for in home care.
    #[serde(with = "rust_decimal::serde::float")]
    pub in_home_care: Decimal,
    /// Cap for occasional care.
    #[serde(with = "rust_decimal::serde::float")]
    pub occasional_care: Decimal,
}

/// One activity level in the reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLevelInfo {
    /// The activity level code.
    pub level: i32,
    /// Display name.
    pub name: String,
    /// Subsidised hours per fortnight.
    pub subsidised_hours: u32,
}

/// One care type in the reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareTypeInfo {
    /// The care type code.
    pub id: i32,
    /// Display name.
    pub name: String,
}

impl CcsInfoResponse {
    /// Builds the reference data for a scheme configuration.
    pub fn from_config(config: &CcsConfig) -> Self {
        let rates: &RateTable = config.rates();
        let thresholds = &rates.income_thresholds;
        let caps = &rates.hourly_caps;

        Self {
            financial_year: config.scheme().financial_year.clone(),
            income_thresholds: IncomeThresholdsInfo {
                lower_threshold: thresholds.lower,
                upper_threshold: thresholds.upper,
                max_subsidy_percentage: thresholds.max_subsidy_percentage,
                description: format!(
                    "Subsidy tapers down by 1% for every ${} over ${}",
                    format_whole_dollars(thresholds.taper_step),
                    format_whole_dollars(thresholds.lower)
                ),
            },
            hourly_caps: HourlyCapsInfo {
                long_day_care: caps.long_day_care,
                family_day_care: caps.family_day_care,
                outside_school_hours_care: caps.outside_school_hours_care,
                in_home_care: caps.in_home_care,
                occasional_care: caps.occasional_care,
            },
            activity_levels: ActivityLevel::ALL
                .into_iter()
                .map(|level| ActivityLevelInfo {
                    level: level.code(),
                    name: level.name().to_string(),
                    subsidised_hours: rates.subsidised_hours(level),
                })
                .collect(),
            child_care_types: CareType::ALL
                .into_iter()
                .map(|care_type| CareTypeInfo {
                    id: care_type.code(),
                    name: care_type.name().to_string(),
                })
                .collect(),
        }
    }
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
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            err @ EngineError::AmountOverflow { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("AMOUNT_OUT_OF_RANGE", err.to_string()),
            },
            err @ (EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. }) => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Rate table unavailable",
                        err.to_string(),
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::str::FromStr;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let api_error: ApiErrorResponse =
            EngineError::invalid_input("Hourly rate must be greater than zero").into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert_eq!(api_error.error.message, "Hourly rate must be greater than zero");
    }

    #[test]
    fn test_amount_overflow_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::AmountOverflow {
            figure: "subsidy per year".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "AMOUNT_OUT_OF_RANGE");
        assert_eq!(api_error.error.message, "Amount too large to calculate: subsidy per year");
    }

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "rates.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
        assert_eq!(
            api_error.error.details.as_deref(),
            Some("Rate table file missing: rates.yaml")
        );
    }

    #[test]
    fn test_calculation_response_uses_numbers() {
        let mut result = CalculationResult::ineligible("message");
        result.subsidy_per_hour = Money::aud(Decimal::from_str("12.36").unwrap());
        result.subsidy_percentage = Decimal::from(90);

        let json = serde_json::to_value(CcsCalculationResponse::from(result)).unwrap();

        assert_eq!(json["subsidyPerHour"], serde_json::json!(12.36));
        assert_eq!(json["subsidyPercentage"], serde_json::json!(90.0));
        assert_eq!(json["eligibilityMessage"], "message");
        assert_eq!(json["isAboveIncomeThreshold"], false);
    }

    #[test]
    fn test_info_response_from_builtin_config() {
        let info = CcsInfoResponse::from_config(&CcsConfig::default());

        assert_eq!(info.financial_year, "2024-25");
        assert_eq!(
            info.income_thresholds.description,
            "Subsidy tapers down by 1% for every $5,000 over $80,000"
        );
        assert_eq!(info.activity_levels.len(), 3);
        assert_eq!(info.activity_levels[2].subsidised_hours, 100);
        assert_eq!(info.child_care_types.len(), 5);
        assert_eq!(info.child_care_types[3].name, "In Home Care");
        assert_eq!(info.hourly_caps.in_home_care, Decimal::from_str("36.24").unwrap());
    }
}
