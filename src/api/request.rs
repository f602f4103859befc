//! Request types for the Child Care Subsidy API.
//!
//! This module defines the JSON request structure for the subsidy
//! calculation endpoint and its conversion into a [`CalculationInput`].
//!
//! The conversion applies the API's range limits. Zero and negative rates or
//! child counts pass through so the engine reports them with its own messages.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ActivityLevel, CalculationInput, CareType};

/// Rejection reason for an unknown care type code.
pub const INVALID_CARE_TYPE_MESSAGE: &str = "Invalid child care type";

/// Rejection reason for a positive hourly rate outside the accepted range.
pub const HOURLY_RATE_OUT_OF_RANGE_MESSAGE: &str = "Hourly rate must be between $0.01 and $1000";

/// Rejection reason for more children than the API accepts.
pub const TOO_MANY_CHILDREN_MESSAGE: &str = "Number of children must be between 1 and 20";

/// Smallest hourly rate the API accepts, in dollars.
pub const MIN_HOURLY_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest hourly rate the API accepts, in dollars.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Most children one request may cover.
pub const MAX_CHILDREN: i32 = 20;

/// Request body for `POST /api/calculators/child-care-subsidy`.
///
/// Care type and activity level are sent as integer codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CcsCalculationRequest {
    /// Combined annual family income.
    pub annual_family_income: Decimal,
    /// Care type code (1-5).
    pub child_care_type: i32,
    /// Hourly fee charged by the provider.
    pub hourly_rate: Decimal,
    /// Hours of care per week.
    pub hours_per_week: i32,
    /// Number of children in care.
    pub number_of_children: i32,
    /// Activity level code (1-3). Unknown codes are treated as 1.
    pub activity_level: i32,
    /// Whether the activity test is met.
    pub is_working_or_studying: bool,
}

impl TryFrom<CcsCalculationRequest> for CalculationInput {
    type Error = EngineError;

    fn try_from(req: CcsCalculationRequest) -> EngineResult<Self> {
        let care_type = CareType::from_code(req.child_care_type)
            .ok_or_else(|| EngineError::invalid_input(INVALID_CARE_TYPE_MESSAGE))?;

        if req.hourly_rate > Decimal::ZERO
            && !(MIN_HOURLY_RATE..=MAX_HOURLY_RATE).contains(&req.hourly_rate)
        {
            return Err(EngineError::invalid_input(HOURLY_RATE_OUT_OF_RANGE_MESSAGE));
        }
        if req.number_of_children > MAX_CHILDREN {
            return Err(EngineError::invalid_input(TOO_MANY_CHILDREN_MESSAGE));
        }

        Ok(CalculationInput {
            annual_family_income: req.annual_family_income,
            care_type,
            hourly_rate: req.hourly_rate,
            hours_per_week: req.hours_per_week,
            number_of_children: req.number_of_children,
            activity_level: ActivityLevel::from_code(req.activity_level),
            is_working_or_studying: req.is_working_or_studying,
        })
    }
}
