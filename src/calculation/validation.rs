//! Input validation.
//!
//! Every field of a [`CalculationInput`] is checked before any figure is
//! derived. Checks run in a fixed order and the first failure is returned.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::CalculationInput;

/// Rejection reason for a negative income.
pub const NEGATIVE_INCOME_MESSAGE: &str = "Annual family income cannot be negative";

/// Rejection reason for a zero or negative hourly rate.
pub const NON_POSITIVE_RATE_MESSAGE: &str = "Hourly rate must be greater than zero";

/// Rejection reason for hours outside 1-168.
pub const HOURS_OUT_OF_RANGE_MESSAGE: &str = "Hours per week must be between 1 and 168";

/// Rejection reason for fewer than one child.
pub const NO_CHILDREN_MESSAGE: &str = "Number of children must be at least 1";

/// The most hours of care possible in a week.
pub const MAX_HOURS_PER_WEEK: i32 = 168;

/// Validates a calculation input.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] carrying the first failed check:
/// 1. income must not be negative
/// 2. hourly rate must be greater than zero
/// 3. hours per week must be within 1 to 168 inclusive
/// 4. there must be at least one child
///
/// # Examples
///
/// ```
/// use ccs_engine::calculation::validate_input;
/// use ccs_engine::models::{ActivityLevel, CalculationInput, CareType};
/// use rust_decimal::Decimal;
///
/// let mut input = CalculationInput {
///     annual_family_income: Decimal::from(60_000),
///     care_type: CareType::LongDayCare,
///     hourly_rate: Decimal::from(12),
///     hours_per_week: 30,
///     number_of_children: 1,
///     activity_level: ActivityLevel::High,
///     is_working_or_studying: true,
/// };
/// assert!(validate_input(&input).is_ok());
///
/// input.hours_per_week = 169;
/// let error = validate_input(&input).unwrap_err();
/// assert_eq!(error.to_string(), "Hours per week must be between 1 and 168");
/// ```
pub fn validate_input(input: &CalculationInput) -> EngineResult<()> {
    if input.annual_family_income < Decimal::ZERO {
        return Err(EngineError::invalid_input(NEGATIVE_INCOME_MESSAGE));
    }

    if input.hourly_rate <= Decimal::ZERO {
        return Err(EngineError::invalid_input(NON_POSITIVE_RATE_MESSAGE));
    }

    if !(1..=MAX_HOURS_PER_WEEK).contains(&input.hours_per_week) {
        return Err(EngineError::invalid_input(HOURS_OUT_OF_RANGE_MESSAGE));
    }

    if input.number_of_children < 1 {
        return Err(EngineError::invalid_input(NO_CHILDREN_MESSAGE));
    }

    Ok(())
}
