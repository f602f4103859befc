//! Calculation input model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ActivityLevel, CareType};

/// Household circumstances for a single subsidy estimate.
///
/// Nothing is checked on construction; the calculator validates every field
/// before any figure is derived.
///
/// # Example
///
/// ```
/// use ccs_engine::models::{ActivityLevel, CalculationInput, CareType};
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     annual_family_income: Decimal::from(100_000),
///     care_type: CareType::LongDayCare,
///     hourly_rate: Decimal::from(12),
///     hours_per_week: 40,
///     number_of_children: 1,
///     activity_level: ActivityLevel::High,
///     is_working_or_studying: true,
/// };
/// assert_eq!(input.hours_per_week, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Combined annual family income in AUD.
    pub annual_family_income: Decimal,
    /// The type of care being used.
    pub care_type: CareType,
    /// The hourly fee charged by the provider in AUD.
    pub hourly_rate: Decimal,
    /// Hours of care per week.
    pub hours_per_week: i32,
    /// Number of children in care. Validated, not multiplied into totals.
    pub number_of_children: i32,
    /// The family's activity level.
    pub activity_level: ActivityLevel,
    /// Whether the activity test is met.
    pub is_working_or_studying: bool,
}
