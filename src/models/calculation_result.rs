//! Calculation result model.
//!
//! This module contains the [`CalculationResult`] type that captures every
//! output of a subsidy estimate: the percentage, the applied cap, the
//! eligibility outcome and the per-hour, weekly, fortnightly and annual
//! subsidy and out-of-pocket amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Money;
use crate::calculation::ELIGIBLE_MESSAGE;

/// The outcome of a Child Care Subsidy estimate.
///
/// The shape never changes: an ineligible result carries a zero percentage
/// and zero amounts rather than missing fields.
///
/// # Example
///
/// ```
/// use ccs_engine::models::CalculationResult;
///
/// let result = CalculationResult::ineligible("You are not eligible.");
/// assert!(result.subsidy_per_week.is_zero());
/// assert!(!result.is_eligible());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Subsidy percentage applied to the effective hourly rate (0-90).
    pub subsidy_percentage: Decimal,
    /// The hourly rate cap for the care type. Zero when ineligible.
    pub hourly_cap: Decimal,
    /// Hours per fortnight eligible for subsidy. Zero when ineligible.
    pub subsidised_hours_per_fortnight: u32,
    /// Human-readable eligibility outcome.
    pub eligibility_message: String,
    /// Whether income exceeds the upper threshold. Only ever set on the eligible path.
    pub is_above_income_threshold: bool,
    /// Subsidy per hour of care.
    pub subsidy_per_hour: Money,
    /// Subsidy per week.
    pub subsidy_per_week: Money,
    /// Subsidy per fortnight.
    pub subsidy_per_fortnight: Money,
    /// Subsidy per year (52 weeks).
    pub subsidy_per_year: Money,
    /// Gap fee per hour of care.
    pub out_of_pocket_per_hour: Money,
    /// Gap fee per week.
    pub out_of_pocket_per_week: Money,
    /// Gap fee per fortnight.
    pub out_of_pocket_per_fortnight: Money,
    /// Gap fee per year (52 weeks).
    pub out_of_pocket_per_year: Money,
    /// Unsubsidised cost of care per week.
    pub total_cost_per_week: Money,
}

impl CalculationResult {
    /// Creates a result with every figure zeroed and the given message.
    pub fn ineligible(message: impl Into<String>) -> Self {
        Self {
            subsidy_percentage: Decimal::ZERO,
            hourly_cap: Decimal::ZERO,
            subsidised_hours_per_fortnight: 0,
            eligibility_message: message.into(),
            is_above_income_threshold: false,
            subsidy_per_hour: Money::zero(),
            subsidy_per_week: Money::zero(),
            subsidy_per_fortnight: Money::zero(),
            subsidy_per_year: Money::zero(),
            out_of_pocket_per_hour: Money::zero(),
            out_of_pocket_per_week: Money::zero(),
            out_of_pocket_per_fortnight: Money::zero(),
            out_of_pocket_per_year: Money::zero(),
            total_cost_per_week: Money::zero(),
        }
    }

    /// Returns true if this result was produced on the eligible path.
    pub fn is_eligible(&self) -> bool {
        self.eligibility_message == ELIGIBLE_MESSAGE
    }

    /// Returns all monetary figures, in declaration order.
    pub fn monetary_fields(&self) -> [Money; 9] {
        [
            self.subsidy_per_hour,
            self.subsidy_per_week,
            self.subsidy_per_fortnight,
            self.subsidy_per_year,
            self.out_of_pocket_per_hour,
            self.out_of_pocket_per_week,
            self.out_of_pocket_per_fortnight,
            self.out_of_pocket_per_year,
            self.total_cost_per_week,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ineligible_result_is_zeroed() {
        let result = CalculationResult::ineligible("nope");

        assert_eq!(result.eligibility_message, "nope");
        assert_eq!(result.subsidy_percentage, Decimal::ZERO);
        assert_eq!(result.hourly_cap, Decimal::ZERO);
        assert_eq!(result.subsidised_hours_per_fortnight, 0);
        assert!(!result.is_above_income_threshold);
        assert!(result.monetary_fields().iter().all(Money::is_zero));
        assert!(!result.is_eligible());
    }

    #[test]
    fn test_serialization_keeps_all_fields() {
        let result = CalculationResult::ineligible("nope");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["eligibility_message"], "nope");
        assert_eq!(json["subsidy_per_year"]["currency"], "AUD");
        assert_eq!(json["total_cost_per_week"]["amount"], "0");
        assert_eq!(json["is_above_income_threshold"], false);
    }
}
