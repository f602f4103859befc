//! Eligibility determination.
//!
//! A family is eligible when the activity test is met and income does not
//! exceed the upper threshold. The activity test is checked first.

use rust_decimal::Decimal;

use crate::config::IncomeThresholds;
use crate::models::{CalculationInput, format_whole_dollars};

/// Message for a family that does not meet the activity test.
pub const ACTIVITY_TEST_NOT_MET_MESSAGE: &str =
    "You must meet work, training, study or other activity requirements to be eligible for CCS.";

/// Message for an eligible family.
pub const ELIGIBLE_MESSAGE: &str = "You are eligible for Child Care Subsidy.";

/// The outcome of the eligibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Subsidy is available.
    Eligible,
    /// The activity test is not met.
    ActivityTestNotMet,
    /// Income is strictly above the upper threshold.
    IncomeAboveThreshold {
        /// The threshold that was exceeded.
        threshold: Decimal,
    },
}

impl Eligibility {
    /// Returns true for [`Eligibility::Eligible`].
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    /// Returns the human-readable message for this outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use ccs_engine::calculation::Eligibility;
    /// use rust_decimal::Decimal;
    ///
    /// let outcome = Eligibility::IncomeAboveThreshold { threshold: Decimal::from(530_000) };
    /// assert_eq!(
    ///     outcome.message(),
    ///     "Family income exceeds the threshold of $530,000. No subsidy is available."
    /// );
    /// ```
    pub fn message(&self) -> String {
        match self {
            Eligibility::Eligible => ELIGIBLE_MESSAGE.to_string(),
            Eligibility::ActivityTestNotMet => ACTIVITY_TEST_NOT_MET_MESSAGE.to_string(),
            Eligibility::IncomeAboveThreshold { threshold } => format!(
                "Family income exceeds the threshold of ${}. No subsidy is available.",
                format_whole_dollars(*threshold)
            ),
        }
    }
}

/// Applies the eligibility rules to a validated input.
pub fn check_eligibility(input: &CalculationInput, thresholds: &IncomeThresholds) -> Eligibility {
    if !input.is_working_or_studying {
        return Eligibility::ActivityTestNotMet;
    }

    if input.annual_family_income > thresholds.upper {
        return Eligibility::IncomeAboveThreshold {
            threshold: thresholds.upper,
        };
    }

    Eligibility::Eligible
}
