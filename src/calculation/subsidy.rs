//! The Child Care Subsidy calculation.
//!
//! Ties together validation, eligibility, the income taper, the hourly cap
//! and the cost breakdown into a single [`CalculationResult`].

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{CalculationInput, CalculationResult};

use super::cost_breakdown::calculate_cost_breakdown;
use super::eligibility::check_eligibility;
use super::subsidy_percentage::calculate_subsidy_percentage;
use super::validation::validate_input;

/// Estimates the Child Care Subsidy for one family.
///
/// The calculation is pure: the same input and rate table always produce the
/// same result.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidInput`] if the input fails
/// validation, or [`crate::error::EngineError::AmountOverflow`] if a figure
/// exceeds the decimal range. No partial result is produced.
///
/// # Ineligible families
///
/// When the activity test is not met, or income exceeds the upper threshold,
/// the result carries the matching message and every figure is zero.
/// `is_above_income_threshold` is only evaluated once the family has passed
/// eligibility, so it stays `false` on both ineligible paths.
///
/// # Examples
///
/// ```
/// use ccs_engine::calculation::calculate_subsidy;
/// use ccs_engine::config::RateTable;
/// use ccs_engine::models::{ActivityLevel, CalculationInput, CareType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
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
///
/// let result = calculate_subsidy(&input, &RateTable::default()).unwrap();
/// assert_eq!(result.subsidy_percentage, Decimal::from(86));
/// assert_eq!(result.subsidy_per_week.amount, Decimal::from_str("412.80").unwrap());
/// ```
pub fn calculate_subsidy(
    input: &CalculationInput,
    rates: &RateTable,
) -> EngineResult<CalculationResult> {
    validate_input(input)?;

    let eligibility = check_eligibility(input, &rates.income_thresholds);
    if !eligibility.is_eligible() {
        return Ok(CalculationResult::ineligible(eligibility.message()));
    }

    let thresholds = &rates.income_thresholds;
    let subsidy_percentage = calculate_subsidy_percentage(input.annual_family_income, thresholds);
    let hourly_cap = rates.hourly_cap(input.care_type);
    let subsidised_hours_per_fortnight = rates.subsidised_hours(input.activity_level);

    let breakdown = calculate_cost_breakdown(
        input.hourly_rate,
        hourly_cap,
        subsidy_percentage,
        input.hours_per_week,
    )?;

    Ok(CalculationResult {
        subsidy_percentage,
        hourly_cap,
        subsidised_hours_per_fortnight,
        eligibility_message: eligibility.message(),
        is_above_income_threshold: input.annual_family_income > thresholds.upper,
        subsidy_per_hour: breakdown.subsidy_per_hour,
        subsidy_per_week: breakdown.subsidy_per_week,
        subsidy_per_fortnight: breakdown.subsidy_per_fortnight,
        subsidy_per_year: breakdown.subsidy_per_year,
        out_of_pocket_per_hour: breakdown.out_of_pocket_per_hour,
        out_of_pocket_per_week: breakdown.out_of_pocket_per_week,
        out_of_pocket_per_fortnight: breakdown.out_of_pocket_per_fortnight,
        out_of_pocket_per_year: breakdown.out_of_pocket_per_year,
        total_cost_per_week: breakdown.total_cost_per_week,
    })
}

/// A calculator bound to one rate table.
///
/// # Example
///
/// ```
/// use ccs_engine::calculation::SubsidyCalculator;
/// use ccs_engine::models::{ActivityLevel, CalculationInput, CareType};
/// use rust_decimal::Decimal;
///
/// let calculator = SubsidyCalculator::default();
/// let input = CalculationInput {
///     annual_family_income: Decimal::from(60_000),
///     care_type: CareType::LongDayCare,
///     hourly_rate: Decimal::from(12),
///     hours_per_week: 30,
///     number_of_children: 1,
///     activity_level: ActivityLevel::High,
///     is_working_or_studying: true,
/// };
/// assert_eq!(calculator.calculate(&input).unwrap().subsidy_percentage, Decimal::from(90));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubsidyCalculator {
    rates: RateTable,
}

impl SubsidyCalculator {
    /// Creates a calculator for the given rate table.
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Returns the rate table this calculator uses.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Estimates the subsidy for one family. See [`calculate_subsidy`].
    pub fn calculate(&self, input: &CalculationInput) -> EngineResult<CalculationResult> {
        calculate_subsidy(input, &self.rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::eligibility::{ACTIVITY_TEST_NOT_MET_MESSAGE, ELIGIBLE_MESSAGE};
    use crate::error::EngineError;
    use crate::models::{ActivityLevel, CareType, Money};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn valid_input() -> CalculationInput {
        CalculationInput {
            annual_family_income: dec("100000"),
            care_type: CareType::LongDayCare,
            hourly_rate: dec("12"),
            hours_per_week: 40,
            number_of_children: 1,
            activity_level: ActivityLevel::High,
            is_working_or_studying: true,
        }
    }

    fn calculate(input: &CalculationInput) -> CalculationResult {
        calculate_subsidy(input, &RateTable::default()).unwrap()
    }

    #[test]
    fn test_full_scenario_taper_income() {
        let result = calculate(&valid_input());

        assert_eq!(result.eligibility_message, ELIGIBLE_MESSAGE);
        assert_eq!(result.subsidy_percentage, dec("86"));
        assert_eq!(result.hourly_cap, dec("13.73"));
        assert_eq!(result.subsidised_hours_per_fortnight, 100);
        assert_eq!(result.subsidy_per_hour.amount, dec("10.32"));
        assert_eq!(result.out_of_pocket_per_hour.amount, dec("1.68"));
        assert_eq!(result.total_cost_per_week.amount, dec("480"));
        assert_eq!(result.subsidy_per_week.amount, dec("412.80"));
        assert_eq!(result.out_of_pocket_per_week.amount, dec("67.20"));
        assert_eq!(result.subsidy_per_fortnight.amount, dec("825.60"));
        assert_eq!(result.out_of_pocket_per_fortnight.amount, dec("134.40"));
        assert_eq!(result.subsidy_per_year.amount, dec("21465.60"));
        assert_eq!(result.out_of_pocket_per_year.amount, dec("3494.40"));
        assert!(!result.is_above_income_threshold);
    }

    #[test]
    fn test_full_scenario_low_income() {
        let mut input = valid_input();
        input.annual_family_income = dec("60000");
        input.hours_per_week = 30;

        let result = calculate(&input);

        assert_eq!(result.subsidy_percentage, dec("90"));
        assert_eq!(result.subsidy_per_hour.amount, dec("10.80"));
        assert_eq!(result.out_of_pocket_per_hour.amount, dec("1.20"));
        assert_eq!(result.total_cost_per_week.amount, dec("360"));
        assert_eq!(result.subsidy_per_week.amount, dec("324"));
        assert_eq!(result.out_of_pocket_per_week.amount, dec("36"));
        assert_eq!(result.subsidy_per_year.amount, dec("16848"));
        assert_eq!(result.out_of_pocket_per_year.amount, dec("1872"));
    }

    #[test]
    fn test_family_day_care_above_cap() {
        let input = CalculationInput {
            annual_family_income: dec("130000"),
            care_type: CareType::FamilyDayCare,
            hourly_rate: dec("15"),
            hours_per_week: 25,
            number_of_children: 2,
            activity_level: ActivityLevel::Medium,
            is_working_or_studying: true,
        };

        let result = calculate(&input);

        assert_eq!(result.subsidy_percentage, dec("80"));
        assert_eq!(result.hourly_cap, dec("12.74"));
        assert_eq!(result.subsidised_hours_per_fortnight, 72);
        // 12.74 * 0.8 = 10.192
        assert_eq!(result.subsidy_per_hour.amount, dec("10.19"));
        assert_eq!(result.out_of_pocket_per_hour.amount, dec("4.81"));
    }

    #[test]
    fn test_in_home_care_high_income() {
        let input = CalculationInput {
            annual_family_income: dec("400000"),
            care_type: CareType::InHomeCare,
            hourly_rate: dec("35"),
            hours_per_week: 50,
            number_of_children: 3,
            activity_level: ActivityLevel::High,
            is_working_or_studying: true,
        };

        let result = calculate(&input);

        assert_eq!(result.subsidy_percentage, dec("26"));
        assert_eq!(result.hourly_cap, dec("36.24"));
        assert_eq!(result.subsidy_per_hour.amount, dec("9.10"));
    }

    #[test]
    fn test_children_do_not_multiply_totals() {
        let single = calculate(&valid_input());
        let mut input = valid_input();
        input.number_of_children = 4;

        assert_eq!(calculate(&input), single);
    }

    #[test]
    fn test_not_working_returns_zeroed_result() {
        let mut input = valid_input();
        input.is_working_or_studying = false;

        let result = calculate(&input);

        assert_eq!(result.eligibility_message, ACTIVITY_TEST_NOT_MET_MESSAGE);
        assert_eq!(result.subsidy_percentage, Decimal::ZERO);
        assert!(result.monetary_fields().iter().all(Money::is_zero));
        assert!(!result.is_above_income_threshold);
    }

    #[test]
    fn test_income_above_threshold_does_not_set_flag() {
        let mut input = valid_input();
        input.annual_family_income = dec("530001");

        let result = calculate(&input);

        assert_eq!(
            result.eligibility_message,
            "Family income exceeds the threshold of $530,000. No subsidy is available."
        );
        assert_eq!(result.subsidy_percentage, Decimal::ZERO);
        assert!(result.monetary_fields().iter().all(Money::is_zero));
        assert!(!result.is_above_income_threshold);
    }

    #[test]
    fn test_income_at_threshold_is_eligible_with_zero_percent() {
        let mut input = valid_input();
        input.annual_family_income = dec("530000");

        let result = calculate(&input);

        assert_eq!(result.eligibility_message, ELIGIBLE_MESSAGE);
        assert_eq!(result.subsidy_percentage, Decimal::ZERO);
        assert_eq!(result.hourly_cap, dec("13.73"));
        assert!(result.subsidy_per_week.is_zero());
        assert_eq!(result.out_of_pocket_per_week.amount, dec("480"));
        assert!(!result.is_above_income_threshold);
    }

    #[test]
    fn test_validation_runs_before_eligibility() {
        let mut input = valid_input();
        input.is_working_or_studying = false;
        input.hours_per_week = 0;

        let result = calculate_subsidy(&input, &RateTable::default());

        assert_eq!(
            result,
            Err(EngineError::invalid_input("Hours per week must be between 1 and 168"))
        );
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let input = valid_input();
        assert_eq!(calculate(&input), calculate(&input));
    }

    #[test]
    fn test_calculator_uses_custom_rate_table() {
        let mut rates = RateTable::default();
        rates.hourly_caps.long_day_care = dec("10");
        let calculator = SubsidyCalculator::new(rates);

        let result = calculator.calculate(&valid_input()).unwrap();

        assert_eq!(calculator.rates().hourly_caps.long_day_care, dec("10"));
        assert_eq!(result.hourly_cap, dec("10"));
        assert_eq!(result.subsidy_per_hour.amount, dec("8.60"));
        assert_eq!(result.out_of_pocket_per_hour.amount, dec("3.40"));
    }

    #[test]
    fn test_oversized_hourly_rate_is_an_error_not_a_panic() {
        let mut input = valid_input();
        input.hourly_rate = Decimal::MAX;
        input.hours_per_week = 2;

        let outcome = std::panic::catch_unwind(|| calculate_subsidy(&input, &RateTable::default()));

        match outcome {
            Ok(Err(EngineError::AmountOverflow { .. })) => {}
            other => panic!("expected an overflow error, got {:?}", other.map_err(|_| "panic")),
        }
    }

    #[test]
    fn test_zero_cap_table_still_reports_eligible() {
        let mut rates = RateTable::default();
        rates.hourly_caps.occasional_care = Decimal::ZERO;
        let mut input = valid_input();
        input.care_type = CareType::OccasionalCare;

        let result = SubsidyCalculator::new(rates).calculate(&input).unwrap();

        assert_eq!(result.hourly_cap, Decimal::ZERO);
        assert!(result.subsidy_per_hour.is_zero());
        assert!(result.is_eligible());
    }
}
