//! Income-tested subsidy percentage.
//!
//! The percentage starts at the maximum for incomes up to the lower threshold
//! and drops by one point for every full taper step of income above it.

use rust_decimal::Decimal;

use crate::config::IncomeThresholds;

/// Calculates the subsidy percentage for an annual family income.
///
/// - income at or below `lower`: `max_subsidy_percentage`
/// - income above `lower`, up to and including `upper`:
///   `max(max - floor((income - lower) / taper_step), min)`
/// - income above `upper`: `min_subsidy_percentage`
///
/// The division is exact decimal division; only the quotient is floored.
///
/// # Examples
///
/// ```
/// use ccs_engine::calculation::calculate_subsidy_percentage;
/// use ccs_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let thresholds = RateTable::default().income_thresholds;
/// assert_eq!(calculate_subsidy_percentage(Decimal::from(60_000), &thresholds), Decimal::from(90));
/// assert_eq!(calculate_subsidy_percentage(Decimal::from(100_000), &thresholds), Decimal::from(86));
/// assert_eq!(calculate_subsidy_percentage(Decimal::from(600_000), &thresholds), Decimal::ZERO);
/// ```
pub fn calculate_subsidy_percentage(annual_income: Decimal, thresholds: &IncomeThresholds) -> Decimal {
    if annual_income <= thresholds.lower {
        return thresholds.max_subsidy_percentage;
    }

    if annual_income <= thresholds.upper {
        let income_over_threshold = annual_income - thresholds.lower;
        let reduction = (income_over_threshold / thresholds.taper_step).floor();
        let percentage = thresholds.max_subsidy_percentage - reduction;

        return percentage.max(thresholds.min_subsidy_percentage);
    }

    thresholds.min_subsidy_percentage
}
