//! Cost and subsidy derivation across hour, week, fortnight and year.
//!
//! The per-hour subsidy is rounded to cents once and that rounded amount is
//! multiplied up to the longer horizons.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::Money;

/// Weeks in a fortnight.
pub const WEEKS_PER_FORTNIGHT: u32 = 2;

/// Weeks in a year. Annual figures use a flat 52-week year.
pub const WEEKS_PER_YEAR: u32 = 52;

/// Subsidy and out-of-pocket amounts at every horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostBreakdown {
    /// The lesser of the charged rate and the hourly cap.
    pub effective_hourly_rate: Decimal,
    /// Subsidy per hour of care.
    pub subsidy_per_hour: Money,
    /// Gap fee per hour of care.
    pub out_of_pocket_per_hour: Money,
    /// Unsubsidised cost per week.
    pub total_cost_per_week: Money,
    /// Subsidy per week.
    pub subsidy_per_week: Money,
    /// Gap fee per week.
    pub out_of_pocket_per_week: Money,
    /// Subsidy per fortnight.
    pub subsidy_per_fortnight: Money,
    /// Gap fee per fortnight.
    pub out_of_pocket_per_fortnight: Money,
    /// Subsidy per year.
    pub subsidy_per_year: Money,
    /// Gap fee per year.
    pub out_of_pocket_per_year: Money,
}

/// Derives the cost breakdown for one child at one care rate.
///
/// The subsidy is calculated on the capped rate, but the out-of-pocket
/// figures are taken from the rate actually charged, so a fee above the cap
/// shows up in full as gap fee.
///
/// # Arguments
///
/// * `hourly_rate` - The rate charged by the provider
/// * `hourly_cap` - The cap for the care type
/// * `subsidy_percentage` - The percentage, 0-100
/// * `hours_per_week` - Hours of care per week
///
/// # Errors
///
/// Returns [`EngineError::AmountOverflow`] if any figure falls outside the
/// `Decimal` range.
///
/// # Examples
///
/// ```
/// use ccs_engine::calculation::calculate_cost_breakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = calculate_cost_breakdown(
///     Decimal::from(20),
///     Decimal::from_str("13.73").unwrap(),
///     Decimal::from(90),
///     40,
/// )
/// .unwrap();
///
/// assert_eq!(breakdown.subsidy_per_hour.amount, Decimal::from_str("12.36").unwrap());
/// assert_eq!(breakdown.out_of_pocket_per_hour.amount, Decimal::from_str("7.64").unwrap());
/// ```
pub fn calculate_cost_breakdown(
    hourly_rate: Decimal,
    hourly_cap: Decimal,
    subsidy_percentage: Decimal,
    hours_per_week: i32,
) -> EngineResult<CostBreakdown> {
    let effective_hourly_rate = hourly_rate.min(hourly_cap);
    let subsidy_per_hour = Money::aud(
        checked(
            effective_hourly_rate.checked_mul(subsidy_percentage),
            "subsidy per hour",
        )? / Decimal::ONE_HUNDRED,
    );
    let out_of_pocket_per_hour = Money::aud(checked(
        hourly_rate.checked_sub(subsidy_per_hour.amount),
        "out of pocket per hour",
    )?);

    let hours = Decimal::from(hours_per_week);
    let total_cost_per_week = Money::aud(checked(
        hourly_rate.checked_mul(hours),
        "total cost per week",
    )?);
    let subsidy_per_week = scale(subsidy_per_hour, hours, "subsidy per week")?;
    let out_of_pocket_per_week = Money::aud(checked(
        total_cost_per_week
            .amount
            .checked_sub(subsidy_per_week.amount),
        "out of pocket per week",
    )?);

    let fortnight = Decimal::from(WEEKS_PER_FORTNIGHT);
    let year = Decimal::from(WEEKS_PER_YEAR);

    Ok(CostBreakdown {
        effective_hourly_rate,
        subsidy_per_hour,
        out_of_pocket_per_hour,
        total_cost_per_week,
        subsidy_per_week,
        out_of_pocket_per_week,
        subsidy_per_fortnight: scale(subsidy_per_week, fortnight, "subsidy per fortnight")?,
        out_of_pocket_per_fortnight: scale(
            out_of_pocket_per_week,
            fortnight,
            "out of pocket per fortnight",
        )?,
        subsidy_per_year: scale(subsidy_per_week, year, "subsidy per year")?,
        out_of_pocket_per_year: scale(out_of_pocket_per_week, year, "out of pocket per year")?,
    })
}

fn checked(value: Option<Decimal>, figure: &str) -> EngineResult<Decimal> {
    value.ok_or_else(|| EngineError::AmountOverflow {
        figure: figure.to_string(),
    })
}

fn scale(money: Money, factor: Decimal, figure: &str) -> EngineResult<Money> {
    checked(money.amount.checked_mul(factor), figure).map(Money::aud)
}
