//! Calculation logic for the Child Care Subsidy engine.
//!
//! This module contains input validation, the eligibility rules, the
//! income-tested subsidy percentage, the cost breakdown across hour, week,
//! fortnight and year, and the [`calculate_subsidy`] entry point that
//! combines them.

mod cost_breakdown;
mod eligibility;
mod subsidy;
mod subsidy_percentage;
mod validation;

pub use cost_breakdown::{
    CostBreakdown, WEEKS_PER_FORTNIGHT, WEEKS_PER_YEAR, calculate_cost_breakdown,
};
pub use eligibility::{
    ACTIVITY_TEST_NOT_MET_MESSAGE, ELIGIBLE_MESSAGE, Eligibility, check_eligibility,
};
pub use subsidy::{SubsidyCalculator, calculate_subsidy};
pub use subsidy_percentage::calculate_subsidy_percentage;
pub use validation::{
    HOURS_OUT_OF_RANGE_MESSAGE, MAX_HOURS_PER_WEEK, NEGATIVE_INCOME_MESSAGE, NO_CHILDREN_MESSAGE,
    NON_POSITIVE_RATE_MESSAGE, validate_input,
};
