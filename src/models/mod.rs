//! Core data models for the Child Care Subsidy engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_input;
mod calculation_result;
mod care;
mod money;

pub use calculation_input::CalculationInput;
pub use calculation_result::CalculationResult;
pub use care::{ActivityLevel, CareType};
pub use money::{Currency, MONEY_DECIMAL_PLACES, Money, format_whole_dollars, round_money};
