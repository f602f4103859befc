//! Configuration types for subsidy estimation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, along with the built-in
//! 2024-25 rate table.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ActivityLevel, CareType};

/// Metadata about the subsidy scheme and the financial year it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeMetadata {
    /// Short scheme code (e.g., "CCS").
    pub code: String,
    /// The human-readable name of the scheme.
    pub name: String,
    /// The financial year the rates apply to (e.g., "2024-25").
    pub financial_year: String,
    /// The date the rates took effect.
    pub effective_date: NaiveDate,
    /// URL to the official scheme documentation.
    pub source_url: String,
}

impl Default for SchemeMetadata {
    fn default() -> Self {
        Self {
            code: "CCS".to_string(),
            name: "Child Care Subsidy".to_string(),
            financial_year: "2024-25".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap_or_default(),
            source_url: "https://www.servicesaustralia.gov.au/child-care-subsidy".to_string(),
        }
    }
}

/// Income thresholds and the percentage taper between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeThresholds {
    /// Income at or below which the maximum percentage applies.
    pub lower: Decimal,
    /// Income above which no subsidy is available.
    pub upper: Decimal,
    /// Income band size for each one-point reduction in percentage.
    pub taper_step: Decimal,
    /// The maximum subsidy percentage.
    pub max_subsidy_percentage: Decimal,
    /// The minimum subsidy percentage.
    pub min_subsidy_percentage: Decimal,
}

/// Hourly rate caps by care type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyCaps {
    /// Cap for long day care.
    pub long_day_care: Decimal,
    /// Cap for family day care.
    pub family_day_care: Decimal,
    /// Cap for outside school hours care.
    pub outside_school_hours_care: Decimal,
    /// Cap for in home care.
    pub in_home_care: Decimal,
    /// Cap for occasional care.
    pub occasional_care: Decimal,
}

impl HourlyCaps {
    /// Returns the hourly cap for a care type.
    pub fn cap_for(&self, care_type: CareType) -> Decimal {
        match care_type {
            CareType::LongDayCare => self.long_day_care,
            CareType::FamilyDayCare => self.family_day_care,
            CareType::OutsideSchoolHoursCare => self.outside_school_hours_care,
            CareType::InHomeCare => self.in_home_care,
            CareType::OccasionalCare => self.occasional_care,
        }
    }
}

/// Subsidised hours per fortnight by activity level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidisedHours {
    /// Hours for 8-16 hours of activity.
    pub low: u32,
    /// Hours for 16-48 hours of activity.
    pub medium: u32,
    /// Hours for more than 48 hours of activity.
    pub high: u32,
}

impl SubsidisedHours {
    /// Returns the subsidised hours per fortnight for an activity level.
    pub fn hours_for(&self, activity_level: ActivityLevel) -> u32 {
        match activity_level {
            ActivityLevel::Low => self.low,
            ActivityLevel::Medium => self.medium,
            ActivityLevel::High => self.high,
        }
    }
}

/// The complete rate table for one financial year.
///
/// `RateTable::default()` is the 2024-25 table (as of July 2024).
///
/// # Example
///
/// ```
/// use ccs_engine::config::RateTable;
/// use ccs_engine::models::{ActivityLevel, CareType};
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default();
/// assert_eq!(rates.hourly_cap(CareType::InHomeCare), Decimal::new(3624, 2));
/// assert_eq!(rates.subsidised_hours(ActivityLevel::Medium), 72);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Income thresholds and taper.
    pub income_thresholds: IncomeThresholds,
    /// Hourly rate caps by care type.
    pub hourly_caps: HourlyCaps,
    /// Subsidised hours per fortnight by activity level.
    pub subsidised_hours: SubsidisedHours,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            income_thresholds: IncomeThresholds {
                lower: Decimal::from(80_000),
                upper: Decimal::from(530_000),
                taper_step: Decimal::from(5_000),
                max_subsidy_percentage: Decimal::from(90),
                min_subsidy_percentage: Decimal::ZERO,
            },
            hourly_caps: HourlyCaps {
                long_day_care: Decimal::new(1373, 2),
                family_day_care: Decimal::new(1274, 2),
                outside_school_hours_care: Decimal::new(1275, 2),
                in_home_care: Decimal::new(3624, 2),
                occasional_care: Decimal::new(1373, 2),
            },
            subsidised_hours: SubsidisedHours {
                low: 36,
                medium: 72,
                high: 100,
            },
        }
    }
}

impl RateTable {
    /// Returns the hourly cap for a care type.
    pub fn hourly_cap(&self, care_type: CareType) -> Decimal {
        self.hourly_caps.cap_for(care_type)
    }

    /// Returns the subsidised hours per fortnight for an activity level.
    pub fn subsidised_hours(&self, activity_level: ActivityLevel) -> u32 {
        self.subsidised_hours.hours_for(activity_level)
    }
}

/// The complete scheme configuration loaded from YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CcsConfig {
    /// Scheme metadata.
    metadata: SchemeMetadata,
    /// The rate table.
    rates: RateTable,
}

impl CcsConfig {
    /// Creates a new CcsConfig from its component parts.
    pub fn new(metadata: SchemeMetadata, rates: RateTable) -> Self {
        Self { metadata, rates }
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        &self.metadata
    }

    /// Returns the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}
