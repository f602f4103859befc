//! Care type and activity level enumerations.
//!
//! Both enumerations are closed and carry the integer codes used by the HTTP
//! API. The hourly caps and subsidised hours they map to live in the rate
//! table, see [`crate::config::RateTable`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of approved child care service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareType {
    /// Centre-based day care.
    LongDayCare,
    /// Care in an educator's home.
    FamilyDayCare,
    /// Before/after school and vacation care.
    OutsideSchoolHoursCare,
    /// Care provided in the child's own home.
    InHomeCare,
    /// Casual, short-term centre-based care.
    OccasionalCare,
}

impl CareType {
    /// All care types in code order.
    pub const ALL: [CareType; 5] = [
        CareType::LongDayCare,
        CareType::FamilyDayCare,
        CareType::OutsideSchoolHoursCare,
        CareType::InHomeCare,
        CareType::OccasionalCare,
    ];

    /// Maps an API code (1-5) to a care type.
    ///
    /// # Examples
    ///
    /// ```
    /// use ccs_engine::models::CareType;
    ///
    /// assert_eq!(CareType::from_code(4), Some(CareType::InHomeCare));
    /// assert_eq!(CareType::from_code(6), None);
    /// ```
    pub fn from_code(code: i32) -> Option<CareType> {
        match code {
            1 => Some(CareType::LongDayCare),
            2 => Some(CareType::FamilyDayCare),
            3 => Some(CareType::OutsideSchoolHoursCare),
            4 => Some(CareType::InHomeCare),
            5 => Some(CareType::OccasionalCare),
            _ => None,
        }
    }

    /// Returns the API code of this care type.
    pub fn code(self) -> i32 {
        match self {
            CareType::LongDayCare => 1,
            CareType::FamilyDayCare => 2,
            CareType::OutsideSchoolHoursCare => 3,
            CareType::InHomeCare => 4,
            CareType::OccasionalCare => 5,
        }
    }

    /// Returns the display name of this care type.
    pub fn name(self) -> &'static str {
        match self {
            CareType::LongDayCare => "Long Day Care",
            CareType::FamilyDayCare => "Family Day Care",
            CareType::OutsideSchoolHoursCare => "Outside School Hours Care",
            CareType::InHomeCare => "In Home Care",
            CareType::OccasionalCare => "Occasional Care",
        }
    }
}

impl fmt::Display for CareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Combined work, training, study or volunteering hours per fortnight.
///
/// The activity level determines how many hours per fortnight are eligible
/// for subsidy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// 8 to 16 hours per fortnight.
    Low,
    /// 16 to 48 hours per fortnight.
    Medium,
    /// More than 48 hours per fortnight.
    High,
}

impl ActivityLevel {
    /// All activity levels in code order.
    pub const ALL: [ActivityLevel; 3] = [
        ActivityLevel::Low,
        ActivityLevel::Medium,
        ActivityLevel::High,
    ];

    /// Maps an API code (1-3) to an activity level.
    ///
    /// Unrecognised codes fall back to [`ActivityLevel::Low`] rather than
    /// failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ccs_engine::models::ActivityLevel;
    ///
    /// assert_eq!(ActivityLevel::from_code(3), ActivityLevel::High);
    /// assert_eq!(ActivityLevel::from_code(42), ActivityLevel::Low);
    /// ```
    pub fn from_code(code: i32) -> ActivityLevel {
        match code {
            2 => ActivityLevel::Medium,
            3 => ActivityLevel::High,
            _ => ActivityLevel::Low,
        }
    }

    /// Returns true if `code` names one of the defined activity levels.
    pub fn is_known_code(code: i32) -> bool {
        (1..=3).contains(&code)
    }

    /// Returns the API code of this activity level.
    pub fn code(self) -> i32 {
        match self {
            ActivityLevel::Low => 1,
            ActivityLevel::Medium => 2,
            ActivityLevel::High => 3,
        }
    }

    /// Returns the display name of this activity level.
    pub fn name(self) -> &'static str {
        match self {
            ActivityLevel::Low => "8-16 hours per fortnight",
            ActivityLevel::Medium => "16-48 hours per fortnight",
            ActivityLevel::High => "48+ hours per fortnight",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_care_type_codes_round_trip() {
        for care_type in CareType::ALL {
            assert_eq!(CareType::from_code(care_type.code()), Some(care_type));
        }
    }

    #[test]
    fn test_unknown_care_type_code_is_none() {
        assert_eq!(CareType::from_code(0), None);
        assert_eq!(CareType::from_code(6), None);
        assert_eq!(CareType::from_code(-1), None);
    }

    #[test]
    fn test_activity_level_codes() {
        assert_eq!(ActivityLevel::from_code(1), ActivityLevel::Low);
        assert_eq!(ActivityLevel::from_code(2), ActivityLevel::Medium);
        assert_eq!(ActivityLevel::from_code(3), ActivityLevel::High);
    }

    #[test]
    fn test_unknown_activity_level_defaults_to_low() {
        assert_eq!(ActivityLevel::from_code(0), ActivityLevel::Low);
        assert_eq!(ActivityLevel::from_code(4), ActivityLevel::Low);
        assert_eq!(ActivityLevel::from_code(-7), ActivityLevel::Low);
        assert!(!ActivityLevel::is_known_code(4));
        assert!(ActivityLevel::is_known_code(2));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CareType::OutsideSchoolHoursCare.to_string(), "Outside School Hours Care");
        assert_eq!(ActivityLevel::High.to_string(), "48+ hours per fortnight");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&CareType::InHomeCare).unwrap();
        assert_eq!(json, "\"in_home_care\"");
        let level: ActivityLevel = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(level, ActivityLevel::Medium);
    }
}
