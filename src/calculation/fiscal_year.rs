//! Fiscal year resolution.
//!
//! The fiscal year runs April to March and is labelled `FY{yy}` after the last
//! two digits of the calendar year it starts in.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// The calendar month the fiscal year starts in.
pub const FISCAL_YEAR_START_MONTH: u32 = 4;

/// The twelve calendar months in fiscal order (April through March).
pub const FISCAL_MONTHS: [u32; 12] = [4, 5, 6, 7, 8, 9, 10, 11, 12, 1, 2, 3];

/// A fiscal year, identified by the calendar year it starts in.
///
/// Serializes as its label (e.g. `"FY25"`).
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::FiscalYear;
///
/// let fy: FiscalYear = "FY25".parse().unwrap();
/// assert_eq!(fy.start_year(), 2025);
/// assert_eq!(fy.calendar_year(3), 2026);
/// assert_eq!(fy.to_string(), "FY25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FiscalYear {
    start_year: i32,
}

impl FiscalYear {
    /// Creates the fiscal year starting in April of `start_year`.
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    /// Resolves the fiscal year a calendar `(year, month)` belongs to.
    ///
    /// The month is not validated; callers pass 1-12. Years at the bottom of
    /// the `i32` range saturate.
    pub fn from_year_month(year: i32, month: u32) -> Self {
        if month >= FISCAL_YEAR_START_MONTH {
            Self::new(year)
        } else {
            Self::new(year.saturating_sub(1))
        }
    }

    /// Resolves the fiscal year containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_year_month(date.year(), date.month())
    }

    /// The calendar year the fiscal year starts in.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// The `FY{yy}` label.
    pub fn label(&self) -> String {
        format!("FY{:02}", self.start_year.rem_euclid(100))
    }

    /// The calendar year a month of this fiscal year falls in.
    pub fn calendar_year(&self, month: u32) -> i32 {
        if month >= FISCAL_YEAR_START_MONTH {
            self.start_year
        } else {
            self.start_year.saturating_add(1)
        }
    }

    /// The twelve `(calendar_year, month)` pairs in fiscal order.
    pub fn months(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        FISCAL_MONTHS
            .iter()
            .map(move |&month| (self.calendar_year(month), month))
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for FiscalYear {
    type Err = EngineError;

    /// Parses `FY{yy}`; two digits map to `20yy`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidFiscalYear {
            label: s.to_string(),
        };

        let digits = s
            .trim()
            .strip_prefix("FY")
            .or_else(|| s.trim().strip_prefix("fy"))
            .ok_or_else(invalid)?;

        if digits.len() != 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let yy: i32 = digits.parse().map_err(|_| invalid())?;
        Ok(Self::new(2000 + yy))
    }
}

impl Serialize for FiscalYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for FiscalYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Returns the fiscal year label for a calendar `(year, month)`.
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::fiscal_year_label;
///
/// assert_eq!(fiscal_year_label(2025, 3), "FY24");
/// assert_eq!(fiscal_year_label(2025, 4), "FY25");
/// assert_eq!(fiscal_year_label(2009, 12), "FY09");
/// ```
pub fn fiscal_year_label(year: i32, month: u32) -> String {
    FiscalYear::from_year_month(year, month).label()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_january_to_march_belong_to_previous_year() {
        assert_eq!(fiscal_year_label(2025, 1), "FY24");
        assert_eq!(fiscal_year_label(2025, 2), "FY24");
        assert_eq!(fiscal_year_label(2025, 3), "FY24");
    }

    #[test]
    fn test_year_range_edges_saturate() {
        let earliest = FiscalYear::from_year_month(i32::MIN, 1);
        assert_eq!(earliest.start_year(), i32::MIN);
        assert_eq!(earliest.label(), "FY52");

        let latest = FiscalYear::new(i32::MAX);
        assert_eq!(latest.calendar_year(3), i32::MAX);
    }

    #[test]
    fn test_april_onwards_belong_to_current_year() {
        assert_eq!(fiscal_year_label(2025, 4), "FY25");
        assert_eq!(fiscal_year_label(2025, 12), "FY25");
    }

    #[test]
    fn test_century_boundary_is_zero_padded() {
        assert_eq!(fiscal_year_label(2000, 3), "FY99");
        assert_eq!(fiscal_year_label(2000, 4), "FY00");
        assert_eq!(fiscal_year_label(2101, 5), "FY01");
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        assert_eq!(FiscalYear::from_date(date), FiscalYear::new(2025));
    }

    #[test]
    fn test_months_in_fiscal_order() {
        let months: Vec<(i32, u32)> = FiscalYear::new(2025).months().collect();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], (2025, 4));
        assert_eq!(months[8], (2025, 12));
        assert_eq!(months[9], (2026, 1));
        assert_eq!(months[11], (2026, 3));
    }

    #[test]
    fn test_parse_label() {
        assert_eq!("FY25".parse::<FiscalYear>().unwrap().start_year(), 2025);
        assert_eq!("FY00".parse::<FiscalYear>().unwrap().start_year(), 2000);
        assert_eq!(" fy07 ".parse::<FiscalYear>().unwrap().start_year(), 2007);
    }

    #[test]
    fn test_parse_rejects_malformed_labels() {
        for label in ["2025", "FY", "FY2025", "FYab", "FY-1", ""] {
            match label.parse::<FiscalYear>() {
                Err(EngineError::InvalidFiscalYear { label: l }) => assert_eq!(l, label),
                other => panic!("Expected InvalidFiscalYear for {:?}, got {:?}", label, other),
            }
        }
    }

    #[test]
    fn test_serde_as_label() {
        let json = serde_json::to_string(&FiscalYear::new(2025)).unwrap();
        assert_eq!(json, "\"FY25\"");
        let fy: FiscalYear = serde_json::from_str("\"FY24\"").unwrap();
        assert_eq!(fy.start_year(), 2024);
        assert!(serde_json::from_str::<FiscalYear>("\"24\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_label_matches_start_year(year in 1950i32..2150, month in 1u32..=12) {
            let label = fiscal_year_label(year, month);
            let expected_start = if month >= 4 { year } else { year - 1 };
            prop_assert_eq!(label, format!("FY{:02}", expected_start % 100));
        }

        #[test]
        fn prop_label_round_trips_within_century(start in 2000i32..2100) {
            let fy = FiscalYear::new(start);
            prop_assert_eq!(fy.label().parse::<FiscalYear>().unwrap(), fy);
        }
    }
}
