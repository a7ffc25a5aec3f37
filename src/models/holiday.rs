//! Holiday calendar models.
//!
//! This module contains the [`HolidayRecord`] and [`HolidayType`] types used to
//! mark non-working days in a fiscal year calendar.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The kind of non-working day a [`HolidayRecord`] represents.
///
/// Weekends are not derived from the calendar; they arrive as explicit
/// [`HolidayType::Weekend`] records like any other holiday.
///
/// # Example
///
/// ```
/// use worklog_engine::models::HolidayType;
///
/// let json = serde_json::to_string(&HolidayType::PublicHoliday).unwrap();
/// assert_eq!(json, "\"PUBLIC_HOLIDAY\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayType {
    /// A national public holiday.
    PublicHoliday,
    /// A Saturday or Sunday.
    Weekend,
    /// A company-specific holiday (e.g. year-end closure).
    SpecialHoliday,
    /// A day of paid leave taken by the employee.
    PaidLeave,
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayType::PublicHoliday => write!(f, "Public holiday"),
            HolidayType::Weekend => write!(f, "Weekend"),
            HolidayType::SpecialHoliday => write!(f, "Special holiday"),
            HolidayType::PaidLeave => write!(f, "Paid leave"),
        }
    }
}

/// A single non-working day in the holiday calendar.
///
/// At most one record exists per calendar date; the storage layer enforces
/// that, not the calculations.
///
/// # Example
///
/// ```
/// use worklog_engine::models::{HolidayRecord, HolidayType};
/// use chrono::NaiveDate;
///
/// let holiday = HolidayRecord {
///     date: NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(),
///     name: "Children's Day".to_string(),
///     holiday_type: HolidayType::PublicHoliday,
///     fiscal_year: "FY25".to_string(),
/// };
/// assert!(holiday.is_in_month(2025, 5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The display name of the holiday.
    pub name: String,
    /// The kind of holiday.
    #[serde(rename = "type")]
    pub holiday_type: HolidayType,
    /// The fiscal year label this record was filed under (e.g. "FY25").
    pub fiscal_year: String,
}

impl HolidayRecord {
    /// Checks whether the holiday falls in the given calendar month.
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}
