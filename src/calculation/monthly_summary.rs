//! Monthly attendance summary.
//!
//! Turns a month of attendance records into worked days, worked hours, the
//! standard and expected hours for the month, overtime, and a linear forecast
//! of where the month will end up.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::AttendanceRecord;

use super::series::{checked_mul, checked_sub, linear_forecast, percentage_of};

/// Standard working hours per working day (7 hours 30 minutes).
pub const DEFAULT_STANDARD_HOURS_PER_DAY: Decimal = Decimal::from_parts(75, 0, 0, false, 1);

/// Derived figures for one month of attendance.
///
/// Fields that depend on an unknown working-day count, or on a zero
/// denominator, are `None` rather than a sentinel value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Records with both clock-in and clock-out.
    pub worked_days: u32,
    /// Sum of worked minutes over complete records. May be negative for
    /// malformed data.
    pub total_minutes: i64,
    /// `working_days * standard_hours_per_day`.
    pub standard_hours: Option<Decimal>,
    /// `standard_hours - vacation_hours`.
    pub expected_hours: Option<Decimal>,
    /// `total_minutes / 60`.
    pub actual_hours: Decimal,
    /// `actual_hours - expected_hours`.
    pub overtime_hours: Option<Decimal>,
    /// `actual_hours / worked_days * working_days`.
    pub forecast_actual_hours: Option<Decimal>,
    /// `forecast_actual_hours - expected_hours`.
    pub forecast_overtime_hours: Option<Decimal>,
    /// Share of the working days already worked, as a percentage.
    pub progress_percent: Option<Decimal>,
}

/// Calculates the monthly summary for a set of attendance records.
///
/// # Arguments
///
/// * `records` - Attendance records for the month
/// * `working_days` - Working days in the month, if known
/// * `vacation_hours` - Vacation hours taken in the month
/// * `standard_hours_per_day` - Hours per working day (normally
///   [`DEFAULT_STANDARD_HOURS_PER_DAY`])
///
/// # Errors
///
/// Returns [`crate::error::EngineError::ArithmeticOverflow`] when the hour
/// figures leave the Decimal range.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::{calculate_monthly_summary, DEFAULT_STANDARD_HOURS_PER_DAY};
/// use worklog_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     clock_in: Some(NaiveDateTime::parse_from_str("2025-04-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
///     clock_out: Some(NaiveDateTime::parse_from_str("2025-04-01 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
///     break_minutes: 60,
/// };
///
/// let summary = calculate_monthly_summary(
///     &[record],
///     Some(20),
///     Decimal::new(8, 0),
///     DEFAULT_STANDARD_HOURS_PER_DAY,
/// )
/// .unwrap();
///
/// assert_eq!(summary.total_minutes, 480);
/// assert_eq!(summary.standard_hours, Some(Decimal::new(150, 0)));
/// assert_eq!(summary.expected_hours, Some(Decimal::new(142, 0)));
/// assert_eq!(summary.actual_hours, Decimal::new(8, 0));
/// assert_eq!(summary.overtime_hours, Some(Decimal::new(-134, 0)));
/// ```
pub fn calculate_monthly_summary(
    records: &[AttendanceRecord],
    working_days: Option<u32>,
    vacation_hours: Decimal,
    standard_hours_per_day: Decimal,
) -> EngineResult<MonthlySummary> {
    let worked: Vec<i64> = records.iter().filter_map(|r| r.worked_minutes()).collect();
    let worked_days = worked.len() as u32;
    let total_minutes: i64 = worked.iter().sum();

    let actual_hours = Decimal::new(total_minutes, 0) / Decimal::new(60, 0);

    let standard_hours = working_days
        .map(|days| checked_mul(Decimal::from(days), standard_hours_per_day, "standard hours"))
        .transpose()?;
    let expected_hours = standard_hours
        .map(|standard| checked_sub(standard, vacation_hours, "expected hours"))
        .transpose()?;
    let overtime_hours = expected_hours
        .map(|expected| checked_sub(actual_hours, expected, "overtime hours"))
        .transpose()?;

    let forecast_actual_hours = match working_days {
        Some(days) => linear_forecast(actual_hours, worked_days, days)?,
        None => None,
    };
    let forecast_overtime_hours = match (forecast_actual_hours, expected_hours) {
        (Some(forecast), Some(expected)) => {
            Some(checked_sub(forecast, expected, "forecast overtime hours")?)
        }
        _ => None,
    };

    let progress_percent = working_days
        .filter(|&days| days > 0)
        .map(|days| percentage_of(Decimal::from(worked_days), Decimal::from(days)))
        .transpose()?;

    Ok(MonthlySummary {
        worked_days,
        total_minutes,
        standard_hours,
        expected_hours,
        actual_hours,
        overtime_hours,
        forecast_actual_hours,
        forecast_overtime_hours,
        progress_percent,
    })
}
