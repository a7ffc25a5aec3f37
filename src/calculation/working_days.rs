//! Working-day counts per fiscal month.
//!
//! A month's working days are its calendar days minus the holiday records that
//! fall in it. Weekends are not derived from the calendar: they only reduce the
//! count when they arrive as `WEEKEND` holiday records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::HolidayRecord;

use super::fiscal_year::FiscalYear;

/// Working days for one month of a fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWorkingDays {
    /// The calendar year the month falls in.
    pub calendar_year: i32,
    /// The calendar month number (1-12).
    pub month: u32,
    /// Number of days in the calendar month.
    pub calendar_days: u32,
    /// Number of holiday records dated in the month.
    pub holiday_count: u32,
    /// `calendar_days - holiday_count`, floored at zero.
    pub working_days: u32,
}

/// Working days for all twelve months of a fiscal year, in fiscal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDaysTable {
    /// The fiscal year the table covers.
    pub fiscal_year: FiscalYear,
    /// One entry per fiscal month, April first.
    pub months: Vec<MonthWorkingDays>,
}

impl WorkingDaysTable {
    /// Working days for a calendar month number, if it is in the table.
    pub fn get(&self, month: u32) -> Option<u32> {
        self.months
            .iter()
            .find(|m| m.month == month)
            .map(|m| m.working_days)
    }

    /// Month number to working days.
    pub fn as_map(&self) -> BTreeMap<u32, u32> {
        self.months
            .iter()
            .map(|m| (m.month, m.working_days))
            .collect()
    }

    /// Sum of working days over the year.
    pub fn total(&self) -> u32 {
        self.months.iter().map(|m| m.working_days).sum()
    }
}

/// Returns the number of days in a calendar month.
///
/// Returns 0 for a month number outside 1-12.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2025, 2), 28);
/// assert_eq!(days_in_month(2025, 4), 30);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next_first)) => {
            u32::try_from((next_first - first).num_days()).unwrap_or(0)
        }
        _ => 0,
    }
}

/// Calculates working days for every month of a fiscal year.
///
/// Holiday records dated outside the fiscal year are ignored. Each month's
/// count is `max(0, calendar_days - holidays_in_month)`.
///
/// # Arguments
///
/// * `fiscal_year` - The fiscal year to tabulate
/// * `holidays` - Holiday records; weekends must be included as `WEEKEND` records
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::{calculate_working_days, FiscalYear};
/// use worklog_engine::models::{HolidayRecord, HolidayType};
/// use chrono::NaiveDate;
///
/// let holidays = vec![HolidayRecord {
///     date: NaiveDate::from_ymd_opt(2025, 4, 29).unwrap(),
///     name: "Showa Day".to_string(),
///     holiday_type: HolidayType::PublicHoliday,
///     fiscal_year: "FY25".to_string(),
/// }];
///
/// let table = calculate_working_days(FiscalYear::new(2025), &holidays);
/// assert_eq!(table.get(4), Some(29));
/// assert_eq!(table.get(5), Some(31));
/// ```
pub fn calculate_working_days(
    fiscal_year: FiscalYear,
    holidays: &[HolidayRecord],
) -> WorkingDaysTable {
    let months = fiscal_year
        .months()
        .map(|(calendar_year, month)| {
            let calendar_days = days_in_month(calendar_year, month);
            let holiday_count = holidays
                .iter()
                .filter(|h| h.is_in_month(calendar_year, month))
                .count() as u32;

            MonthWorkingDays {
                calendar_year,
                month,
                calendar_days,
                holiday_count,
                working_days: calendar_days.saturating_sub(holiday_count),
            }
        })
        .collect();

    WorkingDaysTable {
        fiscal_year,
        months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HolidayType;
    use chrono::{Datelike, Weekday};

    fn holiday(date: NaiveDate, holiday_type: HolidayType) -> HolidayRecord {
        HolidayRecord {
            date,
            name: holiday_type.to_string(),
            holiday_type,
            fiscal_year: "FY25".to_string(),
        }
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_thirty_day_month_with_four_holidays() {
        let holidays: Vec<HolidayRecord> = [5, 12, 19, 26]
            .iter()
            .map(|&d| holiday(ymd(2025, 6, d), HolidayType::Weekend))
            .collect();

        let table = calculate_working_days(FiscalYear::new(2025), &holidays);
        assert_eq!(table.get(6), Some(26));
    }

    #[test]
    fn test_more_holidays_than_days_clamps_to_zero() {
        // Duplicate records are not rejected here; the count still never goes negative
        let holidays: Vec<HolidayRecord> = (0..35)
            .map(|i| holiday(ymd(2025, 9, (i % 30) + 1), HolidayType::SpecialHoliday))
            .collect();

        let table = calculate_working_days(FiscalYear::new(2025), &holidays);
        let september = &table.months[5];
        assert_eq!(september.month, 9);
        assert_eq!(september.holiday_count, 35);
        assert_eq!(september.working_days, 0);
    }

    #[test]
    fn test_no_holidays_counts_every_calendar_day() {
        let table = calculate_working_days(FiscalYear::new(2023), &[]);
        assert_eq!(table.get(4), Some(30));
        assert_eq!(table.get(2), Some(29)); // Feb 2024 is a leap month
        assert_eq!(table.total(), 366);
    }

    #[test]
    fn test_months_are_in_fiscal_order() {
        let table = calculate_working_days(FiscalYear::new(2025), &[]);
        let order: Vec<u32> = table.months.iter().map(|m| m.month).collect();
        assert_eq!(order, vec![4, 5, 6, 7, 8, 9, 10, 11, 12, 1, 2, 3]);
        assert_eq!(table.months[9].calendar_year, 2026);
    }

    #[test]
    fn test_holidays_outside_fiscal_year_are_ignored() {
        let holidays = vec![
            holiday(ymd(2025, 3, 20), HolidayType::PublicHoliday), // FY24
            holiday(ymd(2026, 4, 29), HolidayType::PublicHoliday), // FY26
            holiday(ymd(2026, 3, 20), HolidayType::PublicHoliday), // FY25
        ];

        let table = calculate_working_days(FiscalYear::new(2025), &holidays);
        assert_eq!(table.get(3), Some(30));
        assert_eq!(table.get(4), Some(30));
    }

    #[test]
    fn test_weekend_records_drive_weekday_count() {
        let weekends: Vec<HolidayRecord> = (1..=31)
            .map(|d| ymd(2025, 7, d))
            .filter(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
            .map(|d| holiday(d, HolidayType::Weekend))
            .collect();
        let mut holidays = weekends;
        holidays.push(holiday(ymd(2025, 7, 21), HolidayType::PublicHoliday));

        let table = calculate_working_days(FiscalYear::new(2025), &holidays);
        // July 2025: 23 weekdays, minus Marine Day
        assert_eq!(table.get(7), Some(22));
    }

    #[test]
    fn test_as_map_has_every_month() {
        let table = calculate_working_days(FiscalYear::new(2025), &[]);
        let map = table.as_map();
        assert_eq!(map.len(), 12);
        assert_eq!(map[&12], 31);
    }

    #[test]
    fn test_days_in_month_invalid_month() {
        assert_eq!(days_in_month(2025, 0), 0);
        assert_eq!(days_in_month(2025, 13), 0);
    }
}
