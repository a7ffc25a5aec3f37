//! Attendance record model.
//!
//! This module defines the [`AttendanceRecord`] struct representing a single
//! day's clock-in / clock-out entry.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single day's attendance entry.
///
/// Either clock time may be missing while the day is in progress or when the
/// employee forgot to clock. Only records with both times count as worked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The attendance date.
    pub date: NaiveDate,
    /// The clock-in time, if recorded.
    #[serde(default)]
    pub clock_in: Option<NaiveDateTime>,
    /// The clock-out time, if recorded.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
    /// Unpaid break length in minutes.
    #[serde(default)]
    pub break_minutes: u32,
}

impl AttendanceRecord {
    /// Returns `true` when both clock-in and clock-out are present.
    pub fn is_complete(&self) -> bool {
        self.clock_in.is_some() && self.clock_out.is_some()
    }

    /// Calculates the worked minutes for the day.
    ///
    /// Worked minutes are the clocked span minus the break. The result is not
    /// clamped, so malformed data (clock-out before clock-in, or a break longer
    /// than the span) produces a negative value.
    ///
    /// # Returns
    ///
    /// `None` unless both clock times are present.
    ///
    /// # Examples
    ///
    /// ```
    /// use worklog_engine::models::AttendanceRecord;
    /// use chrono::{NaiveDate, NaiveDateTime};
    ///
    /// let record = AttendanceRecord {
    ///     date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
    ///     clock_in: Some(NaiveDateTime::parse_from_str("2025-04-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     clock_out: Some(NaiveDateTime::parse_from_str("2025-04-01 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     break_minutes: 60,
    /// };
    /// assert_eq!(record.worked_minutes(), Some(480));
    /// ```
    pub fn worked_minutes(&self) -> Option<i64> {
        match (self.clock_in, self.clock_out) {
            (Some(clock_in), Some(clock_out)) => {
                Some((clock_out - clock_in).num_minutes() - i64::from(self.break_minutes))
            }
            _ => None,
        }
    }

    /// Worked minutes converted to hours, or `None` for incomplete records.
    pub fn worked_hours(&self) -> Option<Decimal> {
        self.worked_minutes()
            .map(|minutes| Decimal::new(minutes, 0) / Decimal::new(60, 0))
    }
}
