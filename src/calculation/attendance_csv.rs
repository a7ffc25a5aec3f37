//! Attendance export as CSV.

use chrono::NaiveDateTime;
use rust_decimal::RoundingStrategy;

use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceRecord;

const HEADER: [&str; 6] = [
    "date",
    "clock_in",
    "clock_out",
    "break_minutes",
    "worked_minutes",
    "worked_hours",
];

fn format_clock(time: Option<NaiveDateTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

fn export_error(err: impl std::fmt::Display) -> EngineError {
    EngineError::ExportError {
        message: err.to_string(),
    }
}

/// Writes attendance records as CSV, one row per record in input order.
///
/// Clock times are written as `HH:MM`. Worked minutes and hours are left
/// empty for incomplete records; hours are rounded to two places.
///
/// # Errors
///
/// Returns [`EngineError::ExportError`] if the CSV writer fails.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::export_attendance_csv;
/// use worklog_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
/// let record = AttendanceRecord {
///     date,
///     clock_in: date.and_hms_opt(9, 0, 0),
///     clock_out: date.and_hms_opt(17, 30, 0),
///     break_minutes: 45,
/// };
///
/// let csv = export_attendance_csv(&[record]).unwrap();
/// assert_eq!(
///     csv,
///     "date,clock_in,clock_out,break_minutes,worked_minutes,worked_hours\n\
///      2025-04-01,09:00,17:30,45,465,7.75\n"
/// );
/// ```
pub fn export_attendance_csv(records: &[AttendanceRecord]) -> EngineResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER).map_err(export_error)?;

    for record in records {
        let worked_minutes = record
            .worked_minutes()
            .map(|m| m.to_string())
            .unwrap_or_default();
        let worked_hours = record
            .worked_hours()
            .map(|h| {
                h.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                    .normalize()
                    .to_string()
            })
            .unwrap_or_default();

        writer
            .write_record([
                record.date.format("%Y-%m-%d").to_string(),
                format_clock(record.clock_in),
                format_clock(record.clock_out),
                record.break_minutes.to_string(),
                worked_minutes,
                worked_hours,
            ])
            .map_err(export_error)?;
    }

    let bytes = writer.into_inner().map_err(export_error)?;
    String::from_utf8(bytes).map_err(export_error)
}
