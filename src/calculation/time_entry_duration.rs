//! Time entry duration and the open/closed transition.

use chrono::{DateTime, Utc};

use crate::error::{EngineError, EngineResult};
use crate::models::{TimeEntryRecord, TimeEntryUpdate};

/// Whole seconds from `start` to `end`, rounded toward negative infinity.
///
/// Negative spans are returned as-is.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::elapsed_seconds;
/// use chrono::{Duration, TimeZone, Utc};
///
/// let start = Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap();
/// assert_eq!(elapsed_seconds(start, start + Duration::milliseconds(90_999)), 90);
/// assert_eq!(elapsed_seconds(start, start - Duration::milliseconds(500)), -1);
/// ```
pub fn elapsed_seconds(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_milliseconds().div_euclid(1000)
}

/// Closes an open entry at `end`, computing its duration.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeEntry`] if the entry is already closed.
pub fn close_time_entry(
    entry: &TimeEntryRecord,
    end: DateTime<Utc>,
) -> EngineResult<TimeEntryRecord> {
    if !entry.is_open() {
        return Err(EngineError::InvalidTimeEntry {
            entry_id: entry.id.clone(),
            message: "entry is already closed".to_string(),
        });
    }

    let mut closed = entry.clone();
    closed.end_time = Some(end);
    closed.duration = Some(elapsed_seconds(entry.start_time, end));
    Ok(closed)
}

/// Closes an open entry at the current time.
pub fn close_time_entry_now(entry: &TimeEntryRecord) -> EngineResult<TimeEntryRecord> {
    close_time_entry(entry, Utc::now())
}

/// Applies a start and/or end time edit to an entry.
///
/// - A new start on a closed entry recomputes the duration against its
///   existing end.
/// - A new end sets the end (closing an open entry) and recomputes.
/// - A new start on an open entry only moves the start.
///
/// # Errors
///
/// Returns [`EngineError::EmptyUpdate`] when neither time is set.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::apply_time_entry_update;
/// use worklog_engine::models::{TimeEntryRecord, TimeEntryUpdate};
/// use chrono::{TimeZone, Utc};
///
/// let entry = TimeEntryRecord {
///     id: "te_001".to_string(),
///     start_time: Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap(),
///     end_time: Some(Utc.with_ymd_and_hms(2025, 4, 1, 10, 0, 0).unwrap()),
///     duration: Some(3600),
///     project_id: None,
///     project_name: None,
///     wbs_id: None,
///     wbs_name: None,
/// };
///
/// let update = TimeEntryUpdate {
///     start_time: Some(Utc.with_ymd_and_hms(2025, 4, 1, 9, 30, 0).unwrap()),
///     end_time: None,
/// };
/// let edited = apply_time_entry_update(&entry, &update).unwrap();
/// assert_eq!(edited.duration, Some(1800));
/// ```
pub fn apply_time_entry_update(
    entry: &TimeEntryRecord,
    update: &TimeEntryUpdate,
) -> EngineResult<TimeEntryRecord> {
    if update.is_empty() {
        return Err(EngineError::EmptyUpdate {
            entity: "time entry".to_string(),
            id: entry.id.clone(),
        });
    }

    let mut edited = entry.clone();
    if let Some(start) = update.start_time {
        edited.start_time = start;
    }
    if let Some(end) = update.end_time {
        edited.end_time = Some(end);
    }

    edited.duration = edited
        .end_time
        .map(|end| elapsed_seconds(edited.start_time, end));

    Ok(edited)
}
