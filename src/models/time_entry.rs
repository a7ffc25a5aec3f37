//! Time entry model.
//!
//! A time entry is a tracked span of work, optionally tagged with a project and
//! a WBS (work breakdown structure) item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a time entry.
///
/// `Open` moves to `Closed` once an end time is set; entries are never reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeEntryStatus {
    /// The timer is still running (no end time).
    Open,
    /// The entry has an end time and a computed duration.
    Closed,
}

/// A tracked span of work.
///
/// At most one entry system-wide may be open at a time. That rule belongs to
/// the storage layer and is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryRecord {
    /// Unique identifier for the entry.
    pub id: String,
    /// When tracking started.
    pub start_time: DateTime<Utc>,
    /// When tracking stopped; `None` while the entry is open.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// Elapsed whole seconds; `None` until the entry is closed.
    #[serde(default)]
    pub duration: Option<i64>,
    /// The project the entry is booked against.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Display name of the project, when joined.
    #[serde(default)]
    pub project_name: Option<String>,
    /// The WBS item the entry is booked against.
    #[serde(default)]
    pub wbs_id: Option<String>,
    /// Display name of the WBS item, when joined.
    #[serde(default)]
    pub wbs_name: Option<String>,
}

impl TimeEntryRecord {
    /// Returns the lifecycle state derived from the end time.
    pub fn status(&self) -> TimeEntryStatus {
        if self.end_time.is_some() {
            TimeEntryStatus::Closed
        } else {
            TimeEntryStatus::Open
        }
    }

    /// Returns `true` while the entry has no end time.
    pub fn is_open(&self) -> bool {
        self.status() == TimeEntryStatus::Open
    }
}

/// An edit to an existing time entry.
///
/// An update with neither field set is rejected. When both are set, both are
/// applied and the duration is computed from the new pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryUpdate {
    /// A replacement start time.
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    /// A replacement end time (closes the entry if it was open).
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
}

impl TimeEntryUpdate {
    /// Returns `true` when the update carries no fields.
    pub fn is_empty(&self) -> bool {
        self.start_time.is_none() && self.end_time.is_none()
    }
}
