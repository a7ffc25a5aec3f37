//! Core data models for the worklog engine.
//!
//! These are plain value records supplied by the caller. The calculations read
//! them and never mutate them.

mod attendance;
mod holiday;
mod task;
mod time_entry;
mod work_hours;
mod work_type;

pub use attendance::AttendanceRecord;
pub use holiday::{HolidayRecord, HolidayType};
pub use task::{Task, TaskStatus, TaskUpdate};
pub use time_entry::{TimeEntryRecord, TimeEntryStatus, TimeEntryUpdate};
pub use work_hours::{Project, VacationHoursRecord, WorkHoursRecord};
pub use work_type::WorkTypeSeries;
