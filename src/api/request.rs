//! Request types for the worklog engine API.
//!
//! Each endpoint takes one JSON body. Optional fields default so clients can
//! omit them.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceRecord, HolidayRecord, Project, TimeEntryRecord, VacationHoursRecord,
    WorkHoursRecord, WorkTypeSeries,
};

/// Request body for `/fiscal-year`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiscalYearRequest {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
}

/// Request body for `/working-days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysRequest {
    /// Fiscal year label, e.g. "FY25".
    pub fiscal_year: String,
    /// Holiday records; every record dated in a month counts against it.
    #[serde(default)]
    pub holidays: Vec<HolidayRecord>,
}

/// Request body for `/monthly-summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummaryRequest {
    /// The month's attendance records.
    pub records: Vec<AttendanceRecord>,
    /// Working days in the month, if known.
    #[serde(default)]
    pub working_days: Option<u32>,
    /// Vacation hours taken in the month.
    #[serde(default)]
    pub vacation_hours: Option<Decimal>,
}

/// Request body for `/wbs-summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WbsSummaryRequest {
    /// Time entries to aggregate.
    pub entries: Vec<TimeEntryRecord>,
}

/// Request body for `/work-type-ratios`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkTypeRatioRequest {
    /// The period's days axis.
    pub days: Vec<NaiveDate>,
    /// Daily PV/AC and BAC per work type.
    pub work_types: Vec<WorkTypeSeries>,
    /// Snapshot reference date; the server's current date when omitted.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Request body for `/kadmin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KadminRequest {
    /// Fiscal year label, e.g. "FY25". Rows for other years are ignored.
    pub fiscal_year: String,
    /// Projects shown on the sheet.
    pub projects: Vec<Project>,
    /// Per-project, per-month hours rows.
    #[serde(default)]
    pub work_hours: Vec<WorkHoursRecord>,
    /// Per-month vacation rows.
    #[serde(default)]
    pub vacation_hours: Vec<VacationHoursRecord>,
    /// Working days per month, overriding the configured defaults.
    #[serde(default)]
    pub working_days: BTreeMap<u32, u32>,
}

/// Request body for `/weekly-report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyReportRequest {
    /// Free-form report text.
    pub text: String,
}

/// Request body for `/time-entries/duration`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryDurationRequest {
    /// When the entry started.
    pub start_time: DateTime<Utc>,
    /// When the entry ended; omitted to close it at the current time.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
}

/// Request body for `/attendance/csv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceCsvRequest {
    /// Records to export, in output order.
    pub records: Vec<AttendanceRecord>,
}
