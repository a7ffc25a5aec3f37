//! Project work-hours models.
//!
//! These are the rows behind the per-project, per-month work-hours sheet:
//! projects, their monthly estimated/actual/overtime hours, and the monthly
//! vacation hours taken.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A project that hours are booked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: String,
    /// Display name of the project.
    pub name: String,
}

/// One project's hours for one month of a fiscal year.
///
/// Unique per `(project_id, fiscal_year, month)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHoursRecord {
    /// The project these hours belong to.
    pub project_id: String,
    /// The fiscal year label (e.g. "FY25").
    pub fiscal_year: String,
    /// The calendar month number (1-12).
    pub month: u32,
    /// Hours planned for the month.
    #[serde(default)]
    pub estimated_hours: Decimal,
    /// Hours actually worked in the month.
    #[serde(default)]
    pub actual_hours: Decimal,
    /// Overtime hours recorded for the month.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Working days recorded with the row, if any.
    #[serde(default)]
    pub working_days: Option<u32>,
}

/// Vacation hours taken in one month of a fiscal year.
///
/// Unique per `(fiscal_year, month)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationHoursRecord {
    /// The fiscal year label (e.g. "FY25").
    pub fiscal_year: String,
    /// The calendar month number (1-12).
    pub month: u32,
    /// Vacation hours taken.
    pub hours: Decimal,
}
