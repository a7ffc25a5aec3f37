//! Project work-hours sheet for a fiscal year.
//!
//! The sheet holds each project's monthly estimated, actual and overtime hours
//! together with monthly vacation hours, and derives row/column totals plus
//! the overtime implied by standard hours. Totals use checked Decimal
//! arithmetic and fail with
//! [`ArithmeticOverflow`](crate::error::EngineError::ArithmeticOverflow) rather than
//! panic.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Project, VacationHoursRecord, WorkHoursRecord};

use super::fiscal_year::FISCAL_MONTHS;
use super::series::{checked_mul, checked_sub, checked_sum};

/// Which hours column of a work-hours row to total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursField {
    /// Planned hours.
    EstimatedHours,
    /// Worked hours.
    ActualHours,
    /// Recorded overtime hours.
    OvertimeHours,
}

impl HoursField {
    /// Reads this field from a row.
    pub fn value(&self, row: &WorkHoursRecord) -> Decimal {
        match self {
            HoursField::EstimatedHours => row.estimated_hours,
            HoursField::ActualHours => row.actual_hours,
            HoursField::OvertimeHours => row.overtime_hours,
        }
    }
}

/// Totals for one project across the year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectYearTotals {
    /// The project id.
    pub project_id: String,
    /// The project name.
    pub project_name: String,
    /// Sum of estimated hours over the year.
    pub estimated_hours: Decimal,
    /// Sum of actual hours over the year.
    pub actual_hours: Decimal,
    /// Sum of recorded overtime hours over the year.
    pub overtime_hours: Decimal,
}

/// Totals for one month across all projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotals {
    /// The calendar month number.
    pub month: u32,
    /// Sum of estimated hours over all projects.
    pub estimated_hours: Decimal,
    /// Sum of actual hours over all projects.
    pub actual_hours: Decimal,
    /// Sum of recorded overtime hours over all projects.
    pub overtime_hours: Decimal,
    /// Working days used for the month.
    pub working_days: u32,
    /// `working_days * standard_hours_per_day`.
    pub standard_hours: Decimal,
    /// Vacation hours taken in the month.
    pub vacation_hours: Decimal,
    /// `actual_hours - (standard_hours - vacation_hours)`.
    pub derived_overtime_hours: Decimal,
}

/// The full sheet summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KadminSummary {
    /// One row per project, in input order.
    pub projects: Vec<ProjectYearTotals>,
    /// One row per month, in fiscal order.
    pub months: Vec<MonthTotals>,
    /// Sum of estimated hours over all projects and months.
    pub grand_estimated_hours: Decimal,
    /// Sum of actual hours over all projects and months.
    pub grand_actual_hours: Decimal,
    /// Sum of recorded overtime hours over all projects and months.
    pub grand_overtime_hours: Decimal,
    /// Sum of vacation hours over the year.
    pub vacation_total: Decimal,
    /// Sum of standard hours over the year.
    pub year_standard_hours: Decimal,
    /// Sum of derived overtime over the year.
    pub year_overtime_hours: Decimal,
}

/// A fiscal year's project work-hours, indexed for totals.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use worklog_engine::calculation::{HoursField, KadminSheet, DEFAULT_STANDARD_HOURS_PER_DAY};
/// use worklog_engine::models::{Project, WorkHoursRecord};
/// use rust_decimal::Decimal;
///
/// let projects = vec![Project { id: "P1".to_string(), name: "Portal".to_string() }];
/// let rows = vec![WorkHoursRecord {
///     project_id: "P1".to_string(),
///     fiscal_year: "FY25".to_string(),
///     month: 4,
///     estimated_hours: Decimal::new(160, 0),
///     actual_hours: Decimal::new(170, 0),
///     overtime_hours: Decimal::ZERO,
///     working_days: None,
/// }];
/// let defaults: BTreeMap<u32, u32> = [(4, 20)].into_iter().collect();
///
/// let sheet = KadminSheet::new(
///     &projects,
///     &rows,
///     &[],
///     &BTreeMap::new(),
///     &defaults,
///     DEFAULT_STANDARD_HOURS_PER_DAY,
/// );
///
/// assert_eq!(sheet.year_total("P1", HoursField::ActualHours).unwrap(), Decimal::new(170, 0));
/// assert_eq!(sheet.overtime_hours(4).unwrap(), Decimal::new(20, 0));
/// ```
#[derive(Debug, Clone)]
pub struct KadminSheet {
    projects: Vec<Project>,
    rows: HashMap<(String, u32), WorkHoursRecord>,
    vacation: HashMap<u32, Decimal>,
    working_days: BTreeMap<u32, u32>,
    standard_hours_per_day: Decimal,
}

impl KadminSheet {
    /// Builds a sheet from its rows.
    ///
    /// # Arguments
    ///
    /// * `projects` - Projects shown on the sheet
    /// * `work_hours` - Sparse per-project, per-month rows
    /// * `vacation_hours` - Per-month vacation rows
    /// * `working_days_overrides` - Explicit working days per month
    /// * `default_working_days` - Fallback working days per month
    /// * `standard_hours_per_day` - Hours per working day
    ///
    /// Later rows for the same key replace earlier ones. Working days come
    /// from the override, then the default table, then zero.
    pub fn new(
        projects: &[Project],
        work_hours: &[WorkHoursRecord],
        vacation_hours: &[VacationHoursRecord],
        working_days_overrides: &BTreeMap<u32, u32>,
        default_working_days: &BTreeMap<u32, u32>,
        standard_hours_per_day: Decimal,
    ) -> Self {
        let rows = work_hours
            .iter()
            .map(|row| ((row.project_id.clone(), row.month), row.clone()))
            .collect();

        let vacation = vacation_hours
            .iter()
            .map(|row| (row.month, row.hours))
            .collect();

        let working_days = FISCAL_MONTHS
            .iter()
            .map(|month| {
                let days = working_days_overrides
                    .get(month)
                    .or_else(|| default_working_days.get(month))
                    .copied()
                    .unwrap_or(0);
                (*month, days)
            })
            .collect();

        Self {
            projects: projects.to_vec(),
            rows,
            vacation,
            working_days,
            standard_hours_per_day,
        }
    }

    fn cell(&self, project_id: &str, month: u32, field: HoursField) -> Decimal {
        self.rows
            .get(&(project_id.to_string(), month))
            .map(|row| field.value(row))
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of `field` over the twelve months for one project.
    pub fn year_total(&self, project_id: &str, field: HoursField) -> EngineResult<Decimal> {
        checked_sum(
            FISCAL_MONTHS
                .iter()
                .map(|&month| self.cell(project_id, month, field)),
        )
    }

    /// Sum of `field` over all projects for one month.
    pub fn month_total(&self, month: u32, field: HoursField) -> EngineResult<Decimal> {
        checked_sum(
            self.projects
                .iter()
                .map(|project| self.cell(&project.id, month, field)),
        )
    }

    /// Sum of [`Self::month_total`] over the twelve months.
    pub fn grand_total(&self, field: HoursField) -> EngineResult<Decimal> {
        let months = FISCAL_MONTHS
            .iter()
            .map(|&month| self.month_total(month, field))
            .collect::<EngineResult<Vec<_>>>()?;
        checked_sum(months)
    }

    /// Vacation hours taken in a month.
    pub fn vacation_hours(&self, month: u32) -> Decimal {
        self.vacation.get(&month).copied().unwrap_or(Decimal::ZERO)
    }

    /// Sum of vacation hours over the twelve months.
    pub fn vacation_total(&self) -> EngineResult<Decimal> {
        checked_sum(FISCAL_MONTHS.iter().map(|&month| self.vacation_hours(month)))
    }

    /// Working days used for a month.
    pub fn working_days(&self, month: u32) -> u32 {
        self.working_days.get(&month).copied().unwrap_or(0)
    }

    /// `working_days(month) * standard_hours_per_day`.
    pub fn standard_hours(&self, month: u32) -> EngineResult<Decimal> {
        checked_mul(
            Decimal::from(self.working_days(month)),
            self.standard_hours_per_day,
            "standard hours",
        )
    }

    /// Sum of standard hours over the twelve months.
    pub fn year_standard_hours(&self) -> EngineResult<Decimal> {
        let months = FISCAL_MONTHS
            .iter()
            .map(|&month| self.standard_hours(month))
            .collect::<EngineResult<Vec<_>>>()?;
        checked_sum(months)
    }

    /// Actual hours beyond the month's standard hours less vacation.
    pub fn overtime_hours(&self, month: u32) -> EngineResult<Decimal> {
        let expected = checked_sub(
            self.standard_hours(month)?,
            self.vacation_hours(month),
            "expected hours",
        )?;
        checked_sub(
            self.month_total(month, HoursField::ActualHours)?,
            expected,
            "overtime hours",
        )
    }

    /// Sum of [`Self::overtime_hours`] over the twelve months.
    pub fn year_overtime_hours(&self) -> EngineResult<Decimal> {
        let months = FISCAL_MONTHS
            .iter()
            .map(|&month| self.overtime_hours(month))
            .collect::<EngineResult<Vec<_>>>()?;
        checked_sum(months)
    }

    /// Produces the full set of row, column and grand totals.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::ArithmeticOverflow`] if any total
    /// leaves the Decimal range.
    pub fn summarize(&self) -> EngineResult<KadminSummary> {
        let projects = self
            .projects
            .iter()
            .map(|project| {
                Ok(ProjectYearTotals {
                    project_id: project.id.clone(),
                    project_name: project.name.clone(),
                    estimated_hours: self.year_total(&project.id, HoursField::EstimatedHours)?,
                    actual_hours: self.year_total(&project.id, HoursField::ActualHours)?,
                    overtime_hours: self.year_total(&project.id, HoursField::OvertimeHours)?,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        let months = FISCAL_MONTHS
            .iter()
            .map(|&month| {
                Ok(MonthTotals {
                    month,
                    estimated_hours: self.month_total(month, HoursField::EstimatedHours)?,
                    actual_hours: self.month_total(month, HoursField::ActualHours)?,
                    overtime_hours: self.month_total(month, HoursField::OvertimeHours)?,
                    working_days: self.working_days(month),
                    standard_hours: self.standard_hours(month)?,
                    vacation_hours: self.vacation_hours(month),
                    derived_overtime_hours: self.overtime_hours(month)?,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(KadminSummary {
            projects,
            months,
            grand_estimated_hours: self.grand_total(HoursField::EstimatedHours)?,
            grand_actual_hours: self.grand_total(HoursField::ActualHours)?,
            grand_overtime_hours: self.grand_total(HoursField::OvertimeHours)?,
            vacation_total: self.vacation_total()?,
            year_standard_hours: self.year_standard_hours()?,
            year_overtime_hours: self.year_overtime_hours()?,
        })
    }
}
