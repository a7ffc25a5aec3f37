//! Calculation logic for the worklog engine.
//!
//! Every function here is a pure computation over caller-supplied records:
//! fiscal year labels, working days per month, monthly attendance summaries,
//! WBS time aggregation, work-type PV/AC/BAC ratios, the project work-hours
//! (Kadmin) sheet, weekly report formatting, time entry durations, and
//! attendance CSV export.

mod attendance_csv;
mod fiscal_year;
mod kadmin;
mod monthly_summary;
mod series;
mod time_entry_duration;
mod wbs_summary;
mod weekly_report;
mod work_type_ratio;
mod working_days;

pub use attendance_csv::export_attendance_csv;
pub use fiscal_year::{FISCAL_MONTHS, FISCAL_YEAR_START_MONTH, FiscalYear, fiscal_year_label};
pub use kadmin::{HoursField, KadminSheet, KadminSummary, MonthTotals, ProjectYearTotals};
pub use monthly_summary::{
    DEFAULT_STANDARD_HOURS_PER_DAY, MonthlySummary, calculate_monthly_summary,
};
pub use series::{
    checked_sum, cumulative_sum, daily_rate, linear_forecast, percentage_of, sum_series,
};
pub use time_entry_duration::{
    apply_time_entry_update, close_time_entry, close_time_entry_now, elapsed_seconds,
};
pub use wbs_summary::{
    NO_PROJECT_LABEL, NO_WBS_LABEL, WbsSummary, aggregate_by_wbs, seconds_to_hours,
    wbs_group_key,
};
pub use weekly_report::{
    WEEKLY_REPORT_COLUMNS, char_display_width, display_width, format_weekly_report,
    to_full_width, wrap_text, wrap_text_at_36_columns,
};
pub use work_type_ratio::{
    WorkTypeRatio, WorkTypeRatioReport, WorkTypeTotals, calculate_work_type_ratios,
    select_snapshot_index,
};
pub use working_days::{
    MonthWorkingDays, WorkingDaysTable, calculate_working_days, days_in_month,
};
