//! Work type series model for earned-value style reporting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Daily planned value and actual cost for one work type over a period.
///
/// `pv_daily` and `ac_daily` are aligned with the period's days axis, one
/// value per day.
///
/// # Example
///
/// ```
/// use worklog_engine::models::WorkTypeSeries;
/// use rust_decimal::Decimal;
///
/// let series = WorkTypeSeries {
///     work_type: "design".to_string(),
///     pv_daily: vec![Decimal::new(4, 0), Decimal::new(4, 0)],
///     ac_daily: vec![Decimal::new(3, 0), Decimal::new(5, 0)],
///     bac_total: Decimal::new(80, 0),
/// };
/// assert_eq!(series.pv_daily.len(), series.ac_daily.len());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTypeSeries {
    /// The work type label (e.g. "design", "review").
    pub work_type: String,
    /// Planned value per day.
    pub pv_daily: Vec<Decimal>,
    /// Actual cost per day.
    pub ac_daily: Vec<Decimal>,
    /// Budget at completion for the whole period.
    pub bac_total: Decimal,
}
