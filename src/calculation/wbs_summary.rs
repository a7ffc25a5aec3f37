//! Time entry aggregation by project and WBS.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::TimeEntryRecord;

/// Label used for entries without a project.
pub const NO_PROJECT_LABEL: &str = "No Project";

/// Label used for entries without a WBS item.
pub const NO_WBS_LABEL: &str = "No WBS";

const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);

/// Total tracked time for one (project, WBS) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WbsSummary {
    /// Group key, `"{project_id}-{wbs_id}"` with `null` for missing ids.
    pub key: String,
    /// The project id, if any.
    pub project_id: Option<String>,
    /// The project name, or [`NO_PROJECT_LABEL`].
    pub project_name: String,
    /// The WBS id, if any.
    pub wbs_id: Option<String>,
    /// The WBS name, or [`NO_WBS_LABEL`].
    pub wbs_name: String,
    /// Number of entries in the group.
    pub entry_count: u32,
    /// Sum of entry durations in seconds; open entries count as zero.
    pub total_seconds: i64,
    /// `total_seconds / 3600`, rounded to two decimal places.
    pub total_hours: Decimal,
}

/// Builds the group key for a time entry.
pub fn wbs_group_key(project_id: Option<&str>, wbs_id: Option<&str>) -> String {
    format!(
        "{}-{}",
        project_id.unwrap_or("null"),
        wbs_id.unwrap_or("null")
    )
}

/// Converts seconds to hours rounded half away from zero to two places.
pub fn seconds_to_hours(seconds: i64) -> Decimal {
    (Decimal::from(seconds) / SECONDS_PER_HOUR)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Groups time entries by (project, WBS) and totals their durations.
///
/// Entries without a project or WBS are kept in their own group rather than
/// dropped. Groups appear in the order their first entry appears. Second
/// totals saturate at the `i64` range.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::aggregate_by_wbs;
/// use worklog_engine::models::TimeEntryRecord;
/// use chrono::{DateTime, Utc};
/// use rust_decimal::Decimal;
///
/// let entry = |id: &str, duration: i64| TimeEntryRecord {
///     id: id.to_string(),
///     start_time: DateTime::parse_from_rfc3339("2025-04-01T09:00:00Z").unwrap().with_timezone(&Utc),
///     end_time: None,
///     duration: Some(duration),
///     project_id: Some("P1".to_string()),
///     project_name: None,
///     wbs_id: Some("W1".to_string()),
///     wbs_name: None,
/// };
///
/// let groups = aggregate_by_wbs(&[entry("a", 3600), entry("b", 1800)]);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].total_seconds, 5400);
/// assert_eq!(groups[0].total_hours, Decimal::new(150, 2));
/// ```
pub fn aggregate_by_wbs(entries: &[TimeEntryRecord]) -> Vec<WbsSummary> {
    let mut groups: Vec<WbsSummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let key = wbs_group_key(entry.project_id.as_deref(), entry.wbs_id.as_deref());

        let position = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(WbsSummary {
                key,
                project_id: entry.project_id.clone(),
                project_name: entry
                    .project_name
                    .clone()
                    .unwrap_or_else(|| NO_PROJECT_LABEL.to_string()),
                wbs_id: entry.wbs_id.clone(),
                wbs_name: entry
                    .wbs_name
                    .clone()
                    .unwrap_or_else(|| NO_WBS_LABEL.to_string()),
                entry_count: 0,
                total_seconds: 0,
                total_hours: Decimal::ZERO,
            });
            groups.len() - 1
        });

        let group = &mut groups[position];
        group.entry_count += 1;
        group.total_seconds = group
            .total_seconds
            .saturating_add(entry.duration.unwrap_or(0));
    }

    for group in &mut groups {
        group.total_hours = seconds_to_hours(group.total_seconds);
    }

    groups
}
