//! Work-type share of planned value, budget, actual cost and forecast.
//!
//! For each work type the report gives four percentages at a snapshot day:
//! its share of cumulative PV, of BAC, of cumulative AC, and of the linearly
//! forecast end-of-period AC. Within each category the shares add up to about
//! 100% across work types.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::WorkTypeSeries;

use super::series::{
    checked_add, checked_mul, checked_sum, cumulative_sum, daily_rate, percentage_of, sum_series,
};

/// Per-work-type figures at the snapshot day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTypeRatio {
    /// The work type label.
    pub work_type: String,
    /// Running sum of planned value, one entry per day.
    pub cumulative_pv: Vec<Decimal>,
    /// Running sum of actual cost, one entry per day.
    pub cumulative_ac: Vec<Decimal>,
    /// Cumulative PV at the snapshot day.
    pub pv_to_date: Decimal,
    /// Cumulative AC at the snapshot day.
    pub ac_to_date: Decimal,
    /// Budget at completion.
    pub bac_total: Decimal,
    /// AC projected to the end of the period.
    pub forecast_ac: Decimal,
    /// Share of total cumulative PV, in percent.
    pub pv_ratio: Decimal,
    /// Share of total BAC, in percent.
    pub bac_ratio: Decimal,
    /// Share of total cumulative AC, in percent.
    pub ac_ratio: Decimal,
    /// Share of total forecast AC, in percent.
    pub forecast_ratio: Decimal,
}

/// Cross-type totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTypeTotals {
    /// Running sum of PV over all work types.
    pub cumulative_pv: Vec<Decimal>,
    /// Running sum of AC over all work types.
    pub cumulative_ac: Vec<Decimal>,
    /// Total cumulative PV at the snapshot day.
    pub pv_to_date: Decimal,
    /// Total cumulative AC at the snapshot day.
    pub ac_to_date: Decimal,
    /// Sum of BAC over all work types.
    pub bac_total: Decimal,
    /// Total AC projected to the end of the period.
    pub forecast_ac: Decimal,
}

/// The full work-type ratio report for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTypeRatioReport {
    /// The days axis of the period.
    pub days: Vec<NaiveDate>,
    /// Index of the snapshot day, `None` for an empty period.
    pub snapshot_index: Option<usize>,
    /// The snapshot day.
    pub snapshot_date: Option<NaiveDate>,
    /// Days up to and including the snapshot.
    pub elapsed_days: u32,
    /// Days after the snapshot.
    pub remaining_days: u32,
    /// One row per work type, in input order.
    pub work_types: Vec<WorkTypeRatio>,
    /// Cross-type totals.
    pub totals: WorkTypeTotals,
}

/// Picks the day the ratios are read at.
///
/// When `today` is in the period's month and on the days axis, that index is
/// used; otherwise the last day. An empty axis has no snapshot.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::select_snapshot_index;
/// use chrono::NaiveDate;
///
/// let days: Vec<NaiveDate> = (1..=30)
///     .map(|d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap())
///     .collect();
///
/// let mid_june = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// assert_eq!(select_snapshot_index(&days, mid_june), Some(9));
///
/// let july = NaiveDate::from_ymd_opt(2025, 7, 3).unwrap();
/// assert_eq!(select_snapshot_index(&days, july), Some(29));
/// ```
pub fn select_snapshot_index(days: &[NaiveDate], today: NaiveDate) -> Option<usize> {
    let first = days.first()?;
    let last_index = days.len() - 1;

    let is_current_month = first.year() == today.year() && first.month() == today.month();
    if is_current_month {
        if let Some(index) = days.iter().position(|d| *d == today) {
            return Some(index);
        }
    }

    Some(last_index)
}

/// Projects a to-date amount to the end of the period.
///
/// Zero stays zero; otherwise the average per elapsed day continues for the
/// remaining days.
fn forecast_to_period_end(
    current: Decimal,
    elapsed: u32,
    remaining: u32,
) -> EngineResult<Decimal> {
    if current.is_zero() {
        return Ok(Decimal::ZERO);
    }
    match daily_rate(current, elapsed) {
        Some(rate) => {
            let projected = checked_mul(rate, Decimal::from(remaining), "forecast")?;
            checked_add(current, projected, "forecast")
        }
        None => Ok(Decimal::ZERO),
    }
}

fn value_at(series: &[Decimal], index: Option<usize>) -> Decimal {
    index
        .and_then(|i| series.get(i).copied())
        .unwrap_or(Decimal::ZERO)
}

fn check_length(
    series: &WorkTypeSeries,
    name: &str,
    actual: usize,
    expected: usize,
) -> EngineResult<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(EngineError::SeriesLengthMismatch {
            work_type: series.work_type.clone(),
            series: name.to_string(),
            expected,
            actual,
        })
    }
}

/// Calculates each work type's PV, BAC, AC and forecast shares.
///
/// # Arguments
///
/// * `days` - The period's days axis
/// * `series` - Daily PV/AC and BAC per work type, aligned with `days`
/// * `today` - The current date, used to pick the snapshot day
///
/// # Errors
///
/// Returns [`EngineError::SeriesLengthMismatch`] when a PV or AC series is not
/// the same length as `days`, and [`EngineError::ArithmeticOverflow`] when the
/// values are too large to total.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::calculate_work_type_ratios;
/// use worklog_engine::models::WorkTypeSeries;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let days = vec![NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()];
/// let series = vec![
///     WorkTypeSeries {
///         work_type: "design".to_string(),
///         pv_daily: vec![Decimal::ZERO],
///         ac_daily: vec![Decimal::ZERO],
///         bac_total: Decimal::new(100, 0),
///     },
///     WorkTypeSeries {
///         work_type: "build".to_string(),
///         pv_daily: vec![Decimal::ZERO],
///         ac_daily: vec![Decimal::ZERO],
///         bac_total: Decimal::new(300, 0),
///     },
/// ];
///
/// let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
/// let report = calculate_work_type_ratios(&days, &series, today).unwrap();
/// assert_eq!(report.work_types[0].bac_ratio, Decimal::new(25, 0));
/// assert_eq!(report.work_types[1].bac_ratio, Decimal::new(75, 0));
/// ```
pub fn calculate_work_type_ratios(
    days: &[NaiveDate],
    series: &[WorkTypeSeries],
    today: NaiveDate,
) -> EngineResult<WorkTypeRatioReport> {
    for s in series {
        check_length(s, "pv_daily", s.pv_daily.len(), days.len())?;
        check_length(s, "ac_daily", s.ac_daily.len(), days.len())?;
    }

    let snapshot_index = select_snapshot_index(days, today);
    let elapsed_days = snapshot_index.map(|i| i as u32 + 1).unwrap_or(0);
    let remaining_days = days.len() as u32 - elapsed_days;

    // Cumulative series per work type and across types
    let cumulative = series
        .iter()
        .map(|s| Ok((cumulative_sum(&s.pv_daily)?, cumulative_sum(&s.ac_daily)?)))
        .collect::<EngineResult<Vec<(Vec<Decimal>, Vec<Decimal>)>>>()?;
    let total_pv = cumulative_sum(&sum_series(series.iter().map(|s| s.pv_daily.as_slice()))?)?;
    let total_ac = cumulative_sum(&sum_series(series.iter().map(|s| s.ac_daily.as_slice()))?)?;

    let total_pv_to_date = value_at(&total_pv, snapshot_index);
    let total_ac_to_date = value_at(&total_ac, snapshot_index);
    let total_bac = checked_sum(series.iter().map(|s| s.bac_total))?;
    let total_forecast = forecast_to_period_end(total_ac_to_date, elapsed_days, remaining_days)?;

    let work_types = series
        .iter()
        .zip(cumulative)
        .map(|(s, (cumulative_pv, cumulative_ac))| {
            let pv_to_date = value_at(&cumulative_pv, snapshot_index);
            let ac_to_date = value_at(&cumulative_ac, snapshot_index);
            let forecast_ac = forecast_to_period_end(ac_to_date, elapsed_days, remaining_days)?;

            Ok(WorkTypeRatio {
                work_type: s.work_type.clone(),
                pv_ratio: percentage_of(pv_to_date, total_pv_to_date)?,
                bac_ratio: percentage_of(s.bac_total, total_bac)?,
                ac_ratio: percentage_of(ac_to_date, total_ac_to_date)?,
                forecast_ratio: percentage_of(forecast_ac, total_forecast)?,
                cumulative_pv,
                cumulative_ac,
                pv_to_date,
                ac_to_date,
                bac_total: s.bac_total,
                forecast_ac,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(WorkTypeRatioReport {
        days: days.to_vec(),
        snapshot_index,
        snapshot_date: snapshot_index.map(|i| days[i]),
        elapsed_days,
        remaining_days,
        work_types,
        totals: WorkTypeTotals {
            cumulative_pv: total_pv,
            cumulative_ac: total_ac,
            pv_to_date: total_pv_to_date,
            ac_to_date: total_ac_to_date,
            bac_total: total_bac,
            forecast_ac: total_forecast,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    fn june_days(count: u32) -> Vec<NaiveDate> {
        (1..=count).map(june).collect()
    }

    fn series(work_type: &str, pv: &[&str], ac: &[&str], bac: &str) -> WorkTypeSeries {
        WorkTypeSeries {
            work_type: work_type.to_string(),
            pv_daily: pv.iter().map(|v| dec(v)).collect(),
            ac_daily: ac.iter().map(|v| dec(v)).collect(),
            bac_total: dec(bac),
        }
    }

    fn after_period() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
    }

    #[test]
    fn test_bac_ratio_is_static_share() {
        let days = june_days(2);
        let input = vec![
            series("design", &["0", "0"], &["0", "0"], "100"),
            series("build", &["0", "0"], &["0", "0"], "300"),
        ];

        let report = calculate_work_type_ratios(&days, &input, after_period()).unwrap();

        assert_eq!(report.work_types[0].bac_ratio, dec("25"));
        assert_eq!(report.work_types[1].bac_ratio, dec("75"));
        assert_eq!(report.totals.bac_total, dec("400"));
    }

    #[test]
    fn test_zero_bac_yields_zero_ratio() {
        let days = june_days(2);
        let input = vec![
            series("design", &["1", "1"], &["1", "1"], "0"),
            series("build", &["1", "1"], &["1", "1"], "0"),
        ];

        let report = calculate_work_type_ratios(&days, &input, after_period()).unwrap();

        assert_eq!(report.work_types[0].bac_ratio, Decimal::ZERO);
        assert_eq!(report.work_types[1].bac_ratio, Decimal::ZERO);
    }

    #[test]
    fn test_past_period_snapshots_last_day() {
        let days = june_days(4);
        let input = vec![
            series("design", &["2", "2", "2", "2"], &["1", "3", "2", "2"], "10"),
            series("build", &["0", "2", "2", "4"], &["0", "1", "1", "2"], "10"),
        ];

        let report = calculate_work_type_ratios(&days, &input, after_period()).unwrap();

        assert_eq!(report.snapshot_index, Some(3));
        assert_eq!(report.snapshot_date, Some(june(4)));
        assert_eq!(report.elapsed_days, 4);
        assert_eq!(report.remaining_days, 0);

        let design = &report.work_types[0];
        assert_eq!(design.cumulative_pv, vec![dec("2"), dec("4"), dec("6"), dec("8")]);
        assert_eq!(design.pv_to_date, dec("8"));
        assert_eq!(design.ac_to_date, dec("8"));
        // PV totals 8 + 8, AC totals 8 + 4
        assert_eq!(design.pv_ratio, dec("50"));
        assert_eq!(design.ac_ratio, dec("8") / dec("12") * dec("100"));
        // No remaining days: forecast equals actual
        assert_eq!(design.forecast_ac, dec("8"));
        assert_eq!(report.totals.forecast_ac, dec("12"));
        assert_eq!(report.totals.cumulative_ac, vec![dec("1"), dec("5"), dec("8"), dec("12")]);
    }

    #[test]
    fn test_current_month_snapshots_today() {
        let days = june_days(10);
        let input = vec![
            series(
                "design",
                &["1"; 10],
                &["2", "2", "2", "2", "2", "0", "0", "0", "0", "0"],
                "10",
            ),
            series(
                "build",
                &["1"; 10],
                &["1", "1", "1", "1", "1", "0", "0", "0", "0", "0"],
                "10",
            ),
        ];

        let report = calculate_work_type_ratios(&days, &input, june(5)).unwrap();

        assert_eq!(report.snapshot_index, Some(4));
        assert_eq!(report.elapsed_days, 5);
        assert_eq!(report.remaining_days, 5);

        let design = &report.work_types[0];
        let build = &report.work_types[1];
        // design AC to date 10, rate 2/day, 5 days left -> 20
        assert_eq!(design.ac_to_date, dec("10"));
        assert_eq!(design.forecast_ac, dec("20"));
        assert_eq!(build.forecast_ac, dec("10"));
        assert_eq!(report.totals.forecast_ac, dec("30"));
        assert_eq!(design.pv_ratio, dec("50"));
    }

    #[test]
    fn test_today_outside_axis_in_current_month_uses_last_day() {
        let days = vec![june(2), june(3), june(4)];
        let input = vec![series("design", &["1", "1", "1"], &["1", "1", "1"], "3")];

        let report = calculate_work_type_ratios(&days, &input, june(1)).unwrap();
        assert_eq!(report.snapshot_index, Some(2));
    }

    #[test]
    fn test_zero_actual_forecasts_zero() {
        let days = june_days(3);
        let input = vec![
            series("design", &["1", "1", "1"], &["0", "0", "0"], "3"),
            series("build", &["1", "1", "1"], &["0", "0", "0"], "3"),
        ];

        let report = calculate_work_type_ratios(&days, &input, june(1)).unwrap();

        for row in &report.work_types {
            assert_eq!(row.forecast_ac, Decimal::ZERO);
            assert_eq!(row.ac_ratio, Decimal::ZERO);
            assert_eq!(row.forecast_ratio, Decimal::ZERO);
        }
    }

    #[test]
    fn test_empty_axis_has_no_snapshot() {
        let input = vec![
            series("design", &[], &[], "1"),
            series("build", &[], &[], "3"),
        ];

        let report = calculate_work_type_ratios(&[], &input, june(1)).unwrap();

        assert_eq!(report.snapshot_index, None);
        assert_eq!(report.snapshot_date, None);
        assert_eq!(report.elapsed_days, 0);
        assert_eq!(report.remaining_days, 0);
        assert_eq!(report.work_types[0].pv_ratio, Decimal::ZERO);
        assert_eq!(report.work_types[1].bac_ratio, dec("75"));
    }

    #[test]
    fn test_mismatched_series_is_rejected() {
        let days = june_days(3);
        let input = vec![series("design", &["1", "1", "1"], &["1", "1"], "3")];

        match calculate_work_type_ratios(&days, &input, june(1)) {
            Err(EngineError::SeriesLengthMismatch {
                work_type,
                series,
                expected,
                actual,
            }) => {
                assert_eq!(work_type, "design");
                assert_eq!(series, "ac_daily");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("Expected SeriesLengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_pv_is_an_error() {
        let days = june_days(2);
        let input = vec![WorkTypeSeries {
            work_type: "design".to_string(),
            pv_daily: vec![Decimal::MAX, Decimal::ONE],
            ac_daily: vec![Decimal::ZERO, Decimal::ZERO],
            bac_total: Decimal::ONE,
        }];

        match calculate_work_type_ratios(&days, &input, after_period()) {
            Err(EngineError::ArithmeticOverflow { operation }) => {
                assert_eq!(operation, "cumulative sum");
            }
            other => panic!("Expected ArithmeticOverflow, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_bac_total_is_an_error() {
        let days = june_days(1);
        let mut input = vec![
            series("design", &["1"], &["1"], "1"),
            series("build", &["1"], &["1"], "1"),
        ];
        for s in &mut input {
            s.bac_total = Decimal::MAX;
        }

        assert!(matches!(
            calculate_work_type_ratios(&days, &input, after_period()),
            Err(EngineError::ArithmeticOverflow { .. })
        ));
    }

    #[test]
    fn test_forecast_overflow_is_an_error() {
        // Half of Decimal::MAX on day one, projected over 29 more days
        let days = june_days(30);
        let mut ac = vec![Decimal::ZERO; 30];
        ac[0] = Decimal::MAX / dec("2");
        let input = vec![WorkTypeSeries {
            work_type: "design".to_string(),
            pv_daily: vec![Decimal::ZERO; 30],
            ac_daily: ac,
            bac_total: Decimal::ONE,
        }];

        assert!(matches!(
            calculate_work_type_ratios(&days, &input, june(1)),
            Err(EngineError::ArithmeticOverflow { .. })
        ));
    }

    #[test]
    fn test_no_work_types() {
        let report = calculate_work_type_ratios(&june_days(3), &[], june(2)).unwrap();
        assert!(report.work_types.is_empty());
        assert!(report.totals.cumulative_pv.is_empty());
        assert_eq!(report.totals.pv_to_date, Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn prop_ratios_sum_to_about_one_hundred(
            values in proptest::collection::vec((1u32..50, 1u32..50, 1u32..500), 1..6),
            today in 1u32..=10,
        ) {
            let days = june_days(10);
            let input: Vec<WorkTypeSeries> = values
                .iter()
                .enumerate()
                .map(|(i, (pv, ac, bac))| WorkTypeSeries {
                    work_type: format!("type_{}", i),
                    pv_daily: vec![Decimal::from(*pv); 10],
                    ac_daily: vec![Decimal::from(*ac); 10],
                    bac_total: Decimal::from(*bac),
                })
                .collect();

            let report = calculate_work_type_ratios(&days, &input, june(today)).unwrap();
            let tolerance = dec("0.000001");
            let hundred = dec("100");

            let pv: Decimal = report.work_types.iter().map(|r| r.pv_ratio).sum();
            let bac: Decimal = report.work_types.iter().map(|r| r.bac_ratio).sum();
            let ac: Decimal = report.work_types.iter().map(|r| r.ac_ratio).sum();
            let forecast: Decimal = report.work_types.iter().map(|r| r.forecast_ratio).sum();

            prop_assert!((pv - hundred).abs() < tolerance);
            prop_assert!((bac - hundred).abs() < tolerance);
            prop_assert!((ac - hundred).abs() < tolerance);
            prop_assert!((forecast - hundred).abs() < tolerance);
        }

        #[test]
        fn prop_same_input_same_report(today in 1u32..=30) {
            let days = june_days(30);
            let input = vec![
                WorkTypeSeries {
                    work_type: "design".to_string(),
                    pv_daily: vec![dec("1.25"); 30],
                    ac_daily: vec![dec("0.75"); 30],
                    bac_total: dec("37.5"),
                },
            ];
            let a = calculate_work_type_ratios(&days, &input, june(today)).unwrap();
            let b = calculate_work_type_ratios(&days, &input, june(today)).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
