//! Running-sum and linear-forecast primitives.
//!
//! Shared by the monthly summary forecast and the work-type ratio report. Every
//! helper returns `None` or zero on a zero denominator instead of dividing, and
//! reports [`EngineError::ArithmeticOverflow`] when a result leaves the Decimal
//! range.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

fn overflow(operation: &str) -> EngineError {
    EngineError::ArithmeticOverflow {
        operation: operation.to_string(),
    }
}

/// Adds two values, failing on overflow.
pub(crate) fn checked_add(a: Decimal, b: Decimal, operation: &str) -> EngineResult<Decimal> {
    a.checked_add(b).ok_or_else(|| overflow(operation))
}

/// Subtracts `b` from `a`, failing on overflow.
pub(crate) fn checked_sub(a: Decimal, b: Decimal, operation: &str) -> EngineResult<Decimal> {
    a.checked_sub(b).ok_or_else(|| overflow(operation))
}

/// Multiplies two values, failing on overflow.
pub(crate) fn checked_mul(a: Decimal, b: Decimal, operation: &str) -> EngineResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| overflow(operation))
}

/// Sums `values`, failing on overflow.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::checked_sum;
/// use rust_decimal::Decimal;
///
/// assert_eq!(checked_sum([Decimal::ONE, Decimal::TWO]).unwrap(), Decimal::new(3, 0));
/// assert!(checked_sum([Decimal::MAX, Decimal::ONE]).is_err());
/// ```
pub fn checked_sum<I>(values: I) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |total, value| checked_add(total, value, "sum"))
}

/// Returns the running sum of `values`.
///
/// # Errors
///
/// Returns [`EngineError::ArithmeticOverflow`] if a running total overflows.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::cumulative_sum;
/// use rust_decimal::Decimal;
///
/// let values = [Decimal::new(1, 0), Decimal::new(2, 0), Decimal::new(3, 0)];
/// assert_eq!(
///     cumulative_sum(&values).unwrap(),
///     vec![Decimal::new(1, 0), Decimal::new(3, 0), Decimal::new(6, 0)]
/// );
/// ```
pub fn cumulative_sum(values: &[Decimal]) -> EngineResult<Vec<Decimal>> {
    let mut running = Decimal::ZERO;
    values
        .iter()
        .map(|value| {
            running = checked_add(running, *value, "cumulative sum")?;
            Ok(running)
        })
        .collect()
}

/// Element-wise sum of equally long series.
///
/// The result is as long as the longest input; shorter inputs contribute zero
/// past their end.
///
/// # Errors
///
/// Returns [`EngineError::ArithmeticOverflow`] if an element overflows.
pub fn sum_series<'a, I>(series: I) -> EngineResult<Vec<Decimal>>
where
    I: IntoIterator<Item = &'a [Decimal]>,
{
    let mut total: Vec<Decimal> = Vec::new();
    for values in series {
        if values.len() > total.len() {
            total.resize(values.len(), Decimal::ZERO);
        }
        for (slot, value) in total.iter_mut().zip(values) {
            *slot = checked_add(*slot, *value, "series sum")?;
        }
    }
    Ok(total)
}

/// The average amount per elapsed unit, or `None` when nothing has elapsed.
///
/// Dividing by a whole count of at least one never grows the magnitude, so
/// this cannot overflow.
pub fn daily_rate(current: Decimal, elapsed: u32) -> Option<Decimal> {
    if elapsed == 0 {
        None
    } else {
        current.checked_div(Decimal::from(elapsed))
    }
}

/// Extrapolates `current` over `total` units assuming the rate so far holds.
///
/// # Errors
///
/// Returns [`EngineError::ArithmeticOverflow`] if the projection overflows.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::linear_forecast;
/// use rust_decimal::Decimal;
///
/// // 80 hours over 10 days, projected to 20 days
/// let forecast = linear_forecast(Decimal::new(80, 0), 10, 20).unwrap();
/// assert_eq!(forecast, Some(Decimal::new(160, 0)));
/// assert_eq!(linear_forecast(Decimal::new(80, 0), 0, 20).unwrap(), None);
/// ```
pub fn linear_forecast(
    current: Decimal,
    elapsed: u32,
    total: u32,
) -> EngineResult<Option<Decimal>> {
    daily_rate(current, elapsed)
        .map(|rate| checked_mul(rate, Decimal::from(total), "linear forecast"))
        .transpose()
}

/// `part / whole * 100`, or zero when `whole` is zero.
///
/// # Errors
///
/// Returns [`EngineError::ArithmeticOverflow`] when `part` dwarfs `whole`
/// beyond the Decimal range.
pub fn percentage_of(part: Decimal, whole: Decimal) -> EngineResult<Decimal> {
    if whole.is_zero() {
        return Ok(Decimal::ZERO);
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
        .ok_or_else(|| overflow("percentage"))
}
