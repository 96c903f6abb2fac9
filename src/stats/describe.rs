//! Descriptive statistics
//!
//! Per-field count, mean, sample standard deviation, min, quartiles and
//! max. Quartiles use linear interpolation between order statistics; the
//! sample standard deviation is undefined (NaN) for a single row.

use serde::Serialize;

use crate::record::{NumericField, RecordFields};

use super::errors::{StatsError, StatsResult};

/// Descriptive statistics for one numeric field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldStats {
    /// Field the statistics describe
    pub field: NumericField,
    /// Number of rows
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation; NaN when count is 1
    pub std: f64,
    /// Minimum
    pub min: f64,
    /// 25th percentile
    pub p25: f64,
    /// Median
    pub p50: f64,
    /// 75th percentile
    pub p75: f64,
    /// Maximum
    pub max: f64,
}

/// Computes descriptive statistics for each requested field.
///
/// Fails with `StatsError::EmptyInput` on a zero-row table; otherwise it
/// never fails.
pub fn describe<R: RecordFields>(
    rows: &[R],
    fields: &[NumericField],
) -> StatsResult<Vec<FieldStats>> {
    if rows.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(fields
        .iter()
        .map(|field| describe_field(rows, *field))
        .collect())
}

fn describe_field<R: RecordFields>(rows: &[R], field: NumericField) -> FieldStats {
    let mut values: Vec<f64> = rows.iter().map(|row| row.numeric(field)).collect();
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    let std = if count < 2 {
        f64::NAN
    } else {
        let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
        (sum_sq / (count - 1) as f64).sqrt()
    };

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    FieldStats {
        field,
        count,
        mean,
        std,
        min: values[0],
        p25: quantile(&values, 0.25),
        p50: quantile(&values, 0.50),
        p75: quantile(&values, 0.75),
        max: values[count - 1],
    }
}

/// Linear-interpolated quantile over sorted values
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let position = q * (n - 1) as f64;
    let lo = position.floor() as usize;
    let hi = position.ceil() as usize;
    let fraction = position - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * fraction
}
