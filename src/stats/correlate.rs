//! Pearson correlation

use crate::record::{NumericField, RecordFields};

use super::errors::{StatsError, StatsResult};

/// Pearson correlation coefficient between two numeric fields.
///
/// Fails with `StatsError::EmptyInput` on a zero-row table. Returns NaN
/// when either field has zero variance (the coefficient is undefined).
pub fn correlate<R: RecordFields>(
    rows: &[R],
    field_a: NumericField,
    field_b: NumericField,
) -> StatsResult<f64> {
    if rows.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let n = rows.len() as f64;
    let mean_a = rows.iter().map(|r| r.numeric(field_a)).sum::<f64>() / n;
    let mean_b = rows.iter().map(|r| r.numeric(field_b)).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for row in rows {
        let da = row.numeric(field_a) - mean_a;
        let db = row.numeric(field_b) - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    let denominator = (var_a * var_b).sqrt();
    if denominator == 0.0 {
        return Ok(f64::NAN);
    }
    Ok(cov / denominator)
}
