//! Pearson correlation between dataset columns.
//!
//! Correlation is computed from centered sums:
//!
//! ```text
//! r = Σ(x - x̄)(y - ȳ) / sqrt(Σ(x - x̄)² Σ(y - ȳ)²)
//! ```
//!
//! Deviations are divided by each column's largest absolute deviation before
//! squaring. `r` is scale-invariant, so this leaves the result unchanged while
//! keeping large offsets and huge magnitudes out of the products.
//!
//! A constant column makes the denominator zero. That case is reported as
//! [`Error::DegenerateColumn`] rather than folded into `0.0`, since zero is a
//! legitimate, different answer. Use [`constant_columns`] to find such columns
//! up front.

use crate::distance::EQUALITY_TOLERANCE;
use crate::error::{Error, Result};

/// Pearson correlation between columns `x` and `y` over all rows.
///
/// # Errors
///
/// - [`Error::EmptyInput`] for a dataset with no rows.
/// - [`Error::ColumnOutOfRange`] if a column index is past the end of any row.
/// - [`Error::DegenerateColumn`] if either column is constant.
pub fn correlation(data: &[Vec<f64>], x: usize, y: usize) -> Result<f64> {
    correlation_with_tolerance(data, x, y, EQUALITY_TOLERANCE)
}

/// Like [`correlation`], with an explicit tolerance for the constant-column check.
pub fn correlation_with_tolerance(
    data: &[Vec<f64>],
    x: usize,
    y: usize,
    tolerance: f64,
) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }
    for row in data {
        for column in [x, y] {
            if column >= row.len() {
                return Err(Error::ColumnOutOfRange {
                    column,
                    n_columns: row.len(),
                });
            }
        }
    }

    for column in [x, y] {
        if column_range(data, column) <= tolerance {
            return Err(Error::DegenerateColumn { column });
        }
    }

    let dx = scaled_deviations(data, x);
    let dy = scaled_deviations(data, y);

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (a, b) in dx.iter().zip(dy.iter()) {
        cov += a * b;
        var_x += a * a;
        var_y += b * b;
    }

    if !(var_x > 0.0) {
        return Err(Error::DegenerateColumn { column: x });
    }
    if !(var_y > 0.0) {
        return Err(Error::DegenerateColumn { column: y });
    }
    let r = cov / (var_x * var_y).sqrt();
    Ok(r.clamp(-1.0, 1.0))
}

/// Mean absolute correlation over every cross pair `(a, b)` with `a` in `left`,
/// `b` in `right` and `a != b`.
///
/// This is the score used to decide which feature groups to merge. Returns
/// `0.0` when there are no cross pairs.
///
/// # Errors
///
/// Propagates the first error from [`correlation`].
pub fn mean_abs_correlation(data: &[Vec<f64>], left: &[usize], right: &[usize]) -> Result<f64> {
    mean_abs_correlation_with_tolerance(data, left, right, EQUALITY_TOLERANCE)
}

pub(crate) fn mean_abs_correlation_with_tolerance(
    data: &[Vec<f64>],
    left: &[usize],
    right: &[usize],
    tolerance: f64,
) -> Result<f64> {
    let mut total = 0.0;
    let mut pairs = 0usize;
    for &a in left {
        for &b in right {
            if a == b {
                continue;
            }
            total += correlation_with_tolerance(data, a, b, tolerance)?.abs();
            pairs += 1;
        }
    }
    if pairs == 0 {
        return Ok(0.0);
    }
    Ok(total / pairs as f64)
}

/// Columns whose value range is within `tolerance`, in ascending order.
///
/// These are the columns [`correlation`] rejects as degenerate. Columns are
/// counted from the first row; an empty dataset has none.
///
/// ```rust
/// use agglo::stats::constant_columns;
/// use agglo::EQUALITY_TOLERANCE;
///
/// let data = vec![vec![1.0, 5.0, 0.0], vec![2.0, 5.0, 1.0]];
/// assert_eq!(constant_columns(&data, EQUALITY_TOLERANCE), vec![1]);
/// ```
pub fn constant_columns(data: &[Vec<f64>], tolerance: f64) -> Vec<usize> {
    let width = data.first().map_or(0, Vec::len);
    (0..width)
        .filter(|&column| column_range(data, column) <= tolerance)
        .collect()
}

fn column_range(data: &[Vec<f64>], column: usize) -> f64 {
    let (lo, hi) = data
        .iter()
        .filter_map(|row| row.get(column).copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    hi - lo
}

/// Deviations from the column mean, divided by the largest absolute deviation.
fn scaled_deviations(data: &[Vec<f64>], column: usize) -> Vec<f64> {
    // Running mean avoids overflowing an intermediate sum.
    let mut mean = 0.0;
    for (k, row) in data.iter().enumerate() {
        mean += (row[column] - mean) / (k + 1) as f64;
    }
    let mut dev: Vec<f64> = data.iter().map(|row| row[column] - mean).collect();
    let scale = dev.iter().fold(0.0f64, |m, d| m.max(d.abs()));
    if scale > 0.0 && scale.is_finite() {
        for d in &mut dev {
            *d /= scale;
        }
    }
    dev
}
