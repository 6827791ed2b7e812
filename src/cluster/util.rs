use crate::error::{Error, Result};

/// Check that `data` is a non-empty, rectangular, finite matrix.
///
/// Returns the row width.
pub(crate) fn validate_dataset(data: &[Vec<f64>]) -> Result<usize> {
    let first = data.first().ok_or(Error::EmptyInput)?;
    let d = first.len();
    if d == 0 {
        return Err(Error::InvalidParameter {
            name: "dimension",
            message: "must be at least 1",
        });
    }
    for (row, point) in data.iter().enumerate() {
        if point.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: point.len(),
            });
        }
        if let Some(column) = point.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFinite { row, column });
        }
    }
    Ok(d)
}

pub(crate) fn validate_tolerance(tolerance: f64) -> Result<()> {
    if !(tolerance >= 0.0 && tolerance.is_finite()) {
        return Err(Error::InvalidParameter {
            name: "tolerance",
            message: "must be finite and non-negative",
        });
    }
    Ok(())
}

/// Elementwise mean of the rows named by `members`.
///
/// `members` must be non-empty and every index in range; partitions built by this
/// crate guarantee both.
pub(crate) fn centroid(data: &[Vec<f64>], members: &[usize], dim: usize) -> Vec<f64> {
    let mut out = vec![0.0; dim];
    for &i in members {
        for (acc, v) in out.iter_mut().zip(data[i].iter()) {
            *acc += v;
        }
    }
    let n = members.len() as f64;
    for acc in &mut out {
        *acc /= n;
    }
    out
}

/// Index of the smallest value strictly above `tolerance`.
///
/// Values at or below the tolerance count as self-distances and are skipped.
/// Ties keep the first occurrence. `None` if nothing clears the tolerance.
pub(crate) fn argmin_positive(values: &[f64], tolerance: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v <= tolerance {
            continue;
        }
        match best {
            Some((_, b)) if v >= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid() {
        let data = vec![vec![0.0, 0.0], vec![2.0, 4.0], vec![100.0, 100.0]];
        assert_eq!(centroid(&data, &[0, 1], 2), vec![1.0, 2.0]);
        assert_eq!(centroid(&data, &[2], 2), vec![100.0, 100.0]);
    }

    #[test]
    fn test_argmin_positive_skips_zero() {
        assert_eq!(argmin_positive(&[0.0, 3.0, 1.0, 2.0], 1e-9), Some(2));
        assert_eq!(argmin_positive(&[1e-12, 0.5], 1e-9), Some(1));
    }

    #[test]
    fn test_argmin_positive_first_tie_wins() {
        assert_eq!(argmin_positive(&[2.0, 1.0, 0.0, 1.0], 1e-9), Some(1));
    }

    #[test]
    fn test_argmin_positive_none() {
        assert_eq!(argmin_positive(&[0.0, 0.0], 1e-9), None);
        assert_eq!(argmin_positive(&[], 1e-9), None);
    }

    #[test]
    fn test_validate_dataset() {
        assert_eq!(validate_dataset(&[vec![1.0, 2.0], vec![3.0, 4.0]]), Ok(2));
        assert_eq!(validate_dataset(&[]), Err(Error::EmptyInput));
        assert!(matches!(
            validate_dataset(&[vec![]]),
            Err(Error::InvalidParameter { name: "dimension", .. })
        ));
        assert_eq!(
            validate_dataset(&[vec![1.0, 2.0], vec![3.0]]),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            validate_dataset(&[vec![1.0, 2.0], vec![3.0, f64::NAN]]),
            Err(Error::NonFinite { row: 1, column: 1 })
        );
    }

    #[test]
    fn test_validate_tolerance() {
        assert!(validate_tolerance(0.0).is_ok());
        assert!(validate_tolerance(-1.0).is_err());
        assert!(validate_tolerance(f64::NAN).is_err());
    }
}
