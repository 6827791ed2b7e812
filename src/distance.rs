//! Distance and dissimilarity between a reference set and one target vector.
//!
//! Every function in this module compares `N` reference vectors against a single
//! target and returns `N` values, positionally aligned with the references. This
//! is the shape both clusterers need (one centroid against all centroids) and the
//! shape a nearest-neighbor search needs (one query against a training set).
//!
//! # Metrics
//!
//! | Metric | Formula |
//! |---|---|
//! | Euclidean | `sqrt(Σ (x - y)²)` |
//! | Manhattan | `Σ |x - y|` |
//! | Hamming | `#{ i : |x_i - y_i| > tol } / M` |
//! | Bray–Curtis | `Σ |x - y| / (Σ |x| + Σ |y|)` |
//!
//! Hamming compares under a numeric tolerance rather than exact equality, so it
//! stays meaningful for continuous features. Bray–Curtis violates the triangle
//! inequality; treat it as a ranking signal only.
//!
//! ```rust
//! use agglo::distance::{distance, Metric};
//!
//! let d = distance(Metric::Euclidean, &[vec![3.0, 4.0]], &[0.0, 0.0]).unwrap();
//! assert_eq!(d, vec![5.0]);
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::{Error, Result};

/// Tolerance under which two floats are treated as equal.
///
/// Shared by Hamming distance (per-dimension equality) and centroid clustering
/// (self-distance suppression), so changing it moves both at once.
pub const EQUALITY_TOLERANCE: f64 = 1e-9;

/// Distance metric used to compare vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    /// L2 distance.
    #[default]
    Euclidean,
    /// L1 distance.
    Manhattan,
    /// Fraction of dimensions that differ by more than the tolerance.
    Hamming,
    /// Bray–Curtis dissimilarity.
    BrayCurtis,
}

impl Metric {
    /// All metrics, in declaration order.
    pub const ALL: [Metric; 4] = [
        Metric::Euclidean,
        Metric::Manhattan,
        Metric::Hamming,
        Metric::BrayCurtis,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Manhattan => "manhattan",
            Metric::Hamming => "hamming",
            Metric::BrayCurtis => "braycurtis",
        }
    }

    /// Resolve a metric by name, falling back to Euclidean for unknown names.
    ///
    /// The fallback is logged at `warn` level and is otherwise silent. Use
    /// [`str::parse`] when an unknown name should be an error instead.
    pub fn from_name_lossy(name: &str) -> Self {
        match name.parse() {
            Ok(metric) => metric,
            Err(_) => {
                warn!(
                    requested = name,
                    fallback = Metric::Euclidean.name(),
                    "unknown distance metric, using default"
                );
                Metric::Euclidean
            }
        }
    }

    /// Distance between two vectors.
    ///
    /// `a` and `b` must be non-empty and of equal length. Nothing is checked
    /// here: extra elements of the longer slice are ignored, and empty slices
    /// give NaN for Hamming. Use [`distance`] for validated input.
    ///
    /// ```rust
    /// use agglo::{Metric, EQUALITY_TOLERANCE};
    ///
    /// let d = Metric::Hamming.pairwise(&[1.0, 2.0], &[1.0, 3.0], EQUALITY_TOLERANCE);
    /// assert_eq!(d, 0.5);
    /// ```
    #[inline]
    pub fn pairwise(self, a: &[f64], b: &[f64], tolerance: f64) -> f64 {
        match self {
            Metric::Euclidean => euclidean(a, b),
            Metric::Manhattan => manhattan(a, b),
            Metric::Hamming => hamming(a, b, tolerance),
            Metric::BrayCurtis => bray_curtis(a, b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" | "l2" => Ok(Metric::Euclidean),
            "manhattan" | "l1" | "cityblock" => Ok(Metric::Manhattan),
            "hamming" => Ok(Metric::Hamming),
            "braycurtis" | "bray-curtis" | "bray_curtis" => Ok(Metric::BrayCurtis),
            _ => Err(Error::UnknownMetric(s.to_string())),
        }
    }
}

/// Distances from every reference vector to `target` using [`EQUALITY_TOLERANCE`].
///
/// # Errors
///
/// - [`Error::InvalidParameter`] if `target` has no dimensions.
/// - [`Error::DimensionMismatch`] if any reference length differs from `target`.
pub fn distance(metric: Metric, references: &[Vec<f64>], target: &[f64]) -> Result<Vec<f64>> {
    distance_with_tolerance(metric, references, target, EQUALITY_TOLERANCE)
}

/// Like [`distance`], with an explicit equality tolerance for Hamming.
pub fn distance_with_tolerance(
    metric: Metric,
    references: &[Vec<f64>],
    target: &[f64],
    tolerance: f64,
) -> Result<Vec<f64>> {
    if target.is_empty() {
        return Err(Error::InvalidParameter {
            name: "target",
            message: "must have at least one dimension",
        });
    }
    if let Some(bad) = references.iter().find(|r| r.len() != target.len()) {
        return Err(Error::DimensionMismatch {
            expected: target.len(),
            found: bad.len(),
        });
    }

    Ok(references
        .iter()
        .map(|r| metric.pairwise(r, target, tolerance))
        .collect())
}

#[inline]
fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

#[inline]
fn manhattan(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}

#[inline]
fn hamming(a: &[f64], b: &[f64], tolerance: f64) -> f64 {
    let unequal = a
        .iter()
        .zip(b.iter())
        .filter(|(x, y)| (*x - *y).abs() > tolerance)
        .count();
    unequal as f64 / a.len() as f64
}

#[inline]
fn bray_curtis(a: &[f64], b: &[f64]) -> f64 {
    let mut diff = 0.0;
    let mut total = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff += (x - y).abs();
        total += x.abs() + y.abs();
    }
    // Two all-zero vectors are identical.
    if total == 0.0 {
        return 0.0;
    }
    diff / total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_three_four_five() {
        let d = distance(Metric::Euclidean, &[vec![3.0, 4.0]], &[0.0, 0.0]).unwrap();
        assert_eq!(d, vec![5.0]);
    }

    #[test]
    fn test_manhattan() {
        let d = distance(Metric::Manhattan, &[vec![3.0, 4.0]], &[0.0, 0.0]).unwrap();
        assert_eq!(d, vec![7.0]);
    }

    #[test]
    fn test_hamming_uses_tolerance() {
        let refs = vec![vec![1.0, 2.0, 3.0, 4.0], vec![1.0 + 1e-12, 2.0, 0.0, 0.0]];
        let d = distance(Metric::Hamming, &refs, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(d[0], 0.0);
        // First dimension differs by less than the tolerance.
        assert_eq!(d[1], 0.5);

        let loose = distance_with_tolerance(Metric::Hamming, &refs, &[1.0, 2.0, 3.0, 4.0], 10.0)
            .unwrap();
        assert_eq!(loose, vec![0.0, 0.0]);
    }

    #[test]
    fn test_bray_curtis() {
        let d = distance(Metric::BrayCurtis, &[vec![1.0, 0.0]], &[0.0, 1.0]).unwrap();
        assert!((d[0] - 1.0).abs() < 1e-12);

        let d = distance(Metric::BrayCurtis, &[vec![2.0, 2.0]], &[1.0, 1.0]).unwrap();
        assert!((d[0] - 2.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_bray_curtis_zero_vectors() {
        let d = distance(Metric::BrayCurtis, &[vec![0.0, 0.0]], &[0.0, 0.0]).unwrap();
        assert_eq!(d, vec![0.0]);
    }

    #[test]
    fn test_output_aligned_with_references() {
        let refs = vec![vec![0.0], vec![5.0], vec![2.0]];
        let d = distance(Metric::Manhattan, &refs, &[1.0]).unwrap();
        assert_eq!(d, vec![1.0, 4.0, 1.0]);
    }

    #[test]
    fn test_empty_references() {
        let d = distance(Metric::Euclidean, &[], &[1.0, 2.0]).unwrap();
        assert!(d.is_empty());
    }

    #[test]
    fn test_dimension_mismatch() {
        let refs = vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0]];
        let err = distance(Metric::Euclidean, &refs, &[0.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_empty_target_rejected() {
        let err = distance(Metric::Hamming, &[vec![]], &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "target", .. }));
    }

    #[test]
    fn test_symmetry_single_pair() {
        let a = vec![0.5, -1.0, 3.0];
        let b = vec![2.0, 0.25, -4.0];
        for metric in Metric::ALL {
            let ab = distance(metric, &[a.clone()], &b).unwrap();
            let ba = distance(metric, &[b.clone()], &a).unwrap();
            assert!((ab[0] - ba[0]).abs() < 1e-12, "{metric} not symmetric");
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("euclidean".parse::<Metric>().unwrap(), Metric::Euclidean);
        assert_eq!("Manhattan".parse::<Metric>().unwrap(), Metric::Manhattan);
        assert_eq!("hamming".parse::<Metric>().unwrap(), Metric::Hamming);
        assert_eq!("bray-curtis".parse::<Metric>().unwrap(), Metric::BrayCurtis);
        assert_eq!(
            "cosine".parse::<Metric>().unwrap_err(),
            Error::UnknownMetric("cosine".to_string())
        );
    }

    #[test]
    fn test_lossy_fallback() {
        assert_eq!(Metric::from_name_lossy("braycurtis"), Metric::BrayCurtis);
        assert_eq!(Metric::from_name_lossy("minkowski"), Metric::Euclidean);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Metric::BrayCurtis).unwrap();
        assert_eq!(json, "\"braycurtis\"");
        let back: Metric = serde_json::from_str("\"manhattan\"").unwrap();
        assert_eq!(back, Metric::Manhattan);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for metric in Metric::ALL {
            assert_eq!(metric.to_string().parse::<Metric>().unwrap(), metric);
        }
    }
}
