//! Correlation-linkage agglomerative clustering of features (columns).
//!
//! Rows are samples and columns are features; the clusters produced here are
//! groups of column indices. Two clusters are scored by the mean absolute
//! Pearson correlation over every cross pair of their member columns, and the
//! best-scoring pair is merged on each pass.
//!
//! `min_correlation` is a hard gate: when the best pair scores below it (or
//! scores zero), the run stops rather than merging a weakly related pair.
//!
//! A constant column has no defined correlation. Meeting one aborts the run
//! with [`Error::DegenerateColumn`]. [`constant_columns`](crate::stats::constant_columns)
//! lists them so they can be dropped beforehand.

use tracing::{debug, trace};

use super::partition::Partition;
use super::traits::{Agglomeration, Agglomerative, Merge, StopReason};
use super::util::{validate_dataset, validate_tolerance};
use crate::distance::EQUALITY_TOLERANCE;
use crate::error::{Error, Result};
use crate::stats::mean_abs_correlation_with_tolerance;

/// Correlation-linkage agglomerative clusterer over columns.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrelationLinkage {
    /// Maximum number of merge passes.
    max_iter: usize,
    /// Smallest mean absolute correlation at which two clusters may merge.
    min_correlation: f64,
    /// Column ranges at or below this count as constant.
    tolerance: f64,
}

impl CorrelationLinkage {
    /// Create a clusterer with `min_correlation = 0.5` and 100 passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of merge passes. Zero returns the input singletons.
    ///
    /// As with [`CentroidLinkage::with_max_iter`](super::CentroidLinkage::with_max_iter),
    /// this caps merges exactly at `max_iter`.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the merge gate, in `[0, 1]`.
    pub fn with_min_correlation(mut self, min_correlation: f64) -> Self {
        self.min_correlation = min_correlation;
        self
    }

    /// Set the tolerance for the constant-column check.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_correlation) {
            return Err(Error::InvalidParameter {
                name: "min_correlation",
                message: "must be in [0, 1]",
            });
        }
        validate_tolerance(self.tolerance)
    }

    /// Best-scoring `(kept, absorbed, score)` pair by position.
    fn most_correlated_pair(
        &self,
        data: &[Vec<f64>],
        partition: &Partition,
        slots: &[usize],
    ) -> Result<Option<(usize, usize, f64)>> {
        let mut best: Option<(usize, usize, f64)> = None;
        for (i, &a) in slots.iter().enumerate() {
            for (j, &b) in slots.iter().enumerate().skip(i + 1) {
                let score = mean_abs_correlation_with_tolerance(
                    data,
                    partition.members(a),
                    partition.members(b),
                    self.tolerance,
                )?;
                trace!(left = i, right = j, score, "cluster correlation");
                if best.map_or(true, |(_, _, s)| score > s) {
                    best = Some((i, j, score));
                }
            }
        }
        Ok(best.filter(|&(_, _, s)| s > 0.0 && s >= self.min_correlation))
    }
}

impl Default for CorrelationLinkage {
    fn default() -> Self {
        Self {
            max_iter: 100,
            min_correlation: 0.5,
            tolerance: EQUALITY_TOLERANCE,
        }
    }
}

impl Agglomerative for CorrelationLinkage {
    fn fit(&self, data: &[Vec<f64>]) -> Result<Agglomeration> {
        self.validate()?;
        let n_columns = validate_dataset(data)?;

        let mut partition = Partition::singletons(n_columns);
        let mut merges = Vec::new();
        let mut iterations = 0;

        let stop = loop {
            if partition.len() <= 1 {
                break StopReason::SingleCluster;
            }
            if iterations >= self.max_iter {
                break StopReason::IterationLimit;
            }

            let slots = partition.active_slots();
            let Some((kept, absorbed, score)) =
                self.most_correlated_pair(data, &partition, &slots)?
            else {
                break StopReason::NoCandidate;
            };

            let size = partition.merge(slots[kept], slots[absorbed]);
            debug!(
                iteration = iterations,
                kept,
                absorbed,
                correlation = score,
                size,
                remaining = partition.len(),
                "merged feature clusters"
            );
            merges.push(Merge {
                iteration: iterations,
                kept,
                absorbed,
                score,
                size,
            });
            iterations += 1;
        };

        debug!(?stop, iterations, clusters = partition.len(), "correlation linkage finished");
        Ok(Agglomeration {
            clusters: partition.into_clusters(),
            merges,
            iterations,
            stop,
        })
    }
}

/// Cluster the columns of `data` by mean absolute correlation.
///
/// Returns a partition of column indices. See [`CorrelationLinkage`].
///
/// ```rust
/// use agglo::cluster_by_correlation;
///
/// let data = vec![vec![1.0, 2.0], vec![2.0, 4.0], vec![3.0, 6.0], vec![4.0, 8.0]];
/// let clusters = cluster_by_correlation(&data, 10, 0.5).unwrap();
/// assert_eq!(clusters, vec![vec![0, 1]]);
/// ```
pub fn cluster_by_correlation(
    data: &[Vec<f64>],
    max_iter: usize,
    min_correlation: f64,
) -> Result<Vec<Vec<usize>>> {
    CorrelationLinkage::new()
        .with_max_iter(max_iter)
        .with_min_correlation(min_correlation)
        .fit_partition(data)
}
