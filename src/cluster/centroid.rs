//! Centroid-linkage agglomerative clustering of rows.
//!
//! # The Algorithm
//!
//! Start with every row in its own cluster. On each pass:
//!
//! 1. Recompute every cluster's centroid (elementwise mean of its rows).
//! 2. For each cluster, find the nearest *other* centroid: the smallest distance
//!    strictly above the equality tolerance. Distances at or below the tolerance
//!    are treated as self-distances.
//! 3. Keep the globally closest (cluster, nearest) pair whose distance does not
//!    exceed `max_distance`. Ties go to the cluster visited first.
//! 4. Merge the nearest cluster into the visiting one.
//!
//! Stop when one cluster remains, the pass budget runs out, or no pair is within
//! the cutoff.
//!
//! Centroids are recomputed from scratch each pass, so a pass costs
//! O(k² · d) for `k` active clusters of dimension `d`, and a full run on `n` rows
//! is O(n³ · d) in the worst case.
//!
//! Clusters whose centroids coincide (distance within the tolerance) never see
//! each other as neighbours and are not merged.

use tracing::{debug, trace};

use super::partition::Partition;
use super::traits::{Agglomeration, Agglomerative, Merge, StopReason};
use super::util::{argmin_positive, centroid, validate_dataset, validate_tolerance};
use crate::distance::{distance_with_tolerance, Metric, EQUALITY_TOLERANCE};
use crate::error::{Error, Result};

/// Centroid-linkage agglomerative clusterer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CentroidLinkage {
    /// Metric used to compare centroids.
    metric: Metric,
    /// Maximum number of merge passes.
    max_iter: usize,
    /// Largest centroid distance at which two clusters may merge.
    max_distance: f64,
    /// Distances at or below this are treated as zero.
    tolerance: f64,
}

impl CentroidLinkage {
    /// Create a clusterer with the given metric, no distance cutoff and 100 passes.
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            ..Self::default()
        }
    }

    /// Set the metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the maximum number of merge passes. Zero returns the input singletons.
    ///
    /// This is an exact cap on merges: at most `max_iter` merges happen. Loops
    /// that test the counter after merging allow one more, so a threshold ported
    /// from such code should be increased by one.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the largest centroid distance at which clusters may merge.
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Set the equality tolerance used for self-distance suppression and Hamming.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.max_distance.is_nan() || self.max_distance < 0.0 {
            return Err(Error::InvalidParameter {
                name: "max_distance",
                message: "must be non-negative",
            });
        }
        validate_tolerance(self.tolerance)
    }

    /// Closest acceptable `(kept, absorbed, distance)` pair by position.
    fn closest_pair(&self, centroids: &[Vec<f64>]) -> Result<Option<(usize, usize, f64)>> {
        let mut best: Option<(usize, usize, f64)> = None;
        for (pos, c) in centroids.iter().enumerate() {
            let dists = distance_with_tolerance(self.metric, centroids, c, self.tolerance)?;
            let Some(nearest) = argmin_positive(&dists, self.tolerance) else {
                continue;
            };
            let d = dists[nearest];
            trace!(cluster = pos, nearest, distance = d, "nearest centroid");
            if nearest == pos || d > self.max_distance {
                continue;
            }
            if best.map_or(true, |(_, _, b)| d < b) {
                best = Some((pos, nearest, d));
            }
        }
        Ok(best)
    }
}

impl Default for CentroidLinkage {
    fn default() -> Self {
        Self {
            metric: Metric::Euclidean,
            max_iter: 100,
            max_distance: f64::INFINITY,
            tolerance: EQUALITY_TOLERANCE,
        }
    }
}

impl Agglomerative for CentroidLinkage {
    fn fit(&self, data: &[Vec<f64>]) -> Result<Agglomeration> {
        self.validate()?;
        let dim = validate_dataset(data)?;

        let mut partition = Partition::singletons(data.len());
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
            let centroids: Vec<Vec<f64>> = slots
                .iter()
                .map(|&slot| centroid(data, partition.members(slot), dim))
                .collect();

            let Some((kept, absorbed, score)) = self.closest_pair(&centroids)? else {
                break StopReason::NoCandidate;
            };

            let size = partition.merge(slots[kept], slots[absorbed]);
            debug!(
                iteration = iterations,
                kept,
                absorbed,
                distance = score,
                size,
                remaining = partition.len(),
                "merged clusters"
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

        debug!(?stop, iterations, clusters = partition.len(), "centroid linkage finished");
        Ok(Agglomeration {
            clusters: partition.into_clusters(),
            merges,
            iterations,
            stop,
        })
    }
}

/// Cluster the rows of `data` by centroid distance.
///
/// Returns a partition of row indices. See [`CentroidLinkage`] for the algorithm.
///
/// ```rust
/// use agglo::{cluster_by_distance, Metric};
///
/// let data = vec![vec![0.0], vec![1.0], vec![2.0], vec![10.0]];
/// let clusters = cluster_by_distance(&data, Metric::Euclidean, 10, 1.5).unwrap();
/// assert_eq!(clusters, vec![vec![0, 1, 2], vec![3]]);
/// ```
pub fn cluster_by_distance(
    data: &[Vec<f64>],
    metric: Metric,
    max_iter: usize,
    max_distance: f64,
) -> Result<Vec<Vec<usize>>> {
    CentroidLinkage::new(metric)
        .with_max_iter(max_iter)
        .with_max_distance(max_distance)
        .fit_partition(data)
}
