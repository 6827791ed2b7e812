use super::partition::labels_from_clusters;
use crate::error::Result;

/// Why an agglomerative run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// Everything ended up in one cluster.
    SingleCluster,
    /// The configured number of merge passes ran out.
    IterationLimit,
    /// No pair of clusters satisfied the merge criterion.
    NoCandidate,
}

/// One merge performed during a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Merge {
    /// Zero-based pass in which the merge happened.
    pub iteration: usize,
    /// Position of the surviving cluster among the active clusters.
    pub kept: usize,
    /// Position of the absorbed cluster among the active clusters, before removal.
    pub absorbed: usize,
    /// Merge criterion value: centroid distance or mean absolute correlation.
    pub score: f64,
    /// Size of the merged cluster.
    pub size: usize,
}

/// Outcome of an agglomerative run.
#[derive(Debug, Clone, PartialEq)]
pub struct Agglomeration {
    /// Final clusters, each a list of original indices.
    pub clusters: Vec<Vec<usize>>,
    /// Merges in the order they were applied.
    pub merges: Vec<Merge>,
    /// Number of merge passes executed.
    pub iterations: usize,
    /// Why the run stopped.
    pub stop: StopReason,
}

impl Agglomeration {
    /// One label per clustered item, numbered by cluster position.
    pub fn labels(&self) -> Vec<usize> {
        labels_from_clusters(&self.clusters)
    }
}

/// Common interface for bottom-up clustering algorithms.
pub trait Agglomerative {
    /// Run the merge loop and return the full outcome.
    fn fit(&self, data: &[Vec<f64>]) -> Result<Agglomeration>;

    /// Run the merge loop and return only the final clusters.
    fn fit_partition(&self, data: &[Vec<f64>]) -> Result<Vec<Vec<usize>>> {
        Ok(self.fit(data)?.clusters)
    }

    /// Run the merge loop and return one cluster label per clustered item.
    ///
    /// Items are rows or columns depending on the algorithm.
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels())
    }
}
