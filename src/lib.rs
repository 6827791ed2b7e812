//! Agglomerative clustering of dense numeric data.
//!
//! `agglo` merges clusters bottom-up under one of two criteria:
//!
//! - centroid distance between groups of rows, under a selectable metric
//! - mean absolute correlation between groups of columns (features)
//!
//! The building blocks are public too: [`distance()`] compares a reference set
//! against one target under Euclidean, Manhattan, Hamming, or Bray–Curtis, and
//! [`stats::correlation`] computes Pearson correlation between two columns.
//!
//! Input datasets are `&[Vec<f64>]`, rows of equal length. Outputs are
//! partitions: lists of clusters, each a list of original indices.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod distance;
pub mod error;
pub mod stats;

pub use cluster::{
    cluster_by_correlation, cluster_by_distance, Agglomeration, Agglomerative, CentroidLinkage,
    CorrelationLinkage, Merge, StopReason,
};
pub use distance::{distance, Metric, EQUALITY_TOLERANCE};
pub use error::{Error, Result};
pub use stats::correlation;
