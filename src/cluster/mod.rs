//! Agglomerative (bottom-up) clustering.
//!
//! Every item starts in its own cluster; each pass merges the best pair of
//! clusters under some criterion, until a single cluster remains, the pass
//! budget runs out, or no pair qualifies.
//!
//! ## Criteria (implemented)
//!
//! ### Centroid linkage
//!
//! Clusters *rows*. Two clusters are as close as their centroids are under a
//! chosen [`Metric`](crate::distance::Metric). Merging stops once the closest
//! pair is farther apart than `max_distance`.
//!
//! **When to use**: grouping samples that sit near each other in feature space,
//! with a natural distance scale to cut at.
//!
//! ### Correlation linkage
//!
//! Clusters *columns*. Two feature groups are as similar as the mean absolute
//! Pearson correlation across their members. Merging stops once the best pair
//! falls below `min_correlation`.
//!
//! **When to use**: finding redundant features before feature selection or
//! dimensionality reduction.
//!
//! ## Usage
//!
//! ```rust
//! use agglo::cluster::{Agglomerative, CentroidLinkage, CorrelationLinkage};
//! use agglo::distance::Metric;
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.5],
//!     vec![10.1, 10.4],
//! ];
//!
//! let rows = CentroidLinkage::new(Metric::Euclidean)
//!     .with_max_distance(1.0)
//!     .fit_predict(&data)
//!     .unwrap();
//! assert_eq!(rows[0], rows[1]);
//! assert_ne!(rows[0], rows[2]);
//!
//! let features = CorrelationLinkage::new()
//!     .with_min_correlation(0.9)
//!     .fit_partition(&data)
//!     .unwrap();
//! assert_eq!(features, vec![vec![0, 1]]);
//! ```

mod centroid;
mod correlation;
mod partition;
mod traits;
mod util;

pub use centroid::{cluster_by_distance, CentroidLinkage};
pub use correlation::{cluster_by_correlation, CorrelationLinkage};
pub use partition::labels_from_clusters;
pub use traits::{Agglomeration, Agglomerative, Merge, StopReason};
