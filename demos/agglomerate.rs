//! Centroid and correlation linkage on a small dataset.
//!
//! Run with `RUST_LOG=agglo=debug` to see each merge.

use agglo::{Agglomerative, CentroidLinkage, CorrelationLinkage, Metric};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Three groups of rows. Column 2 tracks column 0; column 1 is independent.
    let data: Vec<Vec<f64>> = vec![
        // Group A
        vec![0.0, 0.3, 0.1],
        vec![0.1, 0.9, 0.2],
        vec![0.2, 0.1, 0.4],
        // Group B
        vec![5.0, 0.7, 10.1],
        vec![5.1, 0.2, 10.2],
        vec![4.9, 0.8, 9.8],
        // Group C
        vec![10.0, 0.4, 20.0],
        vec![10.2, 0.6, 20.5],
    ];

    for metric in Metric::ALL {
        let fit = CentroidLinkage::new(metric)
            .with_max_distance(2.0)
            .fit(&data)
            .unwrap();
        println!("=== centroid linkage ({metric}, max_distance=2.0) ===");
        println!("  stopped: {:?} after {} passes", fit.stop, fit.iterations);
        for (label, members) in fit.clusters.iter().enumerate() {
            println!("  cluster {label}: rows {members:?}");
        }
    }

    let fit = CorrelationLinkage::new()
        .with_min_correlation(0.8)
        .fit(&data)
        .unwrap();
    println!("\n=== correlation linkage (min_correlation=0.8) ===");
    for m in &fit.merges {
        println!(
            "  pass {}: merged position {} into {} (|r| = {:.3})",
            m.iteration, m.absorbed, m.kept, m.score
        );
    }
    for (label, members) in fit.clusters.iter().enumerate() {
        println!("  feature group {label}: columns {members:?}");
    }
}
