use agglo::cluster::{Agglomerative, CentroidLinkage, CorrelationLinkage};
use agglo::distance::{distance, Metric};
use agglo::Error;
use proptest::prelude::*;

fn metric() -> impl Strategy<Value = Metric> {
    prop::sample::select(Metric::ALL.to_vec())
}

fn covers(clusters: &[Vec<usize>], n: usize) -> bool {
    let mut all: Vec<usize> = clusters.iter().flatten().copied().collect();
    all.sort_unstable();
    all == (0..n).collect::<Vec<_>>()
}

proptest! {
    #[test]
    fn prop_distance_symmetric(
        (a, b) in (1usize..6).prop_flat_map(|d| (
            prop::collection::vec(-10.0f64..10.0, d),
            prop::collection::vec(-10.0f64..10.0, d),
        )),
        metric in metric(),
    ) {
        let ab = distance(metric, &[a.clone()], &b).unwrap();
        let ba = distance(metric, &[b], &a).unwrap();
        prop_assert!((ab[0] - ba[0]).abs() < 1e-9);
        prop_assert!(ab[0] >= 0.0);
    }

    #[test]
    fn prop_centroid_partition_covers_rows(
        data in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 1..16),
        metric in metric(),
        max_distance in 0.0f64..20.0,
        max_iter in 0usize..20,
    ) {
        let fit = CentroidLinkage::new(metric)
            .with_max_iter(max_iter)
            .with_max_distance(max_distance)
            .fit(&data)
            .unwrap();

        prop_assert!(covers(&fit.clusters, data.len()));
        // Every merge removes exactly one cluster.
        prop_assert_eq!(fit.clusters.len() + fit.merges.len(), data.len());
        prop_assert!(fit.merges.len() <= max_iter);
        for m in &fit.merges {
            prop_assert!(m.score <= max_distance);
        }
    }

    #[test]
    fn prop_correlation_partition_covers_columns(
        data in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 4), 3..12),
        min_correlation in 0.0f64..1.0,
    ) {
        match CorrelationLinkage::new().with_min_correlation(min_correlation).fit(&data) {
            Ok(fit) => {
                prop_assert!(covers(&fit.clusters, 4));
                prop_assert_eq!(fit.clusters.len() + fit.merges.len(), 4);
                for m in &fit.merges {
                    prop_assert!(m.score >= min_correlation);
                    prop_assert!(m.score <= 1.0 + 1e-12);
                }
            }
            Err(Error::DegenerateColumn { .. }) => {}
            Err(e) => prop_assert!(false, "unexpected error {:?}", e),
        }
    }
}
