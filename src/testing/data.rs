//! Seeded synthetic bundles for tests and examples.

use ndarray::{s, Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::TrainingBundle;

/// Build a seeded classification bundle with `n_targets` binary label rows.
///
/// Labels for target `t` are thresholded on feature `t % n_features`, so no
/// label row is constant for reasonable sample counts. Weights are uniform
/// random in `[0.5, 1.5)`.
///
/// When `test_fraction` is nonzero, `round(test_fraction * n_rows)` trailing
/// samples become the held-out split and the rest train; a zero fraction
/// yields a bundle with no test split.
pub fn synthetic_bundle(
    n_targets: usize,
    n_features: usize,
    n_rows: usize,
    test_fraction: f32,
    seed: u64,
) -> TrainingBundle {
    let mut rng = StdRng::seed_from_u64(seed);

    let features = Array2::from_shape_fn((n_features, n_rows), |_| rng.gen_range(-1.0f32..1.0));
    let labels = Array2::from_shape_fn((n_targets, n_rows), |(t, j)| {
        if features[[t % n_features, j]] > 0.0 {
            1.0
        } else {
            0.0
        }
    });
    let weights = Array1::from_shape_fn(n_rows, |_| rng.gen_range(0.5f32..1.5));

    let n_test = (n_rows as f32 * test_fraction).round() as usize;
    let n_train = n_rows - n_test;

    let bundle = TrainingBundle::new(
        features.slice(s![.., ..n_train]).to_owned(),
        labels.slice(s![.., ..n_train]).to_owned(),
        weights.slice(s![..n_train]).to_owned(),
    )
    .expect("synthetic train split is consistent");

    if n_test == 0 {
        return bundle;
    }

    bundle
        .with_test_split(
            features.slice(s![.., n_train..]).to_owned(),
            labels.slice(s![.., n_train..]).to_owned(),
            weights.slice(s![n_train..]).to_owned(),
        )
        .expect("synthetic holdout split is consistent")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_sizes_follow_the_fraction() {
        let bundle = synthetic_bundle(2, 3, 100, 0.1, 1);
        assert_eq!(bundle.n_samples(), 90);
        assert_eq!(bundle.n_features(), 3);
        assert_eq!(bundle.n_targets(), 2);
        assert_eq!(bundle.test_split().unwrap().n_samples(), 10);
    }

    #[test]
    fn zero_fraction_has_no_holdout() {
        let bundle = synthetic_bundle(2, 3, 100, 0.0, 1);
        assert_eq!(bundle.n_samples(), 100);
        assert!(bundle.test_split().is_none());
    }

    #[test]
    fn same_seed_same_bundle() {
        let a = synthetic_bundle(2, 2, 50, 0.2, 9);
        let b = synthetic_bundle(2, 2, 50, 0.2, 9);
        assert_eq!(a.train_features(), b.train_features());
        assert_eq!(a.label_column(1), b.label_column(1));
        assert_eq!(a.train_weights(), b.train_weights());
    }
}
