//! Per-target fit planning.

use ndarray::ArrayView1;

use crate::data::{ShapeMismatchError, TrainingBundle};
use crate::estimator::{EvalSet, TargetEstimator};
use crate::model::CompositeModel;

use super::FitError;

/// A supplied warm-start model does not cover the bundle's targets.
///
/// Padding or truncating the seed list would silently retrain some targets
/// from scratch while continuing others, so a mismatch is always an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("warm-start model has {prior_targets} estimators but the bundle has {bundle_targets} targets")]
pub struct PriorModelMismatchError {
    pub prior_targets: usize,
    pub bundle_targets: usize,
}

/// One target's training job, built fresh for every fit call.
///
/// Borrows everything from the bundle and the prior model; nothing is copied
/// until the underlying trainer decides to.
#[derive(Debug, Clone, Copy)]
pub struct PerTargetJob<'a, E> {
    /// Target index in `[0, n_targets)`.
    pub target: usize,
    /// This target's label column from the training split.
    pub labels: ArrayView1<'a, f32>,
    /// Evaluation pair for this target, absent when evaluation is disabled.
    pub eval: Option<EvalSet<'a>>,
    /// Holdout sample weights. Shared by all jobs: holdout weighting is
    /// target-independent.
    pub eval_weights: Option<ArrayView1<'a, f32>>,
    /// Previously fitted estimator seeding continuation training.
    pub warm_start: Option<&'a E>,
}

/// Build one job per target, in target-index order.
///
/// `eval_enabled` is false exactly when the caller's test-split fraction is
/// zero; in that case no job carries an eval pair or eval weights. Otherwise
/// every job receives (`test_features`, its own test label column) and the
/// shared `test_weights` vector.
///
/// # Errors
///
/// - [`ShapeMismatchError::MissingTestSplit`] if evaluation is requested but
///   the bundle has no test split.
/// - [`PriorModelMismatchError`] if `prior` is present with a target count
///   different from the bundle's.
pub fn plan<'a, E: TargetEstimator>(
    bundle: &'a TrainingBundle,
    eval_enabled: bool,
    prior: Option<&'a CompositeModel<E>>,
) -> Result<Vec<PerTargetJob<'a, E>>, FitError> {
    let n_targets = bundle.n_targets();

    if let Some(prior) = prior {
        if prior.n_targets() != n_targets {
            return Err(PriorModelMismatchError {
                prior_targets: prior.n_targets(),
                bundle_targets: n_targets,
            }
            .into());
        }
    }

    let eval_split = if eval_enabled {
        Some(
            bundle
                .test_split()
                .ok_or(ShapeMismatchError::MissingTestSplit)?,
        )
    } else {
        None
    };

    let jobs = (0..n_targets)
        .map(|i| PerTargetJob {
            target: i,
            labels: bundle.label_column(i),
            eval: eval_split.map(|split| EvalSet::new(split.features(), split.label_column(i))),
            eval_weights: eval_split.map(|split| split.weights()),
            warm_start: prior.map(|p| p.estimator(i)),
        })
        .collect();

    log::debug!(
        "planned {} per-target jobs (eval: {}, warm start: {})",
        n_targets,
        eval_split.is_some(),
        prior.is_some(),
    );

    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MultiTargetConfig;
    use crate::testing::{synthetic_bundle, MeanEstimator, MeanEstimatorConfig};

    fn cold_config() -> MultiTargetConfig<MeanEstimatorConfig> {
        MultiTargetConfig::builder()
            .estimator(MeanEstimatorConfig::default())
            .build()
            .unwrap()
    }

    #[test]
    fn one_job_per_target_in_order() {
        let bundle = synthetic_bundle(4, 3, 20, 0.0, 7);
        let jobs = plan::<MeanEstimator>(&bundle, false, None).unwrap();

        assert_eq!(jobs.len(), 4);
        for (i, job) in jobs.iter().enumerate() {
            assert_eq!(job.target, i);
            assert_eq!(job.labels, bundle.label_column(i));
            assert!(job.eval.is_none());
            assert!(job.eval_weights.is_none());
            assert!(job.warm_start.is_none());
        }
    }

    #[test]
    fn eval_enabled_shares_the_holdout_weights() {
        let bundle = synthetic_bundle(3, 2, 50, 0.2, 7);
        let jobs = plan::<MeanEstimator>(&bundle, true, None).unwrap();

        let split = bundle.test_split().unwrap();
        for job in &jobs {
            let eval = job.eval.expect("eval pair present");
            assert_eq!(eval.features, split.features());
            assert_eq!(eval.labels, split.label_column(job.target));

            // Same underlying buffer, not a per-target slice.
            let weights = job.eval_weights.expect("eval weights present");
            assert_eq!(weights.as_ptr(), split.weights().as_ptr());
        }
    }

    #[test]
    fn eval_without_test_split_fails_fast() {
        let bundle = synthetic_bundle(2, 2, 20, 0.0, 7);
        let err = plan::<MeanEstimator>(&bundle, true, None).unwrap_err();
        assert!(matches!(
            err,
            FitError::ShapeMismatch(ShapeMismatchError::MissingTestSplit)
        ));
    }

    #[test]
    fn prior_estimators_seed_matching_targets() {
        let bundle = synthetic_bundle(3, 2, 30, 0.0, 7);
        let prior = CompositeModel::<MeanEstimator>::train(&bundle, &cold_config(), None).unwrap();

        let jobs = plan(&bundle, false, Some(&prior)).unwrap();
        for (i, job) in jobs.iter().enumerate() {
            let seed = job.warm_start.expect("warm start present");
            assert!(std::ptr::eq(seed, prior.estimator(i)));
        }
    }

    #[test]
    fn prior_target_count_mismatch_is_an_error() {
        let prior_bundle = synthetic_bundle(2, 2, 30, 0.0, 7);
        let prior =
            CompositeModel::<MeanEstimator>::train(&prior_bundle, &cold_config(), None).unwrap();

        let bundle = synthetic_bundle(3, 2, 30, 0.0, 7);
        let err = plan(&bundle, false, Some(&prior)).unwrap_err();
        assert!(matches!(
            err,
            FitError::PriorModelMismatch(PriorModelMismatchError {
                prior_targets: 2,
                bundle_targets: 3,
            })
        ));
    }
}
