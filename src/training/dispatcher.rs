//! Multi-output training dispatch.

use crate::data::TrainingBundle;
use crate::estimator::TargetEstimator;
use crate::model::CompositeModel;
use crate::utils::run_with_threads;

use super::{FitError, PerTargetJob};

/// The underlying trainer failed while fitting one target.
#[derive(Debug, thiserror::Error)]
#[error("fitting target {target} failed: {source}")]
pub struct TargetFitError {
    /// Index of the offending target.
    pub target: usize,
    /// The underlying cause.
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

/// Fit one estimator per job and assemble the composite model.
///
/// A single shared `config` is applied identically to every target. Each
/// instance `i` is fit on (`train_features`, `jobs[i].labels`,
/// `train_weights`), with the job's eval pair passed as a zero-or-one-entry
/// evaluation-set slice, the shared eval weights, and the job's warm-start
/// seed.
///
/// `degree_of_parallelism` follows [`run_with_threads`] semantics: callers
/// request the target count for parallel mode and `1` for strictly sequential
/// fitting in ascending target order. Estimators land in target-index order
/// either way, so parallelism never alters target-to-estimator assignment.
///
/// # Errors
///
/// If any target's fit fails, the whole dispatch fails with the first
/// [`TargetFitError`] in ascending target order and no model is returned,
/// even when other workers already completed.
pub fn fit_targets<E: TargetEstimator>(
    config: &E::Config,
    bundle: &TrainingBundle,
    jobs: Vec<PerTargetJob<'_, E>>,
    degree_of_parallelism: usize,
) -> Result<CompositeModel<E>, FitError> {
    let results = run_with_threads(degree_of_parallelism, |parallelism| {
        parallelism.maybe_par_map(jobs, |job| {
            E::fit(
                config,
                bundle.train_features(),
                job.labels,
                bundle.train_weights(),
                job.eval.as_slice(),
                job.eval_weights,
                job.warm_start,
            )
            .map(|estimator| {
                log::debug!("target {} fit complete", job.target);
                estimator
            })
            .map_err(|source| TargetFitError {
                target: job.target,
                source: Box::new(source),
            })
        })
    });

    let mut estimators = Vec::with_capacity(results.len());
    for result in results {
        estimators.push(result?);
    }

    Ok(CompositeModel::new(estimators))
}
