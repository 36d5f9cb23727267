//! The composite multi-target model.

use ndarray::{Array2, ArrayView2};

use crate::data::TrainingBundle;
use crate::estimator::TargetEstimator;
use crate::training::{fit_targets, plan, FitError};

use super::config::MultiTargetConfig;
use super::registry::WarmStartSource;

/// N independently fitted estimators, one per target, in target-index order.
///
/// Immutable after construction: re-fitting produces a new `CompositeModel`,
/// it never mutates one in place.
pub struct CompositeModel<E> {
    estimators: Vec<E>,
}

impl<E> CompositeModel<E> {
    pub(crate) fn new(estimators: Vec<E>) -> Self {
        Self { estimators }
    }

    /// Number of targets this model was trained on.
    #[inline]
    pub fn n_targets(&self) -> usize {
        self.estimators.len()
    }

    /// The fitted estimator for target `i`.
    ///
    /// # Panics
    /// Panics if `i >= n_targets()`.
    #[inline]
    pub fn estimator(&self, i: usize) -> &E {
        &self.estimators[i]
    }

    /// All fitted estimators, in target-index order.
    #[inline]
    pub fn estimators(&self) -> &[E] {
        &self.estimators
    }
}

impl<E: TargetEstimator> CompositeModel<E> {
    /// Train one estimator per target and assemble the composite model.
    ///
    /// Plans per-target jobs from the bundle (evaluation sets are built when
    /// `config.test_split_fraction` is nonzero, warm-start seeds are taken
    /// from `prior` when supplied), then dispatches the fits. The degree of
    /// parallelism is the target count when `config.parallel_training` is
    /// set, else 1 (strictly sequential in target order).
    ///
    /// # Errors
    ///
    /// All-or-nothing: shape or warm-start inconsistencies fail before any
    /// fit is issued, and any per-target fit failure aborts the whole call.
    pub fn train(
        bundle: &TrainingBundle,
        config: &MultiTargetConfig<E::Config>,
        prior: Option<&Self>,
    ) -> Result<Self, FitError> {
        let jobs = plan(bundle, config.eval_enabled(), prior)?;
        let degree_of_parallelism = if config.parallel_training {
            bundle.n_targets()
        } else {
            1
        };
        fit_targets(&config.estimator, bundle, jobs, degree_of_parallelism)
    }

    /// Train with a warm-start source looked up by group identifier.
    ///
    /// Queries `source` for a prior model under `key`, then trains: a hit
    /// seeds continuation training for every target, a miss trains from
    /// scratch.
    pub fn train_with_source<S>(
        bundle: &TrainingBundle,
        config: &MultiTargetConfig<E::Config>,
        source: &S,
        key: &str,
    ) -> Result<Self, FitError>
    where
        S: WarmStartSource<E>,
    {
        let prior = source.prior_model(key);
        if prior.is_some() {
            log::debug!("warm-starting {key} from a prior model");
        }
        Self::train(bundle, config, prior)
    }

    /// Predict all targets for features `[n_features, n_samples]`.
    ///
    /// Returns `[n_targets, n_samples]`; row `i` is target `i`'s estimator
    /// applied independently (no cross-target interaction).
    pub fn predict(&self, features: ArrayView2<'_, f32>) -> Array2<f32> {
        let n_samples = features.ncols();
        let mut output = Array2::zeros((self.estimators.len(), n_samples));

        for (i, estimator) in self.estimators.iter().enumerate() {
            output.row_mut(i).assign(&estimator.predict(features));
        }

        output
    }
}

impl<E> std::fmt::Debug for CompositeModel<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeModel")
            .field("n_targets", &self.estimators.len())
            .finish()
    }
}
