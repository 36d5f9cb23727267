//! The single-target trainer seam.
//!
//! The boosting algorithm itself is an external collaborator. This crate only
//! requires that it can be fit on one label column at a time and queried for
//! per-sample scores, which [`TargetEstimator`] captures.

use ndarray::{Array1, ArrayView1, ArrayView2};

/// A borrowed (features, labels) pair evaluated during training.
///
/// Evaluation sets monitor generalization; they never contribute gradients.
#[derive(Debug, Clone, Copy)]
pub struct EvalSet<'a> {
    /// Holdout features `[n_features, n_samples]`.
    pub features: ArrayView2<'a, f32>,
    /// Holdout labels for one target.
    pub labels: ArrayView1<'a, f32>,
}

impl<'a> EvalSet<'a> {
    pub fn new(features: ArrayView2<'a, f32>, labels: ArrayView1<'a, f32>) -> Self {
        Self { features, labels }
    }
}

/// A trainable single-target classifier.
///
/// Implementations must be `Send + Sync`: in parallel dispatch every target's
/// fit runs on its own worker, sharing read-only feature and weight views.
pub trait TargetEstimator: Sized + Send + Sync {
    /// Opaque hyperparameter bag, applied identically to every target and
    /// passed through unmodified.
    type Config: Clone + Send + Sync;

    /// Error raised by a failed fit (e.g. degenerate single-class labels).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fit a fresh estimator on one label column.
    ///
    /// # Arguments
    ///
    /// * `config` - Shared hyperparameters
    /// * `features` - Training features `[n_features, n_samples]`
    /// * `labels` - This target's label column (length = n_samples)
    /// * `weights` - Training sample weights (length = n_samples)
    /// * `eval_sets` - Zero or one evaluation sets for this target
    /// * `eval_weights` - Holdout sample weights, shared across targets
    /// * `init_model` - Previously fitted estimator to continue from, if any
    fn fit(
        config: &Self::Config,
        features: ArrayView2<'_, f32>,
        labels: ArrayView1<'_, f32>,
        weights: ArrayView1<'_, f32>,
        eval_sets: &[EvalSet<'_>],
        eval_weights: Option<ArrayView1<'_, f32>>,
        init_model: Option<&Self>,
    ) -> Result<Self, Self::Error>;

    /// Predict one score per sample for features `[n_features, n_samples]`.
    fn predict(&self, features: ArrayView2<'_, f32>) -> Array1<f32>;
}
