//! A deterministic stand-in for the single-target trainer.

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::estimator::{EvalSet, TargetEstimator};

/// Configuration for [`MeanEstimator`].
#[derive(Debug, Clone, Default)]
pub struct MeanEstimatorConfig {
    /// Fail the fit when the label column holds a single distinct value,
    /// imitating a degenerate single-class classification target.
    pub fail_on_constant_labels: bool,
}

/// Fit failures of [`MeanEstimator`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeanEstimatorError {
    #[error("label column is empty")]
    EmptyLabels,
    #[error("label column is single-valued")]
    ConstantLabels,
}

/// Predicts the weighted mean of the labels it was fit on.
///
/// Records its fit inputs so tests can verify per-target wiring:
/// `labels_seen` is the exact label column, `eval_rows`/`eval_weight_rows`
/// capture whether and how large an evaluation set was passed, and
/// `generations` counts warm-start continuations (1 = cold start).
#[derive(Debug, Clone, PartialEq)]
pub struct MeanEstimator {
    pub mean: f32,
    pub generations: usize,
    pub labels_seen: Vec<f32>,
    pub eval_rows: Option<usize>,
    pub eval_weight_rows: Option<usize>,
}

impl TargetEstimator for MeanEstimator {
    type Config = MeanEstimatorConfig;
    type Error = MeanEstimatorError;

    fn fit(
        config: &Self::Config,
        _features: ArrayView2<'_, f32>,
        labels: ArrayView1<'_, f32>,
        weights: ArrayView1<'_, f32>,
        eval_sets: &[EvalSet<'_>],
        eval_weights: Option<ArrayView1<'_, f32>>,
        init_model: Option<&Self>,
    ) -> Result<Self, Self::Error> {
        if labels.is_empty() {
            return Err(MeanEstimatorError::EmptyLabels);
        }
        if config.fail_on_constant_labels {
            let first = labels[0];
            if labels.iter().all(|&y| y == first) {
                return Err(MeanEstimatorError::ConstantLabels);
            }
        }

        let weight_sum: f32 = weights.sum();
        let fresh_mean = if weight_sum > 0.0 {
            labels
                .iter()
                .zip(weights.iter())
                .map(|(&y, &w)| y * w)
                .sum::<f32>()
                / weight_sum
        } else {
            labels.sum() / labels.len() as f32
        };

        // Continuation blends with the seed model's state.
        let (mean, generations) = match init_model {
            Some(prior) => ((prior.mean + fresh_mean) / 2.0, prior.generations + 1),
            None => (fresh_mean, 1),
        };

        Ok(Self {
            mean,
            generations,
            labels_seen: labels.to_vec(),
            eval_rows: eval_sets.first().map(|e| e.labels.len()),
            eval_weight_rows: eval_weights.map(|w| w.len()),
        })
    }

    fn predict(&self, features: ArrayView2<'_, f32>) -> Array1<f32> {
        Array1::from_elem(features.ncols(), self.mean)
    }
}
