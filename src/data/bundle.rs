//! The training bundle and its shape validation.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Shape inconsistencies detected before any fit call is issued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeMismatchError {
    #[error("train labels have {labels} samples but train features have {samples}")]
    TrainLabelSamples { samples: usize, labels: usize },

    #[error("train weights have {weights} entries but train features have {samples} samples")]
    TrainWeightSamples { samples: usize, weights: usize },

    #[error("test labels have {labels} samples but test features have {samples}")]
    TestLabelSamples { samples: usize, labels: usize },

    #[error("test weights have {weights} entries but test features have {samples} samples")]
    TestWeightSamples { samples: usize, weights: usize },

    #[error("test split has {got} targets but the train split has {expected}")]
    TargetCount { expected: usize, got: usize },

    #[error("label table has no target rows")]
    NoTargets,

    #[error("evaluation requested but the bundle has no test split")]
    MissingTestSplit,
}

/// A held-out (features, labels, weights) split used for evaluation during
/// training. Gradients are never computed from it.
#[derive(Debug, Clone)]
pub struct EvalSplit {
    features: Array2<f32>,
    labels: Array2<f32>,
    weights: Array1<f32>,
}

impl EvalSplit {
    /// Holdout features `[n_features, n_samples]`.
    #[inline]
    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// Labels for target `i` across the holdout samples.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    #[inline]
    pub fn label_column(&self, i: usize) -> ArrayView1<'_, f32> {
        self.labels.row(i)
    }

    /// Holdout sample weights, shared by all targets.
    #[inline]
    pub fn weights(&self) -> ArrayView1<'_, f32> {
        self.weights.view()
    }

    /// Number of holdout samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.ncols()
    }
}

/// Feature, label, and weight tables for one training cycle.
///
/// # Storage Layout
///
/// Features are stored **feature-major**: `[n_features, n_samples]`.
/// Labels are stored `[n_targets, n_samples]`, so target `i` is row `i`
/// of the label table. Target index is positional, not name-based.
///
/// # Example
///
/// ```
/// use multiboost::TrainingBundle;
/// use ndarray::array;
///
/// // 2 features, 3 samples, 2 targets
/// let features = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
/// let labels = array![[0.0, 1.0, 0.0], [1.0, 1.0, 0.0]];
/// let weights = array![1.0, 1.0, 1.0];
/// let bundle = TrainingBundle::new(features, labels, weights).unwrap();
///
/// assert_eq!(bundle.n_samples(), 3);
/// assert_eq!(bundle.n_targets(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TrainingBundle {
    /// Feature data: `[n_features, n_samples]`.
    features: Array2<f32>,
    /// Label data: `[n_targets, n_samples]`.
    labels: Array2<f32>,
    /// Sample weights: length = n_samples.
    weights: Array1<f32>,
    /// Optional held-out evaluation split.
    test: Option<EvalSplit>,
}

impl TrainingBundle {
    /// Create a bundle from feature-major training data.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatchError`] if sample counts disagree across the
    /// tables, or if the label table has zero target rows.
    pub fn new(
        features: Array2<f32>,
        labels: Array2<f32>,
        weights: Array1<f32>,
    ) -> Result<Self, ShapeMismatchError> {
        let n_samples = features.ncols();

        if labels.ncols() != n_samples {
            return Err(ShapeMismatchError::TrainLabelSamples {
                samples: n_samples,
                labels: labels.ncols(),
            });
        }
        if weights.len() != n_samples {
            return Err(ShapeMismatchError::TrainWeightSamples {
                samples: n_samples,
                weights: weights.len(),
            });
        }
        if labels.nrows() == 0 {
            return Err(ShapeMismatchError::NoTargets);
        }

        Ok(Self {
            features,
            labels,
            weights,
            test: None,
        })
    }

    /// Attach a held-out evaluation split.
    ///
    /// The split must be internally consistent and carry the same number of
    /// targets as the training labels.
    pub fn with_test_split(
        mut self,
        features: Array2<f32>,
        labels: Array2<f32>,
        weights: Array1<f32>,
    ) -> Result<Self, ShapeMismatchError> {
        let n_samples = features.ncols();

        if labels.ncols() != n_samples {
            return Err(ShapeMismatchError::TestLabelSamples {
                samples: n_samples,
                labels: labels.ncols(),
            });
        }
        if weights.len() != n_samples {
            return Err(ShapeMismatchError::TestWeightSamples {
                samples: n_samples,
                weights: weights.len(),
            });
        }
        if labels.nrows() != self.n_targets() {
            return Err(ShapeMismatchError::TargetCount {
                expected: self.n_targets(),
                got: labels.nrows(),
            });
        }

        self.test = Some(EvalSplit {
            features,
            labels,
            weights,
        });
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of training samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.ncols()
    }

    /// Number of features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.nrows()
    }

    /// Number of targets (label table rows). Fixed for the whole bundle.
    #[inline]
    pub fn n_targets(&self) -> usize {
        self.labels.nrows()
    }

    /// Training features `[n_features, n_samples]`.
    #[inline]
    pub fn train_features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// Labels for target `i` across the training samples.
    ///
    /// # Panics
    /// Panics if `i >= n_targets()`.
    #[inline]
    pub fn label_column(&self, i: usize) -> ArrayView1<'_, f32> {
        self.labels.row(i)
    }

    /// Training sample weights.
    #[inline]
    pub fn train_weights(&self) -> ArrayView1<'_, f32> {
        self.weights.view()
    }

    /// The held-out evaluation split, if one was attached.
    #[inline]
    pub fn test_split(&self) -> Option<&EvalSplit> {
        self.test.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn features_2x3() -> Array2<f32> {
        array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]
    }

    #[test]
    fn valid_bundle() {
        let bundle = TrainingBundle::new(
            features_2x3(),
            array![[0.0, 1.0, 0.0], [1.0, 0.0, 1.0]],
            array![1.0, 1.0, 1.0],
        )
        .unwrap();

        assert_eq!(bundle.n_samples(), 3);
        assert_eq!(bundle.n_features(), 2);
        assert_eq!(bundle.n_targets(), 2);
        assert!(bundle.test_split().is_none());
        assert_eq!(bundle.label_column(1), array![1.0, 0.0, 1.0]);
    }

    #[test]
    fn rejects_label_sample_mismatch() {
        let result = TrainingBundle::new(
            features_2x3(),
            array![[0.0, 1.0]],
            array![1.0, 1.0, 1.0],
        );
        assert_eq!(
            result.unwrap_err(),
            ShapeMismatchError::TrainLabelSamples {
                samples: 3,
                labels: 2
            }
        );
    }

    #[test]
    fn rejects_weight_mismatch() {
        let result =
            TrainingBundle::new(features_2x3(), array![[0.0, 1.0, 0.0]], array![1.0, 1.0]);
        assert_eq!(
            result.unwrap_err(),
            ShapeMismatchError::TrainWeightSamples {
                samples: 3,
                weights: 2
            }
        );
    }

    #[test]
    fn rejects_empty_label_table() {
        let result = TrainingBundle::new(
            features_2x3(),
            Array2::zeros((0, 3)),
            array![1.0, 1.0, 1.0],
        );
        assert_eq!(result.unwrap_err(), ShapeMismatchError::NoTargets);
    }

    #[test]
    fn test_split_must_match_target_count() {
        let bundle = TrainingBundle::new(
            features_2x3(),
            array![[0.0, 1.0, 0.0], [1.0, 0.0, 1.0]],
            array![1.0, 1.0, 1.0],
        )
        .unwrap();

        let result = bundle.with_test_split(
            array![[1.0], [2.0]],
            array![[0.0]], // one target instead of two
            array![1.0],
        );
        assert_eq!(
            result.unwrap_err(),
            ShapeMismatchError::TargetCount {
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_split_validates_internally() {
        let bundle = TrainingBundle::new(
            features_2x3(),
            array![[0.0, 1.0, 0.0]],
            array![1.0, 1.0, 1.0],
        )
        .unwrap();

        let result = bundle.clone().with_test_split(
            array![[1.0, 2.0], [3.0, 4.0]],
            array![[0.0, 1.0]],
            array![1.0], // two samples, one weight
        );
        assert_eq!(
            result.unwrap_err(),
            ShapeMismatchError::TestWeightSamples {
                samples: 2,
                weights: 1
            }
        );

        let ok = bundle.with_test_split(
            array![[1.0, 2.0], [3.0, 4.0]],
            array![[0.0, 1.0]],
            array![1.0, 0.5],
        );
        let split = ok.unwrap();
        let split = split.test_split().unwrap();
        assert_eq!(split.n_samples(), 2);
        assert_eq!(split.label_column(0), array![0.0, 1.0]);
    }
}
