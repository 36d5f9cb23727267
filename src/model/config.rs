//! Multi-target training configuration with builder pattern.

use bon::Builder;

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Test-split fraction must be a finite value in `[0, 1)`.
    #[error("test_split_fraction must be in [0, 1), got {0}")]
    InvalidTestSplit(f32),
}

/// Configuration for a composite multi-target fit.
///
/// `C` is the single-target trainer's hyperparameter bag; it is opaque to
/// this crate and applied identically to every target. The remaining fields
/// steer orchestration only.
///
/// # Example
///
/// ```
/// use multiboost::MultiTargetConfig;
/// use multiboost::testing::MeanEstimatorConfig;
///
/// let config = MultiTargetConfig::builder()
///     .estimator(MeanEstimatorConfig::default())
///     .parallel_training(true)
///     .test_split_fraction(0.1)
///     .build()
///     .unwrap();
///
/// assert!(config.parallel_training);
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(finish_fn(vis = "", name = __build_internal))]
pub struct MultiTargetConfig<C> {
    /// Hyperparameters handed verbatim to every target's trainer.
    pub estimator: C,

    /// Fit targets concurrently, one worker slot per target. Default: false.
    #[builder(default = false)]
    pub parallel_training: bool,

    /// Fraction of samples held out for evaluation. Exactly `0.0` disables
    /// evaluation-set construction for every target. Default: 0.0.
    #[builder(default = 0.0)]
    pub test_split_fraction: f32,
}

/// Custom finishing function that validates the config.
impl<C, S: multi_target_config_builder::IsComplete> MultiTargetConfigBuilder<C, S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTestSplit`] if the fraction is not a
    /// finite value in `[0, 1)`.
    pub fn build(self) -> Result<MultiTargetConfig<C>, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl<C> MultiTargetConfig<C> {
    /// Whether evaluation sets should be constructed at plan time.
    #[inline]
    pub fn eval_enabled(&self) -> bool {
        self.test_split_fraction != 0.0
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let f = self.test_split_fraction;
        if !f.is_finite() || !(0.0..1.0).contains(&f) {
            return Err(ConfigError::InvalidTestSplit(f));
        }
        Ok(())
    }
}
