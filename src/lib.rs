//! multiboost: multi-target fit orchestration for gradient boosted classifiers.
//!
//! Trains one independent classifier per target column of a labeled dataset
//! and bundles the results into a single [`CompositeModel`]. The underlying
//! single-target trainer is opaque to this crate: anything implementing
//! [`TargetEstimator`] can be dispatched.
//!
//! # Key Types
//!
//! - [`TrainingBundle`] - Feature/label/weight tables, with an optional holdout split
//! - [`MultiTargetConfig`] - Shared hyperparameters plus orchestration flags
//! - [`CompositeModel`] - N fitted estimators with per-target prediction fan-out
//! - [`TargetEstimator`] - Trait seam for the single-target trainer
//! - [`ModelRegistry`] - Warm-start lookup by group identifier
//!
//! # Training
//!
//! Build a config with `MultiTargetConfig::builder()`, then call
//! [`CompositeModel::train`], or [`CompositeModel::train_with_source`] to
//! warm-start from a previously trained model.
//!
//! Per-target fits either all succeed or the whole call fails with the first
//! error in target order; no partial model is ever returned.

pub mod data;
pub mod estimator;
pub mod model;
pub mod testing;
pub mod training;
pub mod utils;

// High-level model types
pub use model::{CompositeModel, ModelRegistry, WarmStartSource};

// Configuration types
pub use model::{ConfigError, MultiTargetConfig};

// Data types (for preparing training data)
pub use data::{ShapeMismatchError, TrainingBundle};

// The single-target trainer seam
pub use estimator::{EvalSet, TargetEstimator};

// Planning and dispatch internals (useful for custom orchestration)
pub use training::{
    fit_targets, plan, FitError, PerTargetJob, PriorModelMismatchError, TargetFitError,
};

// Shared utilities
pub use utils::{run_with_threads, Parallelism};
