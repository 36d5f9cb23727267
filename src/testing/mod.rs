//! Deterministic test doubles and synthetic data helpers.
//!
//! [`MeanEstimator`] stands in for the opaque single-target trainer in tests:
//! it is cheap, fully deterministic, and records enough of its fit inputs to
//! assert how the planner and dispatcher wired everything up.

mod data;
mod estimator;

pub use data::synthetic_bundle;
pub use estimator::{MeanEstimator, MeanEstimatorConfig, MeanEstimatorError};
