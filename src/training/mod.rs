//! Multi-target training orchestration.
//!
//! Two collaborating pieces:
//!
//! - [`plan`]: builds one [`PerTargetJob`] per label column, wiring up the
//!   evaluation split and warm-start seeds.
//! - [`fit_targets`]: fans the jobs out to independent estimator fits,
//!   sequentially or on a rayon pool, and assembles the composite model.
//!
//! Both are exercised together by [`CompositeModel::train`](crate::CompositeModel::train);
//! they are public for callers that need custom orchestration.

mod dispatcher;
mod planner;

pub use dispatcher::{fit_targets, TargetFitError};
pub use planner::{plan, PerTargetJob, PriorModelMismatchError};

use crate::data::ShapeMismatchError;

/// Any failure of a composite fit.
///
/// The fit is atomic from the caller's perspective: either all targets fit
/// and a model is returned, or the first encountered error is surfaced and
/// nothing is returned. None of these are retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum FitError {
    /// Row-count or target-count inconsistency, detected before any fit call.
    #[error(transparent)]
    ShapeMismatch(#[from] ShapeMismatchError),

    /// Warm-start source disagrees with the bundle on the target count.
    #[error(transparent)]
    PriorModelMismatch(#[from] PriorModelMismatchError),

    /// The underlying trainer failed for one target.
    #[error(transparent)]
    TargetFit(#[from] TargetFitError),
}
