//! Training data containers.
//!
//! [`TrainingBundle`] holds the feature/label/weight tables for one training
//! cycle, plus an optional held-out evaluation split. All shape invariants
//! are validated at construction so that planning and dispatch never see
//! inconsistent data.

mod bundle;

pub use bundle::{EvalSplit, ShapeMismatchError, TrainingBundle};
