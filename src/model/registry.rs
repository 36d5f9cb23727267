//! Warm-start model lookup.

use std::collections::HashMap;

use super::composite::CompositeModel;

/// Lookup of previously trained composite models by group identifier
/// (e.g. a trading pair or series id).
///
/// A returned model is read-only input to planning; training never mutates
/// it.
pub trait WarmStartSource<E> {
    /// The prior model for `key`, if one exists with trained estimators.
    fn prior_model(&self, key: &str) -> Option<&CompositeModel<E>>;
}

/// In-memory [`WarmStartSource`] keyed by string identifier.
pub struct ModelRegistry<E> {
    models: HashMap<String, CompositeModel<E>>,
}

impl<E> ModelRegistry<E> {
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
        }
    }

    /// Store `model` under `key`, returning the model it replaced, if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        model: CompositeModel<E>,
    ) -> Option<CompositeModel<E>> {
        self.models.insert(key.into(), model)
    }

    /// Number of stored models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns true if no models are stored.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl<E> Default for ModelRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> WarmStartSource<E> for ModelRegistry<E> {
    fn prior_model(&self, key: &str) -> Option<&CompositeModel<E>> {
        self.models.get(key)
    }
}

impl<E> std::fmt::Debug for ModelRegistry<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("n_models", &self.models.len())
            .finish()
    }
}
