//! Per-generation-run model registry.

use indexmap::IndexMap;
use serde::Serialize;

use crate::Model;

/// Owns every named model of one generation run, keyed by simple name.
///
/// `RefModel`s and composed-model interfaces hold non-owning name references
/// into this registry. Each run owns its own registry; there is no shared
/// state across runs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModelRegistry {
    models: IndexMap<String, Model>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model under its simple name, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, model: Model) {
        self.models.insert(name.into(), model);
    }

    /// Look up a model by simple name.
    pub fn get(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Iterate models in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Model)> {
        self.models.iter().map(|(name, model)| (name.as_str(), model))
    }
}
