//! Named model types exposed to emitters.
//!
//! A [`Model`] is a named type in the generation registry. Each variant keeps
//! only the property subset it allows; everything else from the raw node is
//! dropped during lifting, not propagated.

use indexmap::IndexMap;
use serde::Serialize;

use crate::Property;

/// A named type exposed to emitters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "model", rename_all = "camelCase")]
pub enum Model {
    /// Concrete object with named properties.
    Impl(ModelImpl),
    /// Named alias for an array.
    Array(ArrayModel),
    /// Named alias pointing at another model by simple name.
    Ref(RefModel),
    /// Composition of one concrete child and zero or more interfaces.
    Composed(ComposedModel),
}

impl Model {
    /// The model's own name, if it carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Model::Impl(m) => m.name.as_deref(),
            Model::Array(m) => m.name.as_deref(),
            Model::Ref(_) => None,
            Model::Composed(m) => m.name.as_deref(),
        }
    }
}

/// A concrete object model with named, required-or-optional properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelImpl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub properties: IndexMap<String, Property>,
    /// Names of required properties, in declaration order.
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<Property>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub vendor_extensions: IndexMap<String, serde_json::Value>,
}

/// A named alias for an array of some item type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: Property,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub vendor_extensions: IndexMap<String, serde_json::Value>,
}

/// A non-owning name reference into the model registry.
///
/// The target is resolved lazily by name lookup; it is never inlined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefModel {
    /// Simple name of the referenced model.
    pub ref_name: String,
}

impl RefModel {
    pub fn new(ref_name: impl Into<String>) -> Self {
        Self {
            ref_name: ref_name.into(),
        }
    }
}

/// A composed model built from an `allOf` schema.
///
/// `child` is the concrete implementation derived from the schema's first
/// non-ref `allOf` entry and `interfaces` are the ref-based entries. `parent`
/// is supplied by the referencing context, not the schema itself; the slot
/// stays empty during schema-driven lifting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComposedModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Model>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<Box<Model>>,
    pub interfaces: Vec<RefModel>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub vendor_extensions: IndexMap<String, serde_json::Value>,
}

impl ComposedModel {
    /// The full composition list: child, interfaces, then parent,
    /// deduplicated by identity.
    pub fn all_of(&self) -> Vec<Model> {
        let mut entries = Vec::new();
        if let Some(child) = &self.child {
            entries.push((**child).clone());
        }
        for interface in &self.interfaces {
            entries.push(Model::Ref(interface.clone()));
        }
        if let Some(parent) = &self.parent {
            entries.push((**parent).clone());
        }

        let mut deduped: Vec<Model> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !deduped.contains(&entry) {
                deduped.push(entry);
            }
        }
        deduped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_name() {
        let model = Model::Impl(ModelImpl {
            name: Some("Pet".into()),
            ..Default::default()
        });
        assert_eq!(model.name(), Some("Pet"));
        assert_eq!(Model::Ref(RefModel::new("Tag")).name(), None);
    }

    #[test]
    fn test_all_of_order() {
        let composed = ComposedModel {
            child: Some(Box::new(Model::Impl(ModelImpl::default()))),
            interfaces: vec![RefModel::new("Named"), RefModel::new("Aged")],
            parent: Some(Box::new(Model::Ref(RefModel::new("Base")))),
            ..Default::default()
        };
        let all = composed.all_of();
        assert_eq!(all.len(), 4);
        assert!(matches!(all[0], Model::Impl(_)));
        assert_eq!(all[1], Model::Ref(RefModel::new("Named")));
        assert_eq!(all[3], Model::Ref(RefModel::new("Base")));
    }

    #[test]
    fn test_all_of_dedupes_identical_entries() {
        let composed = ComposedModel {
            interfaces: vec![RefModel::new("Base"), RefModel::new("Base")],
            parent: Some(Box::new(Model::Ref(RefModel::new("Base")))),
            ..Default::default()
        };
        assert_eq!(composed.all_of().len(), 1);
    }
}
