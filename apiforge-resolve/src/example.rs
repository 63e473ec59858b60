//! Example value generation for resolved properties and models.
//!
//! Values are canonical placeholders so rendered examples stay stable across
//! runs. Ref cycles terminate through a per-call visited set: revisiting a
//! model already being rendered yields an empty placeholder instead of
//! recursing.

use std::collections::HashSet;

use apiforge_ir::{Model, ModelRegistry, Property, PropertyKind, StringFormat};
use serde_json::{Value, json};

const DATE_EXAMPLE: &str = "2000-01-23T04:56:07.000+00:00";
const UUID_EXAMPLE: &str = "046b6c7f-0b8a-43b9-b35d-6489e6daee91";

/// Generates example values against one run's model registry.
#[derive(Debug)]
pub struct ExampleGenerator<'a> {
    registry: &'a ModelRegistry,
}

impl<'a> ExampleGenerator<'a> {
    pub fn new(registry: &'a ModelRegistry) -> Self {
        Self { registry }
    }

    /// Produce an example value for a property.
    pub fn property_example(&self, property: &Property) -> Value {
        let mut visited = HashSet::new();
        self.resolve_property(property, &mut visited)
    }

    /// Produce an example value for a registered model.
    pub fn model_example(&self, name: &str) -> Value {
        let mut visited = HashSet::new();
        match self.registry.get(name) {
            Some(model) => self.resolve_model(name, model, &mut visited),
            None => json!(""),
        }
    }

    fn resolve_property(&self, property: &Property, visited: &mut HashSet<String>) -> Value {
        if let Some(example) = &property.example {
            return example.clone();
        }
        match &property.kind {
            PropertyKind::Boolean => json!(true),
            PropertyKind::Integer => json!(123),
            PropertyKind::Long => json!(123456789_i64),
            PropertyKind::Float => json!(1.23),
            PropertyKind::Double => json!(3.149),
            PropertyKind::Decimal => json!(1.3579),
            PropertyKind::String { format } => match format {
                StringFormat::Date | StringFormat::DateTime => json!(DATE_EXAMPLE),
                StringFormat::Uuid => json!(UUID_EXAMPLE),
                StringFormat::Byte | StringFormat::Binary => json!(""),
                StringFormat::Plain | StringFormat::Password => json!("aeiou"),
            },
            PropertyKind::File => json!(""),
            PropertyKind::Null => Value::Null,
            PropertyKind::Array { items } => {
                json!([self.resolve_property(items, visited)])
            }
            PropertyKind::Map { value } => {
                let key = property.name.as_deref().unwrap_or("key");
                json!({ key: self.resolve_property(value, visited) })
            }
            PropertyKind::Object { .. } => json!("{}"),
            PropertyKind::Ref { target } => match self.registry.get(target) {
                Some(model) => self.resolve_model(target, model, visited),
                None => json!(""),
            },
        }
    }

    fn resolve_model(&self, name: &str, model: &Model, visited: &mut HashSet<String>) -> Value {
        if visited.contains(name) {
            // Placeholder on the second visit; breaks ref cycles.
            return json!("");
        }
        visited.insert(name.to_owned());
        self.model_value(model, visited)
    }

    fn model_value(&self, model: &Model, visited: &mut HashSet<String>) -> Value {
        match model {
            Model::Impl(imp) => {
                let mut values = serde_json::Map::new();
                for (property_name, property) in &imp.properties {
                    values.insert(
                        property_name.clone(),
                        self.resolve_property(property, visited),
                    );
                }
                Value::Object(values)
            }
            Model::Array(array) => json!([self.resolve_property(&array.items, visited)]),
            Model::Ref(reference) => match self.registry.get(&reference.ref_name) {
                Some(target) => self.resolve_model(&reference.ref_name, target, visited),
                None => json!(""),
            },
            Model::Composed(composed) => match &composed.child {
                Some(child) => self.model_value(child, visited),
                None => json!({}),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiforge_ir::{ModelImpl, RefModel};
    use indexmap::IndexMap;

    fn registry_with(name: &str, model: Model) -> ModelRegistry {
        let mut registry = ModelRegistry::new();
        registry.insert(name, model);
        registry
    }

    #[test]
    fn test_scalar_examples() {
        let registry = ModelRegistry::new();
        let generator = ExampleGenerator::new(&registry);
        assert_eq!(
            generator.property_example(&Property::new(PropertyKind::Boolean)),
            json!(true)
        );
        assert_eq!(generator.property_example(&Property::string()), json!("aeiou"));
        assert_eq!(
            generator.property_example(&Property::new(PropertyKind::String {
                format: StringFormat::Uuid
            })),
            json!(UUID_EXAMPLE)
        );
    }

    #[test]
    fn test_declared_example_wins() {
        let registry = ModelRegistry::new();
        let generator = ExampleGenerator::new(&registry);
        let mut property = Property::string();
        property.example = Some(json!("fluffy"));
        assert_eq!(generator.property_example(&property), json!("fluffy"));
    }

    #[test]
    fn test_array_wraps_item_example() {
        let registry = ModelRegistry::new();
        let generator = ExampleGenerator::new(&registry);
        let property = Property::new(PropertyKind::Array {
            items: Box::new(Property::new(PropertyKind::Integer)),
        });
        assert_eq!(generator.property_example(&property), json!([123]));
    }

    #[test]
    fn test_ref_follows_registry() {
        let mut properties = IndexMap::new();
        properties.insert("name".to_string(), Property::string().named("name"));
        let registry = registry_with(
            "Pet",
            Model::Impl(ModelImpl {
                name: Some("Pet".into()),
                properties,
                ..Default::default()
            }),
        );
        let generator = ExampleGenerator::new(&registry);
        let example = generator.property_example(&Property::reference("Pet"));
        assert_eq!(example, json!({ "name": "aeiou" }));
    }

    #[test]
    fn test_self_referential_cycle_terminates_with_placeholder() {
        let mut properties = IndexMap::new();
        properties.insert(
            "parent".to_string(),
            Property::reference("Node").named("parent"),
        );
        let registry = registry_with(
            "Node",
            Model::Impl(ModelImpl {
                name: Some("Node".into()),
                properties,
                ..Default::default()
            }),
        );
        let generator = ExampleGenerator::new(&registry);
        let example = generator.model_example("Node");
        assert_eq!(example, json!({ "parent": "" }));
    }

    #[test]
    fn test_mutual_cycle_terminates() {
        let mut a_props = IndexMap::new();
        a_props.insert("b".to_string(), Property::reference("B").named("b"));
        let mut b_props = IndexMap::new();
        b_props.insert("a".to_string(), Property::reference("A").named("a"));

        let mut registry = ModelRegistry::new();
        registry.insert(
            "A",
            Model::Impl(ModelImpl {
                name: Some("A".into()),
                properties: a_props,
                ..Default::default()
            }),
        );
        registry.insert(
            "B",
            Model::Impl(ModelImpl {
                name: Some("B".into()),
                properties: b_props,
                ..Default::default()
            }),
        );

        let generator = ExampleGenerator::new(&registry);
        assert_eq!(generator.model_example("A"), json!({ "b": { "a": "" } }));
    }

    #[test]
    fn test_composed_model_uses_child() {
        let mut properties = IndexMap::new();
        properties.insert("bark".to_string(), Property::new(PropertyKind::Boolean));
        let registry = registry_with(
            "Dog",
            Model::Composed(apiforge_ir::ComposedModel {
                name: Some("Dog".into()),
                child: Some(Box::new(Model::Impl(ModelImpl {
                    properties,
                    ..Default::default()
                }))),
                interfaces: vec![RefModel::new("Animal")],
                ..Default::default()
            }),
        );
        let generator = ExampleGenerator::new(&registry);
        assert_eq!(generator.model_example("Dog"), json!({ "bark": true }));
    }
}
