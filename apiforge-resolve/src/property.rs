//! Raw-node classification into resolved properties.
//!
//! Resolution is total and deterministic: a node either maps to exactly one
//! [`PropertyKind`] variant or fails with an error naming the offending
//! shape. There is no catch-all fallback.

use apiforge_document::{AdditionalProperties, Schema};
use apiforge_ir::{Property, PropertyKind, StringFormat};

use crate::{
    error::{ResolveError, Result},
    refs::{GenericRef, RefType},
};

/// Resolve a raw schema node into a property.
pub fn resolve(node: &Schema) -> Result<Property> {
    resolve_named(None, node)
}

/// Resolve a node that has a name in its enclosing context.
pub(crate) fn resolve_named(name: Option<&str>, node: &Schema) -> Result<Property> {
    if *node == Schema::default() {
        return Err(ResolveError::EmptySchema {
            name: name.map(str::to_owned),
        });
    }
    let kind = match &node.schema_type {
        Some(declared) => resolve_declared(name, declared, node)?,
        None => resolve_shape(name, node)?,
    };
    Ok(attach_metadata(name, node, kind))
}

/// Classify a node with an explicit `type` tag.
fn resolve_declared(name: Option<&str>, declared: &str, node: &Schema) -> Result<PropertyKind> {
    let format = node.format.as_deref();
    match (declared, format) {
        ("boolean", _) => Ok(PropertyKind::Boolean),

        ("integer", None | Some("integer") | Some("int32")) => Ok(PropertyKind::Integer),
        ("integer", Some("int64")) => Ok(PropertyKind::Long),

        ("number", None | Some("decimal")) => Ok(PropertyKind::Decimal),
        ("number", Some("float")) => Ok(PropertyKind::Float),
        ("number", Some("double")) => Ok(PropertyKind::Double),
        ("number", Some("long" | "int64")) => Ok(PropertyKind::Long),

        ("string", None) => Ok(PropertyKind::String {
            format: StringFormat::Plain,
        }),
        ("string", Some(format)) => match StringFormat::from_format(format) {
            Some(format) => Ok(PropertyKind::String { format }),
            None => Err(unresolvable(name, node)),
        },

        ("file", _) => Ok(PropertyKind::File),
        ("null", _) => Ok(PropertyKind::Null),
        ("object", _) => object_kind(node),
        ("array", _) => array_kind(name, node),

        _ => Err(unresolvable(name, node)),
    }
}

/// Classify an untyped node by shape, in fixed priority order.
fn resolve_shape(name: Option<&str>, node: &Schema) -> Result<PropertyKind> {
    if node.properties.is_some() {
        return object_kind(node);
    }
    if node.any_of.is_some() {
        return Ok(PropertyKind::Object {
            properties: Default::default(),
        });
    }
    if node.items.is_some() {
        return array_kind(name, node);
    }
    if let Some(reference) = &node.reference {
        let parsed = GenericRef::parse(RefType::Definition, reference.clone());
        return Ok(PropertyKind::Ref {
            target: parsed.target().to_owned(),
        });
    }
    if node.has_numeric_constraints() {
        return Ok(PropertyKind::Decimal);
    }
    if node.has_string_constraints() {
        return Ok(PropertyKind::String {
            format: StringFormat::Plain,
        });
    }
    if let Some(format) = node.format.as_deref()
        && let Some(format) = StringFormat::from_format(format)
    {
        return Ok(PropertyKind::String { format });
    }
    if node.all_of.is_some() {
        // Composition is classified during model lifting, not here.
        return Err(ResolveError::ComposedSchema {
            name: name.map(str::to_owned),
        });
    }
    Err(unresolvable(name, node))
}

/// An `object` node is a map when it declares an additionalProperties value
/// type, otherwise a concrete object.
fn object_kind(node: &Schema) -> Result<PropertyKind> {
    if node.has_additional_properties() {
        let value = match &node.additional_properties {
            Some(AdditionalProperties::Schema(schema)) => resolve_named(None, schema)?,
            // `additionalProperties: true` permits values of any shape.
            _ => Property::new(PropertyKind::Null),
        };
        return Ok(PropertyKind::Map {
            value: Box::new(value),
        });
    }

    let mut properties = indexmap::IndexMap::new();
    if let Some(children) = &node.properties {
        for (child_name, child_node) in children {
            let mut child = resolve_named(Some(child_name.as_str()), child_node)?;
            child.required = node
                .required
                .as_ref()
                .is_some_and(|required| required.iter().any(|r| r == child_name));
            properties.insert(child_name.clone(), child);
        }
    }
    Ok(PropertyKind::Object { properties })
}

fn array_kind(name: Option<&str>, node: &Schema) -> Result<PropertyKind> {
    let items = node.items.as_ref().ok_or_else(|| ResolveError::MissingItems {
        name: name.map(str::to_owned),
    })?;
    Ok(PropertyKind::Array {
        items: Box::new(resolve_named(None, items)?),
    })
}

/// Copy annotations from the raw node onto the resolved property.
fn attach_metadata(name: Option<&str>, node: &Schema, kind: PropertyKind) -> Property {
    let mut property = Property::new(kind);
    property.name = name.map(str::to_owned);
    property.description = node.description.clone();
    property.example = node.example.clone();
    property.default = node.default.clone();
    property.vendor_extensions = node.vendor_extensions();
    property
}

fn unresolvable(name: Option<&str>, node: &Schema) -> ResolveError {
    ResolveError::UnresolvableSchema {
        name: name.map(str::to_owned),
        shape: node.shape(),
    }
}
