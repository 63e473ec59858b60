//! Resolved property types.
//!
//! A [`Property`] is the leaf/branch node of the IR tree. Every raw schema
//! node resolves to exactly one [`PropertyKind`] variant; container variants
//! (array, map, object) hold fully resolved properties recursively.

use indexmap::IndexMap;
use serde::Serialize;

/// Sub-format of a string property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringFormat {
    /// No declared format.
    Plain,
    Byte,
    Binary,
    Password,
    Date,
    DateTime,
    Uuid,
}

impl StringFormat {
    /// Parse a declared `format` value into a known string sub-format.
    pub fn from_format(format: &str) -> Option<Self> {
        match format {
            "byte" => Some(StringFormat::Byte),
            "binary" => Some(StringFormat::Binary),
            "password" => Some(StringFormat::Password),
            "date" => Some(StringFormat::Date),
            "date-time" => Some(StringFormat::DateTime),
            "uuid" => Some(StringFormat::Uuid),
            _ => None,
        }
    }

    /// Get the wire-format string representation.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            StringFormat::Plain => None,
            StringFormat::Byte => Some("byte"),
            StringFormat::Binary => Some("binary"),
            StringFormat::Password => Some("password"),
            StringFormat::Date => Some("date"),
            StringFormat::DateTime => Some("date-time"),
            StringFormat::Uuid => Some("uuid"),
        }
    }
}

/// The closed set of resolved property variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropertyKind {
    Boolean,
    /// 32-bit integer (`integer` / `int32`).
    Integer,
    /// 64-bit integer (`int64`).
    Long,
    Float,
    Double,
    /// Arbitrary-precision / untyped number.
    Decimal,
    String {
        format: StringFormat,
    },
    Array {
        items: Box<Property>,
    },
    /// An object with an `additionalProperties` node. The value type applies
    /// to every key.
    Map {
        value: Box<Property>,
    },
    Object {
        properties: IndexMap<String, Property>,
    },
    /// A named pointer to another schema-defined type, resolved by simple
    /// name, never inlined.
    Ref {
        target: String,
    },
    File,
    Null,
}

impl PropertyKind {
    /// The base type name as it appears in a schema document.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyKind::Boolean => "boolean",
            PropertyKind::Integer | PropertyKind::Long => "integer",
            PropertyKind::Float | PropertyKind::Double | PropertyKind::Decimal => "number",
            PropertyKind::String { .. } => "string",
            PropertyKind::Array { .. } => "array",
            PropertyKind::Map { .. } | PropertyKind::Object { .. } => "object",
            PropertyKind::Ref { .. } => "ref",
            PropertyKind::File => "file",
            PropertyKind::Null => "null",
        }
    }

    /// Returns true for variants that contain other properties.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            PropertyKind::Array { .. } | PropertyKind::Map { .. } | PropertyKind::Object { .. }
        )
    }
}

/// A fully resolved property node.
///
/// Immutable once resolved, except for vendor-extension and example
/// annotations which are attached after the resolution pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub kind: PropertyKind,
    /// Name within the enclosing object, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub vendor_extensions: IndexMap<String, serde_json::Value>,
}

impl Property {
    /// Create an anonymous, optional property of the given kind.
    pub fn new(kind: PropertyKind) -> Self {
        Self {
            kind,
            name: None,
            description: None,
            required: false,
            example: None,
            default: None,
            vendor_extensions: IndexMap::new(),
        }
    }

    /// Create a plain string property.
    pub fn string() -> Self {
        Self::new(PropertyKind::String {
            format: StringFormat::Plain,
        })
    }

    /// Create a reference property pointing at a simple name.
    pub fn reference(target: impl Into<String>) -> Self {
        Self::new(PropertyKind::Ref {
            target: target.into(),
        })
    }

    /// Set the property name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The simple name of the referenced type, if this is a ref property.
    pub fn ref_target(&self) -> Option<&str> {
        match &self.kind {
            PropertyKind::Ref { target } => Some(target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_format_round_trip() {
        assert_eq!(StringFormat::from_format("date"), Some(StringFormat::Date));
        assert_eq!(
            StringFormat::from_format("date-time"),
            Some(StringFormat::DateTime)
        );
        assert_eq!(StringFormat::from_format("int32"), None);
        assert_eq!(StringFormat::DateTime.as_str(), Some("date-time"));
        assert_eq!(StringFormat::Plain.as_str(), None);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(PropertyKind::Long.type_name(), "integer");
        assert_eq!(PropertyKind::Decimal.type_name(), "number");
        assert_eq!(
            PropertyKind::Map {
                value: Box::new(Property::string())
            }
            .type_name(),
            "object"
        );
    }

    #[test]
    fn test_is_container() {
        assert!(
            PropertyKind::Array {
                items: Box::new(Property::string())
            }
            .is_container()
        );
        assert!(!PropertyKind::Boolean.is_container());
    }

    #[test]
    fn test_ref_target() {
        let prop = Property::reference("Pet");
        assert_eq!(prop.ref_target(), Some("Pet"));
        assert_eq!(Property::string().ref_target(), None);
    }
}
