//! Operation parameter types.

use indexmap::IndexMap;
use serde::Serialize;

use crate::Model;

/// Location-tagged parameter variant, chosen once at parse time from the
/// node's declared `in` field (or presence of `$ref`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "in", rename_all = "camelCase")]
pub enum ParameterKind {
    /// Request body; owns its resolved schema.
    Body { schema: Box<Model> },
    Path,
    Query { collection_format: String },
    Header,
    Form { collection_format: String },
    Cookie,
    /// Reference to a shared parameter definition, resolved by simple name.
    Ref { target: String },
}

impl ParameterKind {
    /// The `in` value this variant corresponds to.
    pub fn location(&self) -> &'static str {
        match self {
            ParameterKind::Body { .. } => "body",
            ParameterKind::Path => "path",
            ParameterKind::Query { .. } => "query",
            ParameterKind::Header => "header",
            ParameterKind::Form { .. } => "formData",
            ParameterKind::Cookie => "cookie",
            ParameterKind::Ref { .. } => "ref",
        }
    }
}

/// A resolved operation parameter, owned by a single operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(flatten)]
    pub kind: ParameterKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub vendor_extensions: IndexMap<String, serde_json::Value>,
}

impl Parameter {
    /// Create a parameter of the given kind. Path parameters are always
    /// required.
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        let required = matches!(kind, ParameterKind::Path);
        Self {
            name: name.into(),
            kind,
            required,
            format: None,
            default_value: None,
            description: None,
            vendor_extensions: IndexMap::new(),
        }
    }

    /// The body schema, if this is a body parameter.
    pub fn schema(&self) -> Option<&Model> {
        match &self.kind {
            ParameterKind::Body { schema } => Some(schema),
            _ => None,
        }
    }
}
