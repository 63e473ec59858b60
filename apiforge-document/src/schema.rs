//! Raw schema node as it appears on the wire.
//!
//! A [`Schema`] is deliberately loose: most fields are optional and nothing
//! is classified yet. Resolution into the typed IR happens in
//! `apiforge-resolve`.

use indexmap::IndexMap;
use serde::Deserialize;

/// One raw node of a schema document tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Declared base type (`object`, `string`, `integer`, ...), if any.
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
    pub format: Option<String>,
    /// Raw reference string, e.g. `#/definitions/Pet`.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub properties: Option<IndexMap<String, Schema>>,
    pub additional_properties: Option<AdditionalProperties>,
    pub items: Option<Box<Schema>>,
    pub all_of: Option<Vec<Schema>>,
    pub any_of: Option<Vec<Schema>>,
    /// Names of required properties.
    pub required: Option<Vec<String>>,
    pub discriminator: Option<String>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<serde_json::Value>>,
    pub default: Option<serde_json::Value>,
    pub example: Option<serde_json::Value>,

    // Numeric constraint keywords; presence alone drives shape heuristics.
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: Option<bool>,
    pub exclusive_maximum: Option<bool>,
    pub multiple_of: Option<f64>,

    // String constraint keywords.
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub pattern: Option<String>,

    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    pub unique_items: Option<bool>,

    /// Everything else, including `x-` vendor extensions.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Schema {
    /// Vendor extensions are the `x-` prefixed keys of the node.
    pub fn vendor_extensions(&self) -> IndexMap<String, serde_json::Value> {
        self.extra
            .iter()
            .filter(|(key, _)| key.starts_with("x-"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// True if the node declares an `additionalProperties` value type.
    ///
    /// `additionalProperties: false` explicitly forbids extra keys and is
    /// treated the same as an absent keyword.
    pub fn has_additional_properties(&self) -> bool {
        match &self.additional_properties {
            Some(AdditionalProperties::Bool(permitted)) => *permitted,
            Some(AdditionalProperties::Schema(_)) => true,
            None => false,
        }
    }

    /// True if any numeric constraint keyword is present.
    pub fn has_numeric_constraints(&self) -> bool {
        self.minimum.is_some()
            || self.maximum.is_some()
            || self.exclusive_minimum.is_some()
            || self.exclusive_maximum.is_some()
            || self.multiple_of.is_some()
    }

    /// True if any string constraint keyword is present.
    pub fn has_string_constraints(&self) -> bool {
        self.min_length.is_some() || self.max_length.is_some() || self.pattern.is_some()
    }

    /// A short human-readable shape description for error messages.
    pub fn shape(&self) -> String {
        let mut keys: Vec<&str> = Vec::new();
        if self.schema_type.is_some() {
            keys.push("type");
        }
        if self.format.is_some() {
            keys.push("format");
        }
        if self.reference.is_some() {
            keys.push("$ref");
        }
        if self.properties.is_some() {
            keys.push("properties");
        }
        if self.additional_properties.is_some() {
            keys.push("additionalProperties");
        }
        if self.items.is_some() {
            keys.push("items");
        }
        if self.all_of.is_some() {
            keys.push("allOf");
        }
        if self.any_of.is_some() {
            keys.push("anyOf");
        }
        for key in self.extra.keys() {
            keys.push(key);
        }
        format!("{{ {} }}", keys.join(", "))
    }
}

/// The `additionalProperties` keyword: either a boolean toggle or a value
/// schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Bool(bool),
    Schema(Box<Schema>),
}
