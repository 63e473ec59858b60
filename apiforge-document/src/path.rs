//! Path and operation nodes of a schema document.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::Schema;

/// One path entry holding the operations declared on it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PathItem {
    pub get: Option<Operation>,
    pub put: Option<Operation>,
    pub post: Option<Operation>,
    pub delete: Option<Operation>,
    pub patch: Option<Operation>,
    /// Parameters shared by every operation on this path.
    #[serde(default)]
    pub parameters: Vec<ParameterNode>,
}

impl PathItem {
    /// Iterate declared operations as (method, operation) pairs.
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
        [
            ("get", &self.get),
            ("put", &self.put),
            ("post", &self.post),
            ("delete", &self.delete),
            ("patch", &self.patch),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
    }
}

/// One operation on a path.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterNode>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

/// A raw, unclassified operation parameter node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterNode {
    pub name: Option<String>,
    /// The declared location (`body`, `path`, `query`, ...).
    #[serde(rename = "in")]
    pub location: Option<String>,
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
    pub format: Option<String>,
    pub description: Option<String>,
    pub default: Option<serde_json::Value>,
    pub collection_format: Option<String>,
    /// Body parameters carry their schema here.
    pub schema: Option<Schema>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl ParameterNode {
    /// Vendor extensions are the `x-` prefixed keys of the node.
    pub fn vendor_extensions(&self) -> IndexMap<String, serde_json::Value> {
        self.extra
            .iter()
            .filter(|(key, _)| key.starts_with("x-"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
