//! Schema document parsing for the apiforge code generator.
//!
//! This crate reads a declarative API/data schema document (JSON) into raw,
//! unclassified nodes. Classification into typed IR variants is the job of
//! `apiforge-resolve`; this layer only mirrors the wire shape and reports
//! parse problems with source context.

mod error;
mod path;
mod schema;

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

pub use error::{Error, Result};
pub use path::{Operation, ParameterNode, PathItem};
pub use schema::{AdditionalProperties, Schema};

/// Root of a schema document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    pub swagger: Option<String>,
    pub info: Option<Info>,
    /// Named type definitions, in declaration order.
    #[serde(default)]
    pub definitions: IndexMap<String, Schema>,
    /// Shared parameter definitions.
    #[serde(default)]
    pub parameters: IndexMap<String, ParameterNode>,
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
}

/// Document metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    pub title: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

impl FromStr for Document {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s, "schema.json")
    }
}

impl Document {
    /// Parse a schema document from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_document(&content, &path.display().to_string())
    }

    /// Parse a document from a string with a custom filename for error
    /// reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_document(content, filename)
    }
}

/// Parse a document from content with the given filename for error reporting.
pub fn parse_document(content: &str, filename: &str) -> Result<Document> {
    let document: Document =
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    validate_document(&document, content, filename)?;
    Ok(document)
}

/// Validate the document after parsing.
///
/// Only structural properties of the definition table are checked here; node
/// shapes are validated during resolution where failures carry more context.
fn validate_document(document: &Document, src: &str, filename: &str) -> Result<()> {
    for name in document.definitions.keys() {
        if name.trim().is_empty() {
            return Err(Error::validation(
                "definition names must not be empty",
                src,
                filename,
            ));
        }
        if name.contains('/') {
            return Err(Error::validation(
                format!("definition name '{name}' must be a simple name without '/'"),
                src,
                filename,
            ));
        }
    }
    Ok(())
}
