//! Schema resolution engine for the apiforge code generator.
//!
//! This crate turns raw schema-document nodes into the typed IR consumed by
//! template rendering:
//!
//! - [`resolve`] classifies one raw node into a [`apiforge_ir::Property`]
//! - [`to_model`] lifts a node into a named [`apiforge_ir::Model`],
//!   including `allOf` composition
//! - [`resolve_operations`] classifies operation parameters
//! - [`ExampleGenerator`] produces stable example values with a recursion
//!   guard for `$ref` cycles
//!
//! All state for one run lives in a [`GenerationContext`]; nothing is shared
//! across runs.

mod context;
mod diagnostic;
mod error;
mod example;
mod model;
mod parameter;
mod property;
mod refs;

use apiforge_document::Document;

pub use context::GenerationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use error::{ResolveError, Result};
pub use example::ExampleGenerator;
pub use model::{ModelNode, to_model};
pub use parameter::{ResolvedOperation, resolve_operations, resolve_parameter};
pub use property::resolve;
pub use refs::{GenericRef, RefFormat, RefType};

/// Resolve every definition of a document into the run's model registry.
///
/// Definitions are registered under their simple names, in declaration
/// order. A resolution failure aborts with the offending definition name in
/// the error; it is not retried.
pub fn resolve_document(document: &Document, ctx: &mut GenerationContext) -> Result<()> {
    for (name, schema) in &document.definitions {
        let model = to_model(Some(name), ModelNode::Raw(schema), ctx)?;
        ctx.registry.insert(name.clone(), model);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_document_registers_all_definitions() {
        let document: Document = r#"{
            "definitions": {
                "Pet": { "type": "object", "properties": { "name": { "type": "string" } } },
                "Tags": { "type": "array", "items": { "type": "string" } }
            }
        }"#
        .parse()
        .unwrap();

        let mut ctx = GenerationContext::new();
        resolve_document(&document, &mut ctx).unwrap();
        assert_eq!(ctx.registry.len(), 2);
        assert!(ctx.registry.contains("Pet"));
        assert!(ctx.registry.contains("Tags"));
    }

    #[test]
    fn test_resolve_document_fails_fast_on_bad_definition() {
        let document: Document = r#"{
            "definitions": {
                "Broken": { "maxProperties": 3 }
            }
        }"#
        .parse()
        .unwrap();

        let mut ctx = GenerationContext::new();
        let err = resolve_document(&document, &mut ctx).unwrap_err();
        assert!(err.to_string().contains("Broken"));
    }
}
