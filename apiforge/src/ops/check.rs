//! Check operation - schema resolution without output.

use std::path::Path;

use apiforge_document::Document;
use apiforge_resolve::{GenerationContext, ModelNode, resolve_operations, to_model};
use eyre::Result;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Resolves every definition and operation, collecting failures per node so
/// one bad definition does not hide the rest.
pub fn check(document: &Document, input_path: &Path) -> Result<CheckReport> {
    let mut ctx = GenerationContext::new();
    let mut errors = Vec::new();

    for (name, schema) in &document.definitions {
        match to_model(Some(name), ModelNode::Raw(schema), &mut ctx) {
            Ok(model) => {
                ctx.registry.insert(name.clone(), model);
            }
            Err(e) => errors.push(e.to_string()),
        }
    }

    let operation_count = match resolve_operations(document, &mut ctx) {
        Ok(operations) => operations.len(),
        Err(e) => {
            errors.push(e.to_string());
            0
        }
    };

    let warnings = ctx.diagnostics.iter().map(|d| d.to_string()).collect();

    Ok(CheckReport {
        input_path: input_path.to_path_buf(),
        model_count: ctx.registry.len(),
        operation_count,
        errors,
        warnings,
    })
}
