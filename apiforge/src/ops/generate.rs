//! Generate operation - resolve a document and write generation artifacts.

use std::path::Path;

use apiforge_config::ResolvedOptions;
use apiforge_document::Document;
use apiforge_ignore::IgnoreProcessor;
use apiforge_resolve::{
    ExampleGenerator, GenerationContext, resolve_document, resolve_operations,
};
use eyre::{Context, Result};

use crate::reports::GenerateReport;

/// Result of one artifact write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was left untouched
    Skipped,
}

/// Execute the generate operation.
///
/// Resolves the document into the per-run registry, then writes one JSON
/// artifact per model plus an operations index into the output directory.
/// The ignore file in the output directory is consulted per path; an ignored
/// path is never written.
pub fn generate(document: &Document, options: &ResolvedOptions) -> Result<GenerateReport> {
    let mut ctx = GenerationContext::new();
    resolve_document(document, &mut ctx).wrap_err("schema resolution failed")?;
    let operations =
        resolve_operations(document, &mut ctx).wrap_err("parameter resolution failed")?;

    let processor = IgnoreProcessor::from_output_dir(&options.output_dir)
        .wrap_err("failed to load ignore rules")?;
    let generator = ExampleGenerator::new(&ctx.registry);

    let mut artifacts = Vec::new();
    for (name, model) in ctx.registry.iter() {
        let artifact = serde_json::json!({
            "model": model,
            "example": generator.model_example(name),
        });
        artifacts.push((
            format!("models/{name}.json"),
            serde_json::to_string_pretty(&artifact)?,
        ));
    }
    artifacts.push((
        "operations.json".to_owned(),
        serde_json::to_string_pretty(&operations)?,
    ));

    let mut written = Vec::new();
    let mut skipped = Vec::new();
    for (rel, content) in artifacts {
        let path = options.output_dir.join(&rel);
        match write_artifact(&path, &rel, &content, &processor, options.skip_overwrite)? {
            WriteResult::Written => written.push(rel),
            WriteResult::Skipped => skipped.push(rel),
        }
    }

    Ok(GenerateReport {
        output_dir: options.output_dir.clone(),
        language: options.language.clone(),
        written,
        skipped,
        warnings: ctx.diagnostics.iter().map(|d| d.to_string()).collect(),
    })
}

fn write_artifact(
    path: &Path,
    rel: &str,
    content: &str,
    processor: &IgnoreProcessor,
    skip_overwrite: bool,
) -> Result<WriteResult> {
    if !processor.allows_file(rel) {
        return Ok(WriteResult::Skipped);
    }
    if skip_overwrite && path.exists() {
        return Ok(WriteResult::Skipped);
    }
    write_file(path, content)?;
    Ok(WriteResult::Written)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
