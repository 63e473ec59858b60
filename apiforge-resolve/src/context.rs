//! Per-run resolution context.

use apiforge_ir::ModelRegistry;

use crate::diagnostic::{Diagnostic, Severity};

/// State owned by a single generation run.
///
/// Passed explicitly through every resolution call; there is no process-wide
/// mutable state, so independent runs stay independent and testable.
#[derive(Debug, Default)]
pub struct GenerationContext {
    /// Models resolved so far, keyed by simple name.
    pub registry: ModelRegistry,
    /// Diagnostics collected during resolution.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}
