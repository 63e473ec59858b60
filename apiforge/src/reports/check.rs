//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema resolution.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema document.
    pub input_path: PathBuf,
    /// Number of definitions that resolved.
    pub model_count: usize,
    /// Number of operations that resolved.
    pub operation_count: usize,
    /// Fatal resolution failures.
    pub errors: Vec<String>,
    /// Non-fatal diagnostics.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }
        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} resolved", self.input_path.display()));
            out.key_value("  models", &self.model_count.to_string());
            out.key_value("  operations", &self.operation_count.to_string());
        }
    }
}
