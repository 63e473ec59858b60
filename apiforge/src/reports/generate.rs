//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Directory artifacts were written into.
    pub output_dir: PathBuf,
    /// Target language id.
    pub language: String,
    /// Paths written, relative to the output directory.
    pub written: Vec<String>,
    /// Paths left untouched (ignore rules or skip-overwrite).
    pub skipped: Vec<String>,
    /// Non-fatal diagnostics from resolution.
    pub warnings: Vec<String>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.preformatted(&format!(
            "✓ generated {} artifact{} for {} in {}",
            self.written.len(),
            if self.written.len() == 1 { "" } else { "s" },
            self.language,
            self.output_dir.display()
        ));
        for file in &self.written {
            out.added_item(file);
        }

        if !self.skipped.is_empty() {
            out.newline();
            out.section("skipped");
            for file in &self.skipped {
                out.list_item(file);
            }
        }
    }
}
