//! Rule-file loading and path evaluation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::rule::{Operation, Rule};

/// Name of the ignore file consulted in the output directory.
pub const IGNORE_FILE: &str = ".apiforge-ignore";

#[derive(Debug, Error)]
pub enum IgnoreError {
    #[error("failed to read ignore file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Evaluates candidate output paths against the rules of one ignore file.
///
/// Paths are evaluated relative to the output directory, with `/` as the
/// separator. Every path is writable until a rule excludes it; later
/// negation rules can re-include a file. Once a directory rule excludes
/// an ancestor, only a negation that is itself a directory rule can
/// resurrect paths under it.
#[derive(Debug, Default)]
pub struct IgnoreProcessor {
    rules: Vec<Rule>,
}

impl IgnoreProcessor {
    /// A processor with no rules; every path is writable.
    pub fn new() -> IgnoreProcessor {
        IgnoreProcessor::default()
    }

    /// Load the ignore file from an output directory, if present.
    ///
    /// A missing file is not an error: regeneration into a fresh directory
    /// gets an empty rule set.
    pub fn from_output_dir(output_dir: &Path) -> Result<IgnoreProcessor, IgnoreError> {
        let path = output_dir.join(IGNORE_FILE);
        if !path.exists() {
            return Ok(IgnoreProcessor::new());
        }
        let content = fs::read_to_string(&path).map_err(|source| IgnoreError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(IgnoreProcessor::from_content(&content))
    }

    /// Build a processor from ignore-file content.
    ///
    /// Blank lines and comments contribute no rules. Lines that fail to
    /// compile become inert rules and never match.
    pub fn from_content(content: &str) -> IgnoreProcessor {
        let rules = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(Rule::create)
            .collect();
        IgnoreProcessor { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether the generator may write the file at `path`.
    ///
    /// Rules apply in file order. A matching directory rule excludes the
    /// whole subtree: once one matches, only a directory-level negation
    /// re-includes paths under it.
    pub fn allows_file(&self, path: &str) -> bool {
        let mut allowed = true;
        let mut directory_excluded = false;

        for rule in &self.rules {
            match rule.evaluate(path) {
                Operation::Noop => {}
                Operation::Include => {
                    if !directory_excluded || rule.is_directory_rule() {
                        allowed = true;
                    }
                }
                Operation::Exclude => {
                    allowed = false;
                    if rule.is_directory_rule() {
                        directory_excluded = true;
                    }
                }
                Operation::ExcludeAndTerminate => return false,
            }
        }
        allowed
    }
}
