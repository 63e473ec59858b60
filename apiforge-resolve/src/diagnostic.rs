//! Diagnostics recorded during a resolution pass.
//!
//! Recoverable conditions (ambiguous composition, dropped entries) are
//! collected here instead of aborting the run.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// A condition that invalidates the resolved output.
    Error,
    /// A recoverable condition the user should review.
    Warning,
    /// Informational note about how a node was interpreted.
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic recorded by one resolution stage.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The stage that produced this diagnostic (e.g. "compose").
    pub stage: String,
    pub message: String,
    /// Optional location in the document (e.g. "definitions.Pet").
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, stage, message)
    }

    pub fn warning(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, stage, message)
    }

    pub fn info(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, stage, message)
    }

    fn new(severity: Severity, stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            stage: stage.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Attach a document location.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " (at {location})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_with_location() {
        let diag = Diagnostic::warning("compose", "allOf has 2 non-ref entries; using the first")
            .at("definitions.Dog");
        assert!(diag.severity.is_warning());
        assert_eq!(diag.location.as_deref(), Some("definitions.Dog"));
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::error("resolve", "boom").at("definitions.Pet");
        insta::assert_snapshot!(diag.to_string(), @"error: boom (at definitions.Pet)");
    }
}
