//! Reference string parsing.
//!
//! A `$ref` string is classified by shape and, for internal refs, reduced to
//! the simple name it points at. Other ref shapes are classified but carry
//! no simple name; fetching them is outside this engine.

/// The namespace a reference resolves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefType {
    /// Type definitions (`#/definitions/<Name>`).
    Definition,
    /// Shared parameters (`#/parameters/<Name>`).
    Parameter,
}

impl RefType {
    /// The internal prefix for refs of this type.
    pub fn internal_prefix(&self) -> &'static str {
        match self {
            RefType::Definition => "#/definitions/",
            RefType::Parameter => "#/parameters/",
        }
    }
}

/// Classification of a reference string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefFormat {
    /// Same-document reference.
    Internal,
    /// Absolute URL to another document.
    Url,
    /// Relative path to another document.
    Relative,
}

/// A parsed reference string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericRef {
    pub ref_type: RefType,
    pub format: RefFormat,
    raw: String,
    simple: Option<String>,
}

impl GenericRef {
    /// Parse a raw reference string against the expected namespace.
    pub fn parse(ref_type: RefType, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let format = if raw.starts_with("#/") {
            RefFormat::Internal
        } else if raw.contains("://") {
            RefFormat::Url
        } else {
            RefFormat::Relative
        };
        let simple = raw
            .strip_prefix(ref_type.internal_prefix())
            .filter(|rest| !rest.is_empty() && !rest.contains('/'))
            .map(str::to_owned);
        Self {
            ref_type,
            format,
            raw,
            simple,
        }
    }

    /// The raw reference string.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The simple name for internal refs in the expected namespace.
    pub fn simple_ref(&self) -> Option<&str> {
        self.simple.as_deref()
    }

    /// The simple name if present, otherwise the raw string.
    ///
    /// Used where the IR needs *some* target name even for ref shapes this
    /// engine does not resolve.
    pub fn target(&self) -> &str {
        self.simple.as_deref().unwrap_or(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_definition_ref() {
        let parsed = GenericRef::parse(RefType::Definition, "#/definitions/Pet");
        assert_eq!(parsed.format, RefFormat::Internal);
        assert_eq!(parsed.simple_ref(), Some("Pet"));
    }

    #[test]
    fn test_internal_parameter_ref() {
        let parsed = GenericRef::parse(RefType::Parameter, "#/parameters/limit");
        assert_eq!(parsed.simple_ref(), Some("limit"));
    }

    #[test]
    fn test_wrong_namespace_yields_no_simple_name() {
        let parsed = GenericRef::parse(RefType::Parameter, "#/definitions/Pet");
        assert_eq!(parsed.format, RefFormat::Internal);
        assert_eq!(parsed.simple_ref(), None);
    }

    #[test]
    fn test_url_ref() {
        let parsed = GenericRef::parse(RefType::Definition, "https://example.com/pet.json");
        assert_eq!(parsed.format, RefFormat::Url);
        assert_eq!(parsed.simple_ref(), None);
        assert_eq!(parsed.target(), "https://example.com/pet.json");
    }

    #[test]
    fn test_relative_ref() {
        let parsed = GenericRef::parse(RefType::Definition, "common.json#/definitions/Id");
        assert_eq!(parsed.format, RefFormat::Relative);
        assert_eq!(parsed.simple_ref(), None);
    }

    #[test]
    fn test_nested_pointer_yields_no_simple_name() {
        let parsed = GenericRef::parse(RefType::Definition, "#/definitions/Pet/properties/id");
        assert_eq!(parsed.simple_ref(), None);
    }
}
