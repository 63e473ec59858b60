use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Fatal resolution failures.
///
/// These abort the current node's branch only; recoverable conditions
/// (ambiguous composition, malformed ignore lines) are reported as
/// diagnostics instead, never through this type.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    #[error("could not resolve schema node{} with shape {shape}", name_suffix(.name.as_deref()))]
    #[diagnostic(
        code(apiforge::unresolvable_schema),
        help("the node matches no known variant; add an explicit 'type' or check for typos")
    )]
    UnresolvableSchema {
        name: Option<String>,
        /// The keys present on the offending node.
        shape: String,
    },

    #[error("schema node{} composes via allOf and must be lifted to a model", name_suffix(.name.as_deref()))]
    #[diagnostic(code(apiforge::composed_schema))]
    ComposedSchema { name: Option<String> },

    #[error("empty or key-less schema node{}", name_suffix(.name.as_deref()))]
    #[diagnostic(code(apiforge::empty_schema))]
    EmptySchema { name: Option<String> },

    #[error("array schema node{} has no 'items'", name_suffix(.name.as_deref()))]
    #[diagnostic(code(apiforge::missing_items))]
    MissingItems { name: Option<String> },

    #[error("could not resolve parameter '{name}': unknown location '{location}'")]
    #[diagnostic(
        code(apiforge::unresolvable_parameter),
        help("valid locations are: body, path, query, header, formData, cookie")
    )]
    UnresolvableParameter { name: String, location: String },

    #[error("body parameter '{name}' has no schema")]
    #[diagnostic(code(apiforge::missing_body_schema))]
    MissingBodySchema { name: String },
}

fn name_suffix(name: Option<&str>) -> String {
    match name {
        Some(name) => format!(" '{name}'"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_the_node() {
        let err = ResolveError::UnresolvableSchema {
            name: Some("Pet".into()),
            shape: "{ maxProperties }".into(),
        };
        let message = err.to_string();
        assert!(message.contains("'Pet'"));
        assert!(message.contains("maxProperties"));
    }

    #[test]
    fn test_parameter_error_names_the_location() {
        let err = ResolveError::UnresolvableParameter {
            name: "petId".into(),
            location: "matrix".into(),
        };
        assert!(err.to_string().contains("matrix"));
    }
}
