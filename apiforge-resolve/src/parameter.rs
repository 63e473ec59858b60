//! Operation parameter classification.
//!
//! The variant is chosen once, at parse time, from the node's declared `in`
//! field (or presence of `$ref`), and is immutable thereafter.

use apiforge_document::{Document, Operation, ParameterNode};
use apiforge_ir::{Parameter, ParameterKind};

use crate::{
    context::GenerationContext,
    error::{ResolveError, Result},
    model::{ModelNode, to_model},
    refs::{GenericRef, RefType},
};

const DEFAULT_COLLECTION_FORMAT: &str = "multi";

/// A resolved operation with its classified parameters.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ResolvedOperation {
    pub method: String,
    pub path: String,
    pub operation_id: Option<String>,
    pub parameters: Vec<Parameter>,
}

/// Resolve every operation declared in the document.
///
/// Path-level parameters are shared by each operation on the path and come
/// first, in declaration order.
pub fn resolve_operations(
    document: &Document,
    ctx: &mut GenerationContext,
) -> Result<Vec<ResolvedOperation>> {
    let mut operations = Vec::new();
    for (path, item) in &document.paths {
        for (method, operation) in item.operations() {
            operations.push(resolve_operation(path, method, &item.parameters, operation, ctx)?);
        }
    }
    Ok(operations)
}

fn resolve_operation(
    path: &str,
    method: &str,
    shared: &[ParameterNode],
    operation: &Operation,
    ctx: &mut GenerationContext,
) -> Result<ResolvedOperation> {
    let mut parameters = Vec::new();
    for node in shared.iter().chain(&operation.parameters) {
        parameters.push(resolve_parameter(node, ctx)?);
    }
    Ok(ResolvedOperation {
        method: method.to_owned(),
        path: path.to_owned(),
        operation_id: operation.operation_id.clone(),
        parameters,
    })
}

/// Classify a raw parameter node into a location-tagged variant.
pub fn resolve_parameter(node: &ParameterNode, ctx: &mut GenerationContext) -> Result<Parameter> {
    let name = node.name.clone().unwrap_or_default();

    let kind = match node.location.as_deref() {
        Some("body") => {
            let schema = node
                .schema
                .as_ref()
                .ok_or_else(|| ResolveError::MissingBodySchema { name: name.clone() })?;
            ParameterKind::Body {
                schema: Box::new(to_model(None, ModelNode::Raw(schema), ctx)?),
            }
        }
        Some("path") => ParameterKind::Path,
        Some("query") => ParameterKind::Query {
            collection_format: collection_format(node),
        },
        Some("header") => ParameterKind::Header,
        Some("formData") => ParameterKind::Form {
            collection_format: collection_format(node),
        },
        Some("cookie") => ParameterKind::Cookie,
        Some(other) => {
            return Err(ResolveError::UnresolvableParameter {
                name,
                location: other.to_owned(),
            });
        }
        None => match node.reference.as_deref() {
            Some(reference) => {
                let parsed = GenericRef::parse(RefType::Parameter, reference);
                ParameterKind::Ref {
                    target: parsed.target().to_owned(),
                }
            }
            None => {
                return Err(ResolveError::UnresolvableParameter {
                    name,
                    location: "<missing>".to_owned(),
                });
            }
        },
    };

    let mut parameter = Parameter::new(name, kind);
    // Path parameters stay required regardless of the declared flag.
    parameter.required = parameter.required || node.required;
    parameter.format = node.format.clone();
    parameter.default_value = node.default.clone();
    parameter.description = node.description.clone();
    parameter.vendor_extensions = node.vendor_extensions();
    Ok(parameter)
}

fn collection_format(node: &ParameterNode) -> String {
    node.collection_format
        .clone()
        .unwrap_or_else(|| DEFAULT_COLLECTION_FORMAT.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiforge_ir::Model;

    fn node(json: &str) -> ParameterNode {
        serde_json::from_str(json).expect("parameter should parse")
    }

    #[test]
    fn test_path_parameter_forced_required() {
        let mut ctx = GenerationContext::new();
        let parameter = resolve_parameter(
            &node(r#"{ "name": "petId", "in": "path", "type": "integer", "required": false }"#),
            &mut ctx,
        )
        .unwrap();
        assert!(parameter.required);
        assert_eq!(parameter.kind, ParameterKind::Path);
    }

    #[test]
    fn test_query_parameter_default_collection_format() {
        let mut ctx = GenerationContext::new();
        let parameter = resolve_parameter(
            &node(r#"{ "name": "status", "in": "query", "type": "string" }"#),
            &mut ctx,
        )
        .unwrap();
        assert_eq!(
            parameter.kind,
            ParameterKind::Query {
                collection_format: "multi".into()
            }
        );
        assert!(!parameter.required);
    }

    #[test]
    fn test_body_parameter_resolves_schema_through_model_lifting() {
        let mut ctx = GenerationContext::new();
        let parameter = resolve_parameter(
            &node(
                r##"{
                    "name": "body",
                    "in": "body",
                    "required": true,
                    "schema": { "$ref": "#/definitions/Pet" }
                }"##,
            ),
            &mut ctx,
        )
        .unwrap();
        assert!(matches!(parameter.schema(), Some(Model::Ref(_))));
    }

    #[test]
    fn test_body_parameter_without_schema_fails() {
        let mut ctx = GenerationContext::new();
        let result = resolve_parameter(&node(r#"{ "name": "body", "in": "body" }"#), &mut ctx);
        assert!(matches!(result, Err(ResolveError::MissingBodySchema { .. })));
    }

    #[test]
    fn test_ref_parameter_without_in() {
        let mut ctx = GenerationContext::new();
        let parameter = resolve_parameter(
            &node(r##"{ "$ref": "#/parameters/limit" }"##),
            &mut ctx,
        )
        .unwrap();
        assert_eq!(
            parameter.kind,
            ParameterKind::Ref {
                target: "limit".into()
            }
        );
    }

    #[test]
    fn test_unknown_location_fails_naming_the_value() {
        let mut ctx = GenerationContext::new();
        let err = resolve_parameter(
            &node(r#"{ "name": "color", "in": "matrix", "type": "string" }"#),
            &mut ctx,
        )
        .unwrap_err();
        assert!(err.to_string().contains("matrix"));
    }

    #[test]
    fn test_operations_include_shared_path_parameters() {
        let document: Document = r#"{
            "paths": {
                "/pets/{petId}": {
                    "parameters": [
                        { "name": "petId", "in": "path", "type": "integer" }
                    ],
                    "get": { "operationId": "getPet" },
                    "delete": {
                        "operationId": "deletePet",
                        "parameters": [
                            { "name": "apiKey", "in": "header", "type": "string" }
                        ]
                    }
                }
            }
        }"#
        .parse()
        .unwrap();

        let mut ctx = GenerationContext::new();
        let operations = resolve_operations(&document, &mut ctx).unwrap();
        assert_eq!(operations.len(), 2);
        assert_eq!(operations[0].parameters.len(), 1);
        assert_eq!(operations[1].parameters.len(), 2);
        assert_eq!(operations[1].parameters[0].name, "petId");
    }
}
