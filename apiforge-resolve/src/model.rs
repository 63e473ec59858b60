//! Lifting resolved properties into named models.
//!
//! Each Model variant keeps only the fields it allows; everything else from
//! the raw node is dropped here, not propagated to emitters.

use apiforge_document::Schema;
use apiforge_ir::{ArrayModel, ComposedModel, Model, ModelImpl, Property, PropertyKind, RefModel};

use crate::{
    context::GenerationContext,
    diagnostic::Diagnostic,
    error::Result,
    property::resolve_named,
    refs::{GenericRef, RefType},
};

/// Input to model lifting: either a raw schema node or a model that was
/// already built.
#[derive(Debug)]
pub enum ModelNode<'a> {
    Raw(&'a Schema),
    Built(Model),
}

impl<'a> From<&'a Schema> for ModelNode<'a> {
    fn from(schema: &'a Schema) -> Self {
        ModelNode::Raw(schema)
    }
}

impl From<Model> for ModelNode<'_> {
    fn from(model: Model) -> Self {
        ModelNode::Built(model)
    }
}

/// Lift a node into a named model.
///
/// Idempotent over already-built models: a [`ModelNode::Built`] input is
/// returned unchanged.
pub fn to_model(name: Option<&str>, node: ModelNode<'_>, ctx: &mut GenerationContext) -> Result<Model> {
    let schema = match node {
        ModelNode::Built(model) => return Ok(model),
        ModelNode::Raw(schema) => schema,
    };

    if let Some(entries) = &schema.all_of {
        return compose(name, schema, entries, ctx);
    }

    let property = resolve_named(name, schema)?;
    Ok(lift_property(name, schema, property))
}

/// Build a composed model from an `allOf` node.
///
/// Ref entries become interfaces; the first non-ref entry becomes the child.
/// Additional non-ref entries are ambiguous upstream behavior: they are
/// dropped with a warning diagnostic rather than failing the run.
fn compose(
    name: Option<&str>,
    schema: &Schema,
    entries: &[Schema],
    ctx: &mut GenerationContext,
) -> Result<Model> {
    let (refs, concrete): (Vec<&Schema>, Vec<&Schema>) =
        entries.iter().partition(|entry| entry.reference.is_some());

    let child = match concrete.first() {
        Some(&first) => Some(Box::new(to_model(None, ModelNode::Raw(first), ctx)?)),
        None => None,
    };
    if concrete.len() > 1 {
        let mut diagnostic = Diagnostic::warning(
            "compose",
            format!(
                "allOf has {} non-ref entries; only the first is used as the child",
                concrete.len()
            ),
        );
        if let Some(name) = name {
            diagnostic = diagnostic.at(format!("definitions.{name}"));
        }
        ctx.add_diagnostic(diagnostic);
    }

    let interfaces = refs
        .iter()
        .filter_map(|entry| entry.reference.as_deref())
        .map(|reference| {
            let parsed = GenericRef::parse(RefType::Definition, reference);
            RefModel::new(parsed.target())
        })
        .collect();

    Ok(Model::Composed(ComposedModel {
        name: name.map(str::to_owned),
        description: schema.description.clone(),
        // The parent slot is filled by the referencing context, never from
        // the schema itself.
        parent: None,
        child,
        interfaces,
        vendor_extensions: schema.vendor_extensions(),
    }))
}

/// Dispatch a resolved property onto the model variant that may carry it.
fn lift_property(name: Option<&str>, schema: &Schema, property: Property) -> Model {
    match property.kind {
        PropertyKind::Array { items } => Model::Array(ArrayModel {
            name: name.map(str::to_owned),
            description: schema.description.clone(),
            items: *items,
            vendor_extensions: schema.vendor_extensions(),
        }),
        PropertyKind::Ref { target } => Model::Ref(RefModel::new(target)),
        PropertyKind::Object { properties } => Model::Impl(ModelImpl {
            name: name.map(str::to_owned),
            description: schema.description.clone(),
            properties,
            required: schema.required.clone().unwrap_or_default(),
            additional_properties: None,
            discriminator: schema.discriminator.clone(),
            example: schema.example.clone(),
            vendor_extensions: schema.vendor_extensions(),
        }),
        PropertyKind::Map { value } => Model::Impl(ModelImpl {
            name: name.map(str::to_owned),
            description: schema.description.clone(),
            properties: Default::default(),
            required: Vec::new(),
            additional_properties: Some(value),
            discriminator: schema.discriminator.clone(),
            example: schema.example.clone(),
            vendor_extensions: schema.vendor_extensions(),
        }),
        // Scalar aliases keep only the shared ModelImpl subset.
        _ => Model::Impl(ModelImpl {
            name: name.map(str::to_owned),
            description: schema.description.clone(),
            properties: Default::default(),
            required: Vec::new(),
            additional_properties: None,
            discriminator: None,
            example: schema.example.clone(),
            vendor_extensions: schema.vendor_extensions(),
        }),
    }
}
