//! Intermediate representation types for the apiforge code generator.
//!
//! This crate provides the unified type definitions used across the apiforge
//! generation pipeline. These types serve as the single source of truth for
//! the resolved shape of a schema document.
//!
//! # Architecture
//!
//! ```text
//! schema document (JSON) → apiforge-document (parsing) → apiforge-resolve → apiforge-ir → renderer
//! ```
//!
//! The IR types are designed to be:
//! - Target-language agnostic (no Java/Obj-C/JS-specific concerns)
//! - Fully resolved (every node is one of a closed set of variants)
//! - Self-contained (owned data, no references back into the raw document)

mod model;
mod parameter;
mod property;
mod registry;

pub use model::{ArrayModel, ComposedModel, Model, ModelImpl, RefModel};
pub use parameter::{Parameter, ParameterKind};
pub use property::{Property, PropertyKind, StringFormat};
pub use registry::ModelRegistry;
