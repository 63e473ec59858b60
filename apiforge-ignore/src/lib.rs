//! Regeneration-safety rules for the apiforge code generator.
//!
//! Regenerating an API project overwrites files a user may have edited. An
//! ignore file in the output directory, one gitignore-style rule per line,
//! marks files the generator must leave alone:
//!
//! ```text
//! # Keep the hand-tuned build script.
//! /build.sh
//! docs/**
//! !docs/UserApi.md
//! ```
//!
//! [`IgnoreProcessor`] loads such a file and answers, per candidate output
//! path, whether the generator may write it. Individual lines compile to
//! [`Rule`]s via the [`parser`] tokenizer; a malformed line disables only
//! itself.

pub mod parser;
mod processor;
mod rule;

pub use parser::{ParseError, Part, tokenize};
pub use processor::{IGNORE_FILE, IgnoreError, IgnoreProcessor};
pub use rule::{Operation, Rule};
