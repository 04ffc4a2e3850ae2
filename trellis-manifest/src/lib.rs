//! Parsing and validation of `trellis.toml` project documents.
//!
//! A document declares screens, components and standard-element overrides.
//! Parsing checks it and lowers it into a [`trellis_ir::Project`]; errors
//! are [`miette`] diagnostics pointing into the document.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod lower;
mod manifest;
mod parse;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::{DEFAULT_FILE_NAME, TrellisToml};
pub use manifest::{
    DEFAULT_OUTPUT_DIR, ElementDef, GeneratorConfig, InstanceDef, Manifest, ProjectConfig,
    VariableDef,
};
pub use parse::{Document, parse_document};
