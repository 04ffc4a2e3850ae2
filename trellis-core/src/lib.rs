//! Core utilities and types for the trellis UI code generator.
//!
//! This crate provides file output and the small string helpers shared by
//! the code generator and the CLI.

mod file;
mod utils;

// File operations
pub use file::{File, GeneratedFile, FileRules, Overwrite, WriteResult};
// String utilities
pub use utils::{format_float, generated_file_name, quote_string, strip_spaces, strip_type_path};
