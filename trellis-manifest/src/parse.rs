//! Document parsing.

use std::str::FromStr;

use trellis_ir::Project;

use crate::{
    DEFAULT_FILE_NAME, Error, Manifest, Result,
    error::SourceContext,
    lower::lower,
    validate::check_generator,
};

/// A parsed and validated trellis.toml with its lowered element graph.
#[derive(Debug, Clone)]
pub struct Document {
    manifest: Manifest,
    project: Project,
}

impl FromStr for Document {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s, DEFAULT_FILE_NAME)
    }
}

impl Document {
    /// Parse a trellis.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_document(content, filename)
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn project(&self) -> &Project {
        &self.project
    }
}

/// Parse, validate and lower a document.
pub fn parse_document(content: &str, filename: &str) -> Result<Document> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    check_generator(&manifest.generator, &ctx)?;
    let project = lower(&manifest, &ctx)?;
    Ok(Document { manifest, project })
}
