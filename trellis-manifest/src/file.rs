use std::path::{Path, PathBuf};

use trellis_ir::Project;

use crate::{Document, Manifest, Result};

/// File name looked up when no document path is given.
pub const DEFAULT_FILE_NAME: &str = "trellis.toml";

/// Represents a trellis.toml file with both raw content and parsed document.
pub struct TrellisToml {
    path: PathBuf,
    content: String,
    document: Document,
}

impl TrellisToml {
    /// Open and parse a trellis.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let document = Document::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        self.document.manifest()
    }

    pub fn project(&self) -> &Project {
        self.document.project()
    }

    /// The configured output directory, relative to the file's directory.
    pub fn output_dir(&self) -> PathBuf {
        let dir = self.path.parent().unwrap_or(Path::new(""));
        dir.join(self.manifest().project.output_dir())
    }
}
