//! Bake command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Project name from the document.
    pub project_name: String,

    /// Lint warnings about code left out of the generated units.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Written files, relative to the output directory.
    pub files: Vec<String>,
}

#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl BakeReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&self.project_name);
        out.newline();

        out.section(&format!("Generated ({})", written.files.len()));
        for file in &written.files {
            out.added_item(file);
        }
        out.newline();

        out.key_value("Output", &written.output_dir.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_written() {
        let report = BakeReport {
            project_name: "demo".into(),
            warnings: vec!["orphan".into()],
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("Generated"),
                files: vec!["Main.Generated.cs".into()],
            }),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.text,
            "warning: orphan\ndemo\n\nGenerated (1):\n  + Main.Generated.cs\n\nOutput: Generated\n"
        );
    }

    #[test]
    fn test_render_preview() {
        let report = BakeReport {
            project_name: "demo".into(),
            warnings: Vec::new(),
            result: GenerationResult::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: "Main.Generated.cs".into(),
                    content: "partial class MainRuntime".into(),
                }],
            }),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(out.text.starts_with("── Main.Generated.cs ──\npartial class MainRuntime\n"));
        assert!(out.text.ends_with("1 files would be generated\n"));
    }
}
