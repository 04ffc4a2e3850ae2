//! Bake operation - code generation for screens and components.

use std::path::{Path, PathBuf};

use eyre::{Context, Result, bail};
use trellis_codegen::{Generator, lint::Linter};
use trellis_core::{FileRules, GeneratedFile, WriteResult, generated_file_name};
use trellis_ir::{Element, Project};
use trellis_manifest::Manifest;

use super::{element_output_settings, generator_settings, project_output_settings};
use crate::reports::{BakeReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Generate only this element.
    pub element: Option<&'a str>,
}

/// First line of every written unit.
const AUTO_GENERATED_HEADER: &str = "// <auto-generated />";

/// Generated code for one element, written as `<Element>.Generated.cs`.
struct ElementUnit {
    name: String,
    code: String,
}

impl GeneratedFile for ElementUnit {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(generated_file_name(&self.name))
    }

    fn rules(&self) -> FileRules {
        FileRules {
            header: Some(AUTO_GENERATED_HEADER),
            ..FileRules::default()
        }
    }

    fn render(&self) -> String {
        self.code.clone()
    }
}

/// Execute the bake operation.
///
/// Generates every screen and component, or only `opts.element`, and
/// writes the units under the output directory.
pub fn bake(manifest: &Manifest, project: &Project, opts: BakeOptions) -> Result<BakeReport> {
    let warnings: Vec<String> = Linter::new()
        .run(project)
        .into_iter()
        .filter(|d| d.severity.is_warning())
        .map(|d| d.to_string())
        .collect();

    let elements: Vec<&Element> = match opts.element {
        Some(name) => match project.element(name) {
            Some(element) if project.generatable().any(|e| e.name == element.name) => {
                vec![element]
            }
            Some(_) => bail!("'{}' is a standard element and has no generated code", name),
            None => bail!("no screen or component named '{}'", name),
        },
        None => project.generatable().collect(),
    };

    let generator = Generator::new(project).with_settings(generator_settings(manifest));
    let project_settings = project_output_settings(manifest);

    let mut units = Vec::with_capacity(elements.len());
    for element in elements {
        let code = generator
            .generate_element(
                element,
                &element_output_settings(manifest, &element.name),
                &project_settings,
            )
            .wrap_err_with(|| format!("failed to generate '{}'", element.name))?;
        units.push(ElementUnit {
            name: element.name.clone(),
            code,
        });
    }

    let result = if opts.dry_run {
        let files = units
            .into_iter()
            .map(|unit| PreviewFile {
                path: generated_file_name(&unit.name),
                content: unit.code,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let mut files = Vec::with_capacity(units.len());
        for unit in &units {
            if unit.write(opts.output_dir)? == WriteResult::Written {
                files.push(generated_file_name(&unit.name));
            }
        }
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files,
        })
    };

    Ok(BakeReport {
        project_name: manifest.project.name.clone(),
        warnings,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use trellis_manifest::Document;

    use super::*;

    const PROJECT: &str = r#"
        [project]
        name = "demo"

        [screens.Main]
        namespace = "Demo.Screens"

        [[screens.Main.instances]]
        name = "Title"
        base_type = "Text"

        [[screens.Main.variables]]
        name = "Title.Text"
        value = "Hello"

        [components."Controls/Button"]
        base_type = "Container"
    "#;

    #[test]
    fn test_bake_writes_every_element() {
        let doc: Document = PROJECT.parse().unwrap();
        let dir = tempfile::tempdir().unwrap();

        let report = bake(
            doc.manifest(),
            doc.project(),
            BakeOptions {
                output_dir: dir.path(),
                dry_run: false,
                element: None,
            },
        )
        .unwrap();

        let GenerationResult::Written(written) = report.result else {
            panic!("expected written files");
        };
        assert_eq!(
            written.files,
            ["Main.Generated.cs", "Controls/Button.Generated.cs"]
        );

        let main = fs::read_to_string(dir.path().join("Main.Generated.cs")).unwrap();
        assert!(main.starts_with("// <auto-generated />\nnamespace Demo.Screens\n{\n"));
        assert!(main.contains("Title.Text = \"Hello\";"));
        assert!(dir.path().join("Controls/Button.Generated.cs").exists());
    }

    #[test]
    fn test_bake_dry_run_writes_nothing() {
        let doc: Document = PROJECT.parse().unwrap();
        let dir = tempfile::tempdir().unwrap();

        let report = bake(
            doc.manifest(),
            doc.project(),
            BakeOptions {
                output_dir: dir.path(),
                dry_run: true,
                element: Some("Main"),
            },
        )
        .unwrap();

        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected a preview");
        };
        assert_eq!(preview.files.len(), 1);
        assert_eq!(preview.files[0].path, "Main.Generated.cs");
        assert!(!dir.path().join("Main.Generated.cs").exists());
    }

    #[test]
    fn test_bake_rejects_unknown_and_standard_elements() {
        let doc: Document = PROJECT.parse().unwrap();
        let dir = tempfile::tempdir().unwrap();

        for name in ["Missing", "Text"] {
            let result = bake(
                doc.manifest(),
                doc.project(),
                BakeOptions {
                    output_dir: dir.path(),
                    dry_run: true,
                    element: Some(name),
                },
            );
            assert!(result.is_err(), "{name} should be rejected");
        }
    }
}
