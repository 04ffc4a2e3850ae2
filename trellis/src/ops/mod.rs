//! Core operations.
//!
//! This module contains the business logic for trellis commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;

pub use bake::{BakeOptions, bake};
pub use check::check;
use trellis_codegen::{ElementOutputSettings, GeneratorSettings, ProjectOutputSettings};
use trellis_manifest::Manifest;

/// Generator settings from `[generator]`, keeping defaults for unset keys.
pub fn generator_settings(manifest: &Manifest) -> GeneratorSettings {
    let defaults = GeneratorSettings::default();
    let config = &manifest.generator;
    GeneratorSettings {
        canvas_width: config.canvas_width.unwrap_or(defaults.canvas_width),
        canvas_height: config.canvas_height.unwrap_or(defaults.canvas_height),
        adjust_for_density: config
            .adjust_for_density
            .unwrap_or(defaults.adjust_for_density),
    }
}

pub fn project_output_settings(manifest: &Manifest) -> ProjectOutputSettings {
    ProjectOutputSettings {
        common_usings: manifest.project.common_usings.clone(),
    }
}

/// Namespace and usings declared on a screen or component.
pub fn element_output_settings(manifest: &Manifest, element: &str) -> ElementOutputSettings {
    manifest
        .element(element)
        .map(|def| ElementOutputSettings {
            namespace: def.namespace.clone(),
            usings: def.usings.clone(),
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use trellis_manifest::Document;

    use super::*;

    fn document(content: &str) -> Document {
        content.parse().unwrap()
    }

    #[test]
    fn test_generator_settings_keep_defaults() {
        let doc = document(
            r#"
            [project]
            name = "demo"

            [generator]
            canvas_height = 1000
            "#,
        );

        let settings = generator_settings(doc.manifest());
        assert_eq!(settings.canvas_width, 480.0);
        assert_eq!(settings.canvas_height, 1000.0);
        assert!(settings.adjust_for_density);
    }

    #[test]
    fn test_output_settings() {
        let doc = document(
            r#"
            [project]
            name = "demo"
            common_usings = "using Gum.Wireframe;"

            [screens.Main]
            namespace = "Demo.Screens"
            "#,
        );

        let manifest = doc.manifest();
        assert_eq!(
            project_output_settings(manifest).common_usings.as_deref(),
            Some("using Gum.Wireframe;")
        );
        assert_eq!(
            element_output_settings(manifest, "Main").namespace.as_deref(),
            Some("Demo.Screens")
        );
        assert_eq!(
            element_output_settings(manifest, "Missing"),
            ElementOutputSettings::default()
        );
    }
}
