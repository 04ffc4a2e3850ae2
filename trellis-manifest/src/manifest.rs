//! Serde model of a `trellis.toml` document.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

/// Default directory `bake` writes into.
pub const DEFAULT_OUTPUT_DIR: &str = "Generated";

/// Root of trellis.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub project: ProjectConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub screens: IndexMap<String, ElementDef>,

    #[serde(default)]
    pub components: IndexMap<String, ElementDef>,

    /// Overrides of, or additions to, the built-in standard elements.
    #[serde(default)]
    pub standards: IndexMap<String, ElementDef>,
}

impl Manifest {
    /// Screen or component definition by name.
    pub fn element(&self, name: &str) -> Option<&ElementDef> {
        self.screens
            .get(name)
            .or_else(|| self.components.get(name))
    }

    /// Every section with its table name, in document order of sections.
    pub(crate) fn sections(&self) -> [(&'static str, &IndexMap<String, ElementDef>); 3] {
        [
            ("screens", &self.screens),
            ("components", &self.components),
            ("standards", &self.standards),
        ]
    }
}

/// `[project]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub name: String,
    /// Using statements emitted at the top of every generated file.
    pub common_usings: Option<String>,
    /// Directory generated files are written to, relative to the document.
    pub output: Option<String>,
}

impl ProjectConfig {
    pub fn output_dir(&self) -> &Path {
        Path::new(self.output.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR))
    }
}

/// `[generator]` table. Unset keys keep the generator's defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub canvas_width: Option<f32>,
    pub canvas_height: Option<f32>,
    pub adjust_for_density: Option<bool>,
}

/// A screen, component or standard element.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementDef {
    pub base_type: Option<String>,
    pub namespace: Option<String>,
    pub usings: Option<String>,

    #[serde(default)]
    pub instances: Vec<InstanceDef>,

    /// Variables of the default state.
    #[serde(default)]
    pub variables: Vec<VariableDef>,

    /// `category -> state -> variables`, in document order.
    #[serde(default)]
    pub categories: IndexMap<String, IndexMap<String, Vec<VariableDef>>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstanceDef {
    pub name: String,
    pub base_type: String,
    #[serde(default)]
    pub defined_by_base: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariableDef {
    pub name: String,
    pub value: Option<toml::Value>,
    /// Declared type; implied from the root name or the value when absent.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    #[serde(default = "default_sets_value")]
    pub sets_value: bool,
    pub exposed_as: Option<String>,
}

fn default_sets_value() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nested_categories() {
        let manifest: Manifest = toml::from_str(
            r#"
            [project]
            name = "demo"

            [[components."Controls/Button".categories.ButtonState.Enabled]]
            name = "Visible"
            value = true

            [[components."Controls/Button".categories.ButtonState.Disabled]]
            name = "Visible"
            value = false
            "#,
        )
        .unwrap();

        let button = manifest.element("Controls/Button").unwrap();
        let states: Vec<&str> = button.categories["ButtonState"]
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(states, ["Enabled", "Disabled"]);
        assert!(button.categories["ButtonState"]["Enabled"][0].sets_value);
    }

    #[test]
    fn test_output_dir_default() {
        let manifest: Manifest = toml::from_str("[project]\nname = \"demo\"\n").unwrap();
        assert_eq!(manifest.project.output_dir(), Path::new("Generated"));
        assert_eq!(manifest.generator.canvas_width, None);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result: Result<Manifest, _> =
            toml::from_str("[project]\nname = \"demo\"\ncolour = \"red\"\n");
        assert!(result.is_err());
    }
}
