use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Result, eyre};
use trellis_codegen::{Generator, VisualApi};
use trellis_ir::Project;
use trellis_manifest::{DEFAULT_FILE_NAME, Manifest, TrellisToml};

use super::UnwrapOrExit;
use crate::ops;

/// Target API for state and instance fragments.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Target {
    Native,
    Forms,
}

impl From<Target> for VisualApi {
    fn from(target: Target) -> Self {
        match target {
            Target::Native => VisualApi::Native,
            Target::Forms => VisualApi::Forms,
        }
    }
}

#[derive(Args)]
pub struct ShowCommand {
    /// Screen or component to generate
    pub element: String,

    /// Path to trellis.toml (defaults to ./trellis.toml)
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    pub config: PathBuf,

    /// Print only the assignments of this state ("Default" or a category state)
    #[arg(long, conflicts_with = "instance")]
    pub state: Option<String>,

    /// Print only the code of this instance
    #[arg(long)]
    pub instance: Option<String>,

    /// Target for --state and --instance (defaults to the element's own)
    #[arg(long, value_enum)]
    pub target: Option<Target>,
}

impl ShowCommand {
    pub fn run(&self) -> Result<()> {
        let trellis_toml = TrellisToml::open(&self.config).unwrap_or_exit();
        let code = self.render(trellis_toml.manifest(), trellis_toml.project())?;
        print!("{}", code);
        Ok(())
    }

    fn render(&self, manifest: &Manifest, project: &Project) -> Result<String> {
        let element = project
            .element(&self.element)
            .ok_or_else(|| eyre!("no element named '{}'", self.element))?;
        let generator = Generator::new(project).with_settings(ops::generator_settings(manifest));

        let api = match self.target {
            Some(target) => target.into(),
            None => generator.element_api(element)?,
        };

        let code = if let Some(name) = &self.state {
            let state = element
                .state(name)
                .ok_or_else(|| eyre!("'{}' has no state named '{}'", element.name, name))?;
            generator.generate_state(element, state, api)?
        } else if let Some(name) = &self.instance {
            let instance = element
                .instance(name)
                .ok_or_else(|| eyre!("'{}' has no instance named '{}'", element.name, name))?;
            generator.generate_instance(instance, element, api)?
        } else {
            if self.target.is_some() {
                tracing::warn!("--target only applies to --state and --instance");
            }
            generator.generate_element(
                element,
                &ops::element_output_settings(manifest, &element.name),
                &ops::project_output_settings(manifest),
            )?
        };

        Ok(code)
    }
}
