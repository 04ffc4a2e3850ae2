use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use trellis_manifest::{DEFAULT_FILE_NAME, TrellisToml};

use super::UnwrapOrExit;
use crate::{
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to trellis.toml (defaults to ./trellis.toml)
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    pub config: PathBuf,

    /// Output directory (defaults to the `output` key of trellis.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Generate only this screen or component
    #[arg(short, long)]
    pub element: Option<String>,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let trellis_toml = TrellisToml::open(&self.config).unwrap_or_exit();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| trellis_toml.output_dir());

        let report = ops::bake(
            trellis_toml.manifest(),
            trellis_toml.project(),
            BakeOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                element: self.element.as_deref(),
            },
        )?;

        report.render(&mut TerminalOutput);
        Ok(())
    }
}
