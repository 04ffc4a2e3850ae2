use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use trellis_codegen::lint::{Lint, Linter};
use trellis_manifest::{DEFAULT_FILE_NAME, TrellisToml};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to trellis.toml (defaults to ./trellis.toml)
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    pub config: PathBuf,

    /// Print diagnostics as JSON
    #[arg(long)]
    pub json: bool,

    /// List the available lints and exit
    #[arg(long)]
    pub list: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        if self.list {
            for lint in Linter::new().lints() {
                println!("{:<20} {}", lint.name(), lint.description());
            }
            return Ok(());
        }

        let trellis_toml = TrellisToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(trellis_toml.project(), &self.config);

        if self.json {
            let json = serde_json::to_string_pretty(&report.diagnostics)
                .wrap_err("Failed to serialize diagnostics")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput);
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
