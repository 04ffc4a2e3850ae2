use std::{io, path::PathBuf};

use clap::{Args, CommandFactory};
use eyre::{Context, Result};

use super::Cli;

const BIN_NAME: &str = "trellis";

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: clap_complete::Shell,

    /// Write the script into this directory instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        let mut cmd = Cli::command();
        match &self.output {
            Some(dir) => {
                let path = clap_complete::generate_to(self.shell, &mut cmd, BIN_NAME, dir)
                    .wrap_err_with(|| format!("failed to write completions to '{}'", dir.display()))?;
                eprintln!("wrote {}", path.display());
            }
            None => clap_complete::generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap_complete::Shell;

    use super::*;

    #[test]
    fn test_writes_script_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = CompletionsCommand {
            shell: Shell::Bash,
            output: Some(dir.path().to_path_buf()),
        };

        cmd.run().unwrap();

        let script = std::fs::read_to_string(dir.path().join("trellis.bash")).unwrap();
        assert!(script.contains("bake"));
    }
}
