use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use trellis_ir::{Element, Project};
use trellis_manifest::{DEFAULT_FILE_NAME, TrellisToml};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to trellis.toml (defaults to ./trellis.toml)
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let trellis_toml = TrellisToml::open(&self.config).unwrap_or_exit();
        print!("{}", render_list(trellis_toml.project()));
        Ok(())
    }
}

fn render_list(project: &Project) -> String {
    let mut out = String::new();
    let sections = [
        ("Screens", project.screens().collect::<Vec<_>>()),
        ("Components", project.components().collect()),
    ];

    for (title, elements) in sections {
        if elements.is_empty() {
            out.push_str(&format!("No {} defined\n", title.to_lowercase()));
            continue;
        }
        out.push_str(&format!("{}:\n", title));
        for element in elements {
            render_element(element, &mut out);
        }
    }
    out
}

fn render_element(element: &Element, out: &mut String) {
    match element.base_type() {
        Some(base) => out.push_str(&format!("  {} : {}\n", element.name, base)),
        None => out.push_str(&format!("  {}\n", element.name)),
    }
    for instance in &element.instances {
        let inherited = if instance.defined_by_base {
            " (inherited)"
        } else {
            ""
        };
        out.push_str(&format!(
            "    {} ({}){}\n",
            instance.name, instance.base_type, inherited
        ));
    }
    for category in &element.categories {
        let states: Vec<&str> = category.states.iter().map(|s| s.name.as_str()).collect();
        out.push_str(&format!("    [{}] {}\n", category.name, states.join(", ")));
    }
}
