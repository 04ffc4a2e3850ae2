//! Check operation - project lints.

use std::path::Path;

use trellis_codegen::lint::Linter;
use trellis_ir::Project;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs every lint over the project and returns the diagnostics.
pub fn check(project: &Project, config_path: &Path) -> CheckReport {
    CheckReport {
        config_path: config_path.to_path_buf(),
        diagnostics: Linter::new().run(project),
    }
}

#[cfg(test)]
mod tests {
    use trellis_manifest::Document;

    use super::*;

    #[test]
    fn test_check_reports_orphans() {
        let doc: Document = r#"
            [project]
            name = "demo"

            [[screens.Main.variables]]
            name = "Ghost.Visible"
            value = false
        "#
        .parse()
        .unwrap();

        let report = check(doc.project(), Path::new("trellis.toml"));

        assert!(report.is_valid());
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].lint, "orphan-variable");
    }

    #[test]
    fn test_check_fails_on_unsupported_blend() {
        let doc: Document = r#"
            [project]
            name = "demo"

            [[screens.Main.instances]]
            name = "Glow"
            base_type = "Sprite"

            [[screens.Main.variables]]
            name = "Glow.Blend"
            value = "Replace"
        "#
        .parse()
        .unwrap();

        let report = check(doc.project(), Path::new("trellis.toml"));

        assert!(!report.is_valid());
    }
}
