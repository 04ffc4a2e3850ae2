//! Lint for base types that are not in the project.

use trellis_ir::Project;

use super::super::Lint;
use crate::lint::Diagnostic;

/// Lint that warns on elements and instances whose base type cannot be found.
pub struct MissingBaseTypeLint;

impl Lint for MissingBaseTypeLint {
    fn name(&self) -> &'static str {
        "missing-base-type"
    }

    fn description(&self) -> &'static str {
        "Detect base types that are not defined in the project"
    }

    fn check(&self, project: &Project, diagnostics: &mut Vec<Diagnostic>) {
        for element in project.generatable() {
            if let Some(base) = element.base_type()
                && !project.contains(base)
            {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("base type '{}' of '{}' is not defined", base, element.name),
                    )
                    .at(&element.name),
                );
            }

            for instance in &element.instances {
                if !project.contains(&instance.base_type) {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "instance '{}' has undefined base type '{}'; its variables are skipped",
                                instance.name, instance.base_type
                            ),
                        )
                        .at(format!("{}.{}", element.name, instance.name)),
                    );
                }
            }
        }
    }
}
