//! Lint for `Parent` values naming missing instances.

use trellis_ir::{Project, VariableValue};

use super::super::Lint;
use crate::lint::{Diagnostic, scope_location, states};

/// Lint that warns when an instance is parented to an instance that does not exist.
pub struct UnknownParentLint;

impl Lint for UnknownParentLint {
    fn name(&self) -> &'static str {
        "unknown-parent"
    }

    fn description(&self) -> &'static str {
        "Detect Parent variables that name no instance of the element"
    }

    fn check(&self, project: &Project, diagnostics: &mut Vec<Diagnostic>) {
        for element in project.generatable() {
            for state in states(element) {
                let parents = state.variables.iter().filter(|v| {
                    v.root_name() == "Parent" && v.source_object().is_some() && v.is_set()
                });

                for variable in parents {
                    let Some(parent) = variable.value.as_ref().and_then(VariableValue::as_str)
                    else {
                        continue;
                    };
                    if parent.is_empty() || element.instance(parent).is_some() {
                        continue;
                    }
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "'{}' is parented to '{}', which is not an instance of '{}'",
                                variable.source_object().unwrap_or_default(),
                                parent,
                                element.name
                            ),
                        )
                        .at(scope_location(element, variable.source_object())),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use trellis_ir::{Element, Instance, Variable};

    use super::*;

    #[test]
    fn test_unknown_parent() {
        let project = Project::with_standards().with(
            Element::screen("Main")
                .with_instance(Instance::new("Panel", "Container"))
                .with_instance(Instance::new("Title", "Text"))
                .with_instance(Instance::new("Body", "Text"))
                .with_variable(Variable::new("Title.Parent", "Panel"))
                .with_variable(Variable::new("Body.Parent", "Sidebar")),
        );

        let mut diagnostics = Vec::new();
        UnknownParentLint.check(&project, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "'Body' is parented to 'Sidebar', which is not an instance of 'Main'"
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("Main.Body"));
    }

    #[test]
    fn test_empty_parent_is_fine() {
        let project = Project::with_standards().with(
            Element::screen("Main")
                .with_instance(Instance::new("Title", "Text"))
                .with_variable(Variable::new("Title.Parent", "")),
        );

        let mut diagnostics = Vec::new();
        UnknownParentLint.check(&project, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
