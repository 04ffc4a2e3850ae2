//! Lint for variables the generator leaves out.

use trellis_ir::{Element, Project, State, Variable};

use super::super::Lint;
use crate::{
    lint::{Diagnostic, scope_location, states},
    resolve::Resolver,
};

/// Lint that warns on set variables whose property does not exist on their scope.
pub struct OrphanVariableLint;

impl Lint for OrphanVariableLint {
    fn name(&self) -> &'static str {
        "orphan-variable"
    }

    fn description(&self) -> &'static str {
        "Detect variables whose property is not defined by the base type"
    }

    fn check(&self, project: &Project, diagnostics: &mut Vec<Diagnostic>) {
        let resolver = Resolver::new(project);

        for element in project.generatable() {
            for state in states(element) {
                for variable in state.variables.iter().filter(|v| v.is_set()) {
                    if let Some(message) = orphan(resolver, element, state, variable) {
                        diagnostics.push(
                            Diagnostic::warning(self.name(), message)
                                .at(scope_location(element, variable.source_object())),
                        );
                    }
                }
            }
        }
    }
}

fn orphan(
    resolver: Resolver<'_>,
    element: &Element,
    state: &State,
    variable: &Variable,
) -> Option<String> {
    let base = match variable.source_object() {
        Some(name) => {
            let Some(instance) = element.instance(name) else {
                return Some(format!(
                    "variable '{}' in state '{}' targets unknown instance '{}'",
                    variable.name, state.name, name
                ));
            };
            // Missing base types are reported on their own.
            resolver.instance_base(instance)?
        }
        None => match resolver.project().base_of(element) {
            Some(base) => base,
            // The default state of a base-less element is taken as written.
            None if std::ptr::eq(state, &element.default_state) => return None,
            None => element,
        },
    };

    // Chain errors belong to the cycle lint.
    match resolver.defines(base, variable.root_name()) {
        Ok(false) => Some(format!(
            "'{}' is not a property of '{}'; variable '{}' in state '{}' is skipped",
            variable.root_name(),
            base.name,
            variable.name,
            state.name
        )),
        Ok(true) | Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use trellis_ir::{Instance, StateCategory};

    use super::*;

    fn check(project: &Project) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        OrphanVariableLint.check(project, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_instance_orphan() {
        let project = Project::with_standards().with(
            Element::screen("Main")
                .with_instance(Instance::new("Title", "Text"))
                .with_variable(Variable::new("Title.ClipsChildren", true))
                .with_variable(Variable::new("Title.Font Size", 12.0)),
        );

        let diagnostics = check(&project);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "'ClipsChildren' is not a property of 'Text'; variable 'Title.ClipsChildren' in state 'Default' is skipped"
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("Main.Title"));
    }

    #[test]
    fn test_container_orphan_in_category_state() {
        let project = Project::with_standards().with(
            Element::component("Panel")
                .with_base("Container")
                .with_category(
                    StateCategory::new("Look").with_state(
                        State::new("Loud")
                            .with(Variable::new("Font Size", 40.0))
                            .with(Variable::new("Ghost.X", 1.0)),
                    ),
                ),
        );

        let diagnostics = check(&project);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("'Font Size' is not a property of 'Container'"));
        assert_eq!(
            diagnostics[1].message,
            "variable 'Ghost.X' in state 'Loud' targets unknown instance 'Ghost'"
        );
    }

    #[test]
    fn test_unset_variables_are_ignored() {
        let project = Project::with_standards().with(
            Element::screen("Main")
                .with_instance(Instance::new("Title", "Text"))
                .with_variable(Variable::new("Title.Bogus", 1.0).inert()),
        );

        assert!(check(&project).is_empty());
    }
}
