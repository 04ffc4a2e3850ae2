//! Lint for circular base-type chains.

use std::collections::BTreeSet;

use trellis_ir::Project;

use super::super::Lint;
use crate::{Error, lint::Diagnostic, resolve::Resolver};

/// Lint that errors on base-type cycles and over-deep chains.
pub struct BaseTypeCycleLint;

impl Lint for BaseTypeCycleLint {
    fn name(&self) -> &'static str {
        "base-type-cycle"
    }

    fn description(&self) -> &'static str {
        "Detect elements whose base types loop back on themselves"
    }

    fn check(&self, project: &Project, diagnostics: &mut Vec<Diagnostic>) {
        let resolver = Resolver::new(project);
        // Every member of a cycle trips it; report each cycle once.
        let mut reported: Vec<BTreeSet<String>> = Vec::new();

        for element in project.elements() {
            let Err(err) = resolver.chain(element) else {
                continue;
            };
            if let Error::BaseTypeCycle { chain } = &err {
                let members = cycle_members(chain);
                if reported.contains(&members) {
                    continue;
                }
                reported.push(members);
            }
            diagnostics.push(Diagnostic::error(self.name(), err.to_string()).at(&element.name));
        }
    }
}

/// Names on the loop itself, without the lead-in from the starting element.
fn cycle_members(chain: &[String]) -> BTreeSet<String> {
    let start = chain.last();
    chain
        .iter()
        .skip_while(|name| Some(*name) != start)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use trellis_ir::Element;

    use super::*;

    #[test]
    fn test_cycle_reported_once() {
        let project = Project::with_standards()
            .with(Element::component("A").with_base("B"))
            .with(Element::component("B").with_base("A"))
            .with(Element::component("C").with_base("A"));

        let mut diagnostics = Vec::new();
        BaseTypeCycleLint.check(&project, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "base type cycle: A -> B -> A");
        assert_eq!(diagnostics[0].location.as_deref(), Some("A"));
    }

    #[test]
    fn test_acyclic_project() {
        let project = Project::with_standards()
            .with(Element::component("A").with_base("Container"))
            .with(Element::component("B").with_base("A"));

        let mut diagnostics = Vec::new();
        BaseTypeCycleLint.check(&project, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
