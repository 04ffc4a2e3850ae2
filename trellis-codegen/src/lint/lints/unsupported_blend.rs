//! Lint for blend modes generation cannot translate.

use trellis_ir::{EnumValue, Project, VariableValue};

use super::super::Lint;
use crate::{
    lint::{Diagnostic, scope_location, states},
    resolve::Resolver,
};

/// Lint that errors on sprite and nine-slice blends outside the supported set.
pub struct UnsupportedBlendLint;

impl Lint for UnsupportedBlendLint {
    fn name(&self) -> &'static str {
        "unsupported-blend"
    }

    fn description(&self) -> &'static str {
        "Detect blend modes that have no generated equivalent"
    }

    fn check(&self, project: &Project, diagnostics: &mut Vec<Diagnostic>) {
        let resolver = Resolver::new(project);

        for element in project.generatable() {
            for state in states(element) {
                for variable in state.variables.iter().filter(|v| v.root_name() == "Blend") {
                    let Some(VariableValue::Enum(EnumValue::Blend(blend))) = &variable.value else {
                        continue;
                    };
                    if blend.is_supported() {
                        continue;
                    }

                    let origin = match variable.source_object() {
                        Some(name) => element
                            .instance(name)
                            .and_then(|instance| resolver.instance_base(instance)),
                        None => Some(element),
                    };
                    let textured = origin
                        .and_then(|origin| resolver.root_kind(origin).ok().flatten())
                        .is_some_and(|kind| kind.is_textured());
                    if !textured {
                        continue;
                    }

                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!(
                                "blend '{}' in state '{}' cannot be generated",
                                blend.as_str(),
                                state.name
                            ),
                        )
                        .at(scope_location(element, variable.source_object())),
                    );
                }
            }
        }
    }
}
