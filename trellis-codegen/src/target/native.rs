use trellis_core::{strip_spaces, strip_type_path};
use trellis_ir::{Element, Instance, Variable, VariableValue};

use super::{TargetProfile, VisualApi};
use crate::{
    Result,
    builder::CodeBuilder,
    emit::{self, Context, Line},
};

/// The tool's own runtime: `…Runtime` classes with child lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeProfile;

impl TargetProfile for NativeProfile {
    fn api(&self) -> VisualApi {
        VisualApi::Native
    }

    fn class_name(&self, type_name: &str) -> String {
        format!("{}Runtime", strip_type_path(type_name))
    }

    fn property_name(&self, root_name: &str) -> String {
        strip_spaces(root_name)
    }

    fn value(
        &self,
        ctx: &Context<'_>,
        variable: &Variable,
        value: &VariableValue,
    ) -> Result<String> {
        emit::format_value(ctx, self, variable, value)
    }

    fn full_line(&self, ctx: &Context<'_>, variable: &Variable) -> Result<Option<Line>> {
        let line = match variable.root_name() {
            "Parent" => match ctx.scope.instance {
                Some(instance) => {
                    let parent = emit::parent_name(ctx, variable)?;
                    if parent.is_empty() {
                        Line::Blank
                    } else {
                        Line::Statement(format!("{}.Children.Add({});", parent, instance.name))
                    }
                }
                None => Line::Blank,
            },
            "IsFormsControl" | "ClipsChildren" | "ExposeChildrenEvents" | "HasEvents" => {
                Line::Blank
            }
            _ => return Ok(None),
        };
        Ok(Some(line))
    }

    fn name_line(&self, instance: &Instance) -> Option<String> {
        Some(format!("{0}.Name = \"{0}\";", instance.name))
    }

    fn default_parent_lines(&self, instance: &Instance) -> Vec<String> {
        vec![format!("this.Children.Add({});", instance.name)]
    }

    fn constructor_preamble(&self, element: &Element, out: &mut CodeBuilder) {
        out.push_line(&format!(
            "public {}(bool fullInstantiation = true)",
            self.class_name(&element.name)
        ))
        .push_open()
        .push_line("if(fullInstantiation)")
        .push_open();

        if element.base_type() == Some("Container") {
            out.push_line("this.SetContainedObject(new InvisibleRenderable());");
        }
        out.push_blank();
    }

    fn constructor_postamble(&self, out: &mut CodeBuilder) {
        out.push_close();
    }
}
