use trellis_core::{format_float, strip_spaces, strip_type_path};
use trellis_ir::{
    Element, EnumValue, HorizontalAlignment, Instance, Variable, VariableValue, VerticalAlignment,
};

use super::{TargetProfile, VisualApi};
use crate::{
    Result,
    builder::CodeBuilder,
    emit::{self, Context, Line},
    grouping::{self, DENSITY},
};

/// The forms toolkit: controls hosted in an absolute layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormsProfile;

impl FormsProfile {
    fn float_value(&self, ctx: &Context<'_>, root_name: &str, value: f32) -> String {
        let literal = format_float(value);
        let scaled = if ctx.settings.adjust_for_density {
            format!("{} / {}", literal, DENSITY)
        } else {
            literal.clone()
        };

        match root_name {
            // PixelX/PixelY are already in device-independent units.
            "X" | "Y" => literal,
            "CornerRadius" => format!("(int)({})", scaled),
            _ => scaled,
        }
    }
}

impl TargetProfile for FormsProfile {
    fn api(&self) -> VisualApi {
        VisualApi::Forms
    }

    fn class_name(&self, type_name: &str) -> String {
        match type_name {
            "Text" => "Label".to_string(),
            other => strip_type_path(other).to_string(),
        }
    }

    fn property_name(&self, root_name: &str) -> String {
        match root_name {
            "Height" => "HeightRequest".to_string(),
            "Width" => "WidthRequest".to_string(),
            "X" => "PixelX".to_string(),
            "Y" => "PixelY".to_string(),
            "Visible" => "IsVisible".to_string(),
            "HorizontalAlignment" => "HorizontalTextAlignment".to_string(),
            "VerticalAlignment" => "VerticalTextAlignment".to_string(),
            other => strip_spaces(other),
        }
    }

    fn value(
        &self,
        ctx: &Context<'_>,
        variable: &Variable,
        value: &VariableValue,
    ) -> Result<String> {
        let alignment = match value {
            VariableValue::Float(f) => {
                return Ok(self.float_value(ctx, variable.root_name(), *f));
            }
            VariableValue::Enum(EnumValue::HorizontalAlignment(a)) => match a {
                HorizontalAlignment::Left => "Start",
                HorizontalAlignment::Center => "Center",
                HorizontalAlignment::Right => "End",
            },
            VariableValue::Enum(EnumValue::VerticalAlignment(a)) => match a {
                VerticalAlignment::Top => "Start",
                VerticalAlignment::Center => "Center",
                VerticalAlignment::Bottom => "End",
            },
            _ => return emit::format_value(ctx, self, variable, value),
        };
        Ok(format!("TextAlignment.{}", alignment))
    }

    fn full_line(&self, ctx: &Context<'_>, variable: &Variable) -> Result<Option<Line>> {
        let line = match variable.root_name() {
            "IsFormsControl" | "Name" | "X Origin" | "XOrigin" | "Y Origin" | "YOrigin" => {
                Line::Blank
            }
            "Parent" => match ctx.scope.instance {
                Some(instance) => {
                    let parent = emit::parent_name(ctx, variable)?;
                    if parent.is_empty() {
                        Line::Blank
                    } else if hosts_content(ctx.scope.container, parent) {
                        Line::Statement(format!("{}.Content = {};", parent, instance.name))
                    } else {
                        Line::Statement(format!("{}.Children.Add({});", parent, instance.name))
                    }
                }
                None => Line::Blank,
            },
            _ => return Ok(None),
        };
        Ok(Some(line))
    }

    fn group<'v>(
        &self,
        ctx: &Context<'_>,
        variables: &mut Vec<&'v Variable>,
    ) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        if let Some(color) = grouping::text_color(ctx, variables)? {
            lines.push(color);
        }
        if let Some(bounds) = grouping::position_and_size(ctx, variables)? {
            lines.extend(bounds);
        }
        Ok(lines)
    }

    fn name_line(&self, instance: &Instance) -> Option<String> {
        // Inherited instances already carry the base element's automation id.
        (!instance.defined_by_base).then(|| format!("{0}.AutomationId = \"{0}\";", instance.name))
    }

    fn default_parent_lines(&self, instance: &Instance) -> Vec<String> {
        if instance.base_type.ends_with("/CollectionView") {
            vec![
                format!(
                    "var tempFor{0} = GumScrollBar.CreateScrollableAbsoluteLayout({0}, ScrollableLayoutParentPlacement.Free);",
                    instance.name
                ),
                format!("MainLayout.Children.Add(tempFor{});", instance.name),
            ]
        } else {
            vec![format!("MainLayout.Children.Add({});", instance.name)]
        }
    }

    fn extra_fields(&self, element: &Element) -> Vec<String> {
        if hosts_main_layout(element) {
            vec!["protected AbsoluteLayout MainLayout { get; private set; }".to_string()]
        } else {
            Vec::new()
        }
    }

    fn constructor_preamble(&self, element: &Element, out: &mut CodeBuilder) {
        out.push_line(&format!("public {}()", self.class_name(&element.name)))
            .push_open()
            .push_line("var wasSuspended = GraphicalUiElement.IsAllLayoutSuspended;")
            .push_line("GraphicalUiElement.IsAllLayoutSuspended = true;");

        if is_absolute_layout(element) {
            out.push_line("var MainLayout = this;");
        } else if hosts_main_layout(element) {
            out.push_line("MainLayout = new AbsoluteLayout();")
                .push_line("BaseGrid.Children.Add(MainLayout);");
        }
    }

    fn constructor_postamble(&self, out: &mut CodeBuilder) {
        out.push_line("GraphicalUiElement.IsAllLayoutSuspended = wasSuspended;");
    }
}

fn is_absolute_layout(element: &Element) -> bool {
    element
        .base_type()
        .is_some_and(|base| base.ends_with("/AbsoluteLayout"))
}

/// Whether the element creates its own `MainLayout` host.
fn hosts_main_layout(element: &Element) -> bool {
    let base = element.base_type();
    let excluded = base.is_some_and(|b| {
        b.ends_with("/AbsoluteLayout") || b.ends_with("/CanvasView") || b == "Container"
    });
    let derived_screen = element.is_screen() && base.is_some();
    !excluded && !derived_screen
}

/// Scroll containers take a single child through `Content`.
fn hosts_content(container: &Element, parent: &str) -> bool {
    container.instance(parent).is_some_and(|instance| {
        instance.base_type.ends_with("/ScrollView")
            || instance.base_type.ends_with("/StickyScrollView")
    })
}
