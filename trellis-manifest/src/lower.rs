//! Lowering a validated document into a [`Project`].

use std::collections::HashMap;

use trellis_ir::{
    Element, ElementKind, EnumValue, Instance, Project, StandardKind, State, StateCategory,
    Variable, VariableValue, implied_enum_type,
};

use crate::{
    ElementDef, Manifest, Result, VariableDef,
    error::SourceContext,
    validate::{check_identifier, find_entry_span, find_table_span, validate_identifier},
};

/// Build the element graph described by `manifest`.
///
/// Standards start from the built-ins; a `[standards.*]` entry with a
/// built-in name is merged into it, any other name adds a new standard.
pub(crate) fn lower(manifest: &Manifest, ctx: &SourceContext) -> Result<Project> {
    check_duplicate_elements(manifest, ctx)?;

    let mut project = Project::with_standards();

    for (name, def) in &manifest.standards {
        let mut element = project
            .element(name)
            .cloned()
            .unwrap_or_else(|| Element::new(name.as_str(), ElementKind::Standard));
        apply(ctx, def, &mut element)?;
        project.insert(element);
    }

    let sections = [
        (&manifest.screens, ElementKind::Screen),
        (&manifest.components, ElementKind::Component),
    ];
    for (elements, kind) in sections {
        for (name, def) in elements {
            let mut element = Element::new(name.as_str(), kind);
            apply(ctx, def, &mut element)?;
            project.insert(element);
        }
    }

    check_cycles(&project, ctx)?;
    Ok(project)
}

fn check_duplicate_elements(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let mut seen: HashMap<&str, &'static str> = HashMap::new();

    for (section, elements) in manifest.sections() {
        for name in elements.keys() {
            check_element_name(ctx, name)?;
            if let Some(first) = seen.insert(name.as_str(), section) {
                return Err(ctx.duplicate_element_error(
                    name,
                    first,
                    section,
                    find_table_span(ctx.src(), name),
                ));
            }
            if section != "standards" && StandardKind::from_name(name).is_some() {
                return Err(ctx.validation_error(
                    format!("'{}' is a standard element; override it under [standards]", name),
                    find_table_span(ctx.src(), name),
                ));
            }
        }
    }
    Ok(())
}

/// Element names become class names and generated file paths, so each
/// `/`-separated segment must be an identifier.
fn check_element_name(ctx: &SourceContext, name: &str) -> Result<()> {
    let span = find_table_span(ctx.src(), name);
    for segment in name.split('/') {
        if let Some(reason) = validate_identifier(segment) {
            let reason = match segment {
                "" | "." | ".." => "path segments cannot be empty, '.' or '..'",
                _ => reason,
            };
            return Err(ctx.invalid_identifier_error(name, "element", reason, span));
        }
    }
    Ok(())
}

fn apply(ctx: &SourceContext, def: &ElementDef, element: &mut Element) -> Result<()> {
    if let Some(base) = &def.base_type {
        element.base_type = Some(base.clone());
    }

    for instance in &def.instances {
        let span = find_entry_span(ctx.src(), &instance.name);
        check_identifier(ctx, &instance.name, "instance", span)?;
        if element.instance(&instance.name).is_some() {
            return Err(ctx.duplicate_instance_error(&element.name, &instance.name, span));
        }
        element.instances.push(Instance {
            name: instance.name.clone(),
            base_type: instance.base_type.clone(),
            defined_by_base: instance.defined_by_base,
        });
    }

    for variable_def in &def.variables {
        let variable = lower_variable(ctx, variable_def)?;
        let state = &mut element.default_state;
        match state.variables.iter_mut().find(|v| v.name == variable.name) {
            Some(existing) => *existing = variable,
            None => state.variables.push(variable),
        }
    }

    for (category_name, states) in &def.categories {
        let span = find_table_span(ctx.src(), category_name);
        check_identifier(ctx, category_name, "category", span)?;

        let mut category = StateCategory::new(category_name.as_str());
        for (state_name, variables) in states {
            check_identifier(ctx, state_name, "state", find_table_span(ctx.src(), state_name))?;

            let mut state = State::new(state_name.as_str());
            for variable_def in variables {
                state.variables.push(lower_variable(ctx, variable_def)?);
            }
            category.states.push(state);
        }

        match element.categories.iter_mut().find(|c| c.name == category.name) {
            Some(existing) => *existing = category,
            None => element.categories.push(category),
        }
    }

    Ok(())
}

fn lower_variable(ctx: &SourceContext, def: &VariableDef) -> Result<Variable> {
    let span = find_entry_span(ctx.src(), &def.name);
    let root_name = def.name.split_once('.').map_or(def.name.as_str(), |(_, root)| root);
    let declared = def.type_name.as_deref().or_else(|| implied_enum_type(root_name));

    if let Some(exposed_as) = &def.exposed_as {
        check_identifier(ctx, exposed_as, "exposed variable", span)?;
    }

    let value = match &def.value {
        Some(value) => Some(lower_value(ctx, def, value, declared)?),
        None => None,
    };

    let type_name = match (declared, &value) {
        (Some(declared), _) => declared.to_string(),
        (None, Some(value)) => value.type_name().to_string(),
        (None, None) => {
            return Err(ctx.validation_error(
                format!("variable '{}' needs a value or a type", def.name),
                span,
            ));
        }
    };

    Ok(Variable {
        name: def.name.clone(),
        type_name,
        sets_value: def.sets_value && value.is_some(),
        value,
        exposed_as: def.exposed_as.clone(),
    })
}

fn lower_value(
    ctx: &SourceContext,
    def: &VariableDef,
    value: &toml::Value,
    declared: Option<&str>,
) -> Result<VariableValue> {
    let lowered = match value {
        toml::Value::Integer(i) => VariableValue::Float(*i as f32),
        toml::Value::Float(f) => VariableValue::Float(*f as f32),
        toml::Value::Boolean(b) => VariableValue::Bool(*b),
        toml::Value::String(s) => {
            let member = match declared {
                Some(type_name) => EnumValue::parse(type_name, s).map_err(|e| {
                    ctx.invalid_enum_member_error(&def.name, e, find_entry_span(ctx.src(), &def.name))
                })?,
                None => None,
            };
            match member {
                Some(member) => VariableValue::Enum(member),
                None => VariableValue::String(s.clone()),
            }
        }
        other => {
            return Err(ctx.unsupported_value_error(
                &def.name,
                other.type_str(),
                find_entry_span(ctx.src(), &def.name),
            ));
        }
    };
    Ok(lowered)
}

fn check_cycles(project: &Project, ctx: &SourceContext) -> Result<()> {
    for element in project.elements() {
        let mut chain = vec![element.name.clone()];
        let mut current = element;

        while let Some(base) = project.base_of(current) {
            let repeated = chain.contains(&base.name);
            chain.push(base.name.clone());
            if repeated {
                return Err(
                    ctx.base_type_cycle_error(&chain, find_table_span(ctx.src(), &element.name))
                );
            }
            current = base;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use trellis_ir::{DimensionUnit, HorizontalAlignment};

    use super::*;
    use crate::Error;

    fn lower_str(content: &str) -> Result<Project> {
        let ctx = SourceContext::new(content, "trellis.toml");
        let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        lower(&manifest, &ctx)
    }

    #[test]
    fn test_lowers_values_by_declared_or_implied_type() {
        let project = lower_str(
            r#"
            [project]
            name = "demo"

            [[screens.Main.instances]]
            name = "Title"
            base_type = "Text"

            [[screens.Main.variables]]
            name = "Title.Width Units"
            value = "Percentage"

            [[screens.Main.variables]]
            name = "Title.Width"
            value = 50

            [[screens.Main.variables]]
            name = "Title.X Origin"
            type = "HorizontalAlignment"
            value = "Center"

            [[screens.Main.variables]]
            name = "Title.Text"
            value = "Percentage"
            "#,
        )
        .unwrap();

        let main = project.element("Main").unwrap();
        let state = &main.default_state;
        assert_eq!(
            state.variable("Title.Width Units").unwrap().value,
            Some(VariableValue::from(DimensionUnit::Percentage))
        );
        assert_eq!(
            state.variable("Title.Width").unwrap().value,
            Some(VariableValue::Float(50.0))
        );
        assert_eq!(
            state.variable("Title.X Origin").unwrap().value,
            Some(VariableValue::from(HorizontalAlignment::Center))
        );
        let text = state.variable("Title.Text").unwrap();
        assert_eq!(text.value, Some(VariableValue::from("Percentage")));
        assert_eq!(text.type_name, "string");
    }

    #[test]
    fn test_unknown_enum_member() {
        let err = lower_str(
            r#"
            [project]
            name = "demo"

            [[screens.Main.variables]]
            name = "X Units"
            value = "Sideways"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidEnumMember { ref variable, .. } if variable == "X Units"));
    }

    #[test]
    fn test_unsupported_value_kind() {
        let err = lower_str(
            r#"
            [project]
            name = "demo"

            [[screens.Main.variables]]
            name = "Text"
            value = [1, 2]
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::UnsupportedValue { kind: "array", .. }));
    }

    #[test]
    fn test_duplicate_element_across_sections() {
        let err = lower_str(
            r#"
            [project]
            name = "demo"

            [screens.Shared]
            [components.Shared]
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            *err,
            Error::DuplicateElement {
                first: "screens",
                second: "components",
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_instance() {
        let err = lower_str(
            r#"
            [project]
            name = "demo"

            [[screens.Main.instances]]
            name = "Title"
            base_type = "Text"

            [[screens.Main.instances]]
            name = "Title"
            base_type = "Sprite"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::DuplicateInstance { .. }));
    }

    #[test]
    fn test_base_type_cycle() {
        let err = lower_str(
            r#"
            [project]
            name = "demo"

            [components.A]
            base_type = "B"

            [components.B]
            base_type = "A"
            "#,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "base type cycle: A -> B -> A");
    }

    #[test]
    fn test_standard_override_merges() {
        let project = lower_str(
            r#"
            [project]
            name = "demo"

            [[standards.Text.variables]]
            name = "Font Size"
            value = 24

            [[standards.Text.variables]]
            name = "Outline"
            value = 0
            "#,
        )
        .unwrap();

        let text = project.element("Text").unwrap();
        assert_eq!(text.kind, ElementKind::Standard);
        assert_eq!(
            text.default_state.variable("Font Size").unwrap().value,
            Some(VariableValue::Float(24.0))
        );
        assert!(text.default_state.variable("Outline").is_some());
        assert!(text.default_state.variable("Red").is_some());
    }

    #[test]
    fn test_screen_cannot_shadow_standard() {
        let err = lower_str(
            r#"
            [project]
            name = "demo"

            [screens.Text]
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_declaration_without_value() {
        let project = lower_str(
            r#"
            [project]
            name = "demo"

            [[components.Card.variables]]
            name = "Title.Text"
            type = "string"
            exposed_as = "TitleText"
            "#,
        )
        .unwrap();

        let card = project.element("Card").unwrap();
        let variable = card.default_state.variable("Title.Text").unwrap();
        assert!(!variable.is_set());
        assert_eq!(variable.exposed_as.as_deref(), Some("TitleText"));

        let err = lower_str(
            r#"
            [project]
            name = "demo"

            [[components.Card.variables]]
            name = "Title.Text"
            "#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "variable 'Title.Text' needs a value or a type");
    }

    #[test]
    fn test_invalid_instance_name() {
        let err = lower_str(
            r#"
            [project]
            name = "demo"

            [[screens.Main.instances]]
            name = "Play Button"
            base_type = "Text"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidIdentifier { ref context, .. } if context == "instance"));
    }

    #[test]
    fn test_document_order_is_kept() {
        let project = lower_str(
            r#"
            [project]
            name = "demo"

            [[screens.Zeta.categories.ButtonState.Enabled]]
            name = "Visible"
            value = true

            [[screens.Zeta.categories.ButtonState.Disabled]]
            name = "Visible"
            value = false

            [screens.Alpha]
            "#,
        )
        .unwrap();

        let screens: Vec<&str> = project.screens().map(|e| e.name.as_str()).collect();
        assert_eq!(screens, ["Zeta", "Alpha"]);

        let category = project.element("Zeta").unwrap().category("ButtonState").unwrap();
        let states: Vec<&str> = category.states.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(states, ["Enabled", "Disabled"]);
    }

    #[test]
    fn test_element_names_must_be_identifier_paths() {
        for name in ["../escaped", "/abs", "Controls//Button", "My Screen", "Controls/."] {
            let err = lower_str(&format!(
                "[project]\nname = \"demo\"\n\n[screens.\"{}\"]\n",
                name
            ))
            .unwrap_err();
            assert!(
                matches!(*err, Error::InvalidIdentifier { ref context, .. } if context == "element"),
                "{name} should be rejected"
            );
        }

        let project = lower_str(
            "[project]\nname = \"demo\"\n\n[components.\"Controls/Button\"]\n",
        )
        .unwrap();
        assert!(project.contains("Controls/Button"));
    }
}
