//! Per-variable line emission.

use trellis_core::{format_float, quote_string};
use trellis_ir::{
    Element, EnumValue, GeneralUnit, StandardKind, State, StateCategory, Variable, VariableValue,
};

use crate::{
    Error, GeneratorSettings, Result,
    builder::CodeBuilder,
    resolve::{Resolver, Scope},
    target::TargetProfile,
};

/// Everything a profile needs to translate the variables of one scope.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub resolver: Resolver<'a>,
    pub settings: &'a GeneratorSettings,
    pub scope: Scope<'a>,
    /// State the variables come from; lookups start here.
    pub state: &'a State,
    /// Element whose chain describes the scope: the instance's base, or the container.
    pub origin: Option<&'a Element>,
    pub root_kind: Option<StandardKind>,
}

impl<'a> Context<'a> {
    pub fn new(
        resolver: Resolver<'a>,
        settings: &'a GeneratorSettings,
        scope: Scope<'a>,
        state: &'a State,
    ) -> Result<Self> {
        let origin = match scope.instance {
            Some(instance) => resolver.instance_base(instance),
            None => Some(scope.container),
        };
        let root_kind = match origin {
            Some(origin) => resolver.root_kind(origin)?,
            None => None,
        };

        Ok(Self {
            resolver,
            settings,
            scope,
            state,
            origin,
            root_kind,
        })
    }

    pub fn resolve(&self, root_name: &str) -> Result<Option<&'a VariableValue>> {
        self.resolver.resolve(self.scope, self.state, root_name)
    }

    pub fn resolve_float(&self, root_name: &str) -> Result<Option<f32>> {
        self.resolver
            .resolve_float(self.scope, self.state, root_name)
    }

    pub fn resolve_enum<T>(
        &self,
        root_name: &str,
        expected: &'static str,
        extract: impl FnOnce(EnumValue) -> Option<T>,
    ) -> Result<Option<T>> {
        self.resolver
            .resolve_as(self.scope, self.state, root_name, expected, |value| {
                value.as_enum().and_then(extract)
            })
    }

    /// The category a state-typed variable selects from, with its owner.
    pub fn state_category(
        &self,
        variable: &Variable,
    ) -> Result<Option<(&'a Element, &'a StateCategory)>> {
        let Some(category) = variable.type_name.strip_suffix("State") else {
            return Ok(None);
        };
        match self.origin {
            Some(origin) => self.resolver.find_category(origin, category),
            None => Ok(None),
        }
    }
}

/// One emitted line for a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A complete statement replacing the generic assignment.
    Statement(String),
    /// A suppressed variable: one empty line.
    Blank,
    /// `target.property = value;`
    Generic {
        target: String,
        property: String,
        value: String,
    },
}

impl Line {
    /// The line's text, or `None` for a blank line.
    pub fn render(&self) -> Option<String> {
        match self {
            Line::Statement(statement) => Some(statement.clone()),
            Line::Blank => None,
            Line::Generic {
                target,
                property,
                value,
            } => Some(format!("{}.{} = {};", target, property, value)),
        }
    }

    pub fn write_to(&self, out: &mut CodeBuilder) {
        match self.render() {
            Some(line) => out.push_line(&line),
            None => out.push_blank(),
        };
    }
}

/// Decide how a single variable is written for the profile's target.
pub fn emit(ctx: &Context<'_>, profile: &dyn TargetProfile, variable: &Variable) -> Result<Line> {
    check_blend(ctx, variable)?;

    if let Some(line) = profile.full_line(ctx, variable)? {
        return Ok(line);
    }

    let Some(value) = &variable.value else {
        return Ok(Line::Blank);
    };

    Ok(Line::Generic {
        target: ctx.scope.target().to_string(),
        property: profile.property_name(variable.root_name()),
        value: profile.value(ctx, variable, value)?,
    })
}

/// Emit every variable, each followed by the profile's suffix line if any.
pub(crate) fn emit_all(
    ctx: &Context<'_>,
    profile: &dyn TargetProfile,
    variables: &[&Variable],
    out: &mut CodeBuilder,
) -> Result<()> {
    for variable in variables {
        emit(ctx, profile, variable)?.write_to(out);
        if let Some(suffix) = profile.suffix_line(ctx, variable) {
            out.push_line(&suffix);
        }
    }
    Ok(())
}

/// Literal formatting shared by every target.
pub fn format_value(
    ctx: &Context<'_>,
    profile: &dyn TargetProfile,
    variable: &Variable,
    value: &VariableValue,
) -> Result<String> {
    let code = match value {
        VariableValue::Float(f) => format_float(*f),
        VariableValue::String(s) if variable.root_name() == "Parent" => s.clone(),
        VariableValue::String(s) => match ctx.state_category(variable)? {
            Some((owner, category)) => format!(
                "{}.{}.{}",
                profile.class_name(&owner.name),
                category.name,
                s
            ),
            None => quote_string(s),
        },
        VariableValue::Bool(b) => b.to_string(),
        VariableValue::Enum(EnumValue::PositionUnit(unit)) => {
            format!("{}.{}", GeneralUnit::TYPE_NAME, unit.to_general().as_str())
        }
        VariableValue::Enum(e) => format!("{}.{}", e.type_name(), e.member()),
    };
    Ok(code)
}

/// The `Parent` value of an instance-scoped variable.
pub(crate) fn parent_name<'v>(ctx: &Context<'_>, variable: &'v Variable) -> Result<&'v str> {
    variable
        .value
        .as_ref()
        .and_then(VariableValue::as_str)
        .ok_or_else(|| Error::TypeMismatch {
            variable: ctx.scope.scoped_name(variable.root_name()),
            expected: "an instance name",
        })
}

/// True for a `Parent` variable that names a parent instance.
pub(crate) fn is_parent_assignment(variable: &Variable) -> bool {
    variable.root_name() == "Parent"
        && variable
            .value
            .as_ref()
            .and_then(VariableValue::as_str)
            .is_some_and(|parent| !parent.is_empty())
}

fn check_blend(ctx: &Context<'_>, variable: &Variable) -> Result<()> {
    if variable.root_name() != "Blend" || !ctx.root_kind.is_some_and(|k| k.is_textured()) {
        return Ok(());
    }
    if let Some(VariableValue::Enum(EnumValue::Blend(blend))) = &variable.value
        && !blend.is_supported()
    {
        return Err(Error::UnsupportedBlend {
            scope: ctx
                .scope
                .name()
                .unwrap_or(&ctx.scope.container.name)
                .to_string(),
            blend: blend.as_str().to_string(),
        });
    }
    Ok(())
}
