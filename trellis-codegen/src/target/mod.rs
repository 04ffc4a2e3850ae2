//! Target presentation APIs and their profiles.
//!
//! Every difference between the two targets lives behind [`TargetProfile`];
//! the generator itself never branches on [`VisualApi`].

mod forms;
mod native;

use std::fmt;

pub use forms::FormsProfile;
pub use native::NativeProfile;
use trellis_ir::{Element, Instance, Variable, VariableValue};

use crate::{
    Result,
    builder::CodeBuilder,
    emit::{Context, Line},
};

/// The presentation API generated code targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualApi {
    /// The tool's own retained-mode runtime.
    #[default]
    Native,
    /// The forms toolkit hosted in an absolute layout.
    Forms,
}

impl VisualApi {
    /// Target selected by a resolved `IsFormsControl` flag.
    pub fn from_forms_flag(is_forms: bool) -> Self {
        if is_forms { Self::Forms } else { Self::Native }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Forms => "forms",
        }
    }
}

impl fmt::Display for VisualApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The profile implementing `api`.
pub fn profile(api: VisualApi) -> &'static dyn TargetProfile {
    match api {
        VisualApi::Native => &NativeProfile,
        VisualApi::Forms => &FormsProfile,
    }
}

/// Everything that differs between target APIs.
pub trait TargetProfile: Send + Sync {
    fn api(&self) -> VisualApi;

    /// Class generated code uses for an element or standard type.
    fn class_name(&self, type_name: &str) -> String;

    /// Destination property for a variable's root name.
    fn property_name(&self, root_name: &str) -> String;

    /// Code literal for a variable's value.
    fn value(&self, ctx: &Context<'_>, variable: &Variable, value: &VariableValue)
    -> Result<String>;

    /// A statement (or blank) replacing the generic assignment, if any.
    fn full_line(&self, ctx: &Context<'_>, variable: &Variable) -> Result<Option<Line>>;

    /// Statements for property clusters, removing what they consume from `variables`.
    fn group<'v>(
        &self,
        _ctx: &Context<'_>,
        _variables: &mut Vec<&'v Variable>,
    ) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    /// Extra line after a variable's assignment.
    fn suffix_line(&self, _ctx: &Context<'_>, _variable: &Variable) -> Option<String> {
        None
    }

    /// Line identifying an instance at runtime.
    fn name_line(&self, instance: &Instance) -> Option<String>;

    /// Lines attaching an instance that has no explicit `Parent`.
    fn default_parent_lines(&self, instance: &Instance) -> Vec<String>;

    /// Fields declared after the instance properties.
    fn extra_fields(&self, _element: &Element) -> Vec<String> {
        Vec::new()
    }

    /// Open the constructor.
    fn constructor_preamble(&self, element: &Element, out: &mut CodeBuilder);

    /// Finish the constructor body; the caller closes the constructor itself.
    fn constructor_postamble(&self, out: &mut CodeBuilder);
}
