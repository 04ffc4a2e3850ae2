//! Project lints.
//!
//! The generator tolerates dangling references by leaving code out. Lints
//! report those omissions, plus the inputs that make generation fail,
//! without generating anything.

mod diagnostic;
pub mod lints;

pub use diagnostic::{Diagnostic, Severity};
pub use lints::{
    BaseTypeCycleLint, MissingBaseTypeLint, OrphanVariableLint, UnknownParentLint,
    UnsupportedBlendLint,
};
use trellis_ir::{Element, Project, State};

/// A check over the whole project.
pub trait Lint: Send + Sync {
    /// The name of this lint, in kebab case.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the project and add any diagnostics.
    fn check(&self, project: &Project, diagnostics: &mut Vec<Diagnostic>);
}

/// Runs a set of lints over a project.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    /// Create a linter with every built-in lint.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(MissingBaseTypeLint),
                Box::new(BaseTypeCycleLint),
                Box::new(OrphanVariableLint),
                Box::new(UnknownParentLint),
                Box::new(UnsupportedBlendLint),
            ],
        }
    }

    /// Create a linter with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Registered lints, in registration order.
    pub fn lints(&self) -> impl Iterator<Item = &dyn Lint> {
        self.lints.iter().map(|l| l.as_ref())
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints().map(|l| l.name()).collect()
    }

    /// Run every lint, in registration order.
    pub fn run(&self, project: &Project) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(project, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

/// The default state followed by every category state.
pub(crate) fn states(element: &Element) -> impl Iterator<Item = &State> {
    std::iter::once(&element.default_state)
        .chain(element.categories.iter().flat_map(|c| c.states.iter()))
}

/// `Element` or `Element.Instance` for a variable's scope.
pub(crate) fn scope_location(element: &Element, source: Option<&str>) -> String {
    match source {
        Some(instance) => format!("{}.{}", element.name, instance),
        None => element.name.clone(),
    }
}
