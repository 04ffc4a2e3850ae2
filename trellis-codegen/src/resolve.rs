//! Effective-value lookup across state overrides and base-type chains.

use std::collections::HashSet;

use tracing::debug;
use trellis_ir::{
    Element, ElementKind, Instance, Project, StandardKind, State, StateCategory, VariableValue,
};

use crate::{Error, Result};

/// Deepest base-type chain walked before giving up.
pub const MAX_BASE_DEPTH: usize = 64;

/// Whose properties a lookup is about: the container itself or one of its instances.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    pub container: &'a Element,
    pub instance: Option<&'a Instance>,
}

impl<'a> Scope<'a> {
    pub fn container(container: &'a Element) -> Self {
        Self {
            container,
            instance: None,
        }
    }

    pub fn instance(container: &'a Element, instance: &'a Instance) -> Self {
        Self {
            container,
            instance: Some(instance),
        }
    }

    /// Instance name, or `None` for the container.
    pub fn name(&self) -> Option<&'a str> {
        self.instance.map(|i| i.name.as_str())
    }

    /// Expression naming the scope in emitted code.
    pub fn target(&self) -> &'a str {
        self.name().unwrap_or("this")
    }

    /// Full variable name for a property of this scope.
    pub fn scoped_name(&self, root_name: &str) -> String {
        match self.name() {
            Some(instance) => format!("{}.{}", instance, root_name),
            None => root_name.to_string(),
        }
    }
}

/// Read-only lookups over a [`Project`].
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    project: &'a Project,
}

impl<'a> Resolver<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &'a Project {
        self.project
    }

    /// `element` followed by its base elements, nearest first.
    ///
    /// Stops quietly at a base type that is not in the project.
    pub fn chain(&self, element: &'a Element) -> Result<Vec<&'a Element>> {
        let mut chain = vec![element];
        let mut seen = HashSet::from([element.name.as_str()]);
        let mut current = element;

        while let Some(base_name) = current.base_type() {
            let Some(base) = self.project.element(base_name) else {
                debug!(element = %current.name, base = base_name, "base type not found");
                break;
            };
            if !seen.insert(base.name.as_str()) {
                let mut names: Vec<String> = chain.iter().map(|e| e.name.clone()).collect();
                names.push(base.name.clone());
                return Err(Error::BaseTypeCycle { chain: names });
            }
            if chain.len() >= MAX_BASE_DEPTH {
                return Err(Error::BaseChainTooDeep {
                    element: element.name.clone(),
                });
            }
            chain.push(base);
            current = base;
        }

        Ok(chain)
    }

    /// Element describing an instance's properties.
    pub fn instance_base(&self, instance: &Instance) -> Option<&'a Element> {
        self.project.element(&instance.base_type)
    }

    /// Element whose chain backs the scope's bare property names.
    pub fn scope_base(&self, scope: Scope<'a>) -> Option<&'a Element> {
        match scope.instance {
            Some(instance) => self.instance_base(instance),
            None => self.project.base_of(scope.container),
        }
    }

    /// Whether `root_name` is a property anywhere in `base`'s chain.
    ///
    /// `{Category}State` counts as a property of the category's owner.
    pub fn defines(&self, base: &'a Element, root_name: &str) -> Result<bool> {
        let category = root_name.strip_suffix("State");
        Ok(self.chain(base)?.iter().any(|e| {
            e.default_state.variable(root_name).is_some()
                || category.is_some_and(|c| e.category(c).is_some())
        }))
    }

    /// First explicit default for `root_name` in `base`'s chain.
    pub fn default_value(
        &self,
        base: &'a Element,
        root_name: &str,
    ) -> Result<Option<&'a VariableValue>> {
        Ok(self
            .chain(base)?
            .into_iter()
            .find_map(|e| set_value(&e.default_state, root_name)))
    }

    /// Effective value of a property for `scope` in `state`.
    ///
    /// Checks the state, then the container's default state, then (for
    /// instances) the container's bases, then the scope's own base chain.
    pub fn resolve(
        &self,
        scope: Scope<'a>,
        state: &'a State,
        root_name: &str,
    ) -> Result<Option<&'a VariableValue>> {
        let name = scope.scoped_name(root_name);

        if let Some(value) = set_value(state, &name) {
            return Ok(Some(value));
        }

        let default_state = &scope.container.default_state;
        if !std::ptr::eq(state, default_state)
            && let Some(value) = set_value(default_state, &name)
        {
            return Ok(Some(value));
        }

        if scope.instance.is_some() {
            let inherited = self
                .chain(scope.container)?
                .into_iter()
                .skip(1)
                .find_map(|e| set_value(&e.default_state, &name));
            if inherited.is_some() {
                return Ok(inherited);
            }
        }

        match self.scope_base(scope) {
            Some(base) => self.default_value(base, root_name),
            None => Ok(None),
        }
    }

    /// [`Resolver::resolve`] narrowed to one value kind.
    pub fn resolve_as<T>(
        &self,
        scope: Scope<'a>,
        state: &'a State,
        root_name: &str,
        expected: &'static str,
        extract: impl FnOnce(&VariableValue) -> Option<T>,
    ) -> Result<Option<T>> {
        match self.resolve(scope, state, root_name)? {
            None => Ok(None),
            Some(value) => extract(value).map(Some).ok_or_else(|| Error::TypeMismatch {
                variable: scope.scoped_name(root_name),
                expected,
            }),
        }
    }

    pub fn resolve_float(
        &self,
        scope: Scope<'a>,
        state: &'a State,
        root_name: &str,
    ) -> Result<Option<f32>> {
        self.resolve_as(scope, state, root_name, "a float", VariableValue::as_float)
    }

    /// The state category named `name` in `element`'s chain, with its owner.
    pub fn find_category(
        &self,
        element: &'a Element,
        name: &str,
    ) -> Result<Option<(&'a Element, &'a StateCategory)>> {
        Ok(self
            .chain(element)?
            .into_iter()
            .find_map(|e| e.category(name).map(|c| (e, c))))
    }

    /// The standard kind at the root of `element`'s chain.
    pub fn root_kind(&self, element: &'a Element) -> Result<Option<StandardKind>> {
        Ok(self
            .chain(element)?
            .into_iter()
            .find(|e| e.kind == ElementKind::Standard)
            .and_then(|e| StandardKind::from_name(&e.name)))
    }
}

fn set_value<'s>(state: &'s State, name: &str) -> Option<&'s VariableValue> {
    state
        .variable(name)
        .filter(|v| v.is_set())
        .and_then(|v| v.value.as_ref())
}
