//! Elements and their instances.

use crate::{State, StateCategory, Variable};

/// Name of every element's default state.
pub const DEFAULT_STATE_NAME: &str = "Default";

/// What kind of definition an element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A top-level screen.
    Screen,
    /// A reusable, derivable component.
    Component,
    /// A primitive visual kind provided by the runtime.
    Standard,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Screen => "screen",
            ElementKind::Component => "component",
            ElementKind::Standard => "standard",
        }
    }
}

/// A named child slot inside an element.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub name: String,
    /// Standard kind (`Text`) or element name (`Controls/Button`).
    pub base_type: String,
    /// Whether the instance is inherited from a base element.
    pub defined_by_base: bool,
}

impl Instance {
    pub fn new(name: impl Into<String>, base_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_type: base_type.into(),
            defined_by_base: false,
        }
    }

    /// Mark this instance as inherited from the base element.
    pub fn inherited(mut self) -> Self {
        self.defined_by_base = true;
        self
    }
}

/// A UI type definition: a screen, a component, or a standard element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub kind: ElementKind,
    /// Base element name; `None` when the element derives from nothing.
    pub base_type: Option<String>,
    pub default_state: State,
    pub categories: Vec<StateCategory>,
    pub instances: Vec<Instance>,
}

impl Element {
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            kind,
            base_type: None,
            default_state: State::new(DEFAULT_STATE_NAME),
            categories: Vec::new(),
            instances: Vec::new(),
        }
    }

    pub fn screen(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::Screen)
    }

    pub fn component(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::Component)
    }

    /// Set the base type. Empty strings mean "no base".
    pub fn with_base(mut self, base_type: impl Into<String>) -> Self {
        let base_type = base_type.into();
        self.base_type = (!base_type.is_empty()).then_some(base_type);
        self
    }

    pub fn with_instance(mut self, instance: Instance) -> Self {
        self.instances.push(instance);
        self
    }

    /// Add a variable to the default state.
    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.default_state.variables.push(variable);
        self
    }

    pub fn with_category(mut self, category: StateCategory) -> Self {
        self.categories.push(category);
        self
    }

    pub fn is_screen(&self) -> bool {
        self.kind == ElementKind::Screen
    }

    /// The base type, if set and non-empty.
    pub fn base_type(&self) -> Option<&str> {
        self.base_type.as_deref().filter(|b| !b.is_empty())
    }

    pub fn instance(&self, name: &str) -> Option<&Instance> {
        self.instances.iter().find(|i| i.name == name)
    }

    pub fn category(&self, name: &str) -> Option<&StateCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Instances declared by this element (not inherited).
    pub fn declared_instances(&self) -> impl Iterator<Item = &Instance> {
        self.instances.iter().filter(|i| !i.defined_by_base)
    }

    /// Find a state by name: the default state, or any categorized state.
    pub fn state(&self, name: &str) -> Option<&State> {
        if self.default_state.name == name {
            return Some(&self.default_state);
        }
        self.categories.iter().find_map(|c| c.state(name))
    }
}
