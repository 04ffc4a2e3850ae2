//! Variables, states and state categories.

use crate::VariableValue;

/// A named, typed property override.
///
/// `name` is either a bare property name (`Width`), scoped to the element
/// itself, or a compound path (`PlayButton.Width`) scoped to an instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Full variable name, possibly instance-qualified.
    pub name: String,
    /// Declared type (`float`, `string`, `DimensionUnitType`, `ButtonStateState`, ...).
    pub type_name: String,
    /// The value, if any.
    pub value: Option<VariableValue>,
    /// Whether this variable is an explicit override rather than an inert entry.
    pub sets_value: bool,
    /// Name of the public passthrough property this variable is exposed as.
    pub exposed_as: Option<String>,
}

impl Variable {
    /// Create a variable that sets `value`, typed after the value's kind.
    pub fn new(name: impl Into<String>, value: impl Into<VariableValue>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            type_name: value.type_name().to_string(),
            value: Some(value),
            sets_value: true,
            exposed_as: None,
        }
    }

    /// Override the declared type.
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// Expose this variable as a public property.
    pub fn exposed_as(mut self, name: impl Into<String>) -> Self {
        self.exposed_as = Some(name.into());
        self
    }

    /// Mark this variable as present but not overriding anything.
    pub fn inert(mut self) -> Self {
        self.sets_value = false;
        self
    }

    /// Owning instance name, or `None` for element-scoped variables.
    pub fn source_object(&self) -> Option<&str> {
        self.name.split_once('.').map(|(source, _)| source)
    }

    /// Property name without the instance qualifier.
    pub fn root_name(&self) -> &str {
        self.name
            .split_once('.')
            .map_or(self.name.as_str(), |(_, root)| root)
    }

    /// True when this variable carries an explicit value.
    pub fn is_set(&self) -> bool {
        self.sets_value && self.value.is_some()
    }
}

/// A named bundle of variables describing one visual configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub name: String,
    pub variables: Vec<Variable>,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
        }
    }

    /// Add a variable (builder style).
    pub fn with(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    /// Find a variable by its full name.
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Variables scoped to the given instance (`None` for the element itself).
    pub fn scoped<'a>(&'a self, scope: Option<&'a str>) -> impl Iterator<Item = &'a Variable> {
        self.variables
            .iter()
            .filter(move |v| v.source_object() == scope)
    }
}

/// A mutually exclusive group of states.
#[derive(Debug, Clone, PartialEq)]
pub struct StateCategory {
    pub name: String,
    pub states: Vec<State>,
}

impl StateCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: Vec::new(),
        }
    }

    pub fn with_state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|s| s.name == name)
    }

    /// Declared type of variables that select a state in this category.
    pub fn state_type_name(&self) -> String {
        format!("{}State", self.name)
    }
}
