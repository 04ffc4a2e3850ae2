//! Variable values.

use crate::{Blend, DimensionUnit, HorizontalAlignment, ParseEnumError, PositionUnit, VerticalAlignment};

/// An enumerated variable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumValue {
    PositionUnit(PositionUnit),
    DimensionUnit(DimensionUnit),
    HorizontalAlignment(HorizontalAlignment),
    VerticalAlignment(VerticalAlignment),
    Blend(Blend),
}

impl EnumValue {
    /// Type name the generated code refers to this enumeration by.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::PositionUnit(_) => PositionUnit::TYPE_NAME,
            Self::DimensionUnit(_) => DimensionUnit::TYPE_NAME,
            Self::HorizontalAlignment(_) => HorizontalAlignment::TYPE_NAME,
            Self::VerticalAlignment(_) => VerticalAlignment::TYPE_NAME,
            Self::Blend(_) => Blend::TYPE_NAME,
        }
    }

    /// Member name (e.g. `Percentage`).
    pub fn member(&self) -> &'static str {
        match self {
            Self::PositionUnit(v) => v.as_str(),
            Self::DimensionUnit(v) => v.as_str(),
            Self::HorizontalAlignment(v) => v.as_str(),
            Self::VerticalAlignment(v) => v.as_str(),
            Self::Blend(v) => v.as_str(),
        }
    }

    /// Parse `member` as a value of the enumeration called `type_name`.
    ///
    /// Returns `Ok(None)` when `type_name` is not an enumeration at all.
    pub fn parse(type_name: &str, member: &str) -> Result<Option<Self>, ParseEnumError> {
        let value = match type_name {
            PositionUnit::TYPE_NAME => Self::PositionUnit(member.parse()?),
            DimensionUnit::TYPE_NAME => Self::DimensionUnit(member.parse()?),
            HorizontalAlignment::TYPE_NAME => Self::HorizontalAlignment(member.parse()?),
            VerticalAlignment::TYPE_NAME => Self::VerticalAlignment(member.parse()?),
            Blend::TYPE_NAME => Self::Blend(member.parse()?),
            _ => return Ok(None),
        };
        Ok(Some(value))
    }
}

/// The value of a variable.
#[derive(Debug, Clone, PartialEq)]
pub enum VariableValue {
    Float(f32),
    String(String),
    Bool(bool),
    Enum(EnumValue),
}

impl VariableValue {
    /// Declared type name implied by the value's kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Bool(_) => "bool",
            Self::Enum(e) => e.type_name(),
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<EnumValue> {
        match self {
            Self::Enum(e) => Some(*e),
            _ => None,
        }
    }
}

/// Enumeration type implied by a well-known property name.
///
/// Used when a project document gives a string value without declaring the
/// variable's type.
pub fn implied_enum_type(root_name: &str) -> Option<&'static str> {
    match root_name {
        "X Units" | "Y Units" => Some(PositionUnit::TYPE_NAME),
        "Width Units" | "Height Units" => Some(DimensionUnit::TYPE_NAME),
        "X Origin" | "HorizontalAlignment" => Some(HorizontalAlignment::TYPE_NAME),
        "Y Origin" | "VerticalAlignment" => Some(VerticalAlignment::TYPE_NAME),
        "Blend" => Some(Blend::TYPE_NAME),
        _ => None,
    }
}

impl From<f32> for VariableValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for VariableValue {
    fn from(value: f64) -> Self {
        Self::Float(value as f32)
    }
}

impl From<i32> for VariableValue {
    fn from(value: i32) -> Self {
        Self::Float(value as f32)
    }
}

impl From<bool> for VariableValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for VariableValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<EnumValue> for VariableValue {
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}

impl From<PositionUnit> for VariableValue {
    fn from(value: PositionUnit) -> Self {
        Self::Enum(EnumValue::PositionUnit(value))
    }
}

impl From<DimensionUnit> for VariableValue {
    fn from(value: DimensionUnit) -> Self {
        Self::Enum(EnumValue::DimensionUnit(value))
    }
}

impl From<HorizontalAlignment> for VariableValue {
    fn from(value: HorizontalAlignment) -> Self {
        Self::Enum(EnumValue::HorizontalAlignment(value))
    }
}

impl From<VerticalAlignment> for VariableValue {
    fn from(value: VerticalAlignment) -> Self {
        Self::Enum(EnumValue::VerticalAlignment(value))
    }
}

impl From<Blend> for VariableValue {
    fn from(value: Blend) -> Self {
        Self::Enum(EnumValue::Blend(value))
    }
}
