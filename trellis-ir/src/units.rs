//! Unit, alignment and blend enumerations carried by variable values.
//!
//! Every enumeration knows the type name the generated code refers to it by
//! (e.g. `DimensionUnitType`) and the member names it accepts when parsed
//! from a project document.

use std::{fmt, str::FromStr};

/// Error returned when a string does not name a member of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    /// Type name of the enumeration (e.g. `PositionUnitType`).
    pub type_name: &'static str,
    /// The rejected input.
    pub value: String,
    /// Accepted member names.
    pub expected: &'static [&'static str],
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a {} (expected one of: {})",
            self.value,
            self.type_name,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for ParseEnumError {}

/// How an X or Y value is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PositionUnit {
    #[default]
    PixelsFromLeft,
    PixelsFromTop,
    PixelsFromRight,
    PixelsFromBottom,
    PixelsFromCenterX,
    PixelsFromCenterY,
    PixelsFromCenterYInverted,
    PixelsFromBaseline,
    PercentageWidth,
    PercentageHeight,
}

impl PositionUnit {
    pub const TYPE_NAME: &'static str = "PositionUnitType";

    const NAMES: &'static [&'static str] = &[
        "PixelsFromLeft",
        "PixelsFromTop",
        "PixelsFromRight",
        "PixelsFromBottom",
        "PixelsFromCenterX",
        "PixelsFromCenterY",
        "PixelsFromCenterYInverted",
        "PixelsFromBaseline",
        "PercentageWidth",
        "PercentageHeight",
    ];

    const ALL: &'static [Self] = &[
        Self::PixelsFromLeft,
        Self::PixelsFromTop,
        Self::PixelsFromRight,
        Self::PixelsFromBottom,
        Self::PixelsFromCenterX,
        Self::PixelsFromCenterY,
        Self::PixelsFromCenterYInverted,
        Self::PixelsFromBaseline,
        Self::PercentageWidth,
        Self::PercentageHeight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PixelsFromLeft => "PixelsFromLeft",
            Self::PixelsFromTop => "PixelsFromTop",
            Self::PixelsFromRight => "PixelsFromRight",
            Self::PixelsFromBottom => "PixelsFromBottom",
            Self::PixelsFromCenterX => "PixelsFromCenterX",
            Self::PixelsFromCenterY => "PixelsFromCenterY",
            Self::PixelsFromCenterYInverted => "PixelsFromCenterYInverted",
            Self::PixelsFromBaseline => "PixelsFromBaseline",
            Self::PercentageWidth => "PercentageWidth",
            Self::PercentageHeight => "PercentageHeight",
        }
    }

    /// Collapse the axis-specific unit into the axis-agnostic runtime unit.
    pub fn to_general(self) -> GeneralUnit {
        match self {
            Self::PixelsFromLeft | Self::PixelsFromTop => GeneralUnit::PixelsFromSmall,
            Self::PixelsFromRight | Self::PixelsFromBottom => GeneralUnit::PixelsFromLarge,
            Self::PixelsFromCenterX | Self::PixelsFromCenterY => GeneralUnit::PixelsFromMiddle,
            Self::PixelsFromCenterYInverted => GeneralUnit::PixelsFromMiddleInverted,
            Self::PixelsFromBaseline => GeneralUnit::PixelsFromBaseline,
            Self::PercentageWidth | Self::PercentageHeight => GeneralUnit::Percentage,
        }
    }
}

/// Axis-agnostic position unit used by the native runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralUnit {
    PixelsFromSmall,
    PixelsFromLarge,
    PixelsFromMiddle,
    PixelsFromMiddleInverted,
    PixelsFromBaseline,
    Percentage,
}

impl GeneralUnit {
    pub const TYPE_NAME: &'static str = "GeneralUnitType";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PixelsFromSmall => "PixelsFromSmall",
            Self::PixelsFromLarge => "PixelsFromLarge",
            Self::PixelsFromMiddle => "PixelsFromMiddle",
            Self::PixelsFromMiddleInverted => "PixelsFromMiddleInverted",
            Self::PixelsFromBaseline => "PixelsFromBaseline",
            Self::Percentage => "Percentage",
        }
    }
}

/// How a Width or Height value is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DimensionUnit {
    #[default]
    Absolute,
    Percentage,
    RelativeToContainer,
    RelativeToChildren,
    PercentageOfSourceFile,
}

impl DimensionUnit {
    pub const TYPE_NAME: &'static str = "DimensionUnitType";

    const NAMES: &'static [&'static str] = &[
        "Absolute",
        "Percentage",
        "RelativeToContainer",
        "RelativeToChildren",
        "PercentageOfSourceFile",
    ];

    const ALL: &'static [Self] = &[
        Self::Absolute,
        Self::Percentage,
        Self::RelativeToContainer,
        Self::RelativeToChildren,
        Self::PercentageOfSourceFile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Absolute => "Absolute",
            Self::Percentage => "Percentage",
            Self::RelativeToContainer => "RelativeToContainer",
            Self::RelativeToChildren => "RelativeToChildren",
            Self::PercentageOfSourceFile => "PercentageOfSourceFile",
        }
    }
}

/// Horizontal origin of an element, also used for text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlignment {
    pub const TYPE_NAME: &'static str = "HorizontalAlignment";

    const NAMES: &'static [&'static str] = &["Left", "Center", "Right"];

    const ALL: &'static [Self] = &[Self::Left, Self::Center, Self::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Center => "Center",
            Self::Right => "Right",
        }
    }
}

/// Vertical origin of an element, also used for text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

impl VerticalAlignment {
    pub const TYPE_NAME: &'static str = "VerticalAlignment";

    const NAMES: &'static [&'static str] = &["Top", "Center", "Bottom"];

    const ALL: &'static [Self] = &[Self::Top, Self::Center, Self::Bottom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Center => "Center",
            Self::Bottom => "Bottom",
        }
    }
}

/// Compositing mode of sprites and nine-slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Blend {
    #[default]
    Normal,
    Additive,
    Replace,
    SubtractAlpha,
    ReplaceAlpha,
    MinAlpha,
}

impl Blend {
    pub const TYPE_NAME: &'static str = "Blend";

    const NAMES: &'static [&'static str] = &[
        "Normal",
        "Additive",
        "Replace",
        "SubtractAlpha",
        "ReplaceAlpha",
        "MinAlpha",
    ];

    const ALL: &'static [Self] = &[
        Self::Normal,
        Self::Additive,
        Self::Replace,
        Self::SubtractAlpha,
        Self::ReplaceAlpha,
        Self::MinAlpha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Additive => "Additive",
            Self::Replace => "Replace",
            Self::SubtractAlpha => "SubtractAlpha",
            Self::ReplaceAlpha => "ReplaceAlpha",
            Self::MinAlpha => "MinAlpha",
        }
    }

    /// Whether sprite and nine-slice initialization knows how to apply this mode.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Normal | Self::Additive)
    }
}

fn parse_member<T: Copy>(
    s: &str,
    type_name: &'static str,
    names: &'static [&'static str],
    all: &'static [T],
) -> Result<T, ParseEnumError> {
    names
        .iter()
        .position(|name| *name == s)
        .map(|i| all[i])
        .ok_or_else(|| ParseEnumError {
            type_name,
            value: s.to_string(),
            expected: names,
        })
}

impl FromStr for PositionUnit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_member(s, Self::TYPE_NAME, Self::NAMES, Self::ALL)
    }
}

impl FromStr for DimensionUnit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_member(s, Self::TYPE_NAME, Self::NAMES, Self::ALL)
    }
}

impl FromStr for HorizontalAlignment {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_member(s, Self::TYPE_NAME, Self::NAMES, Self::ALL)
    }
}

impl FromStr for VerticalAlignment {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_member(s, Self::TYPE_NAME, Self::NAMES, Self::ALL)
    }
}

impl FromStr for Blend {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_member(s, Self::TYPE_NAME, Self::NAMES, Self::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_members_line_up() {
        for unit in PositionUnit::ALL {
            assert_eq!(unit.as_str().parse::<PositionUnit>(), Ok(*unit));
        }
        for unit in DimensionUnit::ALL {
            assert_eq!(unit.as_str().parse::<DimensionUnit>(), Ok(*unit));
        }
        for blend in Blend::ALL {
            assert_eq!(blend.as_str().parse::<Blend>(), Ok(*blend));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_member() {
        let err = "Sideways".parse::<HorizontalAlignment>().unwrap_err();
        assert_eq!(err.type_name, "HorizontalAlignment");
        assert!(err.to_string().contains("Left, Center, Right"));
    }

    #[test]
    fn test_to_general() {
        assert_eq!(
            PositionUnit::PixelsFromLeft.to_general(),
            GeneralUnit::PixelsFromSmall
        );
        assert_eq!(
            PositionUnit::PixelsFromBottom.to_general(),
            GeneralUnit::PixelsFromLarge
        );
        assert_eq!(
            PositionUnit::PixelsFromCenterY.to_general(),
            GeneralUnit::PixelsFromMiddle
        );
        assert_eq!(
            PositionUnit::PercentageWidth.to_general(),
            GeneralUnit::Percentage
        );
    }

    #[test]
    fn test_blend_support() {
        assert!(Blend::Normal.is_supported());
        assert!(Blend::Additive.is_supported());
        assert!(!Blend::SubtractAlpha.is_supported());
    }
}
