//! Built-in standard elements.
//!
//! Standard elements are the primitive visual kinds every project can place.
//! Their default states define which properties exist on each kind, which is
//! what lets the generator recognize variables left behind by a type change.

use crate::{
    Blend, DimensionUnit, Element, ElementKind, HorizontalAlignment, PositionUnit, Variable,
    VerticalAlignment,
};

/// The primitive visual kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardKind {
    Container,
    Text,
    Sprite,
    NineSlice,
    ColoredRectangle,
}

impl StandardKind {
    pub const ALL: &'static [StandardKind] = &[
        StandardKind::Container,
        StandardKind::Text,
        StandardKind::Sprite,
        StandardKind::NineSlice,
        StandardKind::ColoredRectangle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StandardKind::Container => "Container",
            StandardKind::Text => "Text",
            StandardKind::Sprite => "Sprite",
            StandardKind::NineSlice => "NineSlice",
            StandardKind::ColoredRectangle => "ColoredRectangle",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    pub fn is_text_like(&self) -> bool {
        matches!(self, StandardKind::Text)
    }

    /// Kinds whose initialization applies a blend mode.
    pub fn is_textured(&self) -> bool {
        matches!(self, StandardKind::Sprite | StandardKind::NineSlice)
    }

    /// Build the standard element for this kind.
    pub fn element(&self) -> Element {
        let mut element = Element::new(self.name(), ElementKind::Standard);
        element.default_state.variables = common_variables(*self);

        let extra: Vec<Variable> = match self {
            StandardKind::Container => vec![Variable::new("ClipsChildren", false)],
            StandardKind::Text => {
                let mut vars = vec![
                    Variable::new("Text", "Hello"),
                    Variable::new("Font", "Arial"),
                    Variable::new("Font Size", 18),
                    Variable::new("HorizontalAlignment", HorizontalAlignment::Left),
                    Variable::new("VerticalAlignment", VerticalAlignment::Top),
                ];
                vars.extend(color_variables());
                vars
            }
            StandardKind::Sprite | StandardKind::NineSlice => {
                let mut vars = vec![
                    Variable::new("SourceFile", ""),
                    Variable::new("Blend", Blend::Normal),
                ];
                vars.extend(color_variables());
                vars
            }
            StandardKind::ColoredRectangle => color_variables(),
        };
        element.default_state.variables.extend(extra);
        element
    }
}

fn common_variables(kind: StandardKind) -> Vec<Variable> {
    let (width, height) = match kind {
        StandardKind::Container => (150, 150),
        StandardKind::Text => (100, 50),
        _ => (100, 100),
    };

    vec![
        Variable::new("X", 0),
        Variable::new("Y", 0),
        Variable::new("Width", width),
        Variable::new("Height", height),
        Variable::new("X Units", PositionUnit::PixelsFromLeft),
        Variable::new("Y Units", PositionUnit::PixelsFromTop),
        Variable::new("Width Units", DimensionUnit::Absolute),
        Variable::new("Height Units", DimensionUnit::Absolute),
        Variable::new("X Origin", HorizontalAlignment::Left),
        Variable::new("Y Origin", VerticalAlignment::Top),
        Variable::new("Rotation", 0),
        Variable::new("Visible", true),
        Variable::new("Parent", ""),
        Variable::new("Name", ""),
        // Declared but unset: the target falls back to the containing element's.
        Variable::new("IsFormsControl", false).inert(),
        Variable::new("HasEvents", true),
        Variable::new("ExposeChildrenEvents", true),
    ]
}

fn color_variables() -> Vec<Variable> {
    ["Red", "Green", "Blue", "Alpha"]
        .into_iter()
        .map(|channel| Variable::new(channel, 255))
        .collect()
}

/// All standard elements, in a fixed order.
pub fn all() -> Vec<Element> {
    StandardKind::ALL.iter().map(StandardKind::element).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_round_trips_by_name() {
        for kind in StandardKind::ALL {
            assert_eq!(StandardKind::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(StandardKind::from_name("Button"), None);
    }

    #[test]
    fn test_text_defines_color_channels() {
        let text = StandardKind::Text.element();
        for channel in ["Red", "Green", "Blue", "Alpha"] {
            assert!(text.default_state.variable(channel).is_some(), "{channel}");
        }
        assert!(text.default_state.variable("Blend").is_none());
    }

    #[test]
    fn test_forms_flag_is_declared_but_unset() {
        let text = StandardKind::Text.element();
        let flag = text.default_state.variable("IsFormsControl").unwrap();
        assert!(!flag.is_set());
    }

    #[test]
    fn test_standards_have_no_base() {
        for element in all() {
            assert_eq!(element.kind, ElementKind::Standard);
            assert_eq!(element.base_type(), None);
        }
    }
}
