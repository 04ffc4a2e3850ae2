//! Conversion from the pixel/unit/origin layout model to proportional bounds.
//!
//! The native runtime positions a visual with separate values, units and
//! origins per axis. The forms target instead takes one `(x, y, w, h)`
//! rectangle in which each component is either an absolute value or, when
//! its proportional flag is set, a fraction of the parent's extent.

use tracing::warn;
use trellis_ir::{DimensionUnit, HorizontalAlignment, PositionUnit, VerticalAlignment};

/// Resolved position and size family for one scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub x_units: PositionUnit,
    pub y_units: PositionUnit,
    pub width_units: DimensionUnit,
    pub height_units: DimensionUnit,
    pub x_origin: HorizontalAlignment,
    pub y_origin: VerticalAlignment,
}

impl Default for LayoutInput {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            x_units: PositionUnit::PixelsFromLeft,
            y_units: PositionUnit::PixelsFromTop,
            width_units: DimensionUnit::Absolute,
            height_units: DimensionUnit::Absolute,
            x_origin: HorizontalAlignment::Left,
            y_origin: VerticalAlignment::Top,
        }
    }
}

/// Which rectangle components are fractions of the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutFlag {
    WidthProportional,
    HeightProportional,
    XProportional,
    YProportional,
}

impl LayoutFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WidthProportional => "AbsoluteLayoutFlags.WidthProportional",
            Self::HeightProportional => "AbsoluteLayoutFlags.HeightProportional",
            Self::XProportional => "AbsoluteLayoutFlags.XProportional",
            Self::YProportional => "AbsoluteLayoutFlags.YProportional",
        }
    }
}

/// Translated rectangle. Flags are kept in width, height, x, y order.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub flags: Vec<LayoutFlag>,
}

impl Bounds {
    pub fn is_proportional(&self, flag: LayoutFlag) -> bool {
        self.flags.contains(&flag)
    }
}

/// Translate a scope's layout into proportional bounds.
///
/// Relative-to-container sizes other than zero have no proportional
/// equivalent; they are logged and passed through as pixel values.
pub fn translate(input: &LayoutInput, canvas_width: f32, canvas_height: f32) -> Bounds {
    let mut flags = Vec::new();

    let width = translate_dimension(
        input.width,
        input.width_units,
        LayoutFlag::WidthProportional,
        "Width",
        &mut flags,
    );
    let height = translate_dimension(
        input.height,
        input.height_units,
        LayoutFlag::HeightProportional,
        "Height",
        &mut flags,
    );

    let mut x = input.x;
    let centered_x = input.x_units == PositionUnit::PixelsFromCenterX
        && input.width_units == DimensionUnit::Absolute;
    if centered_x && input.x_origin == HorizontalAlignment::Center {
        // A centered origin at zero offset is exactly the 50% anchor.
        if x == 0.0 {
            x = 0.5;
            flags.push(LayoutFlag::XProportional);
        }
    } else if input.x_units == PositionUnit::PercentageWidth {
        x = proportional_offset(x, width);
        flags.push(LayoutFlag::XProportional);
    } else if centered_x {
        x = (canvas_width - width) / 2.0;
    }

    let mut y = input.y;
    let centered_y = input.y_units == PositionUnit::PixelsFromCenterY
        && input.height_units == DimensionUnit::Absolute;
    if centered_y && input.y_origin == VerticalAlignment::Center {
        if y == 0.0 {
            y = 0.5;
            flags.push(LayoutFlag::YProportional);
        }
    } else if input.y_units == PositionUnit::PercentageHeight {
        y = proportional_offset(y, height);
        flags.push(LayoutFlag::YProportional);
    } else if centered_y {
        y = (canvas_height - height) / 2.0;
    } else if input.y_units == PositionUnit::PixelsFromBottom {
        y += canvas_height;
        if input.y_origin == VerticalAlignment::Bottom {
            y -= height;
        }
    }

    Bounds {
        x,
        y,
        width,
        height,
        flags,
    }
}

fn translate_dimension(
    value: f32,
    units: DimensionUnit,
    flag: LayoutFlag,
    name: &str,
    flags: &mut Vec<LayoutFlag>,
) -> f32 {
    match units {
        DimensionUnit::Percentage => {
            flags.push(flag);
            value / 100.0
        }
        DimensionUnit::RelativeToContainer if value == 0.0 => {
            flags.push(flag);
            1.0
        }
        DimensionUnit::RelativeToContainer => {
            warn!(
                property = name,
                value, "relative-to-container size is not translated; emitting the raw pixel value"
            );
            value
        }
        _ => value,
    }
}

/// Anchor fraction for a percentage offset: the forms layout positions the
/// box within the space left over after its own extent.
fn proportional_offset(percent: f32, extent: f32) -> f32 {
    let fraction = percent / 100.0;
    let remaining = 1.0 - extent;
    if remaining > 0.0 {
        fraction / remaining
    } else {
        fraction
    }
}
