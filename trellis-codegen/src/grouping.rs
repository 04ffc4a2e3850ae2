//! Property clusters the forms target sets with a single statement.
//!
//! Each processor consumes its variables from the worklist so the generic
//! pass never emits them a second time.

use trellis_core::format_float;
use trellis_ir::{EnumValue, Variable};

use crate::{
    Result,
    emit::Context,
    layout::{self, LayoutFlag, LayoutInput},
};

/// Device density expression pixel literals are divided by.
pub(crate) const DENSITY: &str = "DeviceDisplay.MainDisplayInfo.Density";

const COLOR_CHANNELS: [&str; 4] = ["Red", "Green", "Blue", "Alpha"];

const POSITION_FAMILY: [&str; 10] = [
    "X",
    "Y",
    "Width",
    "Height",
    "X Units",
    "Y Units",
    "Width Units",
    "Height Units",
    "X Origin",
    "Y Origin",
];

/// Merge the color channels of a text-like scope into one `TextColor` call.
pub fn text_color(ctx: &Context<'_>, variables: &mut Vec<&Variable>) -> Result<Option<String>> {
    if !ctx.root_kind.is_some_and(|kind| kind.is_text_like()) {
        return Ok(None);
    }

    let mut channels = [0i32; 4];
    for (slot, channel) in channels.iter_mut().zip(COLOR_CHANNELS) {
        match ctx.resolve_float(channel)? {
            Some(value) => *slot = value.round() as i32,
            None => return Ok(None),
        }
    }

    variables.retain(|v| !COLOR_CHANNELS.contains(&v.root_name()));

    let [red, green, blue, alpha] = channels;
    Ok(Some(format!(
        "{}.TextColor = Color.FromRgba({}, {}, {}, {});",
        ctx.scope.target(),
        red,
        green,
        blue,
        alpha
    )))
}

/// Merge position, size, units and origins into layout bounds and flags.
///
/// Returns `None` when the state sets none of them for the scope.
pub fn position_and_size(
    ctx: &Context<'_>,
    variables: &mut Vec<&Variable>,
) -> Result<Option<Vec<String>>> {
    let sets_any = POSITION_FAMILY.iter().any(|root| {
        ctx.state
            .variable(&ctx.scope.scoped_name(root))
            .is_some_and(Variable::is_set)
    });
    if !sets_any {
        return Ok(None);
    }

    let input = layout_input(ctx)?;
    let bounds = layout::translate(&input, ctx.settings.canvas_width, ctx.settings.canvas_height);

    variables.retain(|v| !POSITION_FAMILY.contains(&v.root_name()));

    let literal = |value: f32, flag: LayoutFlag| {
        let literal = format_float(value);
        if ctx.settings.adjust_for_density && !bounds.is_proportional(flag) {
            format!("{}/{}", literal, DENSITY)
        } else {
            literal
        }
    };

    let target = ctx.scope.target();
    let mut lines = vec![format!(
        "AbsoluteLayout.SetLayoutBounds({}, new Rectangle({}, {}, {}, {}));",
        target,
        literal(bounds.x, LayoutFlag::XProportional),
        literal(bounds.y, LayoutFlag::YProportional),
        literal(bounds.width, LayoutFlag::WidthProportional),
        literal(bounds.height, LayoutFlag::HeightProportional),
    )];

    if !bounds.flags.is_empty() {
        let flags: Vec<&str> = bounds.flags.iter().map(LayoutFlag::as_str).collect();
        lines.push(format!(
            "AbsoluteLayout.SetLayoutFlags({}, {});",
            target,
            flags.join(" | ")
        ));
    }

    Ok(Some(lines))
}

fn layout_input(ctx: &Context<'_>) -> Result<LayoutInput> {
    let defaults = LayoutInput::default();

    Ok(LayoutInput {
        x: ctx.resolve_float("X")?.unwrap_or(defaults.x),
        y: ctx.resolve_float("Y")?.unwrap_or(defaults.y),
        width: ctx.resolve_float("Width")?.unwrap_or(defaults.width),
        height: ctx.resolve_float("Height")?.unwrap_or(defaults.height),
        x_units: ctx
            .resolve_enum("X Units", "a position unit", position_unit)?
            .unwrap_or(defaults.x_units),
        y_units: ctx
            .resolve_enum("Y Units", "a position unit", position_unit)?
            .unwrap_or(defaults.y_units),
        width_units: ctx
            .resolve_enum("Width Units", "a dimension unit", dimension_unit)?
            .unwrap_or(defaults.width_units),
        height_units: ctx
            .resolve_enum("Height Units", "a dimension unit", dimension_unit)?
            .unwrap_or(defaults.height_units),
        x_origin: ctx
            .resolve_enum("X Origin", "a horizontal alignment", |e| match e {
                EnumValue::HorizontalAlignment(a) => Some(a),
                _ => None,
            })?
            .unwrap_or(defaults.x_origin),
        y_origin: ctx
            .resolve_enum("Y Origin", "a vertical alignment", |e| match e {
                EnumValue::VerticalAlignment(a) => Some(a),
                _ => None,
            })?
            .unwrap_or(defaults.y_origin),
    })
}

fn position_unit(value: EnumValue) -> Option<trellis_ir::PositionUnit> {
    match value {
        EnumValue::PositionUnit(unit) => Some(unit),
        _ => None,
    }
}

fn dimension_unit(value: EnumValue) -> Option<trellis_ir::DimensionUnit> {
    match value {
        EnumValue::DimensionUnit(unit) => Some(unit),
        _ => None,
    }
}
