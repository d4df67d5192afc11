//! Placement compositor: insets, transform, clip rectangle and viewport.

use crate::types::{Alignment, AnchorOffset, Direction, Side, StaticOffset};

use super::resolve::tangent_edge;
use super::shapes::{ArrowShape, Shape};
use super::types::{ArrowPosition, ClipRect, CssValue, Inset, Viewport};

/// Position the arrow along and across `side`.
///
/// `static_offset` is only passed while it is in force; the shift override
/// has already been applied by the caller.
pub fn position(
    shape: &Shape,
    side: Side,
    alignment: Alignment,
    direction: Direction,
    anchor: &AnchorOffset,
    static_offset: Option<&StaticOffset>,
    stroke_width: f64,
) -> ArrowPosition {
    let edge = tangent_edge(side, alignment, direction, static_offset.is_some());

    let value = match static_offset {
        Some(StaticOffset::Px(px)) => Some(CssValue::Px(*px)),
        Some(StaticOffset::Css(css)) => Some(CssValue::Raw(css.clone())),
        None => anchor.along(side).map(CssValue::Px),
    };

    ArrowPosition {
        tangent: value.map(|value| Inset::new(edge, value)),
        side: Inset::new(side, shape.side_inset(side, stroke_width)),
    }
}

/// Join the side rotation and the caller's transform, skipping empty parts.
pub fn transform(shape: &Shape, side: Side, extra: Option<&str>) -> String {
    let rotation = shape.rotation(side).to_string();
    [rotation.as_str(), extra.unwrap_or("").trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rectangle masking the stroke layer so the flat base edge stays unstroked.
///
/// Offset by half the drawn stroke, which equals the apparent border width.
pub fn clip_rect(shape: &Shape, width: f64, computed_stroke: f64) -> ClipRect {
    let half = computed_stroke / 2.0;
    ClipRect {
        x: -half,
        y: half * shape.clip_y_sign(),
        width: width + computed_stroke,
        height: width,
    }
}

/// Element size and view box; the box is square so rotation never crops.
pub fn viewport(shape: &Shape, width: f64, height: f64, computed_stroke: f64) -> Viewport {
    Viewport {
        width: shape.viewport_width(width, computed_stroke),
        height: width,
        view_box: [0.0, 0.0, width, height.max(width)],
    }
}
