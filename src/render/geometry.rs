//! Geometry of the generated arrow: tip rounding inset and center skew.

use glam::{DVec2, dvec2};

use crate::log::debug;
use crate::types::Side;

use super::defaults;
use super::shapes::GeneratedShape;

/// Control-point geometry for one render of a generated arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    /// Base length (x) and tip distance (y)
    pub size: DVec2,
    /// How far the tip curve's end points are pulled in from the corners
    pub tip_inset: DVec2,
    /// Sideways shift of the tip toward the anchor's center
    pub skew: f64,
}

impl ArrowGeometry {
    /// Compute the geometry for `shape` rendered on `side`.
    ///
    /// `center_offset` is the engine's reported deviation of the anchor's
    /// center; `pinned` is true while a static offset decides the position.
    pub fn compute(
        shape: &GeneratedShape,
        size: DVec2,
        side: Side,
        center_offset: Option<f64>,
        pinned: bool,
    ) -> Self {
        let tip_inset = tip_inset(size, shape.tip_radius);
        let skew = if shape.skew_to_center && !pinned {
            center_offset.map_or(0.0, |offset| {
                clamp_skew(offset * side.skew_sign(), size.x, shape.tip_radius)
            })
        } else {
            0.0
        };

        debug!(
            ?side,
            tip_x = tip_inset.x,
            tip_y = tip_inset.y,
            skew,
            "computed arrow geometry"
        );

        Self {
            size,
            tip_inset,
            skew,
        }
    }
}

/// Inset of the tip curve's end points for a given tip radius.
///
/// Radius 0 yields `(width/2, 0)`: both end points meet at the apex and the
/// tip is sharp. At the maximum radius the inset reaches `(0, height)` and the
/// tip flattens into the base.
pub fn tip_inset(size: DVec2, tip_radius: f64) -> DVec2 {
    let half = size / 2.0;
    dvec2(
        half.x * (1.0 - tip_radius / defaults::MAX_TIP_RADIUS),
        half.y * tip_radius / (defaults::MAX_TIP_RADIUS / 2.0),
    )
}

/// Clamp a signed skew so the tip never passes its own base corners.
///
/// The bound is `width/2 - tip_radius`, floored at zero.
pub fn clamp_skew(skew: f64, width: f64, tip_radius: f64) -> f64 {
    let limit = (width / 2.0 - tip_radius).max(0.0);
    skew.clamp(-limit, limit)
}
