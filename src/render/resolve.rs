//! Side/alignment resolution and the tangential edge table.

use crate::types::{Alignment, Direction, Placement, Side};

/// Split a placement into its side and alignment.
#[inline]
pub fn resolve(placement: Placement) -> (Side, Alignment) {
    (placement.side, placement.alignment)
}

/// Edge a static offset is measured from, indexed by `[side][alignment][direction]`.
///
/// Top/bottom sides measure along x: `end` anchors from the trailing edge,
/// and right-to-left layout mirrors left and right (center included, since a
/// static offset from the leading edge is measured from the right in RTL).
/// Left/right sides measure along y, which never mirrors.
#[rustfmt::skip]
const STATIC_EDGE: [[[Side; 2]; 3]; 4] = [
    //            start                      center                     end
    /* top    */ [[Side::Left, Side::Right], [Side::Left, Side::Right], [Side::Right, Side::Left]],
    /* right  */ [[Side::Top, Side::Top],    [Side::Top, Side::Top],    [Side::Bottom, Side::Bottom]],
    /* bottom */ [[Side::Left, Side::Right], [Side::Left, Side::Right], [Side::Right, Side::Left]],
    /* left   */ [[Side::Top, Side::Top],    [Side::Top, Side::Top],    [Side::Bottom, Side::Bottom]],
];

/// Edge the tangential inset is measured from.
///
/// Dynamic positions reported by the engine are always measured from the
/// leading physical edge (`left` or `top`); only a static offset consults
/// the alignment and direction.
pub fn tangent_edge(side: Side, alignment: Alignment, direction: Direction, pinned: bool) -> Side {
    if !pinned {
        return if side.is_vertical() { Side::Left } else { Side::Top };
    }
    STATIC_EDGE[side.index()][alignment.index()][direction.index()]
}
