//! Output types describing a rendered arrow

use std::fmt;

use glam::DVec2;

use crate::types::Side;

use super::path_builder::JsNumber;

/// A CSS length value assigned to an inset property.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    Px(f64),
    Percent(f64),
    /// `calc(P% - Npx)`
    PercentMinusPx(f64, f64),
    /// Caller-supplied length, passed through untouched
    Raw(String),
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Px(px) => write!(f, "{}px", JsNumber(*px)),
            CssValue::Percent(pct) => write!(f, "{}%", JsNumber(*pct)),
            CssValue::PercentMinusPx(pct, px) => {
                write!(f, "calc({}% - {}px)", JsNumber(*pct), JsNumber(*px))
            }
            CssValue::Raw(raw) => f.write_str(raw),
        }
    }
}

/// One inset property, e.g. `left: 12px`.
#[derive(Debug, Clone, PartialEq)]
pub struct Inset {
    pub edge: Side,
    pub value: CssValue,
}

impl Inset {
    pub fn new(edge: Side, value: CssValue) -> Self {
        Self { edge, value }
    }
}

impl fmt::Display for Inset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.edge, self.value)
    }
}

/// Absolute position of the arrow relative to the floating element.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowPosition {
    /// Position along the side; `None` leaves it to the host layout
    pub tangent: Option<Inset>,
    /// Offset across the side, pushing the arrow out of the floating element
    pub side: Inset,
}

impl ArrowPosition {
    /// Insets in declaration order.
    pub fn insets(&self) -> impl Iterator<Item = &Inset> {
        self.tangent.iter().chain(std::iter::once(&self.side))
    }
}

/// Clockwise rotation in whole degrees; zero means no rotation at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rotation(pub i16);

impl Rotation {
    pub const NONE: Rotation = Rotation(0);

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            Ok(())
        } else {
            write!(f, "rotate({}deg)", self.0)
        }
    }
}

/// Rectangle masking the stroke layer, in the arrow's own coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Size of the rendered `<svg>` element and its view box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// `min-x min-y width height`
    pub view_box: [f64; 4],
}

impl Viewport {
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

/// Bordered layer drawn beneath the fill, clipped so the border only shows
/// on the two slanted edges.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeLayer {
    pub path: String,
    pub width: f64,
    pub color: Option<String>,
    /// Id of the `<clipPath>` masking this layer
    pub clip_id: String,
}

/// Everything the rendering layer needs to draw one arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDescriptor {
    /// Outline of the fill layer
    pub path: String,
    pub fill: Option<String>,
    /// Stroke color of the fill layer; covers the sub-pixel gap along the seam
    pub fill_stroke: Option<String>,
    /// Present only when the stroke width is positive
    pub stroke: Option<StrokeLayer>,
    pub clip_id: String,
    pub clip: ClipRect,
    pub position: ArrowPosition,
    pub rotation: Rotation,
    /// Rotation followed by the caller's transform
    pub transform: String,
    pub viewport: Viewport,
}
