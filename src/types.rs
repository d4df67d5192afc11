//! Input types supplied by the positioning engine and the host layout.

use std::fmt;
use std::str::FromStr;

use crate::errors::PlacementError;

/// Side of the anchor the floating element sits on.
///
/// Also used as the name of a CSS inset property (`top`, `left`, ...) when
/// describing where the arrow is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// True for `top` and `bottom`, whose tangential axis is x.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    /// Sign applied to the engine's center offset before skewing.
    ///
    /// The tangential axis runs the opposite way for bottom and left sides.
    #[inline]
    pub fn skew_sign(self) -> f64 {
        match self {
            Side::Top | Side::Right => 1.0,
            Side::Bottom | Side::Left => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alignment of the floating element along the side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    Start,
    #[default]
    Center,
    End,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Start, Alignment::Center, Alignment::End];

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Start => "start",
            Alignment::Center => "center",
            Alignment::End => "end",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Alignment::Start => 0,
            Alignment::Center => 1,
            Alignment::End => 2,
        }
    }
}

/// Resolved placement of the floating element, e.g. `bottom-start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub side: Side,
    pub alignment: Alignment,
}

impl Placement {
    pub const fn new(side: Side, alignment: Alignment) -> Self {
        Self { side, alignment }
    }

    /// Placement centered on `side`.
    pub const fn centered(side: Side) -> Self {
        Self {
            side,
            alignment: Alignment::Center,
        }
    }
}

impl FromStr for Placement {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PlacementError::Empty);
        }

        let (side, alignment) = match s.split_once('-') {
            Some((side, alignment)) => (side, Some(alignment)),
            None => (s, None),
        };

        let side = match side {
            "top" => Side::Top,
            "right" => Side::Right,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            other => {
                return Err(PlacementError::UnknownSide {
                    side: other.to_string(),
                });
            }
        };

        // "center" is never serialized, only implied by a bare side
        let alignment = match alignment {
            None => Alignment::Center,
            Some("start") => Alignment::Start,
            Some("end") => Alignment::End,
            Some(other) => {
                return Err(PlacementError::UnknownAlignment {
                    alignment: other.to_string(),
                });
            }
        };

        Ok(Placement { side, alignment })
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alignment {
            Alignment::Center => write!(f, "{}", self.side),
            other => write!(f, "{}-{}", self.side, other.as_str()),
        }
    }
}

/// Inline layout direction of the floating element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Ltr, Direction::Rtl];

    #[inline]
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Ltr => 0,
            Direction::Rtl => 1,
        }
    }
}

/// Read-only view of the floating element, used to query layout direction.
pub trait FloatingElement {
    fn direction(&self) -> Direction;
}

impl FloatingElement for Direction {
    fn direction(&self) -> Direction {
        *self
    }
}

/// Arrow data reported by the positioning engine's arrow middleware.
///
/// `x` is set for top/bottom placements, `y` for left/right placements.
/// `center_offset` is how far the anchor's true center sits from the arrow's
/// naive position along the tangential axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorOffset {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub center_offset: Option<f64>,
}

impl AnchorOffset {
    pub fn new(x: Option<f64>, y: Option<f64>, center_offset: Option<f64>) -> Self {
        Self {
            x,
            y,
            center_offset,
        }
    }

    /// True when the engine has not resolved any arrow data yet.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.center_offset.is_none()
    }

    /// Offset along the tangential axis of `side`.
    pub fn along(&self, side: Side) -> Option<f64> {
        if side.is_vertical() { self.x } else { self.y }
    }
}

/// Displacement applied by the shift middleware to keep the floating element in view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShiftOffset {
    pub x: f64,
    pub y: f64,
}

impl ShiftOffset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether the floating element was moved along the tangential axis of `side`.
    pub fn moved_along(&self, side: Side) -> bool {
        let delta = if side.is_vertical() { self.x } else { self.y };
        // NaN counts as "not moved"
        delta != 0.0 && !delta.is_nan()
    }
}

/// Caller-forced tangential position of the arrow.
#[derive(Debug, Clone, PartialEq)]
pub enum StaticOffset {
    /// Pixels from the tangential edge
    Px(f64),
    /// Any CSS length, e.g. `"15%"` or `"1rem"`
    Css(String),
}

impl From<f64> for StaticOffset {
    fn from(px: f64) -> Self {
        StaticOffset::Px(px)
    }
}

impl From<&str> for StaticOffset {
    fn from(css: &str) -> Self {
        StaticOffset::Css(css.to_string())
    }
}

impl From<String> for StaticOffset {
    fn from(css: String) -> Self {
        StaticOffset::Css(css)
    }
}
