//! SVG path data builder for arrow outlines.
//!
//! Outlines are written in the same textual form a browser host produces
//! when it interpolates numbers into a path template: absolute commands
//! separated by single spaces, coordinates joined by commas, and numbers
//! stringified the JavaScript way (`7`, `3.5`, never `7.0` or `-0`).

use std::fmt;

use glam::DVec2;

use super::geometry::ArrowGeometry;

/// Displays an `f64` exactly like JavaScript's `Number.prototype.toString`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsNumber(pub f64);

impl fmt::Display for JsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut v = self.0;
        if v == 0.0 {
            // -0 stringifies as "0"
            v = 0.0;
        }
        let mut buf = ryu_js::Buffer::new();
        f.write_str(buf.format(v))
    }
}

/// A single absolute path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    HorizontalTo(f64),
    LineTo(DVec2),
    QuadTo { ctrl: DVec2, to: DVec2 },
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo(p) => write!(f, "M{},{}", JsNumber(p.x), JsNumber(p.y)),
            PathCommand::HorizontalTo(x) => write!(f, "H{}", JsNumber(x)),
            PathCommand::LineTo(p) => write!(f, "L{},{}", JsNumber(p.x), JsNumber(p.y)),
            PathCommand::QuadTo { ctrl, to } => write!(
                f,
                "Q{},{} {},{}",
                JsNumber(ctrl.x),
                JsNumber(ctrl.y),
                JsNumber(to.x),
                JsNumber(to.y)
            ),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

/// Fluent builder for path data.
///
/// # Example
///
/// ```
/// use floatarrow::render::path_builder::PathData;
///
/// let d = PathData::new().m(0.0, 0.0).h(14.0).l(7.0, 7.0).z();
/// assert_eq!(d.to_string(), "M0,0 H14 L7,7 Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(DVec2::new(x, y)));
        self
    }

    pub fn h(mut self, x: f64) -> Self {
        self.commands.push(PathCommand::HorizontalTo(x));
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo(DVec2::new(x, y)));
        self
    }

    pub fn q(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::QuadTo {
            ctrl: DVec2::new(cx, cy),
            to: DVec2::new(x, y),
        });
        self
    }

    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}

/// Outline of the generated arrow, pointing down in its own coordinate space.
///
/// Traced from the two base corners at y=0 to the tip at y=height. The tip is
/// a quadratic curve whose end points are pulled in by the tip inset, and
/// every tip point is shifted sideways by the skew.
pub fn arrow_outline(geometry: &ArrowGeometry) -> PathData {
    let ArrowGeometry {
        size,
        tip_inset,
        skew,
        ..
    } = *geometry;

    PathData::new()
        .m(0.0, 0.0)
        .h(size.x)
        .l(size.x - tip_inset.x + skew, size.y - tip_inset.y)
        .q(size.x / 2.0 + skew, size.y, tip_inset.x + skew, size.y - tip_inset.y)
        .z()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn geometry(size: DVec2, tip_inset: DVec2, skew: f64) -> ArrowGeometry {
        ArrowGeometry {
            size,
            tip_inset,
            skew,
        }
    }

    #[test]
    fn js_number_formatting() {
        assert_eq!(JsNumber(7.0).to_string(), "7");
        assert_eq!(JsNumber(3.5).to_string(), "3.5");
        assert_eq!(JsNumber(-0.0).to_string(), "0");
        assert_eq!(JsNumber(-2.25).to_string(), "-2.25");
        assert_eq!(JsNumber(0.1 + 0.2).to_string(), "0.30000000000000004");
    }

    #[test]
    fn commands_are_space_separated() {
        let d = PathData::new().m(1.0, 2.0).q(3.0, 4.0, 5.0, 6.0).z();
        assert_eq!(d.to_string(), "M1,2 Q3,4 5,6 Z");
        assert_eq!(d.commands().len(), 3);
        assert!(PathData::new().is_empty());
    }

    #[test]
    fn sharp_default_outline() {
        let d = arrow_outline(&geometry(dvec2(14.0, 7.0), dvec2(7.0, 0.0), 0.0));
        assert_eq!(d.to_string(), "M0,0 H14 L7,7 Q7,7 7,7 Z");
    }

    #[test]
    fn skew_moves_every_tip_point() {
        let d = arrow_outline(&geometry(dvec2(14.0, 7.0), dvec2(7.0, 0.0), 3.0));
        assert_eq!(d.to_string(), "M0,0 H14 L10,7 Q10,7 10,7 Z");
        let d = arrow_outline(&geometry(dvec2(14.0, 7.0), dvec2(6.125, 0.875), -2.0));
        assert_eq!(d.to_string(), "M0,0 H14 L5.875,6.125 Q5,7 4.125,6.125 Z");
    }
}
