//! Arrow shape variants
//!
//! The generated triangle and a caller-authored outline follow opposite
//! orientation conventions: the generated shape points down, custom shapes are
//! authored pointing up. Every place the two differ is a method on
//! [`ArrowShape`], so the render path never branches on the variant itself.

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::types::Side;

use super::defaults;
use super::geometry::ArrowGeometry;
use super::path_builder::arrow_outline;
use super::types::{CssValue, Rotation};

/// Inputs an outline may depend on for a single render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeFrame {
    pub size: DVec2,
    pub side: Side,
    pub center_offset: Option<f64>,
    /// A static offset decides the tangential position
    pub pinned: bool,
}

/// Behavior that differs between generated and custom arrows
#[enum_dispatch]
pub trait ArrowShape {
    /// Path data shared by the fill and stroke layers.
    fn outline(&self, frame: &ShapeFrame) -> String;

    /// Rotation turning the shape toward the anchor for `side`.
    fn rotation(&self, side: Side) -> Rotation;

    /// Perpendicular inset placing the arrow's base on the floating element's edge.
    fn side_inset(&self, _side: Side, _stroke_width: f64) -> CssValue {
        CssValue::Percent(100.0)
    }

    /// Direction in which the clip rectangle is offset along y.
    fn clip_y_sign(&self) -> f64;

    /// Width of the `<svg>` element.
    fn viewport_width(&self, width: f64, computed_stroke: f64) -> f64;

    /// Stroke width of the bordered layer.
    fn stroke_layer_width(&self, computed_stroke: f64) -> f64 {
        computed_stroke
    }

    /// Whether the fill layer is stroked with its own fill color.
    fn strokes_fill(&self) -> bool {
        false
    }
}

/// The built-in triangle, optionally with a rounded and skewed tip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratedShape {
    /// Rounding of the tip; 0 is sharp, 8 is flat
    pub tip_radius: f64,
    /// Lean the tip toward the anchor's true center
    pub skew_to_center: bool,
}

impl Default for GeneratedShape {
    fn default() -> Self {
        Self {
            tip_radius: defaults::TIP_RADIUS,
            skew_to_center: false,
        }
    }
}

impl GeneratedShape {
    pub fn tip_radius(mut self, tip_radius: f64) -> Self {
        self.tip_radius = tip_radius;
        self
    }

    pub fn skew_to_center(mut self, skew_to_center: bool) -> Self {
        self.skew_to_center = skew_to_center;
        self
    }

    /// Geometry of this shape for one render.
    pub fn geometry(&self, frame: &ShapeFrame) -> ArrowGeometry {
        ArrowGeometry::compute(
            self,
            frame.size,
            frame.side,
            frame.center_offset,
            frame.pinned,
        )
    }
}

impl ArrowShape for GeneratedShape {
    fn outline(&self, frame: &ShapeFrame) -> String {
        arrow_outline(&self.geometry(frame)).to_string()
    }

    fn rotation(&self, side: Side) -> Rotation {
        match side {
            Side::Top => Rotation(180),
            Side::Right => Rotation(90),
            Side::Bottom => Rotation::NONE,
            Side::Left => Rotation(-90),
        }
    }

    fn side_inset(&self, side: Side, stroke_width: f64) -> CssValue {
        if side.is_vertical() {
            CssValue::Percent(100.0)
        } else {
            // Centers the border on the seam for left/right sides
            CssValue::PercentMinusPx(100.0, stroke_width)
        }
    }

    fn clip_y_sign(&self) -> f64 {
        1.0
    }

    fn viewport_width(&self, width: f64, computed_stroke: f64) -> f64 {
        width + computed_stroke
    }

    fn strokes_fill(&self) -> bool {
        true
    }
}

/// Caller-authored SVG path data, drawn pointing up
#[derive(Debug, Clone, PartialEq)]
pub struct CustomShape {
    pub path: String,
}

impl CustomShape {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl ArrowShape for CustomShape {
    fn outline(&self, _frame: &ShapeFrame) -> String {
        self.path.clone()
    }

    fn rotation(&self, side: Side) -> Rotation {
        match side {
            Side::Top => Rotation::NONE,
            Side::Right => Rotation(-90),
            Side::Bottom => Rotation(180),
            Side::Left => Rotation(90),
        }
    }

    fn clip_y_sign(&self) -> f64 {
        -1.0
    }

    fn viewport_width(&self, width: f64, _computed_stroke: f64) -> f64 {
        width
    }
}

#[enum_dispatch(ArrowShape)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Generated(GeneratedShape),
    Custom(CustomShape),
}

impl Shape {
    pub fn is_custom(&self) -> bool {
        matches!(self, Shape::Custom(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(side: Side) -> ShapeFrame {
        ShapeFrame {
            size: DVec2::new(14.0, 7.0),
            side,
            center_offset: None,
            pinned: false,
        }
    }

    #[test]
    fn custom_rotations_complement_generated() {
        let generated = Shape::from(GeneratedShape::default());
        let custom = Shape::from(CustomShape::new("M0,0"));
        for side in Side::ALL {
            let diff = generated.rotation(side).0 - custom.rotation(side).0;
            assert_eq!(diff.rem_euclid(360), 180, "side {side}");
        }
        assert_eq!(generated.rotation(Side::Bottom), Rotation::NONE);
        assert_eq!(custom.rotation(Side::Top), Rotation::NONE);
    }

    #[test]
    fn custom_outline_is_verbatim() {
        let custom = Shape::from(CustomShape::new("M0,7 L7,0 L14,7"));
        assert_eq!(custom.outline(&frame(Side::Left)), "M0,7 L7,0 L14,7");
    }

    #[test]
    fn generated_outline_uses_frame_size() {
        let generated = Shape::from(GeneratedShape::default());
        let mut f = frame(Side::Top);
        f.size = DVec2::new(20.0, 10.0);
        assert_eq!(generated.outline(&f), "M0,0 H20 L10,10 Q10,10 10,10 Z");
    }

    #[test]
    fn seam_inset_only_for_generated_horizontal_sides() {
        let generated = Shape::from(GeneratedShape::default());
        let custom = Shape::from(CustomShape::new("M0,0"));
        assert_eq!(generated.side_inset(Side::Top, 2.0), CssValue::Percent(100.0));
        assert_eq!(
            generated.side_inset(Side::Left, 2.0),
            CssValue::PercentMinusPx(100.0, 2.0)
        );
        assert_eq!(custom.side_inset(Side::Left, 2.0), CssValue::Percent(100.0));
    }

    #[test]
    fn layer_conventions() {
        let generated = Shape::from(GeneratedShape::default());
        let custom = Shape::from(CustomShape::new("M0,0"));
        assert_eq!(generated.viewport_width(14.0, 4.0), 18.0);
        assert_eq!(custom.viewport_width(14.0, 4.0), 14.0);
        assert_eq!(generated.stroke_layer_width(4.0), 4.0);
        assert_eq!(custom.stroke_layer_width(4.0), 4.0);
        assert!(generated.strokes_fill());
        assert!(!custom.strokes_fill());
        assert_eq!(generated.clip_y_sign(), 1.0);
        assert_eq!(custom.clip_y_sign(), -1.0);
        assert!(custom.is_custom());
    }
}
