//! Caller-supplied arrow configuration.
//!
//! Every field has a default; the builder methods only override what the
//! caller cares about:
//!
//! ```
//! use floatarrow::{ArrowConfig, GeneratedShape};
//!
//! let config = ArrowConfig::default()
//!     .size(16.0, 8.0)
//!     .stroke_width(1.0)
//!     .stroke("#d0d0d0")
//!     .shape(GeneratedShape::default().tip_radius(2.0).skew_to_center(true));
//! assert!(config.validate().is_ok());
//! ```

use crate::errors::ConfigError;
use crate::render::defaults;
use crate::render::shapes::{CustomShape, GeneratedShape, Shape};
use crate::types::StaticOffset;

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowConfig {
    /// Length of the arrow's base, in pixels
    pub width: f64,
    /// Distance from the base to the tip, in pixels
    pub height: f64,
    /// Apparent border width; the stroke layer is drawn at twice this
    pub stroke_width: f64,
    /// Forces the tangential position instead of following the anchor
    pub static_offset: Option<StaticOffset>,
    pub shape: Shape,
    /// Border color of the stroke layer
    pub stroke: Option<String>,
    /// Fill color of the arrow body
    pub fill: Option<String>,
    /// Extra CSS transform appended after the side rotation
    pub transform: Option<String>,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
            height: defaults::HEIGHT,
            stroke_width: defaults::STROKE_WIDTH,
            static_offset: None,
            shape: Shape::Generated(GeneratedShape::default()),
            stroke: None,
            fill: None,
            transform: None,
        }
    }
}

impl ArrowConfig {
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn static_offset(mut self, offset: impl Into<StaticOffset>) -> Self {
        self.static_offset = Some(offset.into());
        self
    }

    pub fn shape(mut self, shape: impl Into<Shape>) -> Self {
        self.shape = shape.into();
        self
    }

    /// Replace the generated triangle with caller-authored SVG path data.
    pub fn custom_path(self, path: impl Into<String>) -> Self {
        self.shape(CustomShape::new(path))
    }

    pub fn stroke(mut self, color: impl Into<String>) -> Self {
        self.stroke = Some(color.into());
        self
    }

    pub fn fill(mut self, color: impl Into<String>) -> Self {
        self.fill = Some(color.into());
        self
    }

    pub fn transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = Some(transform.into());
        self
    }

    /// Internal stroke width: a stroke straddles its path, so an apparent
    /// N-pixel border needs a 2N stroke.
    #[inline]
    pub fn computed_stroke_width(&self) -> f64 {
        self.stroke_width * 2.0
    }

    /// Check that every dimension is a finite, non-negative pixel count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)?;
        check_dimension("stroke width", self.stroke_width)?;
        match &self.shape {
            Shape::Generated(generated) => check_dimension("tip radius", generated.tip_radius)?,
            Shape::Custom(custom) if custom.path.trim().is_empty() => {
                return Err(ConfigError::EmptyCustomPath);
            }
            Shape::Custom(_) => {}
        }
        match &self.static_offset {
            Some(StaticOffset::Px(px)) if !px.is_finite() => {
                return Err(ConfigError::InvalidDimension {
                    name: "static offset",
                    value: *px,
                });
            }
            Some(StaticOffset::Css(css)) if css.trim().is_empty() => {
                return Err(ConfigError::EmptyStaticOffset);
            }
            _ => {}
        }
        Ok(())
    }
}

fn check_dimension(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ArrowConfig::default();
        assert_eq!(config.width, 14.0);
        assert_eq!(config.height, 7.0);
        assert_eq!(config.stroke_width, 0.0);
        assert_eq!(config.static_offset, None);
        assert_eq!(config.stroke, None);
        match config.shape {
            Shape::Generated(g) => {
                assert_eq!(g.tip_radius, 0.0);
                assert!(!g.skew_to_center);
            }
            Shape::Custom(_) => panic!("default shape should be generated"),
        }
    }

    #[test]
    fn stroke_is_doubled() {
        let config = ArrowConfig::default().stroke_width(1.5);
        assert_eq!(config.computed_stroke_width(), 3.0);
    }

    #[test]
    fn validate_rejects_bad_dimensions() {
        assert_eq!(
            ArrowConfig::default().size(-1.0, 7.0).validate(),
            Err(ConfigError::InvalidDimension {
                name: "width",
                value: -1.0
            })
        );
        assert!(ArrowConfig::default().size(14.0, f64::NAN).validate().is_err());
        assert!(
            ArrowConfig::default()
                .static_offset(f64::INFINITY)
                .validate()
                .is_err()
        );
        assert!(
            ArrowConfig::default()
                .shape(GeneratedShape::default().tip_radius(-2.0))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn validate_rejects_blank_custom_path() {
        assert_eq!(
            ArrowConfig::default().custom_path("  ").validate(),
            Err(ConfigError::EmptyCustomPath)
        );
        assert!(ArrowConfig::default().custom_path("M0,0 L1,1 Z").validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_css_static_offset() {
        for blank in ["", "   "] {
            assert_eq!(
                ArrowConfig::default().static_offset(blank).validate(),
                Err(ConfigError::EmptyStaticOffset)
            );
        }
        assert!(ArrowConfig::default().static_offset("15%").validate().is_ok());
        assert!(ArrowConfig::default().static_offset(0.0).validate().is_ok());
    }
}
