//! Arrow rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and settings
//! - `resolve`: Side/alignment resolution and the static edge table
//! - `geometry`: Tip inset and center skew
//! - `path_builder`: Path data and the generated outline
//! - `shapes`: Generated vs custom shape conventions
//! - `placement`: Insets, transform, clip rectangle, viewport
//! - `types`: Output types
//! - `svg`: Markup serialization

pub mod defaults;
pub mod geometry;
pub mod path_builder;
pub mod placement;
pub mod resolve;
pub mod shapes;
pub mod svg;
pub mod types;

pub use types::*;

use std::cell::Cell;
use std::rc::Rc;

use glam::{DVec2, dvec2};

use crate::config::ArrowConfig;
use crate::errors::ConfigError;
use crate::id::IdGenerator;
use crate::log::{debug, warn};
use crate::types::{AnchorOffset, FloatingElement, Placement, ShiftOffset};

use shapes::{ArrowShape, ShapeFrame};

/// Handle through which the positioning engine measures the rendered arrow.
///
/// Every render stores the element size; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct ArrowRef(Rc<Cell<Option<DVec2>>>);

impl ArrowRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the most recently rendered arrow element.
    pub fn dimensions(&self) -> Option<DVec2> {
        self.0.get()
    }

    fn set(&self, size: DVec2) {
        self.0.set(Some(size));
    }
}

/// Per-render input from the positioning engine and the host layout.
#[derive(Clone, Copy, Default)]
pub struct ArrowContext<'a> {
    pub placement: Option<Placement>,
    /// Arrow middleware data; `None` until the engine has resolved it
    pub anchor: Option<AnchorOffset>,
    /// Shift middleware data
    pub shift: Option<ShiftOffset>,
    /// The floating element, queried for layout direction
    pub floating: Option<&'a dyn FloatingElement>,
}

impl<'a> ArrowContext<'a> {
    pub fn new(placement: Placement, floating: &'a dyn FloatingElement) -> Self {
        Self {
            placement: Some(placement),
            anchor: None,
            shift: None,
            floating: Some(floating),
        }
    }

    pub fn anchor(mut self, anchor: AnchorOffset) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn shift(mut self, shift: ShiftOffset) -> Self {
        self.shift = Some(shift);
        self
    }
}

/// The arrow component.
///
/// Holds the caller's configuration and the clip-path id allocated at
/// construction; [`FloatingArrow::render`] is a pure function of the context.
///
/// Rendering without an attached [`ArrowRef`] is reported as a `WARN` event in
/// debug builds. The event is only emitted with the `tracing` feature enabled.
#[derive(Debug, Clone)]
pub struct FloatingArrow {
    config: ArrowConfig,
    clip_id: String,
    handle: Option<ArrowRef>,
}

impl FloatingArrow {
    /// Validate `config` and allocate this instance's clip-path id.
    pub fn new(config: ArrowConfig, mut ids: impl IdGenerator) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            clip_id: ids.next_id(),
            handle: None,
        })
    }

    /// Attach the handle the positioning engine measures the arrow through.
    pub fn with_ref(mut self, handle: ArrowRef) -> Self {
        self.handle = Some(handle);
        self
    }

    pub fn config(&self) -> &ArrowConfig {
        &self.config
    }

    pub fn clip_id(&self) -> &str {
        &self.clip_id
    }

    /// Compute the arrow for one render pass.
    ///
    /// Returns `None` while the floating element, placement or arrow data is
    /// not available yet.
    pub fn render(&self, ctx: &ArrowContext<'_>) -> Option<RenderDescriptor> {
        if self.handle.is_none() && cfg!(debug_assertions) {
            warn!(
                clip_id = %self.clip_id,
                "FloatingArrow rendered without an ArrowRef; the positioning engine cannot measure it"
            );
        }

        let floating = ctx.floating?;
        let resolved = ctx.placement?;
        let anchor = ctx.anchor.filter(|anchor| !anchor.is_empty())?;

        let config = &self.config;
        let shape = &config.shape;
        let (side, alignment) = resolve::resolve(resolved);
        let direction = floating.direction();

        // A shifted floating element makes a fixed offset point at the wrong spot
        let shifted = ctx.shift.is_some_and(|shift| shift.moved_along(side));
        let static_offset = config.static_offset.as_ref().filter(|_| !shifted);
        let pinned = static_offset.is_some();

        let computed_stroke = config.computed_stroke_width();
        let frame = ShapeFrame {
            size: dvec2(config.width, config.height),
            side,
            center_offset: anchor.center_offset,
            pinned,
        };
        let path = shape.outline(&frame);

        let stroke = (computed_stroke > 0.0).then(|| StrokeLayer {
            path: path.clone(),
            width: shape.stroke_layer_width(computed_stroke),
            color: config.stroke.clone(),
            clip_id: self.clip_id.clone(),
        });
        let fill_stroke = if computed_stroke > 0.0 && shape.strokes_fill() {
            config.fill.clone()
        } else {
            None
        };

        let position = placement::position(
            shape,
            side,
            alignment,
            direction,
            &anchor,
            static_offset,
            config.stroke_width,
        );
        let viewport = placement::viewport(shape, config.width, config.height, computed_stroke);

        debug!(
            placement = %resolved,
            ?direction,
            pinned,
            shifted,
            path = %path,
            "rendered floating arrow"
        );

        if let Some(handle) = &self.handle {
            handle.set(viewport.size());
        }

        Some(RenderDescriptor {
            path,
            fill: config.fill.clone(),
            fill_stroke,
            stroke,
            clip_id: self.clip_id.clone(),
            clip: placement::clip_rect(shape, config.width, computed_stroke),
            position,
            rotation: shape.rotation(side),
            transform: placement::transform(shape, side, config.transform.as_deref()),
            viewport,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIds;
    use crate::types::{Direction, Side};

    fn arrow(config: ArrowConfig) -> FloatingArrow {
        FloatingArrow::new(config, SequentialIds::new("clip"))
            .unwrap()
            .with_ref(ArrowRef::new())
    }

    fn ctx(placement: &str, anchor: AnchorOffset) -> ArrowContext<'static> {
        ArrowContext::new(placement.parse().unwrap(), &Direction::Ltr).anchor(anchor)
    }

    #[test]
    fn renders_nothing_without_arrow_data() {
        let arrow = arrow(ArrowConfig::default());
        let bare = ArrowContext::new(Placement::centered(Side::Top), &Direction::Ltr);
        assert_eq!(arrow.render(&bare), None);
        assert_eq!(arrow.render(&bare.anchor(AnchorOffset::default())), None);
    }

    #[test]
    fn renders_nothing_without_floating_element() {
        let arrow = arrow(ArrowConfig::default());
        let ctx = ArrowContext {
            placement: Some(Placement::centered(Side::Top)),
            anchor: Some(AnchorOffset::new(Some(3.0), None, None)),
            shift: None,
            floating: None,
        };
        assert_eq!(arrow.render(&ctx), None);
    }

    #[test]
    fn default_bottom_arrow() {
        let arrow = arrow(ArrowConfig::default());
        let out = arrow
            .render(&ctx("bottom", AnchorOffset::new(Some(20.0), None, Some(0.0))))
            .unwrap();
        assert_eq!(out.path, "M0,0 H14 L7,7 Q7,7 7,7 Z");
        assert_eq!(out.transform, "");
        assert_eq!(out.rotation, Rotation::NONE);
        assert_eq!(out.stroke, None);
        assert_eq!(out.fill_stroke, None);
        assert_eq!(out.clip_id, "clip-0");
        assert_eq!(
            out.position.tangent,
            Some(Inset::new(Side::Left, CssValue::Px(20.0)))
        );
    }

    #[test]
    fn stroke_layer_is_doubled_and_clipped() {
        let arrow = arrow(
            ArrowConfig::default()
                .stroke_width(1.0)
                .stroke("black")
                .fill("white"),
        );
        let out = arrow
            .render(&ctx("right", AnchorOffset::new(None, Some(9.0), None)))
            .unwrap();
        let stroke = out.stroke.unwrap();
        assert_eq!(stroke.width, 2.0);
        assert_eq!(stroke.path, out.path);
        assert_eq!(stroke.color.as_deref(), Some("black"));
        assert_eq!(stroke.clip_id, "clip-0");
        assert_eq!(out.fill_stroke.as_deref(), Some("white"));
        assert_eq!(out.clip.x, -1.0);
        assert_eq!(out.clip.y, 1.0);
        assert_eq!(
            out.position.side,
            Inset::new(Side::Right, CssValue::PercentMinusPx(100.0, 1.0))
        );
        assert_eq!(out.transform, "rotate(90deg)");
    }

    #[test]
    fn shift_discards_static_offset() {
        let arrow = arrow(ArrowConfig::default().static_offset("10%"));
        let anchor = AnchorOffset::new(Some(30.0), None, None);

        let pinned = arrow.render(&ctx("top-end", anchor)).unwrap();
        assert_eq!(
            pinned.position.tangent,
            Some(Inset::new(Side::Right, CssValue::Raw("10%".into())))
        );

        let shifted = arrow
            .render(&ctx("top-end", anchor).shift(ShiftOffset::new(-5.0, 0.0)))
            .unwrap();
        assert_eq!(
            shifted.position.tangent,
            Some(Inset::new(Side::Left, CssValue::Px(30.0)))
        );

        // shifting across the side does not count
        let across = arrow
            .render(&ctx("top-end", anchor).shift(ShiftOffset::new(0.0, 12.0)))
            .unwrap();
        assert_eq!(across.position.tangent, pinned.position.tangent);
    }

    #[test]
    fn static_offset_disables_skew() {
        let skewing = ArrowConfig::default()
            .shape(shapes::GeneratedShape::default().skew_to_center(true));
        let anchor = AnchorOffset::new(Some(30.0), None, Some(4.0));

        let free = arrow(skewing.clone()).render(&ctx("top", anchor)).unwrap();
        assert_eq!(free.path, "M0,0 H14 L11,7 Q11,7 11,7 Z");

        let pinned = arrow(skewing.static_offset(12.0))
            .render(&ctx("top", anchor))
            .unwrap();
        assert_eq!(pinned.path, "M0,0 H14 L7,7 Q7,7 7,7 Z");
    }

    #[test]
    fn rtl_mirrors_static_edge() {
        let arrow = arrow(ArrowConfig::default().static_offset(6.0));
        let ctx = ArrowContext::new("bottom-end".parse().unwrap(), &Direction::Rtl)
            .anchor(AnchorOffset::new(Some(1.0), None, None));
        let out = arrow.render(&ctx).unwrap();
        assert_eq!(
            out.position.tangent,
            Some(Inset::new(Side::Left, CssValue::Px(6.0)))
        );
    }

    #[test]
    fn render_reports_size_through_ref() {
        let handle = ArrowRef::new();
        let arrow = FloatingArrow::new(
            ArrowConfig::default().stroke_width(2.0),
            SequentialIds::default(),
        )
        .unwrap()
        .with_ref(handle.clone());
        assert_eq!(handle.dimensions(), None);
        arrow
            .render(&ctx("left", AnchorOffset::new(None, Some(4.0), None)))
            .unwrap();
        assert_eq!(handle.dimensions(), Some(dvec2(18.0, 14.0)));
    }

    #[test]
    fn renders_without_ref() {
        let arrow = FloatingArrow::new(ArrowConfig::default(), SequentialIds::default()).unwrap();
        assert!(
            arrow
                .render(&ctx("top", AnchorOffset::new(Some(1.0), None, None)))
                .is_some()
        );
    }

    #[test]
    fn render_is_idempotent() {
        let arrow = arrow(ArrowConfig::default().stroke_width(1.0));
        let ctx = ctx("left-start", AnchorOffset::new(None, Some(8.0), Some(2.0)));
        assert_eq!(arrow.render(&ctx), arrow.render(&ctx));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = FloatingArrow::new(
            ArrowConfig::default().size(f64::NAN, 7.0),
            SequentialIds::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDimension { name: "width", .. }));
    }
}
