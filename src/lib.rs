//! Shape and placement of the arrow that points a floating element
//! (tooltip, popover, menu) at its anchor.
//!
//! The positioning engine decides the placement and reports where the anchor
//! sits inside the floating element; this crate turns that into an outline,
//! an absolute position, a rotation and a clip rectangle for the arrow's
//! border.
//!
//! ```
//! use floatarrow::{AnchorOffset, ArrowConfig, ArrowContext, ArrowRef, Direction, FloatingArrow, SequentialIds};
//!
//! let arrow = FloatingArrow::new(ArrowConfig::default(), SequentialIds::default())
//!     .unwrap()
//!     .with_ref(ArrowRef::new());
//! let ctx = ArrowContext::new("bottom".parse().unwrap(), &Direction::Ltr)
//!     .anchor(AnchorOffset::new(Some(20.0), None, Some(0.0)));
//!
//! let out = arrow.render(&ctx).unwrap();
//! assert_eq!(out.path, "M0,0 H14 L7,7 Q7,7 7,7 Z");
//! assert_eq!(out.transform, "");
//! ```

pub mod config;
pub mod errors;
pub mod id;
pub mod log;
pub mod render;
pub mod types;

pub use config::ArrowConfig;
pub use errors::{ConfigError, PlacementError};
pub use id::{IdGenerator, RandomIds, SequentialIds};
pub use render::shapes::{ArrowShape, CustomShape, GeneratedShape, Shape};
pub use render::svg::to_svg_markup;
pub use render::{ArrowContext, ArrowRef, FloatingArrow, RenderDescriptor};
pub use types::{
    Alignment, AnchorOffset, Direction, FloatingElement, Placement, ShiftOffset, Side,
    StaticOffset,
};
