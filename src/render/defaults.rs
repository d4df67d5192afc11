//! Default arrow dimensions (all in CSS pixels)

pub const WIDTH: f64 = 14.0;
pub const HEIGHT: f64 = 7.0;
pub const TIP_RADIUS: f64 = 0.0;
pub const STROKE_WIDTH: f64 = 0.0;

/// Tip radius at which the rounded tip flattens completely
pub const MAX_TIP_RADIUS: f64 = 8.0;

/// Prefix for clip-path ids handed out by the bundled generators
pub const CLIP_ID_PREFIX: &str = "floatarrow-clip";
