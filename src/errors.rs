//! Error types with diagnostics using miette
//!
//! Rendering itself never fails: missing anchor data is a "render nothing"
//! state. These errors cover the two places where caller input is parsed or
//! validated before a render happens.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Placement Errors
// ============================================================================

/// Errors from parsing a `"side"` / `"side-alignment"` placement string
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("empty placement")]
    #[diagnostic(
        code(floatarrow::placement::empty),
        help("expected one of top, right, bottom, left, optionally followed by -start or -end")
    )]
    Empty,

    #[error("unknown side: {side}")]
    #[diagnostic(
        code(floatarrow::placement::unknown_side),
        help("the side must be one of top, right, bottom, left")
    )]
    UnknownSide { side: String },

    #[error("unknown alignment: {alignment}")]
    #[diagnostic(
        code(floatarrow::placement::unknown_alignment),
        help("the alignment must be start or end; omit it for center")
    )]
    UnknownAlignment { alignment: String },
}

// ============================================================================
// Config Errors
// ============================================================================

/// Errors from validating an [`ArrowConfig`](crate::ArrowConfig)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid {name}: {value}")]
    #[diagnostic(
        code(floatarrow::config::invalid_dimension),
        help("{name} must be a finite, non-negative number of pixels")
    )]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("custom arrow path is empty")]
    #[diagnostic(
        code(floatarrow::config::empty_custom_path),
        help("pass SVG path data such as \"M0,0 H14 L7,7 Z\", or use the generated shape")
    )]
    EmptyCustomPath,

    #[error("static offset is empty")]
    #[diagnostic(
        code(floatarrow::config::empty_static_offset),
        help("pass a CSS length such as \"15%\" or a pixel number, or leave the offset unset")
    )]
    EmptyStaticOffset,
}
