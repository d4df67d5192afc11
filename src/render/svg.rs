//! SVG markup generation
//!
//! Serializes a [`RenderDescriptor`] into a standalone `<svg>` element that
//! the host places inside the floating element. Layer order matters: the
//! clipped stroke layer is drawn first so the fill covers its inner half.

use std::fmt::Write;

use super::path_builder::JsNumber;
use super::types::RenderDescriptor;

/// Escape a value for use inside a double-quoted XML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inline `style` declarations: absolute positioning, insets, transform.
pub fn style(desc: &RenderDescriptor) -> String {
    let mut out = String::from("position:absolute;pointer-events:none");
    for inset in desc.position.insets() {
        let _ = write!(out, ";{inset}");
    }
    if !desc.transform.is_empty() {
        let _ = write!(out, ";transform:{}", desc.transform);
    }
    out
}

/// Render the descriptor as SVG markup.
///
/// The element is hidden from assistive technology and ignores pointer events.
pub fn to_svg_markup(desc: &RenderDescriptor) -> String {
    let mut out = String::new();
    let vp = &desc.viewport;

    let _ = write!(
        out,
        r#"<svg aria-hidden="true" width="{}" height="{}" viewBox="{} {} {} {}" style="{}">"#,
        JsNumber(vp.width),
        JsNumber(vp.height),
        JsNumber(vp.view_box[0]),
        JsNumber(vp.view_box[1]),
        JsNumber(vp.view_box[2]),
        JsNumber(vp.view_box[3]),
        escape_attr(&style(desc)),
    );

    if let Some(stroke) = &desc.stroke {
        let _ = write!(
            out,
            r#"<path clip-path="url(#{})" fill="none""#,
            escape_attr(&stroke.clip_id)
        );
        if let Some(color) = &stroke.color {
            let _ = write!(out, r#" stroke="{}""#, escape_attr(color));
        }
        let _ = write!(
            out,
            r#" stroke-width="{}" d="{}"/>"#,
            JsNumber(stroke.width),
            escape_attr(&stroke.path),
        );
    }

    out.push_str("<path");
    if let Some(fill) = &desc.fill {
        let _ = write!(out, r#" fill="{}""#, escape_attr(fill));
    }
    let _ = write!(
        out,
        r#" stroke="{}" d="{}"/>"#,
        escape_attr(desc.fill_stroke.as_deref().unwrap_or("none")),
        escape_attr(&desc.path),
    );

    let clip = &desc.clip;
    let _ = write!(
        out,
        r#"<clipPath id="{}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
        escape_attr(&desc.clip_id),
        JsNumber(clip.x),
        JsNumber(clip.y),
        JsNumber(clip.width),
        JsNumber(clip.height),
    );

    out.push_str("</svg>");
    out
}
