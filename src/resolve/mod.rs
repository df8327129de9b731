//! # Responsive Resolution
//!
//! Turns an element plus a breakpoint into the concrete geometry a renderer
//! paints. Nothing here mutates the document; resolution runs at render time
//! for whichever breakpoint is active.
//!
//! Width and height are picked in this order, first hit wins:
//!
//! 1. `responsive[bp].content.customWidth` / `customHeight`
//! 2. `content.customWidth` / `customHeight` (the desktop-authored custom size)
//! 3. `responsive[bp].size`
//! 4. the baseline (`size`, or a button's named size bucket), multiplied by
//!    the breakpoint's scale factor
//!
//! Steps 1-3 are absolute and never scaled. Spacers are the exception to
//! step 4: their height is a flow gap and stays unscaled.
//!
//! `y` is never breakpoint-dependent, so vertical order is identical on every
//! breakpoint.

pub mod alignment;
pub mod spacing;

use serde::Serialize;

use crate::layout::canvas;
use crate::model::*;

pub use alignment::{aligned_x, apply_alignment};
pub use spacing::{resolve_spacing, write_spacing, Side, Sides, SpacingLinks, SpacingProperty};

/// Render-ready geometry for one element at one breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedElement {
    pub id: String,
    pub kind: ElementKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    pub padding: Sides,
    pub margin: Sides,
    pub alignment: Alignment,
    pub content: ElementContent,
}

/// Where a resolved dimension came from.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Dimension {
    /// User-authored absolute value.
    Absolute(f64),
    /// Baseline value, still to be scaled.
    Baseline(f64),
}

impl Dimension {
    fn resolve(self, scale: f64) -> f64 {
        match self {
            Dimension::Absolute(v) => v,
            Dimension::Baseline(v) => v * scale,
        }
    }
}

fn baseline_size(element: &Element) -> (f64, f64) {
    match &element.content {
        ElementContent::Button(ButtonContent {
            size: Some(bucket), ..
        }) => bucket.dimensions(),
        _ => (element.size.width, element.size.height),
    }
}

fn pick_width(element: &Element, breakpoint: Breakpoint) -> Dimension {
    let over = element.override_for(breakpoint);
    over.and_then(|o| o.content.custom_width)
        .or(element.content.props().custom_width)
        .or(over.and_then(|o| o.size).and_then(|s| s.width))
        .map(Dimension::Absolute)
        .unwrap_or_else(|| Dimension::Baseline(baseline_size(element).0))
}

fn pick_height(element: &Element, breakpoint: Breakpoint) -> Dimension {
    let over = element.override_for(breakpoint);
    if let Some(v) = over
        .and_then(|o| o.content.custom_height)
        .or(element.content.props().custom_height)
        .or(over.and_then(|o| o.size).and_then(|s| s.height))
    {
        return Dimension::Absolute(v);
    }
    match &element.content {
        ElementContent::Spacer(spacer) => Dimension::Absolute(spacer.height),
        _ => Dimension::Baseline(baseline_size(element).1),
    }
}

/// Effective width at a breakpoint.
pub fn resolve_width(element: &Element, breakpoint: Breakpoint) -> f64 {
    pick_width(element, breakpoint).resolve(breakpoint.scale_factor())
}

/// Effective height at a breakpoint.
pub fn resolve_height(element: &Element, breakpoint: Breakpoint) -> f64 {
    pick_height(element, breakpoint).resolve(breakpoint.scale_factor())
}

/// Effective font size: a breakpoint override, else the scaled baseline.
/// `None` for kinds that carry no text.
pub fn resolve_font_size(element: &Element, breakpoint: Breakpoint) -> Option<f64> {
    if let Some(size) = element
        .override_for(breakpoint)
        .and_then(|o| o.content.font_size)
    {
        return Some(size);
    }
    element
        .content
        .props()
        .font_size
        .map(|size| size * breakpoint.scale_factor())
}

/// Resolve everything a renderer needs for `element` at `breakpoint`.
///
/// `x` always re-centers the resolved width on the breakpoint's canvas,
/// desktop included. The alignment directive is passed through for the
/// renderer to justify content inside the box.
pub fn resolve_responsive(element: &Element, breakpoint: Breakpoint) -> ResolvedElement {
    let width = resolve_width(element, breakpoint);
    let height = resolve_height(element, breakpoint);
    let x = (canvas::canvas_width(breakpoint) - width) / 2.0;

    ResolvedElement {
        id: element.id.clone(),
        kind: element.kind(),
        x,
        y: element.position.y,
        width,
        height,
        font_size: resolve_font_size(element, breakpoint),
        padding: resolve_spacing(element, breakpoint, SpacingProperty::Padding),
        margin: resolve_spacing(element, breakpoint, SpacingProperty::Margin),
        alignment: element.style.alignment,
        content: element.content.clone(),
    }
}
