//! # Canvas Sizing
//!
//! Canvas width is fixed per breakpoint. Height starts at the breakpoint's
//! base and grows so the lowest element (plus its bottom spacing and some
//! footer slack) always fits.

use serde::Serialize;

use crate::model::{Breakpoint, Element};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

pub fn canvas_width(breakpoint: Breakpoint) -> f64 {
    breakpoint.base_size().0
}

/// Lowest `y + height + spacing.bottom` over all elements, if any.
pub fn content_bottom(elements: &[Element]) -> Option<f64> {
    elements
        .iter()
        .map(|e| e.position.y + e.size.height + e.spacing.bottom)
        .reduce(f64::max)
}

/// Canvas size for `breakpoint` given the current elements.
pub fn canvas_size(breakpoint: Breakpoint, elements: &[Element], footer_slack: f64) -> CanvasSize {
    let (width, base_height) = breakpoint.base_size();
    let height = match content_bottom(elements) {
        Some(bottom) => base_height.max(bottom + footer_slack),
        None => base_height,
    };
    CanvasSize { width, height }
}
