//! Horizontal placement from a left/center/right directive.

use crate::model::{Alignment, Element};

/// `x` for an element of `element_width` on a canvas of `canvas_width`.
pub fn aligned_x(canvas_width: f64, element_width: f64, alignment: Alignment, side_margin: f64) -> f64 {
    match alignment {
        Alignment::Left => side_margin,
        Alignment::Center => (canvas_width - element_width) / 2.0,
        Alignment::Right => canvas_width - element_width - side_margin,
    }
}

/// Set `position.x` and record the directive on the element. Idempotent.
///
/// A custom width takes the place of `size.width`, matching the width the
/// resolver renders.
pub fn apply_alignment(element: &mut Element, alignment: Alignment, canvas_width: f64, side_margin: f64) {
    let width = element.content.props().custom_width.unwrap_or(element.size.width);
    element.position.x = aligned_x(canvas_width, width, alignment, side_margin);
    element.style.alignment = alignment;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_on_desktop_canvas() {
        assert_eq!(aligned_x(1200.0, 400.0, Alignment::Left, 20.0), 20.0);
        assert_eq!(aligned_x(1200.0, 400.0, Alignment::Center, 20.0), 400.0);
        assert_eq!(aligned_x(1200.0, 400.0, Alignment::Right, 20.0), 780.0);
    }

    #[test]
    fn wide_element_centers_to_negative_x() {
        // Wider than the canvas: centered placement overhangs both edges.
        assert_eq!(aligned_x(375.0, 475.0, Alignment::Center, 20.0), -50.0);
    }
}
