//! # Spacer-Aware Partial Reflow
//!
//! When a spacer's height changes, only elements strictly below the spacer
//! move. The spacer and everything at or above its `y` keep their positions,
//! which leaves manual drag placement above the spacer intact.
//!
//! Two modes exist (see [`SpacerReflow`]). `Collapse` moves every element
//! below to the single slot `spacer.y + spacer.height + gap`, so they end up
//! stacked on the same `y`. That is the long-standing behavior and remains
//! the default. `Shift` is the corrected variant: it moves each of them by
//! the height delta and keeps their relative spacing.

use crate::config::SpacerReflow;
use crate::model::{Element, ElementContent};

/// Reflow below the spacer with id `spacer_id` after its height changed by
/// `delta`. Returns how many elements moved. Unknown id, or an id that is not
/// a spacer, moves nothing.
pub fn reflow_below_spacer(
    elements: &mut [Element],
    spacer_id: &str,
    delta: f64,
    gap: f64,
    mode: SpacerReflow,
) -> usize {
    let Some((spacer_y, spacer_height)) = elements.iter().find_map(|e| match &e.content {
        ElementContent::Spacer(s) if e.id == spacer_id => Some((e.position.y, s.height)),
        _ => None,
    }) else {
        tracing::debug!(spacer_id, "partial reflow skipped: no such spacer");
        return 0;
    };

    let target_y = spacer_y + spacer_height + gap;
    let mut moved = 0;
    for element in elements.iter_mut() {
        if element.id == spacer_id || element.position.y <= spacer_y {
            continue;
        }
        let new_y = match mode {
            SpacerReflow::Collapse => target_y,
            SpacerReflow::Shift => element.position.y + delta,
        };
        if new_y != element.position.y {
            element.position.y = new_y;
            moved += 1;
        }
    }
    tracing::debug!(spacer_id, delta, moved, ?mode, "partial reflow below spacer");
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use std::collections::BTreeMap;

    fn make(id: &str, content: ElementContent, y: f64, height: f64) -> Element {
        Element {
            id: id.to_string(),
            content,
            position: Point { x: 400.0, y },
            size: Size {
                width: 400.0,
                height,
            },
            spacing: Spacing::default(),
            style: ElementStyle::default(),
            responsive: BTreeMap::new(),
        }
    }

    fn spacer(id: &str, y: f64, height: f64) -> Element {
        make(
            id,
            ElementContent::Spacer(SpacerContent {
                height,
                ..Default::default()
            }),
            y,
            height,
        )
    }

    fn text(id: &str, y: f64) -> Element {
        make(id, ElementContent::Text(TextContent::default()), y, 80.0)
    }

    #[test]
    fn collapse_moves_everything_below_to_one_slot() {
        let mut elements = vec![text("above", 50.0), spacer("s", 200.0, 100.0), text("a", 270.0), text("b", 370.0)];
        let moved = reflow_below_spacer(&mut elements, "s", 50.0, 20.0, SpacerReflow::Collapse);
        assert_eq!(moved, 2);
        assert_eq!(elements[0].position.y, 50.0);
        assert_eq!(elements[1].position.y, 200.0);
        assert_eq!(elements[2].position.y, 320.0);
        assert_eq!(elements[3].position.y, 320.0);
    }

    #[test]
    fn shift_preserves_relative_spacing() {
        let mut elements = vec![spacer("s", 200.0, 100.0), text("a", 270.0), text("b", 370.0)];
        reflow_below_spacer(&mut elements, "s", 50.0, 20.0, SpacerReflow::Shift);
        assert_eq!(elements[1].position.y, 320.0);
        assert_eq!(elements[2].position.y, 420.0);
    }

    #[test]
    fn element_level_with_spacer_does_not_move() {
        let mut elements = vec![spacer("s", 200.0, 100.0), text("same", 200.0)];
        let moved = reflow_below_spacer(&mut elements, "s", 50.0, 20.0, SpacerReflow::Collapse);
        assert_eq!(moved, 0);
        assert_eq!(elements[1].position.y, 200.0);
    }

    #[test]
    fn missing_or_non_spacer_target_is_a_noop() {
        let mut elements = vec![text("t", 50.0), text("u", 150.0)];
        assert_eq!(reflow_below_spacer(&mut elements, "nope", 10.0, 20.0, SpacerReflow::Collapse), 0);
        assert_eq!(reflow_below_spacer(&mut elements, "t", 10.0, 20.0, SpacerReflow::Collapse), 0);
        assert_eq!(elements[1].position.y, 150.0);
    }
}
