//! # Drag-to-Reorder
//!
//! Turns a continuous pointer drag into at most one discrete step in the
//! flow order.
//!
//! ```text
//! Idle --pointer_down--> Dragging --pointer_up--> Idle
//! ```
//!
//! While dragging, the pointer offset is only visual feedback. On release
//! the offset must exceed half a drag unit to count. The candidate slot is
//! one position up or down from the current index. If that slot holds a
//! spacer the element is snapped directly below the spacer and the list
//! order is left alone; otherwise the element is spliced into the slot and
//! the full reflow runs.

use crate::store::{ElementStore, Reflow};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        id: String,
        start_y: f64,
        last_y: f64,
    },
}

/// What a released drag did to the document.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Below threshold, at a list boundary, or the element vanished.
    NoChange,
    /// The element moved from one list index to another and the flow was
    /// rebuilt.
    Reordered { id: String, from: usize, to: usize },
    /// The element was placed under a spacer without changing list order.
    SnappedBelowSpacer { id: String, spacer_id: String, y: f64 },
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Start dragging `id`. Ignored while another drag is in progress.
    pub fn pointer_down(&mut self, id: &str, pointer_y: f64) {
        if let DragState::Dragging { id: current, .. } = &self.state {
            tracing::debug!(current = %current, ignored = id, "pointer down during drag ignored");
            return;
        }
        self.state = DragState::Dragging {
            id: id.to_string(),
            start_y: pointer_y,
            last_y: pointer_y,
        };
    }

    /// Track the pointer and return the live offset, if dragging.
    pub fn pointer_move(&mut self, pointer_y: f64) -> Option<f64> {
        match &mut self.state {
            DragState::Dragging { start_y, last_y, .. } => {
                *last_y = pointer_y;
                Some(pointer_y - *start_y)
            }
            DragState::Idle => None,
        }
    }

    /// Current offset from the drag start, for visual feedback.
    pub fn offset(&self) -> Option<f64> {
        match &self.state {
            DragState::Dragging { start_y, last_y, .. } => Some(last_y - start_y),
            DragState::Idle => None,
        }
    }

    /// Release the pointer and apply the drop. `None` means the pointer-up
    /// was lost; the drop then happens at the last known offset.
    pub fn pointer_up(&mut self, pointer_y: Option<f64>, store: &mut ElementStore) -> DragOutcome {
        let DragState::Dragging { id, start_y, last_y } = std::mem::take(&mut self.state) else {
            return DragOutcome::NoChange;
        };
        let offset = pointer_y.unwrap_or(last_y) - start_y;
        let threshold = store.config().drag_threshold();
        if offset.abs() <= threshold {
            tracing::trace!(id = %id, offset, "drag below threshold");
            return DragOutcome::NoChange;
        }

        let Some(from) = store.document().index_of(&id) else {
            tracing::debug!(id = %id, "drop ignored: element no longer exists");
            return DragOutcome::NoChange;
        };
        let last = store.elements().len() - 1;
        let to = if offset > 0.0 {
            (from + 1).min(last)
        } else {
            from.saturating_sub(1)
        };
        if to == from {
            return DragOutcome::NoChange;
        }

        let target = &store.elements()[to];
        if target.is_spacer() {
            let spacer_id = target.id.clone();
            let y = target.flow_bottom() + store.config().spacer_gap;
            store.move_element_to(&id, y);
            tracing::debug!(id = %id, spacer_id = %spacer_id, y, "drop snapped below spacer");
            return DragOutcome::SnappedBelowSpacer { id, spacer_id, y };
        }

        let reflow = store.reorder_element(&id, to);
        debug_assert_eq!(reflow, Reflow::Full);
        store.reflow(reflow);
        DragOutcome::Reordered { id, from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;

    fn three_texts() -> (ElementStore, Vec<String>) {
        let mut store = ElementStore::default();
        let ids = (0..3)
            .map(|_| store.add_element(ElementKind::Text, None, None).id)
            .collect();
        (store, ids)
    }

    fn order(store: &ElementStore) -> Vec<String> {
        store.elements().iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn move_reports_offset_without_changing_document() {
        let (mut store, ids) = three_texts();
        let mut drag = DragController::new();
        assert_eq!(drag.pointer_move(10.0), None);
        drag.pointer_down(&ids[0], 100.0);
        assert_eq!(drag.pointer_move(180.0), Some(80.0));
        assert_eq!(drag.offset(), Some(80.0));
        assert_eq!(order(&store), ids);
        drag.pointer_up(Some(100.0), &mut store);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn small_drag_is_not_a_reorder() {
        let (mut store, ids) = three_texts();
        let mut drag = DragController::new();
        drag.pointer_down(&ids[1], 300.0);
        assert_eq!(drag.pointer_up(Some(350.0), &mut store), DragOutcome::NoChange);
        assert_eq!(order(&store), ids);
    }

    #[test]
    fn drag_down_swaps_with_next_and_reflows() {
        let (mut store, ids) = three_texts();
        let mut drag = DragController::new();
        drag.pointer_down(&ids[0], 60.0);
        let outcome = drag.pointer_up(Some(200.0), &mut store);
        assert_eq!(
            outcome,
            DragOutcome::Reordered {
                id: ids[0].clone(),
                from: 0,
                to: 1
            }
        );
        assert_eq!(order(&store), vec![ids[1].clone(), ids[0].clone(), ids[2].clone()]);
        assert!(store.engine().is_sequential(store.elements()));
    }

    #[test]
    fn drag_up_at_top_is_clamped_to_no_change() {
        let (mut store, ids) = three_texts();
        let mut drag = DragController::new();
        drag.pointer_down(&ids[0], 400.0);
        assert_eq!(drag.pointer_up(Some(100.0), &mut store), DragOutcome::NoChange);
        assert_eq!(order(&store), ids);
    }

    #[test]
    fn lost_pointer_up_drops_at_last_offset() {
        let (mut store, ids) = three_texts();
        let mut drag = DragController::new();
        drag.pointer_down(&ids[2], 400.0);
        drag.pointer_move(250.0);
        let outcome = drag.pointer_up(None, &mut store);
        assert_eq!(
            outcome,
            DragOutcome::Reordered {
                id: ids[2].clone(),
                from: 2,
                to: 1
            }
        );
    }

    #[test]
    fn dropping_onto_spacer_snaps_without_reordering() {
        let mut store = ElementStore::default();
        let text = store.add_element(ElementKind::Text, None, None);
        let spacer = store.add_element(ElementKind::Spacer, None, None);
        let before = order(&store);

        let mut drag = DragController::new();
        drag.pointer_down(&text.id, 50.0);
        let outcome = drag.pointer_up(Some(200.0), &mut store);

        // spacer at 150, declared height 50, gap 20
        assert_eq!(
            outcome,
            DragOutcome::SnappedBelowSpacer {
                id: text.id.clone(),
                spacer_id: spacer.id.clone(),
                y: 220.0
            }
        );
        assert_eq!(order(&store), before);
        assert_eq!(store.get(&text.id).unwrap().position.y, 220.0);
    }

    #[test]
    fn second_pointer_down_is_ignored() {
        let (_, ids) = three_texts();
        let mut drag = DragController::new();
        drag.pointer_down(&ids[0], 10.0);
        drag.pointer_down(&ids[1], 99.0);
        match drag.state() {
            DragState::Dragging { id, start_y, .. } => {
                assert_eq!(id, &ids[0]);
                assert_eq!(*start_y, 10.0);
            }
            DragState::Idle => panic!("expected dragging"),
        }
    }

    #[test]
    fn deleted_element_drop_is_noop() {
        let (mut store, ids) = three_texts();
        let mut drag = DragController::new();
        drag.pointer_down(&ids[0], 0.0);
        store.delete_element(&ids[0]);
        assert_eq!(drag.pointer_up(Some(500.0), &mut store), DragOutcome::NoChange);
    }
}
