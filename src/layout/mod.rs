//! # Flow Layout Engine
//!
//! Elements sit in a single vertical flow. The invariant the engine keeps is
//! simple:
//!
//! ```text
//! y[0] = top_offset
//! y[i] = y[i-1] + flow_height[i-1] + spacing.bottom[i-1]
//! ```
//!
//! where `flow_height` is the box height, or the declared gap for spacers.
//!
//! Mutations never reflow on their own. The store reports what kind of
//! reflow a mutation needs and the caller runs it as a separate step on the
//! latest state:
//!
//! - [`LayoutEngine::recalculate_positions`] is the full, idempotent reflow
//!   that restores the invariant after any structural change.
//! - [`spacer::reflow_below_spacer`] is the partial reflow used when only a
//!   spacer's height changed, so that elements above it stay put.
//!
//! `x` is not the engine's business: the alignment and responsive resolvers
//! own horizontal placement.

pub mod canvas;
pub mod spacer;

use serde::Serialize;

use crate::config::EditorConfig;
use crate::model::*;
use crate::resolve::{resolve_responsive, ResolvedElement};

pub use canvas::{canvas_size, canvas_width, CanvasSize};

/// The main layout engine.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: EditorConfig,
}

impl LayoutEngine {
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Full reflow: walk the list in order and stack each element below the
    /// previous one.
    pub fn recalculate_positions(&self, elements: &mut [Element]) {
        let mut offset = self.config.top_offset;
        for element in elements.iter_mut() {
            element.position.y = offset;
            offset += element.flow_height() + element.spacing.bottom;
        }
        tracing::trace!(count = elements.len(), bottom = offset, "full reflow");
    }

    /// `y` for an element appended after the current last one.
    pub fn next_flow_y(&self, elements: &[Element]) -> f64 {
        match elements.last() {
            Some(last) => last.flow_bottom() + self.config.add_gap,
            None => self.config.top_offset,
        }
    }

    /// Partial reflow after the spacer `spacer_id` changed height by `delta`.
    pub fn reflow_below_spacer(&self, elements: &mut [Element], spacer_id: &str, delta: f64) -> usize {
        spacer::reflow_below_spacer(
            elements,
            spacer_id,
            delta,
            self.config.spacer_gap,
            self.config.spacer_reflow,
        )
    }

    /// Do the positions satisfy the sequential-flow invariant?
    pub fn is_sequential(&self, elements: &[Element]) -> bool {
        let mut expected = self.config.top_offset;
        for element in elements {
            if (element.position.y - expected).abs() > 1e-6 {
                return false;
            }
            expected += element.flow_height() + element.spacing.bottom;
        }
        true
    }

    /// Capture everything a renderer needs for one breakpoint.
    pub fn snapshot(&self, document: &Document, breakpoint: Breakpoint) -> LayoutSnapshot {
        LayoutSnapshot {
            breakpoint,
            canvas: canvas_size(breakpoint, &document.elements, self.config.footer_slack),
            background: document.background.clone(),
            elements: sorted_elements(&document.elements)
                .into_iter()
                .map(|e| resolve_responsive(e, breakpoint))
                .collect(),
        }
    }
}

/// Elements ordered by `y`, ascending. Ties keep list order.
pub fn sorted_elements(elements: &[Element]) -> Vec<&Element> {
    let mut sorted: Vec<&Element> = elements.iter().collect();
    sorted.sort_by(|a, b| a.position.y.total_cmp(&b.position.y));
    sorted
}

/// Serializable render description of a document at one breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub breakpoint: Breakpoint,
    pub canvas: CanvasSize,
    pub background: Background,
    /// Resolved elements in `y` order.
    pub elements: Vec<ResolvedElement>,
}
