//! # Element Store
//!
//! The single source of truth for a page: the ordered element list, the
//! background and the editor state that goes with them (selection, active
//! breakpoint, spacing link toggles).
//!
//! All mutation goes through the methods here. Each one applies exactly one
//! change and returns a [`Reflow`] describing the follow-up the flow needs.
//! Nothing reflows implicitly; callers pass the value to
//! [`ElementStore::reflow`] as a separate step. Taking `&mut self` serializes
//! writes, so a mutation and its reflow can never interleave with another
//! mutation.
//!
//! Operations on an unknown id are no-ops. Out-of-range numbers are clamped.

use std::collections::HashSet;

use crate::catalog::{initial_size, Catalog, DefaultCatalog};
use crate::config::EditorConfig;
use crate::layout::{canvas_size, canvas_width, sorted_elements, CanvasSize, LayoutEngine, LayoutSnapshot};
use crate::model::*;
use crate::resolve::{
    aligned_x, apply_alignment, resolve_responsive, resolve_spacing, write_spacing, ResolvedElement, Side,
    Sides, SpacingLinks, SpacingProperty,
};

/// Follow-up a mutation requires to restore the flow invariant.
#[derive(Debug, Clone, PartialEq)]
pub enum Reflow {
    /// Positions are still consistent.
    None,
    /// Run the full reflow.
    Full,
    /// A spacer changed height by `delta`; shift what lies below it.
    BelowSpacer { spacer_id: String, delta: f64 },
}

impl Reflow {
    pub fn is_needed(&self) -> bool {
        !matches!(self, Reflow::None)
    }
}

pub struct ElementStore {
    document: Document,
    version: u64,
    selection: Option<String>,
    breakpoint: Breakpoint,
    links: SpacingLinks,
    engine: LayoutEngine,
    catalog: Box<dyn Catalog>,
}

impl Default for ElementStore {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl ElementStore {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_document(Document::new(), config)
    }

    /// Wrap a loaded document. Duplicate ids get fresh ones so that ids stay
    /// unique.
    pub fn with_document(mut document: Document, config: EditorConfig) -> Self {
        let mut seen = HashSet::new();
        for element in &mut document.elements {
            if !seen.insert(element.id.clone()) {
                let fresh = new_id();
                tracing::warn!(old = %element.id, new = %fresh, "duplicate element id reassigned");
                element.id = fresh.clone();
                seen.insert(fresh);
            }
        }
        Self {
            document,
            version: 0,
            selection: None,
            breakpoint: Breakpoint::Desktop,
            links: SpacingLinks::default(),
            engine: LayoutEngine::new(config),
            catalog: Box::new(DefaultCatalog),
        }
    }

    /// Replace the default-content catalog.
    pub fn with_catalog(mut self, catalog: impl Catalog + 'static) -> Self {
        self.catalog = Box::new(catalog);
        self
    }

    // ── Accessors ──────────────────────────────────────────────

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn elements(&self) -> &[Element] {
        &self.document.elements
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.document.find(id)
    }

    /// Bumped once per effective mutation or reflow.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Select an element. Unknown ids clear the selection.
    pub fn select(&mut self, id: Option<&str>) {
        self.selection = id.filter(|id| self.document.find(id).is_some()).map(str::to_string);
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.breakpoint = breakpoint;
    }

    pub fn config(&self) -> &EditorConfig {
        self.engine.config()
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn links(&self) -> SpacingLinks {
        self.links
    }

    pub fn toggle_link(&mut self, property: SpacingProperty) -> bool {
        self.links.toggle(property)
    }

    pub fn set_background(&mut self, background: Background) {
        self.document.background = background;
        self.bump();
    }

    fn bump(&mut self) {
        self.version += 1;
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.document.elements.iter_mut().find(|e| e.id == id)
    }

    // ── Mutations ──────────────────────────────────────────────

    /// Append a new element of `kind` and select it.
    ///
    /// Size comes from the catalog, clamped to the active canvas. `x`
    /// defaults to centered, `y` to just below the current last element.
    pub fn add_element(&mut self, kind: ElementKind, x: Option<f64>, y: Option<f64>) -> Element {
        let config = self.engine.config();
        let width = canvas_width(self.breakpoint);
        let size = initial_size(self.catalog.as_ref(), kind, width, config.side_margin);
        let position = Point {
            x: x
                .filter(|x| x.is_finite())
                .unwrap_or_else(|| aligned_x(width, size.width, Alignment::Center, config.side_margin)),
            y: y
                .filter(|y| y.is_finite())
                .unwrap_or_else(|| self.engine.next_flow_y(&self.document.elements)),
        };

        let element = Element {
            id: new_id(),
            content: self.catalog.default_content(kind),
            position,
            size,
            spacing: Spacing {
                top: 0.0,
                bottom: config.add_gap,
            },
            style: ElementStyle {
                alignment: Alignment::Center,
            },
            responsive: Default::default(),
        };
        tracing::debug!(id = %element.id, kind = kind.name(), y = position.y, "element added");

        self.selection = Some(element.id.clone());
        self.document.elements.push(element.clone());
        self.bump();
        element
    }

    /// Merge `patch` into the element `id`. Unknown ids are ignored.
    ///
    /// A patch that changes spacing, or the height of a non-spacer, asks for
    /// a full reflow. One that only changes a spacer's declared height, via
    /// its content or its size, asks for the partial reflow. Non-finite
    /// position components are dropped.
    pub fn update_element(&mut self, id: &str, patch: ElementPatch) -> Reflow {
        let config = self.engine.config().clone();
        let Some(limits) = self.document.find(id).map(|e| self.catalog.size_limits(e.kind(), &config)) else {
            tracing::debug!(id, "update ignored: unknown id");
            return Reflow::None;
        };
        let Some(element) = self.find_mut(id) else {
            return Reflow::None;
        };

        let old_spacer_height = match &element.content {
            ElementContent::Spacer(s) => Some(s.height),
            _ => None,
        };
        let old_height = element.size.height;
        let spacing_touched = patch.spacing.is_some();

        if let Some(mut content) = patch.content {
            if content.kind() != element.kind() {
                tracing::debug!(id, from = element.kind().name(), to = content.kind().name(), "content kind change ignored");
            } else {
                match &mut content {
                    ElementContent::Spacer(spacer) => {
                        spacer.height = config.spacer_range.clamp(spacer.height);
                        element.size.height = spacer.height;
                    }
                    ElementContent::Button(ButtonContent {
                        size: Some(bucket), ..
                    }) => {
                        let (width, height) = bucket.dimensions();
                        element.size = Size { width, height };
                    }
                    _ => {}
                }
                element.content = content;
            }
        }
        if let Some(size) = patch.size {
            element.size = limits.clamp(size);
            match &mut element.content {
                ElementContent::Spacer(spacer) => spacer.height = element.size.height,
                // An explicit size replaces the named bucket as the baseline.
                ElementContent::Button(button) => button.size = None,
                _ => {}
            }
        }
        if let Some(spacing) = patch.spacing {
            element.spacing = Spacing {
                top: config.spacing_range.clamp(spacing.top),
                bottom: config.spacing_range.clamp(spacing.bottom),
            };
        }
        if let Some(position) = patch.position {
            if position.x.is_finite() {
                element.position.x = position.x;
            }
            if position.y.is_finite() {
                element.position.y = position.y;
            }
        }
        if let Some(style) = patch.style {
            element.style = style;
        }
        for (bp, over) in patch.responsive {
            if bp == Breakpoint::Desktop {
                tracing::debug!(id, "desktop override ignored: desktop is the baseline");
                continue;
            }
            element.responsive.insert(bp, over);
        }

        let new_spacer_height = match &element.content {
            ElementContent::Spacer(s) => Some(s.height),
            _ => None,
        };
        let box_height_changed = new_spacer_height.is_none() && element.size.height != old_height;
        self.bump();

        match (old_spacer_height, new_spacer_height) {
            _ if spacing_touched || box_height_changed => Reflow::Full,
            (Some(old), Some(new)) if old != new => Reflow::BelowSpacer {
                spacer_id: id.to_string(),
                delta: new - old,
            },
            _ => Reflow::None,
        }
    }

    /// Remove the element `id`. The gap stays until the returned reflow runs.
    pub fn delete_element(&mut self, id: &str) -> Reflow {
        let Some(index) = self.document.index_of(id) else {
            tracing::debug!(id, "delete ignored: unknown id");
            return Reflow::None;
        };
        self.document.elements.remove(index);
        if self.selection.as_deref() == Some(id) {
            self.selection = None;
        }
        tracing::debug!(id, index, "element deleted");
        self.bump();
        Reflow::Full
    }

    /// Move the element `id` to `new_index` in the flow order. The index is
    /// clamped to the list.
    pub fn reorder_element(&mut self, id: &str, new_index: usize) -> Reflow {
        let Some(from) = self.document.index_of(id) else {
            tracing::debug!(id, "reorder ignored: unknown id");
            return Reflow::None;
        };
        let to = new_index.min(self.document.elements.len() - 1);
        if from == to {
            return Reflow::None;
        }
        let element = self.document.elements.remove(from);
        self.document.elements.insert(to, element);
        tracing::debug!(id, from, to, "element reordered");
        self.bump();
        Reflow::Full
    }

    /// Copy the element `id` with a fresh id, right after the original.
    pub fn duplicate_element(&mut self, id: &str) -> Option<(Element, Reflow)> {
        let index = self.document.index_of(id)?;
        let mut copy = self.document.elements[index].clone();
        copy.id = new_id();
        self.document.elements.insert(index + 1, copy.clone());
        self.selection = Some(copy.id.clone());
        tracing::debug!(source = id, id = %copy.id, "element duplicated");
        self.bump();
        Some((copy, Reflow::Full))
    }

    /// Set a spacer's declared gap. Non-spacers and unknown ids are ignored.
    pub fn set_spacer_height(&mut self, id: &str, height: f64) -> Reflow {
        let height = self.engine.config().spacer_range.clamp(height);
        let Some(element) = self.find_mut(id) else {
            tracing::debug!(id, "spacer height ignored: unknown id");
            return Reflow::None;
        };
        let ElementContent::Spacer(spacer) = &mut element.content else {
            tracing::debug!(id, "spacer height ignored: not a spacer");
            return Reflow::None;
        };
        let delta = height - spacer.height;
        if delta == 0.0 {
            return Reflow::None;
        }
        spacer.height = height;
        element.size.height = height;
        self.bump();
        Reflow::BelowSpacer {
            spacer_id: id.to_string(),
            delta,
        }
    }

    /// Align the element `id` on the active breakpoint's canvas.
    pub fn apply_alignment(&mut self, id: &str, alignment: Alignment) -> Reflow {
        let width = canvas_width(self.breakpoint);
        let margin = self.engine.config().side_margin;
        let Some(element) = self.find_mut(id) else {
            tracing::debug!(id, "alignment ignored: unknown id");
            return Reflow::None;
        };
        apply_alignment(element, alignment, width, margin);
        self.bump();
        Reflow::None
    }

    /// Edit one side of padding or margin on the active breakpoint. When the
    /// property is linked, all four sides take the value.
    pub fn set_spacing(&mut self, id: &str, property: SpacingProperty, side: Side, value: f64) -> Reflow {
        let value = self.engine.config().spacing_range.clamp(value);
        let linked = self.links.is_linked(property);
        let breakpoint = self.breakpoint;
        let Some(element) = self.find_mut(id) else {
            tracing::debug!(id, "spacing ignored: unknown id");
            return Reflow::None;
        };
        write_spacing(element, breakpoint, property, side, value, linked);
        self.bump();
        Reflow::None
    }

    /// Place the element `id` at an explicit `y`, outside the sequential flow.
    /// Non-finite values are ignored.
    pub fn move_element_to(&mut self, id: &str, y: f64) -> Reflow {
        if !y.is_finite() {
            tracing::debug!(id, y, "move ignored: non-finite y");
            return Reflow::None;
        }
        let Some(element) = self.find_mut(id) else {
            return Reflow::None;
        };
        element.position.y = y;
        self.bump();
        Reflow::None
    }

    // ── Reflow ─────────────────────────────────────────────────

    /// Full reflow of the whole list.
    pub fn recalculate_positions(&mut self) {
        self.engine.recalculate_positions(&mut self.document.elements);
        self.bump();
    }

    /// Run the follow-up a mutation asked for.
    pub fn reflow(&mut self, reflow: Reflow) {
        match reflow {
            Reflow::None => {}
            Reflow::Full => self.recalculate_positions(),
            Reflow::BelowSpacer { spacer_id, delta } => {
                self.engine
                    .reflow_below_spacer(&mut self.document.elements, &spacer_id, delta);
                self.bump();
            }
        }
    }

    // ── Queries ────────────────────────────────────────────────

    pub fn sorted_elements(&self) -> Vec<&Element> {
        sorted_elements(&self.document.elements)
    }

    pub fn canvas_size(&self, breakpoint: Breakpoint) -> CanvasSize {
        canvas_size(breakpoint, &self.document.elements, self.engine.config().footer_slack)
    }

    pub fn resolve(&self, id: &str, breakpoint: Breakpoint) -> Option<ResolvedElement> {
        self.document.find(id).map(|e| resolve_responsive(e, breakpoint))
    }

    pub fn resolve_spacing(&self, id: &str, breakpoint: Breakpoint, property: SpacingProperty) -> Option<Sides> {
        self.document.find(id).map(|e| resolve_spacing(e, breakpoint, property))
    }

    pub fn snapshot(&self, breakpoint: Breakpoint) -> LayoutSnapshot {
        self.engine.snapshot(&self.document, breakpoint)
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
