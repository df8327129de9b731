//! # Pagecraft
//!
//! The layout core of a drag-and-drop page builder.
//!
//! Users stack typed elements (headings, text, buttons, media, spacers, raw
//! markup) on a canvas that has to look right at three fixed breakpoints.
//! The widgets are the easy part. The hard part is keeping one consistent
//! vertical flow while elements are added, resized, deleted and dragged
//! around, without ever trampling the overrides a user authored for tablet
//! or mobile.
//!
//! ## Architecture
//!
//! ```text
//! user action (add / resize / reorder / drag)
//!       ↓
//!   [store]    : ordered elements, one mutation at a time, returns a Reflow
//!       ↓
//!   [layout]   : full or spacer-aware partial reflow of y positions
//!       ↓
//!   [resolve]  : per-breakpoint size, x, font size, padding/margin
//!       ↓
//!   LayoutSnapshot (JSON) → renderer
//! ```
//!
//! [`drag`] sits beside the store and turns a pointer gesture into a store
//! mutation plus its reflow.

pub mod catalog;
pub mod config;
pub mod drag;
pub mod error;
pub mod layout;
pub mod model;
pub mod resolve;
pub mod store;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::EditorConfig;
pub use error::PagecraftError;
pub use layout::{LayoutEngine, LayoutSnapshot};
pub use model::{Breakpoint, Document};
pub use store::{ElementStore, Reflow};

/// Resolve a document for one breakpoint.
pub fn layout_document(document: &Document, breakpoint: Breakpoint, config: &EditorConfig) -> LayoutSnapshot {
    LayoutEngine::new(config.clone()).snapshot(document, breakpoint)
}

/// Resolve a document described as JSON and return the snapshot as JSON.
pub fn layout_json(json: &str, breakpoint: Breakpoint) -> Result<String, PagecraftError> {
    let document = Document::from_json(json)?;
    let snapshot = layout_document(&document, breakpoint, &EditorConfig::default());
    Ok(serde_json::to_string_pretty(&snapshot)?)
}
