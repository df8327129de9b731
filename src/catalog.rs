//! # Default-Content Catalog
//!
//! What a freshly added element looks like: its payload, its baseline size
//! and the range its size is clamped to on later edits. Hosts with their own
//! catalog can implement [`Catalog`] and hand it to the store.

use crate::config::{EditorConfig, Range};
use crate::model::*;

/// Supplies default payloads and sizes for new elements.
pub trait Catalog {
    fn default_content(&self, kind: ElementKind) -> ElementContent;

    /// Baseline (width, height) before clamping to the canvas.
    fn default_size(&self, kind: ElementKind) -> (f64, f64);

    fn size_limits(&self, kind: ElementKind, config: &EditorConfig) -> SizeLimits {
        SizeLimits::for_kind(kind, config)
    }
}

/// Clamp ranges for an element's box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeLimits {
    pub width: Range,
    pub height: Range,
}

impl SizeLimits {
    /// Spacer heights follow the editor's `spacerRange`.
    pub fn for_kind(kind: ElementKind, config: &EditorConfig) -> Self {
        let width = Range::new(100.0, 1200.0);
        let height = match kind {
            ElementKind::Heading | ElementKind::Text | ElementKind::Button => {
                Range::new(20.0, 800.0)
            }
            ElementKind::Spacer => config.spacer_range,
            ElementKind::Image | ElementKind::Video | ElementKind::Container | ElementKind::Html => {
                Range::new(100.0, 800.0)
            }
        };
        Self { width, height }
    }

    pub fn clamp(&self, size: Size) -> Size {
        Size {
            width: self.width.clamp(size.width),
            height: self.height.clamp(size.height),
        }
    }
}

/// The catalog the editor ships with.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCatalog;

impl Catalog for DefaultCatalog {
    fn default_content(&self, kind: ElementKind) -> ElementContent {
        match kind {
            ElementKind::Heading => ElementContent::Heading(HeadingContent {
                text: "Your Heading Here".to_string(),
                level: 1,
                color: Some("#1a1a1a".to_string()),
                props: BoxProps {
                    font_size: Some(32.0),
                    ..Default::default()
                },
            }),
            ElementKind::Text => ElementContent::Text(TextContent {
                text: "Add your text here. Click to edit.".to_string(),
                color: Some("#4a4a4a".to_string()),
                props: BoxProps {
                    font_size: Some(16.0),
                    ..Default::default()
                },
            }),
            ElementKind::Button => ElementContent::Button(ButtonContent {
                label: "Click Me".to_string(),
                url: None,
                background_color: Some("#3b82f6".to_string()),
                color: Some("#ffffff".to_string()),
                size: Some(NamedSize::Medium),
                props: BoxProps {
                    font_size: Some(16.0),
                    ..Default::default()
                },
            }),
            ElementKind::Image => ElementContent::Image(MediaContent::default()),
            ElementKind::Video => ElementContent::Video(MediaContent::default()),
            ElementKind::Container => ElementContent::Container(ContainerContent {
                background_color: Some("#f3f4f6".to_string()),
                props: BoxProps::default(),
            }),
            ElementKind::Spacer => ElementContent::Spacer(SpacerContent::default()),
            ElementKind::Html => ElementContent::Html(HtmlContent {
                markup: "<div>Custom HTML</div>".to_string(),
                props: BoxProps::default(),
            }),
        }
    }

    fn default_size(&self, kind: ElementKind) -> (f64, f64) {
        match kind {
            ElementKind::Heading => (400.0, 60.0),
            ElementKind::Text => (400.0, 80.0),
            ElementKind::Button => NamedSize::Medium.dimensions(),
            ElementKind::Image | ElementKind::Video => (400.0, 300.0),
            ElementKind::Container => (600.0, 200.0),
            // Spacers span the canvas; the clamp below trims them to fit.
            ElementKind::Spacer => (f64::INFINITY, 50.0),
            ElementKind::Html => (400.0, 100.0),
        }
    }
}

/// Default size for `kind` on a canvas of the given width.
pub fn initial_size(
    catalog: &dyn Catalog,
    kind: ElementKind,
    canvas_width: f64,
    side_margin: f64,
) -> Size {
    let (width, height) = catalog.default_size(kind);
    let max_width = (canvas_width - 2.0 * side_margin).max(0.0);
    Size {
        width: width.min(max_width),
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fit_inside_their_limits() {
        let catalog = DefaultCatalog;
        for kind in ElementKind::ALL {
            let size = initial_size(&catalog, kind, 1200.0, 20.0);
            let limits = catalog.size_limits(kind, &EditorConfig::default());
            assert!(limits.height.contains(size.height), "{kind:?} height");
            assert!(size.width <= 1160.0, "{kind:?} width");
            assert_eq!(catalog.default_content(kind).kind(), kind);
        }
    }

    #[test]
    fn width_is_clamped_to_narrow_canvas() {
        let size = initial_size(&DefaultCatalog, ElementKind::Image, 375.0, 20.0);
        assert_eq!(size.width, 335.0);
        assert_eq!(size.height, 300.0);
        let spacer = initial_size(&DefaultCatalog, ElementKind::Spacer, 1200.0, 20.0);
        assert_eq!(spacer.width, 1160.0);
    }

    #[test]
    fn limits_clamp_rather_than_reject() {
        let limits = SizeLimits::for_kind(ElementKind::Image, &EditorConfig::default());
        let size = limits.clamp(Size {
            width: 5000.0,
            height: 10.0,
        });
        assert_eq!(size.width, 1200.0);
        assert_eq!(size.height, 100.0);
    }

    #[test]
    fn spacer_limits_follow_config() {
        let config = EditorConfig {
            spacer_range: Range::new(10.0, 120.0),
            ..Default::default()
        };
        let limits = DefaultCatalog.size_limits(ElementKind::Spacer, &config);
        assert_eq!(limits.height, config.spacer_range);
        let size = limits.clamp(Size {
            width: 1160.0,
            height: 400.0,
        });
        assert_eq!(size.height, 120.0);
    }
}
