//! # Document Model
//!
//! The persisted representation of a page. A document is a flat, ordered list
//! of elements plus a background. Order is meaningful: it is the default
//! vertical flow and the z-order.
//!
//! Every element carries its desktop-authored values (the *baseline*) and an
//! optional override per breakpoint. The resolvers in [`crate::resolve`] decide
//! which of the two wins when a breakpoint is rendered.

pub mod content;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PagecraftError;

pub use content::*;

/// One of the three fixed canvas breakpoints.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile];

    /// Base canvas dimensions (width, height) in pixels.
    pub fn base_size(&self) -> (f64, f64) {
        match self {
            Breakpoint::Desktop => (1200.0, 800.0),
            Breakpoint::Tablet => (768.0, 600.0),
            Breakpoint::Mobile => (375.0, 667.0),
        }
    }

    /// Multiplier applied to baseline widths, heights and font sizes.
    pub fn scale_factor(&self) -> f64 {
        match self {
            Breakpoint::Desktop => 1.0,
            Breakpoint::Tablet => 0.8,
            Breakpoint::Mobile => 0.6,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Breakpoint::Desktop => "desktop",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Mobile => "mobile",
        }
    }
}

impl std::str::FromStr for Breakpoint {
    type Err = PagecraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "desktop" => Ok(Breakpoint::Desktop),
            "tablet" => Ok(Breakpoint::Tablet),
            "mobile" => Ok(Breakpoint::Mobile),
            other => Err(PagecraftError::Config(format!(
                "unknown breakpoint '{other}' (expected desktop, tablet or mobile)"
            ))),
        }
    }
}

/// A complete page ready for persistence or rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Elements in flow order.
    #[serde(default)]
    pub elements: Vec<Element>,

    #[serde(default)]
    pub background: Background,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, PagecraftError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PagecraftError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }
}

/// Page background descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    #[serde(rename = "type", default)]
    pub kind: BackgroundKind,
    /// Color value (e.g. "#ffffff") for color backgrounds.
    #[serde(default)]
    pub value: String,
    /// Media reference for image backgrounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            kind: BackgroundKind::Color,
            value: "#ffffff".to_string(),
            image: None,
            opacity: 1.0,
        }
    }
}

fn default_opacity() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    #[default]
    Color,
    Image,
}

/// Top-left canvas coordinates in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Vertical gap contributed by an element to the flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub bottom: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            top: 0.0,
            bottom: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    #[serde(default)]
    pub alignment: Alignment,
}

/// Partial position used inside a breakpoint override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Per-breakpoint override triple. Absent fields fall back to the baseline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PointOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeOverride>,
    #[serde(default)]
    pub content: BoxProps,
}

/// A positioned visual unit on the canvas.
///
/// Serialized with the kind tag under `type` and its payload under `content`,
/// side by side with the geometric fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawElement", into = "RawElement")]
pub struct Element {
    pub id: String,
    pub content: ElementContent,

    pub position: Point,
    pub size: Size,
    pub spacing: Spacing,
    pub style: ElementStyle,
    pub responsive: BTreeMap<Breakpoint, ResponsiveOverride>,
}

/// Wire shape of [`Element`]: the payload is kept untyped until the `type`
/// tag next to it has been read.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawElement {
    id: String,
    #[serde(rename = "type")]
    kind: ElementKind,
    #[serde(default)]
    content: serde_json::Value,
    #[serde(default)]
    position: Point,
    #[serde(default)]
    size: Size,
    #[serde(default)]
    spacing: Spacing,
    #[serde(default)]
    style: ElementStyle,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    responsive: BTreeMap<Breakpoint, ResponsiveOverride>,
}

impl TryFrom<RawElement> for Element {
    type Error = serde_json::Error;

    fn try_from(raw: RawElement) -> Result<Self, Self::Error> {
        Ok(Element {
            content: ElementContent::from_value(raw.kind, raw.content)?,
            id: raw.id,
            position: raw.position,
            size: raw.size,
            spacing: raw.spacing,
            style: raw.style,
            responsive: raw.responsive,
        })
    }
}

impl From<Element> for RawElement {
    fn from(el: Element) -> Self {
        RawElement {
            id: el.id,
            kind: el.content.kind(),
            content: el.content.to_value(),
            position: el.position,
            size: el.size,
            spacing: el.spacing,
            style: el.style,
            responsive: el.responsive,
        }
    }
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    pub fn is_spacer(&self) -> bool {
        matches!(self.content, ElementContent::Spacer(_))
    }

    /// Height this element occupies in the vertical flow. Spacers contribute
    /// their content-declared gap rather than their box height.
    pub fn flow_height(&self) -> f64 {
        match &self.content {
            ElementContent::Spacer(spacer) => spacer.height,
            _ => self.size.height,
        }
    }

    /// Bottom edge of the element in the flow, excluding its spacing.
    pub fn flow_bottom(&self) -> f64 {
        self.position.y + self.flow_height()
    }

    /// Override for a breakpoint. Desktop is the baseline and never has one.
    pub fn override_for(&self, breakpoint: Breakpoint) -> Option<&ResponsiveOverride> {
        match breakpoint {
            Breakpoint::Desktop => None,
            bp => self.responsive.get(&bp),
        }
    }
}

/// Typed partial update accepted by [`crate::store::ElementStore::update_element`].
///
/// Every field is optional. `responsive` entries replace the override of the
/// breakpoint they name and leave the others untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    #[serde(default)]
    pub content: Option<ElementContent>,
    #[serde(default)]
    pub position: Option<Point>,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub spacing: Option<Spacing>,
    #[serde(default)]
    pub style: Option<ElementStyle>,
    #[serde(default)]
    pub responsive: BTreeMap<Breakpoint, ResponsiveOverride>,
}
