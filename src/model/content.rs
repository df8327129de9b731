//! Kind-specific element payloads.
//!
//! `ElementContent` is a closed union over the eight element kinds. Each
//! payload shares a [`BoxProps`] block holding the keys that the responsive
//! and spacing resolvers read; breakpoint overrides carry the same block.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The closed tag set of element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Heading,
    Text,
    Button,
    Image,
    Video,
    Container,
    Spacer,
    Html,
}

impl ElementKind {
    pub const ALL: [ElementKind; 8] = [
        ElementKind::Heading,
        ElementKind::Text,
        ElementKind::Button,
        ElementKind::Image,
        ElementKind::Video,
        ElementKind::Container,
        ElementKind::Spacer,
        ElementKind::Html,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Heading => "heading",
            ElementKind::Text => "text",
            ElementKind::Button => "button",
            ElementKind::Image => "image",
            ElementKind::Video => "video",
            ElementKind::Container => "container",
            ElementKind::Spacer => "spacer",
            ElementKind::Html => "html",
        }
    }

    pub fn is_media(&self) -> bool {
        matches!(self, ElementKind::Image | ElementKind::Video)
    }
}

/// Optional value per side, used for padding and margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SideOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
}

impl SideOverrides {
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

/// Geometric and responsive keys shared by every payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxProps {
    /// Absolute width set by the user. Wins over the scaled baseline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "SideOverrides::is_empty")]
    pub padding: SideOverrides,
    #[serde(default, skip_serializing_if = "SideOverrides::is_empty")]
    pub margin: SideOverrides,
    /// Entrance animation id, opaque to the layout core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,
}

/// Named size bucket for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedSize {
    Small,
    Medium,
    Large,
}

impl NamedSize {
    /// (width, height) in pixels.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            NamedSize::Small => (120.0, 36.0),
            NamedSize::Medium => (200.0, 50.0),
            NamedSize::Large => (280.0, 64.0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingContent {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_heading_level")]
    pub level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub props: BoxProps,
}

fn default_heading_level() -> u8 {
    1
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub props: BoxProps,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonContent {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<NamedSize>,
    #[serde(flatten)]
    pub props: BoxProps,
}

/// Payload for image and video elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaContent {
    /// Media reference (URL or upload id), resolved by the host.
    #[serde(default)]
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(flatten)]
    pub props: BoxProps,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(flatten)]
    pub props: BoxProps,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacerContent {
    /// Vertical gap in pixels. This, not the box size, is what the flow uses.
    #[serde(default = "default_spacer_height")]
    pub height: f64,
    #[serde(flatten)]
    pub props: BoxProps,
}

impl Default for SpacerContent {
    fn default() -> Self {
        Self {
            height: default_spacer_height(),
            props: BoxProps::default(),
        }
    }
}

fn default_spacer_height() -> f64 {
    50.0
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlContent {
    #[serde(default)]
    pub markup: String,
    #[serde(flatten)]
    pub props: BoxProps,
}

/// Kind tag plus kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementContent {
    Heading(HeadingContent),
    Text(TextContent),
    Button(ButtonContent),
    Image(MediaContent),
    Video(MediaContent),
    Container(ContainerContent),
    Spacer(SpacerContent),
    Html(HtmlContent),
}

impl ElementContent {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementContent::Heading(_) => ElementKind::Heading,
            ElementContent::Text(_) => ElementKind::Text,
            ElementContent::Button(_) => ElementKind::Button,
            ElementContent::Image(_) => ElementKind::Image,
            ElementContent::Video(_) => ElementKind::Video,
            ElementContent::Container(_) => ElementKind::Container,
            ElementContent::Spacer(_) => ElementKind::Spacer,
            ElementContent::Html(_) => ElementKind::Html,
        }
    }

    pub fn props(&self) -> &BoxProps {
        match self {
            ElementContent::Heading(c) => &c.props,
            ElementContent::Text(c) => &c.props,
            ElementContent::Button(c) => &c.props,
            ElementContent::Image(c) | ElementContent::Video(c) => &c.props,
            ElementContent::Container(c) => &c.props,
            ElementContent::Spacer(c) => &c.props,
            ElementContent::Html(c) => &c.props,
        }
    }

    pub fn props_mut(&mut self) -> &mut BoxProps {
        match self {
            ElementContent::Heading(c) => &mut c.props,
            ElementContent::Text(c) => &mut c.props,
            ElementContent::Button(c) => &mut c.props,
            ElementContent::Image(c) | ElementContent::Video(c) => &mut c.props,
            ElementContent::Container(c) => &mut c.props,
            ElementContent::Spacer(c) => &mut c.props,
            ElementContent::Html(c) => &mut c.props,
        }
    }

    /// Decode a payload for a known kind. `null` decodes to the kind's defaults.
    pub fn from_value(kind: ElementKind, value: Value) -> Result<Self, serde_json::Error> {
        let value = match value {
            Value::Null => Value::Object(Default::default()),
            v => v,
        };
        Ok(match kind {
            ElementKind::Heading => ElementContent::Heading(serde_json::from_value(value)?),
            ElementKind::Text => ElementContent::Text(serde_json::from_value(value)?),
            ElementKind::Button => ElementContent::Button(serde_json::from_value(value)?),
            ElementKind::Image => ElementContent::Image(serde_json::from_value(value)?),
            ElementKind::Video => ElementContent::Video(serde_json::from_value(value)?),
            ElementKind::Container => ElementContent::Container(serde_json::from_value(value)?),
            ElementKind::Spacer => ElementContent::Spacer(serde_json::from_value(value)?),
            ElementKind::Html => ElementContent::Html(serde_json::from_value(value)?),
        })
    }

    pub fn to_value(&self) -> Value {
        let encoded = match self {
            ElementContent::Heading(c) => serde_json::to_value(c),
            ElementContent::Text(c) => serde_json::to_value(c),
            ElementContent::Button(c) => serde_json::to_value(c),
            ElementContent::Image(c) | ElementContent::Video(c) => serde_json::to_value(c),
            ElementContent::Container(c) => serde_json::to_value(c),
            ElementContent::Spacer(c) => serde_json::to_value(c),
            ElementContent::Html(c) => serde_json::to_value(c),
        };
        // Plain structs with string keys and finite numbers always encode.
        encoded.unwrap_or(Value::Null)
    }
}

/// Patches and documents both carry content in `{ "type", "content" }` form.
#[derive(Serialize, Deserialize)]
struct TaggedContent {
    #[serde(rename = "type")]
    kind: ElementKind,
    #[serde(default)]
    content: Value,
}

impl Serialize for ElementContent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TaggedContent {
            kind: self.kind(),
            content: self.to_value(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ElementContent {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tagged = TaggedContent::deserialize(deserializer)?;
        ElementContent::from_value(tagged.kind, tagged.content).map_err(serde::de::Error::custom)
    }
}
