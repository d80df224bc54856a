//! Paint, effect and text-style primitives as design tools store them.
//!
//! Each type deserializes with serde from one JSON entry. Entries that fail
//! to deserialize are dropped by the caller with a malformed-input
//! diagnostic, so every field a classifier may legitimately miss is optional.

use serde::Deserialize;

fn visible_by_default() -> bool {
    true
}

/// A colour with unit-interval channels. Channels may be missing in
/// malformed input; the colour classifier rejects those.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct RawColor {
    pub r: Option<f64>,
    pub g: Option<f64>,
    pub b: Option<f64>,
    pub a: Option<f64>,
}

impl RawColor {
    /// Fully specified opaque colour.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: Some(r),
            g: Some(g),
            b: Some(b),
            a: None,
        }
    }

    /// Fully specified colour with alpha.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            a: Some(a),
            ..Self::rgb(r, g, b)
        }
    }
}

/// A fill paint, one variant per paint kind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid {
        #[serde(default)]
        color: Option<RawColor>,
        #[serde(default = "visible_by_default")]
        visible: bool,
    },
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Emoji,
    Video,
    #[serde(other)]
    Unsupported,
}

impl Paint {
    /// The colour of a visible solid paint. `Some(None)` means a solid paint
    /// whose colour block is missing.
    pub fn solid_color(&self) -> Option<Option<&RawColor>> {
        match self {
            Paint::Solid { color, visible: true } => Some(color.as_ref()),
            _ => None,
        }
    }
}

/// A shadow offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Parameters shared by drop and inner shadows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShadowParams {
    #[serde(default)]
    pub offset: Option<Offset>,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub color: Option<RawColor>,
    #[serde(default)]
    pub spread: Option<f64>,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
}

/// A layer effect, one variant per effect kind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    DropShadow(ShadowParams),
    InnerShadow(ShadowParams),
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Unsupported,
}

impl Effect {
    /// Shadow parameters and whether the shadow is inset, for visible
    /// shadow effects only.
    pub fn shadow(&self) -> Option<(&ShadowParams, bool)> {
        match self {
            Effect::DropShadow(params) if params.visible => Some((params, false)),
            Effect::InnerShadow(params) if params.visible => Some((params, true)),
            _ => None,
        }
    }
}

/// A font weight as written by the source: numeric or named.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FontWeightSpec {
    Numeric(f64),
    Named(String),
}

/// The style block of a text node or TEXT style.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<FontWeightSpec>,
    pub font_style: Option<String>,
    pub line_height_px: Option<f64>,
    pub line_height: Option<f64>,
    pub line_height_percent_font_size: Option<f64>,
    pub letter_spacing: Option<f64>,
}
