//! Core token types for dtx.
//!
//! This module contains the canonical token model shared by the extractor
//! and every exporter:
//! - `Rgba` - resolved colour values
//! - `ColorToken`, `TypographyToken`, `SpacingToken`, `ShadowToken`,
//!   `BorderRadiusToken` - one typed token per design primitive
//! - `TokenCollection` - the frozen result of one extraction

mod collection;
mod color;
mod radius;
mod rgba;
mod shadow;
mod spacing;
mod typography;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use collection::{Metadata, TokenCollection, SCHEMA_VERSION};
pub use color::{ColorToken, ColorUsage};
pub use radius::{BorderRadiusToken, RadiusUsage};
pub use rgba::Rgba;
pub use shadow::{ShadowToken, ShadowUsage};
pub use spacing::{SpacingToken, SpacingUsage};
pub use typography::{LineHeight, TypographyToken, TypographyUsage};

/// Where a token was read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TokenSource {
    /// A property of a node in the document tree.
    #[serde(rename_all = "camelCase")]
    Node { node_id: String },
    /// An entry of the named-style registry.
    #[serde(rename_all = "camelCase")]
    Style { style_id: String },
}

/// Identity assigned to a token by whoever extracted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub id: String,
    pub source: TokenSource,
}

impl Origin {
    /// Origin of a token read from a node property.
    pub fn node(id: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: TokenSource::Node {
                node_id: node_id.into(),
            },
        }
    }

    /// Origin of a token read from a named style.
    pub fn style(id: impl Into<String>, style_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: TokenSource::Style {
                style_id: style_id.into(),
            },
        }
    }
}

/// The five token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Color,
    Typography,
    Spacing,
    Shadow,
    Radius,
}

impl TokenCategory {
    /// Name used in variable names (`--color-...`).
    pub fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Typography => "typography",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Shadow => "shadow",
            TokenCategory::Radius => "radius",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behaviour shared by all token kinds.
pub trait Token {
    const CATEGORY: TokenCategory;

    fn id(&self) -> &str;

    fn name(&self) -> &str;

    /// The resolved value two tokens must share to be duplicates.
    fn dedup_key(&self) -> String;
}

/// Round to the three decimals that exported values carry.
///
/// Negative zero comes back as zero.
pub fn round_value(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0 + 0.0
}

/// Format a number the way CSS expects: no trailing `.0`, at most three
/// decimals.
pub fn format_number(value: f64) -> String {
    format!("{}", round_value(value))
}
