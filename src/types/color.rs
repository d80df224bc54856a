use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Rgba, Token, TokenCategory, TokenSource};

/// What a colour is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorUsage {
    Primary,
    Secondary,
    Accent,
    Neutral,
    Semantic,
}

impl ColorUsage {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorUsage::Primary => "primary",
            ColorUsage::Secondary => "secondary",
            ColorUsage::Accent => "accent",
            ColorUsage::Neutral => "neutral",
            ColorUsage::Semantic => "semantic",
        }
    }
}

impl fmt::Display for ColorUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A colour token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorToken {
    pub id: String,
    pub name: String,
    /// CSS value: hex when opaque, `rgba(...)` otherwise.
    pub value: String,
    pub rgb: Rgba,
    pub hex: String,
    pub usage: ColorUsage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: TokenSource,
}

impl Token for ColorToken {
    const CATEGORY: TokenCategory = TokenCategory::Color;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn dedup_key(&self) -> String {
        self.value.clone()
    }
}
