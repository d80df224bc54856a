use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Rgba, Token, TokenCategory, TokenSource};

/// Interaction state a shadow represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowUsage {
    Elevation,
    Focus,
    Hover,
    Pressed,
}

impl ShadowUsage {
    pub fn as_str(self) -> &'static str {
        match self {
            ShadowUsage::Elevation => "elevation",
            ShadowUsage::Focus => "focus",
            ShadowUsage::Hover => "hover",
            ShadowUsage::Pressed => "pressed",
        }
    }
}

impl fmt::Display for ShadowUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shadow token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowToken {
    pub id: String,
    pub name: String,
    /// Composed CSS `box-shadow` value.
    pub value: String,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: Rgba,
    /// Inner shadow.
    #[serde(default)]
    pub inset: bool,
    pub usage: ShadowUsage,
    pub source: TokenSource,
}

impl Token for ShadowToken {
    const CATEGORY: TokenCategory = TokenCategory::Shadow;

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
