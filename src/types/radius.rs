use std::fmt;

use serde::{Deserialize, Serialize};

use super::{format_number, Token, TokenCategory, TokenSource};

/// Size class of a corner radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusUsage {
    Small,
    Medium,
    Large,
    Round,
    /// Capsule shapes. Not produced by the bucket table; kept so collections
    /// written by other tools still deserialize.
    Pill,
}

impl RadiusUsage {
    pub fn as_str(self) -> &'static str {
        match self {
            RadiusUsage::Small => "small",
            RadiusUsage::Medium => "medium",
            RadiusUsage::Large => "large",
            RadiusUsage::Round => "round",
            RadiusUsage::Pill => "pill",
        }
    }
}

impl fmt::Display for RadiusUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A border-radius token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderRadiusToken {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub usage: RadiusUsage,
    pub source: TokenSource,
}

impl BorderRadiusToken {
    /// Value with its unit, e.g. `8px`.
    pub fn css(&self) -> String {
        format!("{}{}", format_number(self.value), self.unit)
    }
}

impl Token for BorderRadiusToken {
    const CATEGORY: TokenCategory = TokenCategory::Radius;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn dedup_key(&self) -> String {
        self.css()
    }
}
