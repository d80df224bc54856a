use std::fmt;

use serde::{Deserialize, Serialize};

use super::{format_number, Token, TokenCategory, TokenSource};

/// How a spacing value is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingUsage {
    Padding,
    Margin,
    Gap,
    Inset,
}

impl SpacingUsage {
    pub fn as_str(self) -> &'static str {
        match self {
            SpacingUsage::Padding => "padding",
            SpacingUsage::Margin => "margin",
            SpacingUsage::Gap => "gap",
            SpacingUsage::Inset => "inset",
        }
    }
}

impl fmt::Display for SpacingUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A spacing token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingToken {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub unit: String,
    /// Index of `value` among the distinct spacing values of the collection,
    /// ascending. Zero until canonicalization assigns it.
    pub scale: usize,
    pub usage: SpacingUsage,
    pub source: TokenSource,
}

impl SpacingToken {
    /// Value with its unit, e.g. `16px`.
    pub fn css(&self) -> String {
        format!("{}{}", format_number(self.value), self.unit)
    }
}

impl Token for SpacingToken {
    const CATEGORY: TokenCategory = TokenCategory::Spacing;

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
