//! Named style registry entries.

use super::paint::{Effect, Paint, TextStyle};

/// The style types that carry token data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleType {
    Fill,
    Text,
    Effect,
}

impl StyleType {
    /// Parse a `styleType` string. Grid and other style types return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "FILL" => Some(StyleType::Fill),
            "TEXT" => Some(StyleType::Text),
            "EFFECT" => Some(StyleType::Effect),
            _ => None,
        }
    }
}

/// The resolved definition of a style, one variant per style type.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleDefinition {
    Fill(Vec<Paint>),
    Text(TextStyle),
    Effect(Vec<Effect>),
}

impl StyleDefinition {
    pub fn style_type(&self) -> StyleType {
        match self {
            StyleDefinition::Fill(_) => StyleType::Fill,
            StyleDefinition::Text(_) => StyleType::Text,
            StyleDefinition::Effect(_) => StyleType::Effect,
        }
    }
}

/// A named, reusable style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleEntry {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub definition: StyleDefinition,
}

impl StyleEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, definition: StyleDefinition) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            definition,
        }
    }
}
