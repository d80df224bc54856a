use std::fmt;

use serde::{Deserialize, Serialize};

use super::{format_number, Token, TokenCategory, TokenSource};

/// What a text style is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyUsage {
    Heading,
    Body,
    Caption,
    Label,
    Display,
}

impl TypographyUsage {
    pub fn as_str(self) -> &'static str {
        match self {
            TypographyUsage::Heading => "heading",
            TypographyUsage::Body => "body",
            TypographyUsage::Caption => "caption",
            TypographyUsage::Label => "label",
            TypographyUsage::Display => "display",
        }
    }
}

impl fmt::Display for TypographyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved line height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum LineHeight {
    /// Absolute height in pixels.
    Px(f64),
    /// Unitless multiple of the font size.
    Multiplier(f64),
}

impl LineHeight {
    /// Used when the source gives no line height at all.
    pub const DEFAULT: LineHeight = LineHeight::Multiplier(1.5);
}

impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineHeight::Px(px) => write!(f, "{}px", format_number(*px)),
            LineHeight::Multiplier(m) => write!(f, "{}", format_number(*m)),
        }
    }
}

/// A typography token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyToken {
    pub id: String,
    pub name: String,
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: f64,
    pub line_height: LineHeight,
    /// Numeric weight, 100..=900 for named weights.
    pub font_weight: u16,
    /// Letter spacing in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    pub usage: TypographyUsage,
    pub source: TokenSource,
}

impl Token for TypographyToken {
    const CATEGORY: TokenCategory = TokenCategory::Typography;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Typography has no single value; every resolved sub-field takes part.
    fn dedup_key(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.font_family,
            format_number(self.font_size),
            self.line_height,
            self.font_weight,
            self.letter_spacing.map(format_number).unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_height_display() {
        assert_eq!(LineHeight::Px(32.0).to_string(), "32px");
        assert_eq!(LineHeight::Multiplier(1.25).to_string(), "1.25");
        assert_eq!(LineHeight::DEFAULT.to_string(), "1.5");
    }

    #[test]
    fn test_line_height_serialization() {
        let json = serde_json::to_string(&LineHeight::Px(24.0)).unwrap();
        assert_eq!(json, r#"{"unit":"px","value":24.0}"#);
    }
}
