use crate::source::{FontWeightSpec, TextStyle};
use crate::types::{format_number, LineHeight, Origin, TypographyToken, TypographyUsage};

use super::{KeywordTable, RuleTable};

const NAME_USAGE: KeywordTable<TypographyUsage> = KeywordTable(&[
    (&["heading", "title"], TypographyUsage::Heading),
    (&["body", "paragraph"], TypographyUsage::Body),
    (&["caption", "small"], TypographyUsage::Caption),
    (&["label", "tag"], TypographyUsage::Label),
    (&["display", "hero"], TypographyUsage::Display),
]);

const SIZE_USAGE: RuleTable<f64, TypographyUsage> = RuleTable(&[
    (|size: f64| size >= 24.0, TypographyUsage::Heading),
    (|size: f64| size >= 14.0, TypographyUsage::Body),
    (|size: f64| size >= 10.0, TypographyUsage::Caption),
]);

/// Named weights, compound names before the words they contain.
const NAMED_WEIGHTS: &[(&str, u16)] = &[
    ("thin", 100),
    ("hairline", 100),
    ("extralight", 200),
    ("ultralight", 200),
    ("semibold", 600),
    ("demibold", 600),
    ("extrabold", 800),
    ("ultrabold", 800),
    ("light", 300),
    ("regular", 400),
    ("normal", 400),
    ("book", 400),
    ("medium", 500),
    ("bold", 700),
    ("black", 900),
    ("heavy", 900),
];

const DEFAULT_WEIGHT: u16 = 400;

/// Build a typography token from a text style.
///
/// Returns `None` without a font family or a positive font size.
pub fn typography_from(
    style: &TextStyle,
    name: Option<&str>,
    origin: Origin,
) -> Option<TypographyToken> {
    let font_family = style
        .font_family
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())?;
    let font_size = style.font_size.filter(|s| s.is_finite() && *s > 0.0)?;

    Some(TypographyToken {
        id: origin.id,
        name: name
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} {}", font_family, format_number(font_size))),
        font_family: font_family.to_string(),
        font_size,
        line_height: line_height(style),
        font_weight: font_weight(style.font_weight.as_ref(), style.font_style.as_deref()),
        letter_spacing: style.letter_spacing.filter(|l| l.is_finite()),
        usage: typography_usage(font_size, name),
        source: origin.source,
    })
}

/// Classify a text style: by author-given name first, then by size.
pub fn typography_usage(font_size: f64, name: Option<&str>) -> TypographyUsage {
    name.and_then(|n| NAME_USAGE.classify(n))
        .or_else(|| SIZE_USAGE.classify(font_size))
        .unwrap_or(TypographyUsage::Body)
}

/// Normalize a font weight to its numeric form.
///
/// Numeric weights pass through (clamped to 1..=1000). Named weights go
/// through a fixed table; unknown names are 400. Without any weight, the
/// font style ("Bold Italic") is searched for a weight word.
pub fn font_weight(weight: Option<&FontWeightSpec>, font_style: Option<&str>) -> u16 {
    match weight {
        Some(FontWeightSpec::Numeric(n)) if n.is_finite() => n.round().clamp(1.0, 1000.0) as u16,
        Some(FontWeightSpec::Numeric(_)) => DEFAULT_WEIGHT,
        Some(FontWeightSpec::Named(name)) => {
            let name = normalize_weight_name(name);
            NAMED_WEIGHTS
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, w)| *w)
                .unwrap_or(DEFAULT_WEIGHT)
        }
        None => font_style
            .map(normalize_weight_name)
            .and_then(|style| {
                NAMED_WEIGHTS
                    .iter()
                    .find(|(n, _)| style.contains(n))
                    .map(|(_, w)| *w)
            })
            .unwrap_or(DEFAULT_WEIGHT),
    }
}

/// Resolve a line height: explicit pixels, then a unitless multiplier,
/// then the 1.5 default.
pub fn line_height(style: &TextStyle) -> LineHeight {
    let positive = |v: &f64| v.is_finite() && *v > 0.0;

    style
        .line_height_px
        .filter(positive)
        .map(LineHeight::Px)
        .or_else(|| style.line_height.filter(positive).map(LineHeight::Multiplier))
        .or_else(|| {
            style
                .line_height_percent_font_size
                .filter(positive)
                .map(|p| LineHeight::Multiplier(p / 100.0))
        })
        .unwrap_or(LineHeight::DEFAULT)
}

fn normalize_weight_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
