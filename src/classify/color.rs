use crate::source::RawColor;
use crate::types::{ColorToken, ColorUsage, Origin, Rgba};

use super::{KeywordTable, RuleTable};

const NAME_USAGE: KeywordTable<ColorUsage> = KeywordTable(&[
    (&["primary"], ColorUsage::Primary),
    (&["secondary"], ColorUsage::Secondary),
    (&["accent"], ColorUsage::Accent),
    (&["error", "danger", "success", "warning"], ColorUsage::Semantic),
]);

const LUMINANCE_USAGE: RuleTable<f64, ColorUsage> =
    RuleTable(&[(|l: f64| l > 0.8 || l < 0.2, ColorUsage::Neutral)]);

const HUE_NAMES: RuleTable<(u8, u8, u8), &str> = RuleTable(&[
    (|(r, g, b): (u8, u8, u8)| r > g && r > b, "Red"),
    (|(r, g, b): (u8, u8, u8)| g > r && g > b, "Green"),
    (|(r, g, b): (u8, u8, u8)| b > r && b > g, "Blue"),
    (|(r, g, b): (u8, u8, u8)| r == g && r > b, "Yellow"),
    (|(r, g, b): (u8, u8, u8)| r == b && r > g, "Magenta"),
    (|(r, g, b): (u8, u8, u8)| g == b && g > r, "Cyan"),
]);

const GRAY_NAMES: RuleTable<f64, &str> = RuleTable(&[
    (|l: f64| l > 0.95, "White"),
    (|l: f64| l > 0.7, "Light Gray"),
    (|l: f64| l < 0.05, "Black"),
    (|l: f64| l < 0.3, "Dark Gray"),
]);

/// Build a colour token from unit-interval channels.
///
/// Returns `None` when any of r, g or b is missing. Alpha defaults to 1.
/// `name` is the author-given name, if any; without one a display name is
/// generated from the channels.
pub fn color_from(raw: &RawColor, name: Option<&str>, origin: Origin) -> Option<ColorToken> {
    let rgb = Rgba::from_unit(raw.r?, raw.g?, raw.b?, raw.a.unwrap_or(1.0));

    Some(ColorToken {
        id: origin.id,
        name: name
            .map(str::to_string)
            .unwrap_or_else(|| color_name(rgb).to_string()),
        value: rgb.css(),
        hex: rgb.hex(),
        rgb,
        usage: color_usage(rgb, name),
        description: None,
        source: origin.source,
    })
}

/// Classify a colour: by author-given name first, then by luminance.
pub fn color_usage(rgb: Rgba, name: Option<&str>) -> ColorUsage {
    name.and_then(|n| NAME_USAGE.classify(n))
        .or_else(|| LUMINANCE_USAGE.classify(rgb.luminance()))
        .unwrap_or(ColorUsage::Primary)
}

/// Display name for an unnamed colour.
///
/// A strictly dominant channel (or pair of equal channels) names a hue;
/// greys are bucketed by luminance.
pub fn color_name(rgb: Rgba) -> &'static str {
    HUE_NAMES
        .classify((rgb.r, rgb.g, rgb.b))
        .or_else(|| GRAY_NAMES.classify(rgb.luminance()))
        .unwrap_or("Gray")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Origin {
        Origin::node("color-1-0", "1")
    }

    #[test]
    fn test_white_without_name() {
        let token = color_from(&RawColor::rgba(1.0, 1.0, 1.0, 1.0), None, origin()).unwrap();
        assert_eq!(token.hex, "#ffffff");
        assert_eq!(token.value, "#ffffff");
        assert_eq!(token.usage, ColorUsage::Neutral);
        assert_eq!(token.name, "White");
    }

    #[test]
    fn test_translucent_value_is_rgba() {
        let token = color_from(&RawColor::rgba(1.0, 0.0, 0.0, 0.5), None, origin()).unwrap();
        assert_eq!(token.value, "rgba(255, 0, 0, 0.5)");
        assert_eq!(token.hex, "#ff0000");
        assert_eq!(token.rgb.a, 0.5);
    }

    #[test]
    fn test_missing_channel() {
        let raw = RawColor {
            r: Some(1.0),
            g: None,
            b: Some(0.0),
            a: None,
        };
        assert!(color_from(&raw, None, origin()).is_none());
    }

    #[test]
    fn test_name_usage_priority() {
        let mid = Rgba::rgb(100, 100, 100);
        assert_eq!(color_usage(mid, Some("Brand/Primary")), ColorUsage::Primary);
        assert_eq!(color_usage(mid, Some("Secondary 500")), ColorUsage::Secondary);
        assert_eq!(color_usage(mid, Some("accent")), ColorUsage::Accent);
        assert_eq!(color_usage(mid, Some("Danger/Base")), ColorUsage::Semantic);
        assert_eq!(color_usage(mid, Some("Success")), ColorUsage::Semantic);
    }

    #[test]
    fn test_unmatched_name_falls_back_to_luminance() {
        assert_eq!(color_usage(Rgba::BLACK, Some("Ink")), ColorUsage::Neutral);
        assert_eq!(color_usage(Rgba::rgb(200, 40, 40), Some("Brick")), ColorUsage::Primary);
    }

    #[test]
    fn test_luminance_usage() {
        assert_eq!(color_usage(Rgba::WHITE, None), ColorUsage::Neutral);
        assert_eq!(color_usage(Rgba::rgb(10, 10, 10), None), ColorUsage::Neutral);
        assert_eq!(color_usage(Rgba::rgb(30, 120, 220), None), ColorUsage::Primary);
    }

    #[test]
    fn test_hue_names() {
        assert_eq!(color_name(Rgba::rgb(200, 10, 10)), "Red");
        assert_eq!(color_name(Rgba::rgb(10, 200, 10)), "Green");
        assert_eq!(color_name(Rgba::rgb(10, 10, 200)), "Blue");
        assert_eq!(color_name(Rgba::rgb(200, 200, 10)), "Yellow");
        assert_eq!(color_name(Rgba::rgb(200, 10, 200)), "Magenta");
        assert_eq!(color_name(Rgba::rgb(10, 200, 200)), "Cyan");
    }

    #[test]
    fn test_gray_names() {
        assert_eq!(color_name(Rgba::WHITE), "White");
        assert_eq!(color_name(Rgba::rgb(210, 210, 210)), "Light Gray");
        assert_eq!(color_name(Rgba::rgb(128, 128, 128)), "Gray");
        assert_eq!(color_name(Rgba::rgb(40, 40, 40)), "Dark Gray");
        assert_eq!(color_name(Rgba::BLACK), "Black");
    }

    #[test]
    fn test_author_name_is_kept() {
        let token = color_from(&RawColor::rgb(0.0, 0.0, 1.0), Some("Link"), origin()).unwrap();
        assert_eq!(token.name, "Link");
    }
}
