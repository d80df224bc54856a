use crate::source::ShadowParams;
use crate::types::{format_number, Origin, Rgba, ShadowToken, ShadowUsage};

use super::KeywordTable;

const NAME_USAGE: KeywordTable<ShadowUsage> = KeywordTable(&[
    (&["focus"], ShadowUsage::Focus),
    (&["hover"], ShadowUsage::Hover),
    (&["pressed", "active"], ShadowUsage::Pressed),
]);

/// Build a shadow token from drop- or inner-shadow parameters.
///
/// Returns `None` without an offset, a blur radius, or a complete colour.
/// Spread defaults to 0.
pub fn shadow_from(
    params: &ShadowParams,
    inset: bool,
    name: Option<&str>,
    origin: Origin,
) -> Option<ShadowToken> {
    let offset = params.offset?;
    let blur = params.radius?;
    let raw = params.color?;
    let color = Rgba::from_unit(raw.r?, raw.g?, raw.b?, raw.a.unwrap_or(1.0));
    let spread = params.spread.unwrap_or(0.0);

    let value = format!(
        "{}{}px {}px {}px {}px {}",
        if inset { "inset " } else { "" },
        format_number(offset.x),
        format_number(offset.y),
        format_number(blur),
        format_number(spread),
        color.shadow_css()
    );

    let name = match name {
        Some(name) => name.to_string(),
        None if inset => format!("Inner Shadow {}", format_number(blur)),
        None => format!("Drop Shadow {}", format_number(blur)),
    };

    Some(ShadowToken {
        id: origin.id,
        usage: shadow_usage(&name),
        name,
        value,
        offset_x: offset.x,
        offset_y: offset.y,
        blur,
        spread,
        color,
        inset,
        source: origin.source,
    })
}

/// Classify a shadow by name; anything unrecognised is elevation.
pub fn shadow_usage(name: &str) -> ShadowUsage {
    NAME_USAGE.classify(name).unwrap_or(ShadowUsage::Elevation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Offset, RawColor};

    fn params() -> ShadowParams {
        ShadowParams {
            offset: Some(Offset { x: 0.0, y: 4.0 }),
            radius: Some(8.0),
            color: Some(RawColor::rgba(0.0, 0.0, 0.0, 0.25)),
            spread: None,
            visible: true,
        }
    }

    #[test]
    fn test_composed_value() {
        let token = shadow_from(&params(), false, None, Origin::node("shadow-1-0", "1")).unwrap();
        assert_eq!(token.value, "0px 4px 8px 0px rgba(0, 0, 0, 0.25)");
        assert_eq!(token.name, "Drop Shadow 8");
        assert_eq!(token.usage, ShadowUsage::Elevation);
    }

    #[test]
    fn test_opaque_color_uses_rgb() {
        let mut p = params();
        p.color = Some(RawColor::rgb(0.0, 0.0, 1.0));
        p.spread = Some(2.0);
        let token = shadow_from(&p, false, None, Origin::node("s", "1")).unwrap();
        assert_eq!(token.value, "0px 4px 8px 2px rgb(0, 0, 255)");
    }

    #[test]
    fn test_inner_shadow_is_inset() {
        let token = shadow_from(&params(), true, None, Origin::node("s", "1")).unwrap();
        assert!(token.inset);
        assert_eq!(token.value, "inset 0px 4px 8px 0px rgba(0, 0, 0, 0.25)");
        assert_eq!(token.name, "Inner Shadow 8");
    }

    #[test]
    fn test_missing_fields() {
        let mut p = params();
        p.color = None;
        assert!(shadow_from(&p, false, None, Origin::node("s", "1")).is_none());

        let mut p = params();
        p.radius = None;
        assert!(shadow_from(&p, false, None, Origin::node("s", "1")).is_none());
    }

    #[test]
    fn test_usage_by_name() {
        assert_eq!(shadow_usage("Focus Ring"), ShadowUsage::Focus);
        assert_eq!(shadow_usage("Button/Hover"), ShadowUsage::Hover);
        assert_eq!(shadow_usage("Pressed"), ShadowUsage::Pressed);
        assert_eq!(shadow_usage("Active tab"), ShadowUsage::Pressed);
        assert_eq!(shadow_usage("Card"), ShadowUsage::Elevation);
    }
}
