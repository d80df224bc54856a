//! Extraction from the named-style registry.

use crate::classify::{color_from, shadow_from, typography_from};
use crate::diagnostics::Diagnostics;
use crate::source::{StyleDefinition, StyleEntry};
use crate::types::Origin;

use super::bag::RawBag;

/// Turn named styles into tokens carrying the style's name.
///
/// FILL styles yield their first solid fill, TEXT styles one typography
/// token, EFFECT styles one shadow per shadow effect. Entries are visited
/// once each in registry order; nothing recurses.
pub fn extract_styles(styles: &[StyleEntry], diagnostics: &mut Diagnostics) -> RawBag {
    let mut bag = RawBag::new();

    for style in styles {
        let name = Some(style.name.as_str());

        match &style.definition {
            StyleDefinition::Fill(paints) => {
                let Some(color) = paints.iter().find_map(|p| p.solid_color()) else {
                    tracing::debug!(style = %style.id, "fill style has no solid paint");
                    continue;
                };
                let origin = Origin::style(format!("color-{}", style.id), &style.id);
                match color.and_then(|c| color_from(c, name, origin)) {
                    Some(mut token) => {
                        token.description = style.description.clone();
                        bag.colors.push(token);
                    }
                    None => diagnostics.malformed(&style.id, "fill style has no complete color"),
                }
            }
            StyleDefinition::Text(text) => {
                let origin = Origin::style(format!("typography-{}", style.id), &style.id);
                match typography_from(text, name, origin) {
                    Some(token) => bag.typography.push(token),
                    None => diagnostics
                        .malformed(&style.id, "text style lacks fontFamily or fontSize"),
                }
            }
            StyleDefinition::Effect(effects) => {
                for (index, effect) in effects.iter().enumerate() {
                    let Some((params, inset)) = effect.shadow() else {
                        continue;
                    };
                    let origin =
                        Origin::style(format!("shadow-{}-{}", style.id, index), &style.id);
                    match shadow_from(params, inset, name, origin) {
                        Some(token) => bag.shadows.push(token),
                        None => diagnostics.malformed(
                            &style.id,
                            format!("shadow effect {} lacks offset, radius or color", index),
                        ),
                    }
                }
            }
        }
    }

    bag
}
