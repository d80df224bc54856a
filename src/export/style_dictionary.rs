//! Style Dictionary source JSON.
//!
//! Colors, font sizes and spacing only; shadows and radii have no entry in
//! this layout.

use serde_json::{json, Map, Value};

use crate::error::{DtxError, Result};
use crate::types::{format_number, TokenCollection};

use super::css::unique_slugs;
use super::{ExportOptions, Exporter};

pub struct StyleDictionaryExporter;

fn dimension(value: f64) -> Value {
    json!({ "value": format!("{}px", format_number(value)), "type": "dimension" })
}

impl Exporter for StyleDictionaryExporter {
    fn render(
        &self,
        tokens: &TokenCollection,
        _options: &ExportOptions,
        out: &mut String,
    ) -> Result<()> {
        let mut color = Map::new();
        for (token, slug) in unique_slugs(tokens.colors()) {
            let description = token
                .description
                .clone()
                .unwrap_or_else(|| format!("{} color", token.usage));
            color.insert(
                slug,
                json!({ "value": token.value, "type": "color", "description": description }),
            );
        }

        let font: Map<String, Value> = unique_slugs(tokens.typography())
            .into_iter()
            .map(|(t, slug)| (slug, dimension(t.font_size)))
            .collect();

        let spacing: Map<String, Value> = unique_slugs(tokens.spacing())
            .into_iter()
            .map(|(s, slug)| (slug, dimension(s.value)))
            .collect();

        let document = json!({
            "color": color,
            "size": { "font": font, "spacing": spacing }
        });

        let text = serde_json::to_string_pretty(&document).map_err(|e| DtxError::Export {
            message: format!("Failed to serialize Style Dictionary tokens: {}", e),
        })?;
        out.push_str(&text);
        out.push('\n');
        Ok(())
    }
}
