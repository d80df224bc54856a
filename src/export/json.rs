use crate::error::{DtxError, Result};
use crate::types::TokenCollection;

use super::{ExportOptions, Exporter};

/// The whole collection as pretty-printed JSON.
///
/// Reads back with [`TokenCollection::from_json`].
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn render(
        &self,
        tokens: &TokenCollection,
        _options: &ExportOptions,
        out: &mut String,
    ) -> Result<()> {
        let json = serde_json::to_string_pretty(tokens).map_err(|e| DtxError::Export {
            message: format!("Failed to serialize tokens: {}", e),
        })?;
        out.push_str(&json);
        out.push('\n');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{fixtures, ExportFormat};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip() {
        let tokens = fixtures::sample();
        let output = JsonExporter
            .export(&tokens, &ExportOptions::new(ExportFormat::Json))
            .unwrap();

        assert_eq!(TokenCollection::from_json(&output).unwrap(), tokens);
    }

    #[test]
    fn test_layout() {
        let output = JsonExporter
            .export(&fixtures::sample(), &ExportOptions::new(ExportFormat::Json))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["colors", "typography", "spacing", "shadows", "borderRadius", "metadata"]
        );
        assert_eq!(value["metadata"]["sourceName"], "Sample Kit");
        assert_eq!(value["metadata"]["schemaVersion"], "1.0.0");
        assert_eq!(value["colors"][0]["source"]["kind"], "style");
        assert_eq!(value["spacing"][1]["scale"], 0);
    }

    #[test]
    fn test_comments_option_is_ignored() {
        let tokens = fixtures::sample();
        let with = ExportOptions::new(ExportFormat::Json);
        let without = ExportOptions {
            include_comments: false,
            ..with.clone()
        };
        assert_eq!(
            JsonExporter.export(&tokens, &with).unwrap(),
            JsonExporter.export(&tokens, &without).unwrap()
        );
    }
}
