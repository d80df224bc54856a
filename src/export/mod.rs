//! Serialization of token collections into stylesheet and code formats.

mod css;
mod js;
mod json;
mod naming;
mod scss;
mod style_dictionary;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DtxError, Result};
use crate::types::TokenCollection;

pub use css::CssExporter;
pub use js::JsExporter;
pub use json::JsonExporter;
pub use naming::{comment_text, compact_key, slug, var_name, UniqueNames};
pub use scss::ScssExporter;
pub use style_dictionary::StyleDictionaryExporter;

/// Options shared by every exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    /// Requested format name; validated when exporting.
    pub format: String,
    /// Header and section comments in CSS, SCSS and JS.
    pub include_comments: bool,
    /// SCSS also re-exposes its variables as custom properties.
    pub use_custom_properties: bool,
    /// CSS/SCSS selector class, or the JS export name.
    pub namespace: Option<String>,
    /// Prepended to every variable name.
    pub prefix: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Css.as_str().to_string(),
            include_comments: true,
            use_custom_properties: true,
            namespace: None,
            prefix: None,
        }
    }
}

impl ExportOptions {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format: format.as_str().to_string(),
            ..Default::default()
        }
    }

    fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|p| !p.trim().is_empty())
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|n| !n.trim().is_empty())
    }

    /// `:root`, or a class selector when a namespace is set.
    fn selector(&self) -> String {
        match self.namespace() {
            Some(ns) => format!(".{}", slug(ns)),
            None => ":root".to_string(),
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Css,
    Scss,
    Js,
    Json,
    StyleDictionary,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Css,
        ExportFormat::Scss,
        ExportFormat::Js,
        ExportFormat::Json,
        ExportFormat::StyleDictionary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Js => "js",
            ExportFormat::Json => "json",
            ExportFormat::StyleDictionary => "style-dictionary",
        }
    }

    /// Conventional file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Js => "js",
            ExportFormat::Json | ExportFormat::StyleDictionary => "json",
        }
    }

    fn exporter(self) -> &'static dyn Exporter {
        match self {
            ExportFormat::Css => &CssExporter,
            ExportFormat::Scss => &ScssExporter,
            ExportFormat::Js => &JsExporter,
            ExportFormat::Json => &JsonExporter,
            ExportFormat::StyleDictionary => &StyleDictionaryExporter,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = DtxError;

    fn from_str(s: &str) -> Result<Self> {
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| DtxError::UnsupportedFormat {
                format: s.to_string(),
            })
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output format.
pub trait Exporter {
    /// Write the collection into `out`.
    fn render(
        &self,
        tokens: &TokenCollection,
        options: &ExportOptions,
        out: &mut String,
    ) -> Result<()>;

    fn export(&self, tokens: &TokenCollection, options: &ExportOptions) -> Result<String> {
        let mut out = String::new();
        self.render(tokens, options, &mut out)?;
        Ok(out)
    }
}

/// Serialize `tokens` in the format named by `options.format`.
pub fn export(tokens: &TokenCollection, options: &ExportOptions) -> Result<String> {
    let format: ExportFormat = options.format.parse()?;
    tracing::debug!(format = %format, tokens = tokens.len(), "exporting");
    format.exporter().export(tokens, options)
}

impl From<fmt::Error> for DtxError {
    fn from(err: fmt::Error) -> Self {
        DtxError::Export {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::json;

    use crate::extract::{extract, ExtractOptions};
    use crate::source::DesignSource;
    use crate::types::TokenCollection;

    /// A small collection touching every category.
    pub fn sample() -> TokenCollection {
        let source = DesignSource::from_value(json!({
            "name": "Sample Kit",
            "styles": {
                "S:1": {
                    "styleType": "FILL", "name": "Brand/Primary",
                    "description": "Main brand color",
                    "definition": [{ "type": "SOLID", "color": { "r": 0, "g": 0.4, "b": 1 } }]
                },
                "S:2": {
                    "styleType": "TEXT", "name": "Heading Large",
                    "definition": {
                        "fontFamily": "Segoe UI", "fontSize": 28, "fontWeight": 700,
                        "lineHeightPx": 36
                    }
                }
            },
            "document": {
                "id": "0:1", "type": "FRAME",
                "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1 } }],
                "effects": [{
                    "type": "DROP_SHADOW", "offset": { "x": 0, "y": 4 }, "radius": 8,
                    "color": { "r": 0, "g": 0, "b": 0, "a": 0.25 }
                }],
                "cornerRadius": 8,
                "paddingLeft": 16,
                "itemSpacing": 8
            }
        }))
        .unwrap();

        let options = ExtractOptions {
            timestamp: Some("2024-05-01T12:00:00.000Z".to_string()),
            ..Default::default()
        };
        extract(&source, &options).tokens
    }

    pub fn empty() -> TokenCollection {
        named("Empty")
    }

    /// An empty collection whose source carries `source_name`.
    pub fn named(source_name: &str) -> TokenCollection {
        let text = json!({
            "colors": [], "typography": [], "spacing": [], "shadows": [],
            "borderRadius": [],
            "metadata": {
                "sourceName": source_name, "extractedAt": "2024-05-01T12:00:00Z",
                "schemaVersion": "1.0.0"
            }
        })
        .to_string();
        TokenCollection::from_json(&text).unwrap()
    }

    pub const HOSTILE_NAME: &str = "Kit */ :root { --evil: 1; } /*\nglobalThis.pwned = true;";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("css".parse::<ExportFormat>().unwrap(), ExportFormat::Css);
        assert_eq!(
            "Style-Dictionary".parse::<ExportFormat>().unwrap(),
            ExportFormat::StyleDictionary
        );
        for format in ExportFormat::ALL {
            assert_eq!(format.as_str().parse::<ExportFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_unsupported_format() {
        let options = ExportOptions {
            format: "xml".to_string(),
            ..Default::default()
        };
        let err = export(&fixtures::sample(), &options).unwrap_err();
        match err {
            DtxError::UnsupportedFormat { format } => assert_eq!(format, "xml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_default_options() {
        let options = ExportOptions::default();
        assert_eq!(options.format, "css");
        assert!(options.include_comments);
        assert!(options.use_custom_properties);
        assert_eq!(options.selector(), ":root");
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: ExportOptions =
            serde_json::from_str(r#"{ "format": "scss", "namespace": "Dark Theme" }"#).unwrap();
        assert_eq!(options.format, "scss");
        assert!(options.include_comments);
        assert_eq!(options.selector(), ".dark-theme");
    }

    #[test]
    fn test_blank_prefix_is_ignored() {
        let options = ExportOptions {
            prefix: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(options.prefix(), None);
    }

    #[test]
    fn test_every_format_handles_empty_collection() {
        let empty = fixtures::empty();
        for format in ExportFormat::ALL {
            let output = export(&empty, &ExportOptions::new(format)).unwrap();
            assert!(!output.is_empty(), "{format} produced nothing");
        }
    }
}
