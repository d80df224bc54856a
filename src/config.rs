//! Project configuration (dtx.yaml).
//!
//! Every field is optional; command-line flags override whatever the file
//! sets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DtxError, Result};
use crate::export::{ExportFormat, ExportOptions};
use crate::extract::ExtractOptions;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "dtx.yaml";

/// Configuration loaded from dtx.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Export format (css, scss, js, json, style-dictionary).
    pub format: Option<String>,
    pub prefix: Option<String>,
    pub namespace: Option<String>,
    pub include_comments: Option<bool>,
    pub use_custom_properties: Option<bool>,
    /// Write exports here instead of stdout.
    pub output: Option<PathBuf>,
    pub max_depth: Option<usize>,
    pub max_nodes: Option<usize>,
    /// Name recorded in metadata instead of the document's own.
    pub source_name: Option<String>,
}

impl Config {
    /// Load configuration from a dtx.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DtxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `dtx.yaml` from `dir` if it exists.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.is_file() {
            return Ok(None);
        }
        tracing::debug!(path = %path.display(), "loading config");
        Self::load(&path).map(Some)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes as null.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| DtxError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;

        if let Some(format) = &config.format {
            format.parse::<ExportFormat>().map_err(|_| DtxError::Config {
                message: format!("Unknown format '{}'", format),
                help: Some("Use one of: css, scss, js, json, style-dictionary".to_string()),
            })?;
        }

        Ok(config)
    }

    /// Export options with unset fields at their defaults.
    pub fn export_options(&self) -> ExportOptions {
        let defaults = ExportOptions::default();
        ExportOptions {
            format: self.format.clone().unwrap_or(defaults.format),
            include_comments: self.include_comments.unwrap_or(defaults.include_comments),
            use_custom_properties: self
                .use_custom_properties
                .unwrap_or(defaults.use_custom_properties),
            namespace: self.namespace.clone(),
            prefix: self.prefix.clone(),
        }
    }

    /// Extraction options with unset fields at their defaults.
    pub fn extract_options(&self) -> ExtractOptions {
        let defaults = ExtractOptions::default();
        ExtractOptions {
            max_depth: self.max_depth.unwrap_or(defaults.max_depth),
            max_nodes: self.max_nodes.unwrap_or(defaults.max_nodes),
            source_name: self.source_name.clone(),
            timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("format: scss").unwrap();
        assert_eq!(config.format.as_deref(), Some("scss"));
        assert!(config.prefix.is_none());

        let options = config.export_options();
        assert_eq!(options.format, "scss");
        assert!(options.include_comments);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
format: style-dictionary
prefix: ds
namespace: brand
include_comments: false
use_custom_properties: false
output: tokens/brand.json
max_depth: 64
max_nodes: 5000
source_name: Brand Kit
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.output, Some(PathBuf::from("tokens/brand.json")));

        let export = config.export_options();
        assert_eq!(export.format, "style-dictionary");
        assert_eq!(export.prefix.as_deref(), Some("ds"));
        assert_eq!(export.namespace.as_deref(), Some("brand"));
        assert!(!export.include_comments);
        assert!(!export.use_custom_properties);

        let extract = config.extract_options();
        assert_eq!(extract.max_depth, 64);
        assert_eq!(extract.max_nodes, 5000);
        assert_eq!(extract.source_name.as_deref(), Some("Brand Kit"));
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::default().extract_options(), ExtractOptions::default());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = Config::parse("format: xml").unwrap_err();
        assert!(matches!(err, DtxError::Config { .. }));
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Config::parse("fromat: css").unwrap_err();
        assert!(matches!(err, DtxError::Config { .. }));
    }

    #[test]
    fn test_load_and_discover() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap(), None);

        std::fs::write(dir.path().join(CONFIG_FILENAME), "prefix: acme\n").unwrap();
        let config = Config::discover(dir.path()).unwrap().unwrap();
        assert_eq!(config.prefix.as_deref(), Some("acme"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/dtx.yaml")).unwrap_err();
        assert!(matches!(err, DtxError::Io { .. }));
    }
}
