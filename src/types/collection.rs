//! The frozen result of one extraction.

use serde::{Deserialize, Serialize};

use crate::error::{DtxError, Result};

use super::{BorderRadiusToken, ColorToken, ShadowToken, SpacingToken, TypographyToken};

/// Version of the collection layout written by the JSON exporter.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Facts about the extraction that produced a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub source_name: String,
    /// RFC 3339 UTC timestamp.
    pub extracted_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    pub schema_version: String,
}

impl Metadata {
    pub fn new(source_name: impl Into<String>, extracted_at: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            extracted_at: extracted_at.into(),
            source_id: None,
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }

    pub fn with_source_id(mut self, source_id: Option<String>) -> Self {
        self.source_id = source_id;
        self
    }
}

/// Canonical tokens of one extraction.
///
/// Immutable once built: only the canonicalizer and deserialization create
/// collections, and exporters read them through shared references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCollection {
    colors: Vec<ColorToken>,
    typography: Vec<TypographyToken>,
    spacing: Vec<SpacingToken>,
    shadows: Vec<ShadowToken>,
    border_radius: Vec<BorderRadiusToken>,
    metadata: Metadata,
}

impl TokenCollection {
    pub(crate) fn new(
        colors: Vec<ColorToken>,
        typography: Vec<TypographyToken>,
        spacing: Vec<SpacingToken>,
        shadows: Vec<ShadowToken>,
        border_radius: Vec<BorderRadiusToken>,
        metadata: Metadata,
    ) -> Self {
        Self {
            colors,
            typography,
            spacing,
            shadows,
            border_radius,
            metadata,
        }
    }

    /// Read a collection previously written by the JSON exporter.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| DtxError::Parse {
            message: format!("Invalid token collection: {}", e),
            help: Some("Expected output of `dtx export --format json`".to_string()),
        })
    }

    pub fn colors(&self) -> &[ColorToken] {
        &self.colors
    }

    pub fn typography(&self) -> &[TypographyToken] {
        &self.typography
    }

    pub fn spacing(&self) -> &[SpacingToken] {
        &self.spacing
    }

    pub fn shadows(&self) -> &[ShadowToken] {
        &self.shadows
    }

    pub fn border_radius(&self) -> &[BorderRadiusToken] {
        &self.border_radius
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Total number of tokens across all categories.
    pub fn len(&self) -> usize {
        self.colors.len()
            + self.typography.len()
            + self.spacing.len()
            + self.shadows.len()
            + self.border_radius.len()
    }

    /// Check if no category holds any token.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
