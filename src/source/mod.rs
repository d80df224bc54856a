//! Design-source model.
//!
//! A design source is what a design tool hands over: a node tree, a registry
//! of named styles, and a little file metadata. This module turns loosely
//! typed JSON into explicit tagged variants:
//! - `Paint` - one variant per fill kind
//! - `Effect` - one variant per effect kind
//! - `StyleDefinition` - one variant per style type
//! - `Document` - an arena of `Node`s in pre-order

mod node;
mod paint;
mod parse;
mod style;

use serde_json::Value;

use crate::diagnostics::Diagnostics;
use crate::error::Result;

pub use node::{Document, Node, NodeId, NodeKind, SpacingField};
pub use paint::{Effect, FontWeightSpec, Offset, Paint, RawColor, ShadowParams, TextStyle};
pub use style::{StyleDefinition, StyleEntry, StyleType};

/// A parsed design source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesignSource {
    /// File name as reported by the design tool.
    pub name: Option<String>,
    /// Source-document id, propagated into token metadata.
    pub file_id: Option<String>,
    /// Root of the node tree.
    pub document: Option<Document>,
    /// Named styles in registry order.
    pub styles: Vec<StyleEntry>,
    diagnostics: Diagnostics,
}

impl DesignSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse design-source JSON text.
    ///
    /// Fails only when the text is not a JSON object. Malformed nodes,
    /// paints, effects and styles are dropped and reported through
    /// [`DesignSource::diagnostics`].
    pub fn from_json(text: &str) -> Result<Self> {
        parse::parse_source(text)
    }

    /// Convert an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        parse::source_from_value(value)
    }

    /// Entries dropped while reading the source.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}
