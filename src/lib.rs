//! dtx - Design token extraction
//!
//! A library for walking design-source documents, classifying the colors,
//! text styles, spacing, shadows and corner radii they use, and exporting
//! the deduplicated tokens as CSS, SCSS, JS, JSON or Style Dictionary.

pub mod classify;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod extract;
pub mod output;
pub mod source;
pub mod types;

pub use config::{Config, CONFIG_FILENAME};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{DtxError, Result};
pub use export::{export, ExportFormat, ExportOptions, Exporter};
pub use extract::{canonicalize, extract, ExtractOptions, Extraction, RawBag, TraversalLimit};
pub use source::{DesignSource, Document, Effect, Node, NodeKind, Paint, StyleDefinition, StyleEntry};
pub use types::{
    BorderRadiusToken, ColorToken, ColorUsage, LineHeight, Metadata, RadiusUsage, Rgba,
    ShadowToken, ShadowUsage, SpacingToken, SpacingUsage, Token, TokenCategory, TokenCollection,
    TokenSource, TypographyToken, TypographyUsage,
};
