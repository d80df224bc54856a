//! Token extraction pipeline.
//!
//! `DesignSource` → style registry pass + document walk → `RawBag` →
//! canonicalizer → `TokenCollection`.
//!
//! # Example
//!
//! ```ignore
//! use dtx::{extract, DesignSource, ExtractOptions};
//!
//! let source = DesignSource::from_json(&text)?;
//! let extraction = extract(&source, &ExtractOptions::default());
//! println!("{} tokens", extraction.tokens.len());
//! ```

mod bag;
mod canonical;
mod styles;
mod walker;

use std::fmt;

use chrono::{SecondsFormat, Utc};

use crate::diagnostics::{codes, Diagnostic, Diagnostics};
use crate::error::{DtxError, Result};
use crate::source::DesignSource;
use crate::types::{Metadata, TokenCollection};

pub use bag::RawBag;
pub use canonical::{assign_scale, canonicalize, dedup};
pub use styles::extract_styles;
pub use walker::{traverse, Limits, Walk};

/// Default depth cap for the document walk.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default node-count cap for the document walk.
pub const DEFAULT_MAX_NODES: usize = 100_000;

/// Which cap stopped a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalLimit {
    Depth { max: usize },
    Nodes { max: usize },
}

impl fmt::Display for TraversalLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalLimit::Depth { max } => write!(f, "depth cap of {} reached", max),
            TraversalLimit::Nodes { max } => write!(f, "node cap of {} reached", max),
        }
    }
}

/// Options for one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub max_depth: usize,
    pub max_nodes: usize,
    /// Overrides the source's own name in metadata.
    pub source_name: Option<String>,
    /// Fixed RFC 3339 timestamp; the current time when `None`.
    pub timestamp: Option<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: DEFAULT_MAX_NODES,
            source_name: None,
            timestamp: None,
        }
    }
}

impl ExtractOptions {
    fn limits(&self) -> Limits {
        Limits {
            max_depth: self.max_depth,
            max_nodes: self.max_nodes,
        }
    }
}

/// Result of one extraction.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub tokens: TokenCollection,
    /// Skipped entries and cap warnings, including those from parsing.
    pub diagnostics: Diagnostics,
    /// Set when the document walk stopped early; `tokens` is then partial.
    pub limit: Option<TraversalLimit>,
}

impl Extraction {
    /// Whether a cap stopped the walk before the whole tree was seen.
    pub fn is_partial(&self) -> bool {
        self.limit.is_some()
    }

    /// The collection, or `RecursionLimitExceeded` if it is partial.
    pub fn into_complete(self) -> Result<TokenCollection> {
        match self.limit {
            Some(limit) => Err(DtxError::RecursionLimitExceeded { limit }),
            None => Ok(self.tokens),
        }
    }
}

/// Extract canonical tokens from a design source.
///
/// Never fails: malformed entries are skipped and reported in
/// `diagnostics`, and a cap hit yields partial results with `limit` set.
pub fn extract(source: &DesignSource, options: &ExtractOptions) -> Extraction {
    let mut diagnostics = source.diagnostics().clone();

    // Registry tokens go first so author-named styles win dedup ties.
    let mut bag = extract_styles(&source.styles, &mut diagnostics);

    let mut limit = None;
    if let Some(document) = &source.document {
        let walk = traverse(document, options.limits(), &mut diagnostics);
        if let Some(hit) = walk.limit {
            tracing::warn!(visited = walk.visited, "traversal stopped early: {}", hit);
            diagnostics.push(
                Diagnostic::warning(codes::RECURSION_LIMIT, format!("traversal stopped early: {}", hit))
                    .with_help("Tokens below the cap were not extracted"),
            );
            limit = Some(hit);
        }
        bag.extend(walk.bag);
    }

    let source_name = options
        .source_name
        .clone()
        .or_else(|| source.name.clone())
        .unwrap_or_else(|| "Untitled".to_string());
    let timestamp = options
        .timestamp
        .clone()
        .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
    let metadata = Metadata::new(source_name, timestamp).with_source_id(source.file_id.clone());

    let raw_count = bag.len();
    let tokens = canonicalize(bag, metadata);

    tracing::info!(
        raw = raw_count,
        canonical = tokens.len(),
        colors = tokens.colors().len(),
        typography = tokens.typography().len(),
        spacing = tokens.spacing().len(),
        shadows = tokens.shadows().len(),
        radii = tokens.border_radius().len(),
        skipped = diagnostics.count_code(codes::MALFORMED_INPUT),
        "extracted design tokens"
    );

    Extraction {
        tokens,
        diagnostics,
        limit,
    }
}
