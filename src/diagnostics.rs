//! Non-fatal findings collected while reading a design source.
//!
//! Extraction is best-effort: entries that cannot become tokens are skipped
//! and reported here instead of aborting the run.

use std::fmt;

/// Diagnostic codes emitted by the pipeline.
pub mod codes {
    /// A node, paint, effect or style entry lacked fields for its category.
    pub const MALFORMED_INPUT: &str = "dtx::malformed-input";
    /// Traversal stopped at the depth or node-count cap.
    pub const RECURSION_LIMIT: &str = "dtx::recursion-limit";
}

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Machine-readable diagnostic code (e.g. "dtx::malformed-input").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Node or style id the diagnostic refers to.
    pub subject: Option<String>,
    /// Optional help text.
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            subject: None,
            help: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            subject: None,
            help: None,
        }
    }

    /// Attach the id of the node or style this diagnostic is about.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Add help text to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: ", self.severity, self.code)?;
        if let Some(subject) = &self.subject {
            write!(f, "{}: ", subject)?;
        }
        write!(f, "{}", self.message)
    }
}

/// Collects diagnostics from parsing and extraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Record a skipped entry.
    pub fn malformed(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        let subject = subject.into();
        let message = message.into();
        tracing::debug!(subject = %subject, "skipping malformed entry: {}", message);
        self.push(Diagnostic::warning(codes::MALFORMED_INPUT, message).with_subject(subject));
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    /// Count diagnostics carrying the given code.
    pub fn count_code(&self, code: &str) -> usize {
        self.diagnostics.iter().filter(|d| d.code == code).count()
    }

    /// Number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Merge another collection into this one.
    pub fn merge(&mut self, other: Diagnostics) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Iterate over diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection() {
        let diags = Diagnostics::new();
        assert!(diags.is_empty());
        assert!(!diags.has_errors());
        assert!(!diags.has_warnings());
    }

    #[test]
    fn test_malformed_is_warning() {
        let mut diags = Diagnostics::new();
        diags.malformed("1:2", "SOLID fill has no color");

        assert!(diags.has_warnings());
        assert!(!diags.has_errors());
        assert_eq!(diags.count_code(codes::MALFORMED_INPUT), 1);

        let d = diags.iter().next().unwrap();
        assert_eq!(d.subject.as_deref(), Some("1:2"));
    }

    #[test]
    fn test_merge() {
        let mut a = Diagnostics::new();
        a.push(Diagnostic::error("dtx::a", "error a"));

        let mut b = Diagnostics::new();
        b.push(Diagnostic::warning("dtx::b", "warning b"));

        a.merge(b);
        assert_eq!(a.len(), 2);
        assert!(a.has_errors());
        assert!(a.has_warnings());
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::warning(codes::MALFORMED_INPUT, "fill has no color").with_subject("0:1");
        assert_eq!(
            d.to_string(),
            "warning[dtx::malformed-input]: 0:1: fill has no color"
        );
    }

    #[test]
    fn test_with_help() {
        let d = Diagnostic::error("dtx::test", "bad").with_help("fix it");
        assert_eq!(d.help.as_deref(), Some("fix it"));
    }
}
