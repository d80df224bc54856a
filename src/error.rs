use miette::Diagnostic;
use thiserror::Error;

use crate::extract::TraversalLimit;

/// Main error type for dtx operations
#[derive(Error, Diagnostic, Debug)]
pub enum DtxError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(dtx::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(dtx::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(dtx::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unsupported export format: {format}")]
    #[diagnostic(
        code("dtx::unsupported-format"),
        help("Use one of: css, scss, js, json, style-dictionary")
    )]
    UnsupportedFormat { format: String },

    #[error("Traversal stopped early: {limit}")]
    #[diagnostic(
        code("dtx::recursion-limit"),
        help("Raise --max-depth / --max-nodes, or drop --strict to accept partial results")
    )]
    RecursionLimitExceeded { limit: TraversalLimit },

    #[error("Export error: {message}")]
    #[diagnostic(code(dtx::export))]
    Export { message: String },
}

pub type Result<T> = std::result::Result<T, DtxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::codes;

    fn code(err: &DtxError) -> String {
        Diagnostic::code(err).map(|c| c.to_string()).unwrap_or_default()
    }

    #[test]
    fn test_limit_error_shares_warning_code() {
        let err = DtxError::RecursionLimitExceeded {
            limit: TraversalLimit::Depth { max: 256 },
        };
        assert_eq!(code(&err), codes::RECURSION_LIMIT);
    }

    #[test]
    fn test_codes_are_kebab_case() {
        let err = DtxError::UnsupportedFormat {
            format: "xml".to_string(),
        };
        assert_eq!(code(&err), "dtx::unsupported-format");
    }
}
