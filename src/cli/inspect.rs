//! Inspect command implementation.
//!
//! Extracts tokens and prints per-category counts plus every diagnostic.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::extract::{extract, Extraction};
use crate::output::{display_path, plural, Printer};
use crate::types::{Token, TokenCollection};

use super::{load_source, ExtractArgs};

/// Summarize the tokens and diagnostics of a design source
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Design-source JSON file ("-" for stdin)
    pub input: PathBuf,

    /// List token names under each category
    #[arg(long)]
    pub names: bool,

    #[command(flatten)]
    pub extract: ExtractArgs,
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    let config = args.extract.load_config()?;
    let source = load_source(&args.input)?;
    let extraction = extract(&source, &args.extract.extract_options(&config));

    let meta = extraction.tokens.metadata();
    printer.info("Source", &format!("{} {}", meta.source_name, printer.dim(&display_path(&args.input))));
    if let Some(id) = &meta.source_id {
        printer.info("File id", id);
    }

    for (label, count, names) in summary(&extraction.tokens) {
        let mut line = plural(count, "token", "tokens");
        if args.names && !names.is_empty() {
            line.push_str(&printer.dim(&format!(" ({})", names.join(", "))));
        }
        printer.info(label, &line);
    }

    print_diagnostics(&extraction, printer);
    Ok(())
}

fn names<T: Token>(tokens: &[T]) -> Vec<&str> {
    tokens.iter().map(Token::name).collect()
}

fn summary(tokens: &TokenCollection) -> Vec<(&'static str, usize, Vec<&str>)> {
    vec![
        ("Colors", tokens.colors().len(), names(tokens.colors())),
        ("Typography", tokens.typography().len(), names(tokens.typography())),
        ("Spacing", tokens.spacing().len(), names(tokens.spacing())),
        ("Shadows", tokens.shadows().len(), names(tokens.shadows())),
        ("Radii", tokens.border_radius().len(), names(tokens.border_radius())),
    ]
}

fn print_diagnostics(extraction: &Extraction, printer: &Printer) {
    for diagnostic in extraction.diagnostics.iter() {
        printer.diagnostic(diagnostic);
    }

    if extraction.diagnostics.is_empty() {
        printer.status("Finished", &plural(extraction.tokens.len(), "token", "tokens"));
    } else {
        printer.warning(
            "Finished",
            &format!(
                "{} with {}{}",
                plural(extraction.tokens.len(), "token", "tokens"),
                plural(extraction.diagnostics.len(), "warning", "warnings"),
                if extraction.is_partial() { " (partial)" } else { "" }
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DesignSource;
    use tempfile::TempDir;

    #[test]
    fn test_summary_order_and_counts() {
        let source = DesignSource::from_json(
            r#"{ "document": { "id": "1", "type": "FRAME", "cornerRadius": 4, "itemSpacing": 8 } }"#,
        )
        .unwrap();
        let extraction = extract(&source, &Default::default());

        let rows = summary(&extraction.tokens);
        let labels: Vec<&str> = rows.iter().map(|r| r.0).collect();
        assert_eq!(labels, vec!["Colors", "Typography", "Spacing", "Shadows", "Radii"]);
        assert_eq!(rows[2].1, 1);
        assert_eq!(rows[4].2, vec!["Small"]);
    }

    #[test]
    fn test_run() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("kit.json");
        std::fs::write(&input, r#"{ "name": "Kit", "document": { "id": "1", "type": "FRAME" } }"#)
            .unwrap();

        let args = InspectArgs {
            input,
            names: true,
            extract: ExtractArgs::default(),
        };
        run(args, &Printer::plain()).unwrap();
    }
}
