//! Export command implementation.
//!
//! Extracts tokens from one design source and writes them in the requested
//! format, to stdout or a file.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::diagnostics::{codes, Diagnostics};
use crate::error::{DtxError, Result};
use crate::export::{export, ExportFormat, ExportOptions};
use crate::extract::extract;
use crate::output::{display_path, plural, Printer};

use super::{load_source, ExtractArgs};

/// Extract tokens from a design source and export them
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Design-source JSON file ("-" for stdin)
    pub input: PathBuf,

    /// Output format: css, scss, js, json, style-dictionary
    #[arg(long, short)]
    pub format: Option<String>,

    /// Prefix for every variable name
    #[arg(long)]
    pub prefix: Option<String>,

    /// CSS selector class or JS export name
    #[arg(long)]
    pub namespace: Option<String>,

    /// Omit header and section comments
    #[arg(long)]
    pub no_comments: bool,

    /// SCSS: skip the custom-property block
    #[arg(long)]
    pub no_custom_properties: bool,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Fail instead of exporting partial results when a cap is hit
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub extract: ExtractArgs,
}

impl ExportArgs {
    fn export_options(&self, base: ExportOptions) -> ExportOptions {
        ExportOptions {
            format: self.format.clone().unwrap_or(base.format),
            include_comments: base.include_comments && !self.no_comments,
            use_custom_properties: base.use_custom_properties && !self.no_custom_properties,
            namespace: self.namespace.clone().or(base.namespace),
            prefix: self.prefix.clone().or(base.prefix),
        }
    }
}

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let config = args.extract.load_config()?;
    let export_options = args.export_options(config.export_options());
    // Reject a bad format before doing any work.
    let format: ExportFormat = export_options.format.parse()?;

    let source = load_source(&args.input)?;
    printer.status("Extracting", &display_path(&args.input));

    let extraction = extract(&source, &args.extract.extract_options(&config));
    report(&extraction.diagnostics, printer);

    let tokens = if args.strict {
        extraction.into_complete()?
    } else {
        extraction.tokens
    };

    let rendered = export(&tokens, &export_options)?;

    match args.output.or(config.output) {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| DtxError::Io {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create output directory: {}", e),
                })?;
            }
            fs::write(&path, &rendered).map_err(|e| DtxError::Io {
                path: path.clone(),
                message: format!("Failed to write export: {}", e),
            })?;
            printer.status(
                "Exported",
                &format!(
                    "{} as {} to {}",
                    plural(tokens.len(), "token", "tokens"),
                    format,
                    printer.cyan(&display_path(&path))
                ),
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Print cap warnings in full and fold malformed-entry warnings into one
/// line per code.
fn report(diagnostics: &Diagnostics, printer: &Printer) {
    let mut folded: BTreeMap<&str, usize> = BTreeMap::new();
    for diagnostic in diagnostics.iter() {
        if diagnostic.code == codes::MALFORMED_INPUT {
            *folded.entry(diagnostic.code.as_str()).or_default() += 1;
        } else {
            printer.diagnostic(diagnostic);
        }
    }

    for (code, count) in folded {
        printer.warning(
            "warning",
            &format!(
                "skipped {} {}",
                plural(count, "malformed entry", "malformed entries"),
                printer.dim(&format!("[{}] (see `dtx inspect`)", code))
            ),
        );
    }
}
