pub mod completions;
pub mod export;
pub mod inspect;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::error::{DtxError, Result};
use crate::extract::ExtractOptions;
use crate::source::DesignSource;

/// dtx - Design token extraction
#[derive(Parser, Debug)]
#[command(name = "dtx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract tokens from a design source and export them
    Export(export::ExportArgs),

    /// Summarize the tokens and diagnostics of a design source
    Inspect(inspect::InspectArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Flags shared by every command that runs an extraction.
#[derive(Args, Debug, Default)]
pub struct ExtractArgs {
    /// Config file (default: ./dtx.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Deepest node level to walk
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Most nodes to walk
    #[arg(long)]
    pub max_nodes: Option<usize>,

    /// Name to record in metadata
    #[arg(long)]
    pub source_name: Option<String>,
}

impl ExtractArgs {
    /// The explicit config file, or dtx.yaml in the working directory.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Ok(Config::discover(Path::new("."))?.unwrap_or_default()),
        }
    }

    /// Config values overridden by whichever flags were given.
    pub fn extract_options(&self, config: &Config) -> ExtractOptions {
        let mut options = config.extract_options();
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }
        if let Some(max_nodes) = self.max_nodes {
            options.max_nodes = max_nodes;
        }
        if let Some(name) = &self.source_name {
            options.source_name = Some(name.clone());
        }
        options
    }
}

/// Read and parse a design source; `-` reads stdin.
pub fn load_source(path: &Path) -> Result<DesignSource> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| DtxError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to read stdin: {}", e),
            })?;
        text
    } else {
        std::fs::read_to_string(path).map_err(|e| DtxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read design source: {}", e),
        })?
    };

    DesignSource::from_json(&text)
}
