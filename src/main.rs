use std::io;

use clap::Parser;
use dtx::cli::{Cli, Commands};
use dtx::output::Printer;
use miette::Result;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let printer = Printer::new();

    match cli.command {
        Commands::Export(args) => dtx::cli::export::run(args, &printer)?,
        Commands::Inspect(args) => dtx::cli::inspect::run(args, &printer)?,
        Commands::Completions(args) => dtx::cli::completions::run(args)?,
    }

    Ok(())
}
