use clap::Parser;
use colored::*;
use std::process;
use taxrename::cli::Cli;
use taxrename::TaxRenameError;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins, then TAXRENAME_LOG, then the -v count
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let log_level = std::env::var("TAXRENAME_LOG").unwrap_or_else(|_| default_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = taxrename::cli::convert::run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<TaxRenameError>() {
            Some(TaxRenameError::Configuration(_)) => 2,
            Some(TaxRenameError::Io(_)) => 3,
            Some(TaxRenameError::NotFound(_)) => 4,
            None => 1,
        };
        process::exit(exit_code);
    }
}
