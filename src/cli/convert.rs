use crate::bio::fasta::{convert_fasta_headers_with_progress, STDIO_PATH};
use crate::cli::Cli;
use crate::core::config::{load_config, Config};
use crate::utils::progress::{checkpoint_message, create_spinner};
use colored::*;
use tracing::debug;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    // Spinner and summary would interleave with converted records on stdout
    let to_stdout = cli.output_file.as_os_str() == STDIO_PATH;
    let show_progress = !cli.quiet && !to_stdout;

    let spinner = create_spinner(
        &format!("Converting {}...", cli.input_file.display()),
        show_progress,
    );

    let result = convert_fasta_headers_with_progress(
        &cli.input_file,
        &cli.output_file,
        &config,
        |summary| spinner.set_message(checkpoint_message(summary)),
    );
    spinner.finish_and_clear();
    let summary = result?;

    if show_progress {
        println!(
            "{} Successfully converted {} to {}",
            "✓".green().bold(),
            cli.input_file.display(),
            cli.output_file.display()
        );
        println!(
            "  {} sequences, {} lines",
            summary.sequences.to_string().bold(),
            summary.lines
        );
    }

    Ok(())
}
