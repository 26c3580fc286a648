pub mod convert;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "taxrename",
    version,
    about = "Convert FASTA headers from taxonomic format to sequential naming",
    long_about = "Rewrites each FASTA header holding a semicolon-separated lineage into a \
                  sequential identifier (seq_1, seq_2, ...) followed by the lineage with \
                  k__/p__/c__/o__/f__/g__/s__ rank prefixes. Sequence lines are copied through \
                  trimmed. Paths ending in .gz are read and written gzip-compressed; '-' means \
                  stdin or stdout."
)]
pub struct Cli {
    /// Input FASTA file path
    #[arg(value_name = "INPUT")]
    pub input_file: PathBuf,

    /// Output FASTA file path
    #[arg(value_name = "OUTPUT")]
    pub output_file: PathBuf,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE", env = "TAXRENAME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the spinner and the success message
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::try_parse_from(["taxrename", "in.fasta", "out.fasta", "-vv"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("in.fasta"));
        assert_eq!(cli.output_file, PathBuf::from("out.fasta"));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_output_is_required() {
        assert!(Cli::try_parse_from(["taxrename", "in.fasta"]).is_err());
    }
}
