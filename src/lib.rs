pub mod bio;
pub mod cli;
pub mod core;
pub mod utils;

pub use crate::bio::fasta::{convert_fasta_headers, convert_stream, ConversionSummary, HeaderRewriter};
pub use crate::core::config::Config;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaxRenameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, TaxRenameError>;
