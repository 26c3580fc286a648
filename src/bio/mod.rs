pub mod fasta;
pub mod taxonomy;

pub use fasta::{ConversionSummary, HeaderRewriter, RewriteOptions};
pub use taxonomy::{TaxonomicRank, RANK_PREFIXES};
