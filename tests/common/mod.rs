#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment that owns a temporary directory for inputs and outputs
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

pub fn taxrename_cmd() -> Command {
    let mut cmd = Command::cargo_bin("taxrename").expect("binary should build");
    cmd.env_remove("RUST_LOG")
        .env_remove("TAXRENAME_LOG")
        .env_remove("TAXRENAME_CONFIG");
    cmd
}

/// SILVA-style FASTA with `n` records of `depth` taxa each
pub fn create_lineage_fasta(n: usize, depth: usize) -> String {
    let mut content = String::new();
    for i in 0..n {
        let lineage: Vec<String> = (0..depth).map(|d| format!("Taxon{}_{}", i, d)).collect();
        content.push('>');
        content.push_str(&lineage.join(";"));
        content.push('\n');
        content.push_str("ACGUACGUACGUACGUACGUACGUACGUACGUACGUACGU\n");
        content.push_str("GGCCAAUUGGCCAAUU\n");
    }
    content
}

pub fn create_silva_fasta() -> String {
    r#">Bacteria;Proteobacteria;Gammaproteobacteria;Enterobacterales;Enterobacteriaceae;Escherichia-Shigella;Escherichia coli
AGAGUUUGAUCCUGGCUCAG
AACGAACGCUGGCGGCAGGC
>Archaea;Euryarchaeota;Methanobacteria
UUCCGGUUGAUCCUGCCGGA
>Eukaryota;Amorphea;Obazoa;Opisthokonta;Holozoa;Choanozoa;Metazoa;Animalia;Chordata
UACCUGGUUGAUCCUGCCAG
"#
    .to_string()
}

pub fn count_headers(path: &Path) -> Result<usize> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter(|l| l.starts_with('>')).count())
}
