use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rewrite: RewriteConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Identifier stem; headers become `>{id_prefix}{n} ...`
    pub id_prefix: String,
    /// Number given to the first header
    pub start_index: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Lines between sink flushes and progress log entries
    pub checkpoint_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rewrite: RewriteConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            id_prefix: "seq_".to_string(),
            start_index: 1,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            checkpoint_interval: 10_000,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), crate::TaxRenameError> {
        if self.rewrite.id_prefix.is_empty() {
            return Err(crate::TaxRenameError::Configuration(
                "rewrite.id_prefix must not be empty".to_string(),
            ));
        }
        if self.rewrite.id_prefix.chars().any(char::is_whitespace) {
            return Err(crate::TaxRenameError::Configuration(
                "rewrite.id_prefix must not contain whitespace".to_string(),
            ));
        }
        if self.rewrite.start_index == 0 {
            return Err(crate::TaxRenameError::Configuration(
                "rewrite.start_index must be at least 1".to_string(),
            ));
        }
        if self.output.checkpoint_interval == 0 {
            return Err(crate::TaxRenameError::Configuration(
                "output.checkpoint_interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, crate::TaxRenameError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            crate::TaxRenameError::Configuration(format!(
                "config file '{}' not found",
                path.display()
            ))
        } else {
            crate::TaxRenameError::Io(e)
        }
    })?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| crate::TaxRenameError::Configuration(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), crate::TaxRenameError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| crate::TaxRenameError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
