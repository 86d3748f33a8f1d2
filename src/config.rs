//! Configuration handling for auth-schema-gen

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Load configuration from a TOML file
pub fn load_from_file(path: &Path) -> Result<GeneratorConfig> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| Error::ConfigError(format!("Failed to read config file: {}", e)))?;

    let config: GeneratorConfig = toml::from_str(&config_str)
        .map_err(|e| Error::ConfigError(format!("Failed to parse config file: {}", e)))?;

    Ok(config)
}

/// Represents the complete generator configuration.
///
/// Every recognized option is enumerated here and defaulted at construction;
/// nothing is threaded through as loosely-typed optional bags.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GeneratorConfig {
    pub adapter: AdapterConfig,
    pub database: DatabaseConfig,
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

/// Adapter-level naming options
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AdapterConfig {
    /// When true, storage names equal logical names and no case conversion
    /// is performed.
    pub camel_case: bool,
    /// When true, exported table identifiers get a trailing `s`. No
    /// irregular-plural handling.
    pub use_plural: bool,
}

/// Database-wide identifier options
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Synthesized `id` columns (and columns referencing an `id`) are numeric
    /// instead of textual.
    pub use_number_id: bool,
}

/// Output location configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Target schema file. Falls back to `./db/auth-config.ts` when unset.
    pub file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub stdout: bool,
    pub file: Option<String>,
}
