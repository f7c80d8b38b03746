//! Job configuration: RNG seed, rolling window length, and version label.
//!
//! Config documents are TOML by default; a `.json` extension switches to JSON
//! and `.yaml`/`.yml` to YAML.
//! Every field is required. A field that is present but has the wrong type is a
//! parse error, while an absent field is reported by name.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::rng::RunRng;

/// Errors from loading a job config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found")]
    NotFound { path: PathBuf },

    #[error("Invalid config file: {0}")]
    Parse(String),

    #[error("Config field '{0}' missing")]
    FieldMissing(&'static str),
}

/// Document format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => ConfigFormat::Json,
            Some("yaml" | "yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Immutable configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConfig {
    /// Seed for the run RNG.
    pub seed: u64,
    /// Rolling window length in rows. Kept signed so that zero and negative
    /// values reach the signal engine, which rejects them.
    pub window: i64,
    /// Free-form label echoed into every output record.
    pub version: String,
}

/// Wire shape: all fields optional so a missing key can be told apart from a
/// malformed one.
#[derive(Debug, Deserialize)]
struct RawConfig {
    seed: Option<u64>,
    window: Option<i64>,
    version: Option<String>,
}

impl JobConfig {
    /// Load a config from disk.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Parse(format!("{}: {e}", path.display())))?;
        Self::parse(&content, ConfigFormat::from_path(path))
    }

    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Toml => Self::from_toml(content),
            ConfigFormat::Json => Self::from_json(content),
            ConfigFormat::Yaml => Self::from_yaml(content),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.message().to_string()))?;
        raw.into_config()
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        raw.into_config()
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        raw.into_config()
    }

    /// Seeded generator for this run.
    pub fn run_rng(&self) -> RunRng {
        RunRng::new(self.seed)
    }
}

impl RawConfig {
    fn into_config(self) -> Result<JobConfig, ConfigError> {
        Ok(JobConfig {
            seed: self.seed.ok_or(ConfigError::FieldMissing("seed"))?,
            window: self.window.ok_or(ConfigError::FieldMissing("window"))?,
            version: self.version.ok_or(ConfigError::FieldMissing("version"))?,
        })
    }
}
