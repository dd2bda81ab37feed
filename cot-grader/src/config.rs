//! Configuration management for the grader
//!
//! Maps dataset names to their benchmark family and file location. Adapters
//! never read this; callers load the dataset and hand the items over.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::items::BenchmarkFamily;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub datasets: IndexMap<String, DatasetConfig>,
    #[serde(default)]
    pub output: OutputConfig,
}

/// A dataset file and the policy it is graded with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub family: BenchmarkFamily,
    /// Path to the categorized JSON file
    pub path: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_true() -> bool { true }
fn default_output_dir() -> String { "results/grades".to_string() }

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from default config location or return defaults
    pub fn load_or_default() -> Self {
        Self::load_first_or_default(&[
            "config/datasets.toml",
            "../config/datasets.toml",
            "cot-grader/config/datasets.toml",
        ])
    }

    /// Load the first candidate file that exists and parses.
    ///
    /// A candidate that exists but fails to load is skipped with a warning.
    pub fn load_first_or_default<P: AsRef<Path>>(config_paths: &[P]) -> Self {
        for path in config_paths {
            let path = path.as_ref();
            if !path.exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from {}", path.display());
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Skipping configuration {}: {}", path.display(), e);
                }
            }
        }

        tracing::info!("Using default configuration");
        Self::default()
    }

    /// Save configuration to a TOML file
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        fs::write(path, content)
            .map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    /// Enabled datasets, in file order
    pub fn enabled_datasets(&self) -> Vec<(&str, &DatasetConfig)> {
        self.datasets
            .iter()
            .filter(|(_, d)| d.enabled)
            .map(|(name, d)| (name.as_str(), d))
            .collect()
    }

    /// Look up a dataset by name
    pub fn dataset(&self, name: &str) -> Result<&DatasetConfig, ConfigError> {
        let dataset = self
            .datasets
            .get(name)
            .ok_or_else(|| ConfigError::UnknownDataset(name.to_string()))?;
        if !dataset.enabled {
            return Err(ConfigError::Disabled(name.to_string()));
        }
        Ok(dataset)
    }
}

impl Default for Config {
    fn default() -> Self {
        let defaults = [
            ("mmlu", BenchmarkFamily::LetterChoice),
            ("bbh", BenchmarkFamily::MixedChoice),
            ("gsm8k", BenchmarkFamily::NumericBoxed),
            ("gpqa", BenchmarkFamily::ScienceChoice),
        ];

        let datasets = defaults
            .into_iter()
            .map(|(name, family)| {
                (
                    name.to_string(),
                    DatasetConfig {
                        family,
                        path: format!("data/{}.json", name),
                        enabled: true,
                    },
                )
            })
            .collect();

        Self {
            datasets,
            output: OutputConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("Dataset is disabled: {0}")]
    Disabled(String),
}
