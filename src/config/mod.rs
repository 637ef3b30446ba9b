//! Assistant configuration.
//!
//! Loaded from JSON. Every field is optional; missing fields take the defaults below.
//!
//! ```json
//! {
//!   "catalog_path": "/path/to/catalog.json",
//!   "initial_history": ["milk", "bread"],
//!   "history_probability": 0.5,
//!   "seasonal_probability": 0.4,
//!   "advisory_delay_ms": 2000,
//!   "seed": 42
//! }
//! ```
//!
//! Resolution order: `--config <path>`, then `$SHOPPING_VOICE_CONFIG`, then
//! `<platform config dir>/shopping-voice/config.json`. A missing file at the default
//! location is not an error; a missing file that was asked for explicitly is.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, load_catalog};
use crate::engine::suggest::{DEFAULT_HISTORY_PROBABILITY, DEFAULT_SEASONAL_PROBABILITY};
use crate::utils::get_config_path;

/// Purchase history the assistant starts with
pub const DEFAULT_HISTORY: [&str; 5] = ["milk", "bread", "eggs", "apples", "chicken"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub initial_history: Vec<String>,
    pub history_probability: f64,
    pub seasonal_probability: f64,
    pub advisory_delay_ms: u64,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            initial_history: DEFAULT_HISTORY.iter().map(|s| s.to_string()).collect(),
            history_probability: DEFAULT_HISTORY_PROBABILITY,
            seasonal_probability: DEFAULT_SEASONAL_PROBABILITY,
            advisory_delay_ms: 2000,
            seed: None,
        }
    }
}

impl Config {
    /// Load and validate a config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {}", path.display()))?;
        config.validate().with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Load from an explicit path, or from the default location if it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        let path = match get_config_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("No config location available, using defaults: {}", e);
                return Ok(Self::default());
            }
        };

        if path.exists() {
            tracing::info!(path = %path.display(), "loading config");
            Self::from_path(&path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Check probabilities are within 0..=1
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("history_probability", self.history_probability),
            ("seasonal_probability", self.seasonal_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                bail!("{} must be between 0 and 1 (got {})", name, value);
            }
        }
        Ok(())
    }

    pub fn advisory_delay(&self) -> Duration {
        Duration::from_millis(self.advisory_delay_ms)
    }

    /// The configured catalog file, or the built-in reference table
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => load_catalog(path),
            None => Ok(Catalog::reference()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.initial_history.len(), 5);
        assert_eq!(config.history_probability, 0.5);
        assert_eq!(config.seasonal_probability, 0.4);
        assert_eq!(config.advisory_delay(), Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = write_temp(r#"{"seed": 42, "initial_history": []}"#);
        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.seed, Some(42));
        assert!(config.initial_history.is_empty());
        assert_eq!(config.advisory_delay_ms, 2000);
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let file = write_temp(r#"{"history_probability": 1.5}"#);
        let err = Config::from_path(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("history_probability must be between 0 and 1"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let file = write_temp("seed = 4");
        let err = Config::from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config JSON"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = Config::load(Some(Path::new("/nonexistent/config.json")));
        assert!(result.unwrap_err().to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_catalog_defaults_to_reference() {
        let config = Config::default();
        assert_eq!(config.catalog().unwrap().len(), Catalog::reference().len());
    }

    #[test]
    fn test_catalog_from_configured_path() {
        let catalog_file =
            write_temp(r#"[{"name": "kombucha", "category": "Beverages", "price": 3.5}]"#);
        let config =
            Config { catalog_path: Some(catalog_file.path().to_path_buf()), ..Config::default() };
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("kombucha").is_some());
    }
}
