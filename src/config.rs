//! Engine configuration
//!
//! Values come from, in increasing priority:
//! - built-in defaults
//! - a YAML file (missing fields keep their default)
//! - `MEDPREDICT_DB` / `MEDPREDICT_DELAY_MS` environment variables
//!
//! ```yaml
//! db_path: medpredict.db
//! analysis_delay_ms: 2000
//! max_predictions: 3
//! max_suggestions: 10
//! seed: 42
//! catalog_path: /etc/medpredict/catalog.json
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{MedPredictError, Result};
use crate::ranking::DEFAULT_MAX_PREDICTIONS;
use crate::suggest::DEFAULT_MAX_SUGGESTIONS;

pub const ENV_DB_PATH: &str = "MEDPREDICT_DB";
pub const ENV_DELAY_MS: &str = "MEDPREDICT_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// SQLite file for profile and history (`:memory:` for a throwaway store)
    pub db_path: String,

    /// Artificial latency before an analysis returns, 0 disables it
    pub analysis_delay_ms: u64,

    /// Predictions kept per analysis, at most 3
    pub max_predictions: usize,

    /// Suggestions returned per lookup, at most 10
    pub max_suggestions: usize,

    /// Jitter seed; entropy when unset
    pub seed: Option<u64>,

    /// Alternative catalog JSON; built-in dataset when unset
    pub catalog_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            db_path: "medpredict.db".to_string(),
            analysis_delay_ms: 2000,
            max_predictions: DEFAULT_MAX_PREDICTIONS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            seed: None,
            catalog_path: None,
        }
    }
}

impl EngineConfig {
    /// Throwaway configuration: in-memory store, no delay
    pub fn in_memory() -> Self {
        Self {
            db_path: ":memory:".to_string(),
            analysis_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Parse YAML, defaulting missing fields
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            MedPredictError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&raw)
    }

    /// Load from an optional file, then apply process environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let env: HashMap<String, String> = std::env::vars().collect();
        config.with_env(&env)
    }

    /// Apply `MEDPREDICT_*` overrides from a variable map
    pub fn with_env(mut self, env: &HashMap<String, String>) -> Result<Self> {
        if let Some(db) = env.get(ENV_DB_PATH).filter(|v| !v.trim().is_empty()) {
            self.db_path = db.clone();
        }

        if let Some(delay) = env.get(ENV_DELAY_MS) {
            self.analysis_delay_ms = delay.trim().parse().map_err(|_| {
                MedPredictError::Config(format!("{} must be an integer, got {:?}", ENV_DELAY_MS, delay))
            })?;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.db_path.trim().is_empty() {
            return Err(MedPredictError::Config("db_path must not be empty".to_string()));
        }
        if !(1..=DEFAULT_MAX_PREDICTIONS).contains(&self.max_predictions) {
            return Err(MedPredictError::Config(format!(
                "max_predictions must be between 1 and {}, got {}",
                DEFAULT_MAX_PREDICTIONS, self.max_predictions
            )));
        }
        if !(1..=DEFAULT_MAX_SUGGESTIONS).contains(&self.max_suggestions) {
            return Err(MedPredictError::Config(format!(
                "max_suggestions must be between 1 and {}, got {}",
                DEFAULT_MAX_SUGGESTIONS, self.max_suggestions
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "db={}, delay={}ms, predictions={}, suggestions={}, seed={}",
            self.db_path,
            self.analysis_delay_ms,
            self.max_predictions,
            self.max_suggestions,
            self.seed.map(|s| s.to_string()).unwrap_or_else(|| "random".to_string())
        )
    }
}
