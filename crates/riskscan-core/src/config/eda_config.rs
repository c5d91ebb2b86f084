//! EDA run configuration.
//!
//! The original scripts collected these values through interactive
//! prompts and an implicit global random state; here they are one
//! explicit structure passed to the pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configuration for one EDA batch run.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RISKSCAN_*`)
/// 2. Project config (`riskscan.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EdaConfig {
    /// Path to the record source. Unset means the caller supplies a table.
    pub source_path: Option<String>,
    /// Number of columns to keep when subsetting for clustering. Default: 10.
    pub top_count: Option<usize>,
    /// Subset by most-frequent (`true`) or least-frequent (`false`) columns. Default: true.
    pub use_top: Option<bool>,
    /// Maximum records clustered before deterministic sampling kicks in. Default: 200.
    pub sample_cap: Option<usize>,
    /// Number of entries kept when ranking frequencies or pairs. Default: 10.
    pub rank_count: Option<usize>,
    /// Seed for the record sampler. Default: 42.
    pub seed: Option<u64>,
    /// Collapse mirrored (A,B)/(B,A) pairs in the ranked pair list. Default: false.
    pub dedupe_pairs: Option<bool>,
}

impl EdaConfig {
    /// Load configuration with 3-layer resolution.
    ///
    /// Reads `riskscan.toml` from `root` if present, then applies
    /// `RISKSCAN_*` environment overrides, then validates.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("riskscan.toml");
        if project_config_path.exists() {
            let text = std::fs::read_to_string(&project_config_path).map_err(|e| {
                ConfigError::Io {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
            config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
                path: project_config_path.display().to_string(),
                message: e.to_string(),
            })?;
            tracing::debug!(path = %project_config_path.display(), "loaded project config");
        }

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `RISKSCAN_*` environment variable overrides.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env_parsed::<usize>("RISKSCAN_TOP_COUNT")? {
            self.top_count = Some(value);
        }
        if let Some(value) = read_env_parsed::<usize>("RISKSCAN_SAMPLE_CAP")? {
            self.sample_cap = Some(value);
        }
        if let Some(value) = read_env_parsed::<usize>("RISKSCAN_RANK_COUNT")? {
            self.rank_count = Some(value);
        }
        if let Some(value) = read_env_parsed::<u64>("RISKSCAN_SEED")? {
            self.seed = Some(value);
        }
        if let Ok(value) = std::env::var("RISKSCAN_SOURCE_PATH") {
            self.source_path = Some(value);
        }
        Ok(())
    }

    /// Reject values that would fail every downstream operation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_count == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "top_count".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.sample_cap == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "sample_cap".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.rank_count == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "rank_count".to_string(),
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the effective clustering column count, defaulting to 10.
    pub fn effective_top_count(&self) -> usize {
        self.top_count.unwrap_or(10)
    }

    /// Returns whether most-frequent columns are kept, defaulting to true.
    pub fn effective_use_top(&self) -> bool {
        self.use_top.unwrap_or(true)
    }

    /// Returns the effective sample cap, defaulting to 200.
    pub fn effective_sample_cap(&self) -> usize {
        self.sample_cap.unwrap_or(200)
    }

    /// Returns the effective ranking count, defaulting to 10.
    pub fn effective_rank_count(&self) -> usize {
        self.rank_count.unwrap_or(10)
    }

    /// Returns the effective sampler seed, defaulting to 42.
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(42)
    }

    /// Returns whether mirrored pairs are collapsed, defaulting to false.
    pub fn effective_dedupe_pairs(&self) -> bool {
        self.dedupe_pairs.unwrap_or(false)
    }
}

/// Read and parse an environment variable, erroring on malformed values.
fn read_env_parsed<T: std::str::FromStr>(variable: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(variable) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvOverride {
                variable: variable.to_string(),
                message: format!("cannot parse {raw:?}"),
            }),
        Err(_) => Ok(None),
    }
}
