// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub run: RunConfig,

    #[serde(default)]
    pub iteration: IterationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Demo to run when no demo is named on the command line.
    pub default: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            default: "iterasi".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationConfig {
    /// Upper bound shared by the three counter blocks.
    ///
    /// Signed so a zero or negative bound is expressible; only the
    /// post-condition block prints anything in that case.
    pub bound: i64,

    /// Elements walked by the collection block, printed by value.
    pub collection: Vec<i64>,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            bound: 5,
            collection: vec![1, 2, 3, 4, 5],
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
