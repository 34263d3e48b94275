// Configuration for docsort
use crate::types::{DocsortError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// Defaults
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_MODEL_PATH: &str = "model.json";
pub const DEFAULT_DB_PATH: &str = "docs.sqlite";
pub const DEFAULT_CONFIG_FILE: &str = "docsort.toml";
pub const MAX_FEATURES: usize = 5000;
pub const MAX_ITER: usize = 200;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub data_dir: PathBuf,
    pub model_path: PathBuf,
    pub db_path: PathBuf,
    pub max_features: usize,
    pub max_iter: usize,
    pub log_level: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.into(),
            model_path: DEFAULT_MODEL_PATH.into(),
            db_path: DEFAULT_DB_PATH.into(),
            max_features: MAX_FEATURES,
            max_iter: MAX_ITER,
            log_level: "info".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Defaults, then `path` (or `docsort.toml` if present), then env.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| DocsortError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| DocsortError::Config(e.to_string()))?;
        if config.max_features == 0 {
            return Err(DocsortError::Config("max_features must be positive".into()));
        }
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(dir) = env::var("DOCSORT_DATA_DIR") {
            self.data_dir = dir.into();
        }
        if let Ok(path) = env::var("DOCSORT_MODEL_PATH") {
            self.model_path = path.into();
        }
        if let Ok(path) = env::var("DOCSORT_DB_PATH") {
            self.db_path = path.into();
        }
    }
}
