use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the environment variable that points at the dataset file.
pub const DATASET_ENV_VAR: &str = "ONOMA_DATASET";

const DEFAULT_DATASET_FILE: &str = "names.csv";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Dataset file to load when neither `--data` nor the environment
    /// variable selects one.
    #[serde(default)]
    pub dataset: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        config_dir().join("config.toml")
    }
}

/// Resolve the dataset file path based on priority:
/// 1. Explicit `--data` flag (with tilde expansion)
/// 2. ONOMA_DATASET environment variable (with tilde expansion)
/// 3. `dataset` entry in the config file
/// 4. `names.csv` inside the onoma config directory
pub fn resolve_dataset_path(explicit_path: Option<&str>, config: &Config) -> PathBuf {
    if let Some(path) = explicit_path {
        return expand_tilde(path);
    }

    if let Ok(env_path) = std::env::var(DATASET_ENV_VAR) {
        return expand_tilde(&env_path);
    }

    if let Some(path) = &config.dataset {
        return path.clone();
    }

    config_dir().join(DEFAULT_DATASET_FILE)
}

/// Configuration directory: XDG data dir when available, ~/.onoma as a
/// fallback for systems without one.
fn config_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        return data_dir.join("onoma");
    }

    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".onoma");
    }

    PathBuf::from(".onoma")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
