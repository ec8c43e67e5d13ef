use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::ConfigError;
use crate::ledger::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_WARN_THRESHOLD};

const HOME_ENV: &str = "BUDGET_TRACKER_HOME";
const DEFAULT_DIR_NAME: &str = ".budget_tracker";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// User preferences for the tracker front-end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_threshold")]
    pub warn_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_symbol(),
            warn_threshold: Self::default_threshold(),
        }
    }
}

impl Config {
    fn default_symbol() -> String {
        DEFAULT_CURRENCY_SYMBOL.into()
    }

    fn default_threshold() -> f64 {
        DEFAULT_WARN_THRESHOLD
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.warn_threshold.is_finite() || self.warn_threshold <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "warn_threshold must be a positive number (got {})",
                self.warn_threshold
            )));
        }
        Ok(())
    }
}

/// Returns the configuration directory, defaulting to `~/.budget_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(CONFIG_FILE),
        }
    }

    /// Loads the stored configuration, falling back to defaults when no file exists.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
