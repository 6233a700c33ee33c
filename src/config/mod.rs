pub mod theme;

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::{LedgerError, Result},
    utils::{paths, persistence},
};

pub use theme::DarkMode;

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional override for the key-value store file. Defaults to `<data dir>/storage.json`.
    pub store_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            store_file: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_store_file(&self, base: &Path) -> PathBuf {
        match &self.store_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => base.join(path),
            None => paths::store_file_in(base),
        }
    }
}

/// Loads and saves [`Config`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn with_base_dir(base: &Path) -> Result<Self> {
        fs::create_dir_all(base)?;
        Ok(Self::new(paths::config_file_in(base)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            LedgerError::Config(format!("`{}`: {err}", self.path.display()))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        persistence::write_atomic(&self.path, &json)
    }
}
