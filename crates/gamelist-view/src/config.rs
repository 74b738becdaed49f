use crate::error::GameListResult;
use crate::input::{InputMapping, Key};
use crate::settings::{Locale, Settings};
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_screen() -> [f32; 2] {
    [1280.0, 720.0]
}

fn default_grid_size() -> [f32; 2] {
    [5.0, 3.0]
}

fn default_hold_ms() -> u64 {
    50
}

/// A key press replayed by the frontend, held for `hold_ms`
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptStep {
    pub key: Key,
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
}

/// Frontend configuration. Relative paths are resolved against the directory of the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    #[serde(default = "default_screen")]
    pub screen: [f32; 2],
    #[serde(default = "default_grid_size")]
    pub grid_size: [f32; 2],
    pub theme: PathBuf,
    #[serde(default)]
    pub theme_name: String,
    pub gamelist: PathBuf,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default = "InputMapping::with_defaults")]
    pub input: InputMapping,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub script: Vec<ScriptStep>,
}

impl FrontendConfig {
    pub fn from_json5(text: &str) -> GameListResult<Self> {
        Ok(json5::from_str(text)?)
    }

    pub fn load(path: &Path) -> GameListResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_json5(&text)?;

        if let Some(dir) = path.parent() {
            config.theme = dir.join(&config.theme);
            config.gamelist = dir.join(&config.gamelist);
        }

        Ok(config)
    }
}
