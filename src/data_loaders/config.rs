use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use super::yaml::load_yaml;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub debug: bool,
    pub settings: AppSettings,
}

#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Workshop content directory override; skips discovery when set.
    pub workshop_dir: Option<PathBuf>,
    /// Extractor binary override; otherwise resolved by the bootstrap.
    pub extractor: Option<PathBuf>,
    /// Reveal the target directory after a successful extraction.
    pub open_after_extract: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            workshop_dir: None,
            extractor: None,
            open_after_extract: true,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Option<Self> {
        let value = load_yaml(path)?;
        Some(Self::from_yaml(&value))
    }

    pub fn from_yaml(root: &Value) -> Self {
        let mut config = Self::default();
        let Some(map) = root.as_mapping() else {
            return config;
        };

        config.debug = bool_at(map, "debug").unwrap_or(config.debug);

        if let Some(settings) = mapping_at(map, "settings") {
            config.settings.workshop_dir = path_at(settings, "workshop_dir");
            config.settings.extractor = path_at(settings, "extractor");
            config.settings.open_after_extract = bool_at(settings, "open_after_extract")
                .unwrap_or(config.settings.open_after_extract);
        }

        config
    }
}

fn bool_at(map: &Mapping, key: &str) -> Option<bool> {
    map.get(Value::String(key.to_string()))?.as_bool()
}

fn str_at<'a>(map: &'a Mapping, key: &str) -> Option<&'a str> {
    map.get(Value::String(key.to_string()))?.as_str()
}

fn mapping_at<'a>(map: &'a Mapping, key: &str) -> Option<&'a Mapping> {
    map.get(Value::String(key.to_string()))?.as_mapping()
}

fn path_at(map: &Mapping, key: &str) -> Option<PathBuf> {
    let raw = str_at(map, key)?.trim();
    if raw.is_empty() {
        return None;
    }
    Some(PathBuf::from(raw))
}
