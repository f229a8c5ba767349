//! Host configuration: where to find the pdfium library and how the viewer
//! is painted. Stored as pretty-printed JSON.

use crate::constants::PDFIUM_LIBRARY_ENV;
use crate::error::{PdfError, Result};
use crate::ui::style::ViewerStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub library_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub style: ViewerStyle,
}

impl AppConfig {
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(PDFIUM_LIBRARY_ENV).filter(|v| !v.trim().is_empty()) {
            log::debug!("{} overrides pdfium library path: {}", PDFIUM_LIBRARY_ENV, path);
            self.engine.library_path = Some(PathBuf::from(path));
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| PdfError::ConfigError(format!("{}: {}", path.display(), e)))
}

pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| PdfError::ConfigError(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}

pub fn load_or_default(path: Option<&Path>) -> AppConfig {
    let Some(path) = path else {
        return AppConfig::default();
    };

    match load_from_path(path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("Using default config: {}", e);
            AppConfig::default()
        }
    }
}
