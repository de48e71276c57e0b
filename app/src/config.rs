use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use viewer_overlay::OverlaySettings;

/// Contents of `overlay.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub overlay: OverlaySettings,
}

fn get_config_path() -> Option<PathBuf> {
    let proj_dirs = ProjectDirs::from("me", "liesegang", "video_editor")?;
    let config_dir = proj_dirs.config_dir();
    if !config_dir.exists() {
        if let Err(e) = fs::create_dir_all(config_dir) {
            error!("Failed to create config directory: {}", e);
            return None;
        }
    }
    Some(config_dir.join("overlay.toml"))
}

pub fn read_config(path: &Path) -> Result<PreviewConfig> {
    let toml_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: PreviewConfig = toml::from_str(&toml_str)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

pub fn write_config(path: &Path, config: &PreviewConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, toml_str).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn save_config(config: &PreviewConfig) {
    let Some(path) = get_config_path() else {
        return;
    };
    match write_config(&path, config) {
        Ok(()) => info!("Overlay settings saved to {}", path.display()),
        Err(e) => error!("{:#}", e),
    }
}

pub fn load_config() -> PreviewConfig {
    if let Some(path) = get_config_path() {
        if path.exists() {
            match read_config(&path) {
                Ok(config) => return config,
                Err(e) => warn!("{:#}, using defaults", e),
            }
        }
    }
    PreviewConfig::default()
}
