use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use super::DisplayConfig;

pub const DISPLAY_CONFIG_ENV: &str = "ROVER_DISPLAY_CONFIG";

pub fn load_display_config() -> Result<DisplayConfig> {
    match env::var_os(DISPLAY_CONFIG_ENV) {
        Some(path) => load_display_config_from_path(path),
        None => Ok(DisplayConfig::default()),
    }
}

pub fn load_display_config_from_path(path: impl AsRef<Path>) -> Result<DisplayConfig> {
    read_json(path.as_ref(), "display config")
}

fn read_json<T>(path: &Path, label: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading {label} file: {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing {label} file as JSON: {}", path.display()))
}
