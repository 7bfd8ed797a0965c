use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn taskpick_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".taskpick"))
}

/// Default config location; `--config` overrides it.
pub fn default_config_path() -> Result<PathBuf> {
    Ok(taskpick_home()?.join("config.toml"))
}
