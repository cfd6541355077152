use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the model artifact when `model_path` is not configured.
const DEFAULT_MODEL_FILE: &str = "model.json";

/// Global configuration loaded from `~/.config/urlsentry/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentryConfig {
    /// Path to the tree-ensemble JSON. Defaults to `model.json` under the XDG data dir.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    /// Decision threshold on the malicious probability; overrides the value stored in the model.
    #[serde(default)]
    pub threshold: Option<f64>,
}

impl SentryConfig {
    /// Model path from config, or the XDG data default.
    pub fn resolved_model_path(&self) -> Result<PathBuf> {
        match &self.model_path {
            Some(p) => Ok(p.clone()),
            None => default_model_path(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsentry")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

pub fn default_model_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsentry")?;
    Ok(xdg_dirs.get_data_home().join(DEFAULT_MODEL_FILE))
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SentryConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SentryConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SentryConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SentryConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    if let Some(t) = cfg.threshold {
        if !(0.0..=1.0).contains(&t) {
            anyhow::bail!("threshold {} in {} must be within 0..=1", t, path.display());
        }
    }
    Ok(cfg)
}
