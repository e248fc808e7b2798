use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::probe::ProbeOptions;

/// Global configuration loaded from `~/.config/servcheck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Follow redirects and classify the final status instead of the 3xx.
    #[serde(default)]
    pub follow_redirects: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            follow_redirects: false,
        }
    }
}

impl CheckConfig {
    /// Runtime probe options for this configuration.
    pub fn probe_options(&self) -> ProbeOptions {
        ProbeOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            follow_redirects: self.follow_redirects,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("servcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CheckConfig> {
    load_at(&config_path()?)
}

/// Load (or create with defaults) a config file at an explicit path.
pub fn load_at(path: &Path) -> Result<CheckConfig> {
    if !path.exists() {
        let default_cfg = CheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: CheckConfig = toml::from_str(&data)?;
    Ok(cfg)
}
