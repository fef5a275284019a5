use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_health_interval_secs")]
    pub health_interval_secs: u64,
    #[serde(default = "default_top_k")]
    pub default_top_k: u32,
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
    /// Command that receives copied text on stdin (e.g. "pbcopy", "wl-copy")
    #[serde(default)]
    pub clipboard_command: Option<String>,
    /// Where session exports are written (default: data directory)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost:5501".to_string()
}

fn default_health_interval_secs() -> u64 {
    10
}

fn default_top_k() -> u32 {
    5
}

fn default_toast_ms() -> u64 {
    2200
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            health_interval_secs: default_health_interval_secs(),
            default_top_k: default_top_k(),
            toast_ms: default_toast_ms(),
            clipboard_command: None,
            export_dir: None,
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let mut config: Self = serde_yaml::from_str(text).context("Invalid config file")?;
        // zero would poll /health on every loop pass
        config.health_interval_secs = config.health_interval_secs.max(1);
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&text)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(crate::utils::default_export_dir)
    }
}

/// Determine the config file path with fallback logic.
///
/// An explicit path must exist. Otherwise the platform config directory is
/// tried, then `./config.yaml`; `None` means run on defaults.
pub fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("docqa").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
