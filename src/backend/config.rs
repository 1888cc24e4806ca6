use crate::frontend::services::context::AuthSettings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "AlumniPortal";
const CONFIG_FILE: &str = "config.json";

/// Overrides `api.base_url` when set.
pub const API_URL_ENV: &str = "ALUMNI_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub ui: UiConfig,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub settle_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub toast_auto_close_ms: u64,
    pub error_toast_auto_close_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            auth: AuthConfig::default(),
            ui: UiConfig::default(),
            log_level: crate::utils::logging::DEFAULT_FILTER.to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_secs: 15,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 500,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_auto_close_ms: 2000,
            error_toast_auto_close_ms: 5000,
        }
    }
}

/// Per-user data directory: `%APPDATA%` on Windows, Application Support
/// on macOS, `$XDG_CONFIG_HOME` or `~/.config` elsewhere.
fn app_dir() -> Result<PathBuf> {
    let env_dir = |name: &str| std::env::var_os(name).filter(|dir| !dir.is_empty()).map(PathBuf::from);

    let base = match std::env::consts::OS {
        "windows" => env_dir("APPDATA"),
        "macos" => env_dir("HOME").map(|home| home.join("Library/Application Support")),
        _ => env_dir("XDG_CONFIG_HOME").or_else(|| env_dir("HOME").map(|home| home.join(".config"))),
    };
    base.map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| anyhow::anyhow!("Could not determine the user data directory"))
}

impl AppConfig {
    /// Gets the path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(app_dir()?.join(CONFIG_FILE))
    }

    /// Loads the config from the app directory and applies env overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_or_create(&Self::config_path()?)?;
        config.apply_env();
        Ok(config)
    }

    /// Reads the config, writing the defaults out first if the file is missing.
    /// A failed write is logged and the defaults are still returned.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }

        let config = Self::default();
        match config.save_to(path) {
            Ok(()) => log::info!("Wrote default config to {}", path.display()),
            Err(e) => log::warn!("Failed to write default config: {e:#}"),
        }
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            self.api.base_url = url.trim().to_string();
        }
    }

    pub fn auth_settings(&self) -> AuthSettings {
        AuthSettings {
            settle_delay: Duration::from_millis(self.auth.settle_delay_ms),
            toast_auto_close: Duration::from_millis(self.ui.toast_auto_close_ms),
            error_toast_auto_close: Duration::from_millis(self.ui.error_toast_auto_close_ms),
        }
    }
}
