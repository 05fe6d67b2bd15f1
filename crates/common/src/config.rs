//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{MonspanError, MonspanResult};

/// Global application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Fullscreen monitor selection.
    #[serde(default)]
    pub fullscreen: FullscreenConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Layout file used when no display source is given explicitly.
    #[serde(default)]
    pub layout_file: Option<PathBuf>,
}

/// How the fullscreen frame buffer is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FullscreenMode {
    /// Only the monitor the viewer window currently occupies.
    #[default]
    Current,
    /// The monitors listed in `selected_monitors`.
    Selected,
    /// Every connected monitor.
    All,
}

impl FullscreenMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Selected => "selected",
            Self::All => "all",
        }
    }

    /// Whether the mode spans more than the current monitor.
    pub fn spans_monitors(&self) -> bool {
        !matches!(self, Self::Current)
    }
}

impl std::str::FromStr for FullscreenMode {
    type Err = MonspanError;

    /// Case-insensitive mode name.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "current" => Ok(Self::Current),
            "selected" => Ok(Self::Selected),
            "all" => Ok(Self::All),
            other => Err(MonspanError::config(format!(
                "unknown fullscreen mode {other:?} (expected current, selected or all)"
            ))),
        }
    }
}

/// Persisted fullscreen settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FullscreenConfig {
    /// Fullscreen mode.
    #[serde(default)]
    pub mode: FullscreenMode,

    /// 1-based, comma-separated monitor positions (e.g. "1,3"), or "all".
    #[serde(default)]
    pub selected_monitors: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "monspan=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Read config from `path`.
    pub fn read_from(path: &Path) -> MonspanResult<Self> {
        if !path.exists() {
            return Err(MonspanError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load config from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match Self::read_from(path) {
            Ok(config) => config,
            Err(MonspanError::FileNotFound { .. }) => Self::default(),
            Err(e) => {
                tracing::warn!("Failed to load config at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> MonspanResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("monspan").join("config.json")
}
