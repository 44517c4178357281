use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use termfolio_core::{Millis, RevealConfig};

use crate::dotfiles::{default_manifest, DotfileEntry, DEFAULT_RAW_BASE_URL};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Text in the window title bar
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub dotfiles: DotfilesConfig,

    /// Typing behavior of the dotfile panes
    #[serde(default = "RevealConfig::background")]
    pub typing: RevealConfig,

    /// Dotfile panes on the home tab, top-left, top-right, then bottom
    #[serde(default = "default_background_panes")]
    pub background_panes: Vec<BackgroundPaneConfig>,

    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

fn default_title() -> String {
    "kevintraver.com".to_string()
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_true() -> bool {
    true
}

/// Where the dotfiles come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotfilesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_raw_base_url")]
    pub raw_base_url: String,

    #[serde(default = "default_manifest")]
    pub manifest: Vec<DotfileEntry>,

    /// Read from this directory instead of `raw_base_url`
    #[serde(default)]
    pub local_dir: Option<PathBuf>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_raw_base_url() -> String {
    DEFAULT_RAW_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for DotfilesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            raw_base_url: default_raw_base_url(),
            manifest: default_manifest(),
            local_dir: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// One dotfile pane of the home grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundPaneConfig {
    /// Index into the successfully loaded dotfiles
    pub file_index: usize,

    #[serde(default)]
    pub start_delay_ms: Millis,

    /// Shown while the mouse hovers the pane
    pub label: String,

    /// Opened when the pane is clicked
    pub link: String,
}

impl BackgroundPaneConfig {
    pub fn new(file_index: usize, start_delay_ms: Millis, label: &str, link: &str) -> Self {
        Self {
            file_index,
            start_delay_ms,
            label: label.to_string(),
            link: link.to_string(),
        }
    }
}

fn default_background_panes() -> Vec<BackgroundPaneConfig> {
    vec![
        BackgroundPaneConfig::new(
            0,
            0.0,
            "Raycast Extensions",
            "https://raycast.com/kevintraver",
        ),
        BackgroundPaneConfig::new(1, 500.0, "GitHub", "https://github.com/kevintraver"),
        BackgroundPaneConfig::new(
            5,
            1000.0,
            "View Dotfiles",
            "https://github.com/kevintraver/dotfiles",
        ),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            dotfiles: DotfilesConfig::default(),
            typing: RevealConfig::background(),
            background_panes: default_background_panes(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

impl Config {
    /// `<config dir>/termfolio/config.json`
    pub fn default_path() -> Option<PathBuf> {
        crate::services::log_dirs::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Loads `explicit` if given, else the default path if that file exists,
    /// else the built-in defaults. The result is validated.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => {
                    tracing::info!("Loading config from {}", path.display());
                    Self::load_from_file(path)?
                }
                None => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let typing = &self.typing;

        if typing.base_speed.is_nan() || typing.base_speed <= 0.0 {
            return Err(ConfigError::ValidationError(
                "typing.base_speed must be greater than 0".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&typing.variability) {
            return Err(ConfigError::ValidationError(
                "typing.variability must be in [0, 1)".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&typing.pause_probability) {
            return Err(ConfigError::ValidationError(
                "typing.pause_probability must be in [0, 1)".to_string(),
            ));
        }
        if typing.start_delay_ms < 0.0 || typing.loop_delay_ms < 0.0 {
            return Err(ConfigError::ValidationError(
                "typing delays must not be negative".to_string(),
            ));
        }

        for entry in &self.dotfiles.manifest {
            if entry.path.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "dotfile path cannot be empty".to_string(),
                ));
            }
        }

        for pane in &self.background_panes {
            if pane.start_delay_ms < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "background pane {} has a negative start delay",
                    pane.file_index
                )));
            }
        }

        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ValidationError(
                "frame_interval_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
