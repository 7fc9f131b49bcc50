//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.vimtodo/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub colors: ColorConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_file: Option<String>,
    pub title: Option<String>,
    pub show_days: Option<bool>,
    pub sort_by_urgency: Option<bool>,
    pub log_level: Option<String>,
}

/// Color names as written in the file. The TUI turns them into real colors.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct ColorConfig {
    pub overdue: Option<String>,
    pub today: Option<String>,
    pub urgent: Option<String>,
    pub soon: Option<String>,
    pub distant: Option<String>,
    pub untimed: Option<String>,
    pub text: Option<String>,
    pub chrome: Option<String>,
    pub prompt: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DATA_FILE: &str = ".vim_todo.json";
pub const DEFAULT_TITLE: &str = "Vim Todo List";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const CONFIG_DIR: &str = ".vimtodo";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_file: PathBuf,
    pub title: String,
    pub show_days: bool,
    pub sort_by_urgency: bool,
    pub log_level: LevelFilter,
    pub colors: ColorConfig,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.vimtodo`, where the config and log file live.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR))
}

/// Returns the path to `~/.vimtodo/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Default log file, `~/.vimtodo/vimtodo.log`.
pub fn default_log_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("vimtodo.log"))
}

/// Load config from `~/.vimtodo/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TodoConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TodoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TodoConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TodoConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a specific config file.
pub fn load_config_from(path: &Path) -> Result<TodoConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TodoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# vimtodo configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_file = "~/.vim_todo.json"    # Or set VIMTODO_FILE, or pass --file
# title = "Vim Todo List"
# show_days = false                 # Start with "in Nd" labels instead of raw deadlines
# sort_by_urgency = false           # Start in sort-by-urgency mode
# log_level = "info"                # "off", "error", "warn", "info", "debug", "trace"

# [colors]                          # Color names ("red", "lightred", ...) or "#rrggbb"
# overdue = "red"
# today = "lightred"
# urgent = "yellow"
# soon = "cyan"
# distant = "green"
# untimed = "white"
# text = "magenta"
# chrome = "blue"
# prompt = "yellow"
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_file` is the `--file` flag (None = not specified).
pub fn resolve(config: &TodoConfig, cli_file: Option<&Path>) -> ResolvedConfig {
    // Data file: CLI → env → config → default
    let data_file = cli_file
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("VIMTODO_FILE").ok().map(|p| expand_home(&p)))
        .or_else(|| config.general.data_file.as_deref().map(expand_home))
        .unwrap_or_else(default_data_file);

    let log_level = match config.general.log_level.as_deref() {
        Some(level) => level.parse().unwrap_or_else(|_| {
            warn!("Unknown log level {:?}, using {}", level, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        data_file,
        title: config
            .general
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        show_days: config.general.show_days.unwrap_or(false),
        sort_by_urgency: config.general.sort_by_urgency.unwrap_or(false),
        log_level,
        colors: config.colors.clone(),
    }
}

/// `~/.vim_todo.json`, or a bare relative name if there is no home directory.
fn default_data_file() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(DEFAULT_DATA_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
