//! Settings persistence - load and save settings to disk.
//!
//! Settings are stored in the platform-specific config folder:
//! - macOS: ~/Library/Application Support/org.keypad.Keypad-Calculator/
//! - Windows: %APPDATA%\keypad\Keypad Calculator\config\
//! - Linux: ~/.config/keypadcalculator/
//!
//! A `--config PATH` flag replaces the platform location entirely.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "keypad";
const APP_NAME: &str = "Keypad Calculator";
const CONFIG_FILENAME: &str = "settings.toml";

/// Everything the terminal front end reads from `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub keys: KeySettings,
    pub display: DisplaySettings,
}

/// Remappable key bindings.
///
/// Each entry is a single character or a named key (`<enter>`, `<bs>`,
/// `<esc>`). Digits, `.` and the operator keys are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeySettings {
    pub equals: Vec<String>,
    pub clear: Vec<String>,
    pub backspace: Vec<String>,
}

impl Default for KeySettings {
    fn default() -> Self {
        Self {
            equals: vec!["<enter>".to_string(), "=".to_string()],
            clear: vec!["<esc>".to_string(), "c".to_string(), "C".to_string()],
            backspace: vec!["<bs>".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// History entries shown by `:history` and `eval --history`.
    pub history_lines: usize,
    /// How long an error banner holds the display.
    pub error_timeout_ms: u64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            history_lines: 5,
            error_timeout_ms: 3000,
        }
    }
}

impl DisplaySettings {
    pub fn error_timeout(&self) -> Duration {
        Duration::from_millis(self.error_timeout_ms)
    }
}

/// Get the path to the platform settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Resolve the settings file, preferring an explicit override.
pub fn resolve_path(override_path: Option<&Path>) -> Option<PathBuf> {
    override_path.map(Path::to_path_buf).or_else(settings_path)
}

/// Load settings, falling back to defaults.
///
/// Returns default settings if:
/// - The settings file doesn't exist
/// - The settings file cannot be parsed
/// - No path was given and the platform directory cannot be determined
pub fn load_settings(override_path: Option<&Path>) -> Settings {
    let Some(path) = resolve_path(override_path) else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Settings::default();
    };
    load_settings_from(&path)
}

/// Load settings from an explicit file, falling back to defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(error) => {
                tracing::warn!("Failed to parse settings file: {error}, using defaults");
                Settings::default()
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        }
        Err(error) => {
            tracing::warn!("Failed to read settings file: {error}, using defaults");
            Settings::default()
        }
    }
}

/// Render settings as the TOML written to disk.
pub fn to_toml(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(settings).context("serialize settings")
}

/// Save settings to `path`, creating the parent directory if needed.
pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory {}", parent.display()))?;
    }
    let content = to_toml(settings)?;
    fs::write(path, content).with_context(|| format!("write settings to {}", path.display()))?;
    tracing::info!(path = %path.display(), "saved settings");
    Ok(())
}

/// Write default settings, refusing to replace an existing file unless
/// `force` is set.
pub fn init_settings(path: &Path, force: bool) -> Result<Settings> {
    if path.exists() && !force {
        return Err(anyhow!(
            "settings file already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    let settings = Settings::default();
    save_settings(&settings, path)?;
    Ok(settings)
}
