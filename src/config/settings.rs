//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration data.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Global paths singleton.
static PATHS: OnceLock<Paths> = OnceLock::new();

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/rollcheck)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Get the global paths instance.
    pub fn get() -> &'static Paths {
        PATHS.get_or_init(|| Self::new().expect("Failed to initialize paths"))
    }

    /// Initialize paths using XDG directories.
    fn new() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "rollcheck", "rollcheck")
            .ok_or(ConfigError::DirectoryNotFound)?;

        let paths = Self {
            config_dir: project.config_dir().to_path_buf(),
        };

        fs::create_dir_all(&paths.config_dir)?;

        Ok(paths)
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Location of the result dataset (URL or local path).
    pub dataset_url: Option<String>,
    /// Fetch timeout in milliseconds.
    pub timeout_ms: u64,
    /// Default output format.
    pub default_output_format: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dataset_url: None,
            timeout_ms: 10_000,
            default_output_format: "plain".to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> ConfigResult<Self> {
        let paths = Paths::get();
        let file = paths.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Save settings to the default location.
    pub fn save(&self) -> ConfigResult<()> {
        let paths = Paths::get();
        let file = paths.settings_file();

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&file, content).map_err(|e| ConfigError::WriteFailed {
            path: file,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.dataset_url, None);
        assert_eq!(settings.timeout_ms, 10_000);
        assert_eq!(settings.default_output_format, "plain");
    }

    #[test]
    fn test_settings_serialization() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.timeout_ms, settings.timeout_ms);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"dataset_url": "https://example.com/results.json", "timeout_ms": 5000}}"#
        )
        .unwrap();

        let settings = AppSettings::load_from(file.path()).unwrap();
        assert_eq!(
            settings.dataset_url.as_deref(),
            Some("https://example.com/results.json")
        );
        assert_eq!(settings.timeout_ms, 5000);
        // Unspecified fields fall back to defaults.
        assert_eq!(settings.default_output_format, "plain");
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = AppSettings::load_from(Path::new("/nonexistent/settings.json"));
        assert!(matches!(result, Err(ConfigError::ReadFailed { .. })));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let result = AppSettings::load_from(file.path());
        assert!(matches!(result, Err(ConfigError::InvalidFormat(_))));
    }
}
