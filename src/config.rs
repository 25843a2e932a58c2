//! Persisted application settings stored as TOML under the app root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::prediction::{CGPA_DEFAULT, IQ_DEFAULT};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Default model artifact location, relative to the working directory.
pub const DEFAULT_MODEL_FILE: &str = "placement_model.json";
/// Environment variable that replaces the configured model path.
pub const MODEL_PATH_ENV: &str = "PLACEMENT_MODEL_PATH";

/// Settings persisted in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub about: AboutSettings,
    #[serde(default)]
    pub form: FormDefaults,
}

/// Where the classifier artifact lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Artifact path; relative paths resolve against the working directory.
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

impl ModelSettings {
    /// Model path after applying the `PLACEMENT_MODEL_PATH` override.
    pub fn resolved_path(&self) -> PathBuf {
        match std::env::var_os(MODEL_PATH_ENV) {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => self.path.clone(),
        }
    }
}

/// Copy shown in the sidebar "About" panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSettings {
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Accuracy reported by the training process, as a fraction in `0..=1`.
    /// Omitted from a written `[about]` table means "not shown".
    #[serde(default)]
    pub reported_accuracy: Option<f64>,
}

impl Default for AboutSettings {
    fn default() -> Self {
        Self {
            model_name: default_model_name(),
            reported_accuracy: default_reported_accuracy(),
        }
    }
}

/// Initial values shown in the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    #[serde(default = "default_iq")]
    pub default_iq: i32,
    #[serde(default = "default_cgpa")]
    pub default_cgpa: f64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            default_iq: default_iq(),
            default_cgpa: default_cgpa(),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_FILE)
}

fn default_model_name() -> String {
    "Random Forest Classifier".to_string()
}

fn default_reported_accuracy() -> Option<f64> {
    Some(0.85)
}

fn default_iq() -> i32 {
    IQ_DEFAULT
}

fn default_cgpa() -> f64 {
    CGPA_DEFAULT
}

/// Errors that can occur while reading or writing settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config: {0}")]
    SerializeToml(#[from] toml::ser::Error),
    #[error("No suitable config directory available")]
    NoConfigDir,
}

/// Resolve the path to the TOML settings file.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load settings from disk, returning defaults if the file is missing.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    load_from_path(&config_path()?)
}

/// Load settings, writing the defaults out on first launch so they can be edited.
pub fn load_or_init() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }
    let settings = AppSettings::default();
    save_to_path(&settings, &path)?;
    tracing::info!("Wrote default settings to {}", path.display());
    Ok(settings)
}

/// Load settings from a specific path, returning defaults if it does not exist.
pub fn load_from_path(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Save settings to a specific path, creating parent directories as needed.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(settings)?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_dirs::test_support::OverrideGuard;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_from_path(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.model.path, PathBuf::from("placement_model.json"));
        assert_eq!(settings.form.default_iq, 100);
        assert_eq!(settings.form.default_cgpa, 7.0);
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[model]\npath = \"models/forest.json\"\n").unwrap();
        let settings = load_from_path(&path).unwrap();
        assert_eq!(settings.model.path, PathBuf::from("models/forest.json"));
        assert_eq!(settings.about, AboutSettings::default());
        assert_eq!(settings.form, FormDefaults::default());
    }

    #[test]
    fn save_then_load_preserves_edits() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let mut settings = AppSettings::default();
        settings.about.model_name = "Logistic Regression".into();
        settings.about.reported_accuracy = None;
        settings.form.default_cgpa = 8.25;
        save_to_path(&settings, &path).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), settings);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[model\npath = 3").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn load_or_init_writes_defaults_once() {
        let base = tempdir().unwrap();
        let _guard = OverrideGuard::set(base.path().to_path_buf());
        let path = config_path().unwrap();
        assert!(!path.exists());
        let settings = load_or_init().unwrap();
        assert!(path.exists());
        assert_eq!(settings, AppSettings::default());
        assert_eq!(load_or_default().unwrap(), settings);
    }
}
