use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Environment variable naming a settings file when `--config` is absent.
pub const CONFIG_ENV: &str = "DUOTONE_CONFIG";

/// Defaults loaded from a YAML settings file.
///
/// Every key is optional; command-line flags win over anything set here.
///
/// ```yaml
/// theme: night
/// dither: atkinson
/// contrast: 1.3
/// scale: 2
/// ```
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Theme name
    #[serde(default)]
    pub theme: Option<String>,

    /// Background color as hex
    #[serde(default)]
    pub bg: Option<String>,

    /// Foreground color as hex
    #[serde(default)]
    pub fg: Option<String>,

    /// Dither method name
    #[serde(default)]
    pub dither: Option<String>,

    #[serde(default)]
    pub contrast: Option<f32>,

    #[serde(default)]
    pub brightness: Option<f32>,

    #[serde(default)]
    pub invert: Option<bool>,

    /// Pixel scale factor
    #[serde(default)]
    pub scale: Option<u32>,
}

impl Settings {
    /// Parse settings from YAML text. `path` is only used in errors.
    pub fn from_yaml(path: &Path, content: &str) -> Result<Self, AppError> {
        // An empty file is a valid, empty document
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse a settings file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let settings = Self::from_yaml(path, &content)?;
        tracing::info!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Settings file to use: the explicit path, else `$DUOTONE_CONFIG`.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// Load the located settings file, or defaults if there is none.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, AppError> {
        match Self::locate(explicit) {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }
}
