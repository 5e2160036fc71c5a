/// Viewer settings
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/asset-viewer/config.json
/// - macOS: ~/Library/Application Support/asset-viewer/config.json
/// - Windows: %APPDATA%\asset-viewer\config.json
///
/// Every field is optional in the file; missing ones fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::asset::DEFAULT_IMAGES_DIR;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Directory holding `{asset_id}.jpg` files
    pub images_dir: String,

    /// Panels per row when several assets are shown together
    pub gallery_columns: usize,

    /// Initial window size in logical pixels
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            images_dir: DEFAULT_IMAGES_DIR.to_string(),
            gallery_columns: 4,
            window_width: 1024.0,
            window_height: 768.0,
        }
    }
}

impl ViewerConfig {
    /// Default location of the config file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("asset-viewer");
        path.push("config.json");
        Some(path)
    }

    /// Load settings from `path`. A file that doesn't exist yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.images_dir, "data/3565489/images/");
        assert_eq!(config.gallery_columns, 4);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ViewerConfig::from_json(r#"{ "images_dir": "/srv/images" }"#).unwrap();

        assert_eq!(config.images_dir, "/srv/images");
        assert_eq!(config.gallery_columns, 4);
        assert_eq!(config.window_width, 1024.0);
    }

    #[test]
    fn test_json_serialization() {
        let mut config = ViewerConfig::default();
        config.gallery_columns = 2;

        let json = config.to_json().unwrap();
        assert_eq!(ViewerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_json() {
        let result = ViewerConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ViewerConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "gallery_columns": 3 }"#).unwrap();

        let config = ViewerConfig::load(&path).unwrap();
        assert_eq!(config.gallery_columns, 3);
        assert_eq!(config.images_dir, DEFAULT_IMAGES_DIR);
    }
}
