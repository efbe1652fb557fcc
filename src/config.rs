//! Application configuration
//!
//! Optional TOML file at `{config-dir}/annoncard/config.toml`:
//! ```toml
//! [splash]
//! duration_secs = 3
//! audio = true
//! assets_dir = "/usr/share/annoncard"
//!
//! [catalog]
//! seed_examples = true
//! ```
//! Every key is optional. A missing file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::splash::SPLASH_DURATION;

/// Directory name used under the platform data and config dirs
pub const APP_DIR_NAME: &str = "annoncard";
/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "ANNONCARD_DATA_DIR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    pub duration_secs: f64,
    /// Play the intro clip
    pub audio: bool,
    /// Where bundled assets (intro.mp3) live; defaults to `{data-dir}/assets`
    pub assets_dir: Option<PathBuf>,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            duration_secs: SPLASH_DURATION.as_secs_f64(),
            audio: true,
            assets_dir: None,
        }
    }
}

impl SplashConfig {
    pub fn duration(&self) -> Duration {
        if self.duration_secs.is_finite() && self.duration_secs >= 0.0 {
            Duration::from_secs_f64(self.duration_secs)
        } else {
            log::warn!(
                "Ignoring invalid splash duration {}, using default",
                self.duration_secs
            );
            SPLASH_DURATION
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Start with the example categories
    pub seed_examples: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_examples: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub splash: SplashConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load from the default location, falling back to defaults if absent
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Directory holding the bundled assets
    pub fn assets_dir(&self, data_dir: &Path) -> PathBuf {
        self.splash
            .assets_dir
            .clone()
            .unwrap_or_else(|| data_dir.join("assets"))
    }
}

/// Default config file path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR_NAME).join("config.toml"))
}

/// Resolve the data directory: explicit override, then environment, then platform default
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    default_data_dir()
}

pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|p| p.join(APP_DIR_NAME))
        .ok_or(ConfigError::DataDirNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.splash.duration(), Duration::from_secs(3));
        assert!(config.catalog.seed_examples);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[splash]\naudio = false\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(!config.splash.audio);
        assert_eq!(config.splash.duration(), SPLASH_DURATION);
        assert!(config.catalog.seed_examples);
    }

    #[test]
    fn test_full_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[splash]\nduration_secs = 0.5\nassets_dir = \"/opt/annoncard\"\n\n[catalog]\nseed_examples = false\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.splash.duration(), Duration::from_millis(500));
        assert_eq!(
            config.assets_dir(Path::new("/data")),
            PathBuf::from("/opt/annoncard")
        );
        assert!(!config.catalog.seed_examples);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[splash\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_negative_duration_uses_default() {
        let config = SplashConfig {
            duration_secs: -1.0,
            ..Default::default()
        };
        assert_eq!(config.duration(), SPLASH_DURATION);
    }

    #[test]
    fn test_assets_dir_defaults_under_data_dir() {
        let config = AppConfig::default();
        assert_eq!(
            config.assets_dir(Path::new("/data")),
            PathBuf::from("/data/assets")
        );
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/cards"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/cards"));
    }
}
