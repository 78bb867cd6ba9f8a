//! Tool configuration loaded from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

const DEFAULT_MOCHA_URL: &str = "https://mocha-repository.info/song.php";

/// Configuration for one run of the tool.
///
/// ```toml
/// [mocha]
/// url = "https://mocha-repository.info/song.php"
///
/// [beatoraja]
/// root = "~/beatoraja"
/// songs = "~/beatoraja/songs"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mocha: MochaConfig,
    pub beatoraja: BeatorajaConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MochaConfig {
    /// Base URL of the Mocha ranking page.
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BeatorajaConfig {
    /// beatoraja installation root (holds songdata.db and table/).
    pub root: String,
    /// Destination directory for newly installed songs.
    pub songs: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mocha: MochaConfig::default(),
            beatoraja: BeatorajaConfig::default(),
        }
    }
}

impl Default for MochaConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_MOCHA_URL.to_string(),
        }
    }
}

impl Default for BeatorajaConfig {
    fn default() -> Self {
        Self {
            root: "~/beatoraja".to_string(),
            songs: "~/beatoraja/songs".to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParseError(e.to_string()))
    }

    /// beatoraja root with `~` expanded.
    pub fn root_path(&self) -> PathBuf {
        expand_tilde(&self.beatoraja.root)
    }

    /// Songs destination with `~` expanded.
    pub fn songs_path(&self) -> PathBuf {
        expand_tilde(&self.beatoraja.songs)
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.mocha.url, DEFAULT_MOCHA_URL);
        assert_eq!(config.beatoraja.root, "~/beatoraja");
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [beatoraja]
            root = "/opt/beatoraja"
            songs = "/opt/beatoraja/songs"
            "#,
        )
        .unwrap();
        assert_eq!(config.beatoraja.root, "/opt/beatoraja");
        // Sections not present fall back to defaults
        assert_eq!(config.mocha.url, DEFAULT_MOCHA_URL);
    }

    #[test]
    fn test_expand_tilde_absolute_path_unchanged() {
        assert_eq!(expand_tilde("/tmp/songs"), PathBuf::from("/tmp/songs"));
    }
}
