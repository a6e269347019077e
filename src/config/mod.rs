use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{errors::ConfigError, time::DEFAULT_TIMESTAMP_FORMAT};

pub const HOME_ENV_VAR: &str = "FOOD_TRACKER_HOME";
pub const DEFAULT_ARCHIVE_NAME: &str = "items";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File name of the meal archive inside the base directory.
    pub archive_name: String,
    /// chrono pattern used to stamp new meals.
    pub timestamp_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archive_name: DEFAULT_ARCHIVE_NAME.into(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.into(),
        }
    }
}

impl Config {
    pub fn archive_path(&self, base: &Path) -> PathBuf {
        base.join(&self.archive_name)
    }
}

/// Resolves where Food Tracker keeps its files.
pub struct PathResolver;

impl PathResolver {
    /// `FOOD_TRACKER_HOME` if set, otherwise the user's documents directory.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV_VAR) {
            return PathBuf::from(custom);
        }
        dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }
}

/// Loads and saves [`Config`] as JSON inside a base directory.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            path: PathResolver::config_file_in(&base),
            base,
        }
    }

    /// Reads the configuration, falling back to defaults when the file is absent.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            tracing::debug!(path = %self.path.display(), "No config file; using defaults.");
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.base)?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension(format!("json.{TMP_SUFFIX}"));
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path());
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path());
        fs::write(manager.path(), r#"{"archive_name": "meals.json"}"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.archive_name, "meals.json");
        assert_eq!(config.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    }

    #[test]
    fn archive_path_joins_base() {
        let config = Config::default();
        assert_eq!(
            config.archive_path(Path::new("/docs")),
            PathBuf::from("/docs/items")
        );
    }
}
