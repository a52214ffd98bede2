//! Configuration module for flashdeck
//!
//! Manages where course data lives and how navigation is laid out.
//! Configuration is stored in the user's config directory
//! (`~/.config/flashdeck/config.toml` on Linux) and can be overridden with
//! `FLASHDECK_*` environment variables.

use crate::study::Layout;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: [&str; 4] = ["data_dir", "manifest", "layout", "quiet"];

fn default_data_dir() -> PathBuf {
    PathBuf::from("Data")
}

fn default_manifest() -> String {
    "courses.json".to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FlashdeckConfig {
    /// Directory holding the manifest and flashcard files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Manifest file name, relative to `data_dir`
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Navigation levels shown before the flashcards
    #[serde(default)]
    pub layout: Layout,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for FlashdeckConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            manifest: default_manifest(),
            layout: Layout::default(),
            quiet: false,
        }
    }
}

impl FlashdeckConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                ConfigError::Message("Could not determine config directory".to_string())
            })?;

        Ok(config_dir.join("flashdeck").join("config.toml"))
    }

    /// Load configuration from the user's config file, creating a default one
    /// if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, applying `FLASHDECK_*` overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or a value is invalid.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("FLASHDECK"))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the user's config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config path cannot be determined or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| {
                    ConfigError::Message(format!("Failed to create config directory: {e}"))
                })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Apply command-line overrides; `None` keeps the configured value
    #[must_use]
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        manifest: Option<String>,
        layout: Option<Layout>,
    ) -> Self {
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        if let Some(manifest) = manifest {
            self.manifest = manifest;
        }
        if let Some(layout) = layout {
            self.layout = layout;
        }
        self
    }

    /// Full path of the manifest file
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.data_dir.join(&self.manifest)
    }

    /// Read a setting by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data_dir" => Some(self.data_dir.display().to_string()),
            "manifest" => Some(self.manifest.clone()),
            "layout" => Some(self.layout.to_string()),
            "quiet" => Some(self.quiet.to_string()),
            _ => None,
        }
    }

    /// Update a setting by key (in memory only)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown or the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "data_dir" => self.data_dir = PathBuf::from(value),
            "manifest" => self.manifest = value.to_string(),
            "layout" => {
                self.layout = match value {
                    "flat" => Layout::Flat,
                    "grouped" => Layout::Grouped,
                    _ => {
                        return Err(ConfigError::Message(format!(
                            "Invalid value for layout: '{value}'. Use 'flat' or 'grouped'"
                        )));
                    }
                };
            }
            "quiet" => {
                self.quiet = value.parse::<bool>().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    CONFIG_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TempDataDir;

    #[test]
    fn test_default_config() {
        let config = FlashdeckConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("Data"));
        assert_eq!(config.manifest, "courses.json");
        assert_eq!(config.layout, Layout::Flat);
        assert_eq!(config.manifest_path(), PathBuf::from("Data/courses.json"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDataDir::new();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = FlashdeckConfig::default();
        config.set("layout", "grouped").unwrap();
        config.set("data_dir", "/srv/cards").unwrap();
        config.save_to(&path).unwrap();

        let loaded = FlashdeckConfig::load_from(&path).unwrap();
        assert_eq!(loaded.layout, Layout::Grouped);
        assert_eq!(loaded.data_dir, PathBuf::from("/srv/cards"));
        assert_eq!(loaded.manifest, "courses.json");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDataDir::new();
        dir.write("config.toml", "quiet = true\n");

        let loaded = FlashdeckConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.quiet);
        assert_eq!(loaded.layout, Layout::Flat);
        assert_eq!(loaded.data_dir, PathBuf::from("Data"));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = FlashdeckConfig::default();

        assert!(config.set("layout", "nested").is_err());
        assert!(config.set("quiet", "maybe").is_err());
        assert!(config.set("theme", "dark").is_err());
        assert_eq!(config, FlashdeckConfig::default());
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = FlashdeckConfig::default().with_overrides(
            Some(PathBuf::from("/srv/cards")),
            None,
            Some(Layout::Grouped),
        );

        assert_eq!(config.data_dir, PathBuf::from("/srv/cards"));
        assert_eq!(config.manifest, "courses.json");
        assert_eq!(config.layout, Layout::Grouped);
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = FlashdeckConfig::default();
        assert_eq!(config.get("layout").as_deref(), Some("flat"));
        assert_eq!(config.get("quiet").as_deref(), Some("false"));
        assert!(config.get("databases").is_none());
    }
}
