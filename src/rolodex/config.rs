use crate::error::{Result, RolodexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BOOK_FILENAME: &str = "addressbook.json";

/// Configuration for rolodex, stored as config.json next to the book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Filename of the persisted address book inside the data directory.
    #[serde(default = "default_book_filename")]
    pub book_filename: String,
}

fn default_book_filename() -> String {
    DEFAULT_BOOK_FILENAME.to_string()
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            book_filename: DEFAULT_BOOK_FILENAME.to_string(),
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        let config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RolodexError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RolodexError::Serialization)?;
        fs::write(config_path, content).map_err(RolodexError::Io)?;
        Ok(())
    }

    /// Load config, writing the defaults out on first run so the file is
    /// there to edit.
    pub fn load_or_init<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        let config = Self::load(config_dir)?;
        if !config_dir.join(CONFIG_FILENAME).exists() {
            config.save(config_dir)?;
        }
        Ok(config)
    }

    pub fn book_filename(&self) -> &str {
        &self.book_filename
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RolodexConfig::default();
        assert_eq!(config.book_filename, "addressbook.json");
    }

    #[test]
    fn load_missing_config_falls_back_to_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = RolodexConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, RolodexConfig::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = RolodexConfig {
            book_filename: "contacts.json".to_string(),
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = RolodexConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_or_init_writes_defaults_on_first_run() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = RolodexConfig::load_or_init(temp_dir.path()).unwrap();

        assert_eq!(config, RolodexConfig::default());
        assert!(temp_dir.path().join("config.json").exists());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("config.json"), "{}").unwrap();

        let config = RolodexConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.book_filename, "addressbook.json");
    }
}
