use crate::errors::{AppError, AppResult};
use crate::persistence::DEFAULT_STORAGE_KEY;
use crate::view::DEFAULT_ZOOM;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
fn default_map_zoom() -> u8 {
    DEFAULT_ZOOM
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            storage_key: default_storage_key(),
            map_zoom: default_map_zoom(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        if cfg!(target_os = "windows") {
            dirs::config_dir().unwrap_or(base).join("rworkoutlog")
        } else {
            base.join(".rworkoutlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkoutlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworkoutlog.sqlite")
    }

    /// Path of a `--db` override: absolute paths are kept, relative ones
    /// live in the configuration directory.
    pub fn resolve_database(custom_db: &str) -> PathBuf {
        let p = Path::new(custom_db);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Build the configuration for `init`, writing it to disk unless running
    /// in test mode. Returns the configuration to use for the database.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let database = match custom_db {
            Some(name) => Self::resolve_database(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: database.to_string_lossy().to_string(),
            ..Self::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        if let Some(parent) = database.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
