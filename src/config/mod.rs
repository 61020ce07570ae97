use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

fn default_remote_table() -> String {
    "user_data".to_string()
}

/// App-level configuration: where the local database lives and, when the
/// user opted into sync, which remote endpoint mirrors it. Per-account
/// settings (rate, names, currency, ...) live in the store instead.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub remote_url: Option<String>,
    #[serde(default)]
    pub remote_api_key: Option<String>,
    #[serde(default = "default_remote_table")]
    pub remote_table: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            remote_url: None,
            remote_api_key: None,
            remote_table: default_remote_table(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("wagelog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".wagelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wagelog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("wagelog.sqlite")
    }

    /// Return the full path of the session file
    pub fn session_file() -> PathBuf {
        Self::config_dir().join("session.yaml")
    }

    /// Load configuration from file, or return defaults if not found or
    /// not parsable (a broken config must not brick the CLI).
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|_| {
                crate::ui::messages::warning(format!(
                    "Unreadable config file {}, using defaults",
                    path.display()
                ));
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Initialize configuration and database files.
    ///
    /// In test mode (`--test`) the config file is left untouched so test
    /// runs never clobber a real installation.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = PathBuf::from(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Default::default()
        };

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }
}
