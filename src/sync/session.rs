//! Session provider: "current user id or none".
//!
//! The authentication protocol itself is external; `auth` stores an
//! already-issued user id + access token in a session file next to the
//! config, and logout removes it.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub access_token: String,
}

impl Session {
    /// Load the active session, if any. A missing or unreadable session
    /// file simply means "not authenticated".
    pub fn load() -> Option<Session> {
        let path = Config::session_file();
        let content = fs::read_to_string(path).ok()?;
        serde_yaml::from_str(&content).ok()
    }

    pub fn save(&self) -> AppResult<()> {
        let dir = Config::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml =
            serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(Config::session_file(), yaml)?;
        Ok(())
    }

    /// Forget the stored session. Idempotent.
    pub fn clear() -> AppResult<()> {
        let path = Config::session_file();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
