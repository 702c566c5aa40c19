//! Typed login session stored next to the config file.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub refresh_token: String,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl Session {
    pub fn file(dir: &Path) -> PathBuf {
        dir.join("session.yaml")
    }

    pub fn exists(dir: &Path) -> bool {
        Self::file(dir).exists()
    }

    pub fn load(dir: &Path) -> AppResult<Self> {
        let path = Self::file(dir);
        if !path.exists() {
            return Err(AppError::SessionMissing);
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("invalid session file: {e}")))
    }

    pub fn save(&self, dir: &Path) -> AppResult<()> {
        fs::create_dir_all(dir)?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::file(dir), yaml)?;
        Ok(())
    }

    /// Remove the session file if present (logout, expired token).
    pub fn clear(dir: &Path) -> AppResult<()> {
        let path = Self::file(dir);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn is_admin(&self) -> bool {
        self.roles
            .iter()
            .any(|r| r.eq_ignore_ascii_case("admin") || r.eq_ignore_ascii_case("role_admin"))
    }
}
