use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "profilectl";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    data_dir: PathBuf,
    accounts_dir: PathBuf,
    sessions_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;
        let data_root = dirs::data_dir()
            .ok_or_else(|| AppError::Config("unable to resolve data directory".to_string()))?;

        Self::from_roots(&config_root, &data_root)
    }

    /// Lays out the app directories under explicit roots and creates them.
    pub fn from_roots(config_root: &Path, data_root: &Path) -> AppResult<Self> {
        let config_dir = config_root.join(APP_DIR);
        let data_dir = data_root.join(APP_DIR);
        let accounts_dir = config_dir.join("accounts");
        let sessions_dir = data_dir.join("sessions");

        fs::create_dir_all(&accounts_dir)?;
        fs::create_dir_all(&sessions_dir)?;

        Ok(Self {
            config_dir,
            data_dir,
            accounts_dir,
            sessions_dir,
        })
    }

    pub fn settings_file(&self, account: &str) -> PathBuf {
        self.accounts_dir.join(format!("{account}.json"))
    }

    pub fn session_file(&self, account: &str) -> PathBuf {
        self.sessions_dir.join(format!("{account}.json"))
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
